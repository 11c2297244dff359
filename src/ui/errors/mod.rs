// Wed Jan 15 2026 - Alex

pub mod display;

pub use display::ErrorDisplay;

use crate::structure::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("comando mal formado: {0}")]
    Malformed(String),

    #[error("Acción no reconocida.")]
    Unrecognized(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("no se pudo serializar el reporte: {0}")]
    Render(#[from] serde_json::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;
