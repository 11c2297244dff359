// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("el tipo {0} ya ha sido definido.")]
    DuplicateName(String),
    #[error("el tipo {0} no ha sido definido.")]
    UndefinedType(String),
    #[error("argumento inválido: {0}")]
    InvalidArgument(String),
    #[error("el tipo {0} debe tener al menos un miembro.")]
    EmptyAggregate(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

impl LayoutError {
    pub(crate) fn overflow(what: &str) -> Self {
        Self::InvalidArgument(format!("desbordamiento al calcular {}", what))
    }
}
