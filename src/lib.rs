// Wed Jan 15 2026 - Alex

pub mod config;
pub mod structure;
pub mod ui;

pub use config::Config;
pub use structure::{DataType, DescriptionReport, LayoutCalculator, LayoutError, SharedRegistry, TypeRegistry};
pub use ui::{Command, Session};
