// Wed Jan 15 2026 - Alex

use super::CommandError;
use colored::Colorize;
use std::error::Error;

pub struct ErrorDisplay {
    color_enabled: bool,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            color_enabled: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.color_enabled = false;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.color_enabled = enabled;
        self
    }

    pub fn format_simple<E: Error>(&self, error: &E) -> String {
        if self.color_enabled {
            format!("{} {}", "Error:".red(), error)
        } else {
            format!("Error: {}", error)
        }
    }

    /// Unrecognized actions print bare, everything else gets the error prefix.
    pub fn format_command(&self, error: &CommandError) -> String {
        match error {
            CommandError::Unrecognized(_) if self.color_enabled => error.to_string().yellow().to_string(),
            CommandError::Unrecognized(_) => error.to_string(),
            _ => self.format_simple(error),
        }
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::LayoutError;

    #[test]
    fn test_plain_formatting() {
        let display = ErrorDisplay::new().without_colors();

        let duplicate = CommandError::from(LayoutError::DuplicateName("int".to_string()));
        assert_eq!(display.format_command(&duplicate), "Error: el tipo int ya ha sido definido.");

        let undefined = CommandError::from(LayoutError::UndefinedType("foo".to_string()));
        assert_eq!(display.format_command(&undefined), "Error: el tipo foo no ha sido definido.");

        let unknown = CommandError::Unrecognized("BORRAR".to_string());
        assert_eq!(display.format_command(&unknown), "Acción no reconocida.");
    }
}
