// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutError, LayoutResult};
use serde::Serialize;
use std::fmt;

/// A byte boundary. Always a positive power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Alignment {
    value: usize,
}

impl Alignment {
    pub fn new(value: usize) -> LayoutResult<Self> {
        if value == 0 || !value.is_power_of_two() {
            return Err(LayoutError::InvalidArgument(format!(
                "la alineación {} no es una potencia de dos positiva",
                value
            )));
        }
        Ok(Self { value })
    }

    pub fn from_signed(value: i64) -> LayoutResult<Self> {
        if value <= 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "la alineación debe ser positiva (recibido {})",
                value
            )));
        }
        let value = usize::try_from(value).map_err(|_| LayoutError::overflow("la alineación"))?;
        Self::new(value)
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    pub fn is_aligned(&self, offset: usize) -> bool {
        offset & (self.value - 1) == 0
    }

    /// Rounds `offset` up to the next multiple of this alignment.
    pub fn align(&self, offset: usize) -> LayoutResult<usize> {
        offset
            .checked_add(self.value - 1)
            .map(|v| v & !(self.value - 1))
            .ok_or_else(|| LayoutError::overflow("el relleno"))
    }

    pub fn padding_for(&self, offset: usize) -> LayoutResult<usize> {
        Ok(self.align(offset)? - offset)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_and_non_power_of_two() {
        assert!(matches!(Alignment::new(0), Err(LayoutError::InvalidArgument(_))));
        assert!(matches!(Alignment::new(3), Err(LayoutError::InvalidArgument(_))));
        assert!(matches!(Alignment::from_signed(-4), Err(LayoutError::InvalidArgument(_))));
        assert_eq!(Alignment::new(16).unwrap().as_usize(), 16);
    }

    #[test]
    fn test_align_rounds_up() {
        let four = Alignment::new(4).unwrap();
        assert_eq!(four.align(0).unwrap(), 0);
        assert_eq!(four.align(1).unwrap(), 4);
        assert_eq!(four.align(8).unwrap(), 8);
        assert_eq!(four.padding_for(13).unwrap(), 3);
        assert!(four.is_aligned(12));
        assert!(!four.is_aligned(13));
    }

    #[test]
    fn test_align_overflow_is_an_error() {
        let eight = Alignment::new(8).unwrap();
        assert!(eight.align(usize::MAX).is_err());
    }
}
