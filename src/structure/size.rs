// Tue Jan 13 2026 - Alex

use crate::structure::{LayoutError, LayoutResult};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Size {
    value: usize,
}

impl Size {
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn from_signed(value: i64) -> LayoutResult<Self> {
        if value < 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "el tamaño no puede ser negativo (recibido {})",
                value
            )));
        }
        usize::try_from(value)
            .map(Self::new)
            .map_err(|_| LayoutError::overflow("el tamaño"))
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    pub fn checked_add(self, other: Size) -> LayoutResult<Size> {
        self.value
            .checked_add(other.value)
            .map(Self::new)
            .ok_or_else(|| LayoutError::overflow("el tamaño"))
    }

    pub fn saturating_sub(self, other: Size) -> Size {
        Self::new(self.value.saturating_sub(other.value))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<usize> for Size {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}
