//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Nothing to place, or no room in a row to place it
    #[error("cannot lay out {pole_count} pole(s) at {poles_per_row} per row")]
    EmptyGrid {
        pole_count: usize,
        poles_per_row: usize,
    },

    /// A computed dimension overflowed or was fed a bad constant
    #[error("layout dimension '{dimension}' is not finite ({value})")]
    NonFinite { dimension: &'static str, value: f64 },
}

impl LayoutError {
    /// Create an empty grid error
    pub fn empty_grid(pole_count: usize, poles_per_row: usize) -> Self {
        Self::EmptyGrid {
            pole_count,
            poles_per_row,
        }
    }

    pub(crate) fn check_finite(dimension: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { dimension, value })
        }
    }
}
