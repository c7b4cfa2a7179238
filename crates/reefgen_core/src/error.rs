//! Error types for the reef generation engine.
//!
//! Every fallible engine operation returns [`GenError`]. Automaton rules
//! themselves are total and never produce one.

use thiserror::Error;

/// Main error type for reefgen_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// Grid dimensions that cannot hold a single cell.
    #[error("Invalid grid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: u16, height: u16 },

    /// Coordinate outside `[0, width) x [0, height)`.
    #[error("Coordinate ({x}, {y}) out of range for {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    /// Pipeline stage invoked before its prerequisite stage ran.
    #[error("Invalid generator state: expected {expected}, found {found}")]
    InvalidState {
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for reefgen_core operations.
pub type Result<T> = std::result::Result<T, GenError>;

impl GenError {
    /// Creates a new out-of-bounds error.
    #[must_use]
    pub fn out_of_bounds(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}
