// File: crates/overlay-core/src/error.rs
// Summary: Error type for overlay construction and geometry building.

use thiserror::Error;

/// Result type alias for overlay operations.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Errors raised when the host hands the overlay inconsistent input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// A visible child reported a data index outside the dataset.
    #[error("data index {index} out of range for dataset of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// The selected index does not address a data point.
    #[error("selected index {index} out of range for dataset of {len} points")]
    SelectionOutOfRange { index: usize, len: usize },

    /// A data point value is NaN or infinite.
    #[error("value at index {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    /// Density scale must be finite and strictly positive.
    #[error("invalid density scale: {0}")]
    InvalidDensity(f32),
}
