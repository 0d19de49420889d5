//! Error types for vsm-geometry.

use thiserror::Error;

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in geometry operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A polygon needs at least one vertex.
    #[error("invalid polygon order: {0}")]
    InvalidOrder(u32),

    /// Radius must be finite and non-negative.
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),

    /// Color scale input was NaN or infinite.
    #[error("invalid color value: {0}")]
    InvalidColorValue(f64),
}
