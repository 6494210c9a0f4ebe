//! Error type for the geometry generators.

use thiserror::Error;

/// Errors produced by the geometry generators.
///
/// Every failure is deterministic: the same inputs fail the same way, and
/// callers can always validate ahead of the call instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A parameter was outside the domain of the generator (zero or negative
    /// side count, non-positive scale or rect dimension).
    #[error("invalid {name}: {value} (must be positive)")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Reject non-positive (or NaN) values for a parameter.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter { name, value })
    }
}
