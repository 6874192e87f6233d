//! Variance error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Variance-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VarianceError {
    /// Tolerance bands are absolute widths in percentage points.
    #[error("Tolerance must be non-negative, got {0}")]
    NegativeTolerance(Decimal),
}
