//! Tolerance bands for near-budget classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::VarianceError;

/// A symmetric tolerance band around 100% execution, in percentage points.
///
/// A group whose execution rate lands within the band counts as near budget.
/// There is no default width; call sites pick one of the provided constants
/// or construct their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ToleranceBand(Decimal);

impl ToleranceBand {
    /// The tight ±1% band used on overview dashboards.
    pub const ONE_PERCENT: Self = Self(Decimal::ONE);

    /// The looser ±5% band used on department drill-downs.
    pub const FIVE_PERCENT: Self = Self(Decimal::from_parts(5, 0, 0, false, 0));

    /// Creates a band of the given width.
    ///
    /// # Errors
    ///
    /// Returns `VarianceError::NegativeTolerance` if the width is negative.
    pub fn new(percentage_points: Decimal) -> Result<Self, VarianceError> {
        if percentage_points < Decimal::ZERO {
            return Err(VarianceError::NegativeTolerance(percentage_points));
        }
        Ok(Self(percentage_points))
    }

    /// Band width in percentage points.
    #[must_use]
    pub fn points(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for ToleranceBand {
    type Error = VarianceError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ToleranceBand> for Decimal {
    fn from(band: ToleranceBand) -> Self {
        band.0
    }
}
