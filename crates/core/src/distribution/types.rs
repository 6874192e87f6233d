//! Distribution types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Name given to the slice that absorbs everything past the top N.
pub const OTHER_LABEL: &str = "Other";

/// One member of a top-N+Other partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionSlice {
    /// Slice name (an entity name, or [`OTHER_LABEL`]).
    pub name: String,
    /// Slice value.
    pub value: Decimal,
}

impl DistributionSlice {
    /// Creates a named slice.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Display cap applied to percentages by presentation callers.
///
/// The underlying math is uncapped; different screens in the portal cap
/// execution rates differently, so the ceiling is their call to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentCap {
    /// No ceiling; values above 100 flow through.
    Uncapped,
    /// Ceiling at 100.
    Hundred,
    /// Custom ceiling (999 is common on compact widgets).
    Custom(Decimal),
}

impl PercentCap {
    /// Applies the cap to a computed percentage.
    #[must_use]
    pub fn apply(self, percent: Decimal) -> Decimal {
        match self {
            Self::Uncapped => percent,
            Self::Hundred => percent.min(Decimal::ONE_HUNDRED),
            Self::Custom(ceiling) => percent.min(ceiling),
        }
    }
}
