//! Dashboard report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::OverallSummary;
use crate::distribution::PercentCap;
use crate::trend::TrendSeries;
use crate::variance::{ClassificationTally, ToleranceBand, VarianceClass};

/// Per-group performance line for dashboard tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPerformance {
    /// Grouping key (department, vendor, category, or source name).
    pub key: String,
    /// Total budgeted amount.
    pub budget: Decimal,
    /// Total actual amount.
    pub actuals: Decimal,
    /// Actuals minus budget.
    pub variance: Decimal,
    /// Execution rate, with the report's display cap applied.
    pub percent_spent: Decimal,
    /// Budget execution status; `None` for groups with neither budget nor
    /// actuals.
    pub status: Option<VarianceClass>,
}

/// One slice of an entity breakdown with its share of the full total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    /// Slice name (an entity name, or "Other").
    pub name: String,
    /// Slice value.
    pub value: Decimal,
    /// Share of the pre-reduction total, as a percentage.
    pub share_pct: Decimal,
}

/// Options controlling report assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Tolerance band for near-budget classification.
    pub tolerance: ToleranceBand,
    /// Number of slices kept before folding the rest into "Other".
    pub top_n: usize,
    /// Display cap applied to group and overall execution rates.
    ///
    /// Classification always runs on the uncapped rate.
    pub cap: PercentCap,
}

impl ReportOptions {
    /// Creates options with the given tolerance band, keeping ten slices and
    /// leaving percentages uncapped.
    #[must_use]
    pub fn new(tolerance: ToleranceBand) -> Self {
        Self {
            tolerance,
            top_n: 10,
            cap: PercentCap::Uncapped,
        }
    }

    /// Sets the number of slices kept before folding into "Other".
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Sets the display cap applied to execution rates.
    #[must_use]
    pub const fn with_cap(mut self, cap: PercentCap) -> Self {
        self.cap = cap;
        self
    }
}

/// A complete dashboard payload for one budget/actuals row set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Citywide roll-up.
    pub overall: OverallSummary,
    /// Per-group performance, sorted by actuals descending.
    pub groups: Vec<GroupPerformance>,
    /// Classification counts across the groups.
    pub tally: ClassificationTally,
    /// Top spending entities by actuals, reduced to top-N+Other.
    pub top_spenders: Vec<BreakdownSlice>,
    /// Multi-year budget and actuals trend.
    pub trend: TrendSeries,
}
