//! Trend series types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget and actuals totals for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Fiscal year.
    pub fiscal_year: i32,
    /// Total budgeted amount for the year.
    pub budget: Decimal,
    /// Total actual amount for the year.
    pub actuals: Decimal,
    /// Execution rate for the year.
    pub percent_spent: Decimal,
}

/// Year-over-year percentage change into one fiscal year.
///
/// A change is `None` where it is undefined: the first year of a series, or
/// any year whose predecessor total is zero. `None` serializes as `null` and
/// must stay distinguishable from an actual 0% change downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearChange {
    /// Fiscal year the change leads into.
    pub fiscal_year: i32,
    /// Budget change versus the previous year.
    pub budget_pct: Option<Decimal>,
    /// Actuals change versus the previous year.
    pub actuals_pct: Option<Decimal>,
}

/// A multi-year trend: yearly totals and the changes between them.
///
/// Both vectors are ascending by fiscal year and aligned index for index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Yearly totals.
    pub years: Vec<YearSummary>,
    /// Year-over-year changes, one per entry in `years`.
    pub changes: Vec<YearChange>,
}
