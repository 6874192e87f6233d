//! Aggregation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated budget vs actuals for one grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Grouping key (department, vendor, category, or source name).
    pub key: String,
    /// Total budgeted amount.
    pub budget: Decimal,
    /// Total actual amount.
    pub actuals: Decimal,
    /// Actuals minus budget. Positive means overspending.
    pub variance: Decimal,
    /// Execution rate: actuals as a percentage of budget.
    ///
    /// Zero when the budget is zero or negative; floored at zero; may
    /// exceed 100.
    pub percent_spent: Decimal,
}

/// Citywide roll-up across all groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallSummary {
    /// Total budgeted amount across all rows.
    pub budget: Decimal,
    /// Total actual amount across all rows.
    pub actuals: Decimal,
    /// Actuals minus budget.
    pub variance: Decimal,
    /// Execution rate across all rows.
    pub percent_spent: Decimal,
}
