//! Grouping, summation, and budget/actuals joins.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::types::{GroupSummary, OverallSummary};
use crate::rows::FinancialRow;

/// Aggregation service for grouping and joining financial rows.
pub struct AggregateService;

impl AggregateService {
    /// Sums row amounts per entity name.
    ///
    /// Keys keep their post-trim casing; names differing only by case are
    /// distinct groups (see [`super::quality`] for surfacing those).
    #[must_use]
    pub fn sum_by_entity(rows: &[FinancialRow]) -> BTreeMap<String, Decimal> {
        let mut totals = BTreeMap::new();
        for row in rows {
            *totals.entry(row.entity.clone()).or_insert(Decimal::ZERO) += row.amount;
        }
        totals
    }

    /// Sums row amounts per fiscal year.
    #[must_use]
    pub fn sum_by_year(rows: &[FinancialRow]) -> BTreeMap<i32, Decimal> {
        let mut totals = BTreeMap::new();
        for row in rows {
            *totals.entry(row.fiscal_year).or_insert(Decimal::ZERO) += row.amount;
        }
        totals
    }

    /// Joins budget and actuals totals over the union of their keys.
    ///
    /// A key present on only one side gets `0` for the other. Every key
    /// appearing in either map is represented exactly once, in ascending
    /// key order.
    #[must_use]
    pub fn join_by_key(
        budget: &BTreeMap<String, Decimal>,
        actuals: &BTreeMap<String, Decimal>,
    ) -> Vec<GroupSummary> {
        let mut keys: BTreeSet<&String> = budget.keys().collect();
        keys.extend(actuals.keys());

        keys.into_iter()
            .map(|key| {
                Self::summarize(
                    key.clone(),
                    budget.get(key).copied().unwrap_or_default(),
                    actuals.get(key).copied().unwrap_or_default(),
                )
            })
            .collect()
    }

    /// Groups both row sets by entity and joins them into summaries.
    #[must_use]
    pub fn group_summaries(
        budget_rows: &[FinancialRow],
        actual_rows: &[FinancialRow],
    ) -> Vec<GroupSummary> {
        let budget = Self::sum_by_entity(budget_rows);
        let actuals = Self::sum_by_entity(actual_rows);
        Self::join_by_key(&budget, &actuals)
    }

    /// Builds a summary for one key from its joined totals.
    #[must_use]
    pub fn summarize(key: String, budget: Decimal, actuals: Decimal) -> GroupSummary {
        GroupSummary {
            key,
            budget,
            actuals,
            variance: actuals - budget,
            percent_spent: Self::execution_rate(budget, actuals),
        }
    }

    /// Citywide roll-up across all rows on both sides.
    #[must_use]
    pub fn overall(budget_rows: &[FinancialRow], actual_rows: &[FinancialRow]) -> OverallSummary {
        let budget: Decimal = budget_rows.iter().map(|r| r.amount).sum();
        let actuals: Decimal = actual_rows.iter().map(|r| r.amount).sum();
        OverallSummary {
            budget,
            actuals,
            variance: actuals - budget,
            percent_spent: Self::execution_rate(budget, actuals),
        }
    }

    /// Execution rate: actuals as a percentage of budget, rounded to 2 dp.
    ///
    /// Zero when the budget is not positive, so division by zero never
    /// reaches callers. Floored at zero, so refund-dominated actuals do not
    /// produce a negative rate.
    #[must_use]
    pub fn execution_rate(budget: Decimal, actuals: Decimal) -> Decimal {
        if budget > Decimal::ZERO {
            (actuals / budget * Decimal::ONE_HUNDRED)
                .round_dp(2)
                .max(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }
}
