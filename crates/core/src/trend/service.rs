//! Multi-year trend construction.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use super::types::{TrendSeries, YearChange, YearSummary};
use crate::aggregate::AggregateService;
use crate::rows::FinancialRow;

/// Service building multi-year trend series.
pub struct TrendService;

impl TrendService {
    /// Builds yearly totals over the union of years on either side.
    ///
    /// Ascending by fiscal year; a year with data on only one side appears
    /// with `0` for the other.
    #[must_use]
    pub fn build_trend(
        budget_rows: &[FinancialRow],
        actual_rows: &[FinancialRow],
    ) -> Vec<YearSummary> {
        let budget_by_year = AggregateService::sum_by_year(budget_rows);
        let actuals_by_year = AggregateService::sum_by_year(actual_rows);

        let mut years: BTreeSet<i32> = budget_by_year.keys().copied().collect();
        years.extend(actuals_by_year.keys().copied());

        years
            .into_iter()
            .map(|fiscal_year| {
                let budget = budget_by_year.get(&fiscal_year).copied().unwrap_or_default();
                let actuals = actuals_by_year.get(&fiscal_year).copied().unwrap_or_default();
                YearSummary {
                    fiscal_year,
                    budget,
                    actuals,
                    percent_spent: AggregateService::execution_rate(budget, actuals),
                }
            })
            .collect()
    }

    /// Computes year-over-year changes for an ordered series.
    ///
    /// The first year's changes are always `None`; later years get `None`
    /// for any metric whose previous-year total is zero.
    #[must_use]
    pub fn year_over_year(years: &[YearSummary]) -> Vec<YearChange> {
        let mut changes = Vec::with_capacity(years.len());
        let mut prev: Option<&YearSummary> = None;
        for year in years {
            changes.push(YearChange {
                fiscal_year: year.fiscal_year,
                budget_pct: prev.and_then(|p| Self::pct_change(p.budget, year.budget)),
                actuals_pct: prev.and_then(|p| Self::pct_change(p.actuals, year.actuals)),
            });
            prev = Some(year);
        }
        changes
    }

    /// Builds the full trend series in one call.
    #[must_use]
    pub fn series(budget_rows: &[FinancialRow], actual_rows: &[FinancialRow]) -> TrendSeries {
        let years = Self::build_trend(budget_rows, actual_rows);
        let changes = Self::year_over_year(&years);
        TrendSeries { years, changes }
    }

    /// Percentage change from `prev` to `curr` to 2 dp, `None` when `prev`
    /// is zero (undefined, not 0%).
    #[must_use]
    pub fn pct_change(prev: Decimal, curr: Decimal) -> Option<Decimal> {
        if prev.is_zero() {
            None
        } else {
            Some(((curr - prev) / prev * Decimal::ONE_HUNDRED).round_dp(2))
        }
    }
}
