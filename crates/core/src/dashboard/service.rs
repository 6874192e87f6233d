//! Dashboard report assembly.

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::types::{BreakdownSlice, DashboardReport, GroupPerformance, ReportOptions};
use crate::aggregate::AggregateService;
use crate::distribution::{DistributionService, DistributionSlice};
use crate::rows::{FinancialRow, RawRecord, RowNormalizer};
use crate::trend::TrendService;
use crate::variance::{ClassificationTally, VarianceClass};

/// Service assembling complete dashboard reports from raw rows.
pub struct DashboardService;

impl DashboardService {
    /// Builds a dashboard report from raw budget and actuals rows.
    ///
    /// Pure and deterministic: identical inputs produce identical reports,
    /// bit for bit. Empty inputs produce a structurally empty report with
    /// zeroed totals and empty collections, never an error.
    #[must_use]
    #[instrument(skip_all, fields(budget_rows = budget.len(), actual_rows = actuals.len()))]
    pub fn build(
        budget: &[RawRecord],
        actuals: &[RawRecord],
        options: &ReportOptions,
    ) -> DashboardReport {
        let budget_rows = RowNormalizer::normalize(budget);
        let actual_rows = RowNormalizer::normalize(actuals);

        let summaries = AggregateService::group_summaries(&budget_rows, &actual_rows);
        let tally = ClassificationTally::tally(&summaries, options.tolerance);

        let mut groups: Vec<GroupPerformance> = summaries
            .into_iter()
            .map(|summary| {
                let status = VarianceClass::classify(&summary, options.tolerance);
                GroupPerformance {
                    key: summary.key,
                    budget: summary.budget,
                    actuals: summary.actuals,
                    variance: summary.variance,
                    percent_spent: options.cap.apply(summary.percent_spent),
                    status,
                }
            })
            .collect();
        groups.sort_by(|a, b| b.actuals.cmp(&a.actuals).then_with(|| a.key.cmp(&b.key)));

        let mut overall = AggregateService::overall(&budget_rows, &actual_rows);
        overall.percent_spent = options.cap.apply(overall.percent_spent);

        let top_spenders = Self::breakdown_by_entity(&actual_rows, options.top_n);
        let trend = TrendService::series(&budget_rows, &actual_rows);

        debug!(
            groups = groups.len(),
            years = trend.years.len(),
            classified = tally.classified(),
            "dashboard report assembled"
        );

        DashboardReport {
            overall,
            groups,
            tally,
            top_spenders,
            trend,
        }
    }

    /// Groups rows by entity and reduces them to a top-N+Other breakdown.
    ///
    /// Shares are computed against the full pre-reduction total, so a folded
    /// "Other" slice carries its true share rather than a share of what
    /// happens to be displayed.
    #[must_use]
    pub fn breakdown_by_entity(rows: &[FinancialRow], top_n: usize) -> Vec<BreakdownSlice> {
        let totals = AggregateService::sum_by_entity(rows);
        let total: Decimal = totals.values().copied().sum();

        let slices: Vec<DistributionSlice> = totals
            .into_iter()
            .map(|(name, value)| DistributionSlice::new(name, value))
            .collect();

        DistributionService::top_n_plus_other(slices, top_n)
            .into_iter()
            .map(|slice| BreakdownSlice {
                share_pct: DistributionService::share_pct(slice.value, total),
                name: slice.name,
                value: slice.value,
            })
            .collect()
    }
}
