//! Three-way budget execution classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::band::ToleranceBand;
use crate::aggregate::GroupSummary;

/// Budget execution classification for one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceClass {
    /// Actuals fall short of budget beyond the tolerance band.
    UnderBudget,
    /// Execution lands within the tolerance band around 100%.
    NearBudget,
    /// Actuals exceed budget beyond the tolerance band.
    OverBudget,
}

impl VarianceClass {
    /// Classifies a group summary against a tolerance band.
    ///
    /// Returns `None` when the group has neither budget nor actuals: with
    /// nothing planned and nothing moved there is no comparison to make, and
    /// such groups are excluded from tallies rather than defaulting to
    /// under budget.
    #[must_use]
    pub fn classify(summary: &GroupSummary, band: ToleranceBand) -> Option<Self> {
        if summary.budget.is_zero() && summary.actuals.is_zero() {
            return None;
        }

        let distance = (summary.percent_spent - Decimal::ONE_HUNDRED).abs();
        if distance <= band.points() {
            Some(Self::NearBudget)
        } else if summary.variance > Decimal::ZERO {
            Some(Self::OverBudget)
        } else {
            Some(Self::UnderBudget)
        }
    }
}

/// Counts of classified groups per class.
///
/// Groups that [`VarianceClass::classify`] declines to classify are not
/// counted anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationTally {
    /// Groups under budget.
    pub under: usize,
    /// Groups near budget.
    pub near: usize,
    /// Groups over budget.
    pub over: usize,
}

impl ClassificationTally {
    /// Tallies classifications across a set of group summaries.
    #[must_use]
    pub fn tally(summaries: &[GroupSummary], band: ToleranceBand) -> Self {
        let mut tally = Self::default();
        for summary in summaries {
            match VarianceClass::classify(summary, band) {
                Some(VarianceClass::UnderBudget) => tally.under += 1,
                Some(VarianceClass::NearBudget) => tally.near += 1,
                Some(VarianceClass::OverBudget) => tally.over += 1,
                None => {}
            }
        }
        tally
    }

    /// Total number of groups that received a classification.
    #[must_use]
    pub fn classified(&self) -> usize {
        self.under + self.near + self.over
    }
}
