//! Top-N reduction and share-of-total percentages.

use rust_decimal::Decimal;

use super::types::{DistributionSlice, OTHER_LABEL};

/// Service reducing distributions for pies and legends.
pub struct DistributionService;

impl DistributionService {
    /// Keeps the `n` largest slices and folds the rest into one
    /// [`OTHER_LABEL`] slice.
    ///
    /// Slices are sorted descending by value (ties keep their input order).
    /// When the folded remainder sums to zero or less, no "Other" slice is
    /// emitted at all; a remainder of exactly zero therefore still conserves
    /// the input total, while a negative remainder is dropped from display.
    #[must_use]
    pub fn top_n_plus_other(mut slices: Vec<DistributionSlice>, n: usize) -> Vec<DistributionSlice> {
        slices.sort_by(|a, b| b.value.cmp(&a.value));
        if slices.len() <= n {
            return slices;
        }

        let remainder = slices.split_off(n);
        let other: Decimal = remainder.iter().map(|s| s.value).sum();
        if other > Decimal::ZERO {
            slices.push(DistributionSlice::new(OTHER_LABEL, other));
        }
        slices
    }

    /// Share of `total` represented by `value`, as a percentage to 2 dp.
    ///
    /// Zero when the total is zero or negative, so division by zero never
    /// reaches callers. Uncapped otherwise; apply a
    /// [`super::types::PercentCap`] at the display edge if needed.
    #[must_use]
    pub fn share_pct(value: Decimal, total: Decimal) -> Decimal {
        if total > Decimal::ZERO {
            (value / total * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        }
    }
}
