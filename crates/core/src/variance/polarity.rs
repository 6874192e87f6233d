//! Variance polarity: whether a variance is good or bad news.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of the ledger a row set belongs to.
///
/// The variance sign convention is fixed (actuals minus budget, positive
/// means more money moved than planned); what that sign *means* flips
/// between the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerSide {
    /// Spending against an appropriation. Over is bad.
    Expense,
    /// Collections against a projection. Over is good.
    Revenue,
}

/// Whether a variance works in the municipality's favor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Favorability {
    /// The variance works in the municipality's favor.
    Favorable,
    /// The variance works against the municipality.
    Unfavorable,
    /// No variance.
    OnTarget,
}

impl Favorability {
    /// Assesses a variance (actuals minus budget) for the given ledger side.
    ///
    /// For expenses, overspending is unfavorable and underspending favorable.
    /// For revenues, over-collection is favorable and a shortfall unfavorable.
    #[must_use]
    pub fn assess(variance: Decimal, side: LedgerSide) -> Self {
        if variance.is_zero() {
            return Self::OnTarget;
        }

        let over = variance > Decimal::ZERO;
        match side {
            LedgerSide::Expense => {
                if over {
                    Self::Unfavorable
                } else {
                    Self::Favorable
                }
            }
            LedgerSide::Revenue => {
                if over {
                    Self::Favorable
                } else {
                    Self::Unfavorable
                }
            }
        }
    }
}
