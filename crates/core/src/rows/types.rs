//! Raw and normalized row types.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Sentinel entity name substituted for blank or missing names.
pub const UNSPECIFIED: &str = "Unspecified";

/// A loosely-typed scalar field as it arrives from upstream row JSON.
///
/// Upstream exports are not consistently typed: amounts arrive as numbers,
/// numeric strings, nulls, or outright garbage. `RawValue` captures whatever
/// shape came in; coercion to a typed value happens in normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A JSON number.
    Number(f64),
    /// A string, possibly numeric ("1200.50", "2024").
    Text(String),
    /// Anything else (null, bool, array, object).
    Other(serde_json::Value),
}

impl Default for RawValue {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

impl RawValue {
    /// Coerces this value to a monetary amount.
    ///
    /// Numbers must be finite; strings are trimmed and parsed as plain or
    /// scientific decimals. Anything unusable degrades to zero. Negative
    /// amounts (refunds) pass through unchanged.
    #[must_use]
    pub fn to_amount(&self) -> Decimal {
        match self {
            Self::Number(value) => Decimal::from_f64(*value).unwrap_or(Decimal::ZERO),
            Self::Text(text) => parse_decimal(text),
            Self::Other(_) => Decimal::ZERO,
        }
    }

    /// Coerces this value to a fiscal year, truncating fractional digits.
    ///
    /// Unusable values degrade to year `0`.
    #[must_use]
    pub fn to_year(&self) -> i32 {
        self.to_amount().trunc().to_i32().unwrap_or(0)
    }
}

fn parse_decimal(text: &str) -> Decimal {
    let trimmed = text.trim();
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// One row as fetched from the upstream query layer, before normalization.
///
/// The entity column goes by different names across the portal's tables;
/// all of them deserialize into `entity`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Fiscal year, in whatever shape the source provided.
    #[serde(default)]
    pub fiscal_year: RawValue,
    /// Entity name (department, vendor, category, or revenue source).
    #[serde(
        default,
        alias = "department_name",
        alias = "vendor",
        alias = "category",
        alias = "source",
        alias = "name"
    )]
    pub entity: Option<String>,
    /// Amount, in whatever shape the source provided.
    #[serde(default)]
    pub amount: RawValue,
}

/// One normalized budget, actual, revenue, or transaction line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRow {
    /// Fiscal year the row belongs to.
    pub fiscal_year: i32,
    /// Department, vendor, category, or revenue source name.
    pub entity: String,
    /// Signed amount. Negative amounts flow through sums unchanged.
    pub amount: Decimal,
}

impl From<FinancialRow> for RawRecord {
    fn from(row: FinancialRow) -> Self {
        Self {
            fiscal_year: RawValue::Number(f64::from(row.fiscal_year)),
            entity: Some(row.entity),
            amount: RawValue::Text(row.amount.to_string()),
        }
    }
}
