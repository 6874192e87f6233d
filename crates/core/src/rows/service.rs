//! Row normalization service.

use super::types::{FinancialRow, RawRecord, UNSPECIFIED};

/// Normalizes raw upstream rows into typed financial rows.
///
/// This is the only ingestion point of the engine: everything downstream
/// assumes rows have already passed through here.
pub struct RowNormalizer;

impl RowNormalizer {
    /// Normalizes a batch of raw rows.
    ///
    /// Total over malformed input: unusable amounts and years degrade to `0`,
    /// blank entity names degrade to [`UNSPECIFIED`]. No rows are dropped;
    /// an all-default row still contributes to counts at the default key.
    #[must_use]
    pub fn normalize(rows: &[RawRecord]) -> Vec<FinancialRow> {
        rows.iter().map(Self::normalize_record).collect()
    }

    /// Normalizes a single raw record.
    #[must_use]
    pub fn normalize_record(record: &RawRecord) -> FinancialRow {
        FinancialRow {
            fiscal_year: record.fiscal_year.to_year(),
            entity: Self::clean_entity(record.entity.as_deref()),
            amount: record.amount.to_amount(),
        }
    }

    fn clean_entity(name: Option<&str>) -> String {
        match name.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => UNSPECIFIED.to_string(),
        }
    }
}
