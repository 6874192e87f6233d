//! Raw record normalization into typed financial rows.

pub mod service;
pub mod types;


pub use service::RowNormalizer;
pub use types::{FinancialRow, RawRecord, RawValue, UNSPECIFIED};
