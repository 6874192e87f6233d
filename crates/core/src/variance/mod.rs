//! Variance classification against tolerance bands.

pub mod band;
pub mod classify;
pub mod error;
pub mod polarity;


pub use band::ToleranceBand;
pub use classify::{ClassificationTally, VarianceClass};
pub use error::VarianceError;
pub use polarity::{Favorability, LedgerSide};
