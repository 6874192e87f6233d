//! Multi-year series and year-over-year change.

pub mod service;
pub mod types;


pub use service::TrendService;
pub use types::{TrendSeries, YearChange, YearSummary};
