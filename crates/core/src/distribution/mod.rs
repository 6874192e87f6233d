//! Top-N breakdowns and share-of-total percentages.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::DistributionService;
pub use types::{DistributionSlice, OTHER_LABEL, PercentCap};
