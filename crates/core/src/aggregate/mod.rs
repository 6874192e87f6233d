//! Entity-level and year-level summation and joins.

pub mod quality;
pub mod service;
pub mod types;


pub use quality::case_insensitive_collisions;
pub use service::AggregateService;
pub use types::{GroupSummary, OverallSummary};
