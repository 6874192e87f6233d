//! Budget aggregation and variance engine for Civiscope.
//!
//! This crate contains pure aggregation logic with ZERO web or database dependencies.
//! All domain types, normalization rules, and calculations live here.
//!
//! # Modules
//!
//! - `rows` - Raw record normalization into typed financial rows
//! - `fiscal` - Fiscal year calendars and labeling
//! - `aggregate` - Entity-level and year-level summation and joins
//! - `variance` - Variance classification against tolerance bands
//! - `distribution` - Top-N breakdowns and share-of-total percentages
//! - `trend` - Multi-year series and year-over-year change
//! - `dashboard` - Report assembly from raw rows to dashboard payload

pub mod aggregate;
pub mod dashboard;
pub mod distribution;
pub mod fiscal;
pub mod rows;
pub mod trend;
pub mod variance;
