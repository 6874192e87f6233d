//! Dashboard report assembly.
//!
//! This module composes the whole pipeline: normalize raw rows, group and
//! join them, classify variance, reduce breakdowns, and build trends, in one
//! pure call.

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::{BreakdownSlice, DashboardReport, GroupPerformance, ReportOptions};
