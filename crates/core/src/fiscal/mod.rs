//! Fiscal year calendars and labeling.

pub mod calendar;

pub use calendar::FiscalCalendar;
