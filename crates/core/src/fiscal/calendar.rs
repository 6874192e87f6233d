//! Fiscal calendar arithmetic.

use chrono::{Datelike, Month, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A municipal fiscal calendar anchored at a start month.
///
/// Many municipalities run July-to-June fiscal years. A fiscal year that
/// starts in any month other than January is named after the calendar year
/// it ends in: with a July start, FY2024 runs 2023-07-01 through 2024-06-30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalCalendar {
    /// Month the fiscal year starts in (1-12).
    start_month: u32,
}

impl FiscalCalendar {
    /// Creates a calendar starting in the given month.
    #[must_use]
    pub fn new(start: Month) -> Self {
        Self {
            start_month: start.number_from_month(),
        }
    }

    /// Creates a calendar aligned to the calendar year (January start).
    #[must_use]
    pub fn calendar_year() -> Self {
        Self::new(Month::January)
    }

    /// Month number the fiscal year starts in (1-12).
    #[must_use]
    pub fn start_month(self) -> u32 {
        self.start_month
    }

    /// Returns the fiscal year the given date falls in.
    #[must_use]
    pub fn fiscal_year_of(self, date: NaiveDate) -> i32 {
        if self.start_month == 1 || date.month() < self.start_month {
            date.year()
        } else {
            date.year() + 1
        }
    }

    /// Returns the first and last day of the given fiscal year.
    ///
    /// Returns `None` if the year falls outside the representable date range.
    #[must_use]
    pub fn span(self, fiscal_year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let start_year = if self.start_month == 1 {
            fiscal_year
        } else {
            fiscal_year.checked_sub(1)?
        };
        let start = NaiveDate::from_ymd_opt(start_year, self.start_month, 1)?;
        let end = start.checked_add_months(Months::new(12))?.pred_opt()?;
        Some((start, end))
    }

    /// Returns true if the given date falls within the given fiscal year.
    #[must_use]
    pub fn contains(self, fiscal_year: i32, date: NaiveDate) -> bool {
        self.fiscal_year_of(date) == fiscal_year
    }

    /// Display label for a fiscal year (e.g. "FY2024").
    #[must_use]
    pub fn label(fiscal_year: i32) -> String {
        format!("FY{fiscal_year}")
    }
}

impl Default for FiscalCalendar {
    fn default() -> Self {
        Self::calendar_year()
    }
}
