//! Calendar month windows used by budgets and reports
//!
//! Budgets are monthly ceilings, and every month-scoped aggregate filters
//! transactions by the year and month of their timestamp.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FintrackError;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Today's date on the local calendar
///
/// Every "today" and "this month" default reads this one clock. Dates built
/// from it are stored as UTC midnight of the same calendar day.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl Month {
    /// Create a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, FintrackError> {
        if !(1..=12).contains(&month) {
            return Err(FintrackError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given timestamp
    pub fn of(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing the given calendar date
    pub fn of_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month of [`local_today`]
    pub fn current() -> Self {
        Self::of_date(local_today())
    }

    /// Whether a timestamp falls in this month
    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The `count` months ending with this one, oldest first
    pub fn trailing(&self, count: usize) -> Vec<Month> {
        let mut months = Vec::with_capacity(count);
        let mut cursor = *self;
        for _ in 0..count {
            months.push(cursor);
            cursor = cursor.prev();
        }
        months.reverse();
        months
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    /// Abbreviated month name ("Jan")
    pub fn short_name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize - 1) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = FintrackError;

    /// Parse "YYYY-MM"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FintrackError::Validation(format!("Invalid month '{}', expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prev_next_wrap_year() {
        let jan = Month::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), Month::new(2024, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
    }

    #[test]
    fn test_trailing_months_oldest_first() {
        let feb = Month::new(2025, 2).unwrap();
        let months = feb.trailing(3);
        assert_eq!(
            months,
            vec![
                Month::new(2024, 12).unwrap(),
                Month::new(2025, 1).unwrap(),
                feb
            ]
        );
    }

    #[test]
    fn test_contains() {
        let month = Month::new(2025, 3).unwrap();
        let inside = Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap();
        let outside = Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap();
        assert!(month.contains(&inside));
        assert!(!month.contains(&outside));
        assert_eq!(Month::of(&inside), month);
    }

    #[test]
    fn test_parse_and_display() {
        let month: Month = "2025-07".parse().unwrap();
        assert_eq!(month.to_string(), "2025-07");
        assert_eq!(month.short_name(), "Jul");
        assert!("2025-13".parse::<Month>().is_err());
        assert!("July".parse::<Month>().is_err());
    }
}
