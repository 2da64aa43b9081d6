//! Month arithmetic for the list and print views.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use crate::error::{ClubcalError, ClubcalResult};

/// A calendar month, the unit visitors browse by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl Month {
    /// The month containing today, from the local clock.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn of(date: NaiveDate) -> Self {
        Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a `YYYY-MM` string.
    pub fn parse(s: &str) -> ClubcalResult<Self> {
        let invalid = || ClubcalError::InvalidMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Month { year, month })
    }

    pub fn contains(&self, dt: &NaiveDateTime) -> bool {
        dt.year() == self.year && dt.month() == self.month
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Month {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Month {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Month {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Month {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Human-readable label, e.g. "March 2025".
    pub fn label(&self) -> String {
        // month is validated to 1-12, day 1 always exists
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap()
            .format("%B %Y")
            .to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parse a `YYYY-MM-DD` day for the calendar-date view.
pub fn parse_day(s: &str) -> ClubcalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ClubcalError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse ---

    #[test]
    fn parse_valid_month() {
        let month = Month::parse("2025-03").unwrap();
        assert_eq!(month, Month { year: 2025, month: 3 });
    }

    #[test]
    fn parse_invalid_month() {
        assert!(Month::parse("2025").is_err());
        assert!(Month::parse("2025-13").is_err());
        assert!(Month::parse("2025-00").is_err());
        assert!(Month::parse("march 2025").is_err());
        assert!(Month::parse("").is_err());
    }

    // --- navigation ---

    #[test]
    fn next_rolls_over_year() {
        let dec = Month { year: 2025, month: 12 };
        assert_eq!(dec.next(), Month { year: 2026, month: 1 });
        let mar = Month { year: 2025, month: 3 };
        assert_eq!(mar.next(), Month { year: 2025, month: 4 });
    }

    #[test]
    fn prev_rolls_over_year() {
        let jan = Month { year: 2025, month: 1 };
        assert_eq!(jan.prev(), Month { year: 2024, month: 12 });
    }

    // --- contains ---

    #[test]
    fn contains_month_boundaries() {
        let month = Month { year: 2025, month: 3 };
        let first = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let last = NaiveDate::from_ymd_opt(2025, 3, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let outside = NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(month.contains(&first));
        assert!(month.contains(&last));
        assert!(!month.contains(&outside));
    }

    // --- display ---

    #[test]
    fn display_pads_month() {
        assert_eq!(Month { year: 2025, month: 3 }.to_string(), "2025-03");
    }

    #[test]
    fn label_is_human_readable() {
        assert_eq!(Month { year: 2025, month: 3 }.label(), "March 2025");
    }

    // --- parse_day ---

    #[test]
    fn parse_day_valid_and_invalid() {
        assert_eq!(
            parse_day("2025-03-20").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
        );
        assert!(parse_day("2025-03-32").is_err());
        assert!(parse_day("tomorrow").is_err());
    }
}
