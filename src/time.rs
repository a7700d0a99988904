//! Calendar helpers for sunrise/sunset calculations.
//!
//! The calculator only needs a date's ordinal day within its year. Dates are
//! interpreted in the proleptic Gregorian calendar for all years; there is no
//! Julian-calendar transition handling.

/// Cumulative days before the first of each month in a non-leap year.
const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

use crate::{Error, Result};

/// Checks whether a year is a leap year in the proleptic Gregorian calendar.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Gets the number of days in a month.
///
/// # Errors
/// Returns `InvalidDate` if month is outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_date("month must be between 1 and 12")),
    };
    Ok(days)
}

/// Computes the 1-based day of the year (1-366) for a calendar date.
///
/// # Errors
/// Returns `InvalidDate` if month is outside 1-12 or day is out of range for
/// the month.
///
/// # Example
/// ```
/// # use sun_times::time::day_of_year;
/// assert_eq!(day_of_year(2014, 1, 1).unwrap(), 1);
/// assert_eq!(day_of_year(2014, 10, 3).unwrap(), 276);
/// assert_eq!(day_of_year(2020, 12, 31).unwrap(), 366); // leap year
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    let month_days = days_in_month(year, month)?;
    if day < 1 || day > month_days {
        return Err(Error::invalid_date("day is out of range for month"));
    }

    let leap_adjustment = u32::from(month > 2 && is_leap_year(year));
    Ok(CUMULATIVE_DAYS[(month - 1) as usize] + day + leap_adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2024));
        assert!(is_leap_year(-4)); // proleptic: the rule extends backwards

        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1).unwrap(), 31);
        assert_eq!(days_in_month(2023, 4).unwrap(), 30);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);

        assert!(days_in_month(2023, 0).is_err());
        assert!(days_in_month(2023, 13).is_err());
    }

    #[test]
    fn test_day_of_year_boundaries() {
        assert_eq!(day_of_year(2023, 1, 1).unwrap(), 1);
        assert_eq!(day_of_year(2023, 12, 31).unwrap(), 365);
        assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);

        // Around the leap day
        assert_eq!(day_of_year(2024, 2, 28).unwrap(), 59);
        assert_eq!(day_of_year(2024, 2, 29).unwrap(), 60);
        assert_eq!(day_of_year(2024, 3, 1).unwrap(), 61);
        assert_eq!(day_of_year(2023, 3, 1).unwrap(), 60);
    }

    #[test]
    fn test_day_of_year_validation() {
        assert!(day_of_year(2023, 2, 29).is_err());
        assert!(day_of_year(2024, 2, 30).is_err());
        assert!(day_of_year(2023, 4, 31).is_err());
        assert!(day_of_year(2023, 1, 0).is_err());
        assert!(day_of_year(2023, 13, 1).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_day_of_year_matches_chrono() {
        use chrono::{Datelike, NaiveDate};

        for year in [1999, 2000, 2023, 2024] {
            let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            while date.year() == year {
                assert_eq!(
                    day_of_year(year, date.month(), date.day()).unwrap(),
                    date.ordinal(),
                    "mismatch at {date}"
                );
                date = date.succ_opt().unwrap();
            }
        }
    }
}
