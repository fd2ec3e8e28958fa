//! Calendar facts for the proleptic Gregorian calendar.
//!
//! Pure functions of a year (and month or quarter). Everything else in the
//! crate derives month, quarter and year lengths from here.

use serde::{Deserialize, Serialize};

use crate::error::{precondition, PeriodError, Result};

/// Whether `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, except centuries divisible by 400.
///
/// ```
/// use period_engine::facts::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
///
/// # Panics
///
/// Panics if `month` is outside 1-12. Use [`checked_days_in_month`] when the
/// month comes from untrusted input.
#[track_caller]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    precondition(checked_days_in_month(year, month))
}

/// Number of days in `month` of `year`, rejecting months outside 1-12.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidMonth`] for a month outside 1-12.
pub fn checked_days_in_month(year: i32, month: u32) -> Result<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(PeriodError::InvalidMonth(month)),
    }
}

/// Number of days in `quarter` of `year`.
///
/// Any quarter other than 1, 2 or 3 is treated as the fourth quarter. Use
/// [`checked_days_in_quarter`] for a strict range check.
pub fn days_in_quarter(year: i32, quarter: u32) -> u32 {
    let quarter = Quarter::try_from(quarter).unwrap_or(Quarter::Q4);
    quarter.days(year)
}

/// Number of days in `quarter` (1-4) of `year`.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidQuarter`] for a quarter outside 1-4.
pub fn checked_days_in_quarter(year: i32, quarter: u32) -> Result<u32> {
    Quarter::try_from(quarter).map(|q| q.days(year))
}

/// Number of days in `year`: 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

// ── Quarter ─────────────────────────────────────────────────────────────────

/// A calendar quarter: Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    Q1 = 1,
    Q2 = 2,
    Q3 = 3,
    Q4 = 4,
}

impl Quarter {
    /// The quarter that `month` (1-12) falls in: `(month - 1) / 3 + 1`.
    ///
    /// Months past 12 land in [`Quarter::Q4`]; chrono never produces them.
    pub fn containing(month: u32) -> Self {
        match month.saturating_sub(1) / 3 {
            0 => Quarter::Q1,
            1 => Quarter::Q2,
            2 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    /// Quarter number, 1-4.
    pub fn number(self) -> u32 {
        self as u32
    }

    /// First month of the quarter (1, 4, 7 or 10).
    pub fn first_month(self) -> u32 {
        (self.number() - 1) * 3 + 1
    }

    /// Last month of the quarter (3, 6, 9 or 12).
    pub fn last_month(self) -> u32 {
        self.number() * 3
    }

    /// Sum of the lengths of the quarter's three months.
    pub fn days(self, year: i32) -> u32 {
        (self.first_month()..=self.last_month())
            .map(|month| days_in_month(year, month))
            .sum()
    }
}

impl TryFrom<u32> for Quarter {
    type Error = PeriodError;

    fn try_from(quarter: u32) -> Result<Self> {
        match quarter {
            1 => Ok(Quarter::Q1),
            2 => Ok(Quarter::Q2),
            3 => Ok(Quarter::Q3),
            4 => Ok(Quarter::Q4),
            _ => Err(PeriodError::InvalidQuarter(quarter)),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
