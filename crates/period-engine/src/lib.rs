//! # period-engine
//!
//! Calendar period arithmetic over `chrono::DateTime<Tz>`.
//!
//! Computes the first and last instant of the day, week, month, quarter or
//! year containing a timestamp, and moves timestamps by whole days, weeks,
//! months or years. Week boundaries can be anchored on any weekday; month,
//! quarter and year lengths follow the proleptic Gregorian leap-year rule.
//! Every result keeps the input's time zone.
//!
//! ## Modules
//!
//! - [`facts`] — Leap years, days in month/quarter/year, [`Quarter`]
//! - [`boundary`] — Start/end of day, week, month, quarter, year; [`Period`]
//! - [`offset`] — Shift by N days/weeks/months/years
//! - [`clock`] — The injectable "now" source
//! - [`calendar`] — Optional-instant call forms, yesterday/tomorrow/last/next helpers
//! - [`civil`] — Plain date and time constructors
//! - [`error`] — Error types
//!
//! ## Preconditions
//!
//! Offsets by zero and out-of-range months are caller bugs: the plain
//! functions panic. Each panicking function has a `try_`/`checked_` twin
//! returning [`PeriodError`] for callers that take counts or months from
//! untrusted input.

pub mod boundary;
pub mod calendar;
pub mod civil;
pub mod clock;
pub mod error;
pub mod facts;
pub mod offset;

pub use boundary::{
    end_of_day, end_of_month, end_of_quarter, end_of_week, end_of_week_on, end_of_year,
    start_of_day, start_of_month, start_of_quarter, start_of_week, start_of_week_on,
    start_of_year, Period,
};
pub use calendar::{Calendar, CalendarOptions};
pub use civil::{date_create, time_create};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{PeriodError, Result};
pub use facts::{
    checked_days_in_month, checked_days_in_quarter, days_in_month, days_in_quarter, days_in_year,
    is_leap_year, Quarter,
};
pub use offset::{
    days, months, shift, try_days, try_months, try_shift, try_weeks, try_years, weeks, years,
};
