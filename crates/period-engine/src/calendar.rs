//! Calendar: boundary and offset operations with an optional instant.
//!
//! Every method takes `Option<DateTime<Tz>>`. `Some(t)` behaves exactly like
//! the free function in [`crate::boundary`] or [`crate::offset`]; `None`
//! reads the calendar's [`Clock`] once and uses that instant instead. The
//! `yesterday`/`tomorrow`/`last_*`/`next_*` helpers are always relative to
//! the clock.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use period_engine::{Calendar, FixedClock};
//!
//! let now = Utc.with_ymd_and_hms(2026, 2, 18, 14, 30, 0).unwrap();
//! let calendar = Calendar::new(FixedClock::new(now));
//!
//! assert_eq!(calendar.start_of_month(None), Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
//! assert_eq!(calendar.yesterday(), Utc.with_ymd_and_hms(2026, 2, 17, 14, 30, 0).unwrap());
//! ```

use chrono::{DateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::boundary::{self, Period};
use crate::clock::{Clock, SystemClock};
use crate::error::{PeriodError, Result};
use crate::offset;

// ── Options ─────────────────────────────────────────────────────────────────

/// Options for a [`Calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    /// Which day starts the week for [`Calendar::start_of_week`] and
    /// [`Calendar::end_of_week`]. Defaults to Sunday.
    pub week_start: Weekday,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
        }
    }
}

impl CalendarOptions {
    /// Parse options from JSON, e.g. `{"week_start": "Mon"}`. Missing fields
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidOptions`] if the JSON is malformed or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PeriodError::InvalidOptions(e.to_string()))
    }
}

// ── Calendar ────────────────────────────────────────────────────────────────

/// Period arithmetic bound to a clock and a week-start convention.
#[derive(Debug, Clone)]
pub struct Calendar<C: Clock = SystemClock> {
    clock: C,
    options: CalendarOptions,
}

impl Calendar<SystemClock> {
    /// A calendar over the system clock in the local time zone.
    pub fn local() -> Self {
        Self::new(SystemClock)
    }
}

impl Default for Calendar<SystemClock> {
    fn default() -> Self {
        Self::local()
    }
}

impl<C: Clock> Calendar<C> {
    /// A calendar over `clock` with default options (Sunday week start).
    pub fn new(clock: C) -> Self {
        Self::with_options(clock, CalendarOptions::default())
    }

    /// A calendar over `clock` with explicit options.
    pub fn with_options(clock: C, options: CalendarOptions) -> Self {
        Self { clock, options }
    }

    /// The options this calendar was built with.
    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// The clock's current instant.
    pub fn now(&self) -> DateTime<C::Tz> {
        self.clock.now()
    }

    fn resolve(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        match t {
            Some(t) => t,
            None => {
                trace!("no instant supplied, using clock");
                self.clock.now()
            }
        }
    }

    // ── Boundaries ──────────────────────────────────────────────────────

    #[track_caller]
    pub fn start_of_day(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::start_of_day(&self.resolve(t))
    }

    #[track_caller]
    pub fn end_of_day(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::end_of_day(&self.resolve(t))
    }

    /// Start of the week, anchored on [`CalendarOptions::week_start`].
    #[track_caller]
    pub fn start_of_week(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::start_of_week_on(self.options.week_start, &self.resolve(t))
    }

    /// End of the week, anchored on [`CalendarOptions::week_start`].
    #[track_caller]
    pub fn end_of_week(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::end_of_week_on(self.options.week_start, &self.resolve(t))
    }

    #[track_caller]
    pub fn start_of_week_on(&self, anchor: Weekday, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::start_of_week_on(anchor, &self.resolve(t))
    }

    #[track_caller]
    pub fn end_of_week_on(&self, anchor: Weekday, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::end_of_week_on(anchor, &self.resolve(t))
    }

    #[track_caller]
    pub fn start_of_month(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::start_of_month(&self.resolve(t))
    }

    #[track_caller]
    pub fn end_of_month(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::end_of_month(&self.resolve(t))
    }

    #[track_caller]
    pub fn start_of_quarter(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::start_of_quarter(&self.resolve(t))
    }

    #[track_caller]
    pub fn end_of_quarter(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::end_of_quarter(&self.resolve(t))
    }

    #[track_caller]
    pub fn start_of_year(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::start_of_year(&self.resolve(t))
    }

    #[track_caller]
    pub fn end_of_year(&self, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        boundary::end_of_year(&self.resolve(t))
    }

    /// Start of `period` containing `t` (or now).
    ///
    /// # Errors
    ///
    /// See [`Period::try_start`].
    pub fn start_of(&self, period: Period, t: Option<DateTime<C::Tz>>) -> Result<DateTime<C::Tz>> {
        period.try_start(&self.resolve(t))
    }

    /// End of `period` containing `t` (or now).
    ///
    /// # Errors
    ///
    /// See [`Period::try_end`].
    pub fn end_of(&self, period: Period, t: Option<DateTime<C::Tz>>) -> Result<DateTime<C::Tz>> {
        period.try_end(&self.resolve(t))
    }

    // ── Offsets ─────────────────────────────────────────────────────────

    /// # Panics
    ///
    /// Panics if `n == 0`.
    #[track_caller]
    pub fn days(&self, n: i32, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        offset::days(n, &self.resolve(t))
    }

    /// # Panics
    ///
    /// Panics if `n == 0`.
    #[track_caller]
    pub fn weeks(&self, n: i32, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        offset::weeks(n, &self.resolve(t))
    }

    /// # Panics
    ///
    /// Panics if `n == 0`.
    #[track_caller]
    pub fn months(&self, n: i32, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        offset::months(n, &self.resolve(t))
    }

    /// # Panics
    ///
    /// Panics if `n == 0`.
    #[track_caller]
    pub fn years(&self, n: i32, t: Option<DateTime<C::Tz>>) -> DateTime<C::Tz> {
        offset::years(n, &self.resolve(t))
    }

    /// `t` (or now) moved by `n` units of `period`.
    ///
    /// # Errors
    ///
    /// See [`offset::try_shift`].
    pub fn shift(&self, period: Period, n: i32, t: Option<DateTime<C::Tz>>) -> Result<DateTime<C::Tz>> {
        offset::try_shift(period, n, &self.resolve(t))
    }

    #[track_caller]
    pub fn yesterday(&self) -> DateTime<C::Tz> {
        self.days(-1, None)
    }

    #[track_caller]
    pub fn tomorrow(&self) -> DateTime<C::Tz> {
        self.days(1, None)
    }

    #[track_caller]
    pub fn last_week(&self) -> DateTime<C::Tz> {
        self.weeks(-1, None)
    }

    #[track_caller]
    pub fn next_week(&self) -> DateTime<C::Tz> {
        self.weeks(1, None)
    }

    #[track_caller]
    pub fn last_month(&self) -> DateTime<C::Tz> {
        self.months(-1, None)
    }

    #[track_caller]
    pub fn next_month(&self) -> DateTime<C::Tz> {
        self.months(1, None)
    }

    #[track_caller]
    pub fn last_year(&self) -> DateTime<C::Tz> {
        self.years(-1, None)
    }

    #[track_caller]
    pub fn next_year(&self) -> DateTime<C::Tz> {
        self.years(1, None)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
