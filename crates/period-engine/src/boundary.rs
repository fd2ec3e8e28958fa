//! Period boundaries: the first and last instant of a day, week, month,
//! quarter or year containing a given instant.
//!
//! Boundaries are computed on the local calendar date of the input and then
//! re-localized in the input's own time zone, so every result carries the
//! same `Tz` as the input.
//!
//! The start of a period is local midnight on its first day. The end of a
//! period is one nanosecond before the start of the following day, never a
//! hardcoded `23:59:59`; on days shortened or lengthened by DST the end is
//! still the last instant of the same calendar day.
//!
//! # Functions
//!
//! - [`start_of_day`] / [`end_of_day`]
//! - [`start_of_week`] / [`end_of_week`] (Sunday anchor)
//! - [`start_of_week_on`] / [`end_of_week_on`] (any anchor weekday)
//! - [`start_of_month`] / [`end_of_month`]
//! - [`start_of_quarter`] / [`end_of_quarter`]
//! - [`start_of_year`] / [`end_of_year`]
//!
//! [`Period`] offers the same boundaries with the unit chosen at runtime and
//! fallible `try_` forms.

use chrono::{
    DateTime, Datelike, Days, Duration, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone,
    Weekday,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{precondition, PeriodError, Result};
use crate::facts::{days_in_month, Quarter};

// ── Period ──────────────────────────────────────────────────────────────────

/// A calendar period unit, chosen at runtime.
///
/// `Week` carries the weekday the week starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week(Weekday),
    Month,
    Quarter,
    Year,
}

impl Period {
    /// First instant of the period containing `t`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if the boundary falls outside
    /// chrono's representable range.
    pub fn try_start<Tz: TimeZone>(self, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let tz = t.timezone();
        start_of_date(&tz, self.first_date(t.date_naive())?)
    }

    /// Last instant (to the nanosecond) of the period containing `t`.
    ///
    /// # Errors
    ///
    /// Same as [`Period::try_start`].
    pub fn try_end<Tz: TimeZone>(self, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let tz = t.timezone();
        end_of_date(&tz, self.last_date(t.date_naive())?)
    }

    /// First calendar date of the period containing `date`.
    fn first_date(self, date: NaiveDate) -> Result<NaiveDate> {
        match self {
            Period::Day => Ok(date),
            Period::Week(anchor) => date
                .checked_sub_days(Days::new(days_since_anchor(date.weekday(), anchor)))
                .ok_or_else(|| out_of_range(date, "start of week")),
            Period::Month => ymd(date.year(), date.month(), 1),
            Period::Quarter => {
                let quarter = Quarter::containing(date.month());
                ymd(date.year(), quarter.first_month(), 1)
            }
            Period::Year => ymd(date.year(), 1, 1),
        }
    }

    /// Last calendar date of the period containing `date`.
    fn last_date(self, date: NaiveDate) -> Result<NaiveDate> {
        match self {
            Period::Day => Ok(date),
            Period::Week(_) => self
                .first_date(date)?
                .checked_add_days(Days::new(6))
                .ok_or_else(|| out_of_range(date, "end of week")),
            Period::Month => last_of_month(date.year(), date.month()),
            Period::Quarter => {
                let quarter = Quarter::containing(date.month());
                last_of_month(date.year(), quarter.last_month())
            }
            Period::Year => ymd(date.year(), 12, 31),
        }
    }
}

// ── Day ─────────────────────────────────────────────────────────────────────

/// Local midnight on the calendar day of `t`, in `t`'s zone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use period_engine::boundary::start_of_day;
///
/// let t = Utc.with_ymd_and_hms(2022, 12, 30, 16, 30, 0).unwrap();
/// assert_eq!(start_of_day(&t), Utc.with_ymd_and_hms(2022, 12, 30, 0, 0, 0).unwrap());
/// ```
#[track_caller]
pub fn start_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Day.try_start(t))
}

/// One nanosecond before the start of the day after `t`'s calendar day.
#[track_caller]
pub fn end_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Day.try_end(t))
}

// ── Week ────────────────────────────────────────────────────────────────────

/// Start of the Sunday-anchored week containing `t`.
#[track_caller]
pub fn start_of_week<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    start_of_week_on(Weekday::Sun, t)
}

/// End of the Sunday-anchored week containing `t` (Saturday, last nanosecond).
#[track_caller]
pub fn end_of_week<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    end_of_week_on(Weekday::Sun, t)
}

/// Start of the most recent `anchor` weekday on or before `t`'s date.
///
/// Wraps across month and year boundaries: a Sunday-anchored week containing
/// Monday 2024-01-01 starts on 2023-12-31.
///
/// ```
/// use chrono::{TimeZone, Utc, Weekday};
/// use period_engine::boundary::start_of_week_on;
///
/// let t = Utc.with_ymd_and_hms(2024, 1, 1, 11, 2, 10).unwrap();
/// let start = start_of_week_on(Weekday::Sun, &t);
/// assert_eq!(start, Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap());
/// ```
#[track_caller]
pub fn start_of_week_on<Tz: TimeZone>(anchor: Weekday, t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Week(anchor).try_start(t))
}

/// End of the `anchor`-started week containing `t`: six days after
/// [`start_of_week_on`], last nanosecond of that day.
#[track_caller]
pub fn end_of_week_on<Tz: TimeZone>(anchor: Weekday, t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Week(anchor).try_end(t))
}

// ── Month / quarter / year ──────────────────────────────────────────────────

/// Local midnight on the first day of `t`'s month.
#[track_caller]
pub fn start_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Month.try_start(t))
}

/// Last nanosecond of the last day of `t`'s month; February is 28 or 29 days
/// depending on the year.
#[track_caller]
pub fn end_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Month.try_end(t))
}

/// Start of the first month of `t`'s quarter.
#[track_caller]
pub fn start_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Quarter.try_start(t))
}

/// End of the last month of `t`'s quarter.
#[track_caller]
pub fn end_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Quarter.try_end(t))
}

/// Local midnight on January 1st of `t`'s year.
#[track_caller]
pub fn start_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Year.try_start(t))
}

/// Last nanosecond of December 31st of `t`'s year.
#[track_caller]
pub fn end_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(Period::Year.try_end(t))
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Days back from `weekday` to the most recent `anchor`: `(weekday - anchor + 7) % 7`.
fn days_since_anchor(weekday: Weekday, anchor: Weekday) -> u64 {
    let weekday = weekday.num_days_from_sunday();
    let anchor = anchor.num_days_from_sunday();
    u64::from((weekday + 7 - anchor) % 7)
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| PeriodError::OutOfRange(format!("{year:04}-{month:02}-{day:02}")))
}

fn last_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    ymd(year, month, days_in_month(year, month))
}

fn out_of_range(date: NaiveDate, what: &str) -> PeriodError {
    PeriodError::OutOfRange(format!("{what} for {date}"))
}

/// First instant of `date` in `tz`.
///
/// If midnight is ambiguous the earlier instant wins. If midnight does not
/// exist it is read with the UTC offset in force the day before, which lands
/// on the first instant after the gap, even when the gap is a whole day.
fn start_of_date<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| out_of_range(date, "midnight"))?;

    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return Ok(dt);
    }

    let day_before = midnight
        .checked_sub_signed(Duration::days(1))
        .ok_or_else(|| out_of_range(date, "midnight"))?;
    let before_gap = tz.offset_from_utc_datetime(&day_before).fix();
    debug!(%date, offset = %before_gap, "local midnight does not exist, reading past the gap");
    from_local_with_offset(tz, midnight, before_gap)
}

/// Read a wall-clock time with a fixed UTC offset, then express it in `tz`.
pub(crate) fn from_local_with_offset<Tz: TimeZone>(
    tz: &Tz,
    local: NaiveDateTime,
    offset: FixedOffset,
) -> Result<DateTime<Tz>> {
    let utc = local
        .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        .ok_or_else(|| PeriodError::NonexistentLocalTime(local.to_string()))?;
    Ok(tz.from_utc_datetime(&utc))
}

/// Last instant of `date` in `tz`: start of the next day minus one nanosecond.
fn end_of_date<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>> {
    let next = date
        .succ_opt()
        .ok_or_else(|| out_of_range(date, "end of day"))?;
    start_of_date(tz, next)?
        .checked_sub_signed(Duration::nanoseconds(1))
        .ok_or_else(|| out_of_range(date, "end of day"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
