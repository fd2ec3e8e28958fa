//! Whole-period offsets: move an instant N days, weeks, months or years.
//!
//! Offsets keep the wall-clock time of day and the time zone of the input;
//! they never snap to a boundary. Combine with [`crate::boundary`] when a
//! normalized boundary is also wanted (e.g. `start_of_month(&months(-1, &t))`).
//!
//! A count of zero is a caller bug: the plain forms panic and the `try_`
//! forms return [`PeriodError::ZeroOffset`].

use chrono::{DateTime, Days, FixedOffset, LocalResult, Months, NaiveDateTime, Offset, TimeZone};
use tracing::debug;

use crate::boundary::{from_local_with_offset, Period};
use crate::error::{precondition, PeriodError, Result};

/// `t` moved by `n` calendar days, same wall-clock time.
///
/// # Panics
///
/// Panics if `n == 0` or the result is outside chrono's range.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use period_engine::offset::days;
///
/// let t = Utc.with_ymd_and_hms(2022, 12, 30, 8, 0, 0).unwrap();
/// assert_eq!(days(3, &t), Utc.with_ymd_and_hms(2023, 1, 2, 8, 0, 0).unwrap());
/// ```
#[track_caller]
pub fn days<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(try_days(n, t))
}

/// `t` moved by `n` weeks (7 days each).
///
/// # Panics
///
/// Panics if `n == 0` or the result is outside chrono's range.
#[track_caller]
pub fn weeks<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(try_weeks(n, t))
}

/// `t` moved by `n` calendar months. A day past the end of the target month
/// is clamped to its last day (Jan 31 + 1 month = Feb 28 or 29).
///
/// # Panics
///
/// Panics if `n == 0` or the result is outside chrono's range.
#[track_caller]
pub fn months<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(try_months(n, t))
}

/// `t` moved by `n` years. Feb 29 lands on Feb 28 in non-leap years.
///
/// # Panics
///
/// Panics if `n == 0` or the result is outside chrono's range.
#[track_caller]
pub fn years<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(try_years(n, t))
}

/// `t` moved by `n` units of `period`. A quarter is three months; the anchor
/// of [`Period::Week`] is irrelevant here.
///
/// # Panics
///
/// Panics if `n == 0` or the result is outside chrono's range.
#[track_caller]
pub fn shift<Tz: TimeZone>(period: Period, n: i32, t: &DateTime<Tz>) -> DateTime<Tz> {
    precondition(try_shift(period, n, t))
}

/// Fallible form of [`days`].
///
/// # Errors
///
/// Returns [`PeriodError::ZeroOffset`] if `n == 0`, or
/// [`PeriodError::OutOfRange`] if the result is not representable.
pub fn try_days<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    ensure_nonzero("days", n)?;
    shift_days(i64::from(n), t)
}

/// Fallible form of [`weeks`].
///
/// # Errors
///
/// Same as [`try_days`].
pub fn try_weeks<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    ensure_nonzero("weeks", n)?;
    shift_days(i64::from(n) * 7, t)
}

/// Fallible form of [`months`].
///
/// # Errors
///
/// Same as [`try_days`].
pub fn try_months<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    ensure_nonzero("months", n)?;
    shift_months(i64::from(n), t)
}

/// Fallible form of [`years`].
///
/// # Errors
///
/// Same as [`try_days`].
pub fn try_years<Tz: TimeZone>(n: i32, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    ensure_nonzero("years", n)?;
    shift_months(i64::from(n) * 12, t)
}

/// Fallible form of [`shift`].
///
/// # Errors
///
/// Same as [`try_days`].
pub fn try_shift<Tz: TimeZone>(period: Period, n: i32, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    match period {
        Period::Day => try_days(n, t),
        Period::Week(_) => try_weeks(n, t),
        Period::Month => try_months(n, t),
        Period::Quarter => {
            ensure_nonzero("quarters", n)?;
            shift_months(i64::from(n) * 3, t)
        }
        Period::Year => try_years(n, t),
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn ensure_nonzero(op: &'static str, n: i32) -> Result<()> {
    if n == 0 {
        return Err(PeriodError::ZeroOffset(op));
    }
    Ok(())
}

fn shift_days<Tz: TimeZone>(n: i64, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let local = t.naive_local();
    let count = Days::new(n.unsigned_abs());
    let shifted = if n > 0 {
        local.checked_add_days(count)
    } else {
        local.checked_sub_days(count)
    };
    let shifted = shifted.ok_or_else(|| overflow(&local, n, "days"))?;
    relocalize(t, shifted)
}

fn shift_months<Tz: TimeZone>(n: i64, t: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let local = t.naive_local();
    let count = u32::try_from(n.unsigned_abs())
        .map(Months::new)
        .map_err(|_| overflow(&local, n, "months"))?;
    let shifted = if n > 0 {
        local.checked_add_months(count)
    } else {
        local.checked_sub_months(count)
    };
    let shifted = shifted.ok_or_else(|| overflow(&local, n, "months"))?;
    relocalize(t, shifted)
}

fn overflow(local: &NaiveDateTime, n: i64, unit: &str) -> PeriodError {
    PeriodError::OutOfRange(format!("{local} {n:+} {unit}"))
}

/// Place a shifted wall-clock time back into `original`'s zone.
///
/// An ambiguous local time keeps `original`'s UTC offset when it is one of
/// the candidates, otherwise the earlier instant. A nonexistent local time
/// is read with `original`'s UTC offset, which lands just past the gap.
fn relocalize<Tz: TimeZone>(original: &DateTime<Tz>, local: NaiveDateTime) -> Result<DateTime<Tz>> {
    let tz = original.timezone();
    let hint: FixedOffset = original.offset().fix();

    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(early, late) => {
            debug!(%local, "ambiguous local time after offset");
            if late.offset().fix() == hint {
                Ok(late)
            } else {
                Ok(early)
            }
        }
        LocalResult::None => {
            debug!(%local, offset = %hint, "local time falls in a gap after offset");
            from_local_with_offset(&tz, local, hint)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike, Utc, Weekday};
    use chrono_tz::Tz;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap()
    }

    // ── days / weeks ────────────────────────────────────────────────────

    #[test]
    fn test_days_both_directions() {
        for n in [-3, -2, -1, 1, 2, 3] {
            assert_eq!(days(n, &fixed()), fixed() + Duration::days(i64::from(n)));
        }
    }

    #[test]
    fn test_days_keeps_time_of_day() {
        let t = utc(2024, 2, 28, 17, 45, 12) + Duration::nanoseconds(123);
        let next = days(1, &t);
        assert_eq!(next, utc(2024, 2, 29, 17, 45, 12) + Duration::nanoseconds(123));
    }

    #[test]
    fn test_weeks_both_directions() {
        for n in [-3, -2, -1, 1, 2, 3] {
            assert_eq!(weeks(n, &fixed()), fixed() + Duration::days(i64::from(n) * 7));
        }
    }

    #[test]
    fn test_try_days_zero_is_an_error() {
        assert_eq!(try_days(0, &fixed()), Err(PeriodError::ZeroOffset("days")));
        assert_eq!(try_weeks(0, &fixed()), Err(PeriodError::ZeroOffset("weeks")));
    }

    #[test]
    #[should_panic(expected = "precondition violated: Zero offset: days()")]
    fn test_days_zero_panics() {
        days(0, &fixed());
    }

    #[test]
    #[should_panic(expected = "precondition violated: Zero offset: weeks()")]
    fn test_weeks_zero_panics() {
        weeks(0, &fixed());
    }

    // ── months / years ──────────────────────────────────────────────────

    #[test]
    fn test_months_both_directions() {
        let expected = [
            (-3, utc(2021, 10, 1, 0, 0, 0)),
            (-1, utc(2021, 12, 1, 0, 0, 0)),
            (1, utc(2022, 2, 1, 0, 0, 0)),
            (3, utc(2022, 4, 1, 0, 0, 0)),
        ];
        for (n, want) in expected {
            assert_eq!(months(n, &fixed()), want, "n = {n}");
        }
    }

    #[test]
    fn test_months_clamps_to_end_of_month() {
        assert_eq!(months(1, &utc(2023, 1, 31, 9, 0, 0)), utc(2023, 2, 28, 9, 0, 0));
        assert_eq!(months(1, &utc(2024, 1, 31, 9, 0, 0)), utc(2024, 2, 29, 9, 0, 0));
        assert_eq!(months(-1, &utc(2024, 3, 31, 9, 0, 0)), utc(2024, 2, 29, 9, 0, 0));
    }

    #[test]
    fn test_years_both_directions() {
        for n in [-3, -2, -1, 1, 2, 3] {
            assert_eq!(years(n, &fixed()), utc(2022 + n, 1, 1, 0, 0, 0));
        }
    }

    #[test]
    fn test_years_from_leap_day() {
        assert_eq!(years(1, &utc(2024, 2, 29, 6, 0, 0)), utc(2025, 2, 28, 6, 0, 0));
        assert_eq!(years(4, &utc(2024, 2, 29, 6, 0, 0)), utc(2028, 2, 29, 6, 0, 0));
    }

    #[test]
    #[should_panic(expected = "Zero offset: months()")]
    fn test_months_zero_panics() {
        months(0, &fixed());
    }

    #[test]
    #[should_panic(expected = "Zero offset: years()")]
    fn test_years_zero_panics() {
        years(0, &fixed());
    }

    #[test]
    fn test_years_out_of_range() {
        let err = try_years(i32::MAX, &fixed()).unwrap_err();
        assert!(matches!(err, PeriodError::OutOfRange(_)), "got: {err}");
    }

    // ── shift ───────────────────────────────────────────────────────────

    #[test]
    fn test_shift_dispatch() {
        let t = utc(2026, 2, 18, 14, 30, 0);
        assert_eq!(shift(Period::Day, -1, &t), utc(2026, 2, 17, 14, 30, 0));
        assert_eq!(shift(Period::Week(Weekday::Mon), 1, &t), utc(2026, 2, 25, 14, 30, 0));
        assert_eq!(shift(Period::Month, 1, &t), utc(2026, 3, 18, 14, 30, 0));
        assert_eq!(shift(Period::Quarter, -1, &t), utc(2025, 11, 18, 14, 30, 0));
        assert_eq!(shift(Period::Year, 2, &t), utc(2028, 2, 18, 14, 30, 0));
    }

    #[test]
    fn test_try_shift_quarter_zero() {
        assert_eq!(
            try_shift(Period::Quarter, 0, &fixed()),
            Err(PeriodError::ZeroOffset("quarters"))
        );
    }

    // ── Time zones ──────────────────────────────────────────────────────

    #[test]
    fn test_days_across_dst_keeps_wall_clock() {
        // 10pm EST on March 7, 2026; the next day is in EDT.
        let ny = Tz::America__New_York;
        let t = ny.with_ymd_and_hms(2026, 3, 7, 22, 0, 0).unwrap();
        let next = days(1, &t);
        assert_eq!(next.hour(), 22);
        assert_eq!(next.offset().fix().local_minus_utc(), -4 * 3600);
        assert_eq!(next - t, Duration::hours(23));
    }

    #[test]
    fn test_days_into_gap_moves_past_it() {
        // 02:30 does not exist on 2026-03-08 in New York.
        let ny = Tz::America__New_York;
        let t = ny.with_ymd_and_hms(2026, 3, 7, 2, 30, 0).unwrap();
        let next = days(1, &t);
        assert_eq!((next.hour(), next.minute()), (3, 30));
        assert_eq!(next - t, Duration::hours(24));
    }

    #[test]
    fn test_days_into_overlap_keeps_offset_when_possible() {
        // 01:30 happens twice on 2026-11-01 in New York.
        let ny = Tz::America__New_York;
        let before = ny.with_ymd_and_hms(2026, 10, 31, 1, 30, 0).unwrap();
        let forward = days(1, &before);
        assert_eq!(forward.offset().fix().local_minus_utc(), -4 * 3600);

        let after = ny.with_ymd_and_hms(2026, 11, 2, 1, 30, 0).unwrap();
        let back = days(-1, &after);
        assert_eq!(back.offset().fix().local_minus_utc(), -5 * 3600);
        assert_eq!(after - back, Duration::hours(24));
    }
}
