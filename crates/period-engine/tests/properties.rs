//! Property tests for calendar facts, boundaries and offsets.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Timelike, Weekday};
use proptest::prelude::*;

use period_engine::{
    days, days_in_month, days_in_quarter, days_in_year, end_of_day, end_of_month, end_of_quarter,
    end_of_week_on, end_of_year, is_leap_year, months, start_of_day, start_of_month,
    start_of_quarter, start_of_week_on, start_of_year, try_days, weeks, PeriodError,
};

/// 1900-01-01 .. 2200-01-01 in Unix seconds.
const MIN_SECS: i64 = -2_208_988_800;
const MAX_SECS: i64 = 7_258_118_400;

fn instant() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (
        MIN_SECS..MAX_SECS,
        0u32..1_000_000_000,
        (-14 * 4..=14 * 4i32).prop_map(|quarters| quarters * 900),
    )
        .prop_map(|(secs, nanos, offset)| {
            let tz = FixedOffset::east_opt(offset).unwrap();
            DateTime::from_timestamp(secs, nanos)
                .unwrap()
                .with_timezone(&tz)
        })
}

fn weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(vec![
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ])
}

fn is_midnight(t: &DateTime<FixedOffset>) -> bool {
    t.hour() == 0 && t.minute() == 0 && t.second() == 0 && t.nanosecond() == 0
}

proptest! {
    // ── Facts ───────────────────────────────────────────────────────────

    #[test]
    fn leap_year_matches_february_29(year in -4000i32..4000) {
        prop_assert_eq!(is_leap_year(year), NaiveDate::from_ymd_opt(year, 2, 29).is_some());
        prop_assert_eq!(
            is_leap_year(year),
            year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
        );
    }

    #[test]
    fn months_and_quarters_sum_to_year(year in -4000i32..4000) {
        let by_month: u32 = (1..=12).map(|m| days_in_month(year, m)).sum();
        let by_quarter: u32 = (1..=4).map(|q| days_in_quarter(year, q)).sum();
        prop_assert_eq!(by_month, days_in_year(year));
        prop_assert_eq!(by_quarter, days_in_year(year));
    }

    // ── Boundaries ──────────────────────────────────────────────────────

    #[test]
    fn day_contains_instant(t in instant()) {
        let start = start_of_day(&t);
        let end = end_of_day(&t);
        prop_assert!(start <= t && t <= end);
        prop_assert!(is_midnight(&start));
        prop_assert_eq!(end - start, Duration::hours(24) - Duration::nanoseconds(1));
        prop_assert_eq!(start.offset(), t.offset());
        prop_assert_eq!(end.date_naive(), t.date_naive());
    }

    #[test]
    fn week_contains_instant(t in instant(), anchor in weekday()) {
        let start = start_of_week_on(anchor, &t);
        let end = end_of_week_on(anchor, &t);
        prop_assert!(start <= t && t <= end);
        prop_assert!(is_midnight(&start));
        prop_assert_eq!(start.weekday(), anchor);
        prop_assert_eq!(end - start, Duration::days(7) - Duration::nanoseconds(1));
    }

    #[test]
    fn month_boundaries(t in instant()) {
        let start = start_of_month(&t);
        let end = end_of_month(&t);
        prop_assert!(start <= t && t <= end);
        prop_assert_eq!(start.day(), 1);
        prop_assert!(is_midnight(&start));
        prop_assert_eq!(end.day(), days_in_month(t.year(), t.month()));
        // The next instant is the first of the following month.
        let next = end + Duration::nanoseconds(1);
        prop_assert_eq!(next.day(), 1);
        prop_assert!(is_midnight(&next));
        prop_assert_eq!(next.month(), t.month() % 12 + 1);
    }

    #[test]
    fn quarter_boundaries(t in instant()) {
        let start = start_of_quarter(&t);
        let end = end_of_quarter(&t);
        prop_assert!(start <= t && t <= end);
        prop_assert_eq!((start.month() - 1) % 3, 0);
        prop_assert_eq!(end.month() % 3, 0);
        prop_assert_eq!(start.month(), (t.month() - 1) / 3 * 3 + 1);
        let quarter = (t.month() - 1) / 3 + 1;
        let span = end - start + Duration::nanoseconds(1);
        prop_assert_eq!(span, Duration::days(i64::from(days_in_quarter(t.year(), quarter))));
    }

    #[test]
    fn year_boundaries(t in instant()) {
        let start = start_of_year(&t);
        let end = end_of_year(&t);
        prop_assert!(start <= t && t <= end);
        prop_assert_eq!((start.month(), start.day()), (1, 1));
        prop_assert_eq!((end.month(), end.day()), (12, 31));
        let span = end - start + Duration::nanoseconds(1);
        prop_assert_eq!(span, Duration::days(i64::from(days_in_year(t.year()))));
    }

    // ── Offsets ─────────────────────────────────────────────────────────

    #[test]
    fn days_is_exact_in_fixed_offsets(
        t in instant(),
        n in (-10_000i32..10_000).prop_filter("non-zero", |n| *n != 0),
    ) {
        prop_assert_eq!(days(n, &t), t + Duration::days(i64::from(n)));
        prop_assert_eq!(weeks(n, &t), t + Duration::days(i64::from(n) * 7));
    }

    #[test]
    fn months_keep_time_of_day_and_clamp(
        t in instant(),
        n in (-240i32..240).prop_filter("non-zero", |n| *n != 0),
    ) {
        let shifted = months(n, &t);
        prop_assert_eq!(shifted.time(), t.time());
        prop_assert_eq!(shifted.offset(), t.offset());
        let expected_day = t.day().min(days_in_month(shifted.year(), shifted.month()));
        prop_assert_eq!(shifted.day(), expected_day);
        let total = t.year() * 12 + t.month() as i32 - 1 + n;
        prop_assert_eq!(shifted.year() * 12 + shifted.month() as i32 - 1, total);
    }

    #[test]
    fn zero_day_offset_is_rejected(t in instant()) {
        prop_assert_eq!(try_days(0, &t), Err(PeriodError::ZeroOffset("days")));
    }
}
