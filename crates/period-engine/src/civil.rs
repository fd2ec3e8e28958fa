//! Constructors for plain calendar values.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{PeriodError, Result};

/// Midnight UTC on the given date.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidDate`] if the date does not exist
/// (e.g. February 30th, month 13) or is outside chrono's range.
///
/// # Examples
///
/// ```
/// use period_engine::civil::date_create;
///
/// let date = date_create(2022, 4, 15).unwrap();
/// assert_eq!(date.to_rfc3339(), "2022-04-15T00:00:00+00:00");
/// ```
pub fn date_create(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| PeriodError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// A time of day with no date attached.
///
/// # Errors
///
/// Returns [`PeriodError::InvalidTime`] for an hour past 23 or a minute or
/// second past 59.
pub fn time_create(hour: u32, minute: u32, second: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| PeriodError::InvalidTime(format!("{hour:02}:{minute:02}:{second:02}")))
}
