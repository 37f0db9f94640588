//! Turning the date and time-of-day strings a form collects into instants.
//!
//! A `("2024-03-15", "09:30")` pair means the same thing as
//! `Date.parse("2024-03-15T09:30")` in a browser: a wall-clock time in the
//! given zone. The backend only ever receives the resulting epoch value.

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use shared::error::{AppError, AppResult};

pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?)
}

pub fn parse_time_of_day(time: &str) -> AppResult<NaiveTime> {
    let time = time.trim();
    let parsed = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))?;
    Ok(parsed)
}

pub fn compose_datetime<Tz: TimeZone>(tz: &Tz, date: &str, time: &str) -> AppResult<DateTime<Utc>> {
    let naive = NaiveDateTime::new(parse_date(date)?, parse_time_of_day(time)?);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        // DST fold: take the first occurrence
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(AppError::InvalidLocalTime(naive.to_string())),
    }
}

pub fn compose_epoch_seconds<Tz: TimeZone>(tz: &Tz, date: &str, time: &str) -> AppResult<i64> {
    compose_datetime(tz, date, time).map(|dt| dt.timestamp())
}

pub fn compose_epoch_millis<Tz: TimeZone>(tz: &Tz, date: &str, time: &str) -> AppResult<i64> {
    compose_datetime(tz, date, time).map(|dt| dt.timestamp_millis())
}

/// `"<startMs>-<endMs>"`, the window format of the PHP endpoints.
pub fn legacy_time_range(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    format!("{}-{}", start.timestamp_millis(), end.timestamp_millis())
}
