// Date utility functions
// Wall-clock helpers for timeline placement

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

/// Build an absolute timestamp for `hour:minute` local time on `date`.
pub fn at_local_time(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    at_time_in(&Local, date, hour, minute)
}

/// Build an absolute timestamp for `hour:minute` wall-clock time on `date` in `tz`.
///
/// A time skipped by a DST transition moves forward by an hour, so 02:30 on a
/// spring-forward day becomes 03:30 on that same day.
pub fn at_time_in<Tz: TimeZone>(tz: &Tz, date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour.min(23), minute.min(59), 0).unwrap_or(NaiveTime::MIN);
    let naive = date.and_time(time);

    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|resolved| resolved.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// Timestamp for `hour:minute` local time today.
pub fn today_at(hour: u32, minute: u32) -> DateTime<Utc> {
    at_local_time(Local::now().date_naive(), hour, minute)
}

/// Local wall-clock hour and minute of a timestamp.
pub fn local_hour_minute(timestamp: &DateTime<Utc>) -> (u32, u32) {
    let local = timestamp.with_timezone(&Local);
    (local.hour(), local.minute())
}

/// Parse a `HH:MM` form value.
pub fn parse_hour_minute(raw: &str) -> Option<(u32, u32)> {
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M").ok()?;
    Some((time.hour(), time.minute()))
}

/// Format a timestamp as local `HH:MM`, the shape used by edit forms.
pub fn format_hour_minute(timestamp: &DateTime<Utc>) -> String {
    let (hour, minute) = local_hour_minute(timestamp);
    format!("{:02}:{:02}", hour, minute)
}
