//! Date and time utility functions
//!
//! This module parses the due-date input buffer (local `YYYY-MM-DDTHH:MM`)
//! and produces the human-readable labels shown by the entry form and the
//! task list ("Today • 9:30 AM", "Thu, Jan 1, 10:00 AM").
//!
//! Nothing here reads the system clock: callers pass `now` explicitly.

use crate::constants::{DUE_SEPARATOR, INVALID_DATE, LABEL_TODAY, LABEL_TOMORROW};
use chrono::{DateTime, Datelike, Duration, Local, NaiveDateTime, TimeZone, Timelike};

/// Format of the due-date input buffer
pub const DUE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Accepted input layouts, most specific last
const DUE_INPUT_FORMATS: [&str; 2] = [DUE_INPUT_FORMAT, "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a due-date buffer as a local wall-clock instant
///
/// Returns `None` for empty input, unparsable input, or local times that do
/// not exist (spring-forward gaps). Ambiguous local times resolve to the
/// earlier instant.
pub fn parse_due_input(input: &str) -> Option<DateTime<Local>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Local));
    }

    DUE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Epoch milliseconds for a due-date buffer, `None` when it does not parse
pub fn due_timestamp(input: &str) -> Option<i64> {
    parse_due_input(input).map(|dt| dt.timestamp_millis())
}

/// Epoch milliseconds for a submitted due date, raised to the current
/// minute when the typed value lies in the past
pub fn clamped_due_timestamp(input: &str, now: DateTime<Local>) -> Option<i64> {
    let floor = minute_floor(now);
    parse_due_input(input).map(|due| due.max(floor).timestamp_millis())
}

/// Convert epoch milliseconds to a local datetime
pub fn local_from_millis(millis: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(millis).single()
}

/// Format a local datetime the way the due-date buffer stores it
pub fn format_due_input(dt: &DateTime<Local>) -> String {
    dt.format(DUE_INPUT_FORMAT).to_string()
}

/// `now` truncated to the minute
fn minute_floor(now: DateTime<Local>) -> DateTime<Local> {
    now.with_second(0).and_then(|dt| dt.with_nanosecond(0)).unwrap_or(now)
}

/// Smallest value the due-date picker accepts
pub fn min_due_input(now: DateTime<Local>) -> String {
    format_due_input(&minute_floor(now))
}

/// Move the due-date buffer by `minutes`, never below the current minute
///
/// An empty, unparsable or past buffer snaps to the minimum first.
pub fn step_due_input(input: &str, minutes: i64, now: DateTime<Local>) -> String {
    let floor = minute_floor(now);
    match parse_due_input(input) {
        Some(current) if current >= floor => {
            let stepped = current + Duration::minutes(minutes);
            format_due_input(&stepped.max(floor))
        }
        _ => format_due_input(&floor),
    }
}

/// Label for the entry form's due-date pill
///
/// Empty input yields an empty string, unparsable input yields
/// `"Invalid Date"`.
pub fn format_due_label(input: &str, now: DateTime<Local>, time_format: &str, date_format: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let Some(due) = parse_due_input(input) else {
        return INVALID_DATE.to_string();
    };

    let time = due.format(time_format).to_string();
    let today = now.date_naive();
    let due_day = due.date_naive();

    let day = if due_day == today {
        LABEL_TODAY.to_string()
    } else if today.succ_opt() == Some(due_day) {
        LABEL_TOMORROW.to_string()
    } else {
        due.format(date_format).to_string()
    };

    format!("{}{}{}", day, DUE_SEPARATOR, time)
}

/// Full due datetime shown under a task
pub fn format_full_datetime(millis: i64, format: &str) -> String {
    local_from_millis(millis)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Due strictly before `now` and not completed
pub fn is_overdue(due_date: Option<i64>, completed: bool, now: DateTime<Local>) -> bool {
    !completed && due_date.is_some_and(|due| due < now.timestamp_millis())
}

/// Due on `now`'s local calendar day and not completed
pub fn is_due_today(due_date: Option<i64>, completed: bool, now: DateTime<Local>) -> bool {
    !completed
        && due_date
            .and_then(local_from_millis)
            .is_some_and(|due| due.date_naive() == now.date_naive())
}

/// Calendar year of `now`
pub fn current_year(now: DateTime<Local>) -> i32 {
    now.year()
}
