// web_app/model/relative_time.rs - Human readable relative timestamps

use chrono::{DateTime, Utc};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const MONTH: f64 = 30.4 * DAY;

/// Describe `then` relative to `now`, e.g. "3 days ago" or "in an hour"
pub fn relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let delta = then.signed_duration_since(now).num_seconds();
    let phrase = magnitude(delta.unsigned_abs() as f64);

    if delta > 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

// Each step branches on the rounded count of the unit it prints, which keeps
// "45 minutes" or "26 days" from ever showing up.
fn magnitude(seconds: f64) -> String {
    let count = |unit: f64| (seconds / unit).round() as u64;

    let minutes = count(MINUTE);
    let hours = count(HOUR);
    let days = count(DAY);
    let months = count(MONTH);

    if seconds.round() <= 44.0 {
        "a few seconds".to_string()
    } else if seconds.round() <= 89.0 {
        "a minute".to_string()
    } else if minutes <= 44 {
        plural(minutes, "a minute", "minutes")
    } else if minutes <= 89 {
        "an hour".to_string()
    } else if hours <= 21 {
        plural(hours, "an hour", "hours")
    } else if hours <= 35 {
        "a day".to_string()
    } else if days <= 25 {
        plural(days, "a day", "days")
    } else if days <= 45 {
        "a month".to_string()
    } else if months <= 10 {
        plural(months, "a month", "months")
    } else if months <= 17 {
        "a year".to_string()
    } else {
        plural(count(12.0 * MONTH), "a year", "years")
    }
}

fn plural(count: u64, one: &str, unit: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        format!("{} {}", count, unit)
    }
}
