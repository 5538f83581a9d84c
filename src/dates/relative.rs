//! Distances between an instant and "now"

use chrono::{DateTime, Datelike, FixedOffset, Months, Utc};

/// Unit for numeric differences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    /// Parse a unit name; unknown names fall back to milliseconds
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "y" | "year" | "years" => TimeUnit::Years,
            "M" | "month" | "months" => TimeUnit::Months,
            "w" | "week" | "weeks" => TimeUnit::Weeks,
            "d" | "day" | "days" => TimeUnit::Days,
            "h" | "hour" | "hours" => TimeUnit::Hours,
            "m" | "minute" | "minutes" => TimeUnit::Minutes,
            "s" | "second" | "seconds" => TimeUnit::Seconds,
            _ => TimeUnit::Milliseconds,
        }
    }
}

/// `now - instant` in whole units, truncated toward zero
pub fn difference(now: DateTime<Utc>, instant: &DateTime<FixedOffset>, unit: TimeUnit) -> i64 {
    let instant = instant.with_timezone(&Utc);
    let millis = (now - instant).num_milliseconds();

    match unit {
        TimeUnit::Years => month_difference(now, instant) / 12,
        TimeUnit::Months => month_difference(now, instant),
        TimeUnit::Weeks => millis / (7 * 86_400_000),
        TimeUnit::Days => millis / 86_400_000,
        TimeUnit::Hours => millis / 3_600_000,
        TimeUnit::Minutes => millis / 60_000,
        TimeUnit::Seconds => millis / 1000,
        TimeUnit::Milliseconds => millis,
    }
}

/// Whole calendar months from `earlier` to `later` (negative when reversed)
fn month_difference(later: DateTime<Utc>, earlier: DateTime<Utc>) -> i64 {
    let whole = i64::from(later.year() - earlier.year()) * 12
        + (i64::from(later.month()) - i64::from(earlier.month()));

    let anchor = if whole >= 0 {
        earlier.checked_add_months(Months::new(whole as u32))
    } else {
        earlier.checked_sub_months(Months::new(whole.unsigned_abs() as u32))
    };

    match anchor {
        Some(anchor) if whole > 0 && anchor > later => whole - 1,
        Some(anchor) if whole < 0 && anchor < later => whole + 1,
        _ => whole,
    }
}

/// Humanized distance from `now`: `in 3 days`, `an hour ago`
pub fn from_now(now: DateTime<Utc>, instant: &DateTime<FixedOffset>) -> String {
    let instant = instant.with_timezone(&Utc);
    let millis = (instant - now).num_milliseconds();
    let phrase = humanize(millis.unsigned_abs() as f64);

    if millis > 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn humanize(millis: f64) -> String {
    let seconds = (millis / 1000.0).round();
    let minutes = (millis / 60_000.0).round();
    let hours = (millis / 3_600_000.0).round();
    let days = (millis / 86_400_000.0).round();
    let months_exact = millis / 86_400_000.0 * 4800.0 / 146_097.0;
    let months = months_exact.round();
    let years = (months_exact / 12.0).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}
