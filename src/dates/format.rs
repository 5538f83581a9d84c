//! Moment-style date formatting
//!
//! Format strings use the tokens query authors already write
//! (`MMMM Do, YYYY`, `YYYY-MM-DD HH:mm`). Text inside `[...]` is copied
//! literally; any other character is copied as-is.

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};

/// Tokens in matching order (longest first within each family)
const TOKENS: [&str; 34] = [
    "YYYY", "YY", "Q", "MMMM", "MMM", "MM", "M", "Do", "DDDD", "DDD", "DD", "D", "dddd", "ddd",
    "d", "E", "WW", "W", "HH", "H", "hh", "h", "mm", "m", "ss", "s", "SSS", "A", "a", "ZZ", "Z",
    "X", "x", "GGGG",
];

/// Format an instant in UTC using moment-style tokens
pub fn format_date(instant: &DateTime<FixedOffset>, pattern: &str) -> String {
    let dt = instant.with_timezone(&Utc);
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if ch == '[' {
            if let Some(end) = rest.find(']') {
                out.push_str(&rest[1..end]);
                rest = &rest[end + 1..];
                continue;
            }
        }

        match TOKENS.iter().find(|token| rest.starts_with(**token)) {
            Some(token) => {
                out.push_str(&render_token(&dt, token));
                rest = &rest[token.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

fn render_token(dt: &DateTime<Utc>, token: &str) -> String {
    match token {
        "YYYY" => format!("{:04}", dt.year()),
        "YY" => format!("{:02}", dt.year().rem_euclid(100)),
        "GGGG" => format!("{:04}", dt.iso_week().year()),
        "Q" => ((dt.month() - 1) / 3 + 1).to_string(),
        "MMMM" => dt.format("%B").to_string(),
        "MMM" => dt.format("%b").to_string(),
        "MM" => format!("{:02}", dt.month()),
        "M" => dt.month().to_string(),
        "Do" => ordinal(dt.day()),
        "DDDD" => format!("{:03}", dt.ordinal()),
        "DDD" => dt.ordinal().to_string(),
        "DD" => format!("{:02}", dt.day()),
        "D" => dt.day().to_string(),
        "dddd" => dt.format("%A").to_string(),
        "ddd" => dt.format("%a").to_string(),
        "d" => dt.weekday().num_days_from_sunday().to_string(),
        "E" => dt.weekday().number_from_monday().to_string(),
        "WW" => format!("{:02}", dt.iso_week().week()),
        "W" => dt.iso_week().week().to_string(),
        "HH" => format!("{:02}", dt.hour()),
        "H" => dt.hour().to_string(),
        "hh" => format!("{:02}", twelve_hour(dt.hour())),
        "h" => twelve_hour(dt.hour()).to_string(),
        "mm" => format!("{:02}", dt.minute()),
        "m" => dt.minute().to_string(),
        "ss" => format!("{:02}", dt.second()),
        "s" => dt.second().to_string(),
        "SSS" => format!("{:03}", dt.timestamp_subsec_millis()),
        "A" => meridiem(dt.hour()).to_string(),
        "a" => meridiem(dt.hour()).to_lowercase(),
        "ZZ" => "+0000".to_string(),
        "Z" => "+00:00".to_string(),
        "X" => dt.timestamp().to_string(),
        "x" => dt.timestamp_millis().to_string(),
        other => other.to_string(),
    }
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn meridiem(hour: u32) -> &'static str {
    if hour < 12 {
        "AM"
    } else {
        "PM"
    }
}

/// `1st`, `2nd`, `3rd`, `4th`, ..., `11th`, `12th`, `13th`, `21st`
fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}
