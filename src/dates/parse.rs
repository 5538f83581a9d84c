//! Strict ISO 8601 layout matching

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The accepted date layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    YearMonth,
    /// `YYYY-MM-DD`
    CalendarDate,
    /// `YYYYMMDD`
    BasicCalendarDate,
    /// `YYYY-Www`
    WeekDate,
    /// `YYYYWww`
    BasicWeekDate,
    /// `YYYY-Www-D`
    WeekDateWithDay,
    /// `YYYYWwwD`
    BasicWeekDateWithDay,
    /// `YYYY-DDD`
    OrdinalDate,
    /// `YYYYDDD`
    BasicOrdinalDate,
    /// `YYYY-MM-DDTHH:mm:ssZ`
    DateTime,
    /// `YYYY-MM-DDTHH:mm:ss.SSSZ`
    DateTimeMillis,
    /// `YYYY-MM-DDTHHmmssZ`
    BasicDateTime,
    /// `YYYY-MM-DDTHHmmss.SSSZ`
    BasicDateTimeMillis,
}

/// A string that matched one of the layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    /// The instant it denotes. Date-only layouts are midnight UTC.
    pub instant: DateTime<FixedOffset>,
    /// The layout it matched
    pub layout: DateLayout,
}

const OFFSET: &str = r"(?P<tz>Z|[+-]\d{2}:?\d{2})";

static LAYOUTS: LazyLock<Vec<(DateLayout, Regex)>> = LazyLock::new(|| {
    let time_ext = r"T(?P<h>\d{2}):(?P<mi>\d{2}):(?P<s>\d{2})";
    let time_basic = r"T(?P<h>\d{2})(?P<mi>\d{2})(?P<s>\d{2})";
    let date = r"(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})";

    let patterns: Vec<(DateLayout, String)> = vec![
        (DateLayout::Year, r"^(?P<y>\d{4})$".to_string()),
        (DateLayout::YearMonth, r"^(?P<y>\d{4})-(?P<m>\d{2})$".to_string()),
        (DateLayout::CalendarDate, format!("^{date}$")),
        (
            DateLayout::BasicCalendarDate,
            r"^(?P<y>\d{4})(?P<m>\d{2})(?P<d>\d{2})$".to_string(),
        ),
        (DateLayout::WeekDate, r"^(?P<y>\d{4})-W(?P<w>\d{2})$".to_string()),
        (DateLayout::BasicWeekDate, r"^(?P<y>\d{4})W(?P<w>\d{2})$".to_string()),
        (
            DateLayout::WeekDateWithDay,
            r"^(?P<y>\d{4})-W(?P<w>\d{2})-(?P<wd>\d)$".to_string(),
        ),
        (
            DateLayout::BasicWeekDateWithDay,
            r"^(?P<y>\d{4})W(?P<w>\d{2})(?P<wd>\d)$".to_string(),
        ),
        (DateLayout::OrdinalDate, r"^(?P<y>\d{4})-(?P<o>\d{3})$".to_string()),
        (DateLayout::BasicOrdinalDate, r"^(?P<y>\d{4})(?P<o>\d{3})$".to_string()),
        (DateLayout::DateTime, format!("^{date}{time_ext}{OFFSET}$")),
        (
            DateLayout::DateTimeMillis,
            format!(r"^{date}{time_ext}\.(?P<ms>\d{{3}}){OFFSET}$"),
        ),
        (DateLayout::BasicDateTime, format!("^{date}{time_basic}{OFFSET}$")),
        (
            DateLayout::BasicDateTimeMillis,
            format!(r"^{date}{time_basic}\.(?P<ms>\d{{3}}){OFFSET}$"),
        ),
    ];

    patterns
        .into_iter()
        .map(|(layout, pattern)| {
            let regex = Regex::new(&pattern).expect("valid date layout regex");
            (layout, regex)
        })
        .collect()
});

/// Parse a string against the allow-listed layouts
///
/// The whole string must match a layout and its components must form a real
/// calendar value (`2021-02-30` is rejected).
pub fn parse_date(value: &str) -> Option<ParsedDate> {
    LAYOUTS.iter().find_map(|(layout, regex)| {
        let caps = regex.captures(value)?;
        let instant = build_instant(*layout, &caps)?;
        Some(ParsedDate {
            instant,
            layout: *layout,
        })
    })
}

/// Whether a string matches one of the allow-listed layouts
pub fn is_date(value: &str) -> bool {
    parse_date(value).is_some()
}

fn build_instant(layout: DateLayout, caps: &Captures<'_>) -> Option<DateTime<FixedOffset>> {
    let year = number(caps, "y")? as i32;

    let date = match layout {
        DateLayout::Year => NaiveDate::from_ymd_opt(year, 1, 1)?,
        DateLayout::YearMonth => NaiveDate::from_ymd_opt(year, number(caps, "m")?, 1)?,
        DateLayout::WeekDate | DateLayout::BasicWeekDate => {
            NaiveDate::from_isoywd_opt(year, number(caps, "w")?, Weekday::Mon)?
        }
        DateLayout::WeekDateWithDay | DateLayout::BasicWeekDateWithDay => {
            let weekday = iso_weekday(number(caps, "wd")?)?;
            NaiveDate::from_isoywd_opt(year, number(caps, "w")?, weekday)?
        }
        DateLayout::OrdinalDate | DateLayout::BasicOrdinalDate => {
            NaiveDate::from_yo_opt(year, number(caps, "o")?)?
        }
        _ => NaiveDate::from_ymd_opt(year, number(caps, "m")?, number(caps, "d")?)?,
    };

    let time = match caps.name("h") {
        Some(_) => NaiveTime::from_hms_milli_opt(
            number(caps, "h")?,
            number(caps, "mi")?,
            number(caps, "s")?,
            caps.name("ms").map_or(Some(0), |_| number(caps, "ms"))?,
        )?,
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };

    let offset = match caps.name("tz") {
        Some(tz) => parse_offset(tz.as_str())?,
        None => FixedOffset::east_opt(0)?,
    };

    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
}

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name)?.as_str().parse().ok()
}

fn iso_weekday(day: u32) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}

/// `Z`, `+HH:MM` or `+HHMM`
fn parse_offset(tz: &str) -> Option<FixedOffset> {
    if tz == "Z" {
        return FixedOffset::east_opt(0);
    }

    let sign = if tz.starts_with('-') { -1 } else { 1 };
    let digits: String = tz[1..].chars().filter(char::is_ascii_digit).collect();
    let hours: i32 = digits.get(0..2)?.parse().ok()?;
    let minutes: i32 = digits.get(2..4)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
