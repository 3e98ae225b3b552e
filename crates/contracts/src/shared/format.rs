//! Date and time formatting for event lists and detail views
//!
//! Dates arrive as `YYYY-MM-DD`, times as `HH:MM` or `HH:MM:SS`.

use chrono::{Datelike, NaiveDate, Weekday};

/// Strict `YYYY-MM-DD` parse of a trimmed string
///
/// # Examples
/// ```
/// use contracts::shared::format::parse_date;
/// assert!(parse_date("2026-02-05").is_some());
/// assert!(parse_date("2026-2-5").is_none());
/// ```
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !s
        .chars()
        .enumerate()
        .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
    {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub(crate) fn is_locale(locale: &str, lang: &str) -> bool {
    locale.to_lowercase().starts_with(lang)
}

fn short_weekday(day: Weekday, locale: &str) -> &'static str {
    let idx = day.num_days_from_monday() as usize;
    if is_locale(locale, "de") {
        ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"][idx]
    } else if is_locale(locale, "da") {
        ["man", "tir", "ons", "tor", "fre", "lør", "søn"][idx]
    } else {
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"][idx]
    }
}

fn numeric_date(date: NaiveDate, locale: &str) -> String {
    if is_locale(locale, "de") || is_locale(locale, "da") {
        format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
    } else {
        format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year())
    }
}

/// Date only, in the locale's numeric form; empty for missing or invalid input
pub fn format_date_only(date: Option<&str>, locale: &str) -> String {
    date.and_then(parse_date)
        .map(|d| numeric_date(d, locale))
        .unwrap_or_default()
}

/// Compact `"<weekday> DD/MM"`; unparseable input is returned as is
pub fn format_simple_date(input: &str, locale: &str) -> String {
    match parse_date(input) {
        Some(d) => format!(
            "{} {:02}/{:02}",
            short_weekday(d.weekday(), locale),
            d.day(),
            d.month()
        ),
        None => input.to_string(),
    }
}

/// `HH:MM`, zero padded; missing or non-numeric parts count as 0
///
/// Out-of-range values are clamped, so `24:00` (end of day) stays `24:00`.
pub fn format_time(time: Option<&str>) -> String {
    let time = match time {
        Some(t) if !t.trim().is_empty() => t.trim(),
        _ => return String::new(),
    };
    let mut parts = time.split(':').map(|p| p.trim().parse::<u32>().unwrap_or(0));
    let hours = parts.next().unwrap_or(0);
    let minutes = parts.next().unwrap_or(0);
    let hours = hours.min(24);
    let minutes = if hours == 24 { 0 } else { minutes.min(59) };
    format!("{:02}:{:02}", hours, minutes)
}

/// Time with the locale's clock wording (`Uhr`, `kl.`)
pub fn format_time_for_ui(time: &str, locale: &str) -> String {
    let time = format_time(Some(time));
    if is_locale(locale, "de") {
        format!("{} Uhr", time)
    } else if is_locale(locale, "da") {
        format!("kl. {}", time)
    } else {
        time
    }
}

/// Start/end time range with the locale's clock wording
pub fn format_time_range_for_ui(start: &str, end: Option<&str>, locale: &str) -> String {
    let range = match end.filter(|e| !e.trim().is_empty()) {
        Some(end) => format!("{} – {}", format_time(Some(start)), format_time(Some(end))),
        None => format_time(Some(start)),
    };
    if is_locale(locale, "de") {
        format!("{} Uhr", range)
    } else if is_locale(locale, "da") {
        format!("kl. {}", range)
    } else {
        range
    }
}

fn date_with_weekday(date: &str, locale: &str) -> String {
    match parse_date(date) {
        Some(d) => format!("{}, {}", short_weekday(d.weekday(), locale), numeric_date(d, locale)),
        None => date.to_string(),
    }
}

/// Human readable period of an event date
///
/// Single-day dates render as `"<date>, <start> - <end>"`, multi-day dates
/// as `"<start date>, <time> – <end date>, <time>"`.
pub fn format_event_date_time(
    start_date: Option<&str>,
    start_time: Option<&str>,
    end_date: Option<&str>,
    end_time: Option<&str>,
    locale: &str,
) -> String {
    let start_date = match start_date.filter(|s| !s.is_empty()) {
        Some(d) => d,
        None => return String::new(),
    };
    let start_time = start_time.filter(|s| !s.is_empty());
    let end_time = end_time.filter(|s| !s.is_empty());
    let end_date = end_date.filter(|s| !s.is_empty());

    match end_date {
        Some(end) if end != start_date => {
            let with_time = |date: &str, time: Option<&str>| match time {
                Some(t) => format!("{}, {}", date_with_weekday(date, locale), format_time(Some(t))),
                None => date_with_weekday(date, locale),
            };
            format!("{} – {}", with_time(start_date, start_time), with_time(end, end_time))
        }
        _ => {
            let date = date_with_weekday(start_date, locale);
            match (start_time, end_time) {
                (Some(s), Some(e)) => {
                    format!("{}, {} - {}", date, format_time(Some(s)), format_time(Some(e)))
                }
                (Some(s), None) => format!("{}, {}", date, format_time(Some(s))),
                _ => date,
            }
        }
    }
}
