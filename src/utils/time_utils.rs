use std::{fmt::Display, time::Duration};

use chrono::{Local, TimeZone};

use crate::domain::{ChartLocale, TimeRange};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_S * 60 * 5;
    pub const MS_IN_15_MIN: i64 = Self::MS_IN_S * 60 * 15;
    pub const MS_IN_30_MIN: i64 = Self::MS_IN_S * 60 * 30;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
}

// chrono patterns mirroring the browser's Intl output for each locale.
// en-US: "03:45 PM" / "10/17" / "10/17/2026 3:45:12 PM"
// ja-JP: "15:45"    / "10/17" / "2026/10/17 15:45:12"
impl ChartLocale {
    fn hour_minute_pattern(&self) -> &'static str {
        match self {
            Self::EnUs => "%I:%M %p",
            Self::JaJp => "%H:%M",
        }
    }

    fn month_day_pattern(&self) -> &'static str {
        "%m/%d"
    }

    fn date_time_pattern(&self) -> &'static str {
        match self {
            Self::EnUs => "%-m/%-d/%Y %-I:%M:%S %p",
            Self::JaJp => "%Y/%-m/%-d %-H:%M:%S",
        }
    }
}

fn format_in<Tz>(epoch_ms: i64, pattern: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format(pattern).to_string(),
        None => String::new(),
    }
}

/// Time-axis tick: hour:minute for the one-day range, month/day for everything longer.
pub fn format_axis_tick<Tz>(epoch_ms: i64, range: TimeRange, locale: ChartLocale, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = if range.is_intraday() {
        locale.hour_minute_pattern()
    } else {
        locale.month_day_pattern()
    };
    format_in(epoch_ms, pattern, tz)
}

/// Hover label: full date and time regardless of range.
pub fn format_hover_label<Tz>(epoch_ms: i64, locale: ChartLocale, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(epoch_ms, locale.date_time_pattern(), tz)
}

/// `format_axis_tick` in the viewer's time zone.
pub fn axis_tick_label(epoch_ms: i64, range: TimeRange, locale: ChartLocale) -> String {
    format_axis_tick(epoch_ms, range, locale, &Local)
}

/// `format_hover_label` in the viewer's time zone.
pub fn hover_label(epoch_ms: i64, locale: ChartLocale) -> String {
    format_hover_label(epoch_ms, locale, &Local)
}

/// Wall-clock time of an event, for the status bar.
pub fn local_clock_label(epoch_ms: i64) -> String {
    format_in(epoch_ms, "%H:%M:%S", &Local)
}

/// Countdown text such as "4m 05s" or "42s".
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    let mins = secs / 60;
    if mins == 0 {
        return format!("{}s", secs);
    }
    let hours = mins / 60;
    if hours == 0 {
        return format!("{}m {:02}s", mins, secs % 60);
    }
    format!("{}h {:02}m", hours, mins % 60)
}
