//! Display helpers shared by the booking panel and the date picker.
//!
//! Time labels are always rendered from UTC fields so a slot reads the same
//! on every viewer's machine. Calendar labels work on plain calendar dates
//! and carry no timezone at all.

use chrono::{NaiveDate, NaiveTime};

use crate::slots::SECONDS_PER_HOUR;

const SECONDS_PER_DAY: i64 = 86_400;

/// Column headers for a Sunday-first month grid.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Placeholder shown by the date trigger before anything is picked.
pub const NO_DATE_SELECTED: &str = "Select a date";

// ── epoch_to_time_label ─────────────────────────────────────────────────────

/// Render an epoch-seconds instant as a 12-hour UTC clock label.
///
/// Hour and minute are zero-padded and midnight/noon both render as `12`.
/// Instants before the epoch wrap by whole days, so `-1800` is `11:30 PM`.
///
/// # Examples
///
/// ```
/// use booking_engine::format::epoch_to_time_label;
///
/// assert_eq!(epoch_to_time_label(0), "12:00 AM");
/// assert_eq!(epoch_to_time_label(43_200), "12:00 PM");
/// assert_eq!(epoch_to_time_label(84_600), "11:30 PM");
/// ```
pub fn epoch_to_time_label(epoch: i64) -> String {
    // rem_euclid keeps this in 0..86_400, which from_num_seconds always accepts.
    let seconds_of_day = epoch.rem_euclid(SECONDS_PER_DAY) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds_of_day, 0)
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_default()
}

// ── format_duration ─────────────────────────────────────────────────────────

/// Render a window length in hours as `"8h"` or `"1h 30m"`.
///
/// The value is first snapped to whole seconds (windows are built from
/// epoch seconds), then the leftover minutes are rounded half-up. A
/// leftover is never carried into the hour, so `1h 59m 45s` renders as
/// `"1h 60m"`, the same as the booking panel. Negative, zero and non-finite
/// inputs render as `"0h"`.
pub fn format_duration(total_hours: f64) -> String {
    let total_seconds = if total_hours.is_finite() && total_hours > 0.0 {
        (total_hours * SECONDS_PER_HOUR as f64).round() as u64
    } else {
        0
    };

    let hour = SECONDS_PER_HOUR as u64;
    let hours = total_seconds / hour;
    let remainder = total_seconds % hour;
    if remainder == 0 {
        return format!("{hours}h");
    }

    let minutes = (remainder + 30) / 60;
    format!("{hours}h {minutes}m")
}

// ── calendar labels ─────────────────────────────────────────────────────────

/// Month heading for the date picker, e.g. `"October 2026"`.
///
/// Returns an empty string for a month number outside `1..=12`.
pub fn format_month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default()
}

/// Short label for the date trigger, e.g. `"Mon, Oct 19"`.
pub fn format_selected_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%a, %b %-d").to_string(),
        None => NO_DATE_SELECTED.to_string(),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
