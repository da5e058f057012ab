//! Month grid for the booking date picker.
//!
//! The picker always shows six full Sunday-first weeks (42 cells), padding
//! the displayed month with trailing days of the previous month and leading
//! days of the next. Days outside the displayed month are shown but never
//! selectable.
//!
//! Dates here are plain calendar dates ([`NaiveDate`]), interpreted in
//! whatever zone the caller lives in. "Today" is passed in explicitly; this
//! module never reads the clock.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::error::{BookingError, Result};
use crate::format::format_month_label;

/// Number of cells in a month view (6 weeks × 7 days).
pub const GRID_DAYS: usize = 42;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month.
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    /// Out-of-month days are always disabled.
    pub is_disabled: bool,
}

/// A rendered month: 42 days starting on the Sunday on or before the 1st.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonthView {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonthView {
    /// The grid as rows of seven days, Sunday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    /// Heading for the picker, e.g. `"October 2026"`.
    pub fn label(&self) -> String {
        format_month_label(self.year, self.month)
    }

    /// The first day of the displayed month.
    pub fn first_of_month(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Days that can actually be picked.
    pub fn selectable_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|d| !d.is_disabled)
    }
}

/// Build the month view with no extra disabled dates.
///
/// See [`build_month_view_with`].
pub fn build_month_view(
    month: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> CalendarMonthView {
    build_month_view_with(month, today, selected, |_| false)
}

/// Build the 42-day grid for the month containing `month`.
///
/// # Arguments
///
/// * `month` — Any date in the month to display; the day is ignored
/// * `today` — The caller's current date, used for `is_today`
/// * `selected` — The currently picked date, if any
/// * `is_disabled` — Extra disabled-date rule, consulted only for in-month days
///
/// # Examples
///
/// ```
/// use booking_engine::calendar::build_month_view;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// let oct = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let view = build_month_view(oct, oct, None);
/// assert_eq!(view.days.len(), 42);
/// assert_eq!(view.days[0].date.weekday(), Weekday::Sun);
/// assert_eq!(view.days[0].date, NaiveDate::from_ymd_opt(2026, 9, 27).unwrap());
/// ```
pub fn build_month_view_with<F>(
    month: NaiveDate,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    is_disabled: F,
) -> CalendarMonthView
where
    F: Fn(NaiveDate) -> bool,
{
    let first = month.with_day(1).unwrap_or(month);
    let lead = u64::from(first.weekday().num_days_from_sunday());
    // Only fails within a week of chrono's minimum representable date.
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    trace!(%first, %start, "building month view");

    let days = start
        .iter_days()
        .take(GRID_DAYS)
        .map(|date| {
            let is_current_month = date.year() == first.year() && date.month() == first.month();
            CalendarDay {
                date,
                is_current_month,
                is_today: date == today,
                is_selected: selected == Some(date),
                is_disabled: !is_current_month || is_disabled(date),
            }
        })
        .collect();

    CalendarMonthView {
        year: first.year(),
        month: first.month(),
        days,
    }
}

// ── Navigation ──────────────────────────────────────────────────────────────

/// First day of the month `delta` months away from `month`.
///
/// The day of `month` is ignored, so navigating from January 31st lands on
/// February 1st rather than spilling into March. Saturates at chrono's date
/// range.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let index = i64::from(month.year()) * 12 + i64::from(month.month0()) + i64::from(delta);
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12) as u32;
    i32::try_from(year)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, month0 + 1, 1))
        .unwrap_or(if delta < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// First day of the previous month.
pub fn previous_month(month: NaiveDate) -> NaiveDate {
    shift_month(month, -1)
}

/// First day of the next month.
pub fn next_month(month: NaiveDate) -> NaiveDate {
    shift_month(month, 1)
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| BookingError::InvalidDate(format!("{s}: {e}")))
}

/// Parse a `YYYY-MM` month into the first day of that month.
///
/// A full `YYYY-MM-DD` date is accepted too; its day is dropped.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    let trimmed = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d.with_day(1).unwrap_or(d));
    }
    NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
        .map_err(|e| BookingError::InvalidMonth(format!("{s}: {e}")))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── grid shape ──────────────────────────────────────────────────────

    #[test]
    fn test_grid_has_42_days_starting_sunday() {
        let view = build_month_view(date(2026, 10, 1), date(2026, 10, 19), None);
        assert_eq!(view.days.len(), GRID_DAYS);
        assert_eq!(view.days[0].date.weekday(), Weekday::Sun);
        assert_eq!(view.days[0].date, date(2026, 9, 27));
        assert_eq!(view.days[41].date, date(2026, 11, 7));
    }

    #[test]
    fn test_day_of_month_is_ignored() {
        let a = build_month_view(date(2026, 10, 1), date(2026, 10, 19), None);
        let b = build_month_view(date(2026, 10, 31), date(2026, 10, 19), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_days() {
        // 1 February 2026 is a Sunday.
        let view = build_month_view(date(2026, 2, 10), date(2026, 2, 10), None);
        assert_eq!(view.days[0].date, date(2026, 2, 1));
        assert!(view.days[0].is_current_month);
        // 28 in-month days, then two full weeks of March.
        assert_eq!(view.days.iter().filter(|d| d.is_current_month).count(), 28);
        assert_eq!(view.days[41].date, date(2026, 3, 14));
    }

    #[test]
    fn test_leap_february() {
        let view = build_month_view(date(2024, 2, 1), date(2024, 2, 1), None);
        let in_month: Vec<_> = view.days.iter().filter(|d| d.is_current_month).collect();
        assert_eq!(in_month.len(), 29);
        assert_eq!(in_month.last().unwrap().date, date(2024, 2, 29));
    }

    #[test]
    fn test_december_spills_into_next_year() {
        let view = build_month_view(date(2026, 12, 1), date(2026, 12, 1), None);
        assert_eq!(view.days[0].date, date(2026, 11, 29));
        assert_eq!(view.days[41].date, date(2027, 1, 9));
        assert!(!view.days[41].is_current_month);
    }

    #[test]
    fn test_weeks_are_six_rows_of_seven() {
        let view = build_month_view(date(2026, 10, 1), date(2026, 10, 1), None);
        let weeks: Vec<_> = view.weeks().collect();
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert!(weeks.iter().all(|w| w[0].date.weekday() == Weekday::Sun));
    }

    // ── classification ──────────────────────────────────────────────────

    #[test]
    fn test_today_flag() {
        let view = build_month_view(date(2026, 10, 1), date(2026, 10, 19), None);
        let todays: Vec<_> = view.days.iter().filter(|d| d.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, date(2026, 10, 19));
    }

    #[test]
    fn test_today_outside_grid_flags_nothing() {
        let view = build_month_view(date(2026, 10, 1), date(2027, 5, 5), None);
        assert!(view.days.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_selected_flag() {
        let view = build_month_view(date(2026, 10, 1), date(2026, 10, 1), Some(date(2026, 10, 21)));
        let selected: Vec<_> = view.days.iter().filter(|d| d.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2026, 10, 21));
    }

    #[test]
    fn test_selected_adjacent_month_day_is_flagged_but_disabled() {
        let view = build_month_view(date(2026, 10, 1), date(2026, 10, 1), Some(date(2026, 9, 28)));
        let cell = view.days.iter().find(|d| d.is_selected).unwrap();
        assert!(!cell.is_current_month);
        assert!(cell.is_disabled);
    }

    #[test]
    fn test_out_of_month_days_always_disabled() {
        let view = build_month_view(date(2026, 10, 1), date(2026, 10, 1), None);
        for day in &view.days {
            assert_eq!(day.is_disabled, !day.is_current_month, "{}", day.date);
        }
    }

    #[test]
    fn test_predicate_consulted_only_for_in_month_days() {
        use std::cell::RefCell;
        let seen = RefCell::new(Vec::new());
        let view = build_month_view_with(date(2026, 10, 1), date(2026, 10, 1), None, |d| {
            seen.borrow_mut().push(d);
            false
        });
        let seen = seen.into_inner();
        assert_eq!(seen.len(), 31);
        assert!(seen.iter().all(|d| d.month() == 10));
        assert_eq!(view.selectable_days().count(), 31);
    }

    #[test]
    fn test_predicate_disables_in_month_days() {
        let view = build_month_view_with(date(2026, 10, 1), date(2026, 10, 1), None, |d| {
            d.weekday() == Weekday::Sat || d.weekday() == Weekday::Sun
        });
        assert!(view
            .selectable_days()
            .all(|d| d.date.weekday() != Weekday::Sat && d.date.weekday() != Weekday::Sun));
        // October 2026 has 22 weekdays.
        assert_eq!(view.selectable_days().count(), 22);
    }

    #[test]
    fn test_label_and_first_of_month() {
        let view = build_month_view(date(2026, 10, 19), date(2026, 10, 19), None);
        assert_eq!(view.label(), "October 2026");
        assert_eq!(view.first_of_month(), Some(date(2026, 10, 1)));
        assert_eq!((view.year, view.month), (2026, 10));
    }

    // ── navigation ──────────────────────────────────────────────────────

    #[test]
    fn test_next_and_previous_month() {
        assert_eq!(next_month(date(2026, 10, 19)), date(2026, 11, 1));
        assert_eq!(previous_month(date(2026, 10, 19)), date(2026, 9, 1));
    }

    #[test]
    fn test_navigation_rolls_over_year() {
        assert_eq!(next_month(date(2026, 12, 5)), date(2027, 1, 1));
        assert_eq!(previous_month(date(2027, 1, 5)), date(2026, 12, 1));
    }

    #[test]
    fn test_navigation_from_month_end_does_not_skip() {
        assert_eq!(next_month(date(2026, 1, 31)), date(2026, 2, 1));
    }

    #[test]
    fn test_shift_month_by_many() {
        assert_eq!(shift_month(date(2026, 10, 1), 15), date(2028, 1, 1));
        assert_eq!(shift_month(date(2026, 10, 1), -22), date(2024, 12, 1));
        assert_eq!(shift_month(date(2026, 10, 1), 0), date(2026, 10, 1));
    }

    #[test]
    fn test_shift_month_saturates() {
        assert_eq!(shift_month(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(shift_month(NaiveDate::MIN, -1), NaiveDate::MIN);
    }

    // ── parsing ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-10-19").unwrap(), date(2026, 10, 19));
        assert_eq!(parse_date(" 2026-10-19 ").unwrap(), date(2026, 10, 19));
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date("2026-02-30").unwrap_err().to_string();
        assert!(err.contains("Invalid date"), "got: {err}");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-10").unwrap(), date(2026, 10, 1));
        assert_eq!(parse_month("2026-10-19").unwrap(), date(2026, 10, 1));
    }

    #[test]
    fn test_parse_month_invalid() {
        let err = parse_month("2026-13").unwrap_err().to_string();
        assert!(err.contains("Invalid month"), "got: {err}");
        assert!(parse_month("october").is_err());
    }

    // ── serialization ───────────────────────────────────────────────────

    #[test]
    fn test_serializes_dates_as_iso_strings() {
        let view = build_month_view(date(2026, 10, 1), date(2026, 10, 19), None);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["year"], 2026);
        assert_eq!(json["month"], 10);
        assert_eq!(json["days"][0]["date"], "2026-09-27");
        assert_eq!(json["days"][0]["isCurrentMonth"], false);
        assert_eq!(json["days"][0]["isDisabled"], true);
    }
}
