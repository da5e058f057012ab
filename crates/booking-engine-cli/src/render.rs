//! Plain-text rendering for terminal output.

use booking_engine::{format_selected_date, CalendarDay, CalendarMonthView, TimeSlotResult};
use chrono::{Datelike, NaiveDate};

/// Month grid, one week per line.
///
/// `[dd]` selected, `<dd>` today, `(dd)` disabled.
pub fn month_view(view: &CalendarMonthView, selected: Option<NaiveDate>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", view.label()));
    for header in booking_engine::WEEKDAY_HEADERS {
        out.push_str(&format!(" {header} "));
    }
    out.push('\n');

    for week in view.weeks() {
        let line: String = week.iter().map(day_cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out.push_str(&format!("Selected: {}\n", format_selected_date(selected)));
    out
}

fn day_cell(day: &CalendarDay) -> String {
    let (open, close) = if day.is_selected {
        ('[', ']')
    } else if day.is_today {
        ('<', '>')
    } else if day.is_disabled {
        ('(', ')')
    } else {
        (' ', ' ')
    };
    format!("{open}{:>2}{close}", day.date.day())
}

/// Summary line plus one line per slot, mirroring the booking panel.
pub fn time_slots(result: &TimeSlotResult) -> String {
    if !result.has_window() {
        return "No rental window.\n".to_string();
    }

    let mut out = format!(
        "{} → {} ({} total)\n",
        result.pickup_label,
        result.drop_off_label,
        result.duration_label()
    );
    if result.slots.is_empty() {
        out.push_str("No available time slots.\n");
    }
    for slot in &result.slots {
        out.push_str(&format!("  {}\n", slot.label));
    }
    out
}
