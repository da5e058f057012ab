//! Hourly time-slot generation for a product's pickup/drop-off window.
//!
//! A product advertises one rental window as two epoch-second instants. The
//! booking panel offers that window as whole one-hour slots, plus a summary
//! line (`"09:00 AM → 05:00 PM, 8h total"`). Everything here is computed in
//! UTC so the labels do not depend on the viewer's timezone.
//!
//! A window that is present but shorter than an hour produces no slots while
//! still reporting its fractional length and boundary labels; callers use
//! [`TimeSlotResult::has_window`] to tell that apart from "no window at all".

use serde::Serialize;
use tracing::{debug, trace};

use crate::format::{epoch_to_time_label, format_duration};

/// Length of one bookable slot.
pub const SECONDS_PER_HOUR: i64 = 3600;

/// One bookable hour inside a rental window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Slot start, epoch seconds (UTC).
    pub start_epoch: i64,
    /// Slot end, always `start_epoch + 3600`.
    pub end_epoch: i64,
    /// 12-hour UTC label of the start (e.g. `"09:00 AM"`).
    pub start_label: String,
    /// 12-hour UTC label of the end (e.g. `"10:00 AM"`).
    pub end_label: String,
    /// Combined label shown once a slot is picked (e.g. `"09:00 AM - 10:00 AM"`).
    pub label: String,
}

impl TimeSlot {
    fn starting_at(start_epoch: i64) -> Self {
        let end_epoch = start_epoch + SECONDS_PER_HOUR;
        let start_label = epoch_to_time_label(start_epoch);
        let end_label = epoch_to_time_label(end_epoch);
        let label = format!("{start_label} - {end_label}");
        Self {
            start_epoch,
            end_epoch,
            start_label,
            end_label,
            label,
        }
    }
}

/// Slots plus summary figures for one pickup/drop-off window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResult {
    /// Whole-hour slots, in chronological order.
    pub slots: Vec<TimeSlot>,
    /// Exact window length in hours; may be fractional.
    pub total_hours: f64,
    /// Label of the pickup instant, or `""` when there is no window.
    pub pickup_label: String,
    /// Label of the drop-off instant, or `""` when there is no window.
    pub drop_off_label: String,
}

impl TimeSlotResult {
    /// The neutral result returned for a missing or inverted window.
    pub fn empty() -> Self {
        Self {
            slots: Vec::new(),
            total_hours: 0.0,
            pickup_label: String::new(),
            drop_off_label: String::new(),
        }
    }

    /// Whether a valid window was supplied, even one too short for a slot.
    pub fn has_window(&self) -> bool {
        !self.pickup_label.is_empty()
    }

    /// Look up a slot by its start instant (how the panel tracks selection).
    pub fn find_slot(&self, start_epoch: i64) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.start_epoch == start_epoch)
    }

    /// Summary duration, e.g. `"8h"` or `"1h 30m"`.
    pub fn duration_label(&self) -> String {
        format_duration(self.total_hours)
    }
}

/// Split a pickup/drop-off window into whole one-hour slots.
///
/// # Arguments
///
/// * `pickup` — Window start in epoch seconds, if the product has one
/// * `drop_off` — Window end in epoch seconds, if the product has one
///
/// # Returns
///
/// [`TimeSlotResult::empty`] when either bound is missing or
/// `drop_off <= pickup`. Otherwise `floor(total_hours)` consecutive slots
/// starting at `pickup`; any remainder shorter than an hour shows up only in
/// `total_hours`.
///
/// An instant of `0` is a real pickup time (1970-01-01T00:00:00Z), not a
/// missing value.
///
/// # Examples
///
/// ```
/// use booking_engine::slots::generate_time_slots;
///
/// let result = generate_time_slots(Some(32_400), Some(61_200));
/// assert_eq!(result.slots.len(), 8);
/// assert_eq!(result.slots[0].start_label, "09:00 AM");
/// assert_eq!(result.duration_label(), "8h");
/// ```
pub fn generate_time_slots(pickup: Option<i64>, drop_off: Option<i64>) -> TimeSlotResult {
    let (pickup, drop_off) = match (pickup, drop_off) {
        (Some(p), Some(d)) if d > p => (p, d),
        _ => {
            debug!(?pickup, ?drop_off, "no usable rental window");
            return TimeSlotResult::empty();
        }
    };

    // abs_diff cannot overflow even for windows spanning the whole i64 range.
    let window_seconds = drop_off.abs_diff(pickup);
    let total_hours = window_seconds as f64 / SECONDS_PER_HOUR as f64;
    let full_slots = window_seconds / SECONDS_PER_HOUR as u64;
    trace!(window_seconds, full_slots, "splitting rental window");

    // Every slot ends at or before drop_off, so the additions stay in range.
    let slots = (0..full_slots)
        .map(|i| TimeSlot::starting_at(pickup + i as i64 * SECONDS_PER_HOUR))
        .collect();

    TimeSlotResult {
        slots,
        total_hours,
        pickup_label: epoch_to_time_label(pickup),
        drop_off_label: epoch_to_time_label(drop_off),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
