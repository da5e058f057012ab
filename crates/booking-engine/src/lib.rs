//! # booking-engine
//!
//! Deterministic booking computation for a rental storefront.
//!
//! The booking panel of a product page needs two things it should not work
//! out ad hoc in the view layer: a month grid for the date picker, and the
//! list of one-hour slots inside the product's pickup/drop-off window. Both
//! are pure functions of their inputs; "today" is passed in, never read.
//!
//! The calendar works on local calendar dates. Time slots work on UTC epoch
//! seconds. The two conventions are deliberately kept apart.
//!
//! ## Modules
//!
//! - [`calendar`] — 42-day month grid, month navigation, date parsing
//! - [`slots`] — pickup/drop-off window → whole one-hour slots
//! - [`format`] — 12-hour UTC time labels, duration and calendar labels
//! - [`availability`] — past-date and weekday rules for disabling dates
//! - [`quantity`] — quantity stepper and price total
//! - [`error`] — Error types

pub mod availability;
pub mod calendar;
pub mod error;
pub mod format;
pub mod quantity;
pub mod slots;

pub use availability::{parse_weekday, Availability};
pub use calendar::{
    build_month_view, build_month_view_with, next_month, parse_date, parse_month, previous_month,
    shift_month, CalendarDay, CalendarMonthView, GRID_DAYS,
};
pub use error::BookingError;
pub use format::{
    epoch_to_time_label, format_duration, format_month_label, format_selected_date,
    WEEKDAY_HEADERS,
};
pub use quantity::{adjust_quantity, rental_total};
pub use slots::{generate_time_slots, TimeSlot, TimeSlotResult, SECONDS_PER_HOUR};
