//! WASM bindings for the booking engine.
//!
//! Structured results cross the boundary as JSON strings; the storefront
//! `JSON.parse`s them into the same shapes it already uses
//! (`{ slots, totalHours, pickupLabel, dropOffLabel }`).

use booking_engine::{
    adjust_quantity, build_month_view_with, epoch_to_time_label, format_duration,
    generate_time_slots, parse_date, parse_month, rental_total, Availability, BookingError,
};
use wasm_bindgen::prelude::*;

/// JS numbers carry epoch seconds; anything non-finite counts as missing.
fn epoch_from_js(value: Option<f64>) -> Option<i64> {
    value.filter(|v| v.is_finite()).map(|v| v.trunc() as i64)
}

fn slots_json(pickup: Option<f64>, drop_off: Option<f64>) -> Result<String, String> {
    let result = generate_time_slots(epoch_from_js(pickup), epoch_from_js(drop_off));
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

fn month_view_json(
    month: &str,
    today: &str,
    selected: Option<String>,
    available_days: &[String],
) -> Result<String, String> {
    let message = |e: BookingError| e.to_string();
    let month = parse_month(month).map_err(message)?;
    let today = parse_date(today).map_err(message)?;
    let selected = selected
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(message)?;
    let availability = Availability::from_day_names(available_days);

    let view = build_month_view_with(month, today, selected, availability.predicate(today));
    serde_json::to_string(&view).map_err(|e| e.to_string())
}

/// Split a pickup/drop-off window into one-hour slots; returns JSON.
#[wasm_bindgen(js_name = generateTimeSlots)]
pub fn generate_time_slots_js(
    pickup: Option<f64>,
    drop_off: Option<f64>,
) -> Result<String, JsError> {
    slots_json(pickup, drop_off).map_err(|e| JsError::new(&e))
}

/// Build the 42-day picker grid; returns JSON.
///
/// Past dates and weekdays outside `available_days` are disabled. Unknown
/// weekday names are ignored, matching how product records are rendered.
#[wasm_bindgen(js_name = buildMonthView)]
pub fn build_month_view_js(
    month: &str,
    today: &str,
    selected: Option<String>,
    available_days: Vec<String>,
) -> Result<String, JsError> {
    month_view_json(month, today, selected, &available_days).map_err(|e| JsError::new(&e))
}

#[wasm_bindgen(js_name = epochToTimeLabel)]
pub fn epoch_to_time_label_js(epoch: f64) -> String {
    epoch_from_js(Some(epoch))
        .map(epoch_to_time_label)
        .unwrap_or_default()
}

#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration_js(total_hours: f64) -> String {
    format_duration(total_hours)
}

/// Apply a quantity step; out-of-stock or out-of-range steps are ignored.
#[wasm_bindgen(js_name = adjustQuantity)]
pub fn adjust_quantity_js(current: u32, change: i32, max: u32) -> u32 {
    adjust_quantity(current, change, max)
}

#[wasm_bindgen(js_name = rentalTotal)]
pub fn rental_total_js(price_per_day: f64, quantity: u32) -> f64 {
    rental_total(price_per_day, quantity)
}
