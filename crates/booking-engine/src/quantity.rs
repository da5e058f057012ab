//! Quantity stepper and price total for a booking.

/// Apply a `+`/`-` step to the booked quantity.
///
/// The step is accepted only if the result stays within `1..=max`;
/// otherwise the current quantity is returned unchanged. A product with
/// `max == 0` has nothing in stock and never moves.
pub fn adjust_quantity(current: u32, change: i32, max: u32) -> u32 {
    match current.checked_add_signed(change) {
        Some(next) if (1..=max).contains(&next) => next,
        _ => current,
    }
}

/// Total price for `quantity` items at `price_per_day`.
pub fn rental_total(price_per_day: f64, quantity: u32) -> f64 {
    price_per_day * f64::from(quantity)
}
