//! Which dates a product can be booked on.
//!
//! Products list the weekdays they can be rented (`["monday", "friday"]`).
//! The date picker disables every date before today and every weekday not
//! on that list; an empty list means the product has no weekday restriction.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::error::{BookingError, Result};

/// Parse a full English weekday name, case-insensitively.
///
/// # Errors
///
/// Returns [`BookingError::InvalidWeekday`] for anything other than
/// `"sunday"` through `"saturday"` (abbreviations are rejected).
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "sunday" => Ok(Weekday::Sun),
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        _ => Err(BookingError::InvalidWeekday(name.to_string())),
    }
}

/// The weekdays a product is offered on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    /// Bit `n` set means `Weekday::num_days_from_sunday() == n` is bookable.
    days: u8,
    /// Whether any weekday restriction was configured at all.
    restricted: bool,
}

impl Availability {
    /// No weekday restriction.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Build from weekday names, skipping names that don't parse.
    ///
    /// A skipped name still counts as a restriction: `["funday"]` makes the
    /// product unavailable on every day, the same as a list of names that
    /// never match a real weekday.
    pub fn from_day_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut availability = Self {
            days: 0,
            restricted: !names.is_empty(),
        };
        for name in names {
            match parse_weekday(name.as_ref()) {
                Ok(day) => availability.insert(day),
                Err(e) => warn!(error = %e, "ignoring unknown available day"),
            }
        }
        availability
    }

    /// Build from weekday names, failing on the first one that doesn't parse.
    pub fn try_from_day_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut availability = Self {
            days: 0,
            restricted: !names.is_empty(),
        };
        for name in names {
            availability.insert(parse_weekday(name.as_ref())?);
        }
        Ok(availability)
    }

    /// Build from weekdays directly. An empty slice means unrestricted.
    pub fn from_weekdays(days: &[Weekday]) -> Self {
        let mut availability = Self {
            days: 0,
            restricted: !days.is_empty(),
        };
        for day in days {
            availability.insert(*day);
        }
        availability
    }

    fn insert(&mut self, day: Weekday) {
        self.days |= 1 << day.num_days_from_sunday();
    }

    pub fn is_restricted(&self) -> bool {
        self.restricted
    }

    /// Whether `date` falls on an offered weekday.
    pub fn is_available(&self, date: NaiveDate) -> bool {
        !self.restricted || self.days & (1 << date.weekday().num_days_from_sunday()) != 0
    }

    /// Whether the picker should disable `date`: past dates and unoffered weekdays.
    pub fn is_disabled(&self, date: NaiveDate, today: NaiveDate) -> bool {
        date < today || !self.is_available(date)
    }

    /// [`is_disabled`](Self::is_disabled) bound to `today`, ready for
    /// [`build_month_view_with`](crate::calendar::build_month_view_with).
    pub fn predicate(&self, today: NaiveDate) -> impl Fn(NaiveDate) -> bool + '_ {
        move |date| self.is_disabled(date, today)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
