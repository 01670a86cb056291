//! Fixture builders shared by unit and behaviour tests.
//!
//! The helpers panic on invalid input; they are intended only for
//! hand-written fixtures.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{Category, Place};

/// Build a local timestamp.
///
/// # Panics
/// Panics when the components do not form a valid date and time.
#[must_use]
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or_else(|| panic!("invalid timestamp {year}-{month}-{day} {hour}:{minute}"))
}

/// Saturday 17 October 2026 at `hour`:00.
///
/// # Panics
/// Panics when `hour > 23`.
#[must_use]
pub fn saturday_at(hour: u32) -> NaiveDateTime {
    timestamp(2026, 10, 17, hour, 0)
}

/// Wednesday 14 October 2026 at `hour`:00.
///
/// # Panics
/// Panics when `hour > 23`.
#[must_use]
pub fn wednesday_at(hour: u32) -> NaiveDateTime {
    timestamp(2026, 10, 14, hour, 0)
}

/// Build a place from a category label, base score and tags.
///
/// # Panics
/// Panics when `id` is blank or `base` is invalid.
#[must_use]
pub fn place(id: &str, category: &str, base: f64, tags: &[&str]) -> Place {
    Place::new(id, Category::parse(category), base)
        .unwrap_or_else(|err| panic!("invalid fixture place {id}: {err}"))
        .with_tags(tags.iter().copied())
}

/// Build a place with a precomputed distance in metres.
///
/// # Panics
/// Panics when any argument is invalid.
#[must_use]
pub fn place_at_distance(id: &str, category: &str, base: f64, metres: f64) -> Place {
    place(id, category, base, &[])
        .with_distance(metres)
        .unwrap_or_else(|err| panic!("invalid fixture distance for {id}: {err}"))
}
