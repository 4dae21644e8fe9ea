//! Test-only helpers for building events and inspecting itineraries.
//!
//! Available to unit tests and, through the `test-support` feature, to
//! downstream crates' tests.

use crate::{Event, Itinerary};

/// Construct an event at the given coordinates.
///
/// The location label reads `"<performer> live"`.
#[must_use]
pub fn event(performer: &str, date: &str, latitude: f64, longitude: f64) -> Event {
    Event::new(performer, date, format!("{performer} live"), latitude, longitude)
}

/// Construct an event at the origin.
#[must_use]
pub fn event_at_origin(performer: &str, date: &str) -> Event {
    event(performer, date, 0.0, 0.0)
}

/// `(performer, date)` pairs in itinerary order, for compact assertions.
#[must_use]
pub fn summary(itinerary: &Itinerary) -> Vec<(String, String)> {
    itinerary
        .events()
        .iter()
        .map(|entry| (entry.performer().to_owned(), entry.date().to_owned()))
        .collect()
}
