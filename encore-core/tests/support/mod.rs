//! Shared helpers for `encore-core` integration tests.

use encore_core::{Event, Itinerary};

/// Construct an event at the given coordinates.
pub fn event(performer: &str, date: &str, latitude: f64, longitude: f64) -> Event {
    Event::new(performer, date, format!("{performer} live"), latitude, longitude)
}

/// `(performer, date)` pairs in itinerary order.
pub fn summary(itinerary: &Itinerary) -> Vec<(String, String)> {
    itinerary
        .events()
        .iter()
        .map(|entry| (entry.performer().to_owned(), entry.date().to_owned()))
        .collect()
}

/// Owned `(performer, date)` pair for comparison with [`summary`].
pub fn pair(performer: &str, date: &str) -> (String, String) {
    (performer.to_owned(), date.to_owned())
}
