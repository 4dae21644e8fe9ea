//! Greedy itinerary selection.
//!
//! Selection runs in two stages:
//!
//! 1. `candidates` reduces the input to each performer's earliest event and
//!    splits performers into single-appearance and multi-appearance tiers.
//! 2. `collision` walks the single-appearance tier and then the
//!    multi-appearance tier in date order, placing at most one event per date
//!    and breaking date ties by proximity to the last placed event.
//!
//! Single-appearance performers are resolved first, so they take a contested
//! date ahead of multi-appearance performers regardless of chronology. A
//! performer who loses its earliest date is not retried on a later one.

mod candidates;
mod collision;

use log::debug;

use crate::{Event, Itinerary, Planner};

use candidates::partition;
use collision::Placement;

/// Stateless selector producing conflict-free, date-ordered itineraries.
///
/// The returned itinerary never repeats a performer or a date. Each
/// performer appears at most once, with its earliest candidate, unless that
/// date went to another performer during collision resolution.
///
/// Dates are compared as strings. `YYYY-MM-DD` values therefore sort
/// chronologically; other shapes are accepted and sort lexicographically.
///
/// # Examples
/// ```
/// use encore_core::{Event, ItinerarySelector};
///
/// let events = vec![
///     Event::new("Nova", "2024-01-05", "Lisbon", 38.72, -9.14),
///     Event::new("Quill", "2024-01-03", "Porto", 41.15, -8.61),
///     Event::new("Quill", "2024-02-01", "Madrid", 40.42, -3.70),
/// ];
///
/// let itinerary = ItinerarySelector.build(&events);
/// let dates: Vec<&str> = itinerary.events().iter().map(|e| e.date()).collect();
/// assert_eq!(dates, vec!["2024-01-03", "2024-01-05"]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ItinerarySelector;

impl ItinerarySelector {
    /// Select an itinerary from `events`.
    ///
    /// The input is left untouched; empty input yields an empty itinerary.
    #[must_use]
    pub fn build(&self, events: &[Event]) -> Itinerary {
        let tiers = partition(events);
        debug!(
            "planning from {} candidates: {} single-appearance and {} multi-appearance performers",
            events.len(),
            tiers.single.len(),
            tiers.multi.len(),
        );
        let mut placement = Placement::default();
        placement.place_tier(&tiers.single);
        placement.place_tier(&tiers.multi);
        placement.into_itinerary()
    }
}

impl Planner for ItinerarySelector {
    fn plan(&self, events: &[Event]) -> Itinerary {
        self.build(events)
    }
}
