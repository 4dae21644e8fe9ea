//! Report which performers made it into an itinerary.
//!
//! A visitor usually plans around a list of acts they want to see. Some of
//! those acts may have no candidate events at all, and others may lose every
//! slot to date collisions. [`Coverage`] names both groups so a presentation
//! layer can surface them next to the itinerary.

use std::collections::{BTreeSet, HashSet};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Event, Itinerary};

/// Performer coverage for an itinerary built from a candidate set.
///
/// # Examples
/// ```
/// use encore_core::{Coverage, Event, ItinerarySelector};
///
/// let events = vec![
///     Event::new("Nova", "2024-04-10", "Lisbon", 38.72, -9.14),
///     Event::new("Quill", "2024-04-10", "Porto", 41.15, -8.61),
/// ];
/// let itinerary = ItinerarySelector.build(&events);
/// let requested = vec!["Nova".to_owned(), "Orbit".to_owned()];
///
/// let coverage = Coverage::new(&requested, &events, &itinerary);
/// assert_eq!(coverage.scheduled, vec!["Nova".to_owned()]);
/// assert_eq!(coverage.displaced, vec!["Quill".to_owned()]);
/// assert_eq!(coverage.absent, vec!["Orbit".to_owned()]);
/// assert!(!coverage.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Coverage {
    /// Performers with an itinerary entry, in itinerary order.
    pub scheduled: Vec<String>,
    /// Performers with candidate events but no itinerary entry, sorted.
    pub displaced: Vec<String>,
    /// Requested performers without any candidate event, in request order.
    pub absent: Vec<String>,
}

impl Coverage {
    /// Compare `itinerary` against the candidates it was built from and the
    /// performers the visitor asked for.
    #[must_use]
    pub fn new(requested: &[String], events: &[Event], itinerary: &Itinerary) -> Self {
        let scheduled: Vec<String> = itinerary.performers().map(str::to_owned).collect();
        let scheduled_set: HashSet<&str> = itinerary.performers().collect();
        let candidates: HashSet<&str> = events.iter().map(Event::performer).collect();

        let displaced = candidates
            .iter()
            .filter(|performer| !scheduled_set.contains(*performer))
            .map(|performer| (*performer).to_owned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut seen = HashSet::new();
        let mut absent = Vec::new();
        for performer in requested {
            if !candidates.contains(performer.as_str()) && seen.insert(performer.as_str()) {
                absent.push(performer.clone());
            }
        }

        Self {
            scheduled,
            displaced,
            absent,
        }
    }

    /// Whether every candidate performer was scheduled and every requested
    /// performer had candidates.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.displaced.is_empty() && self.absent.is_empty()
    }
}
