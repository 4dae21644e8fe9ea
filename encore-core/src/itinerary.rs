//! Ordered, conflict-free selections of events.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Event;

/// Events chosen for a visitor, ordered by date.
///
/// Itineraries returned by [`ItinerarySelector`](crate::ItinerarySelector)
/// never repeat a performer or a date and are sorted ascending by date.
/// Hand-built itineraries can be verified with [`Itinerary::check`].
///
/// # Examples
/// ```
/// use encore_core::{Event, Itinerary};
///
/// let itinerary = Itinerary::from_events(vec![
///     Event::new("Nova", "2024-05-01", "Lisbon", 38.72, -9.14),
///     Event::new("Quill", "2024-05-03", "Porto", 41.15, -8.61),
/// ]);
///
/// assert_eq!(itinerary.len(), 2);
/// assert!(itinerary.check().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Itinerary {
    events: Vec<Event>,
}

/// Invariant violations reported by [`Itinerary::check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// A performer occurs more than once.
    #[error("performer {performer:?} appears more than once")]
    DuplicatePerformer {
        /// The repeated performer.
        performer: String,
    },
    /// Two entries share a date.
    #[error("date {date} is booked more than once")]
    DuplicateDate {
        /// The repeated date.
        date: String,
    },
    /// An entry is dated before the entry preceding it.
    #[error("entry dated {next} follows an entry dated {previous}")]
    OutOfOrder {
        /// Date of the preceding entry.
        previous: String,
        /// Date of the offending entry.
        next: String,
    },
}

impl Itinerary {
    /// Construct an empty itinerary.
    #[must_use]
    pub const fn empty() -> Self {
        Self { events: Vec::new() }
    }

    /// Wrap events in the given order without reordering or validation.
    #[must_use]
    pub const fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Entries in itinerary order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the itinerary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Performers in itinerary order.
    pub fn performers(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(Event::performer)
    }

    /// Whether `performer` has an entry.
    #[must_use]
    pub fn contains_performer(&self, performer: &str) -> bool {
        self.performers().any(|candidate| candidate == performer)
    }

    /// Consume the itinerary, returning its entries.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Verify the performer, date and ordering invariants.
    ///
    /// # Errors
    /// Returns the first [`ItineraryError`] found while walking the entries
    /// in order.
    pub fn check(&self) -> Result<(), ItineraryError> {
        let mut performers = HashSet::new();
        let mut dates = HashSet::new();
        let mut previous: Option<&Event> = None;
        for event in &self.events {
            if !performers.insert(event.performer()) {
                return Err(ItineraryError::DuplicatePerformer {
                    performer: event.performer().to_owned(),
                });
            }
            if !dates.insert(event.date()) {
                return Err(ItineraryError::DuplicateDate {
                    date: event.date().to_owned(),
                });
            }
            if let Some(prior) = previous
                && event.date() < prior.date()
            {
                return Err(ItineraryError::OutOfOrder {
                    previous: prior.date().to_owned(),
                    next: event.date().to_owned(),
                });
            }
            previous = Some(event);
        }
        Ok(())
    }
}

impl IntoIterator for Itinerary {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(performer: &str, date: &str) -> Event {
        Event::new(performer, date, "", 0.0, 0.0)
    }

    #[rstest]
    fn empty_itinerary_is_valid() {
        let itinerary = Itinerary::empty();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.check(), Ok(()));
    }

    #[rstest]
    fn rejects_repeated_performer() {
        let itinerary =
            Itinerary::from_events(vec![entry("Nova", "2024-01-01"), entry("Nova", "2024-01-02")]);
        assert_eq!(
            itinerary.check(),
            Err(ItineraryError::DuplicatePerformer {
                performer: "Nova".into()
            })
        );
    }

    #[rstest]
    fn rejects_repeated_date() {
        let itinerary = Itinerary::from_events(vec![
            entry("Nova", "2024-01-01"),
            entry("Quill", "2024-01-01"),
        ]);
        assert_eq!(
            itinerary.check(),
            Err(ItineraryError::DuplicateDate {
                date: "2024-01-01".into()
            })
        );
    }

    #[rstest]
    fn rejects_descending_dates() {
        let itinerary = Itinerary::from_events(vec![
            entry("Nova", "2024-01-05"),
            entry("Quill", "2024-01-03"),
        ]);
        assert_eq!(
            itinerary.check(),
            Err(ItineraryError::OutOfOrder {
                previous: "2024-01-05".into(),
                next: "2024-01-03".into(),
            })
        );
    }

    #[rstest]
    fn reports_performer_membership() {
        let itinerary = Itinerary::from_events(vec![entry("Nova", "2024-01-01")]);
        assert!(itinerary.contains_performer("Nova"));
        assert!(!itinerary.contains_performer("Quill"));
        assert_eq!(itinerary.performers().collect::<Vec<_>>(), vec!["Nova"]);
    }
}
