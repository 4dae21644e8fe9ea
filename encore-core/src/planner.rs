use crate::{Event, Itinerary};

/// Turn a set of candidate events into an itinerary.
///
/// Planning is infallible: every well-typed input yields an itinerary, and
/// empty input yields an empty one. Planners must be `Send + Sync` so one
/// instance can serve callers on several threads.
///
/// # Examples
///
/// ```rust
/// use encore_core::{Event, Itinerary, Planner};
///
/// struct FirstOnly;
///
/// impl Planner for FirstOnly {
///     fn plan(&self, events: &[Event]) -> Itinerary {
///         Itinerary::from_events(events.iter().take(1).cloned().collect())
///     }
/// }
///
/// let events = vec![Event::new("Nova", "2024-05-01", "Lisbon", 38.72, -9.14)];
/// assert_eq!(FirstOnly.plan(&events).len(), 1);
/// ```
pub trait Planner: Send + Sync {
    /// Select an itinerary from `events`.
    fn plan(&self, events: &[Event]) -> Itinerary;
}
