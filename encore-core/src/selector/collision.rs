//! Date-collision resolution with a proximity tie-break.

use std::collections::HashSet;

use log::{debug, trace};

use crate::distance::planar;
use crate::{Event, Itinerary};

/// Selection state for a single build.
///
/// Tracks claimed dates and placed performers alongside the events in the
/// order they were placed.
#[derive(Debug, Default)]
pub(super) struct Placement<'a> {
    used_dates: HashSet<&'a str>,
    added_performers: HashSet<&'a str>,
    placed: Vec<&'a Event>,
}

impl<'a> Placement<'a> {
    /// Walk a date-sorted tier, placing at most one event per date.
    ///
    /// Representatives sharing a date form a collision set. The member
    /// nearest to the most recently placed event wins; with nothing placed
    /// yet, the first member in tier order wins. A winner is placed only if
    /// its date and performer are both still free.
    pub(super) fn place_tier(&mut self, tier: &[&'a Event]) {
        for &event in tier {
            if self.added_performers.contains(event.performer()) {
                trace!("skipping {} on {}: already placed", event.performer(), event.date());
                continue;
            }
            let collision: Vec<&'a Event> = tier
                .iter()
                .copied()
                .filter(|candidate| {
                    candidate.date() == event.date()
                        && !self.added_performers.contains(candidate.performer())
                })
                .collect();
            let Some(choice) = self.choose(&collision) else {
                continue;
            };
            let placed = self.try_place(choice);
            if collision.len() > 1 {
                debug!(
                    "resolved {} candidates on {} in favour of {} (placed: {placed})",
                    collision.len(),
                    event.date(),
                    choice.performer(),
                );
            }
        }
    }

    fn choose(&self, collision: &[&'a Event]) -> Option<&'a Event> {
        let candidates = collision.iter().copied();
        match self.placed.last() {
            None => candidates.min_by(|lhs, rhs| lhs.date().cmp(rhs.date())),
            Some(tail) => {
                let origin = tail.position();
                candidates.min_by(|lhs, rhs| {
                    planar(origin, lhs.position()).total_cmp(&planar(origin, rhs.position()))
                })
            }
        }
    }

    fn try_place(&mut self, event: &'a Event) -> bool {
        if self.used_dates.contains(event.date())
            || self.added_performers.contains(event.performer())
        {
            return false;
        }
        trace!("placing {} on {}", event.performer(), event.date());
        self.used_dates.insert(event.date());
        self.added_performers.insert(event.performer());
        self.placed.push(event);
        true
    }

    /// Finish the build, ordering placed events by date.
    pub(super) fn into_itinerary(self) -> Itinerary {
        let mut placed = self.placed;
        placed.sort_by(|lhs, rhs| lhs.date().cmp(rhs.date()));
        Itinerary::from_events(placed.into_iter().cloned().collect())
    }
}
