//! Earliest-per-performer pre-filtering and tier partitioning.

use std::collections::HashMap;

use crate::Event;

/// Representative events split by how often their performer appears.
#[derive(Debug, Default)]
pub(super) struct Tiers<'a> {
    /// Performers with exactly one candidate, sorted by date.
    pub(super) single: Vec<&'a Event>,
    /// Performers with several candidates, sorted by date.
    pub(super) multi: Vec<&'a Event>,
}

struct Appearances<'a> {
    earliest: &'a Event,
    count: usize,
}

/// Reduce `events` to one representative per performer and split them into
/// tiers.
///
/// A performer's representative is its minimum-date event; ties keep the
/// event seen first. Each tier is stable-sorted by date, so representatives
/// sharing a date stay in order of their performer's first appearance.
pub(super) fn partition(events: &[Event]) -> Tiers<'_> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut performers: Vec<Appearances<'_>> = Vec::new();

    for event in events {
        if let Some(seen) = index
            .get(event.performer())
            .and_then(|&slot| performers.get_mut(slot))
        {
            seen.count += 1;
            if event.date() < seen.earliest.date() {
                seen.earliest = event;
            }
        } else {
            index.insert(event.performer(), performers.len());
            performers.push(Appearances {
                earliest: event,
                count: 1,
            });
        }
    }

    let (single, multi): (Vec<_>, Vec<_>) = performers
        .into_iter()
        .partition(|appearances| appearances.count == 1);
    Tiers {
        single: by_date(single),
        multi: by_date(multi),
    }
}

fn by_date(appearances: Vec<Appearances<'_>>) -> Vec<&Event> {
    let mut representatives: Vec<&Event> = appearances
        .into_iter()
        .map(|appearance| appearance.earliest)
        .collect();
    representatives.sort_by(|lhs, rhs| lhs.date().cmp(rhs.date()));
    representatives
}
