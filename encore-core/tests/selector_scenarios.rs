//! Parameterised selection scenarios for `ItinerarySelector`.

mod support;

use encore_core::{Event, ItinerarySelector};
use rstest::rstest;
use support::{event, pair, summary};

const PARIS: (f64, f64) = (48.86, 2.35);
const BRUSSELS: (f64, f64) = (50.85, 4.35);
const MADRID: (f64, f64) = (40.42, -3.70);
const LISBON: (f64, f64) = (38.72, -9.14);

fn show(performer: &str, date: &str, (latitude, longitude): (f64, f64)) -> Event {
    event(performer, date, latitude, longitude)
}

#[rstest]
#[case::distinct_dates(
    vec![show("A", "2024-01-05", PARIS), show("B", "2024-01-03", PARIS)],
    vec![pair("B", "2024-01-03"), pair("A", "2024-01-05")],
)]
#[case::earliest_of_two(
    vec![show("A", "2024-03-01", PARIS), show("A", "2024-02-01", MADRID)],
    vec![pair("A", "2024-02-01")],
)]
#[case::empty(vec![], vec![])]
#[case::first_listed_wins_without_tail(
    vec![show("Far", "2024-04-10", LISBON), show("Near", "2024-04-10", PARIS)],
    vec![pair("Far", "2024-04-10")],
)]
#[case::nearest_wins_after_opener(
    vec![
        show("Opener", "2024-04-01", PARIS),
        show("Far", "2024-04-10", LISBON),
        show("Near", "2024-04-10", BRUSSELS),
    ],
    vec![pair("Opener", "2024-04-01"), pair("Near", "2024-04-10")],
)]
#[case::single_appearance_outranks_earlier_tour(
    // The tour's earliest date is taken by a single-appearance act and the
    // tour is not retried on its later date.
    vec![
        show("Tour", "2024-05-01", PARIS),
        show("Tour", "2024-05-08", PARIS),
        show("Solo", "2024-05-01", MADRID),
    ],
    vec![pair("Solo", "2024-05-01")],
)]
#[case::tours_collide_by_proximity(
    vec![
        show("Solo", "2024-06-01", PARIS),
        show("Far", "2024-06-03", LISBON),
        show("Far", "2024-06-09", LISBON),
        show("Near", "2024-06-03", BRUSSELS),
        show("Near", "2024-06-10", BRUSSELS),
    ],
    vec![pair("Solo", "2024-06-01"), pair("Near", "2024-06-03")],
)]
#[case::lexicographic_dates(
    vec![show("A", "March", PARIS), show("B", "April", PARIS)],
    vec![pair("B", "April"), pair("A", "March")],
)]
fn selects_expected_itinerary(
    #[case] events: Vec<Event>,
    #[case] expected: Vec<(String, String)>,
) {
    let itinerary = ItinerarySelector.build(&events);
    assert_eq!(summary(&itinerary), expected);
    assert!(itinerary.check().is_ok());
}
