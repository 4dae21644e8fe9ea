//! Candidate events offered to the itinerary selector.
//!
//! An [`Event`] ties a performer to a date and a place. Dates are opaque
//! strings compared lexicographically, which matches calendar order for
//! `YYYY-MM-DD` values.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single concert a visitor could attend.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// location label is descriptive and never takes part in selection.
///
/// # Examples
/// ```
/// use encore_core::Event;
///
/// let event = Event::new("Nova", "2024-05-01", "Lisbon", 38.72, -9.14);
///
/// assert_eq!(event.performer(), "Nova");
/// assert_eq!(event.date(), "2024-05-01");
/// assert_eq!(event.latitude(), 38.72);
/// assert_eq!(event.position().x, -9.14);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "EventRecord", into = "EventRecord")
)]
pub struct Event {
    performer: String,
    date: String,
    location: String,
    position: Coord<f64>,
}

impl Event {
    /// Construct an event from its performer, date, location label and
    /// coordinates.
    #[must_use]
    pub fn new(
        performer: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            performer: performer.into(),
            date: date.into(),
            location: location.into(),
            position: Coord {
                x: longitude,
                y: latitude,
            },
        }
    }

    /// Identifier of the performing act.
    #[must_use]
    pub fn performer(&self) -> &str {
        &self.performer
    }

    /// Event date, expected as `YYYY-MM-DD`.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Human-readable venue or city.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.position.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.position.x
    }

    /// Position as a coordinate (`x = longitude`, `y = latitude`).
    #[must_use]
    pub const fn position(&self) -> Coord<f64> {
        self.position
    }

    /// Whether the date is shaped like `YYYY-MM-DD`.
    ///
    /// Selection never rejects other shapes; they are still ordered
    /// lexicographically, which may not match calendar order. Collaborators
    /// can use this to warn about such input.
    ///
    /// # Examples
    /// ```
    /// use encore_core::Event;
    ///
    /// assert!(Event::new("Nova", "2024-05-01", "", 0.0, 0.0).has_calendar_date());
    /// assert!(!Event::new("Nova", "May 1st", "", 0.0, 0.0).has_calendar_date());
    /// ```
    #[must_use]
    pub fn has_calendar_date(&self) -> bool {
        self.date.len() == 10
            && self
                .date
                .bytes()
                .enumerate()
                .all(|(idx, byte)| match idx {
                    4 | 7 => byte == b'-',
                    _ => byte.is_ascii_digit(),
                })
    }
}

/// Flat wire representation with explicit latitude and longitude fields.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct EventRecord {
    performer: String,
    date: String,
    #[serde(default)]
    location: String,
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        Self::new(
            record.performer,
            record.date,
            record.location,
            record.latitude,
            record.longitude,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        Self {
            latitude: event.latitude(),
            longitude: event.longitude(),
            performer: event.performer,
            date: event.date,
            location: event.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn stores_latitude_as_y_and_longitude_as_x() {
        let event = Event::new("Nova", "2024-05-01", "Lisbon", 38.72, -9.14);
        assert_eq!(event.position(), Coord { x: -9.14, y: 38.72 });
        assert_eq!(event.location(), "Lisbon");
    }

    #[rstest]
    #[case("2024-05-01", true)]
    #[case("1999-12-31", true)]
    #[case("2024-5-01", false)]
    #[case("2024/05/01", false)]
    #[case("20240501", false)]
    #[case("2024-05-0a", false)]
    #[case("", false)]
    fn recognises_calendar_dates(#[case] date: &str, #[case] expected: bool) {
        let event = Event::new("Nova", date, "", 0.0, 0.0);
        assert_eq!(event.has_calendar_date(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_flat_records() {
        let json = r#"{
            "performer": "Nova",
            "date": "2024-05-01",
            "latitude": 38.72,
            "longitude": -9.14
        }"#;
        let event: Event = serde_json::from_str(json).expect("valid event JSON");
        assert_eq!(event, Event::new("Nova", "2024-05-01", "", 38.72, -9.14));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_explicit_coordinates() {
        let event = Event::new("Nova", "2024-05-01", "Lisbon", 38.72, -9.14);
        let value = serde_json::to_value(&event).expect("serialise event");
        assert_eq!(value["latitude"], 38.72);
        assert_eq!(value["longitude"], -9.14);
        assert_eq!(value["location"], "Lisbon");
    }
}
