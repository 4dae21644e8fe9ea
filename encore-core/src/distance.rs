//! Straight-line distance between event locations.
//!
//! Latitude and longitude are treated as planar coordinates. The result is in
//! degrees and is only meaningful for comparing candidates against the same
//! reference point; it is not a geodesic distance.

use geo::{Coord, Distance, Euclidean, Point};

/// Planar Euclidean distance between two coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use encore_core::distance::planar;
///
/// let d = planar(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn planar(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Euclidean.distance(Point::from(from), Point::from(to))
}
