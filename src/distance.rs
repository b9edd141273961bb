//! Great-circle distance between geocoded households.
//!
//! Route membership downstream depends on distance comparisons, so this is
//! kept as a single pure function with no rounding or unit conversion beyond
//! degrees-to-radians.

use crate::models::Coordinate;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6367.0;

/// Great-circle distance between two coordinates, in kilometers.
///
/// Uses the haversine formula. Inputs are decimal degrees; any finite pair is
/// accepted, and identical points yield zero. The result is symmetric in its
/// arguments.
///
/// # Examples
///
/// ```
/// use basket_routing::distance::haversine_km;
/// use basket_routing::models::Coordinate;
///
/// let a = Coordinate::new(43.4643, -80.5204);
/// let b = Coordinate::new(43.4723, -80.5449);
/// let d = haversine_km(a, b);
/// assert!(d > 2.1 && d < 2.2);
/// assert_eq!(haversine_km(a, a), 0.0);
/// ```
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.lat().to_radians();
    let lat2 = to.lat().to_radians();
    let delta_lat = (to.lat() - from.lat()).to_radians();
    let delta_lon = (to.lon() - from.lon()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}
