//! Household and coordinate types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A stable, opaque household identifier.
///
/// Identifiers come from the registration intake (typically a registration
/// number or file key) and are stable across runs; the router never inspects
/// their contents.
///
/// # Examples
///
/// ```
/// use basket_routing::models::HouseholdId;
///
/// let id = HouseholdId::new("R-2041");
/// assert_eq!(id.to_string(), "R-2041");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HouseholdId(String);

impl HouseholdId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HouseholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HouseholdId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for HouseholdId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A geographic coordinate in decimal degrees.
///
/// # Examples
///
/// ```
/// use basket_routing::models::Coordinate;
///
/// let c = Coordinate::new(43.4643, -80.5204);
/// assert_eq!(c.lat(), 43.4643);
/// assert_eq!(c.lon(), -80.5204);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude in decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// A registered household to be placed on a delivery route.
///
/// Holds the final capacity weight (number of supply boxes) and the geocoded
/// location. Weight derivation from household size and address-to-coordinate
/// resolution both happen upstream; the router reads these fields as given
/// and assumes weights are positive.
///
/// # Examples
///
/// ```
/// use basket_routing::models::Household;
///
/// let h = Household::new("R-2041", 3, 43.4643, -80.5204);
/// assert_eq!(h.id().as_str(), "R-2041");
/// assert_eq!(h.weight(), 3);
/// assert_eq!(h.location().lat(), 43.4643);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    id: HouseholdId,
    weight: i32,
    location: Coordinate,
}

impl Household {
    /// Creates a household with the given identifier, capacity weight, and
    /// location in decimal degrees.
    pub fn new(id: impl Into<HouseholdId>, weight: i32, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            weight,
            location: Coordinate::new(lat, lon),
        }
    }

    /// Household identifier.
    pub fn id(&self) -> &HouseholdId {
        &self.id
    }

    /// Capacity weight (supply boxes this household contributes to a route).
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Geocoded location.
    pub fn location(&self) -> Coordinate {
        self.location
    }
}
