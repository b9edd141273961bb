//! Delivery route type.

use serde::{Deserialize, Serialize};

use super::HouseholdId;

/// An ordered group of households assigned to one delivery trip.
///
/// Member order is insertion order: the seed household first, then absorbed
/// households in the order the builder accepted them (nearest-first). It is
/// a grouping order, not a driving order.
///
/// The running `total_weight` is the sum of member weights. The builder keeps
/// it at or below the configured maximum, except for a forced singleton whose
/// single household alone exceeds the maximum.
///
/// # Examples
///
/// ```
/// use basket_routing::models::Route;
///
/// let mut route = Route::new(12);
/// route.push_member("R-2041".into(), 3);
/// route.push_member("R-2055".into(), 2);
/// assert_eq!(route.number(), 12);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.total_weight(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    number: u32,
    members: Vec<HouseholdId>,
    total_weight: i32,
}

impl Route {
    /// Creates an empty route with the given route number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            members: Vec::new(),
            total_weight: 0,
        }
    }

    /// Appends a household and adds its weight to the route total.
    pub fn push_member(&mut self, id: HouseholdId, weight: i32) {
        self.total_weight += weight;
        self.members.push(id);
    }

    /// Route number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Member household identifiers in insertion order.
    pub fn members(&self) -> &[HouseholdId] {
        &self.members
    }

    /// Number of member households.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if this route has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Sum of member capacity weights.
    pub fn total_weight(&self) -> i32 {
        self.total_weight
    }
}
