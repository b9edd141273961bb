//! Route plan (the routing output container).

use serde::{Deserialize, Serialize};

use super::Route;

/// The complete output of one route-building run.
///
/// Holds routes in creation order and answers the lookup and weight queries
/// that downstream persistence and reporting collaborators need. Nothing
/// mutates a route after the builder adds it.
///
/// # Examples
///
/// ```
/// use basket_routing::models::{Route, RoutePlan};
///
/// let mut plan = RoutePlan::new();
/// let mut route = Route::new(1);
/// route.push_member("R-2041".into(), 3);
/// plan.add_route(route);
///
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.route(1).map(|r| r.total_weight()), Some(3));
/// assert!(plan.route(2).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    routes: Vec<Route>,
}

impl RoutePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Appends a finished route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Routes in creation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Looks up a route by its route number.
    pub fn route(&self, number: u32) -> Option<&Route> {
        self.routes.iter().find(|r| r.number() == number)
    }

    /// Number of routes in the plan.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the plan contains no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total number of households across all routes.
    pub fn num_households(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Sum of capacity weights across all routes.
    pub fn total_weight(&self) -> i32 {
        self.routes.iter().map(|r| r.total_weight()).sum()
    }

    /// Per-route weight totals in creation order, for load reporting.
    pub fn route_weights(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.routes.iter().map(|r| (r.number(), r.total_weight()))
    }
}
