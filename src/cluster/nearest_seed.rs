//! Seed-based nearest-neighbor route construction.
//!
//! # Algorithm
//!
//! Walks the household list in input order. The first household not yet
//! assigned seeds a new route; all remaining unassigned households are sorted
//! by great-circle distance from the seed and absorbed in that order whenever
//! they still fit under the capacity bound. A candidate that does not fit is
//! skipped, not a stopping point: a farther household with a smaller weight
//! may still fill the route. The sealed route takes the next route number and
//! the walk continues until every household is assigned.
//!
//! Input order is part of the contract: it decides which households become
//! seeds and breaks distance ties (the sort is stable), so the same slice
//! always yields the same plan. Callers wanting reproducible output must feed
//! households from an ordered source, not from an unordered map.
//!
//! # Complexity
//!
//! O(n²) where n = number of households; every seed re-scans the remaining
//! pool. Fine for the intended scale (low thousands of households).

use std::fmt;

use tracing::debug;

use crate::distance::haversine_km;
use crate::models::{Household, Route, RoutePlan};

/// Error from invalid route-building configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// `max_capacity` was zero or negative.
    InvalidCapacity(i32),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidCapacity(cap) => {
                write!(f, "max route capacity must be positive, got {cap}")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Partitions households into capacity-bounded delivery routes.
///
/// Routes are numbered sequentially from `start_route_number`, which lets
/// incremental runs continue the numbering of previously stored routes.
///
/// A household whose weight alone exceeds `max_capacity` still gets a route
/// of its own; no household is ever left unrouted.
///
/// # Errors
///
/// Returns [`BuildError::InvalidCapacity`] if `max_capacity <= 0`. Valid
/// input never fails mid-run.
///
/// # Examples
///
/// ```
/// use basket_routing::cluster::build_routes;
/// use basket_routing::models::Household;
///
/// let households = vec![
///     Household::new("R-2041", 3, 43.4643, -80.5204),
///     Household::new("R-2055", 3, 43.4723, -80.5449),
///     Household::new("R-2060", 2, 43.4505, -80.4888),
/// ];
///
/// let plan = build_routes(&households, 8, 1).expect("positive capacity");
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.num_households(), 3);
/// assert_eq!(plan.route(1).map(|r| r.total_weight()), Some(8));
/// ```
pub fn build_routes(
    households: &[Household],
    max_capacity: i32,
    start_route_number: u32,
) -> Result<RoutePlan, BuildError> {
    if max_capacity <= 0 {
        return Err(BuildError::InvalidCapacity(max_capacity));
    }

    let n = households.len();
    let mut assigned = vec![false; n];
    let mut plan = RoutePlan::new();
    let mut route_number = start_route_number;

    for seed in 0..n {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;

        let mut route = Route::new(route_number);
        route.push_member(households[seed].id().clone(), households[seed].weight());

        let seed_location = households[seed].location();
        let mut candidates: Vec<(f64, usize)> = (0..n)
            .filter(|&i| !assigned[i])
            .map(|i| (haversine_km(seed_location, households[i].location()), i))
            .collect();

        // Stable sort: equal distances keep input order.
        candidates.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("distances should not be NaN"));

        for &(_, i) in &candidates {
            let weight = households[i].weight();
            if route.total_weight() + weight <= max_capacity {
                assigned[i] = true;
                route.push_member(households[i].id().clone(), weight);
            }
        }

        debug!(
            route = route.number(),
            members = route.len(),
            weight = route.total_weight(),
            "route sealed"
        );
        plan.add_route(route);
        route_number += 1;
    }

    debug!(
        routes = plan.num_routes(),
        households = plan.num_households(),
        "route build complete"
    );
    Ok(plan)
}
