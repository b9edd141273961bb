//! Property tests for the routing invariants.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use basket_routing::cluster::build_routes;
use basket_routing::distance::haversine_km;
use basket_routing::models::{Coordinate, Household, HouseholdId};

const MAX_CAPACITY: i32 = 8;

fn households() -> impl Strategy<Value = Vec<Household>> {
    prop::collection::vec((1..=5i32, 43.0..44.0f64, -81.0..-79.0f64), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (weight, lat, lon))| Household::new(format!("H{i:03}"), weight, lat, lon))
            .collect()
    })
}

proptest! {
    #[test]
    fn every_household_appears_in_exactly_one_route(input in households()) {
        let plan = build_routes(&input, MAX_CAPACITY, 1).expect("valid capacity");

        let mut seen: HashSet<&HouseholdId> = HashSet::new();
        for route in plan.routes() {
            for member in route.members() {
                prop_assert!(seen.insert(member), "household {member} routed twice");
            }
        }
        prop_assert_eq!(seen.len(), input.len());
    }

    #[test]
    fn capacity_bound_holds_except_forced_singletons(input in households()) {
        let plan = build_routes(&input, MAX_CAPACITY, 1).expect("valid capacity");

        for route in plan.routes() {
            if route.total_weight() > MAX_CAPACITY {
                prop_assert_eq!(route.len(), 1, "overweight route {} has {} members",
                    route.number(), route.len());
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical(input in households()) {
        let first = build_routes(&input, MAX_CAPACITY, 1).expect("valid capacity");
        let second = build_routes(&input, MAX_CAPACITY, 1).expect("valid capacity");
        prop_assert_eq!(&first, &second);

        let a = serde_json::to_string(&first).expect("serializable");
        let b = serde_json::to_string(&second).expect("serializable");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn absorbed_members_are_nearest_first(input in households()) {
        let plan = build_routes(&input, MAX_CAPACITY, 1).expect("valid capacity");

        let by_id: HashMap<&HouseholdId, &Household> =
            input.iter().map(|h| (h.id(), h)).collect();

        for route in plan.routes() {
            let seed = by_id[&route.members()[0]].location();
            let mut previous = 0.0;
            for member in &route.members()[1..] {
                let d = haversine_km(seed, by_id[member].location());
                prop_assert!(d >= previous,
                    "route {} absorbed a nearer household after a farther one",
                    route.number());
                previous = d;
            }
        }
    }

    #[test]
    fn route_numbers_are_sequential_from_offset(input in households(), start in 1u32..1000) {
        let plan = build_routes(&input, MAX_CAPACITY, start).expect("valid capacity");

        for (i, route) in plan.routes().iter().enumerate() {
            prop_assert_eq!(route.number(), start + i as u32);
        }
    }

    #[test]
    fn haversine_is_symmetric(
        lat1 in -89.0..89.0f64, lon1 in -179.0..179.0f64,
        lat2 in -89.0..89.0f64, lon2 in -179.0..179.0f64,
    ) {
        let a = Coordinate::new(lat1, lon1);
        let b = Coordinate::new(lat2, lon2);
        let forward = haversine_km(a, b);
        let back = haversine_km(b, a);
        prop_assert!((forward - back).abs() < 1e-9);
        prop_assert!(forward >= 0.0);
    }

    #[test]
    fn haversine_identical_points_are_zero(lat in -89.0..89.0f64, lon in -179.0..179.0f64) {
        let c = Coordinate::new(lat, lon);
        prop_assert_eq!(haversine_km(c, c), 0.0);
    }
}
