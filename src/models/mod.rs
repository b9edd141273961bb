//! Domain model types for delivery route construction.
//!
//! Provides the core abstractions: households with capacity weights and
//! geocoded locations, routes as ordered member groups bounded by capacity,
//! and the route plan returned by a build run.

mod household;
mod plan;
mod route;

pub use household::{Coordinate, Household, HouseholdId};
pub use plan::RoutePlan;
pub use route::Route;
