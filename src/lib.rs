//! # basket-routing
//!
//! Route construction for seasonal basket delivery programs. Takes geocoded
//! households with capacity weights and partitions them into delivery routes
//! with a deterministic, capacity-bounded nearest-neighbor clustering.
//!
//! Intake (address geocoding, weight derivation) and output (storage, route
//! cards, labels) live in the surrounding application; this crate covers the
//! step in between.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Household, Route, RoutePlan)
//! - [`distance`] — Great-circle distance between coordinates
//! - [`capacity`] — Household-size to box-count lookup table
//! - [`cluster`] — Route construction (seed-based nearest-neighbor packing)

pub mod capacity;
pub mod cluster;
pub mod distance;
pub mod models;
