//! Route construction over geocoded households.
//!
//! - [`build_routes`] — Seed-based greedy nearest-neighbor packing under a
//!   per-route capacity bound, O(n²)

mod nearest_seed;

pub use nearest_seed::{build_routes, BuildError};
