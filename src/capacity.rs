//! Capacity-weight lookup from household size.
//!
//! Programs assign each household a number of supply boxes stepped by how
//! many people live there. The table lives here as intake-side configuration;
//! the route builder itself only ever sees the final integer weight.

use serde::{Deserialize, Serialize};

/// A step table mapping household size to a box count.
///
/// Breakpoints are `(max_household_size, boxes)` pairs with strictly
/// ascending sizes. A lookup returns the first bucket whose limit covers the
/// size; sizes past the last breakpoint clamp to the last bucket.
///
/// # Examples
///
/// ```
/// use basket_routing::capacity::CapacityTable;
///
/// let table = CapacityTable::standard();
/// assert_eq!(table.boxes_for(1), 1);
/// assert_eq!(table.boxes_for(5), 3);
/// assert_eq!(table.boxes_for(40), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CapacityTableRepr")]
pub struct CapacityTable {
    breakpoints: Vec<(u32, i32)>,
}

/// Raw wire form of a table; deserialization funnels through
/// [`CapacityTable::new`] so config files cannot sidestep validation.
#[derive(Deserialize)]
struct CapacityTableRepr {
    breakpoints: Vec<(u32, i32)>,
}

impl TryFrom<CapacityTableRepr> for CapacityTable {
    type Error = String;

    fn try_from(repr: CapacityTableRepr) -> Result<Self, Self::Error> {
        Self::new(repr.breakpoints).ok_or_else(|| {
            "capacity table breakpoints must be non-empty, strictly ascending by size, \
             with positive box counts"
                .to_string()
        })
    }
}

impl CapacityTable {
    /// Creates a table from `(max_household_size, boxes)` breakpoints.
    ///
    /// Returns `None` if the table is empty, sizes are not strictly
    /// ascending, or any box count is non-positive.
    pub fn new(breakpoints: Vec<(u32, i32)>) -> Option<Self> {
        if breakpoints.is_empty() {
            return None;
        }
        if breakpoints.iter().any(|&(_, boxes)| boxes <= 0) {
            return None;
        }
        if breakpoints.windows(2).any(|w| w[0].0 >= w[1].0) {
            return None;
        }
        Some(Self { breakpoints })
    }

    /// The default program table: 1 box per two people, capped at 5 boxes.
    pub fn standard() -> Self {
        Self {
            breakpoints: vec![(2, 1), (4, 2), (6, 3), (8, 4), (12, 5)],
        }
    }

    /// Box count for a household of the given size.
    pub fn boxes_for(&self, household_size: u32) -> i32 {
        for &(max_size, boxes) in &self.breakpoints {
            if household_size <= max_size {
                return boxes;
            }
        }
        // Past the table: clamp to the largest bucket. Every constructor
        // rejects empty tables.
        self.breakpoints
            .last()
            .map(|&(_, boxes)| boxes)
            .expect("capacity table should not be empty")
    }

    /// The configured breakpoints.
    pub fn breakpoints(&self) -> &[(u32, i32)] {
        &self.breakpoints
    }
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self::standard()
    }
}
