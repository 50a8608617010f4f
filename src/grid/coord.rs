//! Grid coordinates
//!
//! Coordinates are `(row, col)` pairs indexed from the top-left corner.
//! On the wire they serialize as two-element arrays `[row, col]`, matching
//! the path representation used by the floor-plan backend protocol.

use super::{COLS, ROWS};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Offsets enumerated by every search, in the fixed order down, up, right,
/// left. The order is part of the routing contract: it decides which of two
/// equal-length routes a search reconstructs.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A position within a floor grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, 0 at the top
    pub row: usize,
    /// Column index, 0 at the left
    pub col: usize,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies within the fixed grid bounds
    pub fn in_bounds(&self) -> bool {
        self.row < ROWS && self.col < COLS
    }

    /// Whether this coordinate lies on the grid border
    pub fn on_border(&self) -> bool {
        self.row == 0 || self.row == ROWS - 1 || self.col == 0 || self.col == COLS - 1
    }

    /// In-bounds 4-directional neighbors, in the fixed enumeration order
    /// down, up, right, left
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            let next = Coord::new(row, col);
            next.in_bounds().then_some(next)
        })
    }

    /// Whether another coordinate is exactly one 4-directional step away
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Serialize for Coord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.row, self.col).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (row, col) = <(usize, usize)>::deserialize(deserializer)?;
        Ok(Coord::new(row, col))
    }
}
