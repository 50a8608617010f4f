//! Floor grid data model
//!
//! This module contains the cell matrix representing one building floor:
//! coordinates, the cell-type vocabulary, and the fixed-size grid with its
//! structural validation (border walls, room uniqueness, connectivity).

pub mod cell;
pub mod coord;
pub mod floor_grid;

/// Number of rows in a floor grid
pub const ROWS: usize = 10;

/// Number of columns in a floor grid
pub const COLS: usize = 10;

// Re-export all public types for convenience
pub use cell::{Cell, CellKind};
pub use coord::Coord;
pub use floor_grid::{FloorGrid, GridValidationError};
