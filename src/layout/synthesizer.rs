//! Deterministic floor grid synthesis
//!
//! The synthesizer turns a bare floor number into a navigable grid without
//! consulting any backend. It is pure and deterministic: identical inputs
//! always produce a bit-for-bit identical grid, so the front end can
//! regenerate the same map at any time.

use super::LayoutPlan;
use crate::grid::{Cell, CellKind, Coord, FloorGrid, COLS, ROWS};
use crate::types::{LayoutStyle, RoomId};
use tracing::debug;

/// Builds floor grids for a fixed layout style
#[derive(Debug, Clone, Copy)]
pub struct GridSynthesizer {
    style: LayoutStyle,
}

impl GridSynthesizer {
    /// Create a synthesizer for a layout style
    pub fn new(style: LayoutStyle) -> Self {
        Self { style }
    }

    /// The layout style this synthesizer builds
    pub fn style(&self) -> LayoutStyle {
        self.style
    }

    /// Synthesize the grid for a floor
    ///
    /// Builds walls and corridor, carves the layout's hole (repairing its
    /// corridor ring), places facilities, then numbers rooms over corridor
    /// cells in the clockwise perimeter spiral followed by the interior in
    /// row-major order. Rooms are numbered `R<floor><seq>` from seq = 1
    /// until `rooms_per_floor` rooms are placed or corridor runs out;
    /// asking for more rooms than fit is not an error.
    pub fn synthesize(&self, floor: u32, rooms_per_floor: usize) -> FloorGrid {
        let plan = LayoutPlan::for_style(self.style);
        let mut grid = FloorGrid::with_walled_border();

        if let Some(hole) = plan.hole {
            for coord in hole.cells() {
                grid.set(coord, Cell::Hole);
            }
            // Re-assert the corridor ring so the hole can never cut a cell
            // off from the rest of the floor.
            for coord in hole.ring() {
                if !coord.on_border() {
                    grid.set(coord, Cell::Corridor);
                }
            }
        }

        for &lift in plan.lifts {
            grid.set(lift, Cell::Lift);
        }
        grid.set(plan.bathroom, Cell::Bathroom);

        let mut placed = 0usize;
        for coord in room_numbering_order() {
            if placed == rooms_per_floor {
                break;
            }
            if grid.kind_at(coord) == Some(CellKind::Corridor) {
                placed += 1;
                grid.set(coord, Cell::Room(RoomId::new(floor, placed as u32)));
            }
        }

        if let Some(entrance) = plan.entrance {
            grid.set(entrance, Cell::Entrance);
        }

        debug!(floor, style = %self.style, rooms = placed, "synthesized floor grid");
        grid
    }

    /// How many rooms this layout can hold
    pub fn room_capacity(&self) -> usize {
        self.synthesize(1, 0).cells_of_kind(CellKind::Corridor).len()
    }
}

/// Room numbering order: the clockwise perimeter spiral (top row left to
/// right, right column top to bottom, bottom row right to left, left column
/// bottom to top), then the remaining interior in row-major order
fn room_numbering_order() -> impl Iterator<Item = Coord> {
    let top = (1..COLS - 1).map(|col| Coord::new(1, col));
    let right = (2..ROWS - 1).map(|row| Coord::new(row, COLS - 2));
    let bottom = (1..COLS - 2).rev().map(|col| Coord::new(ROWS - 2, col));
    let left = (2..ROWS - 2).rev().map(|row| Coord::new(row, 1));
    let interior = (2..ROWS - 2).flat_map(|row| (2..COLS - 2).map(move |col| Coord::new(row, col)));
    top.chain(right).chain(bottom).chain(left).chain(interior)
}
