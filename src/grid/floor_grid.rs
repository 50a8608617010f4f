//! The floor grid matrix and its structural validation
//!
//! A `FloorGrid` is a fixed 10x10 matrix of cells held immutably for the
//! duration of one floor selection. Grids produced by the synthesizer
//! uphold the structural invariants by construction; grids supplied from
//! the outside (an authoritative grid file) are checked with [`FloorGrid::validate`]
//! at the trust boundary before any routing runs on them.

use super::{Cell, CellKind, Coord, COLS, ROWS};
use crate::types::RoomId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// A fixed-size cell matrix representing one building floor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorGrid {
    /// Row-major cell storage, `ROWS * COLS` entries
    cells: Vec<Cell>,
}

impl FloorGrid {
    /// Create a grid with a solid wall border and corridor interior
    pub fn with_walled_border() -> Self {
        let mut grid = Self { cells: vec![Cell::Corridor; ROWS * COLS] };
        for coord in Self::all_coords() {
            if coord.on_border() {
                grid.set(coord, Cell::Wall);
            }
        }
        grid
    }

    /// Build a grid from nested rows, checking the fixed dimensions
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridValidationError> {
        if rows.len() != ROWS || rows.iter().any(|row| row.len() != COLS) {
            return Err(GridValidationError::BadDimensions {
                rows: rows.len(),
                cols: rows.first().map(Vec::len).unwrap_or(0),
            });
        }
        Ok(Self { cells: rows.into_iter().flatten().collect() })
    }

    /// All grid coordinates in row-major order
    pub fn all_coords() -> impl Iterator<Item = Coord> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Coord::new(row, col)))
    }

    /// The cell at a coordinate, or `None` when out of bounds
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        coord.in_bounds().then(|| &self.cells[coord.row * COLS + coord.col])
    }

    /// The kind of the cell at a coordinate, or `None` when out of bounds
    pub fn kind_at(&self, coord: Coord) -> Option<CellKind> {
        self.get(coord).map(Cell::kind)
    }

    /// Whether a route may pass through the cell at a coordinate
    ///
    /// Out-of-bounds coordinates are not traversable.
    pub fn is_traversable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(Cell::is_traversable)
    }

    /// Replace the cell at a coordinate; out-of-bounds writes are ignored
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        if coord.in_bounds() {
            self.cells[coord.row * COLS + coord.col] = cell;
        }
    }

    /// The coordinate of a room, if it exists on this floor
    pub fn find_room(&self, id: RoomId) -> Option<Coord> {
        Self::all_coords().find(|&coord| self.get(coord) == Some(&Cell::Room(id)))
    }

    /// All room ids on this floor, in row-major order
    pub fn room_ids(&self) -> Vec<RoomId> {
        Self::all_coords()
            .filter_map(|coord| match self.get(coord) {
                Some(Cell::Room(id)) => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Coordinates of every cell of the given kind, in row-major order
    pub fn cells_of_kind(&self, kind: CellKind) -> Vec<Coord> {
        Self::all_coords().filter(|&coord| self.kind_at(coord) == Some(kind)).collect()
    }

    /// Check the structural invariants of the grid
    ///
    /// - border cells are walls, except `Lift`/`Entrance` doorway anchors
    /// - room ids are unique
    /// - at least one anchor exists, and every room, corridor, and bathroom
    ///   cell can reach one through traversable cells
    pub fn validate(&self) -> Result<(), GridValidationError> {
        for coord in Self::all_coords().filter(Coord::on_border) {
            match self.kind_at(coord) {
                Some(CellKind::Wall | CellKind::Lift | CellKind::Entrance) => {}
                _ => return Err(GridValidationError::BorderBreach { coord }),
            }
        }

        let mut seen = HashSet::new();
        for id in self.room_ids() {
            if !seen.insert(id) {
                return Err(GridValidationError::DuplicateRoom { id });
            }
        }

        let anchors: Vec<Coord> = Self::all_coords()
            .filter(|&c| matches!(self.kind_at(c), Some(CellKind::Lift | CellKind::Entrance)))
            .collect();
        if anchors.is_empty() {
            return Err(GridValidationError::NoAnchor);
        }

        // Multi-source BFS from every anchor over traversable cells.
        let mut reached: HashSet<Coord> = anchors.iter().copied().collect();
        let mut queue: VecDeque<Coord> = anchors.into();
        while let Some(current) = queue.pop_front() {
            for next in current.neighbors() {
                if self.is_traversable(next) && reached.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        for coord in Self::all_coords() {
            let must_reach = matches!(
                self.kind_at(coord),
                Some(CellKind::Room | CellKind::Corridor | CellKind::Bathroom)
            );
            if must_reach && !reached.contains(&coord) {
                return Err(GridValidationError::Unreachable { coord });
            }
        }

        Ok(())
    }
}

impl Serialize for FloorGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.cells.chunks(COLS))
    }
}

impl<'de> Deserialize<'de> for FloorGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        FloorGrid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

/// Structural problems detected in a floor grid
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridValidationError {
    /// The grid is not the fixed 10x10 shape
    #[error("Grid must be {ROWS}x{COLS}, got {rows}x{cols}")]
    BadDimensions {
        /// Number of rows found
        rows: usize,
        /// Number of columns found in the first row
        cols: usize,
    },

    /// A border cell is neither a wall nor a doorway anchor
    #[error("Border cell {coord} must be a wall or a lift/entrance doorway")]
    BorderBreach {
        /// The offending coordinate
        coord: Coord,
    },

    /// The same room id appears more than once
    #[error("Room id {id} appears more than once")]
    DuplicateRoom {
        /// The duplicated id
        id: RoomId,
    },

    /// The grid has no lift or entrance to route from
    #[error("Grid has no lift or entrance cell")]
    NoAnchor,

    /// A cell that must be routable cannot reach any anchor
    #[error("Cell {coord} cannot reach any lift or entrance")]
    Unreachable {
        /// The cut-off coordinate
        coord: Coord,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(Coord, Cell)]) -> FloorGrid {
        let mut grid = FloorGrid::with_walled_border();
        for (coord, cell) in cells {
            grid.set(*coord, cell.clone());
        }
        grid
    }

    #[test]
    fn test_walled_border_shape() {
        let grid = FloorGrid::with_walled_border();
        for coord in FloorGrid::all_coords() {
            if coord.on_border() {
                assert_eq!(grid.get(coord), Some(&Cell::Wall));
            } else {
                assert_eq!(grid.get(coord), Some(&Cell::Corridor));
            }
        }
    }

    #[test]
    fn test_out_of_bounds_lookups() {
        let grid = FloorGrid::with_walled_border();
        assert_eq!(grid.get(Coord::new(10, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 10)), None);
        assert!(!grid.is_traversable(Coord::new(10, 10)));
    }

    #[test]
    fn test_room_lookup() {
        let id = RoomId::new(2, 7);
        let grid = grid_with(&[(Coord::new(4, 4), Cell::Room(id))]);
        assert_eq!(grid.find_room(id), Some(Coord::new(4, 4)));
        assert_eq!(grid.find_room(RoomId::new(2, 8)), None);
        assert_eq!(grid.room_ids(), vec![id]);
    }

    #[test]
    fn test_validate_accepts_anchored_grid() {
        let grid = grid_with(&[(Coord::new(1, 1), Cell::Lift)]);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_anchor() {
        let grid = FloorGrid::with_walled_border();
        assert_eq!(grid.validate(), Err(GridValidationError::NoAnchor));
    }

    #[test]
    fn test_validate_allows_doorway_anchor_on_border() {
        let grid = grid_with(&[(Coord::new(1, 0), Cell::Lift)]);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_border_breach() {
        let grid = grid_with(&[(Coord::new(1, 1), Cell::Lift), (Coord::new(0, 3), Cell::Corridor)]);
        assert_eq!(
            grid.validate(),
            Err(GridValidationError::BorderBreach { coord: Coord::new(0, 3) })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_rooms() {
        let id = RoomId::new(1, 1);
        let grid = grid_with(&[
            (Coord::new(1, 1), Cell::Lift),
            (Coord::new(2, 2), Cell::Room(id)),
            (Coord::new(3, 3), Cell::Room(id)),
        ]);
        assert_eq!(grid.validate(), Err(GridValidationError::DuplicateRoom { id }));
    }

    #[test]
    fn test_validate_detects_disconnected_room() {
        // A room at (5,5) boxed in by walls cannot reach the lift.
        let grid = grid_with(&[
            (Coord::new(1, 1), Cell::Lift),
            (Coord::new(5, 5), Cell::Room(RoomId::new(1, 1))),
            (Coord::new(4, 5), Cell::Wall),
            (Coord::new(6, 5), Cell::Wall),
            (Coord::new(5, 4), Cell::Wall),
            (Coord::new(5, 6), Cell::Wall),
        ]);
        assert_eq!(
            grid.validate(),
            Err(GridValidationError::Unreachable { coord: Coord::new(5, 5) })
        );
    }

    #[test]
    fn test_grid_serialization_round_trip() {
        let grid = grid_with(&[
            (Coord::new(1, 1), Cell::Lift),
            (Coord::new(2, 2), Cell::Room(RoomId::new(1, 1))),
            (Coord::new(3, 3), Cell::Hole),
        ]);
        let json = serde_json::to_string(&grid).unwrap();
        let back: FloorGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let json = serde_json::to_string(&vec![vec!["X"; 10]; 9]).unwrap();
        assert!(serde_json::from_str::<FloorGrid>(&json).is_err());
    }
}
