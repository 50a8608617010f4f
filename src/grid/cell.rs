//! Cell types within a floor grid
//!
//! Cells serialize as the string tags used by the floor-plan wire format:
//! `"X"` for walls, `"HOLE"`, `"CORRIDOR"`, `"LIFT"`, `"BATH"`,
//! `"ENTRANCE"`, and room ids like `"R305"`. Legacy grids marked corridor
//! cells with `" "` or `"C"`; those tags are still accepted on input.

use crate::types::RoomId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One cell of a floor grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable structural wall
    Wall,
    /// Impassable opening (atrium/shaft), not a wall
    Hole,
    /// Walkable corridor space
    Corridor,
    /// Elevator cell, a route anchor
    Lift,
    /// Bathroom cell
    Bathroom,
    /// Building entrance, a route anchor
    Entrance,
    /// A numbered room
    Room(RoomId),
}

impl Cell {
    /// The kind tag of this cell, without payload
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Wall => CellKind::Wall,
            Cell::Hole => CellKind::Hole,
            Cell::Corridor => CellKind::Corridor,
            Cell::Lift => CellKind::Lift,
            Cell::Bathroom => CellKind::Bathroom,
            Cell::Entrance => CellKind::Entrance,
            Cell::Room(_) => CellKind::Room,
        }
    }

    /// Whether a route may pass through this cell
    pub fn is_traversable(&self) -> bool {
        !matches!(self, Cell::Wall | Cell::Hole)
    }

    /// The wire tag for this cell
    pub fn tag(&self) -> String {
        match self {
            Cell::Wall => "X".to_string(),
            Cell::Hole => "HOLE".to_string(),
            Cell::Corridor => "CORRIDOR".to_string(),
            Cell::Lift => "LIFT".to_string(),
            Cell::Bathroom => "BATH".to_string(),
            Cell::Entrance => "ENTRANCE".to_string(),
            Cell::Room(id) => id.to_string(),
        }
    }

    /// The human-readable label this cell contributes to a route step:
    /// the room id for rooms, a fixed short label for facilities, and an
    /// empty string for plain corridor
    pub fn route_label(&self) -> String {
        match self {
            Cell::Room(id) => id.to_string(),
            Cell::Lift => "LIFT".to_string(),
            Cell::Bathroom => "BATH".to_string(),
            Cell::Entrance => "ENTRANCE".to_string(),
            Cell::Wall | Cell::Hole | Cell::Corridor => String::new(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Cell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Cell::Wall),
            "HOLE" => Ok(Cell::Hole),
            // " " and "C" are the legacy corridor tags
            "CORRIDOR" | "" | " " | "C" => Ok(Cell::Corridor),
            "LIFT" => Ok(Cell::Lift),
            "BATH" => Ok(Cell::Bathroom),
            "ENTRANCE" => Ok(Cell::Entrance),
            other if other.starts_with('R') => other.parse::<RoomId>().map(Cell::Room),
            other => Err(format!("Unknown cell tag: {:?}", other)),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.tag())
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The kind tag of a cell, used to select facility types for searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Impassable structural wall
    Wall,
    /// Impassable opening, not a wall
    Hole,
    /// Walkable corridor space
    Corridor,
    /// Elevator cell
    Lift,
    /// Bathroom cell
    Bathroom,
    /// Building entrance
    Entrance,
    /// A numbered room
    Room,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Wall => write!(f, "wall"),
            CellKind::Hole => write!(f, "hole"),
            CellKind::Corridor => write!(f, "corridor"),
            CellKind::Lift => write!(f, "lift"),
            CellKind::Bathroom => write!(f, "bathroom"),
            CellKind::Entrance => write!(f, "entrance"),
            CellKind::Room => write!(f, "room"),
        }
    }
}

impl FromStr for CellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wall" => Ok(CellKind::Wall),
            "hole" => Ok(CellKind::Hole),
            "corridor" => Ok(CellKind::Corridor),
            "lift" | "elevator" => Ok(CellKind::Lift),
            "bathroom" | "bath" => Ok(CellKind::Bathroom),
            "entrance" => Ok(CellKind::Entrance),
            "room" => Ok(CellKind::Room),
            _ => Err(format!("Unknown cell kind: {}", s)),
        }
    }
}
