//! Route assembly for display
//!
//! Packages a found route into the shape the front end renders and the
//! wire protocol carries: the raw coordinates plus one human-readable
//! label per step.

use super::Route;
use crate::grid::FloorGrid;
use serde::Serialize;

/// A route together with one display label per coordinate
///
/// Serializes to the wire shape `{"path": [[r,c],...], "labels": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledRoute {
    /// The route coordinates, start first
    pub path: Route,
    /// One label per coordinate: the room id for rooms, a fixed short
    /// label for facilities, empty for plain corridor
    pub labels: Vec<String>,
}

impl LabeledRoute {
    /// Number of moves along the route
    pub fn steps(&self) -> usize {
        self.path.steps()
    }
}

/// Label every coordinate of a route against its grid
///
/// Pure function: the labels vector always has exactly one entry per route
/// coordinate. Coordinates outside the grid (which a well-formed route
/// never contains) label as empty strings.
pub fn assemble(route: Route, grid: &FloorGrid) -> LabeledRoute {
    let labels = route
        .coords()
        .iter()
        .map(|&coord| grid.get(coord).map(|cell| cell.route_label()).unwrap_or_default())
        .collect();
    LabeledRoute { path: route, labels }
}
