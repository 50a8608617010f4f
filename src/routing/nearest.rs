//! Reverse search for the nearest facility
//!
//! Instead of searching forward from every facility and taking the minimum,
//! this search runs breadth-first **outward from the destination** and
//! stops at the first cell of the requested kind it dequeues. The two are
//! equivalent in route length; the reverse form needs no knowledge of the
//! facility coordinates up front.

use super::pathfinder::unwind;
use super::{Route, RouteError, RouteResult};
use crate::grid::{CellKind, Coord, FloorGrid};
use std::collections::{HashMap, VecDeque};

/// Find the nearest cell of `kind` and the route from it to `destination`
///
/// The returned route runs facility-first: its start is the found facility
/// cell and its goal is `destination`. A destination that is itself of the
/// requested kind yields the single-element route `[destination]`.
///
/// When several facility cells are equidistant, the one dequeued first
/// under the fixed down/up/right/left neighbor order wins. That tie-break
/// is an implementation detail, not a guarantee - callers must not rely on
/// which equidistant facility is chosen.
pub fn nearest_facility(
    grid: &FloorGrid,
    destination: Coord,
    kind: CellKind,
) -> RouteResult<Route> {
    if !grid.is_traversable(destination) {
        return Err(RouteError::FacilityNotFound { kind, from: destination });
    }

    let mut parents: HashMap<Coord, Coord> = HashMap::new();
    let mut queue: VecDeque<Coord> = VecDeque::new();
    queue.push_back(destination);

    while let Some(current) = queue.pop_front() {
        if grid.kind_at(current) == Some(kind) {
            // Parent pointers lead back to the destination (the BFS root);
            // unwinding yields destination -> facility, reversed below.
            let mut coords = unwind(&parents, destination, current);
            coords.reverse();
            return Route::new(coords);
        }
        for next in current.neighbors() {
            if !grid.is_traversable(next)
                || next == destination
                || parents.contains_key(&next)
            {
                continue;
            }
            parents.insert(next, current);
            queue.push_back(next);
        }
    }

    Err(RouteError::FacilityNotFound { kind, from: destination })
}

/// Route from the nearest route anchor to `destination`
///
/// Prefers a lift; falls back to the entrance when the grid has no
/// reachable lift.
pub fn nearest_route_anchor(grid: &FloorGrid, destination: Coord) -> RouteResult<Route> {
    match nearest_facility(grid, destination, CellKind::Lift) {
        Err(RouteError::FacilityNotFound { .. }) => {
            nearest_facility(grid, destination, CellKind::Entrance)
        }
        other => other,
    }
}
