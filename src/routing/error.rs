//! Route search error types
//!
//! `NotFound` and `FacilityNotFound` are expected outcomes the caller
//! surfaces to the end user, not fatal conditions: a well-synthesized grid
//! never produces them, but externally supplied grids might.

use crate::grid::{CellKind, Coord};
use crate::types::RoomId;
use thiserror::Error;

/// Errors produced by route searches and route construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No route exists between the requested cells
    #[error("No route exists from {start} to {goal}")]
    NotFound {
        /// Requested start coordinate
        start: Coord,
        /// Requested goal coordinate
        goal: Coord,
    },

    /// No cell of the requested facility kind is reachable
    #[error("No reachable {kind} from {from}")]
    FacilityNotFound {
        /// The facility kind searched for
        kind: CellKind,
        /// The coordinate the search started from
        from: Coord,
    },

    /// The destination room does not exist on this floor
    #[error("Room {0} is not on this floor")]
    UnknownDestination(RoomId),

    /// A route must contain at least one coordinate
    #[error("Route must contain at least one coordinate")]
    EmptyRoute,

    /// Two consecutive route coordinates are not 4-adjacent
    #[error("Route steps {0} and {1} are not adjacent")]
    DisjointStep(Coord, Coord),
}

/// Result type for route searches
pub type RouteResult<T> = Result<T, RouteError>;
