//! Route search over a floor grid
//!
//! This module contains the breadth-first route search engine: shortest
//! path between two cells, reverse search for the nearest facility, and
//! the assembler that packages a found route for display. All searches are
//! pure functions over an immutable grid snapshot.

pub mod assembler;
pub mod error;
pub mod nearest;
pub mod pathfinder;
pub mod route;

// Re-export all public types for convenience
pub use assembler::{assemble, LabeledRoute};
pub use error::{RouteError, RouteResult};
pub use nearest::{nearest_facility, nearest_route_anchor};
pub use pathfinder::shortest_path;
pub use route::Route;
