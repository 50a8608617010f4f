//! Indoor Wayfinding Engine
//!
//! Turns a bare floor number into a navigable grid and routes from the
//! nearest elevator to a destination room. The core is deterministic
//! floor-layout synthesis plus a breadth-first route search engine; the
//! binary wraps them in a CLI front end that handles floor/room selection,
//! room-number normalization, and rendering.
//!
//! # Overview
//!
//! A floor is a fixed 10x10 grid of typed cells (walls, corridor, rooms,
//! lifts, a bathroom, optionally an entrance doorway and a central atrium
//! hole). The synthesizer builds that grid purely from the floor number
//! and a layout style, so the same map can be regenerated anywhere without
//! a backend. Routing runs over the immutable grid snapshot: shortest path
//! between two cells, or a reverse search outward from a destination to
//! the nearest facility.
//!
//! ## Quick Start
//!
//! ```rust
//! use wayfinder::grid::CellKind;
//! use wayfinder::layout::GridSynthesizer;
//! use wayfinder::routing::{assemble, nearest_facility};
//! use wayfinder::types::LayoutStyle;
//!
//! let grid = GridSynthesizer::new(LayoutStyle::OpenSpiral).synthesize(1, 27);
//! let destination = grid.find_room("R101".parse()?).expect("room exists");
//! let route = nearest_facility(&grid, destination, CellKind::Lift)?;
//! let labeled = assemble(route, &grid);
//! println!("{} steps: {:?}", labeled.steps(), labeled.labels);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enumerations, and configuration
//! - [`grid`]: the cell matrix data model and its validation
//! - [`layout`]: deterministic floor-layout synthesis
//! - [`routing`]: shortest path, nearest facility, route assembly
//! - [`directory`]: floor/room listings and room-query normalization
//! - [`source`]: grid sources (authoritative file, local synthesis)
//! - [`render`]: ASCII map and step-list rendering
//! - [`logging`]: tracing setup for the front end
//! - [`error`]: top-level error aggregation
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod directory;
pub mod error;
pub mod grid;
pub mod layout;
pub mod logging;
pub mod render;
pub mod routing;
pub mod source;
pub mod types;

// Re-export all public types for convenience

// Core types and identifiers
pub use types::{CliArgs, LayoutStyle, OutputFormat, RoomId, WayfinderConfig};

// Grid data model
pub use grid::{Cell, CellKind, Coord, FloorGrid, GridValidationError, COLS, ROWS};

// Layout synthesis
pub use layout::{GridSynthesizer, HoleRegion, LayoutPlan};

// Route search
pub use routing::{
    assemble, nearest_facility, nearest_route_anchor, shortest_path, LabeledRoute, Route,
    RouteError, RouteResult,
};

// Sources and front-end plumbing
pub use error::{WayfinderError, WayfinderResult};
pub use logging::LoggingConfig;
pub use source::{GridFileSource, GridSource, SourceError, SynthesizedSource};
