//! Floor layout synthesis
//!
//! This module deterministically builds a [`crate::grid::FloorGrid`] for a
//! floor number. The two layout variants share one synthesis algorithm
//! parameterized by a [`LayoutPlan`]: a fixed set of facility coordinates
//! and an optional central hole region.

pub mod style;
pub mod synthesizer;

// Re-export all public types for convenience
pub use style::{HoleRegion, LayoutPlan};
pub use synthesizer::GridSynthesizer;
