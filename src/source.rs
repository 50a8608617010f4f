//! Grid sources
//!
//! Routing only ever sees an already-materialized [`FloorGrid`]; where that
//! grid comes from is an injected capability. The synthesizing source is
//! the deterministic local fallback, and the file source stands in for an
//! authoritative backend whose response has already been fetched to disk.
//! The front end composes the two: authoritative first, synthesis on any
//! failure.

use crate::grid::FloorGrid;
use crate::layout::GridSynthesizer;
use crate::types::WayfinderConfig;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A provider of floor grids
pub trait GridSource {
    /// Produce the grid for a floor
    fn floor_grid(&self, floor: u32) -> Result<FloorGrid, SourceError>;
}

/// The deterministic local source: synthesizes grids on demand
#[derive(Debug, Clone)]
pub struct SynthesizedSource {
    synthesizer: GridSynthesizer,
    rooms_per_floor: usize,
}

impl SynthesizedSource {
    /// Create a synthesizing source from the resolved configuration
    pub fn new(config: &WayfinderConfig) -> Self {
        Self {
            synthesizer: GridSynthesizer::new(config.layout),
            rooms_per_floor: config.rooms_per_floor,
        }
    }

    /// Synthesize the grid for a floor; unlike the trait method this
    /// cannot fail
    pub fn synthesize(&self, floor: u32) -> FloorGrid {
        self.synthesizer.synthesize(floor, self.rooms_per_floor)
    }
}

impl GridSource for SynthesizedSource {
    fn floor_grid(&self, floor: u32) -> Result<FloorGrid, SourceError> {
        Ok(self.synthesize(floor))
    }
}

/// An authoritative grid file
///
/// The file holds either a single 10x10 grid of cell tags, or a JSON
/// object mapping floor numbers to such grids:
///
/// ```json
/// {"1": [["X", "X", ...], ...], "2": [["X", ...], ...]}
/// ```
#[derive(Debug, Clone)]
pub struct GridFileSource {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GridFilePayload {
    ByFloor(BTreeMap<String, FloorGrid>),
    Single(FloorGrid),
}

impl GridFileSource {
    /// Create a file source for a path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    fn read_payload(&self) -> Result<GridFilePayload, SourceError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl GridSource for GridFileSource {
    fn floor_grid(&self, floor: u32) -> Result<FloorGrid, SourceError> {
        match self.read_payload()? {
            GridFilePayload::Single(grid) => Ok(grid),
            GridFilePayload::ByFloor(floors) => floors
                .get(&floor.to_string())
                .cloned()
                .ok_or(SourceError::MissingFloor { floor }),
        }
    }
}

/// Failures while obtaining a grid from a source
#[derive(Debug, Error)]
pub enum SourceError {
    /// The grid file could not be read
    #[error("Failed to read grid file: {0}")]
    Io(#[from] std::io::Error),

    /// The grid file is not valid grid JSON
    #[error("Failed to parse grid file: {0}")]
    Json(#[from] serde_json::Error),

    /// The grid file has no entry for the requested floor
    #[error("Grid file has no entry for floor {floor}")]
    MissingFloor {
        /// The floor that was requested
        floor: u32,
    },
}
