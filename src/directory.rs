//! Floor and room directories
//!
//! The directory answers "which floors exist" and "which rooms are on a
//! floor" without any backend: the synthetic fallback ranges mirror what
//! the synthesizer will produce. It also owns free-text room-number
//! normalization, a front-end concern kept out of the core searchers.

use crate::grid::FloorGrid;
use crate::types::RoomId;

/// The synthetic floor range `1..=floors`
pub fn floor_numbers(floors: u32) -> Vec<u32> {
    (1..=floors).collect()
}

/// The synthetic room directory for a floor: `R<floor>01` onward
///
/// This is the fallback listing; [`rooms_in`] reads the actual ids from a
/// materialized grid.
pub fn room_directory(floor: u32, rooms_per_floor: usize) -> Vec<RoomId> {
    (1..=rooms_per_floor as u32).map(|seq| RoomId::new(floor, seq)).collect()
}

/// The room ids actually present on a grid, in row-major order
pub fn rooms_in(grid: &FloorGrid) -> Vec<RoomId> {
    grid.room_ids()
}

/// Normalize free-text room input against the selected floor
///
/// Accepts a full room id in any case (`R305`, `r305`) or a bare room
/// number (`5`, `05`) which resolves to that room on `floor`. Bare numbers
/// outside the two-digit sequence range and anything unparseable yield
/// `None`.
pub fn normalize_room_query(input: &str, floor: u32) -> Option<RoomId> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('R') || trimmed.starts_with('r') {
        return trimmed.parse().ok();
    }
    let seq: u32 = trimmed.trim_start_matches('0').parse().ok()?;
    (1..=99).contains(&seq).then(|| RoomId::new(floor, seq))
}
