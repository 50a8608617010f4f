//! Layout plans for the grid synthesizer
//!
//! A layout plan pins down every structural position of a layout variant:
//! the hole region (if any), the lift cells, the bathroom, and an optional
//! entrance. All positions are fixed constants so synthesis stays
//! bit-for-bit deterministic.

use crate::grid::Coord;
use crate::types::LayoutStyle;

/// A square impassable region carved out of the floor interior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleRegion {
    /// Topmost row of the region
    pub top: usize,
    /// Leftmost column of the region
    pub left: usize,
    /// Side length of the square region
    pub size: usize,
}

impl HoleRegion {
    /// Coordinates inside the hole, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.top..self.top + self.size)
            .flat_map(move |row| (self.left..self.left + self.size).map(move |col| Coord::new(row, col)))
    }

    /// Whether a coordinate falls inside the hole
    pub fn contains(&self, coord: Coord) -> bool {
        (self.top..self.top + self.size).contains(&coord.row)
            && (self.left..self.left + self.size).contains(&coord.col)
    }

    /// In-bounds coordinates within one cell of the hole, excluding the
    /// hole itself - the corridor ring that keeps the floor connected
    pub fn ring(&self) -> impl Iterator<Item = Coord> + '_ {
        let top = self.top.saturating_sub(1);
        let left = self.left.saturating_sub(1);
        (top..=self.top + self.size)
            .flat_map(move |row| (left..=self.left + self.size).map(move |col| Coord::new(row, col)))
            .filter(move |coord| coord.in_bounds() && !self.contains(*coord))
    }
}

/// The structural positions of one layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    /// Central hole region, if the variant has one
    pub hole: Option<HoleRegion>,
    /// Lift cell positions; border positions become doorway anchors
    pub lifts: &'static [Coord],
    /// The single bathroom position
    pub bathroom: Coord,
    /// Entrance doorway position, if the variant has one
    pub entrance: Option<Coord>,
}

/// Lift doorways of the open-spiral layout, cut into the border walls
const OPEN_SPIRAL_LIFTS: [Coord; 3] = [Coord::new(1, 0), Coord::new(5, 0), Coord::new(0, 5)];

/// Lifts of the atrium-ring layout, on the corridor ring around the hole
const ATRIUM_RING_LIFTS: [Coord; 3] = [Coord::new(2, 5), Coord::new(5, 2), Coord::new(5, 7)];

impl LayoutPlan {
    /// The plan for a layout style
    pub fn for_style(style: LayoutStyle) -> Self {
        match style {
            LayoutStyle::OpenSpiral => Self {
                hole: None,
                lifts: &OPEN_SPIRAL_LIFTS,
                bathroom: Coord::new(8, 2),
                entrance: None,
            },
            LayoutStyle::AtriumRing => Self {
                hole: Some(HoleRegion { top: 3, left: 3, size: 4 }),
                lifts: &ATRIUM_RING_LIFTS,
                bathroom: Coord::new(8, 1),
                entrance: Some(Coord::new(9, 4)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_cells_and_containment() {
        let hole = HoleRegion { top: 3, left: 3, size: 4 };
        let cells: Vec<Coord> = hole.cells().collect();
        assert_eq!(cells.len(), 16);
        assert!(hole.contains(Coord::new(3, 3)));
        assert!(hole.contains(Coord::new(6, 6)));
        assert!(!hole.contains(Coord::new(2, 3)));
        assert!(!hole.contains(Coord::new(7, 7)));
    }

    #[test]
    fn test_ring_surrounds_hole() {
        let hole = HoleRegion { top: 3, left: 3, size: 4 };
        let ring: Vec<Coord> = hole.ring().collect();
        // 6x6 bounding box minus the 4x4 hole
        assert_eq!(ring.len(), 36 - 16);
        assert!(ring.contains(&Coord::new(2, 2)));
        assert!(ring.contains(&Coord::new(7, 7)));
        assert!(!ring.contains(&Coord::new(4, 4)));
    }

    #[test]
    fn test_open_spiral_plan_has_border_doorways() {
        let plan = LayoutPlan::for_style(crate::types::LayoutStyle::OpenSpiral);
        assert!(plan.hole.is_none());
        assert!(plan.lifts.iter().all(Coord::on_border));
        assert!(plan.entrance.is_none());
    }

    #[test]
    fn test_atrium_ring_plan_keeps_lifts_on_ring() {
        let plan = LayoutPlan::for_style(crate::types::LayoutStyle::AtriumRing);
        let hole = plan.hole.unwrap();
        let ring: Vec<Coord> = hole.ring().collect();
        for lift in plan.lifts {
            assert!(ring.contains(lift), "lift {} is off the corridor ring", lift);
        }
        assert!(plan.entrance.unwrap().on_border());
    }
}
