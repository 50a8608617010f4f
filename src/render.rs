//! Text rendering of grids and routes
//!
//! Pure string producers used by the CLI front end: an ASCII map with the
//! route overlaid, and a numbered step list. Nothing here touches stdout.

use crate::grid::{Cell, FloorGrid};
use crate::routing::{LabeledRoute, Route};

const CELL_WIDTH: usize = 7;

/// Render a grid as an ASCII map, marking route cells with `*`
///
/// Walls render as `#`, holes as `~`, corridor as `.`, facilities and
/// rooms by their short tags.
pub fn render_grid(grid: &FloorGrid, route: Option<&Route>) -> String {
    let mut out = String::new();
    for coord in FloorGrid::all_coords() {
        let token = grid.get(coord).map(display_token).unwrap_or_default();
        let marked = match route {
            Some(route) if route.contains(coord) => format!("*{}", token),
            _ => token,
        };
        out.push_str(&format!("{:<width$}", marked, width = CELL_WIDTH));
        if coord.col == crate::grid::COLS - 1 {
            // Trim the padding after the last column.
            while out.ends_with(' ') {
                out.pop();
            }
            out.push('\n');
        }
    }
    out
}

/// Render a labeled route as a numbered step list
///
/// Steps without a label (plain corridor) print as `corridor`.
pub fn render_steps(labeled: &LabeledRoute) -> String {
    let mut out = String::new();
    for (index, (coord, label)) in
        labeled.path.coords().iter().zip(&labeled.labels).enumerate()
    {
        let shown = if label.is_empty() { "corridor" } else { label };
        out.push_str(&format!("{:>3}. {} {}\n", index + 1, coord, shown));
    }
    out
}

fn display_token(cell: &Cell) -> String {
    match cell {
        Cell::Wall => "#".to_string(),
        Cell::Hole => "~".to_string(),
        Cell::Corridor => ".".to_string(),
        Cell::Lift => "LIFT".to_string(),
        Cell::Bathroom => "BATH".to_string(),
        Cell::Entrance => "ENTR".to_string(),
        Cell::Room(id) => id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CellKind, Coord};
    use crate::layout::GridSynthesizer;
    use crate::routing::{assemble, nearest_facility};
    use crate::types::LayoutStyle;

    #[test]
    fn test_map_has_one_line_per_row() {
        let grid = GridSynthesizer::new(LayoutStyle::AtriumRing).synthesize(1, 27);
        let map = render_grid(&grid, None);
        assert_eq!(map.lines().count(), crate::grid::ROWS);
        assert!(map.contains("LIFT"));
        assert!(map.contains("R101"));
        assert!(map.contains('~'));
    }

    #[test]
    fn test_route_cells_are_marked() {
        let grid = GridSynthesizer::new(LayoutStyle::OpenSpiral).synthesize(1, 27);
        let route = nearest_facility(&grid, Coord::new(4, 4), CellKind::Lift).unwrap();
        let map = render_grid(&grid, Some(&route));
        assert!(map.contains("*LIFT"));
        assert!(map.contains("*."));
    }

    #[test]
    fn test_step_list_numbers_every_coordinate() {
        let grid = GridSynthesizer::new(LayoutStyle::OpenSpiral).synthesize(1, 27);
        let destination = grid.find_room("R101".parse().unwrap()).unwrap();
        let route = nearest_facility(&grid, destination, CellKind::Lift).unwrap();
        let labeled = assemble(route, &grid);
        let steps = render_steps(&labeled);

        assert_eq!(steps.lines().count(), labeled.path.len());
        assert!(steps.contains("1. (1, 0) LIFT"));
        assert!(steps.contains("2. (1, 1) R101"));
    }
}
