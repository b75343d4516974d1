use crate::error::InvariantError;
use crate::geometry::Outline;
use crate::math::{Direction, GridPoint};

use super::grid::FillGrid;

/// Traces the boundary of the filled region containing `start` clockwise.
///
/// The walk moves along lattice vertices (cell corners) keeping filled cells
/// on its right, starting at the top-left corner of `start` heading `+x`. At
/// each vertex it prefers a right turn, then straight, then a left turn. A
/// signed run is emitted whenever the heading changes, so the outline starts
/// with a `+x` run and ends with the `+y` run back to the start.
///
/// # Errors
///
/// Returns [`InvariantError::TurnAround`] when no edge continues the
/// boundary, and [`InvariantError::TraceLimit`] when more than `max_runs`
/// runs are emitted.
pub fn trace_outline(
    grid: &FillGrid,
    start: GridPoint,
    max_runs: usize,
) -> Result<Outline, InvariantError> {
    let origin = GridPoint::new(start.x, start.y + 1);
    let mut at = origin;
    let mut heading = Direction::PosX;
    let mut length = 0_i32;
    let mut runs = Vec::new();

    loop {
        at += heading.step();
        length += 1;
        if at == origin {
            runs.push(heading.signed_run(length));
            break;
        }

        let next = [heading.turn_right(), heading, heading.turn_left()]
            .into_iter()
            .find(|&dir| is_boundary_edge(grid, at, dir))
            .ok_or(InvariantError::TurnAround { x: at.x, y: at.y })?;

        if next != heading {
            runs.push(heading.signed_run(length));
            if runs.len() > max_runs {
                return Err(InvariantError::TraceLimit(max_runs));
            }
            heading = next;
            length = 0;
        }
    }

    Ok(Outline::new(runs))
}

/// Returns `true` when the edge leaving `vertex` along `dir` has a filled
/// cell on its right and an empty cell on its left.
fn is_boundary_edge(grid: &FillGrid, vertex: GridPoint, dir: Direction) -> bool {
    grid.is_filled(edge_cell(vertex, dir, dir.turn_right()))
        && !grid.is_filled(edge_cell(vertex, dir, dir.turn_left()))
}

/// Cell beside the unit edge from `vertex` along `dir`, on the `side` of it.
fn edge_cell(vertex: GridPoint, dir: Direction, side: Direction) -> GridPoint {
    // doubled coordinates of the cell centre, then floor-halved
    let doubled = vertex.coords * 2 + dir.step() + side.step();
    GridPoint::new(doubled.x.div_euclid(2), doubled.y.div_euclid(2))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn trace(grid: &FillGrid) -> Result<Outline, InvariantError> {
        trace_outline(grid, grid.start_cell().unwrap(), 1000)
    }

    #[test]
    fn edge_cells_of_a_horizontal_edge() {
        let v = GridPoint::new(3, 5);
        assert_eq!(
            edge_cell(v, Direction::PosX, Direction::NegY),
            GridPoint::new(3, 4)
        );
        assert_eq!(
            edge_cell(v, Direction::PosX, Direction::PosY),
            GridPoint::new(3, 5)
        );
        assert_eq!(
            edge_cell(v, Direction::NegX, Direction::PosY),
            GridPoint::new(2, 5)
        );
    }

    #[test]
    fn rectangle_traces_clockwise() {
        let mut grid = FillGrid::new(6, 6);
        grid.fill_rect(0, 0, 4, 2);
        assert_eq!(trace(&grid).unwrap().runs(), &[4, -2, -4, 2]);
    }

    #[test]
    fn l_shape() {
        let mut grid = FillGrid::new(8, 8);
        grid.fill_rect(0, 0, 6, 2);
        grid.fill_rect(0, 0, 2, 6);
        assert_eq!(trace(&grid).unwrap().runs(), &[2, -4, 4, -2, -6, 6]);
    }

    #[test]
    fn diagonal_touch_closes_around_the_start_lobe() {
        let mut grid = FillGrid::new(8, 8);
        grid.fill_rect(0, 0, 2, 2);
        grid.fill_rect(2, 2, 2, 2);
        let outline = trace(&grid).unwrap();
        // the right turn at the shared vertex wins over crossing into the other lobe
        assert_eq!(outline.runs(), &[2, -2, -2, 2]);
    }

    #[test]
    fn run_limit_is_enforced() {
        let mut grid = FillGrid::new(6, 6);
        grid.fill_rect(0, 0, 4, 2);
        grid.fill_rect(0, 0, 2, 4);
        let err = trace_outline(&grid, grid.start_cell().unwrap(), 2).unwrap_err();
        assert_eq!(err, InvariantError::TraceLimit(2));
    }

    #[test]
    fn dangling_edge_cannot_turn_around() {
        // start in mid-air: nothing around the first vertex is filled
        let grid = FillGrid::new(4, 4);
        let err = trace_outline(&grid, GridPoint::new(1, 1), 10).unwrap_err();
        assert_eq!(err, InvariantError::TurnAround { x: 2, y: 2 });
    }
}
