use std::collections::HashSet;

use crate::error::InvariantError;
use crate::geometry::FloorArea;
use crate::math::polygon_2d::{signed_area_doubled, GridBounds};
use crate::math::{Direction, GridPoint};

use super::walk::Walk;

/// Fills the interior of a walked outline and returns the enclosed floor cells.
///
/// Orientation comes from the signed area of the run start vertices: the
/// interior lies on the left of a counter-clockwise walk, on the right of a
/// clockwise one. Every run seeds the fill one step inward from its first step,
/// so lobes joined only at a vertex are all reached. Seeds that land on the
/// boundary are skipped.
///
/// Filled points with two odd coordinates are cell centres; cell
/// `((x - 1) / 2, (y - 1) / 2)` joins the floor.
///
/// # Errors
///
/// Returns [`InvariantError::FloodEscaped`] when the fill reaches a point
/// outside `bounds`, which means the outline is self-intersecting or
/// otherwise malformed.
pub fn fill_floor(walk: &Walk, bounds: &GridBounds) -> Result<FloorArea, InvariantError> {
    let boundary: HashSet<GridPoint> = walk.boundary.iter().copied().collect();
    let vertices: Vec<GridPoint> = walk.runs.iter().map(|r| r.start).collect();
    let clockwise = signed_area_doubled(&vertices) < 0;

    let mut area: HashSet<GridPoint> = HashSet::new();
    let mut stack: Vec<GridPoint> = Vec::new();

    for run in walk.runs.iter().filter(|r| r.steps > 0) {
        let inward = if clockwise {
            run.dir.turn_right()
        } else {
            run.dir.turn_left()
        };
        let seed = run.start + run.dir.step() + inward.step();
        if boundary.contains(&seed) || area.contains(&seed) {
            continue;
        }
        if !bounds.contains(seed) {
            return Err(InvariantError::FloodEscaped {
                x: seed.x,
                y: seed.y,
            });
        }
        area.insert(seed);
        stack.push(seed);

        while let Some(p) = stack.pop() {
            for dir in Direction::ALL {
                let next = p + dir.step();
                if boundary.contains(&next) || area.contains(&next) {
                    continue;
                }
                if !bounds.contains(next) {
                    return Err(InvariantError::FloodEscaped {
                        x: next.x,
                        y: next.y,
                    });
                }
                area.insert(next);
                stack.push(next);
            }
        }
    }

    let floor = area
        .iter()
        .filter(|p| p.x.rem_euclid(2) == 1 && p.y.rem_euclid(2) == 1)
        .map(|p| GridPoint::new((p.x - 1).div_euclid(2), (p.y - 1).div_euclid(2)))
        .collect();
    Ok(floor)
}
