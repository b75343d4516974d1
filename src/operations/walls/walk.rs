use crate::geometry::Outline;
use crate::math::{Direction, GridPoint};

/// One run of the outline after walking it point by point.
#[derive(Debug, Clone)]
pub struct RunWalk {
    /// Vertex where the run starts.
    pub start: GridPoint,
    pub dir: Direction,
    /// Number of one-point steps.
    pub steps: u32,
    /// Interior points with their global point index. The first and last
    /// step of a run belong to the corners and are excluded.
    pub interior: Vec<(usize, GridPoint)>,
}

/// All runs of a closed outline plus every point the walk touched.
#[derive(Debug, Clone, Default)]
pub struct Walk {
    pub runs: Vec<RunWalk>,
    pub boundary: Vec<GridPoint>,
    pub interior_points: usize,
}

/// Walks a closed outline from the origin.
///
/// The starting orientation comes from the last run: `-y` when it is
/// negative, `+y` otherwise. Each run then takes `|run|` one-point steps;
/// steps `2..|run|` get consecutive point indices.
pub fn walk(outline: &Outline) -> Walk {
    let runs = outline.runs();
    let mut current = match runs.last() {
        Some(&last) if last < 0 => Direction::NegY,
        _ => Direction::PosY,
    };

    let mut walk = Walk::default();
    let mut at = GridPoint::origin();
    walk.boundary.push(at);

    for (i, &length) in runs.iter().enumerate() {
        let dir = Direction::of_run(Outline::is_horizontal(i), length, current);
        let steps = length.unsigned_abs();
        let step = dir.step();
        let start = at;
        let mut interior = Vec::with_capacity(steps.saturating_sub(2) as usize);

        for j in 1..=steps {
            at += step;
            walk.boundary.push(at);
            if j > 1 && j < steps {
                interior.push((walk.interior_points, at));
                walk.interior_points += 1;
            }
        }

        tracing::trace!(run = i, ?dir, steps, interior = interior.len(), "walked run");
        walk.runs.push(RunWalk {
            start,
            dir,
            steps,
            interior,
        });
        current = dir;
    }

    walk
}
