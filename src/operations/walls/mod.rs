mod corner;
mod floor;
mod walk;

pub use corner::corner_rotation;

use crate::error::Result;
use crate::geometry::{FloorArea, Outline, Segment, WallFeature};
use crate::math::polygon_2d::GridBounds;
use crate::math::GridPoint;

/// Builds the wall layout of a building outline.
///
/// Walks the (auto-closed) outline and emits, per run, the corner joining it
/// to the previous run followed by one wall piece per interior pair of
/// points. A requested feature replaces the wall piece whose pair contains
/// its point index. The enclosed floor area is computed by flood fill.
#[derive(Debug, Clone)]
pub struct MakeWalls {
    outline: Outline,
    features: Vec<WallFeature>,
}

/// Result of [`MakeWalls`].
#[derive(Debug, Clone)]
pub struct WallLayout {
    /// The closed outline that was walked (with any auto-appended pair).
    pub outline: Outline,
    /// Corner, wall and feature pieces in walk order.
    pub segments: Vec<Segment>,
    /// Interior cells in wall units.
    pub floor: FloorArea,
    /// Bounds of every walked point.
    pub bounds: GridBounds,
    /// Number of point indices handed out; valid feature indices are below it.
    pub interior_points: usize,
    /// Runs whose interior points couldn't be paired completely.
    pub gaps: usize,
}

impl MakeWalls {
    /// Creates a new wall layout operation without features.
    #[must_use]
    pub fn new(outline: Outline) -> Self {
        Self {
            outline,
            features: Vec::new(),
        }
    }

    /// Adds feature requests keyed by global point index.
    #[must_use]
    pub fn with_features(mut self, features: impl IntoIterator<Item = WallFeature>) -> Self {
        self.features.extend(features);
        self
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns an [`OutlineError`](crate::error::OutlineError) for an empty,
    /// odd-length, non-closable or oversized outline, [`InvariantError::InvalidCorner`]
    /// when two consecutive runs don't turn by 90° (zero-length runs), and
    /// [`InvariantError::FloodEscaped`] for self-intersecting outlines.
    pub fn execute(&self) -> Result<WallLayout> {
        let outline = self.outline.closed()?;
        let walk = walk::walk(&outline);

        let mut segments = Vec::with_capacity(walk.runs.len() + walk.interior_points / 2);
        let mut gaps = 0;
        let n = walk.runs.len();

        for (i, run) in walk.runs.iter().enumerate() {
            let previous = &walk.runs[(i + n - 1) % n];
            segments.push(Segment::Corner {
                pos: run.start,
                dir: corner_rotation(previous.dir, run.dir)?,
            });

            for pair in run.interior.chunks(2) {
                let [(first_index, first), (second_index, _)] = pair else {
                    gaps += 1;
                    tracing::warn!(
                        run = i,
                        steps = run.steps,
                        "odd interior point count, leaving a gap"
                    );
                    continue;
                };
                // the two half-steps of a pair meet at `first`
                let feature = self
                    .features
                    .iter()
                    .find(|f| f.index == *first_index || f.index == *second_index);
                segments.push(match feature {
                    Some(f) => Segment::Feature {
                        pos: *first,
                        dir: run.dir,
                        kind: f.kind,
                    },
                    None => Segment::Wall {
                        pos: *first,
                        dir: run.dir,
                    },
                });
            }
        }

        let bounds = GridBounds::from_points(&walk.boundary).unwrap_or(GridBounds {
            min: GridPoint::origin(),
            max: GridPoint::origin(),
        });
        let floor = floor::fill_floor(&walk, &bounds)?;

        tracing::debug!(
            runs = n,
            segments = segments.len(),
            floor = floor.len(),
            gaps,
            "built wall layout"
        );

        Ok(WallLayout {
            outline,
            segments,
            floor,
            bounds,
            interior_points: walk.interior_points,
            gaps,
        })
    }
}

impl WallLayout {
    pub fn corners(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_corner())
    }

    pub fn walls(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_wall())
    }

    pub fn features(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.feature().is_some())
    }

    /// Floor cells sorted by row, then column.
    #[must_use]
    pub fn floor_cells(&self) -> Vec<GridPoint> {
        let mut cells: Vec<GridPoint> = self.floor.iter().copied().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells
    }
}
