use nalgebra::Isometry2;

use crate::math::{Direction, GridPoint, GridVector};

/// Kind of piece that replaces a wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Stairs,
    Door,
    Window,
}

/// A request to place a feature at a global interior point index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallFeature {
    pub kind: FeatureKind,
    pub index: usize,
}

impl WallFeature {
    #[must_use]
    pub fn new(kind: FeatureKind, index: usize) -> Self {
        Self { kind, index }
    }

    #[must_use]
    pub fn stairs(index: usize) -> Self {
        Self::new(FeatureKind::Stairs, index)
    }
}

/// A placed piece along the outline.
///
/// Positions are in point resolution (half a wall unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A 90° turn piece at an outline vertex; `dir` is the piece rotation.
    Corner { pos: GridPoint, dir: Direction },
    /// A straight piece covering one wall unit of a run.
    Wall { pos: GridPoint, dir: Direction },
    /// A feature placed instead of a wall piece.
    Feature {
        pos: GridPoint,
        dir: Direction,
        kind: FeatureKind,
    },
}

impl Segment {
    #[must_use]
    pub fn pos(&self) -> GridPoint {
        match *self {
            Self::Corner { pos, .. } | Self::Wall { pos, .. } | Self::Feature { pos, .. } => pos,
        }
    }

    #[must_use]
    pub fn dir(&self) -> Direction {
        match *self {
            Self::Corner { dir, .. } | Self::Wall { dir, .. } | Self::Feature { dir, .. } => dir,
        }
    }

    #[must_use]
    pub fn is_corner(&self) -> bool {
        matches!(self, Self::Corner { .. })
    }

    #[must_use]
    pub fn is_wall(&self) -> bool {
        matches!(self, Self::Wall { .. })
    }

    /// Returns the feature kind for feature segments.
    #[must_use]
    pub fn feature(&self) -> Option<FeatureKind> {
        match *self {
            Self::Feature { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Same segment moved by `offset` points.
    #[must_use]
    pub fn translated(self, offset: GridVector) -> Self {
        match self {
            Self::Corner { pos, dir } => Self::Corner {
                pos: pos + offset,
                dir,
            },
            Self::Wall { pos, dir } => Self::Wall {
                pos: pos + offset,
                dir,
            },
            Self::Feature { pos, dir, kind } => Self::Feature {
                pos: pos + offset,
                dir,
                kind,
            },
        }
    }

    /// World transform for a renderer whose wall pieces are `wall_width` wide.
    ///
    /// Translation is the position scaled by half a wall width; rotation is
    /// `dir * 90°`.
    #[must_use]
    pub fn world_transform(&self, wall_width: f64) -> Isometry2<f64> {
        let pos = self.pos().cast::<f64>() * (wall_width * 0.5);
        Isometry2::new(pos.coords, self.dir().yaw())
    }
}
