pub mod outline;
pub mod rectangle;
pub mod segment;

pub use outline::Outline;
pub use rectangle::{Axis, MergedRectangle};
pub use segment::{FeatureKind, Segment, WallFeature};

use std::collections::HashSet;

use crate::math::GridPoint;

/// Interior floor cells in wall units; cell `(x, y)` covers
/// `[x, x + 1] × [y, y + 1]`.
pub type FloorArea = HashSet<GridPoint>;
