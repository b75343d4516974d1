pub mod direction;
pub mod polygon_2d;
pub mod random;

pub use direction::Direction;
pub use random::{Lcg, RandomSource};

/// Integer point on the layout grid.
///
/// Outline and segment coordinates use point resolution (one point is half a
/// wall unit). Floor cells use wall units.
pub type GridPoint = nalgebra::Point2<i32>;

/// Integer displacement on the layout grid.
pub type GridVector = nalgebra::Vector2<i32>;

/// Integer unit cell in 3D, used for floor and teleportation cell sets.
pub type CellPoint = nalgebra::Point3<i32>;
