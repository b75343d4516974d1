pub mod merge;
pub mod outline;
pub mod packing;
pub mod walls;

pub use merge::MergeCells;
pub use outline::RandomOutline;
pub use packing::{City, CityConfig, LayoutContext, Skyline, SkylineConfig};
pub use walls::{corner_rotation, MakeWalls, WallLayout};
