mod city;
mod context;
mod skyline;

pub use city::{BuildingId, City, CityConfig, PlacedBuilding};
pub use context::LayoutContext;
pub use skyline::{ColumnExtent, Footprint, Placement, Skyline, SkylineConfig};
