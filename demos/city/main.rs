//! Generates a small city and prints its floor plan.
//!
//! Usage:
//! ```text
//! cargo run --example city            # seed 7
//! cargo run --example city -- 2024    # custom seed
//! RUST_LOG=footprint=debug cargo run --example city
//! ```
//!
//! Each building is drawn with its own letter; `*` marks a stairs wall.

use std::collections::HashMap;

use footprint::geometry::FeatureKind;
use footprint::math::polygon_2d::GridBounds;
use footprint::math::GridPoint;
use footprint::operations::{City, CityConfig, SkylineConfig};
use footprint::FootprintError;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn main() -> Result<(), FootprintError> {
    // Default: WARN for everything, INFO for footprint.
    // Override with RUST_LOG env var (e.g. RUST_LOG=footprint=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("footprint=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(7);

    let skyline = SkylineConfig::new(40, 1, 1)?.with_smoothing(2, 2);
    let config = CityConfig::new(10, skyline)?;
    let city = City::generate(&config, seed)?;

    let mut plan: HashMap<GridPoint, char> = HashMap::new();
    for (n, (_, building)) in city.buildings().enumerate() {
        let letter = char::from(LETTERS[n % LETTERS.len()]);
        for cell in building.floor_cells() {
            plan.insert(cell, letter);
        }
        for segment in building.segments() {
            if segment.feature() == Some(FeatureKind::Stairs) {
                // point resolution back to the wall-unit cell it borders
                let pos = segment.pos();
                plan.insert(
                    GridPoint::new(pos.x.div_euclid(2), pos.y.div_euclid(2)),
                    '*',
                );
            }
        }
    }

    let Some(bounds) = GridBounds::from_points(plan.keys()) else {
        println!("seed {seed}: empty city");
        return Ok(());
    };

    println!(
        "seed {seed}: {} buildings, {} floor cells, {} floor rectangles",
        city.len(),
        city.context().len(),
        city.context().merged_floor().len()
    );
    for y in (bounds.min.y..=bounds.max.y).rev() {
        let row: String = (bounds.min.x..=bounds.max.x)
            .map(|x| plan.get(&GridPoint::new(x, y)).copied().unwrap_or('.'))
            .collect();
        println!("{row}");
    }
    println!("skyline: {:?}", city.skyline().heights());

    Ok(())
}
