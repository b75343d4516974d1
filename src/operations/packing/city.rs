use slotmap::SlotMap;

use crate::error::{OperationError, Result};
use crate::geometry::{Outline, Segment, WallFeature};
use crate::math::{GridPoint, Lcg, RandomSource};
use crate::operations::outline::RandomOutline;
use crate::operations::walls::{MakeWalls, WallLayout};

use super::context::LayoutContext;
use super::skyline::{Footprint, Placement, Skyline, SkylineConfig};

slotmap::new_key_type! {
    /// Unique identifier for a building placed in a city.
    pub struct BuildingId;
}

/// Parameters for [`City::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityConfig {
    building_count: usize,
    outline_retries: usize,
    stairs: bool,
    skyline: SkylineConfig,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            building_count: 12,
            outline_retries: 8,
            stairs: true,
            skyline: SkylineConfig::default(),
        }
    }
}

impl CityConfig {
    /// Creates a city configuration with stairs enabled and the default
    /// retry budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `building_count` is zero.
    pub fn new(building_count: usize, skyline: SkylineConfig) -> Result<Self> {
        if building_count == 0 {
            return Err(
                OperationError::InvalidInput("a city needs at least one building".to_owned())
                    .into(),
            );
        }
        Ok(Self {
            building_count,
            skyline,
            ..Self::default()
        })
    }

    /// Extra outline draws allowed when the generator yields nothing.
    #[must_use]
    pub fn with_outline_retries(mut self, retries: usize) -> Self {
        self.outline_retries = retries;
        self
    }

    #[must_use]
    pub fn with_stairs(mut self, stairs: bool) -> Self {
        self.stairs = stairs;
        self
    }

    #[must_use]
    pub fn building_count(&self) -> usize {
        self.building_count
    }

    #[must_use]
    pub fn skyline(&self) -> SkylineConfig {
        self.skyline
    }
}

/// A building layout and where it landed.
#[derive(Debug, Clone)]
pub struct PlacedBuilding {
    pub layout: WallLayout,
    pub placement: Placement,
}

impl PlacedBuilding {
    /// Segments moved to city coordinates (point resolution).
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let offset = self.placement.translation * 2;
        self.layout.segments.iter().map(move |s| s.translated(offset))
    }

    /// Floor cells moved to city coordinates (wall units), sorted by row
    /// then column.
    pub fn floor_cells(&self) -> impl Iterator<Item = GridPoint> {
        let offset = self.placement.translation;
        self.layout
            .floor_cells()
            .into_iter()
            .map(move |c| c + offset)
    }
}

/// A seeded set of random buildings packed along a skyline.
#[derive(Debug)]
pub struct City {
    seed: u32,
    buildings: SlotMap<BuildingId, PlacedBuilding>,
    skyline: Skyline,
    context: LayoutContext,
}

impl City {
    /// Generates and packs `config.building_count()` buildings from `seed`.
    ///
    /// A building whose outline draws all come back empty is skipped. With
    /// stairs enabled, each building gets one stairs request at an interior
    /// point chosen from its outline's own seed.
    ///
    /// # Errors
    ///
    /// Returns the first error from outline tracing, wall layout or skyline
    /// placement; a building wider than the skyline fails the whole city.
    pub fn generate(config: &CityConfig, seed: u32) -> Result<Self> {
        let mut rng = Lcg::new(seed);
        let generator = RandomOutline::new();
        let mut skyline = Skyline::new(config.skyline);
        let mut buildings = SlotMap::with_key();
        let mut context = LayoutContext::new();

        for index in 0..config.building_count {
            let Some(outline) = draw_outline(&generator, &mut rng, config.outline_retries)? else {
                tracing::warn!(
                    index,
                    retries = config.outline_retries,
                    "no outline within the retry budget, skipping building"
                );
                continue;
            };

            let layout = build_walls(outline, config.stairs)?;
            let footprint = Footprint::from_layout(&layout)?;
            let placement = skyline.place(&footprint, &mut rng)?;
            context.add_floor(&layout.floor_cells(), placement.translation, 0);

            tracing::trace!(
                index,
                runs = layout.outline.len(),
                column = placement.column,
                lift = placement.lift,
                "placed building"
            );
            buildings.insert(PlacedBuilding { layout, placement });
        }

        tracing::info!(
            seed,
            buildings = buildings.len(),
            floor = context.len(),
            "generated city"
        );

        Ok(Self {
            seed,
            buildings,
            skyline,
            context,
        })
    }

    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns the building, or `None` for an unknown id.
    #[must_use]
    pub fn building(&self, id: BuildingId) -> Option<&PlacedBuilding> {
        self.buildings.get(id)
    }

    /// Buildings in placement order.
    pub fn buildings(&self) -> impl Iterator<Item = (BuildingId, &PlacedBuilding)> {
        self.buildings.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    #[must_use]
    pub fn skyline(&self) -> &Skyline {
        &self.skyline
    }

    /// Floor cells of every building, in city coordinates.
    #[must_use]
    pub fn context(&self) -> &LayoutContext {
        &self.context
    }
}

fn draw_outline(
    generator: &RandomOutline,
    rng: &mut Lcg,
    retries: usize,
) -> Result<Option<Outline>> {
    for _ in 0..=retries {
        if let Some(outline) = generator.execute(rng)? {
            return Ok(Some(outline));
        }
    }
    Ok(None)
}

/// Lays out walls, replacing one interior point with stairs when requested.
fn build_walls(outline: Outline, stairs: bool) -> Result<WallLayout> {
    let plain = MakeWalls::new(outline.clone()).execute()?;
    if !stairs || plain.interior_points == 0 {
        return Ok(plain);
    }

    let points = u32::try_from(plain.interior_points).unwrap_or(u32::MAX);
    let index = Lcg::new(outline.seed()).below(points) as usize;
    MakeWalls::new(outline)
        .with_features([WallFeature::stairs(index)])
        .execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::geometry::{FeatureKind, MergedRectangle};
    use crate::math::CellPoint;

    fn small_city(stairs: bool) -> City {
        let config = CityConfig::new(6, SkylineConfig::default())
            .unwrap()
            .with_stairs(stairs);
        City::generate(&config, 2024).unwrap()
    }

    #[test]
    fn config_rejects_an_empty_city() {
        assert!(CityConfig::new(0, SkylineConfig::default()).is_err());
        assert_eq!(CityConfig::default().building_count(), 12);
    }

    #[test]
    fn every_building_is_placed() {
        let city = small_city(true);
        assert_eq!(city.len(), 6);
        assert_eq!(city.seed(), 2024);
        for (id, building) in city.buildings() {
            assert!(city.building(id).is_some());
            assert!(!building.layout.floor.is_empty());
        }
    }

    #[test]
    fn same_seed_same_city() {
        let a = small_city(true);
        let b = small_city(true);
        let placements = |city: &City| -> Vec<Placement> {
            city.buildings().map(|(_, b)| b.placement).collect()
        };
        assert_eq!(placements(&a), placements(&b));
        for ((_, x), (_, y)) in a.buildings().zip(b.buildings()) {
            assert_eq!(
                x.floor_cells().collect::<Vec<_>>(),
                y.floor_cells().collect::<Vec<_>>()
            );
        }
        assert_eq!(a.context().cells(), b.context().cells());
        assert_eq!(a.skyline().heights(), b.skyline().heights());
    }

    #[test]
    fn buildings_do_not_overlap() {
        let city = small_city(false);
        let unique: HashSet<CellPoint> = city.context().cells().iter().copied().collect();
        assert_eq!(unique.len(), city.context().len());

        let area: u64 = city
            .context()
            .merged_floor()
            .iter()
            .map(MergedRectangle::area)
            .sum();
        assert_eq!(area, unique.len() as u64);
    }

    #[test]
    fn context_matches_building_floors() {
        let city = small_city(true);
        let from_buildings: HashSet<CellPoint> = city
            .buildings()
            .flat_map(|(_, b)| b.floor_cells().collect::<Vec<_>>())
            .map(|c| CellPoint::new(c.x, 0, c.y))
            .collect();
        let from_context: HashSet<CellPoint> = city.context().cells().iter().copied().collect();
        assert_eq!(from_buildings, from_context);
    }

    #[test]
    fn stairs_replace_at_most_one_wall() {
        let with = small_city(true);
        let without = small_city(false);
        for ((_, a), (_, b)) in with.buildings().zip(without.buildings()) {
            let features: Vec<_> = a.layout.features().collect();
            assert!(features.len() <= 1);
            assert!(features
                .iter()
                .all(|s| s.feature() == Some(FeatureKind::Stairs)));
            assert_eq!(
                a.layout.walls().count() + features.len(),
                b.layout.walls().count()
            );
            assert_eq!(b.layout.features().count(), 0);
        }
    }

    #[test]
    fn segments_follow_the_placement() {
        let city = small_city(false);
        for (_, building) in city.buildings() {
            let offset = building.placement.translation * 2;
            for (moved, original) in building.segments().zip(&building.layout.segments) {
                assert_eq!(moved.pos(), original.pos() + offset);
                assert_eq!(moved.dir(), original.dir());
            }
        }
    }

    #[test]
    fn stairs_index_comes_from_the_outline_seed() {
        let outline = Outline::from(vec![8, -2, -8, 2]);
        let a = build_walls(outline.clone(), true).unwrap();
        let b = build_walls(outline, true).unwrap();
        assert_eq!(a.segments, b.segments);
    }
}
