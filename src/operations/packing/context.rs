use crate::geometry::{Axis, MergedRectangle};
use crate::math::{CellPoint, GridPoint, GridVector};
use crate::operations::merge::MergeCells;

/// Floor cells collected across buildings, as `(x, level, y)` voxels.
#[derive(Debug, Clone, Default)]
pub struct LayoutContext {
    cells: Vec<CellPoint>,
}

impl LayoutContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds floor cells shifted by `offset` on storey `level`, in the order
    /// given. Pass sorted cells (see `WallLayout::floor_cells`) for a
    /// reproducible cell order.
    pub fn add_floor<'a>(
        &mut self,
        floor: impl IntoIterator<Item = &'a GridPoint>,
        offset: GridVector,
        level: i32,
    ) {
        self.cells.extend(
            floor
                .into_iter()
                .map(|c| CellPoint::new(c.x + offset.x, level, c.y + offset.y)),
        );
    }

    /// Moves every cell of `other` into this context.
    pub fn merge(&mut self, other: LayoutContext) {
        self.cells.extend(other.cells);
    }

    #[must_use]
    pub fn cells(&self) -> &[CellPoint] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Merges the collected floor into rectangles, one group per level.
    #[must_use]
    pub fn merged_floor(&self) -> Vec<MergedRectangle> {
        MergeCells::new(self.cells.clone(), Axis::Y).execute()
    }
}
