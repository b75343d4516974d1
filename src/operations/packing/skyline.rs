use crate::error::{OperationError, Result};
use crate::math::{GridVector, RandomSource};
use crate::operations::walls::WallLayout;

/// Parameters for skyline packing, in wall units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkylineConfig {
    width: usize,
    spacing: u16,
    jitter: u16,
    smoothing_columns: usize,
    smoothing_drop: u16,
}

impl Default for SkylineConfig {
    fn default() -> Self {
        Self {
            width: 48,
            spacing: 1,
            jitter: 2,
            smoothing_columns: 2,
            smoothing_drop: 2,
        }
    }
}

impl SkylineConfig {
    /// Creates a skyline configuration without smoothing.
    ///
    /// `spacing` is the clearance left above each placed building and
    /// `jitter` the largest random extra clearance.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is zero.
    pub fn new(width: usize, spacing: u16, jitter: u16) -> Result<Self> {
        if width == 0 {
            return Err(
                OperationError::InvalidInput("skyline width must be positive".to_owned()).into(),
            );
        }
        Ok(Self {
            width,
            spacing,
            jitter,
            smoothing_columns: 0,
            smoothing_drop: 0,
        })
    }

    /// Raises up to `columns` columns on each side of a placed building to
    /// at least its edge height minus `drop` per column.
    #[must_use]
    pub fn with_smoothing(mut self, columns: usize, drop: u16) -> Self {
        self.smoothing_columns = columns;
        self.smoothing_drop = drop;
        self
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Vertical extent of a building in one column: cells `bottom..top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnExtent {
    pub bottom: i32,
    pub top: i32,
}

/// Per-column extents of a building, starting at column `origin_x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    pub origin_x: i32,
    pub columns: Vec<ColumnExtent>,
}

impl Footprint {
    /// Derives the footprint from the floor cells of a layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout has no floor.
    pub fn from_layout(layout: &WallLayout) -> Result<Self> {
        let (Some(min_x), Some(max_x)) = (
            layout.floor.iter().map(|c| c.x).min(),
            layout.floor.iter().map(|c| c.x).max(),
        ) else {
            return Err(OperationError::InvalidInput(
                "cannot pack a layout without floor cells".to_owned(),
            )
            .into());
        };

        let mut columns: Vec<Option<ColumnExtent>> = vec![None; min_x.abs_diff(max_x) as usize + 1];
        for cell in &layout.floor {
            let column = &mut columns[cell.x.abs_diff(min_x) as usize];
            *column = Some(match *column {
                Some(e) => ColumnExtent {
                    bottom: e.bottom.min(cell.y),
                    top: e.top.max(cell.y + 1),
                },
                None => ColumnExtent {
                    bottom: cell.y,
                    top: cell.y + 1,
                },
            });
        }

        // a column without floor inherits its left neighbour
        let mut filled = Vec::with_capacity(columns.len());
        let mut last = ColumnExtent { bottom: 0, top: 0 };
        for column in columns {
            last = column.unwrap_or(last);
            filled.push(last);
        }

        Ok(Self {
            origin_x: min_x,
            columns: filled,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Where a building landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// First skyline column under the building.
    pub column: usize,
    /// How far the building was pushed along the depth axis.
    pub lift: i32,
    /// Translation to apply to the building's floor cells (wall units).
    pub translation: GridVector,
}

/// A 1-D contour of occupied depth per column, for greedy city packing.
#[derive(Debug, Clone)]
pub struct Skyline {
    config: SkylineConfig,
    heights: Vec<i32>,
}

impl Skyline {
    /// Creates a flat skyline.
    #[must_use]
    pub fn new(config: SkylineConfig) -> Self {
        Self {
            heights: vec![0; config.width],
            config,
        }
    }

    #[must_use]
    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    /// Places `footprint` at the column offset needing the smallest lift,
    /// then raises the skyline under it.
    ///
    /// The lift at an offset is the largest shortfall of any building column
    /// below the current skyline. Ties go to the leftmost offset.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if the footprint is empty or
    /// wider than the skyline.
    pub fn place<R: RandomSource + ?Sized>(
        &mut self,
        footprint: &Footprint,
        random: &mut R,
    ) -> Result<Placement> {
        let cols = footprint.width();
        if cols == 0 || cols > self.heights.len() {
            return Err(OperationError::InvalidInput(format!(
                "footprint of {cols} columns does not fit a skyline of {}",
                self.heights.len()
            ))
            .into());
        }

        let mut best: Option<(usize, i32)> = None;
        for offset in 0..=self.heights.len() - cols {
            let lift = footprint
                .columns
                .iter()
                .zip(&self.heights[offset..offset + cols])
                .map(|(extent, height)| height - extent.bottom)
                .max()
                .unwrap_or(0);
            match best {
                Some((_, best_lift)) if best_lift <= lift => {}
                _ => best = Some((offset, lift)),
            }
        }
        let (column, lift) = best.unwrap_or((0, 0));

        let jitter = i32::try_from(random.below(u32::from(self.config.jitter) + 1)).unwrap_or(0);
        let clearance = i32::from(self.config.spacing) + jitter;
        for (extent, height) in footprint
            .columns
            .iter()
            .zip(&mut self.heights[column..column + cols])
        {
            *height = lift + extent.top + clearance;
        }
        self.smooth(column, column + cols - 1);

        let translation = GridVector::new(
            i32::try_from(column).map_err(|_| {
                OperationError::InvalidInput(format!("column {column} out of range"))
            })? - footprint.origin_x,
            lift,
        );
        tracing::debug!(column, lift, jitter, cols, "placed building on skyline");

        Ok(Placement {
            column,
            lift,
            translation,
        })
    }

    /// Raises the columns beside `first..=last` so they descend by at most
    /// the smoothing drop per column.
    fn smooth(&mut self, first: usize, last: usize) {
        let drop = i32::from(self.config.smoothing_drop);
        let left_edge = self.heights[first];
        let right_edge = self.heights[last];
        let mut step = 0;
        for k in 1..=self.config.smoothing_columns {
            step += drop;
            if let Some(i) = first.checked_sub(k) {
                self.heights[i] = self.heights[i].max(left_edge - step);
            }
            if let Some(h) = self.heights.get_mut(last + k) {
                *h = (*h).max(right_edge - step);
            }
        }
    }
}
