mod grid;
mod trace;

use crate::error::Result;
use crate::geometry::Outline;
use crate::math::RandomSource;

/// Generates a random building outline.
///
/// Carves up to four even-sized, even-aligned rectangles into a small grid
/// and traces the boundary of the region containing the top-left start cell.
#[derive(Debug, Clone, Copy)]
pub struct RandomOutline {
    max_runs: usize,
}

impl Default for RandomOutline {
    fn default() -> Self {
        Self { max_runs: 1000 }
    }
}

impl RandomOutline {
    /// Creates a new random outline operation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the generation, drawing from `random`.
    ///
    /// Returns `Ok(None)` when no start cell exists (an empty grid); callers
    /// skip or retry with a new seed.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::TurnAround`](crate::error::InvariantError::TurnAround)
    /// or [`InvariantError::TraceLimit`](crate::error::InvariantError::TraceLimit)
    /// if the boundary tracer breaks down.
    pub fn execute<R: RandomSource + ?Sized>(&self, random: &mut R) -> Result<Option<Outline>> {
        let grid = grid::random_grid(random);
        let Some(start) = grid.start_cell() else {
            tracing::debug!(
                width = grid.width(),
                height = grid.height(),
                "no outline start cell"
            );
            return Ok(None);
        };

        let outline = trace::trace_outline(&grid, start, self.max_runs)?;
        tracing::debug!(runs = outline.len(), "traced random outline");
        Ok(Some(outline))
    }
}
