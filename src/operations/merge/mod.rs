use std::collections::HashSet;

use crate::geometry::{Axis, MergedRectangle};
use crate::math::CellPoint;

/// Merges a sparse set of unit cells into maximal axis-aligned rectangles.
///
/// Cells are grouped by their coordinate along `group_axis`. Within a group,
/// each unused cell (in `(secondary, primary)` order) starts a rectangle that
/// grows along the primary axis while cells are present and unused, then row
/// by row along the secondary axis while the whole primary span is present
/// and unused. The result partitions the input set.
#[derive(Debug, Clone)]
pub struct MergeCells {
    cells: Vec<CellPoint>,
    group_axis: Axis,
}

impl MergeCells {
    /// Creates a new merge operation.
    #[must_use]
    pub fn new(cells: Vec<CellPoint>, group_axis: Axis) -> Self {
        Self { cells, group_axis }
    }

    /// Executes the merge. Duplicate cells are counted once.
    #[must_use]
    pub fn execute(&self) -> Vec<MergedRectangle> {
        let group = self.group_axis;
        let (primary, secondary) = group.others();
        let present: HashSet<CellPoint> = self.cells.iter().copied().collect();

        let mut order: Vec<CellPoint> = present.iter().copied().collect();
        order.sort_by_key(|c| (group.of(c), secondary.of(c), primary.of(c)));

        let cell_at = |g: i32, p: i32, s: i32| {
            let mut c = CellPoint::origin();
            c[group.index()] = g;
            c[primary.index()] = p;
            c[secondary.index()] = s;
            c
        };

        let mut used: HashSet<CellPoint> = HashSet::with_capacity(present.len());
        let mut rectangles = Vec::new();

        for cell in &order {
            if used.contains(cell) {
                continue;
            }
            let g = group.of(cell);
            let p0 = primary.of(cell);
            let s0 = secondary.of(cell);
            let free = |c: &CellPoint, used: &HashSet<CellPoint>| present.contains(c) && !used.contains(c);

            // growth stops at the edge of the i32 range
            let mut p1 = p0;
            while let Some(next) = p1.checked_add(1) {
                if !free(&cell_at(g, next, s0), &used) {
                    break;
                }
                p1 = next;
            }

            let mut s1 = s0;
            while let Some(next) = s1.checked_add(1) {
                if !(p0..=p1).all(|p| free(&cell_at(g, p, next), &used)) {
                    break;
                }
                s1 = next;
            }

            for s in s0..=s1 {
                for p in p0..=p1 {
                    used.insert(cell_at(g, p, s));
                }
            }

            rectangles.push(MergedRectangle {
                group_axis: group,
                group_value: g,
                pos0: (f64::from(p0) + f64::from(p1)) * 0.5,
                pos1: (f64::from(s0) + f64::from(s1)) * 0.5,
                size0: p0.abs_diff(p1) + 1,
                size1: s0.abs_diff(s1) + 1,
            });
        }

        tracing::debug!(
            cells = present.len(),
            rectangles = rectangles.len(),
            ?group,
            "merged cells"
        );
        rectangles
    }
}
