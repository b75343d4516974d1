use crate::error::OutlineError;
use crate::math::{GridPoint, GridVector};

/// A closed rectilinear polygon encoded as alternating signed run-lengths.
///
/// Even entries run along x, odd entries along y. Values are in point
/// resolution (half a wall unit), so whole-wall outlines have even runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Outline {
    runs: Vec<i32>,
}

impl Outline {
    /// Largest closed perimeter, in points, that the wall walk accepts.
    /// Every walked point then stays well inside the `i32` range.
    pub const MAX_PERIMETER: u64 = 1 << 20;

    /// Wraps the given runs without validation.
    #[must_use]
    pub fn new(runs: Vec<i32>) -> Self {
        Self { runs }
    }

    #[must_use]
    pub fn runs(&self) -> &[i32] {
        &self.runs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns `true` when entry `index` runs along x.
    #[must_use]
    pub fn is_horizontal(index: usize) -> bool {
        index % 2 == 0
    }

    /// Net displacement `(sum_x, sum_y)` of the runs.
    #[must_use]
    pub fn sums(&self) -> (i64, i64) {
        self.runs
            .iter()
            .enumerate()
            .fold((0, 0), |(sx, sy), (i, &run)| {
                if Self::is_horizontal(i) {
                    (sx + i64::from(run), sy)
                } else {
                    (sx, sy + i64::from(run))
                }
            })
    }

    /// Validates the outline and closes it if possible.
    ///
    /// When both axes have a non-zero net displacement, one closing pair
    /// `[-sum_x, -sum_y]` is appended.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError::Empty`] or [`OutlineError::OddLength`] for
    /// malformed input, [`OutlineError::NotClosable`] when exactly one
    /// axis fails to close, and [`OutlineError::TooLong`] when the closed
    /// perimeter exceeds [`Outline::MAX_PERIMETER`].
    pub fn closed(&self) -> Result<Self, OutlineError> {
        if self.runs.is_empty() {
            return Err(OutlineError::Empty);
        }
        if self.runs.len() % 2 != 0 {
            return Err(OutlineError::OddLength(self.runs.len()));
        }
        let closed = match self.sums() {
            (0, 0) => self.clone(),
            (sum_x, sum_y) if sum_x == 0 || sum_y == 0 => {
                return Err(OutlineError::NotClosable { sum_x, sum_y });
            }
            (sum_x, sum_y) => {
                let (Ok(close_x), Ok(close_y)) = (i32::try_from(-sum_x), i32::try_from(-sum_y))
                else {
                    return Err(OutlineError::NotClosable { sum_x, sum_y });
                };
                let mut runs = self.runs.clone();
                runs.extend([close_x, close_y]);
                Self { runs }
            }
        };

        let perimeter = closed.perimeter();
        if perimeter > Self::MAX_PERIMETER {
            return Err(OutlineError::TooLong {
                perimeter,
                limit: Self::MAX_PERIMETER,
            });
        }
        Ok(closed)
    }

    /// Total length of all runs in points.
    #[must_use]
    pub fn perimeter(&self) -> u64 {
        self.runs.iter().map(|run| u64::from(run.unsigned_abs())).sum()
    }

    /// Displacement of run `index`.
    #[must_use]
    pub fn run_vector(&self, index: usize) -> GridVector {
        let run = self.runs[index];
        if Self::is_horizontal(index) {
            GridVector::new(run, 0)
        } else {
            GridVector::new(0, run)
        }
    }

    /// Start vertex of every run, walking from the origin.
    #[must_use]
    pub fn vertices(&self) -> Vec<GridPoint> {
        let mut at = GridPoint::origin();
        let mut vertices = Vec::with_capacity(self.runs.len());
        for i in 0..self.runs.len() {
            vertices.push(at);
            at += self.run_vector(i);
        }
        vertices
    }

    /// Seed derived from the run values alone.
    ///
    /// Regenerating the same outline reproduces the same feature and
    /// material choices regardless of call history.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn seed(&self) -> u32 {
        self.runs
            .iter()
            .fold(0_u32, |acc, &run| acc.wrapping_mul(31).wrapping_add(run as u32))
    }
}

impl From<Vec<i32>> for Outline {
    fn from(runs: Vec<i32>) -> Self {
        Self::new(runs)
    }
}

impl From<&[i32]> for Outline {
    fn from(runs: &[i32]) -> Self {
        Self::new(runs.to_vec())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn closed_outline_is_unchanged() {
        let outline = Outline::from(vec![4, 2, -4, -2]);
        assert_eq!(outline.closed().unwrap(), outline);
    }

    #[test]
    fn two_open_axes_are_auto_closed() {
        let closed = Outline::from(vec![3, 1]).closed().unwrap();
        assert_eq!(closed.runs(), &[3, 1, -3, -1]);
        assert_eq!(closed.sums(), (0, 0));
    }

    #[test]
    fn one_open_axis_is_rejected() {
        let err = Outline::from(vec![4, 2, -2, -2]).closed().unwrap_err();
        assert_eq!(err, OutlineError::NotClosable { sum_x: 2, sum_y: 0 });

        let err = Outline::from(vec![4, 2, -4, 2]).closed().unwrap_err();
        assert_eq!(err, OutlineError::NotClosable { sum_x: 0, sum_y: 4 });
    }

    #[test]
    fn odd_and_empty_outlines_are_rejected() {
        assert_eq!(
            Outline::from(vec![4, 2, -4]).closed().unwrap_err(),
            OutlineError::OddLength(3)
        );
        assert_eq!(Outline::default().closed().unwrap_err(), OutlineError::Empty);
    }

    #[test]
    fn oversized_outlines_are_rejected() {
        let err = Outline::from(vec![i32::MAX, 1]).closed().unwrap_err();
        assert!(matches!(err, OutlineError::TooLong { .. }));

        // the auto-closing pair counts towards the perimeter
        let err = Outline::from(vec![1 << 19, 1]).closed().unwrap_err();
        assert_eq!(
            err,
            OutlineError::TooLong {
                perimeter: (1 << 20) + 2,
                limit: Outline::MAX_PERIMETER,
            }
        );

        let edge = Outline::from(vec![(1 << 19) - 1, 1]).closed().unwrap();
        assert_eq!(edge.perimeter(), Outline::MAX_PERIMETER);
    }

    #[test]
    fn vertices_walk_from_origin() {
        let outline = Outline::from(vec![4, 2, -4, -2]);
        assert_eq!(
            outline.vertices(),
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(4, 0),
                GridPoint::new(4, 2),
                GridPoint::new(0, 2),
            ]
        );
    }

    #[test]
    fn seed_is_a_pure_function_of_runs() {
        let a = Outline::from(vec![6, 4, -6, -4]);
        let b = Outline::from(vec![6, 4, -6, -4]);
        let c = Outline::from(vec![4, 6, -4, -6]);
        assert_eq!(a.seed(), b.seed());
        assert_ne!(a.seed(), c.seed());
    }
}
