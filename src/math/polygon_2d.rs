use super::GridPoint;

/// Computes twice the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise (y up).
#[must_use]
pub fn signed_area_doubled(points: &[GridPoint]) -> i64 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0_i64;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y);
    }
    sum
}

/// Inclusive axis-aligned bounds of a set of grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min: GridPoint,
    pub max: GridPoint,
}

impl GridBounds {
    /// Bounds of `points`, or `None` when empty.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GridPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Number of grid columns spanned (inclusive).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.min.x.abs_diff(self.max.x) + 1
    }

    /// Number of grid rows spanned (inclusive).
    #[must_use]
    pub fn height(&self) -> u32 {
        self.min.y.abs_diff(self.max.y) + 1
    }
}
