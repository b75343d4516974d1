use crate::math::CellPoint;

/// A coordinate axis of the 3D cell grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The two remaining axes in ascending index order: `(primary, secondary)`.
    #[must_use]
    pub const fn others(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }

    #[must_use]
    pub fn of(self, cell: &CellPoint) -> i32 {
        cell[self.index()]
    }
}

/// A maximal rectangle of unit cells sharing one coordinate.
///
/// `pos0`/`size0` run along the primary axis and `pos1`/`size1` along the
/// secondary axis (see [`Axis::others`]). Positions are rectangle centres
/// in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedRectangle {
    pub group_axis: Axis,
    pub group_value: i32,
    pub pos0: f64,
    pub pos1: f64,
    pub size0: u32,
    pub size1: u32,
}

impl MergedRectangle {
    /// Number of cells covered.
    #[must_use]
    pub fn area(&self) -> u64 {
        u64::from(self.size0) * u64::from(self.size1)
    }

    /// Returns `true` when `cell` lies inside this rectangle.
    #[must_use]
    pub fn contains(&self, cell: &CellPoint) -> bool {
        let (primary, secondary) = self.group_axis.others();
        self.group_axis.of(cell) == self.group_value
            && within(primary.of(cell), self.pos0, self.size0)
            && within(secondary.of(cell), self.pos1, self.size1)
    }
}

fn within(value: i32, centre: f64, size: u32) -> bool {
    (f64::from(value) - centre).abs() * 2.0 < f64::from(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_axes_ascend() {
        assert_eq!(Axis::X.others(), (Axis::Y, Axis::Z));
        assert_eq!(Axis::Y.others(), (Axis::X, Axis::Z));
        assert_eq!(Axis::Z.others(), (Axis::X, Axis::Y));
    }

    #[test]
    fn contains_respects_extent() {
        let rect = MergedRectangle {
            group_axis: Axis::Y,
            group_value: 0,
            pos0: 1.0,
            pos1: 0.5,
            size0: 3,
            size1: 2,
        };
        assert_eq!(rect.area(), 6);
        assert!(rect.contains(&CellPoint::new(0, 0, 0)));
        assert!(rect.contains(&CellPoint::new(2, 0, 1)));
        assert!(!rect.contains(&CellPoint::new(3, 0, 1)));
        assert!(!rect.contains(&CellPoint::new(1, 1, 0)));
    }
}
