use super::GridVector;

/// One of the four cardinal directions, in 90° clockwise steps (y up).
///
/// The discriminants are the wire values used by outline consumers:
/// `0 = +x`, `1 = -y`, `2 = -x`, `3 = +y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    PosX = 0,
    NegY = 1,
    NegX = 2,
    PosY = 3,
}

impl Direction {
    /// All directions in index order.
    pub const ALL: [Self; 4] = [Self::PosX, Self::NegY, Self::NegX, Self::PosY];

    /// Returns the direction for `index & 3`.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index & 3 {
            0 => Self::PosX,
            1 => Self::NegY,
            2 => Self::NegX,
            _ => Self::PosY,
        }
    }

    /// Returns the wire value in `0..4`.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// `(dir + 1) & 3`.
    #[must_use]
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// `(dir + 3) & 3`.
    #[must_use]
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Returns `true` for the x-axis directions.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::PosX | Self::NegX)
    }

    /// Unit step along this direction.
    #[must_use]
    pub fn step(self) -> GridVector {
        match self {
            Self::PosX => GridVector::new(1, 0),
            Self::NegY => GridVector::new(0, -1),
            Self::NegX => GridVector::new(-1, 0),
            Self::PosY => GridVector::new(0, 1),
        }
    }

    /// Direction of an outline run.
    ///
    /// Even outline entries run along x and odd entries along y; the sign picks
    /// the way. A zero-length run makes no turn and keeps `current`.
    #[must_use]
    pub fn of_run(horizontal: bool, length: i32, current: Self) -> Self {
        match (horizontal, length.signum()) {
            (_, 0) => current,
            (true, 1) => Self::PosX,
            (true, _) => Self::NegX,
            (false, 1) => Self::PosY,
            (false, _) => Self::NegY,
        }
    }

    /// Signed run length for `length` steps taken in this direction.
    #[must_use]
    pub const fn signed_run(self, length: i32) -> i32 {
        match self {
            Self::PosX | Self::PosY => length,
            Self::NegX | Self::NegY => -length,
        }
    }

    /// Rotation in radians for a piece facing this direction (`dir * 90°`,
    /// clockwise, so negative about +z).
    #[must_use]
    pub fn yaw(self) -> f64 {
        -f64::from(self.index()) * std::f64::consts::FRAC_PI_2
    }
}
