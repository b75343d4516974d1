use crate::math::{GridPoint, RandomSource};

/// A boolean occupancy grid, `y` pointing up. Out-of-bounds cells are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl FillGrid {
    pub fn new(width: i32, height: i32) -> Self {
        let len = usize::try_from(width.max(0) * height.max(0)).unwrap_or(0);
        Self {
            width,
            height,
            cells: vec![false; len],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(y * self.width + x).ok()
    }

    pub fn is_filled(&self, cell: GridPoint) -> bool {
        self.index(cell.x, cell.y)
            .is_some_and(|i| self.cells[i])
    }

    /// ORs a `w × h` rectangle with lower-left cell `(x, y)` into the grid.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for cy in y..y + h {
            for cx in x..x + w {
                if let Some(i) = self.index(cx, cy) {
                    self.cells[i] = true;
                }
            }
        }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// First boundary start cell scanning rows from the top, columns left to
    /// right: filled, with empty left and upper neighbours and a filled right
    /// neighbour.
    pub fn start_cell(&self) -> Option<GridPoint> {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let cell = GridPoint::new(x, y);
                if self.is_filled(cell)
                    && !self.is_filled(GridPoint::new(x - 1, y))
                    && self.is_filled(GridPoint::new(x + 1, y))
                    && !self.is_filled(GridPoint::new(x, y + 1))
                {
                    return Some(cell);
                }
            }
        }
        None
    }
}

/// Carves one to four random rectangles into a fresh grid.
///
/// Grid sides are `(r % 5 + 3) * 2` by `(r % 7 + 3) * 2`; rectangles are
/// even-sized (at least 2) and even-aligned, so every traced run covers whole
/// wall units.
#[allow(clippy::cast_possible_wrap)]
pub fn random_grid<R: RandomSource + ?Sized>(random: &mut R) -> FillGrid {
    let width = (random.below(5) + 3) * 2;
    let height = (random.below(7) + 3) * 2;
    let mut grid = FillGrid::new(width as i32, height as i32);

    let count = random.below(4) + 1;
    for _ in 0..count {
        let w = (random.below(width / 2) + 1) * 2;
        let h = (random.below(height / 2) + 1) * 2;
        let x = random.below((width - w) / 2 + 1) * 2;
        let y = random.below((height - h) / 2 + 1) * 2;
        grid.fill_rect(x as i32, y as i32, w as i32, h as i32);
    }

    tracing::trace!(width, height, rects = count, filled = grid.filled_count(), "carved grid");
    grid
}
