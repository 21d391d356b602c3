use std::borrow::Cow;

use super::{Cell, WealthRules, hex};

/// Grid manages the 2D hexagonal cellular automaton.
/// Uses functional, immutable updates: every operation returns a new grid
/// and leaves `self` untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Result of advancing a grid by one generation
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Generation {
    pub grid: Grid,
    /// Whether any cell in `grid` is alive
    pub has_life: bool,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    /// Build a grid from row-major cells; `None` if the length does not match
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self { width, height, cells })
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert (row, col) to a buffer index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.in_bounds(row, col)
            .then(|| self.cells[self.index(row, col)])
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Count live hex neighbors (0..=6). Edges do not wrap.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        hex::neighbor_positions(row, col, self.height, self.width)
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation.
    /// Each cell reads only this snapshot, so evaluation order is irrelevant.
    pub fn evolve(&self, rules: &WealthRules, starting_wealth: i32) -> Generation {
        let cells: Vec<Cell> = self
            .iter_cells()
            .map(|(row, col, current)| {
                let delta = rules.delta(self.count_live_neighbors(row, col));
                current.evolve(delta, starting_wealth)
            })
            .collect();

        let grid = Self {
            width: self.width,
            height: self.height,
            cells,
        };
        let has_life = grid.has_life();
        Generation { grid, has_life }
    }

    /// Whether any cell is alive
    pub fn has_life(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Sum of wealth over all live cells
    pub fn total_wealth(&self) -> i64 {
        self.cells.iter().map(|cell| i64::from(cell.wealth)).sum()
    }

    /// Copy of this grid with one cell replaced (no-op if out of bounds)
    fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Self {
        let mut next = self.clone();
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            next.cells[idx] = cell;
        }
        next
    }

    /// Flip a cell between dead and freshly born.
    /// Always returns a new grid, even for an out of bounds position.
    pub fn toggle(&self, row: usize, col: usize, starting_wealth: i32) -> Self {
        let cell = self.get(row, col).unwrap_or_default();
        self.with_cell(row, col, cell.toggle(starting_wealth))
    }

    /// Set a cell alive or dead.
    /// Returns `Cow::Borrowed(self)` when the cell already has that state,
    /// so callers can detect "no change" by the variant (or pointer identity).
    pub fn set_alive(
        &self,
        row: usize,
        col: usize,
        alive: bool,
        starting_wealth: i32,
    ) -> Cow<'_, Self> {
        match self.get(row, col) {
            Some(cell) if cell.is_alive() != alive => {
                let next = if alive { Cell::alive(starting_wealth) } else { Cell::empty() };
                Cow::Owned(self.with_cell(row, col, next))
            }
            _ => Cow::Borrowed(self),
        }
    }

    /// New grid of the given size with the overlapping rectangle copied over.
    /// Cells outside the overlap are dead.
    pub fn resize(&self, width: usize, height: usize) -> Self {
        let mut next = Self::new(width, height);
        let keep_cols = self.width.min(width);
        for row in 0..self.height.min(height) {
            let src = self.index(row, 0);
            let dst = next.index(row, 0);
            next.cells[dst..dst + keep_cols].copy_from_slice(&self.cells[src..src + keep_cols]);
        }
        next
    }

    /// Random grid: each position draws once from `source` (uniform in [0, 1)),
    /// in row-major order, and is born when the draw is below `density`.
    pub fn random<F>(
        width: usize,
        height: usize,
        density: f64,
        starting_wealth: i32,
        mut source: F,
    ) -> Self
    where
        F: FnMut() -> f64,
    {
        let cells = (0..width * height)
            .map(|_| {
                if source() < density {
                    Cell::alive(starting_wealth)
                } else {
                    Cell::empty()
                }
            })
            .collect();
        Self { width, height, cells }
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }
}
