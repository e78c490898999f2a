use super::{CellState, rules::Rule};
use rand::Rng;
use rayon::prelude::*;

/// Relative offsets of the 8 Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid is a fixed-size 2D array of cells stored as a flat buffer
/// indexed by `y * width + x`. The size never changes after creation.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid<C> {
    width: usize,
    height: usize,
    cells: Vec<C>,
}

impl<C: CellState> Grid<C> {
    /// Create a new grid with every cell in its blank state
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, C::default())
    }

    /// Create a new grid with every cell set to `cell`
    pub fn filled(width: usize, height: usize, cell: C) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<C> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, cell: C) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Pure functional evolution - returns new grid (serial)
    pub fn evolve<R>(&self, rule: &R) -> Self
    where
        R: Rule<Cell = C> + ?Sized,
    {
        let mut next = Self::new(self.width, self.height);
        self.step_into(rule, &mut next);
        next
    }

    /// Parallel evolution using rayon, one task per row
    pub fn evolve_parallel<R>(&self, rule: &R) -> Self
    where
        R: Rule<Cell = C> + ?Sized,
    {
        let mut next = Self::new(self.width, self.height);
        self.step_into_parallel(rule, &mut next);
        next
    }

    /// Cells in the Moore neighborhood of (x, y).
    /// Neighbors that fall outside the grid are skipped, there is no wrapping.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = C> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.get(nx, ny)
        })
    }

    /// Number of Moore neighbors matching `pred`
    pub fn count_neighbors(&self, x: usize, y: usize, pred: impl Fn(C) -> bool) -> u8 {
        self.neighbors(x, y).filter(|&cell| pred(cell)).count() as u8
    }

    /// Whether any Moore neighbor matches `pred`. Stops at the first match.
    pub fn any_neighbor(&self, x: usize, y: usize, pred: impl Fn(C) -> bool) -> bool {
        self.neighbors(x, y).any(pred)
    }

    /// Write the next generation into `next` without touching `self`.
    /// `next` must have the same dimensions.
    pub fn step_into<R>(&self, rule: &R, next: &mut Self)
    where
        R: Rule<Cell = C> + ?Sized,
    {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        if self.width == 0 {
            return;
        }
        next.cells
            .chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| self.fill_row(rule, y, row));
    }

    /// Same as [`Grid::step_into`], rows evaluated in parallel
    pub fn step_into_parallel<R>(&self, rule: &R, next: &mut Self)
    where
        R: Rule<Cell = C> + ?Sized,
    {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        if self.width == 0 {
            return;
        }
        next.cells
            .par_chunks_mut(self.width)
            .enumerate()
            .for_each(|(y, row)| self.fill_row(rule, y, row));
    }

    fn fill_row<R>(&self, rule: &R, y: usize, row: &mut [C])
    where
        R: Rule<Cell = C> + ?Sized,
    {
        row.iter_mut()
            .enumerate()
            .for_each(|(x, cell)| *cell = rule.next_state(self, x, y));
    }

    /// Randomize grid: each cell becomes `cell` with the given probability,
    /// otherwise blank. `probability` must lie in `[0, 1]`.
    pub fn randomize(&mut self, rng: &mut impl Rng, cell: C, probability: f64) {
        self.cells.iter_mut().for_each(|slot| {
            *slot = if rng.random_bool(probability) {
                cell
            } else {
                C::default()
            };
        });
    }

    /// Number of cells equal to `cell`
    pub fn count(&self, cell: C) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

#[cfg(test)]
impl<C: CellState> Grid<C> {
    /// Build a grid from rows of cells, top row first.
    /// All rows must have the same length.
    pub fn from_rows(rows: &[&[C]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        assert!(
            rows.iter().all(|row| row.len() == width),
            "rows must have equal length"
        );
        Self {
            width,
            height,
            cells: rows.iter().flat_map(|row| row.iter().copied()).collect(),
        }
    }
}
