// grid.rs - Fixed-size cell grid for the Game of Life

use crate::error::LifeError;

/// A `cols x rows` field of cells, `true` meaning alive.
///
/// Dimensions are fixed at construction. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Builds an empty grid, or a random one where each cell is alive with
    /// probability one half.
    pub fn create(cols: usize, rows: usize, randomize: bool) -> Self {
        if randomize {
            Self::random_with(cols, rows, &mut fastrand::Rng::new())
        } else {
            Self::empty(cols, rows)
        }
    }

    pub fn empty(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
        }
    }

    /// Random grid drawn from the given generator, so a seeded `Rng` gives a
    /// reproducible field.
    pub fn random_with(cols: usize, rows: usize, rng: &mut fastrand::Rng) -> Self {
        let cells = (0..cols * rows).map(|_| rng.bool()).collect();
        Self { cols, rows, cells }
    }

    /// Builds a grid with exactly the listed `(col, row)` cells alive.
    ///
    /// Panics if any cell lies outside the grid.
    pub fn from_cells(cols: usize, rows: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::empty(cols, rows);
        for &(col, row) in alive {
            grid.set(col, row, true);
        }
        grid
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }

    /// Applies a signed offset to a cell, returning the target only if it is
    /// still on the grid.
    pub fn offset(&self, col: usize, row: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
        let col = col.checked_add_signed(dx)?;
        let row = row.checked_add_signed(dy)?;
        self.contains(col, row).then_some((col, row))
    }

    /// Reads a cell.
    ///
    /// Panics on an out-of-range cell; callers bounds-check first.
    pub fn get(&self, col: usize, row: usize) -> bool {
        self.cells[self.index(col, row)]
    }

    /// Writes a cell.
    ///
    /// Panics on an out-of-range cell; callers bounds-check first.
    pub fn set(&mut self, col: usize, row: usize, alive: bool) {
        let index = self.index(col, row);
        self.cells[index] = alive;
    }

    /// Reads a cell, reporting an out-of-range access as an error instead of
    /// panicking.
    pub fn try_get(&self, col: usize, row: usize) -> Result<bool, LifeError> {
        if self.contains(col, row) {
            Ok(self.cells[row * self.cols + col])
        } else {
            Err(self.out_of_range(col, row))
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Live cells as `(col, row)`, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % cols, i / cols))
    }

    fn index(&self, col: usize, row: usize) -> usize {
        if !self.contains(col, row) {
            panic!("{}", self.out_of_range(col, row));
        }
        row * self.cols + col
    }

    fn out_of_range(&self, col: usize, row: usize) -> LifeError {
        LifeError::OutOfRange {
            col,
            row,
            cols: self.cols,
            rows: self.rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_life() {
        let grid = Grid::create(30, 40, false);
        assert_eq!(grid.cols(), 30);
        assert_eq!(grid.rows(), 40);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn seeded_random_grid_is_reproducible() {
        let a = Grid::random_with(16, 16, &mut fastrand::Rng::with_seed(7));
        let b = Grid::random_with(16, 16, &mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
        // 256 fair coin flips landing all on one side would be remarkable.
        assert!(a.population() > 0 && a.population() < 256);
    }

    #[test]
    fn set_and_get_are_column_row() {
        let mut grid = Grid::empty(4, 3);
        grid.set(3, 1, true);
        assert!(grid.get(3, 1));
        assert!(!grid.get(1, 2));
        assert_eq!(grid.alive_cells().collect::<Vec<_>>(), vec![(3, 1)]);
    }

    #[test]
    fn offset_stays_on_grid() {
        let grid = Grid::empty(5, 5);
        assert_eq!(grid.offset(0, 0, -1, 0), None);
        assert_eq!(grid.offset(4, 4, 1, 0), None);
        assert_eq!(grid.offset(2, 2, 1, -1), Some((3, 1)));
    }

    #[test]
    fn try_get_reports_out_of_range() {
        let grid = Grid::empty(2, 2);
        assert_eq!(
            grid.try_get(2, 0),
            Err(LifeError::OutOfRange { col: 2, row: 0, cols: 2, rows: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn get_out_of_range_panics() {
        Grid::empty(2, 2).get(0, 2);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::from_cells(3, 3, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(grid.population(), 3);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
