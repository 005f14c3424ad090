// engine.rs - One Game of Life generation over a flat (non-wrapping) grid

use crate::grid::Grid;

/// Moore neighbourhood, excluding the cell itself.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Live neighbours of a cell. Positions off the grid count as dead.
pub fn live_neighbours(grid: &Grid, col: usize, row: usize) -> u8 {
    NEIGHBOURS
        .iter()
        .filter_map(|&(dx, dy)| grid.offset(col, row, dx, dy))
        .filter(|&(c, r)| grid.get(c, r))
        .count() as u8
}

/// B3/S23 for a single cell.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, n) if n < 2 => false, // Underpopulation
        (true, n) if n > 3 => false, // Overpopulation
        (false, 3)         => true,  // Birth
        (state, _)         => state, // Survival, or stays dead
    }
}

/// Computes the next generation into a fresh grid; `grid` is only read, so
/// every cell sees the previous generation.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = Grid::empty(grid.cols(), grid.rows());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let alive = next_state(grid.get(col, row), live_neighbours(grid, col, row));
            if alive {
                next.set(col, row, true);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn corner_has_three_neighbours_at_most() {
        let grid = Grid::from_cells(3, 3, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)]);
        assert_eq!(live_neighbours(&grid, 0, 0), 3);
        assert_eq!(live_neighbours(&grid, 1, 1), 4);
        assert_eq!(live_neighbours(&grid, 2, 2), 1);
    }

    #[test]
    fn lone_cell_dies() {
        let grid = Grid::from_cells(3, 3, &[(1, 1)]);
        assert_eq!(next_generation(&grid).population(), 0);
    }

    #[test]
    fn three_neighbours_give_birth() {
        let grid = Grid::from_cells(3, 3, &[(0, 0), (2, 0), (0, 2)]);
        let next = next_generation(&grid);
        assert!(next.get(1, 1));
    }

    #[test]
    fn input_is_not_mutated() {
        let grid = Grid::from_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let before = grid.clone();
        let _ = next_generation(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn no_wraparound_at_edges() {
        // A vertical blinker hugging the left edge would feed the right edge
        // on a torus.
        let grid = Grid::from_cells(5, 5, &[(0, 1), (0, 2), (0, 3)]);
        let next = next_generation(&grid);
        assert_eq!(next.alive_cells().collect::<Vec<_>>(), vec![(0, 2), (1, 2)]);
    }
}
