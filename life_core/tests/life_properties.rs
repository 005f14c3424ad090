use std::time::Duration;

use life_core::{Catalog, Gate, Grid, LifeError, ManaLedger, Refusal, next_generation, try_place};

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    grid.alive_cells().collect()
}

#[test]
fn block_is_a_still_life() {
    let block = Grid::from_cells(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
    let once = next_generation(&block);
    assert_eq!(once, block);
    assert_eq!(next_generation(&once), block);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = Grid::from_cells(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let vertical = next_generation(&horizontal);
    assert_eq!(alive(&vertical), vec![(2, 1), (2, 2), (2, 3)]);
    assert_eq!(next_generation(&vertical), horizontal);
}

#[test]
fn lonely_centre_dies() {
    let grid = Grid::from_cells(3, 3, &[(1, 1)]);
    assert_eq!(next_generation(&grid).population(), 0);
}

#[test]
fn single_neighbour_is_not_enough() {
    let grid = Grid::from_cells(3, 3, &[(0, 0), (1, 1)]);
    assert_eq!(next_generation(&grid).population(), 0);
}

#[test]
fn ledger_never_leaves_bounds() {
    let mut ledger = ManaLedger::new(10.0, 0.5);
    let steps: [(u32, u64); 8] = [(3, 0), (9, 500), (0, 60_000), (10, 0), (1, 0), (0, 250), (4, 1_500), (2, 20_000)];
    for (cost, ms) in steps {
        ledger.deplete(cost);
        assert!((0.0..=10.0).contains(&ledger.current()));
        ledger.regenerate(Duration::from_millis(ms));
        assert!((0.0..=10.0).contains(&ledger.current()));
    }
}

#[test]
fn unaffordable_placement_is_refused_untouched() {
    let catalog = Catalog::standard();
    let mut grid = Grid::from_cells(10, 10, &[(5, 5)]);
    let mut gate = Gate::Gated(ManaLedger::with_current(10.0, 0.5, 4.75));
    let (grid_before, gate_before) = (grid.clone(), gate.clone());

    let result = try_place(&mut grid, &mut gate, &catalog, "beacon", 1, 1);

    assert_eq!(
        result,
        Err(LifeError::Refused(Refusal::InsufficientResource { cost: 5, available: 4.75 }))
    );
    assert_eq!(grid, grid_before);
    assert_eq!(gate, gate_before);
}

#[test]
fn glider_stamps_and_moves() {
    let catalog = Catalog::standard();
    let mut grid = Grid::empty(10, 10);
    let mut gate = Gate::Gated(ManaLedger::new(10.0, 0.5));

    try_place(&mut grid, &mut gate, &catalog, "glider", 0, 0).unwrap();
    assert_eq!(alive(&grid), vec![(2, 0), (0, 1), (2, 1), (1, 2), (2, 2)]);

    let next = next_generation(&grid);
    assert_eq!(alive(&next), vec![(1, 0), (2, 1), (3, 1), (1, 2), (2, 2)]);

    // Four generations later the same shape sits one cell down and right.
    let mut later = grid.clone();
    for _ in 0..4 {
        later = next_generation(&later);
    }
    assert_eq!(alive(&later), vec![(3, 1), (1, 2), (3, 2), (2, 3), (3, 3)]);
}

#[test]
fn far_edge_placement_keeps_in_range_cells() {
    let catalog = Catalog::standard();
    let mut grid = Grid::empty(10, 10);
    let mut gate = Gate::Gated(ManaLedger::new(10.0, 0.5));

    let glider = try_place(&mut grid, &mut gate, &catalog, "glider", 8, 8).unwrap();
    assert_eq!(glider.cells, 1);
    assert_eq!(alive(&grid), vec![(8, 9)]);

    let beacon = try_place(&mut grid, &mut gate, &catalog, "beacon", 7, 7).unwrap();
    assert_eq!(beacon.cells, 3);
    assert_eq!(alive(&grid), vec![(7, 7), (8, 7), (7, 8), (8, 9)]);
    assert_eq!(gate.available(), 2.0);
}
