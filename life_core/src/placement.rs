// placement.rs - Stamping catalog patterns onto the live grid

use crate::error::{LifeError, Refusal};
use crate::grid::Grid;
use crate::mana::Gate;
use crate::patterns::Catalog;

/// What a successful placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub pattern: &'static str,
    /// Cells that landed on the grid; fewer than the pattern's size when
    /// it hangs off an edge.
    pub cells: usize,
    /// Mana charged (zero when ungated).
    pub cost: u32,
}

/// Places `pattern_name` with its anchor at `(anchor_col, anchor_row)`.
///
/// Refuses without touching the grid or the gate when the pattern is
/// unaffordable. Offsets landing off the grid are skipped. On success the
/// cost is charged to the gate.
pub fn try_place(
    grid: &mut Grid,
    gate: &mut Gate,
    catalog: &Catalog,
    pattern_name: &str,
    anchor_col: usize,
    anchor_row: usize,
) -> Result<Placed, LifeError> {
    let pattern = catalog.get(pattern_name)?;
    if !gate.can_afford(pattern.cost) {
        return Err(Refusal::InsufficientResource {
            cost: pattern.cost,
            available: gate.available(),
        }
        .into());
    }

    let mut cells = 0;
    for (col, row) in pattern.cells_at(anchor_col, anchor_row, grid.cols(), grid.rows()) {
        grid.set(col, row, true);
        cells += 1;
    }

    let cost = match gate {
        Gate::Ungated => 0,
        Gate::Gated(_) => pattern.cost,
    };
    gate.charge(cost);

    log::debug!(
        "placed {} at ({anchor_col}, {anchor_row}): {cells} cells, cost {cost}",
        pattern.name
    );
    Ok(Placed {
        pattern: pattern.name,
        cells,
        cost,
    })
}
