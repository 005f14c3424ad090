// sim.rs - Simulation state, the run/pause tick loop, and the handle the
// interaction layer drives it through

use std::time::Duration;

use crate::config::Config;
use crate::engine::next_generation;
use crate::error::{LifeError, Refusal};
use crate::grid::Grid;
use crate::mana::Gate;
use crate::patterns::{Catalog, Pattern};
use crate::placement::{self, Placed};
use crate::present::{Fill, Presenter};
use crate::scheduler::Scheduler;

/// Everything one game session mutates.
#[derive(Debug, Clone)]
pub struct SimState {
    grid: Grid,
    gate: Gate,
    catalog: Catalog,
    cursor: Option<(usize, usize)>,
    selected: &'static Pattern,
    generation: u64,
}

impl SimState {
    pub fn new(grid: Grid, gate: Gate, catalog: Catalog) -> Self {
        Self {
            grid,
            gate,
            selected: catalog.first(),
            catalog,
            cursor: None,
            generation: 0,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let grid = Grid::create(config.cols(), config.rows(), config.random_start);
        Self::new(grid, config.gate(), Catalog::standard())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    pub fn selected(&self) -> &'static Pattern {
        self.selected
    }

    /// Generations advanced since start or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn can_afford(&self, pattern: &Pattern) -> bool {
        self.gate.can_afford(pattern.cost)
    }

    /// Cells the selected pattern would cover at the cursor.
    pub fn preview_cells(&self) -> Vec<(usize, usize)> {
        match self.cursor {
            Some((col, row)) => self
                .selected
                .cells_at(col, row, self.grid.cols(), self.grid.rows())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Pushes the grid, preview, mana bar and slot availability to `view`.
    pub fn render(&self, view: &mut impl Presenter) {
        let preview = self.preview_cells();
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let fill = if preview.contains(&(col, row)) {
                    Fill::Preview
                } else if self.grid.get(col, row) {
                    Fill::Alive
                } else {
                    Fill::Dead
                };
                view.draw_cell(col, row, fill);
            }
        }
        if let Some(ledger) = self.gate.ledger() {
            view.set_resource_bar_fraction(ledger.fraction());
        }
        for pattern in self.catalog.iter() {
            view.set_affordability_indicator(pattern.name, self.can_afford(pattern));
        }
    }

    fn advance(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

/// Result of delivering a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The grid advanced and another tick was scheduled.
    Advanced { generation: u64 },
    /// The loop was paused; nothing changed and no tick was scheduled.
    Stopped,
}

/// Owns the session state and runs it on a fixed tick.
///
/// Starts paused. While running, every tick advances one generation,
/// regenerates mana for one tick period, redraws, then schedules the next
/// tick. Pausing only stops the rescheduling, so a tick already queued
/// still arrives and ends the chain.
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimState,
    run: RunState,
    tick_period: Duration,
    tick_pending: bool,
}

impl Simulation {
    pub fn new(config: &Config) -> Self {
        Self::with_state(SimState::from_config(config), config.tick_period)
    }

    pub fn with_state(state: SimState, tick_period: Duration) -> Self {
        Self {
            state,
            run: RunState::Paused,
            tick_period,
            tick_pending: false,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    pub fn is_running(&self) -> bool {
        self.run == RunState::Running
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Whether a tick has been requested and not yet delivered.
    pub fn tick_pending(&self) -> bool {
        self.tick_pending
    }

    pub fn render(&self, view: &mut impl Presenter) {
        self.state.render(view);
    }

    /// Flips between paused and running.
    ///
    /// Resuming asks for an immediate tick unless one is still queued from
    /// before the pause, so two tick chains never run side by side.
    pub fn on_toggle_run_pause(&mut self, scheduler: &mut impl Scheduler) -> RunState {
        self.run = match self.run {
            RunState::Paused => {
                if !self.tick_pending {
                    scheduler.schedule(Duration::ZERO);
                    self.tick_pending = true;
                }
                RunState::Running
            }
            RunState::Running => RunState::Paused,
        };
        log::info!(
            "simulation {} at generation {}",
            if self.is_running() { "running" } else { "paused" },
            self.state.generation
        );
        self.run
    }

    /// Delivers a due tick.
    pub fn on_tick(
        &mut self,
        scheduler: &mut impl Scheduler,
        view: &mut impl Presenter,
    ) -> TickOutcome {
        self.tick_pending = false;
        if self.run == RunState::Paused {
            log::trace!("tick after pause, loop stopped");
            return TickOutcome::Stopped;
        }

        self.state.advance();
        self.state.gate.regenerate(self.tick_period);
        self.state.render(view);
        scheduler.schedule(self.tick_period);
        self.tick_pending = true;

        log::trace!(
            "generation {}: population {}, mana {:.2}",
            self.state.generation,
            self.state.grid.population(),
            self.state.gate.available()
        );
        TickOutcome::Advanced {
            generation: self.state.generation,
        }
    }

    pub fn on_pointer_move(&mut self, col: usize, row: usize, view: &mut impl Presenter) {
        self.state.cursor = Some((col, row));
        self.state.render(view);
    }

    pub fn on_pointer_leave(&mut self, view: &mut impl Presenter) {
        self.state.cursor = None;
        self.state.render(view);
    }

    /// Places the selected pattern anchored at the clicked cell.
    ///
    /// An unaffordable pattern is refused up front with no change. Clicks
    /// off the grid are a caller bug and reported as `OutOfRange`.
    pub fn on_pointer_click(
        &mut self,
        col: usize,
        row: usize,
        view: &mut impl Presenter,
    ) -> Result<Placed, LifeError> {
        let grid = &self.state.grid;
        if !grid.contains(col, row) {
            return Err(LifeError::OutOfRange {
                col,
                row,
                cols: grid.cols(),
                rows: grid.rows(),
            });
        }

        let pattern = self.state.selected;
        if !self.state.can_afford(pattern) {
            log::debug!("{} refused at ({col}, {row})", pattern.name);
            return Err(Refusal::InsufficientResource {
                cost: pattern.cost,
                available: self.state.gate.available(),
            }
            .into());
        }

        let state = &mut self.state;
        let placed = placement::try_place(
            &mut state.grid,
            &mut state.gate,
            &state.catalog,
            pattern.name,
            col,
            row,
        )?;
        state.render(view);
        Ok(placed)
    }

    /// Selects a pattern by catalog name.
    pub fn on_pattern_select(&mut self, name: &str, view: &mut impl Presenter) -> Result<(), LifeError> {
        self.state.selected = self.state.catalog.get(name)?;
        log::debug!("selected pattern {name}");
        self.state.render(view);
        Ok(())
    }

    /// Replaces the grid with an empty or random one and pauses. Mana is
    /// left as it is.
    pub fn reset(&mut self, randomize: bool, view: &mut impl Presenter) {
        let (cols, rows) = (self.state.grid.cols(), self.state.grid.rows());
        self.state.grid = Grid::create(cols, rows, randomize);
        self.state.generation = 0;
        self.run = RunState::Paused;
        log::info!(
            "grid reset ({}), simulation paused",
            if randomize { "random" } else { "empty" }
        );
        self.state.render(view);
    }
}
