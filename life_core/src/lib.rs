//! Conway's Game of Life with mana-gated pattern placement.
//!
//! The core knows nothing about windows or widgets. A host feeds pointer
//! events and due ticks into a [`Simulation`] and receives drawing calls
//! through a [`Presenter`].

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod mana;
pub mod patterns;
pub mod placement;
pub mod present;
pub mod scheduler;
pub mod sim;

pub use config::Config;
pub use engine::next_generation;
pub use error::{ConfigError, LifeError, Refusal};
pub use grid::Grid;
pub use mana::{Gate, ManaLedger};
pub use patterns::{Catalog, Pattern, PATTERNS};
pub use placement::{try_place, Placed};
pub use present::{Fill, FrameBuffer, Presenter};
pub use scheduler::{ManualScheduler, Scheduler, TokioScheduler};
pub use sim::{RunState, SimState, Simulation, TickOutcome};
