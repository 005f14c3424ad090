// config.rs - Startup constants; fixed for the life of a session

use std::time::Duration;

use crate::error::ConfigError;
use crate::mana::{Gate, ManaLedger};

/// Pixels per cell edge.
pub const RESOLUTION: u32 = 20;
/// Drawing surface size in pixels; 30 x 40 cells at the default resolution.
pub const DISPLAY_WIDTH: u32 = 600;
pub const DISPLAY_HEIGHT: u32 = 800;
/// Time between generations while running.
pub const TICK_PERIOD: Duration = Duration::from_millis(500);
pub const MANA_MAX: f64 = 10.0;
/// Mana regained per second.
pub const MANA_REGEN_RATE: f64 = 0.5;

/// Environment overrides read by [`Config::from_env`].
pub const ENV_TICK_MS: &str = "LIFE_TICK_MS";
pub const ENV_UNGATED: &str = "LIFE_UNGATED";
pub const ENV_RANDOM_START: &str = "LIFE_RANDOM_START";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub resolution: u32,
    pub display_width: u32,
    pub display_height: u32,
    pub tick_period: Duration,
    pub mana_max: f64,
    pub mana_regen_rate: f64,
    /// Charge mana for placements. When false every pattern is free.
    pub gated: bool,
    /// Start from a random field instead of an empty one.
    pub random_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: RESOLUTION,
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            tick_period: TICK_PERIOD,
            mana_max: MANA_MAX,
            mana_regen_rate: MANA_REGEN_RATE,
            gated: true,
            random_start: false,
        }
    }
}

impl Config {
    /// Defaults with any `LIFE_*` environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides taken from `lookup`, which maps a variable
    /// name to its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_TICK_MS) {
            let ms = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&ms| ms > 0)
                .ok_or_else(|| invalid(ENV_TICK_MS, &value, "expected a positive number of milliseconds"))?;
            config.tick_period = Duration::from_millis(ms);
        }
        if let Some(value) = lookup(ENV_UNGATED) {
            config.gated = !parse_flag(ENV_UNGATED, &value)?;
        }
        if let Some(value) = lookup(ENV_RANDOM_START) {
            config.random_start = parse_flag(ENV_RANDOM_START, &value)?;
        }
        Ok(config)
    }

    pub fn cols(&self) -> usize {
        (self.display_width / self.resolution) as usize
    }

    pub fn rows(&self) -> usize {
        (self.display_height / self.resolution) as usize
    }

    /// Mana gained over one tick period.
    pub fn regen_per_tick(&self) -> f64 {
        self.mana_regen_rate * self.tick_period.as_secs_f64()
    }

    /// Fresh gate: a full ledger, or none when ungated.
    pub fn gate(&self) -> Gate {
        if self.gated {
            Gate::Gated(ManaLedger::new(self.mana_max, self.mana_regen_rate))
        } else {
            Gate::Ungated
        }
    }

    /// Maps a pixel offset on the drawing surface to the cell under it.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 || x >= self.display_width as f32 || y >= self.display_height as f32 {
            return None;
        }
        let res = self.resolution as f32;
        let cell = ((x / res).floor() as usize, (y / res).floor() as usize);
        (cell.0 < self.cols() && cell.1 < self.rows()).then_some(cell)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid(key, value, "expected true or false")),
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason,
    }
}
