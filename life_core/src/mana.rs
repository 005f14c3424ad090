// mana.rs - Regenerating resource that pays for pattern placement

use std::time::Duration;

/// Bounded mana pool. `current` always stays within `[0, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ManaLedger {
    current: f64,
    max: f64,
    /// Mana regained per second of simulated time.
    rate: f64,
}

impl ManaLedger {
    /// A full ledger.
    pub fn new(max: f64, rate: f64) -> Self {
        Self {
            current: max,
            max,
            rate,
        }
    }

    /// A ledger holding `current` (clamped), for seeding a game mid-way.
    pub fn with_current(max: f64, rate: f64, current: f64) -> Self {
        Self {
            current: current.clamp(0.0, max),
            max,
            rate,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Fill level for a progress bar, `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.max > 0.0 { self.current / self.max } else { 0.0 }
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.current >= f64::from(cost)
    }

    /// Spends `cost`. Never goes below zero, so callers gate on
    /// [`can_afford`](Self::can_afford) to keep the refusal rule.
    pub fn deplete(&mut self, cost: u32) {
        self.current = (self.current - f64::from(cost)).max(0.0);
    }

    /// Regains `rate * elapsed` mana, capped at `max`.
    pub fn regenerate(&mut self, elapsed: Duration) {
        self.current = (self.current + self.rate * elapsed.as_secs_f64()).min(self.max);
    }
}

/// Whether placement is paid for.
///
/// `Ungated` places everything for free; `Gated` charges the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    Ungated,
    Gated(ManaLedger),
}

impl Gate {
    pub fn can_afford(&self, cost: u32) -> bool {
        match self {
            Gate::Ungated => true,
            Gate::Gated(ledger) => ledger.can_afford(cost),
        }
    }

    /// Charges a placement. No-op when ungated.
    pub fn charge(&mut self, cost: u32) {
        if let Gate::Gated(ledger) = self {
            ledger.deplete(cost);
        }
    }

    pub fn regenerate(&mut self, elapsed: Duration) {
        if let Gate::Gated(ledger) = self {
            ledger.regenerate(elapsed);
        }
    }

    pub fn ledger(&self) -> Option<&ManaLedger> {
        match self {
            Gate::Ungated => None,
            Gate::Gated(ledger) => Some(ledger),
        }
    }

    /// Mana available to spend; unlimited when ungated.
    pub fn available(&self) -> f64 {
        self.ledger().map_or(f64::INFINITY, ManaLedger::current)
    }
}
