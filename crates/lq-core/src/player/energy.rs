//! Energy: the consumable resource gating task attempts

use serde::{Deserialize, Serialize};

use crate::consts::{ENERGY_PER_HOUR, MAX_ENERGY};
use crate::error::GameError;

/// Energy ledger, always clamped to `[0, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLedger {
    current: u32,
    max: u32,
}

impl Default for EnergyLedger {
    fn default() -> Self {
        Self::new(MAX_ENERGY)
    }
}

impl EnergyLedger {
    /// Create a full ledger with the given maximum
    pub const fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Rebuild a ledger from persisted values, clamping current to max
    pub fn from_parts(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Debit `cost` energy.
    ///
    /// Fails without changing anything if the balance is short; callers
    /// check energy before mutating any other state.
    pub fn spend(&mut self, cost: u32) -> Result<(), GameError> {
        if self.current < cost {
            return Err(GameError::InsufficientEnergy {
                needed: cost,
                have: self.current,
            });
        }
        self.current -= cost;
        Ok(())
    }

    /// Credit energy, clamped to max. Returns the amount actually gained.
    pub fn credit(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - before
    }

    /// Credit energy for real time spent away: 10 per hour, floored.
    ///
    /// Called at most once per load. Negative elapsed time (clock moved
    /// backwards) credits nothing. Returns the amount actually gained.
    pub fn regenerate(&mut self, elapsed_secs: i64) -> u32 {
        if elapsed_secs <= 0 {
            return 0;
        }
        let amount = elapsed_secs * ENERGY_PER_HOUR / 3600;
        self.credit(amount.min(u32::MAX as i64) as u32)
    }
}
