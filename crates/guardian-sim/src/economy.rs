//! Stamina economy and objective health.

use guardian_core::constants::{OBJECTIVE_MAX_HEALTH, STAMINA_REGEN_PER_MS};
use guardian_core::error::ActionRejected;

/// Resource budget and objective integrity for one run.
#[derive(Debug, Clone)]
pub struct Economy {
    stamina: f64,
    max_stamina: f64,
    objective_health: u32,
}

impl Economy {
    pub fn new(starting_stamina: f64, max_stamina: f64) -> Self {
        Self {
            stamina: starting_stamina.min(max_stamina).max(0.0),
            max_stamina,
            objective_health: OBJECTIVE_MAX_HEALTH,
        }
    }

    /// Exact (fractional) stamina.
    pub fn stamina(&self) -> f64 {
        self.stamina
    }

    /// Stamina as shown to the player.
    pub fn displayed_stamina(&self) -> u32 {
        self.stamina.floor() as u32
    }

    pub fn max_stamina(&self) -> f64 {
        self.max_stamina
    }

    pub fn objective_health(&self) -> u32 {
        self.objective_health
    }

    pub fn objective_destroyed(&self) -> bool {
        self.objective_health == 0
    }

    /// Regain one stamina per second of elapsed time, up to the ceiling.
    pub fn regenerate(&mut self, elapsed_ms: f64) {
        self.stamina = (self.stamina + elapsed_ms * STAMINA_REGEN_PER_MS).min(self.max_stamina);
    }

    /// Deduct `cost` if the fractional stamina covers it.
    pub fn try_spend(&mut self, cost: u32) -> Result<(), ActionRejected> {
        let cost_f = cost as f64;
        if self.stamina < cost_f {
            return Err(ActionRejected::InsufficientResource {
                cost,
                available: self.stamina,
            });
        }
        self.stamina -= cost_f;
        Ok(())
    }

    /// Apply damage to the objective, clamped at zero. Returns remaining health.
    pub fn damage_objective(&mut self, amount: u32) -> u32 {
        self.objective_health = self.objective_health.saturating_sub(amount);
        self.objective_health
    }

    /// Restore objective health up to the starting value. Returns the amount restored.
    pub fn repair_objective(&mut self, amount: u32) -> u32 {
        let before = self.objective_health;
        self.objective_health = (before + amount).min(OBJECTIVE_MAX_HEALTH);
        self.objective_health - before
    }

    #[cfg(test)]
    pub(crate) fn set_stamina(&mut self, stamina: f64) {
        self.stamina = stamina;
    }
}
