//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond trivial accessors.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Element;
use crate::types::Cell;

/// Marks an entity as a hostile unit advancing on the objective.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile;

/// Hit points of a hostile unit.
///
/// `current` may dip below zero for the instant between a damage application
/// and the removal of the unit; a live unit always has `0 < current <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Fraction of health left, clamped to [0, 1] for display.
    pub fn ratio(&self) -> f64 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current as f64 / self.max as f64).clamp(0.0, 1.0)
    }
}

/// Straight-line movement speed (board units per tick).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed(pub f64);

/// A stationary defender placed on a board cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defender {
    pub cell: Cell,
    pub element: Element,
    /// Attack radius.
    pub range: f64,
    /// Cooldown restored after every shot (ms).
    pub attack_interval_ms: f64,
    /// Counts down each tick; the defender may fire once it is <= 0.
    pub cooldown_ms: f64,
    /// Damage carried by each projectile.
    pub damage: i32,
}

/// A homing projectile in flight.
///
/// `target` is a non-owning handle: the hostile may be removed at any time
/// and the projectile system checks liveness every tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub target: crate::types::EntityId,
    pub speed: f64,
    pub damage: i32,
}
