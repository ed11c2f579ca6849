//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Elemental affinity of a card and of the defender it builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    #[default]
    Ice,
}

impl Element {
    /// Legacy naming rule: a card whose name mentions fire builds a fire
    /// defender, everything else is ice.
    pub fn from_card_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("fire") || lower.contains("flame") || name.contains('火') {
            Element::Fire
        } else {
            Element::Ice
        }
    }
}

/// Top-level state of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// The objective was destroyed. Terminal.
    Defeated,
}

/// What kind of entity a render event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Hostile,
    Defender(Element),
    Projectile,
}

/// Why an entity left the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalCause {
    /// Hostile health reached zero.
    Killed,
    /// Hostile reached the objective and damaged it.
    ReachedObjective,
    /// Projectile delivered its payload.
    ProjectileHit,
    /// Projectile target was already gone.
    ProjectileFizzled,
}

/// How per-tick speeds relate to elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum SpeedModel {
    /// Speeds are distance per tick; faster frame rates move things faster.
    #[default]
    PerTick,
    /// Speeds are distance per reference frame, scaled by elapsed time, so
    /// effective speed does not depend on the tick rate.
    PerElapsed { reference_frame_ms: f64 },
}

impl SpeedModel {
    /// Multiplier applied to per-tick speeds for a tick of `elapsed_ms`.
    pub fn step_scale(&self, elapsed_ms: f64) -> f64 {
        match *self {
            SpeedModel::PerTick => 1.0,
            SpeedModel::PerElapsed { reference_frame_ms } if reference_frame_ms > 0.0 => {
                elapsed_ms / reference_frame_ms
            }
            SpeedModel::PerElapsed { .. } => 1.0,
        }
    }
}
