//! Events emitted by the simulation for the renderer and UI.
//!
//! Events are purely informational; nothing feeds back into the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::{EntityKind, RemovalCause};
use crate::error::ActionRejected;
use crate::types::{EntityId, Position};

/// Per-entity notifications for the rendering sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderEvent {
    /// A new entity entered the board.
    Spawned {
        id: EntityId,
        kind: EntityKind,
        position: Position,
        health_ratio: f64,
    },
    /// An entity moved this tick.
    Moved { id: EntityId, position: Position },
    /// A hostile's health bar should show `ratio` (0..=1).
    HealthChanged { id: EntityId, ratio: f64 },
    /// The entity is gone; detach its visual.
    Removed { id: EntityId, cause: RemovalCause },
}

/// Everything the simulation reports for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    Render(RenderEvent),
    /// A wave was released.
    WaveStarted { wave: u32, hostiles: u32 },
    /// A hostile reached the objective.
    ObjectiveDamaged { damage: u32, remaining: u32 },
    /// The objective was repaired by a skill.
    ObjectiveRepaired { amount: u32, health: u32 },
    /// A queued command was refused.
    ActionRejected { card_id: u32, reason: ActionRejected },
    /// The objective was destroyed; the run is over.
    GameOver { wave: u32 },
}

impl From<RenderEvent> for SimEvent {
    fn from(event: RenderEvent) -> Self {
        SimEvent::Render(event)
    }
}
