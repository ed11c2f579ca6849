//! Game state snapshot: the complete read-only view produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{Element, GamePhase};
use crate::events::SimEvent;
use crate::types::{Cell, EntityId, Position, SimTime};

/// Complete visible state, built after every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub economy: EconomyView,
    pub hostiles: Vec<HostileView>,
    pub defenders: Vec<DefenderView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: ScoreView,
    /// Events emitted during the tick that produced this snapshot.
    pub events: Vec<SimEvent>,
}

/// Displayed quantities of the economy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    /// Stamina as shown to the player (floored).
    pub stamina: u32,
    pub max_stamina: u32,
    pub objective_health: u32,
    pub wave: u32,
    /// Time until the next wave (ms).
    pub wave_timer_ms: f64,
    pub next_wave_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub id: EntityId,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenderView {
    pub id: EntityId,
    pub cell: Cell,
    pub position: Position,
    pub element: Element,
    pub range: f64,
    pub cooldown_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub position: Position,
    pub target: EntityId,
}

/// Running tallies for the end-of-run summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub hostiles_spawned: u32,
    pub hostiles_killed: u32,
    pub hostiles_leaked: u32,
    pub projectiles_fired: u32,
    pub defenders_placed: u32,
    pub skills_used: u32,
}
