//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use guardian_core::components::*;
use guardian_core::enums::GamePhase;
use guardian_core::events::SimEvent;
use guardian_core::state::*;
use guardian_core::types::{EntityId, Position, SimTime};

use super::wave_spawner::WaveSchedule;
use crate::economy::Economy;
use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    economy: &Economy,
    schedule: &WaveSchedule,
    score: &ScoreState,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        economy: EconomyView {
            stamina: economy.displayed_stamina(),
            max_stamina: economy.max_stamina().floor() as u32,
            objective_health: economy.objective_health(),
            wave: schedule.wave,
            wave_timer_ms: schedule.timer_ms.max(0.0),
            next_wave_size: schedule.next_wave_size,
        },
        hostiles: build_hostiles(world),
        defenders: build_defenders(world),
        projectiles: build_projectiles(world),
        score: score.view(),
        events,
    }
}

fn build_hostiles(world: &World) -> Vec<HostileView> {
    let mut hostiles: Vec<HostileView> = world
        .query::<(&Hostile, &EntityId, &Position, &Health)>()
        .iter()
        .map(|(_, (_, id, pos, health))| HostileView {
            id: *id,
            position: *pos,
            health: health.current,
            max_health: health.max,
        })
        .collect();
    hostiles.sort_by_key(|h| h.id);
    hostiles
}

fn build_defenders(world: &World) -> Vec<DefenderView> {
    let mut defenders: Vec<DefenderView> = world
        .query::<(&EntityId, &Position, &Defender)>()
        .iter()
        .map(|(_, (id, pos, defender))| DefenderView {
            id: *id,
            cell: defender.cell,
            position: *pos,
            element: defender.element,
            range: defender.range,
            cooldown_ms: defender.cooldown_ms,
        })
        .collect();
    defenders.sort_by_key(|d| d.id);
    defenders
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&EntityId, &Position, &Projectile)>()
        .iter()
        .map(|(_, (id, pos, projectile))| ProjectileView {
            id: *id,
            position: *pos,
            target: projectile.target,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}
