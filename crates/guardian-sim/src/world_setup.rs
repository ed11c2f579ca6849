//! Entity spawn factories.
//!
//! Creates hostiles, defenders and projectiles with the appropriate component
//! bundles and announces each one to the renderer.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use guardian_core::cards::Card;
use guardian_core::components::*;
use guardian_core::constants::*;
use guardian_core::enums::EntityKind;
use guardian_core::events::{RenderEvent, SimEvent};
use guardian_core::types::{Cell, EntityId, Position};

use crate::board::Board;
use crate::roster::HostileRoster;

/// Hand out the next entity id.
pub fn allocate_id(next_id: &mut u64) -> EntityId {
    let id = EntityId(*next_id);
    *next_id += 1;
    id
}

/// Spawn a hostile just outside a random board edge.
pub fn spawn_hostile_at_random_edge(
    world: &mut World,
    roster: &mut HostileRoster,
    board: &Board,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    events: &mut Vec<SimEvent>,
) -> EntityId {
    let position = board.random_spawn_point(rng);
    spawn_hostile(world, roster, next_id, position, events)
}

/// Spawn a full-health hostile at `position` and add it to the roster.
pub fn spawn_hostile(
    world: &mut World,
    roster: &mut HostileRoster,
    next_id: &mut u64,
    position: Position,
    events: &mut Vec<SimEvent>,
) -> EntityId {
    let id = allocate_id(next_id);
    let health = Health::full(HOSTILE_MAX_HEALTH);
    let entity = world.spawn((Hostile, id, position, health, Speed(HOSTILE_SPEED)));
    roster.insert(id, entity);

    events.push(
        RenderEvent::Spawned {
            id,
            kind: EntityKind::Hostile,
            position,
            health_ratio: health.ratio(),
        }
        .into(),
    );
    id
}

/// Spawn a defender built from `card` at the centre of `cell`.
pub fn spawn_defender(
    world: &mut World,
    board: &Board,
    next_id: &mut u64,
    card: &Card,
    cell: Cell,
    events: &mut Vec<SimEvent>,
) -> EntityId {
    let id = allocate_id(next_id);
    let position = board.cell_center(cell);
    let defender = Defender {
        cell,
        element: card.element,
        range: DEFENDER_RANGE,
        attack_interval_ms: DEFENDER_ATTACK_INTERVAL_MS,
        cooldown_ms: 0.0,
        damage: DEFENDER_DAMAGE,
    };
    world.spawn((id, position, defender));

    events.push(
        RenderEvent::Spawned {
            id,
            kind: EntityKind::Defender(card.element),
            position,
            health_ratio: 1.0,
        }
        .into(),
    );
    id
}

/// Spawn a projectile at `origin` homing on the hostile `target`.
pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u64,
    origin: Position,
    target: EntityId,
    damage: i32,
    events: &mut Vec<SimEvent>,
) -> EntityId {
    let id = allocate_id(next_id);
    let projectile = Projectile {
        target,
        speed: PROJECTILE_SPEED,
        damage,
    };
    world.spawn((id, origin, projectile));

    events.push(
        RenderEvent::Spawned {
            id,
            kind: EntityKind::Projectile,
            position: origin,
            health_ratio: 1.0,
        }
        .into(),
    );
    id
}
