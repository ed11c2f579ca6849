//! Targeting and attack system: cooldowns, target selection, firing.

use hecs::World;

use guardian_core::components::Defender;
use guardian_core::events::SimEvent;
use guardian_core::types::{EntityId, Position};

use crate::roster::HostileRoster;
use crate::world_setup;

/// Pick the first hostile, in spawn order, within `range` of `origin`.
///
/// First-found, not nearest.
pub fn find_target(
    origin: &Position,
    range: f64,
    hostiles: &[(EntityId, Position)],
) -> Option<EntityId> {
    hostiles
        .iter()
        .find(|(_, pos)| origin.distance_to(pos) <= range)
        .map(|(id, _)| *id)
}

/// Count down every defender's cooldown and fire at a target when ready.
///
/// A ready defender with nothing in range keeps its non-positive cooldown and
/// retries next tick. A defender that fires has its cooldown set to exactly
/// its attack interval. Returns the number of projectiles created.
pub fn run(
    world: &mut World,
    roster: &HostileRoster,
    next_id: &mut u64,
    elapsed_ms: f64,
    events: &mut Vec<SimEvent>,
) -> u32 {
    let hostiles: Vec<(EntityId, Position)> = roster
        .iter()
        .filter_map(|(id, entity)| world.get::<&Position>(entity).ok().map(|pos| (id, *pos)))
        .collect();

    // (defender id, origin, target, damage)
    let mut shots: Vec<(EntityId, Position, EntityId, i32)> = Vec::new();

    for (_entity, (id, pos, defender)) in
        world.query_mut::<(&EntityId, &Position, &mut Defender)>()
    {
        defender.cooldown_ms -= elapsed_ms;
        if defender.cooldown_ms > 0.0 {
            continue;
        }
        if let Some(target) = find_target(pos, defender.range, &hostiles) {
            defender.cooldown_ms = defender.attack_interval_ms;
            shots.push((*id, *pos, target, defender.damage));
        }
    }

    // Fire in placement order so projectile order is stable.
    shots.sort_by_key(|(defender, ..)| *defender);
    for &(_, origin, target, damage) in &shots {
        world_setup::spawn_projectile(world, next_id, origin, target, damage, events);
    }
    shots.len() as u32
}
