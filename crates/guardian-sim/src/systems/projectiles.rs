//! Projectile system: homing flight, hit detection, fizzling.

use hecs::World;

use guardian_core::components::{Health, Projectile};
use guardian_core::enums::RemovalCause;
use guardian_core::events::{RenderEvent, SimEvent};
use guardian_core::types::{EntityId, Position};

use super::damage::{self, DamageOutcome};
use crate::roster::HostileRoster;

/// What happened to the projectiles during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectileReport {
    pub hits: u32,
    pub kills: u32,
    pub fizzled: u32,
}

/// Advance every projectile toward its target's current position.
///
/// A projectile whose target is gone or dead is discarded without touching
/// anything else. A projectile closer to its target than one step hits:
/// damage is applied and the projectile is discarded.
pub fn run(
    world: &mut World,
    roster: &mut HostileRoster,
    step_scale: f64,
    events: &mut Vec<SimEvent>,
) -> ProjectileReport {
    let mut projectiles: Vec<(EntityId, hecs::Entity, Position, Projectile)> = world
        .query::<(&EntityId, &Position, &Projectile)>()
        .iter()
        .map(|(entity, (id, pos, projectile))| (*id, entity, *pos, *projectile))
        .collect();
    projectiles.sort_by_key(|(id, ..)| *id);

    let mut report = ProjectileReport::default();

    for (id, entity, mut pos, projectile) in projectiles {
        let target_pos = roster.get(projectile.target).and_then(|target| {
            let health = world.get::<&Health>(target).ok()?;
            if health.is_dead() {
                return None;
            }
            world.get::<&Position>(target).ok().map(|p| *p)
        });

        let Some(target_pos) = target_pos else {
            let _ = world.despawn(entity);
            report.fizzled += 1;
            events.push(
                RenderEvent::Removed {
                    id,
                    cause: RemovalCause::ProjectileFizzled,
                }
                .into(),
            );
            continue;
        };

        let step = projectile.speed * step_scale;
        if pos.distance_to(&target_pos) < step {
            let outcome =
                damage::apply_damage(world, roster, projectile.target, projectile.damage, events);
            let _ = world.despawn(entity);
            report.hits += 1;
            if outcome == DamageOutcome::Killed {
                report.kills += 1;
            }
            events.push(
                RenderEvent::Removed {
                    id,
                    cause: RemovalCause::ProjectileHit,
                }
                .into(),
            );
            continue;
        }

        pos.step_toward(&target_pos, step);
        if let Ok(mut stored) = world.get::<&mut Position>(entity) {
            *stored = pos;
        }
        events.push(RenderEvent::Moved { id, position: pos }.into());
    }

    report
}
