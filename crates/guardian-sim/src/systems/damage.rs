//! Damage resolver: the single path by which hostiles lose health and die.

use hecs::World;

use guardian_core::components::Health;
use guardian_core::enums::RemovalCause;
use guardian_core::events::{RenderEvent, SimEvent};
use guardian_core::types::EntityId;

use crate::roster::HostileRoster;

/// Result of applying damage to a hostile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The hostile lives on with `remaining` health.
    Survived { remaining: i32 },
    /// The hostile died and was removed.
    Killed,
    /// No such hostile (already removed).
    Missing,
}

/// Subtract `amount` from the hostile's health and remove it if it dies.
///
/// Health is not clamped before the death check. The renderer receives the
/// clamped health ratio, then a removal if the unit died.
pub fn apply_damage(
    world: &mut World,
    roster: &mut HostileRoster,
    target: EntityId,
    amount: i32,
    events: &mut Vec<SimEvent>,
) -> DamageOutcome {
    let Some(entity) = roster.get(target) else {
        return DamageOutcome::Missing;
    };

    let health = match world.get::<&mut Health>(entity) {
        Ok(mut health) => {
            health.current -= amount;
            *health
        }
        Err(_) => return DamageOutcome::Missing,
    };

    events.push(
        RenderEvent::HealthChanged {
            id: target,
            ratio: health.ratio(),
        }
        .into(),
    );

    if !health.is_dead() {
        return DamageOutcome::Survived {
            remaining: health.current,
        };
    }

    let _ = world.despawn(entity);
    roster.remove(target);
    log::debug!("hostile {target} destroyed");
    events.push(
        RenderEvent::Removed {
            id: target,
            cause: RemovalCause::Killed,
        }
        .into(),
    );
    DamageOutcome::Killed
}
