//! Movement system: walks hostiles toward the objective and resolves arrivals.

use hecs::World;

use guardian_core::components::Speed;
use guardian_core::constants::{ARRIVAL_THRESHOLD, OBJECTIVE_IMPACT_DAMAGE};
use guardian_core::enums::RemovalCause;
use guardian_core::events::{RenderEvent, SimEvent};
use guardian_core::types::Position;

use crate::economy::Economy;
use crate::roster::HostileRoster;

/// Move every hostile one step toward `objective`.
///
/// Hostiles already within the arrival threshold damage the objective and
/// leave instead of moving. Every arrival deducts its own impact damage.
/// `step_scale` multiplies the per-tick speed (1.0 for per-tick semantics).
/// Returns the number of arrivals.
pub fn run(
    world: &mut World,
    roster: &mut HostileRoster,
    objective: Position,
    economy: &mut Economy,
    step_scale: f64,
    events: &mut Vec<SimEvent>,
) -> u32 {
    let hostiles: Vec<_> = roster.iter().collect();
    let mut arrivals = 0;

    for (id, entity) in hostiles {
        let arrived = match world.query_one_mut::<(&mut Position, &Speed)>(entity) {
            Ok((pos, speed)) => {
                let distance = pos.distance_to(&objective);
                if distance < ARRIVAL_THRESHOLD {
                    true
                } else {
                    // Never step past the objective.
                    pos.step_toward(&objective, (speed.0 * step_scale).min(distance));
                    events.push(RenderEvent::Moved { id, position: *pos }.into());
                    false
                }
            }
            Err(_) => continue,
        };

        if arrived {
            let remaining = economy.damage_objective(OBJECTIVE_IMPACT_DAMAGE);
            let _ = world.despawn(entity);
            roster.remove(id);
            arrivals += 1;

            log::info!("objective hit by hostile {id}: {remaining} health left");
            events.push(
                RenderEvent::Removed {
                    id,
                    cause: RemovalCause::ReachedObjective,
                }
                .into(),
            );
            events.push(SimEvent::ObjectiveDamaged {
                damage: OBJECTIVE_IMPACT_DAMAGE,
                remaining,
            });
        }
    }

    arrivals
}
