//! One-shot skill effects, applied after the card's stamina is paid.

use hecs::World;
use serde::{Deserialize, Serialize};

use guardian_core::cards::SkillEffect;
use guardian_core::events::SimEvent;
use guardian_core::types::{EntityId, Position};

use super::damage::{self, DamageOutcome};
use crate::economy::Economy;
use crate::roster::HostileRoster;

/// What a skill did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SkillOutcome {
    AreaDamage { hit: u32, killed: u32 },
    Repaired { amount: u32, health: u32 },
}

/// Apply `effect` centred on `target`.
pub fn apply(
    effect: SkillEffect,
    target: Position,
    world: &mut World,
    roster: &mut HostileRoster,
    economy: &mut Economy,
    events: &mut Vec<SimEvent>,
) -> SkillOutcome {
    match effect {
        SkillEffect::AreaDamage { radius, damage } => {
            let victims: Vec<EntityId> = roster
                .iter()
                .filter(|(_, entity)| {
                    world
                        .get::<&Position>(*entity)
                        .map(|pos| pos.distance_to(&target) <= radius)
                        .unwrap_or(false)
                })
                .map(|(id, _)| id)
                .collect();

            let mut killed = 0;
            for id in &victims {
                if damage::apply_damage(world, roster, *id, damage, events) == DamageOutcome::Killed
                {
                    killed += 1;
                }
            }
            SkillOutcome::AreaDamage {
                hit: victims.len() as u32,
                killed,
            }
        }
        SkillEffect::RepairObjective { amount } => {
            let restored = economy.repair_objective(amount);
            let health = economy.objective_health();
            events.push(SimEvent::ObjectiveRepaired {
                amount: restored,
                health,
            });
            SkillOutcome::Repaired {
                amount: restored,
                health,
            }
        }
    }
}
