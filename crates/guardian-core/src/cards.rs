//! Card definitions: buildings that place defenders and one-shot skills.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Element;

/// One-shot effect triggered by a skill card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect")]
pub enum SkillEffect {
    /// Damage every hostile within `radius` of the chosen point.
    AreaDamage { radius: f64, damage: i32 },
    /// Restore objective health, capped at the starting value.
    RepairObjective { amount: u32 },
}

/// Whether a card builds something or casts something.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CardKind {
    Building,
    Skill(SkillEffect),
}

/// A card definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub name: String,
    pub kind: CardKind,
    /// Stamina spent when the card is played.
    pub cost: u32,
    pub element: Element,
    pub description: String,
}

impl Card {
    /// Build a card whose element follows the legacy naming rule.
    pub fn named(id: u32, name: &str, kind: CardKind, cost: u32, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind,
            cost,
            element: Element::from_card_name(name),
            description: description.to_string(),
        }
    }

    pub fn is_building(&self) -> bool {
        matches!(self.kind, CardKind::Building)
    }

    pub fn skill_effect(&self) -> Option<SkillEffect> {
        match self.kind {
            CardKind::Skill(effect) => Some(effect),
            CardKind::Building => None,
        }
    }
}

/// Id of the Flame Tower card.
pub const FLAME_TOWER: u32 = 1;
/// Id of the Frost Tower card.
pub const FROST_TOWER: u32 = 2;
/// Id of the Fireball card.
pub const FIREBALL: u32 = 3;
/// Id of the Base Repair card.
pub const BASE_REPAIR: u32 = 4;

/// The built-in card library.
pub fn card_library() -> Vec<Card> {
    vec![
        Card::named(
            FLAME_TOWER,
            "Flame Tower",
            CardKind::Building,
            3,
            "Build a basic fire tower",
        ),
        Card::named(
            FROST_TOWER,
            "Frost Tower",
            CardKind::Building,
            4,
            "Build a frost tower",
        ),
        Card::named(
            FIREBALL,
            "Fireball",
            CardKind::Skill(SkillEffect::AreaDamage {
                radius: FIREBALL_RADIUS,
                damage: FIREBALL_DAMAGE,
            }),
            5,
            "Deal damage to a target area",
        ),
        Card::named(
            BASE_REPAIR,
            "Base Repair",
            CardKind::Skill(SkillEffect::RepairObjective {
                amount: REPAIR_AMOUNT,
            }),
            2,
            "Restore a little objective health",
        ),
    ]
}

/// Look up a built-in card by id.
pub fn find_card(id: u32) -> Option<Card> {
    card_library().into_iter().find(|c| c.id == id)
}
