//! Player commands sent from the card UI to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{Cell, Position};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Play a building card onto a board cell.
    PlaceDefender { card_id: u32, cell: Cell },
    /// Play a skill card, optionally aimed at a board point.
    UseSkill {
        card_id: u32,
        #[serde(default)]
        target: Option<Position>,
    },
}
