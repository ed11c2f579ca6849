//! Rejection reasons for player actions.
//!
//! A rejected action has no effect on the simulation. Rejections are expected
//! outcomes reported back to the caller, not faults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum ActionRejected {
    #[error("not enough stamina: need {cost}, have {available:.2}")]
    InsufficientResource { cost: u32, available: f64 },
    #[error("cell {cell} already holds a defender")]
    CellOccupied { cell: Cell },
    #[error("cell {cell} is outside the board")]
    CellOutOfBounds { cell: Cell },
    #[error("card cannot be placed as a building")]
    NotABuilding,
    #[error("card is not a skill")]
    NotASkill,
    #[error("unknown card id {card_id}")]
    UnknownCard { card_id: u32 },
    #[error("the run is over")]
    GameOver,
}
