//! Core types and definitions for the Elemental Guardians simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, cards, commands, events, rejections, snapshots and constants.
//! It has no dependency on the ECS or any runtime.

pub mod cards;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
