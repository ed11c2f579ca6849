//! Simulation engine for Elemental Guardians.
//!
//! Owns the hecs ECS world, runs systems once per clock-driven tick,
//! and produces GameStateSnapshots for the renderer.

pub mod board;
pub mod driver;
pub mod economy;
pub mod engine;
pub mod roster;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use guardian_core as core;

#[cfg(test)]
mod tests;
