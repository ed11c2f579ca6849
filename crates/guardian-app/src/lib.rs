//! Elemental Guardians runner.
//!
//! Hosts the simulation on its own thread, feeds it player commands over a
//! channel and exposes the latest snapshot for polling.

pub mod cli;
pub mod game_loop;
pub mod state;

pub use guardian_core as core;
