//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions taking `&mut World` plus whatever slice of
//! engine state they touch. They do not own state. The engine calls them in
//! a fixed order: waves, movement, targeting, projectiles.

pub mod damage;
pub mod movement;
pub mod projectiles;
pub mod skills;
pub mod snapshot;
pub mod targeting;
pub mod wave_spawner;
