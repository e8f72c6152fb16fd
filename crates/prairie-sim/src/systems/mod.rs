//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only) plus whatever engine state they need. They do not own state.

pub mod bullets;
pub mod cleanup;
pub mod collision;
pub mod monsters;
pub mod player;
pub mod powerups;
pub mod shop;
pub mod snapshot;
pub mod spawning;
