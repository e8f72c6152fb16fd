//! Monster behavior for the Prairie simulation.
//!
//! Pure per-monster logic: kind profiles, ground and flight steering, the
//! Spikey lifecycle, the Dracula and Outlaw phase machines, the damage
//! contract and the loot table. No ECS dependency; every function works on
//! a plain [`Monster`](prairie_core::components::Monster) plus a
//! [`MonsterContext`](behavior::MonsterContext).

pub mod behavior;
pub mod dracula;
pub mod gunnery;
pub mod loot;
pub mod outlaw;
pub mod profiles;
pub mod spikey;
pub mod steering;

pub use prairie_core as core;

#[cfg(test)]
mod tests;
