//! Simulation engine for Prairie.
//!
//! Owns the hecs ECS world, runs the phase machine and all systems once per
//! frame, and produces `FrameSnapshot`s for the host.

pub mod engine;
pub mod player;
pub mod scheduler;
pub mod session;
pub mod shop;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use prairie_core as core;
