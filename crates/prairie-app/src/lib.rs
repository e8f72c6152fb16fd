//! Prairie host application.
//!
//! Wires the simulation engine to concrete collaborators (assets, audio,
//! rendering and persistence), runs it on a fixed-pace loop thread and
//! drives it from a scripted autopilot when no player is attached.

pub mod autopilot;
pub mod collaborators;
pub mod game_loop;
pub mod state;

pub use prairie_core as core;
