//! Core types and definitions for the Prairie simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, components, input actions, sound cues, the tile map, the
//! collaborator traits, frame snapshots, tuning configuration and constants.
//! It has no dependency on a renderer, audio backend or ECS.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod interfaces;
pub mod map;
pub mod state;
pub mod types;

pub use glam::Vec2;

#[cfg(test)]
mod tests;
