//! Scene engine for Bolt Invaders.
//!
//! Owns the hecs ECS world, runs scripted behaviours each frame,
//! builds and persists the default scene, and produces SceneSnapshots.

pub mod assets;
pub mod engine;
pub mod persistence;
pub mod scene_layer;
pub mod systems;
pub mod world_setup;

pub use invaders_core as core;
pub use engine::SceneEngine;
