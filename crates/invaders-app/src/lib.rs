//! Bolt Invaders command line application.
//!
//! This crate wires the scene engine to a fixed-rate game loop thread,
//! feeds it input over a command channel and provides the `invaders`
//! binary's subcommands.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod state;

pub use invaders_core as core;
