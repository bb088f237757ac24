//! Core types and definitions for Bolt Invaders.
//!
//! This crate defines the vocabulary shared across all other crates:
//! transforms, components, behaviour data, persisted records, the shared
//! simulation state, events, snapshots, errors and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod behaviour;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod records;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
