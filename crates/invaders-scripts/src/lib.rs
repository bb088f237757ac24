//! Scripted behaviours for Bolt Invaders.
//!
//! Per-frame state machines for the player, the patrolling enemies and the
//! bolt, plus the input probe they poll. No ECS dependency: each script
//! operates on its own data, its entity's transform and the shared
//! simulation state handed in through [`ScriptContext`].

pub mod bolt;
pub mod input;
pub mod patrol;
pub mod player;
pub mod profiles;

pub use invaders_core as core;

use invaders_core::behaviour::ScriptedBehaviour;
use invaders_core::events::GameEvent;
use invaders_core::state::SimulationState;
use invaders_core::types::Transform;

use crate::input::InputProbe;

/// Everything a script may touch during its update.
pub struct ScriptContext<'a> {
    /// The owning entity's transform.
    pub transform: &'a mut Transform,
    pub sim: &'a mut SimulationState,
    pub input: &'a dyn InputProbe,
    pub events: &'a mut Vec<GameEvent>,
}

/// What the host should do with the entity after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    Keep,
    /// Remove the owning entity at the end of the frame.
    Remove,
}

/// Run one frame of `behaviour`.
pub fn update(
    behaviour: &mut ScriptedBehaviour,
    delta_time: f32,
    ctx: &mut ScriptContext<'_>,
) -> ScriptOutcome {
    match behaviour {
        ScriptedBehaviour::PlayerController(player) => player::update(player, delta_time, ctx),
        ScriptedBehaviour::PatrolEnemy(enemy) => patrol::update(enemy, delta_time, ctx),
        ScriptedBehaviour::Bolt(bolt) => bolt::update(bolt, delta_time, ctx),
    }
}

#[cfg(test)]
mod tests;
