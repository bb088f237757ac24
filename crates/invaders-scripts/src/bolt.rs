//! The bolt: one reusable projectile slot tied to the shared active flag.

use glam::Vec3;
use log::debug;

use invaders_core::behaviour::Bolt;
use invaders_core::constants::*;
use invaders_core::enums::{BoltPhase, Key};
use invaders_core::events::GameEvent;
use invaders_core::state::SimulationState;

use crate::input::InputProbe;
use crate::{ScriptContext, ScriptOutcome};

/// Current phase, derived from the shared active flag.
pub fn phase(sim: &SimulationState) -> BoltPhase {
    if sim.projectile_active {
        BoltPhase::Fired
    } else {
        BoltPhase::Idle
    }
}

/// Fire if the fire key is held, the cooldown has run out and no bolt is
/// in flight. Returns whether a bolt was fired.
pub fn try_fire(bolt: &mut Bolt, sim: &mut SimulationState, input: &dyn InputProbe) -> bool {
    if !input.is_key_down(Key::Space) || bolt.cooldown > 0.0 || sim.projectile_active {
        return false;
    }
    sim.projectile_active = true;
    bolt.cooldown = BOLT_COOLDOWN_SECS;
    true
}

/// Run one frame of the bolt.
pub fn update(bolt: &mut Bolt, delta_time: f32, ctx: &mut ScriptContext<'_>) -> ScriptOutcome {
    // Publish before anything else so enemies test against this frame's start.
    ctx.sim.projectile_position = ctx.transform.position;

    if try_fire(bolt, ctx.sim, ctx.input) {
        debug!("bolt fired from {:?}", ctx.transform.position);
        ctx.events.push(GameEvent::BoltFired {
            origin: ctx.transform.position,
        });
    }

    match phase(ctx.sim) {
        BoltPhase::Idle => {
            let player = ctx.sim.player_position;
            ctx.transform.scale = Vec3::splat(BOLT_IDLE_SCALE);
            ctx.transform.position = Vec3::new(player.x, player.y, BOLT_IDLE_Z);
            bolt.cooldown = 0.0;
        }
        BoltPhase::Fired => {
            ctx.transform.translate(Vec3::Y * BOLT_SPEED * delta_time);
            ctx.transform.scale = Vec3::splat(BOLT_FIRED_SCALE);
        }
    }

    if bolt.cooldown > 0.0 {
        bolt.cooldown -= delta_time;
    } else if ctx.sim.projectile_active {
        // Lifetime over, hit or not.
        ctx.sim.projectile_active = false;
        ctx.events.push(GameEvent::BoltExpired);
    }

    ScriptOutcome::Keep
}
