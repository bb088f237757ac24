//! Player controller: WASD movement and facing.

use glam::Vec3;
use log::debug;

use invaders_core::behaviour::PlayerController;
use invaders_core::constants::*;
use invaders_core::enums::{ButtonState, Key, MouseButton};

use crate::{ScriptContext, ScriptOutcome};

/// Move the player from held keys and publish its position.
///
/// Keys are checked in the order W, S, A, D; each sets the facing, so the
/// last held key in that order wins. Position is not clamped.
pub fn update(
    player: &mut PlayerController,
    delta_time: f32,
    ctx: &mut ScriptContext<'_>,
) -> ScriptOutcome {
    if ctx.input.is_focused() {
        if ctx.input.mouse_button_state(MouseButton::Left) == ButtonState::Pressed {
            player.prev_mouse_pos = ctx.input.mouse_position();
            debug!("player mouse press at {:?}", player.prev_mouse_pos);
        }

        let (input, facing) = sample_movement(player, ctx);
        if let Some(facing_deg) = facing {
            ctx.transform.rotation = Vec3::new(0.0, 0.0, facing_deg);
        }
        ctx.transform.translate(input * delta_time);
    }

    player.prev_mouse_pos = ctx.input.mouse_position();
    ctx.sim.player_position = ctx.transform.position.truncate();

    ScriptOutcome::Keep
}

/// Build the unscaled movement vector and the facing of the last key held.
fn sample_movement(player: &PlayerController, ctx: &ScriptContext<'_>) -> (Vec3, Option<f32>) {
    let speeds = player.move_speeds;
    let mut input = Vec3::ZERO;
    let mut facing = None;

    if ctx.input.is_key_down(Key::W) {
        input.y += speeds.x;
        facing = Some(FACING_UP_DEG);
    }
    if ctx.input.is_key_down(Key::S) {
        input.y -= speeds.x;
        facing = Some(FACING_DOWN_DEG);
    }
    if ctx.input.is_key_down(Key::A) {
        input.x -= speeds.y;
        facing = Some(FACING_LEFT_DEG);
    }
    if ctx.input.is_key_down(Key::D) {
        input.x += speeds.y;
        facing = Some(FACING_RIGHT_DEG);
    }
    if ctx.input.is_key_down(Key::LeftShift) {
        input *= player.shift_multiplier;
    }

    (input, facing)
}
