//! Scripted input for headless play.
//!
//! Sweeps the player back and forth across the spawn point while holding
//! the fire key, so a `play` run exercises movement, firing and hits
//! without a window.

use invaders_core::constants::FRAME_RATE;
use invaders_core::enums::Key;
use invaders_scripts::input::InputState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Frames spent strafing in one direction before turning around.
    pub strafe_frames: u64,
    /// Hold the fire key throughout.
    pub fire: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            strafe_frames: 2 * FRAME_RATE as u64,
            fire: true,
        }
    }
}

impl Autopilot {
    /// Set the held keys for `frame`. The first leg is half length so the
    /// sweep is centred on the starting position.
    pub fn drive(&self, frame: u64, input: &mut InputState) {
        let period = self.strafe_frames.max(1);
        let leg = ((frame + period / 2) / period) % 2;
        let (hold, drop) = if leg == 0 {
            (Key::D, Key::A)
        } else {
            (Key::A, Key::D)
        };
        input.release(drop);
        input.press(hold);

        if self.fire {
            input.press(Key::Space);
        } else {
            input.release(Key::Space);
        }
    }
}
