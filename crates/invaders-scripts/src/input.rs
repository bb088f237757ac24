//! Input probe contract and an in-memory implementation.
//!
//! The window/OS poller is an external collaborator; scripts only see
//! [`InputProbe`]. [`InputState`] is driven by the host (game loop
//! commands, autopilot, tests).

use std::collections::{HashMap, HashSet};

use glam::DVec2;

use invaders_core::enums::{ButtonState, Key, MouseButton};

/// Read-only view of the current input state.
pub trait InputProbe {
    /// Whether the application window has input focus.
    fn is_focused(&self) -> bool;
    /// Whether `key` is currently held.
    fn is_key_down(&self, key: Key) -> bool;
    fn mouse_button_state(&self, button: MouseButton) -> ButtonState;
    /// Cursor position in window pixels.
    fn mouse_position(&self) -> DVec2;
}

/// Held keys, mouse buttons and cursor, updated by the host.
#[derive(Debug, Clone)]
pub struct InputState {
    focused: bool,
    held: HashSet<Key>,
    buttons: HashMap<MouseButton, ButtonState>,
    mouse_position: DVec2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            focused: true,
            held: HashSet::new(),
            buttons: HashMap::new(),
            mouse_position: DVec2::ZERO,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn set_mouse_position(&mut self, position: DVec2) {
        self.mouse_position = position;
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons.insert(button, ButtonState::Pressed);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.insert(button, ButtonState::Released);
    }

    /// Age edge states: `Pressed` becomes `Down`, `Released` becomes `Up`.
    /// Call once after every frame.
    pub fn end_frame(&mut self) {
        for state in self.buttons.values_mut() {
            *state = match *state {
                ButtonState::Pressed => ButtonState::Down,
                ButtonState::Released => ButtonState::Up,
                other => other,
            };
        }
    }
}

impl InputProbe for InputState {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn mouse_button_state(&self, button: MouseButton) -> ButtonState {
        self.buttons.get(&button).copied().unwrap_or_default()
    }

    fn mouse_position(&self) -> DVec2 {
        self.mouse_position
    }
}
