//! Application state shared between the host thread and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use glam::DVec2;

use invaders_core::commands::SceneCommand;
use invaders_core::enums::{Key, MouseButton};
use invaders_core::state::SceneSnapshot;
use invaders_scripts::input::InputState;

/// A change in the host's input devices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    KeyDown(Key),
    KeyUp(Key),
    ButtonDown(MouseButton),
    ButtonUp(MouseButton),
    MouseMove(DVec2),
    /// Window focus gained or lost. Losing focus releases every key.
    Focus(bool),
}

impl InputCommand {
    /// Fold this change into the polled input state.
    pub fn apply(self, input: &mut InputState) {
        match self {
            InputCommand::KeyDown(key) => input.press(key),
            InputCommand::KeyUp(key) => input.release(key),
            InputCommand::ButtonDown(button) => input.press_button(button),
            InputCommand::ButtonUp(button) => input.release_button(button),
            InputCommand::MouseMove(position) => input.set_mouse_position(position),
            InputCommand::Focus(focused) => {
                if !focused {
                    input.release_all();
                }
                input.set_focused(focused);
            }
        }
    }
}

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    Input(InputCommand),
    /// A command to forward to the scene engine.
    Scene(SceneCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for state that may not exist before the loop starts
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each frame.
    pub latest_snapshot: Arc<Mutex<Option<SceneSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Arc<Mutex<bool>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Arc::new(Mutex::new(false)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a command to the game loop. Returns false if no loop is
    /// listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(lock) = self.command_tx.lock() else {
            return false;
        };
        match lock.as_ref() {
            Some(tx) => tx.send(command).is_ok(),
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.lock().map(|running| *running).unwrap_or(false)
    }

    /// Clone of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<SceneSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::enums::ButtonState;
    use invaders_scripts::input::InputProbe;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!state.is_running());
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_send_with_channel() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(GameLoopCommand::Scene(SceneCommand::Pause)));
        assert!(matches!(
            rx.try_recv(),
            Ok(GameLoopCommand::Scene(SceneCommand::Pause))
        ));
    }

    #[test]
    fn test_input_commands_apply() {
        let mut input = InputState::new();
        InputCommand::KeyDown(Key::W).apply(&mut input);
        InputCommand::ButtonDown(MouseButton::Left).apply(&mut input);
        InputCommand::MouseMove(DVec2::new(3.0, 4.0)).apply(&mut input);

        assert!(input.is_key_down(Key::W));
        assert_eq!(input.mouse_button_state(MouseButton::Left), ButtonState::Pressed);
        assert_eq!(input.mouse_position(), DVec2::new(3.0, 4.0));

        InputCommand::KeyUp(Key::W).apply(&mut input);
        assert!(!input.is_key_down(Key::W));
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut input = InputState::new();
        InputCommand::KeyDown(Key::Space).apply(&mut input);
        InputCommand::Focus(false).apply(&mut input);
        assert!(!input.is_focused());
        assert!(!input.is_key_down(Key::Space));
    }
}
