//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Coarse game phase shared by every behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// An enemy reached the bottom of the arena.
    GameOver,
}

/// Keyboard keys the behaviours poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    LeftShift,
    Space,
}

/// Mouse buttons the behaviours poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Per-frame state of a mouse button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    /// Not held.
    #[default]
    Up,
    /// Went down this frame.
    Pressed,
    /// Held since an earlier frame.
    Down,
    /// Went up this frame.
    Released,
}

/// Which patrol configuration an enemy runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatrolKind {
    /// Rank-and-file enemy: slow sweep with a steady descent.
    #[default]
    Standard,
    /// Mothership across the top of the arena: fast, no descent.
    Top,
}

/// What a patrolling enemy does once it crosses the loss line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossPolicy {
    /// Set the shared game phase to `GameOver`.
    SignalGameOver,
    /// Only log; shared state is left alone.
    LogOnly,
}

/// Simulation state of the single reusable projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltPhase {
    /// Parked under the player, shrunk to nothing.
    #[default]
    Idle,
    /// Travelling up the arena.
    Fired,
}

/// Rigid body simulation mode handed to the physics collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RigidBodyKind {
    #[default]
    Static,
    Kinematic,
    Dynamic,
}

/// Texture sampling filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureFilter {
    #[default]
    Linear,
    Nearest,
}

/// Texture addressing mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    #[default]
    Repeat,
    ClampToEdge,
}
