//! Events emitted by behaviours for logging and UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::PatrolKind;

/// Something notable that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The bolt left the player.
    BoltFired { origin: Vec3 },
    /// The bolt's lifetime ran out and it returned to the player.
    BoltExpired,
    /// An enemy was hit and removed; `score` is the new total.
    EnemyDestroyed { kind: PatrolKind, position: Vec3, score: u32 },
    /// An enemy crossed the loss line.
    LossLineCrossed { kind: PatrolKind, position: Vec3 },
    /// The shared phase switched to game over.
    GameOver { score: u32 },
}
