//! Host commands sent to the scene engine.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    /// Stop running behaviours; frames still produce snapshots.
    Pause,
    /// Resume running behaviours.
    Resume,
    /// Tear the world down and rebuild the default scene.
    Restart,
}
