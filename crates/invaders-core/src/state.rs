//! Shared simulation state and the per-frame scene snapshot.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::{BoltPhase, GamePhase, PatrolKind};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Cross-entity game status every behaviour may read and write.
///
/// Owned by the engine and lent to one behaviour at a time during a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Last published player x/y.
    pub player_position: Vec2,
    /// Last published bolt position, used for enemy hit tests.
    pub projectile_position: Vec3,
    /// Whether the single bolt is in flight.
    pub projectile_active: bool,
    pub score: u32,
    pub phase: GamePhase,
}

impl SimulationState {
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Complete visible state produced after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub paused: bool,
    pub score: u32,
    pub player: Option<PlayerView>,
    pub bolt: Option<BoltView>,
    pub enemies: Vec<EnemyView>,
    pub events: Vec<GameEvent>,
}

/// Player ship for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    /// Facing about z, degrees.
    pub facing_deg: f32,
}

/// Projectile for display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoltView {
    pub position: Vec3,
    pub phase: BoltPhase,
    pub cooldown: f32,
}

/// One live enemy for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub name: String,
    pub kind: PatrolKind,
    pub position: Vec3,
    pub moving_left: bool,
}
