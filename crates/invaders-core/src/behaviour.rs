//! Scripted behaviour data attached to entities.
//!
//! These are plain data structs. The per-frame logic lives in
//! `invaders-scripts`; persistence goes through [`crate::records`].

use glam::{DVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::PatrolKind;

/// WASD movement for the player ship.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerController {
    pub mouse_sensitivity: Vec2,
    /// `x` scales forward/back (W/S), `y` scales strafing (A/D).
    pub move_speeds: Vec3,
    pub shift_multiplier: f32,
    /// Mouse position sampled on the previous frame. Not persisted.
    pub prev_mouse_pos: DVec2,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            mouse_sensitivity: Vec2::from(PLAYER_MOUSE_SENSITIVITY),
            move_speeds: Vec3::splat(PLAYER_MOVE_SPEED),
            shift_multiplier: PLAYER_SHIFT_MULTIPLIER,
            prev_mouse_pos: DVec2::ZERO,
        }
    }
}

/// An enemy that sweeps sideways, reversing on a timer.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolEnemy {
    pub kind: PatrolKind,
    pub moving_left: bool,
    /// Seconds since the last direction flip.
    pub timer: f32,
    /// Whether the loss line has already been reported for this enemy.
    pub loss_reported: bool,
    /// Carried through save files only; the patrol logic ignores these.
    pub vestigial: VestigialControls,
}

impl PatrolEnemy {
    pub fn new(kind: PatrolKind) -> Self {
        Self {
            kind,
            moving_left: true,
            timer: 0.0,
            loss_reported: false,
            vestigial: VestigialControls::default(),
        }
    }
}

/// Controller tuning fields enemy records have always carried.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VestigialControls {
    pub mouse_sensitivity: Vec2,
    pub move_speeds: Vec3,
    pub shift_multiplier: f32,
}

impl Default for VestigialControls {
    fn default() -> Self {
        Self {
            mouse_sensitivity: Vec2::from(PLAYER_MOUSE_SENSITIVITY),
            move_speeds: Vec3::splat(ENEMY_RECORD_MOVE_SPEED),
            shift_multiplier: PLAYER_SHIFT_MULTIPLIER,
        }
    }
}

/// The single reusable projectile slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bolt {
    /// Seconds until the live bolt expires. Held at 0 while idle.
    pub cooldown: f32,
}

/// The closed set of per-entity scripts.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedBehaviour {
    PlayerController(PlayerController),
    PatrolEnemy(PatrolEnemy),
    Bolt(Bolt),
}

impl ScriptedBehaviour {
    pub fn player() -> Self {
        Self::PlayerController(PlayerController::default())
    }

    pub fn enemy() -> Self {
        Self::PatrolEnemy(PatrolEnemy::new(PatrolKind::Standard))
    }

    pub fn top_enemy() -> Self {
        Self::PatrolEnemy(PatrolEnemy::new(PatrolKind::Top))
    }

    pub fn bolt() -> Self {
        Self::Bolt(Bolt::default())
    }

    /// Type name used in save files.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::PlayerController(_) => "PlayerController",
            Self::PatrolEnemy(enemy) => match enemy.kind {
                PatrolKind::Standard => "EnemyScript",
                PatrolKind::Top => "TopEnemyScript",
            },
            Self::Bolt(_) => "Bolt",
        }
    }
}
