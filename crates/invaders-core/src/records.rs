//! Persisted forms of behaviours and entities.
//!
//! Every behaviour field is optional on the way in. Absent fields fall back
//! to the documented defaults in `from_record`, never silently to zero.

use glam::{DVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::behaviour::*;
use crate::components::*;
use crate::constants::PERSISTED_SHIFT_MULTIPLIER_DEFAULT;
use crate::enums::PatrolKind;
use crate::types::Transform;

/// Saved controller tuning. Shared shape for the player and both enemies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mouse_sensitivity: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_speed: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_mult: Option<f32>,
}

/// The bolt has no saved tuning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoltRecord {}

/// Saved behaviour, tagged with its script type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BehaviourRecord {
    PlayerController(ControlsRecord),
    EnemyScript(ControlsRecord),
    TopEnemyScript(ControlsRecord),
    Bolt(BoltRecord),
}

impl ScriptedBehaviour {
    /// Persisted form of the editable fields.
    pub fn to_record(&self) -> BehaviourRecord {
        match self {
            Self::PlayerController(player) => BehaviourRecord::PlayerController(ControlsRecord {
                mouse_sensitivity: Some(player.mouse_sensitivity),
                move_speed: Some(player.move_speeds),
                shift_mult: Some(player.shift_multiplier),
            }),
            Self::PatrolEnemy(enemy) => {
                let record = ControlsRecord {
                    mouse_sensitivity: Some(enemy.vestigial.mouse_sensitivity),
                    move_speed: Some(enemy.vestigial.move_speeds),
                    shift_mult: Some(enemy.vestigial.shift_multiplier),
                };
                match enemy.kind {
                    PatrolKind::Standard => BehaviourRecord::EnemyScript(record),
                    PatrolKind::Top => BehaviourRecord::TopEnemyScript(record),
                }
            }
            Self::Bolt(_) => BehaviourRecord::Bolt(BoltRecord {}),
        }
    }

    /// Rebuild a behaviour from its persisted form.
    ///
    /// Missing `mouse_sensitivity` and `move_speed` take constructor
    /// defaults; a missing `shift_mult` takes
    /// [`PERSISTED_SHIFT_MULTIPLIER_DEFAULT`]. Runtime state (timers,
    /// direction, sampled mouse position) always starts fresh.
    pub fn from_record(record: &BehaviourRecord) -> Self {
        match record {
            BehaviourRecord::PlayerController(controls) => {
                let defaults = PlayerController::default();
                Self::PlayerController(PlayerController {
                    mouse_sensitivity: controls
                        .mouse_sensitivity
                        .unwrap_or(defaults.mouse_sensitivity),
                    move_speeds: controls.move_speed.unwrap_or(defaults.move_speeds),
                    shift_multiplier: controls
                        .shift_mult
                        .unwrap_or(PERSISTED_SHIFT_MULTIPLIER_DEFAULT),
                    prev_mouse_pos: DVec2::ZERO,
                })
            }
            BehaviourRecord::EnemyScript(controls) => {
                Self::PatrolEnemy(patrol_from_record(PatrolKind::Standard, controls))
            }
            BehaviourRecord::TopEnemyScript(controls) => {
                Self::PatrolEnemy(patrol_from_record(PatrolKind::Top, controls))
            }
            BehaviourRecord::Bolt(_) => Self::Bolt(Bolt::default()),
        }
    }
}

fn patrol_from_record(kind: PatrolKind, controls: &ControlsRecord) -> PatrolEnemy {
    let defaults = VestigialControls::default();
    let mut enemy = PatrolEnemy::new(kind);
    enemy.vestigial = VestigialControls {
        mouse_sensitivity: controls
            .mouse_sensitivity
            .unwrap_or(defaults.mouse_sensitivity),
        move_speeds: controls.move_speed.unwrap_or(defaults.move_speeds),
        shift_multiplier: controls
            .shift_mult
            .unwrap_or(PERSISTED_SHIFT_MULTIPLIER_DEFAULT),
    };
    enemy
}

/// One entity in a saved scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub role: Role,
    pub transform: Transform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behaviour: Option<BehaviourRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<LightComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rigid_body: Option<RigidBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraComponent>,
}

/// Scene-wide render settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentRecord {
    pub skybox_texture: Option<String>,
    pub skybox_shader: Option<String>,
    /// Skybox rotation in Euler degrees.
    pub skybox_rotation: Vec3,
    pub color_lut: Option<String>,
}

/// A complete saved scene, entities in spawn order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: u32,
    #[serde(default)]
    pub environment: EnvironmentRecord,
    pub entities: Vec<EntityRecord>,
}
