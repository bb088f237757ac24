//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in scripts and systems, not components.
//! `Transform` and `ScriptedBehaviour` are components too; they live in
//! `types.rs` and `behaviour.rs`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::RigidBodyKind;

/// Display name of an entity. Not unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Creation order. Behaviours update in ascending spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u32);

/// Gameplay role of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Projectile,
    Enemy,
    Wall,
    Camera,
    Scenery,
}

/// Names the parent entity in the scene hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parent(pub String);

/// Mesh + material pair handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderComponent {
    pub mesh: String,
    pub material: String,
}

/// Point light attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightComponent {
    pub color: Vec3,
    pub radius: f32,
    pub intensity: f32,
}

/// Collision shape handed to the physics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Collider {
    Box { half_extents: Vec3, offset: Vec3 },
}

/// Physics body handed to the physics collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub kind: RigidBodyKind,
    pub colliders: Vec<Collider>,
    #[serde(default)]
    pub linear_damping: f32,
}

/// Scene camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraComponent {
    pub fov_deg: f32,
    pub is_main: bool,
}
