//! Moving scenes between saved records and the hecs world.
//!
//! Spawns entity records with their component bundles and collects the
//! live world back into records for saving.

use hecs::{Entity, EntityBuilder, World};

use invaders_core::behaviour::ScriptedBehaviour;
use invaders_core::components::*;
use invaders_core::constants::SCENE_FILE_VERSION;
use invaders_core::records::{EntityRecord, EnvironmentRecord, SceneFile};
use invaders_core::types::Transform;

/// Spawn every record of `scene` in file order.
pub fn spawn_scene(world: &mut World, scene: &SceneFile, next_order: &mut u32) -> Vec<Entity> {
    scene
        .entities
        .iter()
        .map(|record| spawn_record(world, record, next_order))
        .collect()
}

/// Spawn one entity from its record. Behaviours restore with their
/// documented defaults for absent fields.
pub fn spawn_record(world: &mut World, record: &EntityRecord, next_order: &mut u32) -> Entity {
    let mut builder = EntityBuilder::new();
    builder
        .add(Name(record.name.clone()))
        .add(SpawnOrder(*next_order))
        .add(record.role)
        .add(record.transform);
    *next_order += 1;

    if let Some(parent) = &record.parent {
        builder.add(Parent(parent.clone()));
    }
    if let Some(behaviour) = &record.behaviour {
        builder.add(ScriptedBehaviour::from_record(behaviour));
    }
    if let Some(render) = &record.render {
        builder.add(render.clone());
    }
    if let Some(light) = record.light {
        builder.add(light);
    }
    if let Some(body) = &record.rigid_body {
        builder.add(body.clone());
    }
    if let Some(camera) = record.camera {
        builder.add(camera);
    }

    world.spawn(builder.build())
}

/// Collect the live world into a scene file, in spawn order.
pub fn extract_scene(world: &World, environment: &EnvironmentRecord) -> SceneFile {
    let mut ordered: Vec<(SpawnOrder, EntityRecord)> = world
        .query::<(
            &SpawnOrder,
            &Name,
            &Role,
            &Transform,
            Option<&Parent>,
            Option<&ScriptedBehaviour>,
            Option<&RenderComponent>,
            Option<&LightComponent>,
            Option<&RigidBody>,
            Option<&CameraComponent>,
        )>()
        .iter()
        .map(
            |(_, (order, name, role, transform, parent, behaviour, render, light, body, camera))| {
                let record = EntityRecord {
                    name: name.0.clone(),
                    role: *role,
                    transform: *transform,
                    parent: parent.map(|p| p.0.clone()),
                    behaviour: behaviour.map(ScriptedBehaviour::to_record),
                    render: render.cloned(),
                    light: light.copied(),
                    rigid_body: body.cloned(),
                    camera: camera.copied(),
                };
                (*order, record)
            },
        )
        .collect();
    ordered.sort_by_key(|(order, _)| *order);

    SceneFile {
        version: SCENE_FILE_VERSION,
        environment: environment.clone(),
        entities: ordered.into_iter().map(|(_, record)| record).collect(),
    }
}
