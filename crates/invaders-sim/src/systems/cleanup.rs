//! Cleanup system: applies removals requested during the frame.

use hecs::{Entity, World};
use log::{debug, warn};

use invaders_core::components::Name;
use invaders_core::error::SceneError;

/// Remove one entity now. A missing entity is reported, not fatal.
pub fn remove_entity(world: &mut World, entity: Entity) -> Result<(), SceneError> {
    let name = world
        .get::<&Name>(entity)
        .map(|name| name.0.clone())
        .unwrap_or_else(|_| format!("{entity:?}"));
    world
        .despawn(entity)
        .map_err(|_| SceneError::EntityNotFound(name.clone()))?;
    debug!("removed entity {name}");
    Ok(())
}

/// Despawn every entity queued during the frame.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        if let Err(err) = remove_entity(world, entity) {
            warn!("removal skipped: {err}");
        }
    }
}
