//! Script system: runs every scripted behaviour once per frame.
//!
//! Behaviours run one at a time in spawn order, each with exclusive access
//! to its own transform and the shared simulation state. Removal requests
//! are buffered for the cleanup system.

use hecs::{Entity, World};

use invaders_core::behaviour::ScriptedBehaviour;
use invaders_core::components::SpawnOrder;
use invaders_core::events::GameEvent;
use invaders_core::state::SimulationState;
use invaders_core::types::Transform;

use invaders_scripts::input::InputProbe;
use invaders_scripts::{ScriptContext, ScriptOutcome};

/// Run all scripted behaviours for one frame of `delta_time` seconds.
pub fn run(
    world: &mut World,
    sim: &mut SimulationState,
    input: &dyn InputProbe,
    delta_time: f32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut order: Vec<(SpawnOrder, Entity)> = world
        .query::<(&SpawnOrder, &ScriptedBehaviour)>()
        .iter()
        .map(|(entity, (spawn_order, _))| (*spawn_order, entity))
        .collect();
    order.sort_unstable();

    for (_, entity) in order {
        let Ok((transform, behaviour)) =
            world.query_one_mut::<(&mut Transform, &mut ScriptedBehaviour)>(entity)
        else {
            continue;
        };

        let mut ctx = ScriptContext {
            transform,
            sim: &mut *sim,
            input,
            events: &mut *events,
        };
        if invaders_scripts::update(behaviour, delta_time, &mut ctx) == ScriptOutcome::Remove {
            despawn_buffer.push(entity);
        }
    }
}
