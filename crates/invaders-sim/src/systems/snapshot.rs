//! Snapshot system: queries the world and builds a complete SceneSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use invaders_core::behaviour::ScriptedBehaviour;
use invaders_core::components::{Name, Role, SpawnOrder};
use invaders_core::events::GameEvent;
use invaders_core::state::*;
use invaders_core::types::{SimTime, Transform};

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    sim: &SimulationState,
    time: &SimTime,
    paused: bool,
    events: Vec<GameEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        phase: sim.phase,
        paused,
        score: sim.score,
        player: build_player(world),
        bolt: build_bolt(world, sim),
        enemies: build_enemies(world),
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Role, &Transform)>()
        .iter()
        .find(|(_, (role, _))| **role == Role::Player)
        .map(|(_, (_, transform))| PlayerView {
            position: transform.position,
            facing_deg: transform.rotation.z,
        })
}

fn build_bolt(world: &World, sim: &SimulationState) -> Option<BoltView> {
    world
        .query::<(&Transform, &ScriptedBehaviour)>()
        .iter()
        .find_map(|(_, (transform, behaviour))| match behaviour {
            ScriptedBehaviour::Bolt(bolt) => Some(BoltView {
                position: transform.position,
                phase: invaders_scripts::bolt::phase(sim),
                cooldown: bolt.cooldown,
            }),
            _ => None,
        })
}

/// Live patrolling enemies in spawn order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<(SpawnOrder, EnemyView)> = world
        .query::<(&SpawnOrder, &Name, &Transform, &ScriptedBehaviour)>()
        .iter()
        .filter_map(|(_, (order, name, transform, behaviour))| match behaviour {
            ScriptedBehaviour::PatrolEnemy(enemy) => Some((
                *order,
                EnemyView {
                    name: name.0.clone(),
                    kind: enemy.kind,
                    position: transform.position,
                    moving_left: enemy.moving_left,
                },
            )),
            _ => None,
        })
        .collect();
    enemies.sort_by_key(|(order, _)| *order);
    enemies.into_iter().map(|(_, view)| view).collect()
}
