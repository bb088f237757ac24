//! Scene engine, the core of the game.
//!
//! `SceneEngine` owns the hecs world and the shared simulation state,
//! processes host commands, runs all systems and produces
//! `SceneSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use hecs::{Entity, World};
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use invaders_core::commands::SceneCommand;
use invaders_core::enums::GamePhase;
use invaders_core::error::SceneError;
use invaders_core::events::GameEvent;
use invaders_core::records::{EnvironmentRecord, SceneFile};
use invaders_core::state::{SceneSnapshot, SimulationState};
use invaders_core::types::SimTime;

use invaders_scripts::input::InputProbe;

use crate::assets::AssetManifest;
use crate::scene_layer;
use crate::systems;
use crate::{persistence, world_setup};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for scene generation. Same seed = same scene.
    pub seed: u64,
    /// Multiplier on every frame's delta time (1.0 = normal).
    pub time_scale: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

impl SimConfig {
    /// Read a JSON config file. Absent fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let json = fs::read_to_string(path).map_err(|e| SceneError::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| SceneError::json(path, e))
    }
}

/// The scene engine. Owns the ECS world and all shared state.
pub struct SceneEngine {
    world: World,
    sim: SimulationState,
    time: SimTime,
    paused: bool,
    time_scale: f32,
    seed: u64,
    rng: ChaCha8Rng,
    next_spawn_order: u32,
    command_queue: VecDeque<SceneCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    environment: EnvironmentRecord,
    manifest: Option<AssetManifest>,
}

impl SceneEngine {
    /// Create an engine with an empty world.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            sim: SimulationState::default(),
            time: SimTime::default(),
            paused: false,
            time_scale: config.time_scale.max(0.0),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            environment: EnvironmentRecord::default(),
            manifest: None,
        }
    }

    /// Replace the world with the default demo scene.
    pub fn build_default_scene(&mut self) -> Result<(), SceneError> {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        let layout = scene_layer::build_default_scene(&mut self.rng);
        self.install_scene(&layout.scene, Some(layout.manifest))
    }

    /// Replace the world with a scene read from `path`.
    ///
    /// With a manifest the scene must only name declared assets. Without
    /// one the engine holds no manifest until the next build or load.
    pub fn load_scene(&mut self, path: &Path, manifest: Option<&Path>) -> Result<(), SceneError> {
        let scene = persistence::load_scene(path)?;
        let manifest = manifest.map(persistence::load_manifest).transpose()?;
        self.install_scene(&scene, manifest)
    }

    /// Replace the world with `scene`, validated against `manifest` if given.
    /// On error the current world is left untouched.
    pub fn install_scene(
        &mut self,
        scene: &SceneFile,
        manifest: Option<AssetManifest>,
    ) -> Result<(), SceneError> {
        if let Some(manifest) = &manifest {
            manifest.validate(scene)?;
        }
        self.manifest = manifest;
        self.install(scene);
        Ok(())
    }

    /// Write the live world to `path`.
    pub fn save_scene(&self, path: &Path) -> Result<(), SceneError> {
        persistence::save_scene(path, &self.scene_file())
    }

    /// Write the asset manifest of the current scene to `path`.
    pub fn save_manifest(&self, path: &Path) -> Result<(), SceneError> {
        let manifest = self.manifest.as_ref().ok_or(SceneError::NoManifest)?;
        persistence::save_manifest(path, manifest)
    }

    /// The live world as a saveable scene file.
    pub fn scene_file(&self) -> SceneFile {
        world_setup::extract_scene(&self.world, &self.environment)
    }

    /// Reset all state and spawn `scene`.
    fn install(&mut self, scene: &SceneFile) {
        self.world.clear();
        self.sim = SimulationState::default();
        self.time = SimTime::default();
        self.paused = false;
        self.next_spawn_order = 0;
        self.despawn_buffer.clear();
        self.events.clear();
        self.environment = scene.environment.clone();
        let spawned = world_setup::spawn_scene(&mut self.world, scene, &mut self.next_spawn_order);
        info!("scene installed with {} entities", spawned.len());
    }

    /// Queue a host command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one frame and return the resulting snapshot.
    ///
    /// Behaviours only run while unpaused and still `Playing`; after game
    /// over the world is frozen but snapshots keep coming.
    pub fn frame(&mut self, delta_time: f32, input: &dyn InputProbe) -> SceneSnapshot {
        self.process_commands();

        if !self.paused && self.sim.phase == GamePhase::Playing {
            let scaled = delta_time * self.time_scale;
            self.run_systems(scaled, input);
            self.time.advance(scaled);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.sim, &self.time, self.paused, events)
    }

    /// Remove an entity immediately. Reports entities that are already gone.
    pub fn remove_entity(&mut self, entity: Entity) -> Result<(), SceneError> {
        systems::cleanup::remove_entity(&mut self.world, entity)
    }

    /// Get the shared simulation state.
    pub fn sim(&self) -> &SimulationState {
        &self.sim
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.sim.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Manifest of the current scene, if it was built or loaded with one.
    pub fn manifest(&self) -> Option<&AssetManifest> {
        self.manifest.as_ref()
    }

    /// Mutable access to the shared state (for tests that stage a frame).
    #[cfg(test)]
    pub fn sim_mut(&mut self) -> &mut SimulationState {
        &mut self.sim
    }

    /// Mutable world access (for tests that stage a frame).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::Pause => self.paused = true,
            SceneCommand::Resume => self.paused = false,
            SceneCommand::Restart => {
                if let Err(err) = self.build_default_scene() {
                    warn!("restart failed: {err}");
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta_time: f32, input: &dyn InputProbe) {
        // 1. Scripted behaviours (player, bolt, enemies in spawn order)
        systems::scripts::run(
            &mut self.world,
            &mut self.sim,
            input,
            delta_time,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 2. Deferred removals
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
