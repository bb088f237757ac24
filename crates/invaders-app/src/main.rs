use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use invaders_app::autopilot::Autopilot;
use invaders_app::game_loop::{shutdown_on_game_over, spawn_game_loop, LoopOptions};
use invaders_app::logging;
use invaders_app::state::AppState;
use invaders_sim::engine::SimConfig;
use invaders_sim::SceneEngine;

/// Bolt Invaders scene builder and headless runner
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the default scene and write it to disk
    BuildScene {
        /// Scene file to write
        #[arg(long, default_value = "scene.json")]
        out: PathBuf,
        /// Also write the asset manifest here
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// JSON file with simulation settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Seed for light placement, overrides the config file
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the game loop with the autopilot at the controls
    Play {
        /// Number of frames to run
        #[arg(long, default_value_t = 600)]
        frames: u64,
        /// Start from a saved scene instead of the default one
        #[arg(long)]
        load: Option<PathBuf>,
        /// Asset manifest the loaded scene is checked against
        #[arg(long, requires = "load")]
        manifest: Option<PathBuf>,
        /// Save the scene here when the run ends
        #[arg(long)]
        save: Option<PathBuf>,
        /// JSON file with simulation settings
        #[arg(long)]
        config: Option<PathBuf>,
        /// Seed for light placement, overrides the config file
        #[arg(long)]
        seed: Option<u64>,
        /// Hold the nominal frame rate instead of running flat out
        #[arg(long)]
        realtime: bool,
        /// Print the final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::BuildScene {
            out,
            manifest,
            config,
            seed,
        } => build_scene(&out, manifest.as_deref(), load_config(config.as_deref(), seed)?),
        Command::Play {
            frames,
            load,
            manifest,
            save,
            config,
            seed,
            realtime,
            json,
        } => {
            let options = LoopOptions {
                max_frames: Some(frames),
                paced: realtime,
                autopilot: Some(Autopilot::default()),
            };
            play(
                load.as_deref(),
                manifest.as_deref(),
                save.as_deref(),
                load_config(config.as_deref(), seed)?,
                options,
                json,
            )
        }
    }
}

fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<SimConfig> {
    let mut config = match path {
        Some(path) => SimConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

fn build_scene(out: &Path, manifest: Option<&Path>, config: SimConfig) -> Result<()> {
    let mut engine = SceneEngine::new(config);
    engine
        .build_default_scene()
        .context("default scene failed validation")?;
    engine.save_scene(out)?;
    if let Some(manifest) = manifest {
        engine.save_manifest(manifest)?;
    }
    Ok(())
}

fn play(
    load: Option<&Path>,
    manifest: Option<&Path>,
    save: Option<&Path>,
    config: SimConfig,
    options: LoopOptions,
    json: bool,
) -> Result<()> {
    let mut engine = SceneEngine::new(config);
    match load {
        Some(path) => engine
            .load_scene(path, manifest)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => engine.build_default_scene()?,
    }

    let state = AppState::new();
    let (command_tx, handle) = spawn_game_loop(
        engine,
        options,
        state.latest_snapshot.clone(),
        state.running.clone(),
    );
    *state
        .command_tx
        .lock()
        .map_err(|_| anyhow!("command channel lock poisoned"))? = Some(command_tx);

    shutdown_on_game_over(&state, &handle);
    let engine = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    if let Some(snapshot) = state.snapshot() {
        info!(
            "run finished at frame {}: score {}, {} enemies left, {:?}",
            snapshot.time.frame,
            snapshot.score,
            snapshot.enemies.len(),
            snapshot.phase
        );
        if json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    if let Some(path) = save {
        engine.save_scene(path)?;
    }
    Ok(())
}
