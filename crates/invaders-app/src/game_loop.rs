//! Game loop thread: runs the scene engine at 60Hz and publishes snapshots.
//!
//! The engine and the polled input state are moved into this thread.
//! Commands arrive via `mpsc` channel and are folded in at frame
//! boundaries. Snapshots are stored in shared state for polling, and the
//! engine is handed back when the thread finishes.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info};

use invaders_core::constants::{FRAME_DT, FRAME_RATE};
use invaders_core::enums::GamePhase;
use invaders_core::events::GameEvent;
use invaders_core::state::SceneSnapshot;
use invaders_scripts::input::InputState;
use invaders_sim::SceneEngine;

use crate::autopilot::Autopilot;
use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// How often the host polls the latest snapshot while the loop runs.
const WATCH_INTERVAL: Duration = Duration::from_millis(5);

/// How the game loop runs.
#[derive(Debug, Clone, Default)]
pub struct LoopOptions {
    /// Stop after this many frames. `None` runs until Shutdown.
    pub max_frames: Option<u64>,
    /// Sleep between frames to hold the nominal frame rate.
    pub paced: bool,
    /// Drive input from a script instead of the command channel alone.
    pub autopilot: Option<Autopilot>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the engine back.
pub fn spawn_game_loop(
    engine: SceneEngine,
    options: LoopOptions,
    latest_snapshot: Arc<Mutex<Option<SceneSnapshot>>>,
    running: Arc<Mutex<bool>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<SceneEngine>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("invaders-game-loop".into())
        .spawn(move || {
            set_running(&running, true);
            let engine = run_game_loop(engine, &options, cmd_rx, &latest_snapshot);
            set_running(&running, false);
            engine
        })
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

fn set_running(running: &Mutex<bool>, value: bool) {
    if let Ok(mut lock) = running.lock() {
        *lock = value;
    }
}

/// The game loop. Runs until Shutdown, channel disconnect or the frame limit.
fn run_game_loop(
    mut engine: SceneEngine,
    options: &LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
) -> SceneEngine {
    let mut input = InputState::new();
    let mut frames: u64 = 0;
    let mut next_frame_time = Instant::now();

    loop {
        if options.max_frames.is_some_and(|max| frames >= max) {
            info!("frame limit reached after {frames} frames");
            return engine;
        }

        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(cmd)) => cmd.apply(&mut input),
                Ok(GameLoopCommand::Scene(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return engine,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return engine,
            }
        }

        // 2. Scripted input
        if let Some(autopilot) = &options.autopilot {
            autopilot.drive(frames, &mut input);
        }

        // 3. Advance one frame (engine handles pause and game over internally)
        let snapshot = engine.frame(FRAME_DT, &input);
        input.end_frame();
        frames += 1;
        report_events(frames, &snapshot.events);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        if !options.paced {
            continue;
        }
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Block until the loop thread finishes, asking it to stop once the game
/// is over. A frozen world has nothing left to play.
pub fn shutdown_on_game_over(state: &AppState, handle: &JoinHandle<SceneEngine>) {
    while !handle.is_finished() {
        let over = state
            .snapshot()
            .is_some_and(|snapshot| snapshot.phase == GamePhase::GameOver);
        if over {
            info!("game over, stopping the game loop");
            state.send(GameLoopCommand::Shutdown);
            return;
        }
        std::thread::sleep(WATCH_INTERVAL);
    }
}

fn report_events(frame: u64, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::GameOver { score } => info!("frame {frame}: game over, score {score}"),
            other => debug!("frame {frame}: {other:?}"),
        }
    }
}
