//! Game loop thread: drives the simulation engine and publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel and are queued before each tick. Each
//! snapshot is stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;

use guardian_core::commands::PlayerCommand;
use guardian_core::events::SimEvent;
use guardian_core::state::GameStateSnapshot;
use guardian_sim::driver::{Clock, FrameScheduler, LoopDriver, RunSummary, StepOutcome};
use guardian_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// How a game loop run is set up.
#[derive(Debug, Clone, Default)]
pub struct LoopSettings {
    pub sim: SimConfig,
    /// Stop after this many ticks even if the objective still stands.
    pub max_ticks: Option<u64>,
    /// Commands queued before the first tick.
    pub opening: Vec<PlayerCommand>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle that yields the run summary
/// once the loop ends.
pub fn spawn_game_loop<C, S>(
    settings: LoopSettings,
    clock: C,
    scheduler: S,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)>
where
    C: Clock + Send + 'static,
    S: FrameScheduler + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("guardian-game-loop".into())
        .spawn(move || {
            let driver = LoopDriver::new(clock, scheduler);
            run_game_loop(settings, driver, cmd_rx, &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until the objective falls, the tick cap is reached,
/// a Shutdown command arrives or the channel disconnects.
fn run_game_loop<C: Clock, S: FrameScheduler>(
    settings: LoopSettings,
    mut driver: LoopDriver<C, S>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &std::sync::Mutex<Option<GameStateSnapshot>>,
) -> RunSummary {
    let mut engine = SimulationEngine::new(settings.sim);
    engine.queue_commands(settings.opening);
    let mut ticks = 0;

    let mut publish = |snapshot: &GameStateSnapshot| {
        for event in &snapshot.events {
            if let SimEvent::ActionRejected { card_id, reason } = event {
                log::warn!("card {card_id} rejected: {reason}");
            }
        }
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
    };

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("game loop stopped after {ticks} ticks");
                    return RunSummary {
                        ticks,
                        terminated: false,
                    };
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        if settings.max_ticks.is_some_and(|max| ticks >= max) {
            return RunSummary {
                ticks,
                terminated: false,
            };
        }

        // 2. Tick, publish, and wait for the next frame
        ticks += 1;
        if driver.step(&mut engine, &mut publish) == StepOutcome::Terminated {
            return RunSummary {
                ticks,
                terminated: true,
            };
        }
    }
}
