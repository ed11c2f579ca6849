//! State shared between the command side and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use guardian_core::commands::PlayerCommand;
use guardian_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Stop the loop after the current tick.
    Shutdown,
}

/// Latest snapshot, written by the loop after every tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Handles held by whoever drives the game loop.
pub struct AppState {
    /// `None` until the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: SharedSnapshot,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the most recent snapshot, if a tick has run.
    pub fn snapshot(&self) -> Result<Option<GameStateSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Ask the loop to stop. A loop that already exited is not an error.
    pub fn shutdown(&self) -> Result<(), String> {
        let mut tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        if let Some(tx) = tx_lock.take() {
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        Ok(())
    }
}
