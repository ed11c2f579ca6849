//! Wave spawning system: releases escalating batches of hostiles on a timer.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use guardian_core::constants::*;
use guardian_core::events::SimEvent;

use crate::board::Board;
use crate::roster::HostileRoster;
use crate::world_setup;

/// Countdown and batch size of the wave sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveSchedule {
    /// Waves released so far.
    pub wave: u32,
    /// Time until the next wave (ms).
    pub timer_ms: f64,
    /// Hostiles in the next wave.
    pub next_wave_size: u32,
}

impl Default for WaveSchedule {
    fn default() -> Self {
        Self {
            wave: 0,
            timer_ms: FIRST_WAVE_DELAY_MS,
            next_wave_size: INITIAL_WAVE_SIZE,
        }
    }
}

impl WaveSchedule {
    /// Batch size of the wave with zero-based `index`.
    pub fn size_of_wave(index: u32) -> u32 {
        INITIAL_WAVE_SIZE + index * WAVE_SIZE_INCREMENT
    }

    /// Count down by `elapsed_ms`. Returns the batch size if a wave is due,
    /// after advancing the schedule to the following wave.
    pub fn advance(&mut self, elapsed_ms: f64) -> Option<u32> {
        self.timer_ms -= elapsed_ms;
        if self.timer_ms > 0.0 {
            return None;
        }
        let size = self.next_wave_size;
        self.wave += 1;
        self.next_wave_size += WAVE_SIZE_INCREMENT;
        self.timer_ms = WAVE_INTERVAL_MS;
        Some(size)
    }
}

/// Advance the schedule and spawn the wave if one is due.
/// Returns the number of hostiles spawned.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    roster: &mut HostileRoster,
    board: &Board,
    rng: &mut ChaCha8Rng,
    schedule: &mut WaveSchedule,
    next_id: &mut u64,
    elapsed_ms: f64,
    events: &mut Vec<SimEvent>,
) -> u32 {
    let Some(count) = schedule.advance(elapsed_ms) else {
        return 0;
    };

    log::info!("wave {} incoming: {} hostiles", schedule.wave, count);
    events.push(SimEvent::WaveStarted {
        wave: schedule.wave,
        hostiles: count,
    });
    for _ in 0..count {
        world_setup::spawn_hostile_at_random_edge(world, roster, board, rng, next_id, events);
    }
    count
}
