//! Loop driver: turns an injected clock and frame scheduler into ticks.
//!
//! The engine never reads time on its own. The driver asks the [`Clock`] for
//! "now", runs one tick, hands the snapshot to a [`RenderSink`], and unless
//! the run is over asks the [`FrameScheduler`] for the next frame. Each tick
//! runs to completion before the next one is requested.

use std::time::{Duration, Instant};

use guardian_core::state::GameStateSnapshot;

use crate::engine::SimulationEngine;

/// Source of "now" timestamps in milliseconds.
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// "Run again soon": blocks or yields until the next frame is due.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Consumer of per-tick snapshots (renderer, logger, test probe).
pub trait RenderSink {
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

impl<F: FnMut(&GameStateSnapshot)> RenderSink for F {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        self(snapshot)
    }
}

/// Sink that drops every snapshot.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn present(&mut self, _snapshot: &GameStateSnapshot) {}
}

/// Wall-clock time since construction.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// A clock that moves forward by a fixed frame every time it is read.
///
/// The first reading is one frame after zero.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    frame_ms: f64,
    now_ms: f64,
}

impl FixedStepClock {
    pub fn new(frame_ms: f64) -> Self {
        Self {
            frame_ms,
            now_ms: 0.0,
        }
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&mut self) -> f64 {
        self.now_ms += self.frame_ms;
        self.now_ms
    }
}

/// Sleeps until the next frame deadline.
#[derive(Debug)]
pub struct SleepScheduler {
    frame: Duration,
    next_frame: Instant,
}

impl SleepScheduler {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            next_frame: Instant::now(),
        }
    }
}

impl FrameScheduler for SleepScheduler {
    fn request_frame(&mut self) {
        self.next_frame += self.frame;
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        } else if now - self.next_frame > self.frame * 2 {
            // Too far behind; reset instead of spiralling to catch up.
            self.next_frame = now;
        }
    }
}

/// Schedules the next frame immediately (headless and test runs).
#[derive(Debug, Default)]
pub struct ImmediateScheduler;

impl FrameScheduler for ImmediateScheduler {
    fn request_frame(&mut self) {}
}

/// Result of a single driver step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The next frame was requested.
    Continue,
    /// The run ended; nothing was rescheduled.
    Terminated,
}

/// How a driven run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub terminated: bool,
}

pub struct LoopDriver<C, S> {
    clock: C,
    scheduler: S,
    frames_requested: u64,
}

impl<C: Clock, S: FrameScheduler> LoopDriver<C, S> {
    pub fn new(clock: C, scheduler: S) -> Self {
        Self {
            clock,
            scheduler,
            frames_requested: 0,
        }
    }

    pub fn frames_requested(&self) -> u64 {
        self.frames_requested
    }

    /// Run one tick and reschedule unless the run is over.
    pub fn step(&mut self, engine: &mut SimulationEngine, sink: &mut dyn RenderSink) -> StepOutcome {
        let now = self.clock.now_ms();
        let snapshot = engine.tick(now);
        sink.present(&snapshot);

        if engine.is_over() {
            return StepOutcome::Terminated;
        }
        self.scheduler.request_frame();
        self.frames_requested += 1;
        StepOutcome::Continue
    }

    /// Step until the run ends or `max_ticks` ticks have been driven.
    pub fn run_until_terminal(
        &mut self,
        engine: &mut SimulationEngine,
        sink: &mut dyn RenderSink,
        max_ticks: Option<u64>,
    ) -> RunSummary {
        let mut ticks = 0;
        loop {
            if max_ticks.is_some_and(|max| ticks >= max) {
                return RunSummary {
                    ticks,
                    terminated: false,
                };
            }
            ticks += 1;
            if self.step(engine, sink) == StepOutcome::Terminated {
                return RunSummary {
                    ticks,
                    terminated: true,
                };
            }
        }
    }
}
