//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the board (x = right, y = down, board units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A placement cell on the board grid (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

/// Stable identity of a simulated entity, as seen by the renderer.
///
/// Ids are handed out from a single monotonic counter, so comparing two ids
/// compares creation order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed ticks.
    pub tick: u64,
    /// Sum of elapsed time fed into the simulation (ms).
    pub elapsed_ms: f64,
    /// Timestamp of the most recent tick, as supplied by the clock (ms).
    pub last_timestamp_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    /// Move `step` units toward `target` along the straight line.
    ///
    /// Callers check arrival first; a zero-length direction leaves the
    /// position unchanged.
    pub fn step_toward(&mut self, target: &Position, step: f64) {
        let dir = (target.to_vec() - self.to_vec()).normalize_or_zero();
        *self = Self::from_vec(self.to_vec() + dir * step);
    }
}

impl Cell {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl SimTime {
    /// Record a tick at `now_ms` and return the elapsed time since the last one.
    ///
    /// A clock that runs backwards yields zero elapsed time. A non-finite
    /// timestamp is ignored: the tick counts but no time passes.
    pub fn advance_to(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            self.tick += 1;
            return 0.0;
        }
        let elapsed = (now_ms - self.last_timestamp_ms).max(0.0);
        self.last_timestamp_ms = now_ms;
        self.tick += 1;
        self.elapsed_ms += elapsed;
        elapsed
    }
}
