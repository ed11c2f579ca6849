//! Simulation constants and tuning parameters.
//!
//! Distances are in board units (one unit = one pixel of the reference board),
//! times in milliseconds.

// --- Board ---

/// Default edge length of the square play area.
pub const BOARD_SIZE: f64 = 600.0;

/// Default number of placement cells per board edge.
pub const GRID_SIZE: u32 = 10;

/// Edge length of the square objective region, centred on the board.
pub const OBJECTIVE_SIZE: f64 = 60.0;

/// Distance outside the board edge at which hostiles appear.
pub const SPAWN_MARGIN: f64 = 20.0;

// --- Objective ---

/// Objective health at the start of a run. Also the display ceiling.
pub const OBJECTIVE_MAX_HEALTH: u32 = 100;

/// Damage dealt to the objective by each hostile that reaches it.
pub const OBJECTIVE_IMPACT_DAMAGE: u32 = 10;

/// A hostile closer than this to the objective centre has arrived.
pub const ARRIVAL_THRESHOLD: f64 = 10.0;

// --- Hostiles ---

/// Starting (and maximum) health of every hostile.
pub const HOSTILE_MAX_HEALTH: i32 = 100;

/// Hostile movement per tick.
pub const HOSTILE_SPEED: f64 = 0.5;

// --- Waves ---

/// Countdown before the first wave.
pub const FIRST_WAVE_DELAY_MS: f64 = 3_000.0;

/// Countdown between subsequent waves.
pub const WAVE_INTERVAL_MS: f64 = 15_000.0;

/// Hostiles in the first wave.
pub const INITIAL_WAVE_SIZE: u32 = 5;

/// Growth of the batch size from one wave to the next.
pub const WAVE_SIZE_INCREMENT: u32 = 2;

// --- Defenders ---

/// Attack radius of a freshly placed defender.
pub const DEFENDER_RANGE: f64 = 100.0;

/// Fixed cooldown between two shots of the same defender.
pub const DEFENDER_ATTACK_INTERVAL_MS: f64 = 1_000.0;

/// Damage carried by each projectile a defender fires.
pub const DEFENDER_DAMAGE: i32 = 25;

// --- Projectiles ---

/// Projectile movement per tick.
pub const PROJECTILE_SPEED: f64 = 5.0;

// --- Stamina ---

/// Stamina at the start of a run.
pub const STARTING_STAMINA: f64 = 10.0;

/// Stamina ceiling.
pub const MAX_STAMINA: f64 = 10.0;

/// Stamina regained per millisecond of elapsed time (one per second).
pub const STAMINA_REGEN_PER_MS: f64 = 1.0 / 1_000.0;

// --- Skills ---

/// Blast radius of the Fireball card.
pub const FIREBALL_RADIUS: f64 = 60.0;

/// Damage dealt by the Fireball card to each hostile in its radius.
pub const FIREBALL_DAMAGE: i32 = 50;

/// Objective health restored by the Base Repair card.
pub const REPAIR_AMOUNT: u32 = 10;

// --- Loop ---

/// Frame length the per-tick speeds were tuned against (60 Hz display).
pub const REFERENCE_FRAME_MS: f64 = 1_000.0 / 60.0;
