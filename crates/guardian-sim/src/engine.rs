//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and every piece of run state
//! (economy, wave schedule, active-hostiles roster, RNG). It processes player
//! actions, runs the systems once per tick in a fixed order, and produces
//! `GameStateSnapshot`s. Completely headless; time is supplied by the caller,
//! enabling deterministic testing and several independent instances.

use std::collections::{HashSet, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use guardian_core::cards::{self, Card};
use guardian_core::commands::PlayerCommand;
use guardian_core::components::Defender;
use guardian_core::constants::*;
use guardian_core::enums::{GamePhase, SpeedModel};
use guardian_core::error::ActionRejected;
use guardian_core::events::SimEvent;
use guardian_core::state::GameStateSnapshot;
use guardian_core::types::{Cell, EntityId, Position, SimTime};

use crate::board::{Board, CellOccupancy};
use crate::economy::Economy;
use crate::roster::HostileRoster;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::skills::SkillOutcome;
use crate::systems::wave_spawner::WaveSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and timestamps = same run.
    pub seed: u64,
    /// Edge length of the square play area.
    pub board_size: f64,
    /// Placement cells per board edge.
    pub grid_size: u32,
    pub speed_model: SpeedModel,
    pub starting_stamina: f64,
    pub max_stamina: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            board_size: BOARD_SIZE,
            grid_size: GRID_SIZE,
            speed_model: SpeedModel::PerTick,
            starting_stamina: STARTING_STAMINA,
            max_stamina: MAX_STAMINA,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    board: Board,
    roster: HostileRoster,
    economy: Economy,
    schedule: WaveSchedule,
    time: SimTime,
    phase: GamePhase,
    speed_model: SpeedModel,
    rng: ChaCha8Rng,
    library: Vec<Card>,
    next_entity_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            board: Board::new(config.board_size, config.grid_size),
            roster: HostileRoster::new(),
            economy: Economy::new(config.starting_stamina, config.max_stamina),
            schedule: WaveSchedule::default(),
            time: SimTime::default(),
            phase: GamePhase::Active,
            speed_model: config.speed_model,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            library: cards::card_library(),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one tick at timestamp `now_ms` and return the resulting snapshot.
    ///
    /// Order: queued commands, waves, movement, targeting, projectiles,
    /// stamina, terminal check. Once the run is over, time stops and only a
    /// snapshot is produced.
    pub fn tick(&mut self, now_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let elapsed_ms = self.time.advance_to(now_ms);
            self.run_systems(elapsed_ms);
        }

        self.snapshot()
    }

    /// Build a snapshot without advancing time. Drains pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.economy,
            &self.schedule,
            &self.score,
            events,
        )
    }

    /// Try to build a defender from `card` on `cell`.
    ///
    /// Stamina is only spent when the placement succeeds.
    pub fn attempt_placement(
        &mut self,
        card: &Card,
        cell: Cell,
        occupancy: &dyn CellOccupancy,
    ) -> Result<EntityId, ActionRejected> {
        if self.is_over() {
            return Err(ActionRejected::GameOver);
        }
        if !card.is_building() {
            return Err(ActionRejected::NotABuilding);
        }
        if !self.board.contains(cell) {
            return Err(ActionRejected::CellOutOfBounds { cell });
        }
        let cost = card.cost as f64;
        if self.economy.stamina() < cost {
            return Err(ActionRejected::InsufficientResource {
                cost: card.cost,
                available: self.economy.stamina(),
            });
        }
        if occupancy.is_occupied(cell) {
            return Err(ActionRejected::CellOccupied { cell });
        }

        self.economy.try_spend(card.cost)?;
        let id = world_setup::spawn_defender(
            &mut self.world,
            &self.board,
            &mut self.next_entity_id,
            card,
            cell,
            &mut self.events,
        );
        self.score.defenders_placed += 1;
        log::info!("built {} at {cell} as {id}", card.name);
        Ok(id)
    }

    /// Place a defender from a library card, checking occupancy against the
    /// engine's own defenders.
    pub fn place_defender(&mut self, card_id: u32, cell: Cell) -> Result<EntityId, ActionRejected> {
        let card = self.card(card_id)?;
        let occupied = self.occupied_cells();
        self.attempt_placement(&card, cell, &occupied)
    }

    /// Try to play a skill card. The effect runs after stamina is deducted.
    ///
    /// Area effects without an explicit target are centred on the objective.
    pub fn attempt_skill_use(
        &mut self,
        card: &Card,
        target: Option<Position>,
    ) -> Result<SkillOutcome, ActionRejected> {
        if self.is_over() {
            return Err(ActionRejected::GameOver);
        }
        let effect = card.skill_effect().ok_or(ActionRejected::NotASkill)?;
        self.economy.try_spend(card.cost)?;

        let target = target.unwrap_or_else(|| self.board.objective());
        let outcome = systems::skills::apply(
            effect,
            target,
            &mut self.world,
            &mut self.roster,
            &mut self.economy,
            &mut self.events,
        );
        if let SkillOutcome::AreaDamage { killed, .. } = outcome {
            self.score.hostiles_killed += killed;
        }
        self.score.skills_used += 1;
        log::info!("used {}: {:?}", card.name, outcome);
        Ok(outcome)
    }

    /// Play a skill from the card library.
    pub fn use_skill(
        &mut self,
        card_id: u32,
        target: Option<Position>,
    ) -> Result<SkillOutcome, ActionRejected> {
        let card = self.card(card_id)?;
        self.attempt_skill_use(&card, target)
    }

    /// Look up a card in the engine's library.
    pub fn card(&self, card_id: u32) -> Result<Card, ActionRejected> {
        self.library
            .iter()
            .find(|c| c.id == card_id)
            .cloned()
            .ok_or(ActionRejected::UnknownCard { card_id })
    }

    /// Cells currently holding a defender.
    pub fn occupied_cells(&self) -> HashSet<Cell> {
        self.world
            .query::<&Defender>()
            .iter()
            .map(|(_, defender)| defender.cell)
            .collect()
    }

    /// True once the objective has been destroyed.
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Defeated
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn schedule(&self) -> &WaveSchedule {
        &self.schedule
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn roster(&self) -> &HostileRoster {
        &self.roster
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Spawn a hostile at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_hostile(&mut self, position: Position) -> EntityId {
        self.score.hostiles_spawned += 1;
        world_setup::spawn_hostile(
            &mut self.world,
            &mut self.roster,
            &mut self.next_entity_id,
            position,
            &mut self.events,
        )
    }

    /// Run the damage resolver against a hostile (for tests).
    #[cfg(test)]
    pub fn damage_hostile(
        &mut self,
        id: EntityId,
        amount: i32,
    ) -> systems::damage::DamageOutcome {
        systems::damage::apply_damage(
            &mut self.world,
            &mut self.roster,
            id,
            amount,
            &mut self.events,
        )
    }

    /// Mutable access to the economy (for tests).
    #[cfg(test)]
    pub fn economy_mut(&mut self) -> &mut Economy {
        &mut self.economy
    }

    /// Mutable access to the wave schedule (for tests).
    #[cfg(test)]
    pub fn schedule_mut(&mut self) -> &mut WaveSchedule {
        &mut self.schedule
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command, reporting a rejection as an event.
    fn handle_command(&mut self, command: PlayerCommand) {
        let (card_id, result) = match command {
            PlayerCommand::PlaceDefender { card_id, cell } => {
                (card_id, self.place_defender(card_id, cell).map(|_| ()))
            }
            PlayerCommand::UseSkill { card_id, target } => {
                (card_id, self.use_skill(card_id, target).map(|_| ()))
            }
        };

        if let Err(reason) = result {
            log::debug!("card {card_id} rejected: {reason}");
            self.events
                .push(SimEvent::ActionRejected { card_id, reason });
        }
    }

    /// Run all systems in order, then the economy and the terminal check.
    fn run_systems(&mut self, elapsed_ms: f64) {
        let step_scale = self.speed_model.step_scale(elapsed_ms);

        // 1. Wave spawning
        self.score.hostiles_spawned += systems::wave_spawner::run(
            &mut self.world,
            &mut self.roster,
            &self.board,
            &mut self.rng,
            &mut self.schedule,
            &mut self.next_entity_id,
            elapsed_ms,
            &mut self.events,
        );
        // 2. Movement and arrivals
        self.score.hostiles_leaked += systems::movement::run(
            &mut self.world,
            &mut self.roster,
            self.board.objective(),
            &mut self.economy,
            step_scale,
            &mut self.events,
        );
        // 3. Cooldowns, targeting, firing
        self.score.projectiles_fired += systems::targeting::run(
            &mut self.world,
            &self.roster,
            &mut self.next_entity_id,
            elapsed_ms,
            &mut self.events,
        );
        // 4. Projectile flight and hits
        let report = systems::projectiles::run(
            &mut self.world,
            &mut self.roster,
            step_scale,
            &mut self.events,
        );
        self.score.hostiles_killed += report.kills;
        // 5. Stamina
        self.economy.regenerate(elapsed_ms);
        // 6. Terminal check
        if self.economy.objective_destroyed() {
            self.phase = GamePhase::Defeated;
            log::info!(
                "objective destroyed during wave {} after {:.1}s",
                self.schedule.wave,
                self.time.elapsed_ms / 1000.0
            );
            self.events.push(SimEvent::GameOver {
                wave: self.schedule.wave,
            });
        }
    }
}
