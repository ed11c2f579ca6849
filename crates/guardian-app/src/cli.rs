//! Command-line arguments for the `guardian` runner.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, ensure, Context, Result};
use clap::Parser;

use guardian_core::commands::PlayerCommand;
use guardian_core::cards::find_card;
use guardian_core::constants::REFERENCE_FRAME_MS;
use guardian_core::enums::SpeedModel;
use guardian_core::types::Cell;
use guardian_sim::engine::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "guardian")]
#[command(about = "Runs an Elemental Guardians defense until the objective falls")]
pub struct Args {
    /// JSON file with simulation settings (missing fields use defaults)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RNG seed, overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 20_000)]
    pub max_ticks: u64,

    /// Frame length in milliseconds
    #[arg(long, default_value_t = REFERENCE_FRAME_MS)]
    pub frame_ms: f64,

    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    pub realtime: bool,

    /// Build a defender before the first tick, e.g. `--place 1:4:4`
    #[arg(long = "place", value_name = "CARD:X:Y")]
    pub placements: Vec<PlacementArg>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Build the engine config from the optional file and flag overrides.
    pub fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        validate_config(&config)?;
        Ok(config)
    }

    /// Opening placements as player commands.
    pub fn opening_commands(&self) -> Vec<PlayerCommand> {
        self.placements
            .iter()
            .map(|p| PlayerCommand::PlaceDefender {
                card_id: p.card_id,
                cell: p.cell,
            })
            .collect()
    }
}

/// Reject settings the engine cannot run with.
pub fn validate_config(config: &SimConfig) -> Result<()> {
    ensure!(
        config.board_size.is_finite() && config.board_size > 0.0,
        "board_size must be positive, got {}",
        config.board_size
    );
    ensure!(config.grid_size > 0, "grid_size must be at least 1");
    ensure!(
        config.max_stamina.is_finite() && config.max_stamina >= 0.0,
        "max_stamina must be a non-negative number, got {}",
        config.max_stamina
    );
    ensure!(
        config.starting_stamina.is_finite() && config.starting_stamina >= 0.0,
        "starting_stamina must be a non-negative number, got {}",
        config.starting_stamina
    );
    if let SpeedModel::PerElapsed { reference_frame_ms } = config.speed_model {
        ensure!(
            reference_frame_ms.is_finite() && reference_frame_ms > 0.0,
            "reference_frame_ms must be positive, got {reference_frame_ms}"
        );
    }
    Ok(())
}

/// A `CARD:X:Y` placement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementArg {
    pub card_id: u32,
    pub cell: Cell,
}

impl FromStr for PlacementArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        let [card, x, y] = parts.as_slice() else {
            return Err(anyhow!("expected CARD:X:Y, got {s:?}"));
        };
        let card_id: u32 = card.trim().parse().context("card id")?;
        let card = find_card(card_id).ok_or_else(|| anyhow!("no card with id {card_id}"))?;
        ensure!(card.is_building(), "{} cannot be placed", card.name);
        Ok(Self {
            card_id,
            cell: Cell::new(
                x.trim().parse().context("cell column")?,
                y.trim().parse().context("cell row")?,
            ),
        })
    }
}
