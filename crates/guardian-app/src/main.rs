use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;

use guardian_app::cli::Args;
use guardian_app::game_loop::{spawn_game_loop, LoopSettings};
use guardian_app::state::AppState;
use guardian_sim::driver::{FixedStepClock, ImmediateScheduler, SleepScheduler, SystemClock};

fn main() -> Result<()> {
    // info+ unless RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    if args.frame_ms.is_nan() || args.frame_ms <= 0.0 {
        return Err(anyhow!("--frame-ms must be positive, got {}", args.frame_ms));
    }

    let settings = LoopSettings {
        sim: args.sim_config()?,
        max_ticks: Some(args.max_ticks),
        opening: args.opening_commands(),
    };
    log::info!(
        "starting run: seed {}, {} opening placements",
        settings.sim.seed,
        settings.opening.len()
    );

    let state = AppState::new();
    let (cmd_tx, handle) = if args.realtime {
        spawn_game_loop(
            settings,
            SystemClock::new(),
            SleepScheduler::new(Duration::from_secs_f64(args.frame_ms / 1000.0)),
            state.latest_snapshot.clone(),
        )?
    } else {
        spawn_game_loop(
            settings,
            FixedStepClock::new(args.frame_ms),
            ImmediateScheduler,
            state.latest_snapshot.clone(),
        )?
    };
    *state.command_tx.lock().map_err(|e| anyhow!("{e}"))? = Some(cmd_tx);

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    state.shutdown().map_err(|e| anyhow!(e))?;

    let Some(snapshot) = state.snapshot().map_err(|e| anyhow!(e))? else {
        log::warn!("no ticks were run");
        return Ok(());
    };

    let score = &snapshot.score;
    log::info!(
        "{} after {} ticks ({:.1}s): wave {}, {} killed, {} leaked, objective {}",
        if summary.terminated { "defeated" } else { "stopped" },
        summary.ticks,
        snapshot.time.elapsed_ms / 1000.0,
        snapshot.economy.wave,
        score.hostiles_killed,
        score.hostiles_leaked,
        snapshot.economy.objective_health,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
