//! Tests for the simulation engine, its systems and the loop driver.

use guardian_core::cards::{BASE_REPAIR, FIREBALL, FLAME_TOWER, FROST_TOWER};
use guardian_core::commands::PlayerCommand;
use guardian_core::components::Health;
use guardian_core::constants::REFERENCE_FRAME_MS;
use guardian_core::enums::*;
use guardian_core::error::ActionRejected;
use guardian_core::events::{RenderEvent, SimEvent};
use guardian_core::state::GameStateSnapshot;
use guardian_core::types::{Cell, EntityId, Position};

use crate::driver::*;
use crate::engine::{SimConfig, SimulationEngine};
use crate::systems::damage::DamageOutcome;
use crate::systems::skills::SkillOutcome;
use crate::systems::wave_spawner::WaveSchedule;

const FRAME_MS: f64 = 16.0;

/// Engine whose wave timer never fires, so tests control every hostile.
fn quiet_engine() -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.schedule_mut().timer_ms = f64::INFINITY;
    engine
}

/// Tick `count` times at a fixed frame, continuing from the engine's clock.
fn run_ticks(engine: &mut SimulationEngine, count: u32, frame_ms: f64) -> GameStateSnapshot {
    let mut snap = engine.snapshot();
    for _ in 0..count {
        let now = engine.time().last_timestamp_ms + frame_ms;
        snap = engine.tick(now);
    }
    snap
}

fn hostile_health(engine: &SimulationEngine, id: EntityId) -> Option<i32> {
    let entity = engine.roster().get(id)?;
    let health = engine.world().get::<&Health>(entity).ok()?;
    Some(health.current)
}

fn hostile_position(engine: &SimulationEngine, id: EntityId) -> Option<Position> {
    let entity = engine.roster().get(id)?;
    let pos = engine.world().get::<&Position>(entity).ok()?;
    Some(*pos)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(config.clone());
    let mut engine_b = SimulationEngine::new(config);

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(PlayerCommand::PlaceDefender {
            card_id: FLAME_TOWER,
            cell: Cell::new(4, 4),
        });
    }

    for i in 1..=2000 {
        let now = i as f64 * FRAME_MS;
        let json_a = serde_json::to_string(&engine_a.tick(now)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(now)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at tick {i}");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    // Spawn positions are random, so the first wave must differ.
    let mut diverged = false;
    for i in 1..=400 {
        let now = i as f64 * FRAME_MS;
        let json_a = serde_json::to_string(&engine_a.tick(now)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(now)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent spawns");
}

// ---- Waves ----

#[test]
fn test_wave_schedule_countdown() {
    let mut schedule = WaveSchedule::default();
    assert_eq!(schedule.advance(2999.0), None);
    assert_eq!(schedule.advance(1.0), Some(5), "First wave after 3s");
    assert_eq!(schedule.wave, 1);
    assert_eq!(schedule.next_wave_size, 7);
    assert_eq!(schedule.timer_ms, 15_000.0);

    // Overshoot does not carry into the next countdown.
    assert_eq!(schedule.advance(14_999.0), None);
    assert_eq!(schedule.advance(5_000.0), Some(7));
    assert_eq!(schedule.timer_ms, 15_000.0);
    assert_eq!(schedule.advance(15_000.0), Some(9));
    assert_eq!(schedule.wave, 3);
}

#[test]
fn test_wave_sizes_grow_by_two() {
    assert_eq!(WaveSchedule::size_of_wave(0), 5);
    assert_eq!(WaveSchedule::size_of_wave(1), 7);
    assert_eq!(WaveSchedule::size_of_wave(2), 9);

    let mut engine = SimulationEngine::new(SimConfig::default());

    let snap = engine.tick(2999.0);
    assert!(engine.roster().is_empty(), "No wave before 3s");
    assert_eq!(snap.economy.wave, 0);

    let snap = engine.tick(3000.0);
    assert_eq!(engine.roster().len(), 5);
    assert_eq!(snap.economy.wave, 1);
    assert_eq!(snap.economy.next_wave_size, 7);
    assert!(snap.events.contains(&SimEvent::WaveStarted {
        wave: 1,
        hostiles: 5
    }));
    let spawned = snap
        .events
        .iter()
        .filter(|e| {
            matches!(
                e,
                SimEvent::Render(RenderEvent::Spawned {
                    kind: EntityKind::Hostile,
                    ..
                })
            )
        })
        .count();
    assert_eq!(spawned, 5, "Renderer hears about every spawn");

    engine.tick(18_000.0);
    assert_eq!(engine.roster().len(), 12, "Second wave adds 7");

    engine.tick(33_000.0);
    assert_eq!(engine.roster().len(), 21, "Third wave adds 9");
    assert_eq!(engine.score().hostiles_spawned, 21);
}

#[test]
fn test_spawned_hostiles_start_at_full_health_off_board() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.tick(3000.0);
    assert_eq!(snap.hostiles.len(), 5);
    for hostile in &snap.hostiles {
        assert_eq!(hostile.health, 100);
        assert_eq!(hostile.max_health, 100);
        let p = hostile.position;
        // One movement step has already happened.
        assert!(
            p.x < 1.0 || p.x > 599.0 || p.y < 1.0 || p.y > 599.0,
            "Hostile {p:?} should enter from outside the board"
        );
    }
}

// ---- Movement ----

#[test]
fn test_hostile_reaches_objective_after_expected_ticks() {
    let mut engine = quiet_engine();
    // Objective centre is (300, 300); start 100.25 away with speed 0.5.
    let id = engine.spawn_test_hostile(Position::new(400.25, 300.0));

    // ceil((100.25 - 10) / 0.5) = 181 steps to get inside the threshold.
    run_ticks(&mut engine, 180, FRAME_MS);
    let pos = hostile_position(&engine, id).unwrap();
    assert!(
        (pos.x - 310.25).abs() < 1e-9,
        "After 180 steps x should be 310.25, got {}",
        pos.x
    );

    run_ticks(&mut engine, 1, FRAME_MS);
    let pos = hostile_position(&engine, id).unwrap();
    assert!(pos.distance_to(&Position::new(300.0, 300.0)) < 10.0);
    assert_eq!(engine.economy().objective_health(), 100);

    // The next movement pass resolves the arrival.
    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert_eq!(snap.economy.objective_health, 90);
    assert!(engine.roster().is_empty());
    assert!(snap.events.contains(&SimEvent::Render(RenderEvent::Removed {
        id,
        cause: RemovalCause::ReachedObjective
    })));
    assert!(snap.events.contains(&SimEvent::ObjectiveDamaged {
        damage: 10,
        remaining: 90
    }));
    assert_eq!(engine.score().hostiles_leaked, 1);
}

#[test]
fn test_simultaneous_arrivals_compound() {
    let mut engine = quiet_engine();
    engine.spawn_test_hostile(Position::new(305.0, 300.0));
    engine.spawn_test_hostile(Position::new(300.0, 295.0));
    engine.spawn_test_hostile(Position::new(298.0, 302.0));

    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert_eq!(snap.economy.objective_health, 70, "Each arrival deducts 10");
    assert!(snap.hostiles.is_empty());
}

#[test]
fn test_per_tick_speed_ignores_elapsed_time() {
    let mut engine = quiet_engine();
    let id = engine.spawn_test_hostile(Position::new(400.0, 300.0));
    engine.tick(100.0);
    let pos = hostile_position(&engine, id).unwrap();
    assert!((pos.x - 399.5).abs() < 1e-12, "Per-tick: one step of 0.5");
}

#[test]
fn test_per_elapsed_speed_scales_with_frame_time() {
    let mut engine = SimulationEngine::new(SimConfig {
        speed_model: SpeedModel::PerElapsed {
            reference_frame_ms: 16.0,
        },
        ..Default::default()
    });
    engine.schedule_mut().timer_ms = f64::INFINITY;
    let id = engine.spawn_test_hostile(Position::new(400.0, 300.0));

    engine.tick(32.0);
    let pos = hostile_position(&engine, id).unwrap();
    assert!(
        (pos.x - 399.0).abs() < 1e-12,
        "Two reference frames elapsed: two steps, got x = {}",
        pos.x
    );
}

#[test]
fn test_long_frame_does_not_overshoot_objective() {
    let mut engine = SimulationEngine::new(SimConfig {
        speed_model: SpeedModel::PerElapsed {
            reference_frame_ms: REFERENCE_FRAME_MS,
        },
        ..Default::default()
    });
    engine.schedule_mut().timer_ms = f64::INFINITY;
    // A 1000 ms frame is a step of 30, twice the remaining distance.
    let id = engine.spawn_test_hostile(Position::new(315.0, 300.0));

    run_ticks(&mut engine, 1, 1000.0);
    let pos = hostile_position(&engine, id).unwrap();
    assert_eq!(pos, Position::new(300.0, 300.0), "Step is capped at the objective");

    let snap = run_ticks(&mut engine, 1, 1000.0);
    assert!(!engine.roster().contains(id), "Hostile must arrive, not oscillate");
    assert_eq!(snap.economy.objective_health, 90);
}

// ---- Targeting ----

#[test]
fn test_defender_fires_and_resets_cooldown_exactly() {
    let mut engine = quiet_engine();
    engine.place_defender(FLAME_TOWER, Cell::new(4, 4)).unwrap();
    let target = engine.spawn_test_hostile(Position::new(330.0, 300.0));

    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].target, target);
    assert_eq!(snap.defenders[0].cooldown_ms, 1000.0, "Reset, not incremented");

    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert!((snap.defenders[0].cooldown_ms - 984.0).abs() < 1e-9);
    assert_eq!(engine.score().projectiles_fired, 1);
}

#[test]
fn test_defender_without_target_keeps_retrying() {
    let mut engine = quiet_engine();
    engine.place_defender(FLAME_TOWER, Cell::new(4, 4)).unwrap();

    let snap = run_ticks(&mut engine, 3, FRAME_MS);
    assert!((snap.defenders[0].cooldown_ms + 48.0).abs() < 1e-9);
    assert!(snap.projectiles.is_empty());

    engine.spawn_test_hostile(Position::new(330.0, 300.0));
    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert_eq!(snap.projectiles.len(), 1, "Fires on the first tick a target appears");
    assert_eq!(snap.defenders[0].cooldown_ms, 1000.0);
}

#[test]
fn test_first_in_range_hostile_wins_over_nearest() {
    let mut engine = quiet_engine();
    engine.place_defender(FLAME_TOWER, Cell::new(4, 4)).unwrap();
    // Defender sits at (270, 270).
    let first = engine.spawn_test_hostile(Position::new(330.0, 300.0));
    let _nearer = engine.spawn_test_hostile(Position::new(280.0, 280.0));

    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(
        snap.projectiles[0].target, first,
        "Target selection is first-found in spawn order"
    );
}

#[test]
fn test_no_projectile_for_hostile_outside_range() {
    let mut engine = quiet_engine();
    engine.place_defender(FROST_TOWER, Cell::new(0, 0)).unwrap();
    // Walks the diagonal from the far corner; never within 100 of (30, 30).
    engine.spawn_test_hostile(Position::new(580.0, 580.0));

    for _ in 0..500 {
        let snap = run_ticks(&mut engine, 1, FRAME_MS);
        assert!(snap.projectiles.is_empty());
    }
    assert_eq!(engine.score().projectiles_fired, 0);
}

// ---- Projectiles & damage ----

#[test]
fn test_projectiles_kill_hostile_after_four_hits() {
    let mut engine = quiet_engine();
    // Defender at (150, 450); hostile passes it on the way to the centre.
    engine.place_defender(FLAME_TOWER, Cell::new(2, 7)).unwrap();
    let id = engine.spawn_test_hostile(Position::new(100.0, 500.0));

    let mut seen = Vec::new();
    for _ in 0..60 {
        run_ticks(&mut engine, 1, 250.0);
        if let Some(health) = hostile_health(&engine, id) {
            assert!(
                [100, 75, 50, 25].contains(&health),
                "Health moves in steps of 25, got {health}"
            );
            if seen.last() != Some(&health) {
                seen.push(health);
            }
        }
    }

    assert_eq!(seen, vec![100, 75, 50, 25]);
    assert!(!engine.roster().contains(id), "Dead hostile is removed");
    assert_eq!(engine.score().hostiles_killed, 1);
    assert_eq!(engine.economy().objective_health(), 100);
}

#[test]
fn test_projectile_fizzles_when_target_dies_first() {
    let mut engine = quiet_engine();
    engine.place_defender(FLAME_TOWER, Cell::new(4, 4)).unwrap();
    let target = engine.spawn_test_hostile(Position::new(330.0, 300.0));
    let bystander = engine.spawn_test_hostile(Position::new(100.0, 500.0));

    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert_eq!(snap.projectiles.len(), 1);
    let projectile = snap.projectiles[0].id;

    assert_eq!(engine.damage_hostile(target, 100), DamageOutcome::Killed);
    assert_eq!(
        engine.damage_hostile(target, 10),
        DamageOutcome::Missing,
        "Removed hostiles cannot be damaged again"
    );

    let snap = run_ticks(&mut engine, 1, FRAME_MS);
    assert!(snap.projectiles.is_empty());
    assert!(snap.events.contains(&SimEvent::Render(RenderEvent::Removed {
        id: projectile,
        cause: RemovalCause::ProjectileFizzled
    })));
    assert_eq!(hostile_health(&engine, bystander), Some(100), "No retargeting");
}

#[test]
fn test_damage_resolver_reports_health_ratio() {
    let mut engine = quiet_engine();
    let id = engine.spawn_test_hostile(Position::new(100.0, 100.0));
    engine.snapshot();

    assert_eq!(
        engine.damage_hostile(id, 30),
        DamageOutcome::Survived { remaining: 70 }
    );
    assert_eq!(
        engine.damage_hostile(id, 90),
        DamageOutcome::Killed,
        "Overkill takes health negative before removal"
    );

    let snap = engine.snapshot();
    assert_eq!(
        snap.events,
        vec![
            SimEvent::Render(RenderEvent::HealthChanged { id, ratio: 0.7 }),
            SimEvent::Render(RenderEvent::HealthChanged { id, ratio: 0.0 }),
            SimEvent::Render(RenderEvent::Removed {
                id,
                cause: RemovalCause::Killed
            }),
        ]
    );
    assert!(snap.hostiles.is_empty());
}

// ---- Economy & actions ----

#[test]
fn test_stamina_regenerates_over_ticks() {
    let mut engine = quiet_engine();
    engine.economy_mut().set_stamina(5.0);
    engine.tick(1000.0);
    let snap = engine.tick(2000.0);
    assert_eq!(snap.economy.stamina, 7);
    assert!((engine.economy().stamina() - 7.0).abs() < 1e-9);

    engine.economy_mut().set_stamina(9.0);
    let snap = engine.tick(7000.0);
    assert_eq!(snap.economy.stamina, 10, "Clamped at max");
}

#[test]
fn test_placement_rejected_without_stamina() {
    let mut engine = quiet_engine();
    engine.economy_mut().set_stamina(2.0);

    let result = engine.place_defender(FLAME_TOWER, Cell::new(1, 1));
    assert_eq!(
        result,
        Err(ActionRejected::InsufficientResource {
            cost: 3,
            available: 2.0
        })
    );
    assert_eq!(engine.economy().stamina(), 2.0);
    assert!(engine.occupied_cells().is_empty());
}

#[test]
fn test_placement_success_and_rejections() {
    let mut engine = quiet_engine();
    let card = engine.card(FLAME_TOWER).unwrap();

    engine.attempt_placement(&card, Cell::new(3, 3), &|_: Cell| false).unwrap();
    assert_eq!(engine.economy().stamina(), 7.0);

    let occupied = engine.place_defender(FROST_TOWER, Cell::new(3, 3));
    assert_eq!(
        occupied,
        Err(ActionRejected::CellOccupied {
            cell: Cell::new(3, 3)
        })
    );
    assert_eq!(engine.economy().stamina(), 7.0, "Rejected placement is free");

    // The caller's predicate is authoritative.
    let blocked = engine.attempt_placement(&card, Cell::new(5, 5), &|c: Cell| c.x == 5);
    assert!(matches!(blocked, Err(ActionRejected::CellOccupied { .. })));

    assert_eq!(
        engine.place_defender(FLAME_TOWER, Cell::new(10, 0)),
        Err(ActionRejected::CellOutOfBounds {
            cell: Cell::new(10, 0)
        })
    );
    assert_eq!(
        engine.place_defender(FIREBALL, Cell::new(1, 1)),
        Err(ActionRejected::NotABuilding)
    );
    assert_eq!(
        engine.place_defender(42, Cell::new(1, 1)),
        Err(ActionRejected::UnknownCard { card_id: 42 })
    );

    let snap = engine.snapshot();
    assert_eq!(snap.defenders.len(), 1);
    assert_eq!(snap.defenders[0].element, Element::Fire);
    assert_eq!(snap.defenders[0].position, Position::new(210.0, 210.0));
    assert_eq!(snap.defenders[0].range, 100.0);
}

#[test]
fn test_queued_rejection_reported_as_event() {
    let mut engine = quiet_engine();
    engine.queue_commands([
        PlayerCommand::PlaceDefender {
            card_id: FLAME_TOWER,
            cell: Cell::new(0, 0),
        },
        PlayerCommand::PlaceDefender {
            card_id: FLAME_TOWER,
            cell: Cell::new(0, 0),
        },
    ]);

    let snap = engine.tick(FRAME_MS);
    assert_eq!(snap.defenders.len(), 1);
    assert_eq!(snap.economy.stamina, 7);
    assert!(snap.events.contains(&SimEvent::ActionRejected {
        card_id: FLAME_TOWER,
        reason: ActionRejected::CellOccupied {
            cell: Cell::new(0, 0)
        },
    }));
}

#[test]
fn test_fireball_damages_only_hostiles_in_radius() {
    let mut engine = quiet_engine();
    let inside = engine.spawn_test_hostile(Position::new(300.0, 340.0));
    let edge = engine.spawn_test_hostile(Position::new(300.0, 400.0));
    let outside = engine.spawn_test_hostile(Position::new(300.0, 100.0));

    let outcome = engine
        .use_skill(FIREBALL, Some(Position::new(300.0, 340.0)))
        .unwrap();
    assert_eq!(outcome, SkillOutcome::AreaDamage { hit: 2, killed: 0 });
    assert_eq!(hostile_health(&engine, inside), Some(50));
    assert_eq!(hostile_health(&engine, edge), Some(50));
    assert_eq!(hostile_health(&engine, outside), Some(100));
    assert_eq!(engine.economy().stamina(), 5.0);

    // Second fireball needs 5, only 5 left: allowed, then empty.
    let outcome = engine
        .use_skill(FIREBALL, Some(Position::new(300.0, 340.0)))
        .unwrap();
    assert_eq!(outcome, SkillOutcome::AreaDamage { hit: 2, killed: 2 });
    assert_eq!(engine.score().hostiles_killed, 2);
    assert_eq!(engine.roster().len(), 1);

    assert!(matches!(
        engine.use_skill(FIREBALL, None),
        Err(ActionRejected::InsufficientResource { cost: 5, .. })
    ));
}

#[test]
fn test_base_repair_restores_objective() {
    let mut engine = quiet_engine();
    engine.economy_mut().damage_objective(30);

    let outcome = engine.use_skill(BASE_REPAIR, None).unwrap();
    assert_eq!(
        outcome,
        SkillOutcome::Repaired {
            amount: 10,
            health: 80
        }
    );
    assert_eq!(engine.economy().stamina(), 8.0);

    assert_eq!(
        engine.use_skill(FLAME_TOWER, None),
        Err(ActionRejected::NotASkill)
    );
}

// ---- Terminal state ----

#[test]
fn test_objective_destruction_ends_run() {
    let mut engine = quiet_engine();
    engine.economy_mut().damage_objective(90);
    engine.spawn_test_hostile(Position::new(305.0, 300.0));

    let snap = engine.tick(FRAME_MS);
    assert_eq!(snap.phase, GamePhase::Defeated);
    assert_eq!(snap.economy.objective_health, 0);
    assert!(snap.events.contains(&SimEvent::GameOver { wave: 0 }));
    let ticks = engine.time().tick;

    let snap = engine.tick(5000.0);
    assert_eq!(engine.time().tick, ticks, "Time stops after defeat");
    assert!(snap.events.is_empty());
    assert_eq!(
        engine.place_defender(FLAME_TOWER, Cell::new(1, 1)),
        Err(ActionRejected::GameOver)
    );
}

#[test]
fn test_driver_runs_undefended_game_to_defeat() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut driver = LoopDriver::new(FixedStepClock::new(FRAME_MS), ImmediateScheduler);

    let mut last_health = 100;
    let mut sink = |snap: &GameStateSnapshot| {
        assert!(
            snap.economy.objective_health <= last_health,
            "Objective health never increases during ticks"
        );
        last_health = snap.economy.objective_health;
    };

    let summary = driver.run_until_terminal(&mut engine, &mut sink, Some(20_000));
    assert!(summary.terminated, "Undefended objective must fall");
    assert_eq!(engine.phase(), GamePhase::Defeated);
    assert_eq!(
        driver.frames_requested(),
        summary.ticks - 1,
        "The terminal tick does not schedule another frame"
    );
    assert_eq!(driver.step(&mut engine, &mut NullSink), StepOutcome::Terminated);
}

#[test]
fn test_driver_stops_at_tick_cap() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut driver = LoopDriver::new(FixedStepClock::new(FRAME_MS), ImmediateScheduler);
    let summary = driver.run_until_terminal(&mut engine, &mut NullSink, Some(10));
    assert_eq!(
        summary,
        RunSummary {
            ticks: 10,
            terminated: false
        }
    );
    assert_eq!(engine.time().tick, 10);
    assert!((engine.time().elapsed_ms - 160.0).abs() < 1e-9);
}

// ---- Invariants over a defended run ----

#[test]
fn test_invariants_hold_over_defended_run() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 7,
        ..Default::default()
    });
    engine.place_defender(FLAME_TOWER, Cell::new(4, 4)).unwrap();
    engine.place_defender(FROST_TOWER, Cell::new(5, 5)).unwrap();

    let mut driver = LoopDriver::new(FixedStepClock::new(FRAME_MS), ImmediateScheduler);
    let mut last_health = 100;
    let mut sink = |snap: &GameStateSnapshot| {
        for hostile in &snap.hostiles {
            assert!(hostile.health > 0, "Dead hostile left active: {hostile:?}");
            assert!(hostile.health <= hostile.max_health);
        }
        let live: Vec<EntityId> = snap.hostiles.iter().map(|h| h.id).collect();
        for event in &snap.events {
            if let SimEvent::Render(RenderEvent::Removed {
                id,
                cause: RemovalCause::Killed,
            }) = event
            {
                assert!(!live.contains(id), "Killed hostile {id} still listed");
            }
        }
        assert!(snap.economy.objective_health <= last_health);
        last_health = snap.economy.objective_health;
    };

    driver.run_until_terminal(&mut engine, &mut sink, Some(4_000));
    assert!(
        engine.score().hostiles_killed > 0,
        "Defenders next to the objective should kill something"
    );
}
