//! Tests for the session engine: spawning, movement, firing, damage,
//! healing, pause/resume timer exactness, and teardown.

use glam::DVec3;

use marksman_core::commands::SessionCommand;
use marksman_core::components::{Target, Weapon};
use marksman_core::constants::TARGET_WALL_OFFSET;
use marksman_core::enums::{MoveKey, SessionPhase};
use marksman_core::events::AudioCue;
use marksman_core::settings::Settings;
use marksman_core::state::FrameSnapshot;

use crate::engine::{EngineConfig, RangeEngine};

/// Engine started at t=0 with the given settings.
fn start_engine(settings: Settings) -> RangeEngine {
    let mut engine = RangeEngine::new(settings, EngineConfig::default(), 0.0);
    engine.queue_command(SessionCommand::Start);
    engine.frame(0.0);
    engine
}

fn live_targets(engine: &RangeEngine) -> usize {
    let mut query = engine.world().query::<&Target>();
    query.iter().count()
}

fn weapon(engine: &RangeEngine) -> Weapon {
    let mut query = engine.world().query::<&Weapon>();
    let (_entity, weapon) = query.iter().next().expect("player weapon");
    *weapon
}

fn first_target_position(snapshot: &FrameSnapshot) -> DVec3 {
    snapshot.targets.first().expect("a live target").position
}

/// Hold the trigger on a target through one firing frame.
fn shoot_at(engine: &mut RangeEngine, point: DVec3, now: f64) -> FrameSnapshot {
    engine.aim_at(point);
    engine.queue_command(SessionCommand::TriggerDown);
    let snapshot = engine.frame(now);
    engine.queue_command(SessionCommand::TriggerUp);
    snapshot
}

// ---- Spawning ----

#[test]
fn test_target_spawns_after_interval() {
    let mut engine = start_engine(Settings::default());

    let snap = engine.frame(0.4);
    assert!(snap.targets.is_empty(), "not due before the interval");

    let snap = engine.frame(0.5);
    assert_eq!(snap.targets.len(), 1);
    assert_eq!(snap.stats.targets_generated, 1);
}

#[test]
fn test_spawn_positions_stay_on_usable_rect() {
    let settings = Settings::default();
    let mut engine = start_engine(settings.clone());

    for i in 1..=40 {
        engine.frame(i as f64 * 0.5);
    }
    let snap = engine.frame(21.0);
    assert!(!snap.targets.is_empty());

    let room = crate::room::Room::from_settings(&settings);
    let usable = room.usable.expect("default settings leave a spawn area");
    for target in &snap.targets {
        assert!(target.position.x >= usable.min.x && target.position.x <= usable.max.x);
        assert!(target.position.y >= usable.min.y && target.position.y <= usable.max.y);
        assert!((target.position.z - (usable.wall_z + TARGET_WALL_OFFSET)).abs() < 1e-9);
    }
}

#[test]
fn test_population_cap_holds() {
    let settings = Settings {
        max_targets: 2,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    for i in 1..=20 {
        let snap = engine.frame(i as f64 * 0.5);
        assert!(snap.targets.len() <= 2);
    }
    assert_eq!(live_targets(&engine), 2);
}

#[test]
fn test_no_spawn_burst_after_slot_frees() {
    let settings = Settings {
        max_targets: 1,
        target_hitpoints: 1,
        target_heal_secs: 0.0,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    // Fill the single slot, then sit at the cap for a while.
    let snap = engine.frame(0.5);
    assert_eq!(snap.targets.len(), 1);
    for i in 0..10 {
        engine.frame(0.6 + i as f64 * 0.1);
    }

    // Destroy it; the spawn clock was reset every capped frame, so
    // the empty slot must wait a full interval.
    let target = first_target_position(&engine.frame(1.7));
    let snap = shoot_at(&mut engine, target, 1.8);
    assert!(snap.targets.is_empty());

    let snap = engine.frame(1.9);
    assert!(snap.targets.is_empty(), "no burst right after the kill");
    let snap = engine.frame(2.3);
    assert_eq!(snap.targets.len(), 1, "spawn a full interval later");
}

#[test]
fn test_degenerate_usable_rect_never_spawns() {
    let settings = Settings {
        // Radius larger than the wall: the inset rectangle collapses.
        target_size: 1e6,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    for i in 1..=40 {
        engine.frame(i as f64 * 0.5);
    }
    let snap = engine.frame(25.0);
    assert!(snap.targets.is_empty());
    assert_eq!(snap.stats.targets_generated, 0);
}

// ---- Target lifecycle ----

#[test]
fn test_lifespan_expiry_boundary() {
    let settings = Settings {
        target_lifespan_secs: 3.0,
        max_targets: 1,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    let snap = engine.frame(0.5);
    assert_eq!(snap.targets.len(), 1, "spawned at t=0.5");

    let snap = engine.frame(3.499);
    assert_eq!(snap.targets.len(), 1, "still alive just under the lifespan");

    let snap = engine.frame(3.501);
    assert!(snap.targets.is_empty(), "expired just past the lifespan");
    // Expiry is neither a hit nor a miss.
    assert_eq!(snap.stats.attempts, 0);
    assert_eq!(snap.stats.targets_destroyed, 0);
}

#[test]
fn test_moving_targets_stay_near_usable_rect() {
    let settings = Settings {
        target_speed: 500.0,
        max_targets: 3,
        ..Default::default()
    };
    let mut engine = start_engine(settings.clone());

    let room = crate::room::Room::from_settings(&settings);
    let usable = room.usable.unwrap();
    // Check-then-translate lets a target overshoot the bound by at
    // most one frame of travel before the reflection pulls it back.
    let slack = settings.target_speed * 0.05 + 1e-9;

    for i in 1..=200 {
        let snap = engine.frame(i as f64 * 0.05);
        for target in &snap.targets {
            assert!(target.position.x >= usable.min.x - slack);
            assert!(target.position.x <= usable.max.x + slack);
            assert!(target.position.y >= usable.min.y - slack);
            assert!(target.position.y <= usable.max.y + slack);
        }
    }
}

#[test]
fn test_stationary_targets_do_not_move() {
    let mut engine = start_engine(Settings::default());

    let before = first_target_position(&engine.frame(0.5));
    let after = first_target_position(&engine.frame(2.0));
    assert!((before - after).length() < 1e-12);
}

// ---- Damage, healing, opacity ----

#[test]
fn test_two_hits_leave_partial_hitpoints_and_opacity() {
    let settings = Settings {
        target_hitpoints: 3,
        target_heal_secs: 0.0,
        max_targets: 1,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    let target = first_target_position(&engine.frame(0.5));

    let snap = shoot_at(&mut engine, target, 0.7);
    assert_eq!(snap.targets[0].hitpoints, 2);

    let snap = shoot_at(&mut engine, target, 0.9);
    assert_eq!(snap.targets[0].hitpoints, 1);
    assert_eq!(snap.stats.hits, 2);

    // Opacity follows on the next update tick.
    let snap = engine.frame(0.95);
    let expected = 0.2 + 0.8 * (1.0 / 3.0);
    assert!((snap.targets[0].opacity - expected).abs() < 1e-9);
}

#[test]
fn test_destroyed_target_removed_same_frame() {
    let settings = Settings {
        target_hitpoints: 1,
        max_targets: 1,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    let target = first_target_position(&engine.frame(0.5));
    let snap = shoot_at(&mut engine, target, 0.7);

    assert!(snap.targets.is_empty(), "zero hitpoints leaves immediately");
    assert_eq!(snap.stats.targets_destroyed, 1);
    assert_eq!(snap.stats.hits, 1);
    assert!(snap.audio_cues.contains(&AudioCue::Hit));
}

#[test]
fn test_heal_restores_full_hitpoints_after_quiet_interval() {
    let settings = Settings {
        target_hitpoints: 3,
        target_heal_secs: 1.0,
        max_targets: 1,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    let target = first_target_position(&engine.frame(0.5));
    let snap = shoot_at(&mut engine, target, 0.7);
    assert_eq!(snap.targets[0].hitpoints, 2);

    // Not yet: the quiet interval is measured from the last hit.
    let snap = engine.frame(1.65);
    assert_eq!(snap.targets[0].hitpoints, 2);

    // Heal is all-or-nothing.
    let snap = engine.frame(1.75);
    assert_eq!(snap.targets[0].hitpoints, 3);
}

// ---- Hit testing and stats ----

#[test]
fn test_attempts_split_into_hits_and_misses() {
    let settings = Settings {
        max_targets: 1,
        target_heal_secs: 0.0,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    let target = first_target_position(&engine.frame(0.5));

    let mut misses = 0;
    let mut count_cues = |snap: &FrameSnapshot| {
        misses += snap
            .audio_cues
            .iter()
            .filter(|cue| **cue == AudioCue::Miss)
            .count() as u32;
    };

    // Two hits.
    let snap = shoot_at(&mut engine, target, 0.7);
    count_cues(&snap);
    let snap = shoot_at(&mut engine, target, 0.9);
    count_cues(&snap);
    assert_eq!(snap.stats.current_hit_streak, 2);

    // One shot far above the wall top: guaranteed to hit nothing.
    engine.aim_at(DVec3::new(0.0, 50_000.0, -1_637.5));
    engine.queue_command(SessionCommand::TriggerDown);
    let snap = engine.frame(1.1);
    engine.queue_command(SessionCommand::TriggerUp);
    count_cues(&snap);

    assert_eq!(snap.stats.attempts, 3);
    assert_eq!(snap.stats.hits, 2);
    assert_eq!(misses, 1);
    assert_eq!(snap.stats.attempts, snap.stats.hits + misses);
    assert_eq!(snap.stats.current_hit_streak, 0, "a miss resets the streak");
}

#[test]
fn test_miss_against_wall_still_drops_marker() {
    let mut engine = start_engine(Settings::default());

    // Straight ahead: nothing spawned yet, so only the wall is hit.
    engine.queue_command(SessionCommand::TriggerDown);
    let snap = engine.frame(0.2);
    engine.queue_command(SessionCommand::TriggerUp);

    assert!(snap.targets.is_empty());
    assert_eq!(snap.hit_markers.len(), 1);
    assert!(snap.audio_cues.contains(&AudioCue::Miss));
}

#[test]
fn test_hit_markers_expire_oldest_first() {
    let mut engine = start_engine(Settings::default());

    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(0.2);
    engine.queue_command(SessionCommand::TriggerUp);
    engine.frame(0.25);

    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(0.4);
    engine.queue_command(SessionCommand::TriggerUp);

    assert_eq!(engine.hit_marker_count(), 2);

    // Default duration is 0.35s: the first marker (t=0.2) expires
    // past 0.55, the second (t=0.4) past 0.75.
    engine.frame(0.6);
    assert_eq!(engine.hit_marker_count(), 1);
    engine.frame(0.8);
    assert_eq!(engine.hit_marker_count(), 0);
}

#[test]
fn test_markers_disabled_when_duration_zero() {
    let settings = Settings {
        hit_marker_secs: 0.0,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    engine.queue_command(SessionCommand::TriggerDown);
    let snap = engine.frame(0.2);
    assert!(snap.hit_markers.is_empty());
}

// ---- Firing controller ----

#[test]
fn test_rate_of_fire_paces_shots() {
    let settings = Settings {
        rate_of_fire: 2.0,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    engine.queue_command(SessionCommand::TriggerDown);
    let snap = engine.frame(1.0);
    assert_eq!(snap.stats.attempts, 1);

    // Held through a window shorter than 1/rate: no second shot.
    let snap = engine.frame(1.3);
    assert_eq!(snap.stats.attempts, 1);

    let snap = engine.frame(1.6);
    assert_eq!(snap.stats.attempts, 2);
}

#[test]
fn test_empty_clip_never_goes_negative_and_never_fires() {
    let settings = Settings {
        clip_size: 2,
        rate_of_fire: 2.0,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(1.0);
    engine.frame(1.6);
    assert_eq!(weapon(&engine).rounds_in_clip, 0);

    // Still holding: the dry squeeze costs the window but no shot.
    let snap = engine.frame(2.2);
    assert_eq!(snap.stats.attempts, 2);
    assert_eq!(weapon(&engine).rounds_in_clip, 0);
    assert!(snap.audio_cues.contains(&AudioCue::ClipEmpty));
}

#[test]
fn test_single_round_clip_auto_reload_cycle() {
    let settings = Settings {
        clip_size: 1,
        rate_of_fire: 2.0,
        reload_duration_secs: 0.5,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    // One immediately eligible shot empties the clip.
    engine.queue_command(SessionCommand::TriggerDown);
    let snap = engine.frame(1.0);
    assert_eq!(snap.stats.attempts, 1);
    assert_eq!(snap.ammo.rounds_in_clip, 0);
    assert!(!snap.ammo.reloading);

    // Release on the dry clip starts the reload.
    engine.queue_command(SessionCommand::TriggerUp);
    let snap = engine.frame(1.1);
    assert!(snap.ammo.reloading);

    let snap = engine.frame(1.5);
    assert!(snap.ammo.reloading, "reload still in progress");

    let snap = engine.frame(1.61);
    assert!(!snap.ammo.reloading);
    assert_eq!(snap.ammo.rounds_in_clip, 1);
}

#[test]
fn test_trigger_during_reload_is_ignored() {
    let settings = Settings {
        clip_size: 1,
        rate_of_fire: 4.0,
        reload_duration_secs: 1.0,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(1.0);
    engine.queue_command(SessionCommand::TriggerUp);
    engine.frame(1.1);

    // Press while reloading: never latched.
    engine.queue_command(SessionCommand::TriggerDown);
    let snap = engine.frame(1.5);
    assert!(snap.ammo.reloading);
    assert!(!weapon(&engine).firing);

    let snap = engine.frame(3.0);
    assert_eq!(snap.stats.attempts, 1, "no shot from the swallowed press");
}

#[test]
fn test_explicit_reload_ignored_when_full_or_infinite() {
    let settings = Settings {
        clip_size: 5,
        ..Default::default()
    };
    let mut engine = start_engine(settings);
    engine.queue_command(SessionCommand::Reload);
    engine.frame(0.5);
    assert!(!weapon(&engine).reloading, "full clip has nothing to reload");

    let mut engine = start_engine(Settings::default());
    engine.queue_command(SessionCommand::Reload);
    engine.frame(0.5);
    assert!(!weapon(&engine).reloading, "infinite ammo never reloads");
}

#[test]
fn test_explicit_reload_refills_partial_clip() {
    let settings = Settings {
        clip_size: 3,
        rate_of_fire: 2.0,
        reload_duration_secs: 0.5,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(1.0);
    engine.queue_command(SessionCommand::TriggerUp);
    engine.frame(1.1);
    assert_eq!(weapon(&engine).rounds_in_clip, 2);

    engine.queue_command(SessionCommand::Reload);
    engine.frame(1.2);
    assert!(weapon(&engine).reloading);
    let snap = engine.frame(1.8);
    assert_eq!(snap.ammo.rounds_in_clip, 3);
}

#[test]
fn test_infinite_ammo_skips_clip_accounting() {
    let mut engine = start_engine(Settings::default());

    engine.queue_command(SessionCommand::TriggerDown);
    for i in 0..20 {
        engine.frame(1.0 + i as f64 * 0.2);
    }
    let snap = engine.frame(6.0);
    assert!(snap.ammo.infinite_ammo);
    assert_eq!(snap.ammo.rounds_in_clip, 0);
    assert!(!snap.ammo.reloading);
    assert!(snap.stats.attempts > 10);
}

// ---- Movement ----

#[test]
fn test_diagonal_speed_equals_axial_speed() {
    let dt = 0.1;

    let mut axial = start_engine(Settings::default());
    axial.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Forward,
    });
    let before = axial.frame(0.4).camera.position;
    let after = axial.frame(0.4 + dt).camera.position;
    let axial_distance = (after - before).length();

    let mut diagonal = start_engine(Settings::default());
    diagonal.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Forward,
    });
    diagonal.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Right,
    });
    let before = diagonal.frame(0.4).camera.position;
    let after = diagonal.frame(0.4 + dt).camera.position;
    let diagonal_distance = (after - before).length();

    let expected = Settings::default().movespeed * dt;
    assert!((axial_distance - expected).abs() < 1e-9);
    assert!((diagonal_distance - expected).abs() < 1e-9);
}

#[test]
fn test_opposing_keys_cancel() {
    let mut engine = start_engine(Settings::default());
    engine.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Forward,
    });
    engine.queue_command(SessionCommand::KeyDown { key: MoveKey::Back });

    let before = engine.frame(0.1).camera.position;
    let after = engine.frame(0.3).camera.position;
    assert!((after - before).length() < 1e-12);
}

#[test]
fn test_blocked_forward_leaves_pure_strafe() {
    let settings = Settings::default();
    let movespeed = settings.movespeed;
    let mut engine = start_engine(settings);

    // March up to the target wall: one long frame ends the player
    // about 30 units short of it, inside the collision clearance.
    engine.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Forward,
    });
    let start = engine.frame(0.0001).camera.position;
    let near_wall = engine.frame(0.0001 + 2970.0 / movespeed).camera.position;
    assert!((start.z - near_wall.z - 2970.0).abs() < 1e-6);

    // Forward is now blocked; forward+right must resolve to pure
    // right, not a blend.
    engine.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Right,
    });
    let before = engine.frame(5.5).camera.position;
    let after = engine.frame(5.6).camera.position;
    let delta = after - before;

    assert!((delta.z).abs() < 1e-9, "no forward component while blocked");
    assert!((delta.x - movespeed * 0.1).abs() < 1e-9, "full strafe speed");
}

#[test]
fn test_pointer_look_clamps_pitch() {
    let mut engine = start_engine(Settings::default());

    // Drag far past vertical.
    engine.queue_command(SessionCommand::PointerDelta {
        dx: 0.0,
        dy: -1e6,
    });
    let snap = engine.frame(0.1);
    assert!((snap.camera.pitch - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    // Yaw is unbounded.
    engine.queue_command(SessionCommand::PointerDelta { dx: -1e6, dy: 0.0 });
    let snap = engine.frame(0.2);
    assert!(snap.camera.yaw > std::f64::consts::TAU);
}

// ---- Pause / resume ----

#[test]
fn test_pause_freezes_simulation() {
    let mut engine = start_engine(Settings::default());
    engine.frame(0.5);

    engine.queue_command(SessionCommand::Pause);
    let frozen = engine.frame(0.7);
    assert_eq!(frozen.phase, SessionPhase::Paused);

    let later = engine.frame(60.0);
    assert_eq!(later.targets.len(), frozen.targets.len());
    assert_eq!(later.stats, frozen.stats);
}

#[test]
fn test_pause_ignores_presses_but_honors_releases() {
    let mut engine = start_engine(Settings::default());
    engine.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Forward,
    });
    engine.frame(0.1);

    engine.queue_command(SessionCommand::Pause);
    engine.frame(0.2);

    // Release while paused must not be lost.
    engine.queue_command(SessionCommand::KeyUp {
        key: MoveKey::Forward,
    });
    // Presses while paused are ignored.
    engine.queue_command(SessionCommand::KeyDown { key: MoveKey::Left });
    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(0.3);

    engine.queue_command(SessionCommand::Resume);
    let before = engine.frame(10.3).camera.position;
    let after = engine.frame(10.5).camera.position;
    assert!((after - before).length() < 1e-12, "nothing held after resume");
    assert_eq!(engine.frame(10.6).stats.attempts, 0);
}

#[test]
fn test_resume_shifts_heal_timer_exactly() {
    let settings = Settings {
        target_hitpoints: 3,
        target_heal_secs: 1.0,
        max_targets: 1,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    let target = first_target_position(&engine.frame(0.5));
    let snap = shoot_at(&mut engine, target, 0.7);
    assert_eq!(snap.targets[0].hitpoints, 2);

    // Pause at 1.2: the heal needed 0.5s more.
    engine.queue_command(SessionCommand::Pause);
    engine.frame(1.2);
    engine.queue_command(SessionCommand::Resume);
    engine.frame(11.2);

    // 0.45s after resume: still 0.05s short.
    let snap = engine.frame(11.65);
    assert_eq!(snap.targets[0].hitpoints, 2, "heal must not fire early");

    // 0.55s after resume: due.
    let snap = engine.frame(11.75);
    assert_eq!(snap.targets[0].hitpoints, 3);
}

#[test]
fn test_resume_preserves_movement_distance() {
    let mut engine = start_engine(Settings::default());
    engine.queue_command(SessionCommand::KeyDown {
        key: MoveKey::Forward,
    });

    let origin = engine.frame(0.0).camera.position;
    for i in 1..=4 {
        engine.frame(i as f64 * 0.1);
    }
    engine.queue_command(SessionCommand::Pause);
    engine.frame(0.5);
    engine.queue_command(SessionCommand::Resume);
    engine.frame(10.5);
    let after = engine.frame(10.6).camera.position;

    // Six active 0.1s frames of travel; the 10s pause contributes
    // nothing.
    let expected = Settings::default().movespeed * 0.6;
    assert!(((origin - after).length() - expected).abs() < 1e-6);
}

#[test]
fn test_resume_shifts_spawn_clock() {
    let mut engine = start_engine(Settings::default());
    let snap = engine.frame(0.5);
    assert_eq!(snap.targets.len(), 1);

    // Pause across a long gap. With the spawn clock shifted, the
    // resume frame sits only 0.2s into the interval; without the
    // shift the 100s gap would read as overdue and spawn at once.
    engine.queue_command(SessionCommand::Pause);
    engine.frame(0.7);
    engine.queue_command(SessionCommand::Resume);
    let snap = engine.frame(100.7);
    assert_eq!(snap.targets.len(), 1, "the pause gap spawned nothing");

    let snap = engine.frame(101.0);
    assert_eq!(snap.targets.len(), 2, "cadence resumes a full interval on");
}

#[test]
fn test_resume_shifts_reload_timer() {
    let settings = Settings {
        clip_size: 1,
        rate_of_fire: 2.0,
        reload_duration_secs: 1.0,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(1.0);
    engine.queue_command(SessionCommand::TriggerUp);
    engine.frame(1.1);

    // Pause halfway through the reload.
    engine.queue_command(SessionCommand::Pause);
    engine.frame(1.6);
    engine.queue_command(SessionCommand::Resume);

    let snap = engine.frame(51.6);
    assert!(snap.ammo.reloading, "half the reload still remains");

    let snap = engine.frame(52.15);
    assert!(!snap.ammo.reloading);
    assert_eq!(snap.ammo.rounds_in_clip, 1);
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let settings = Settings {
        target_speed: 300.0,
        target_direction_change_secs: 0.3,
        max_targets: 4,
        ..Default::default()
    };
    let config = EngineConfig { seed: 12345 };

    let mut engine_a = RangeEngine::new(settings.clone(), config, 0.0);
    let mut engine_b = RangeEngine::new(settings, config, 0.0);
    engine_a.queue_command(SessionCommand::Start);
    engine_b.queue_command(SessionCommand::Start);

    for i in 0..300 {
        let now = i as f64 * 0.02;
        let snap_a = engine_a.frame(now);
        let snap_b = engine_b.frame(now);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with the same seed");
    }
}

#[test]
fn test_determinism_different_seeds_diverge() {
    let settings = Settings {
        target_speed: 300.0,
        ..Default::default()
    };
    let mut engine_a = RangeEngine::new(settings.clone(), EngineConfig { seed: 111 }, 0.0);
    let mut engine_b = RangeEngine::new(settings, EngineConfig { seed: 222 }, 0.0);
    engine_a.queue_command(SessionCommand::Start);
    engine_b.queue_command(SessionCommand::Start);

    let mut diverged = false;
    for i in 0..100 {
        let now = i as f64 * 0.02;
        let json_a = serde_json::to_string(&engine_a.frame(now)).unwrap();
        let json_b = serde_json::to_string(&engine_b.frame(now)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "different seeds should place targets differently");
}

// ---- Session lifecycle ----

#[test]
fn test_start_only_from_ready() {
    let mut engine = RangeEngine::new(Settings::default(), EngineConfig::default(), 0.0);
    assert_eq!(engine.phase(), SessionPhase::Ready);

    let snap = engine.frame(0.1);
    assert_eq!(snap.phase, SessionPhase::Ready, "no update before Start");

    engine.queue_command(SessionCommand::Start);
    let snap = engine.frame(0.2);
    assert_eq!(snap.phase, SessionPhase::Running);
}

#[test]
fn test_end_clears_session_and_is_idempotent() {
    let mut engine = start_engine(Settings::default());
    engine.frame(0.5);
    engine.queue_command(SessionCommand::TriggerDown);
    engine.frame(0.7);
    assert!(engine.hit_marker_count() > 0);

    engine.queue_command(SessionCommand::End);
    let snap = engine.frame(1.0);
    assert_eq!(snap.phase, SessionPhase::Ended);
    assert!(snap.targets.is_empty());
    assert!(snap.hit_markers.is_empty());
    assert_eq!(live_targets(&engine), 0);

    // Ending twice is a no-op, and an ended session stays ended.
    engine.queue_command(SessionCommand::End);
    engine.queue_command(SessionCommand::Start);
    let snap = engine.frame(1.5);
    assert_eq!(snap.phase, SessionPhase::Ended);
}

#[test]
fn test_stats_survive_until_end() {
    let settings = Settings {
        target_hitpoints: 1,
        max_targets: 1,
        ..Default::default()
    };
    let mut engine = start_engine(settings);

    let target = first_target_position(&engine.frame(0.5));
    shoot_at(&mut engine, target, 0.7);

    engine.queue_command(SessionCommand::Pause);
    let snap = engine.frame(1.0);
    assert_eq!(snap.stats.hits, 1);
    assert_eq!(snap.stats.targets_destroyed, 1);
    assert_eq!(snap.stats.accuracy_percent, 100);
}
