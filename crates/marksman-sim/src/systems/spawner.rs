//! Target spawning: interval- and cap-gated placement of fresh
//! targets at uniformly random points on the usable wall area.

use glam::{DVec2, DVec3};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use marksman_core::components::{Hitpoints, Target, TargetBody, TargetTimers, TargetVisual};
use marksman_core::constants::TARGET_WALL_OFFSET;
use marksman_core::settings::Settings;
use marksman_core::stats::SessionStats;

use crate::room::UsableRect;

/// Spawn pacing state.
#[derive(Debug, Clone, Copy)]
pub struct SpawnClock {
    /// Timestamp of the last spawn (or last frame spent at the cap).
    pub prev_generate_time: f64,
}

/// Spawn at most one target this frame.
///
/// While the population sits at the cap the clock is reset every
/// frame, so a freed slot waits a full interval instead of being
/// filled in a burst. A degenerate usable rectangle blocks spawning
/// for the whole session.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    usable: Option<&UsableRect>,
    settings: &Settings,
    stats: &mut SessionStats,
    now: f64,
) {
    let not_due = now - clock.prev_generate_time < settings.target_interval_secs;
    let live = world.query_mut::<&Target>().into_iter().count();
    let max_reached = live >= settings.max_targets;

    if max_reached {
        clock.prev_generate_time = now;
    }
    if not_due || max_reached {
        return;
    }
    let Some(usable) = usable else {
        return;
    };

    let position = DVec3::new(
        rng.gen_range(usable.min.x..usable.max.x),
        rng.gen_range(usable.min.y..usable.max.y),
        usable.wall_z + TARGET_WALL_OFFSET,
    );

    let velocity = if settings.target_speed > 0.0 {
        // In-plane up vector spun by a uniformly random angle.
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        DVec2::new(-angle.sin(), angle.cos()) * settings.target_speed
    } else {
        DVec2::ZERO
    };

    world.spawn((
        Target,
        TargetBody {
            position,
            velocity,
            radius: settings.target_size,
        },
        Hitpoints {
            current: settings.target_hitpoints,
        },
        TargetTimers {
            spawned_at: now,
            last_hit_at: now,
            last_turn_at: now,
        },
        TargetVisual { opacity: 1.0 },
    ));

    clock.prev_generate_time = now;
    stats.targets_generated += 1;
}
