//! Pause compensation: shift every stored timestamp forward by the
//! paused duration so elapsed-time computations never see the gap.
//!
//! Timers are absolute timestamps rather than countdowns, so this
//! single fan-out keeps all of them honest: a timer that needed five
//! more seconds before the pause still needs exactly five after it.

use std::collections::VecDeque;

use hecs::World;

use marksman_core::components::{HitMarker, Locomotion, TargetTimers, Weapon};

use super::spawner::SpawnClock;
use super::target_update::TargetClock;

/// Add `delta` to every timestamp in every subsystem.
pub fn adjust(
    world: &mut World,
    spawn_clock: &mut SpawnClock,
    target_clock: &mut TargetClock,
    hit_markers: &mut VecDeque<HitMarker>,
    delta: f64,
) {
    for (_entity, locomotion) in world.query_mut::<&mut Locomotion>() {
        locomotion.prev_update_time += delta;
    }

    for (_entity, weapon) in world.query_mut::<&mut Weapon>() {
        weapon.prev_fire_time += delta;
        weapon.reload_started_at += delta;
    }

    for (_entity, timers) in world.query_mut::<&mut TargetTimers>() {
        timers.spawned_at += delta;
        timers.last_hit_at += delta;
        timers.last_turn_at += delta;
    }

    spawn_clock.prev_generate_time += delta;
    target_clock.prev_update_time += delta;

    for marker in hit_markers.iter_mut() {
        marker.spawned_at += delta;
    }
}
