//! Target lifecycle: lifespan expiry, wall bouncing, random
//! direction changes, translation, heal-over-time, and damage
//! opacity. One pass per frame over every live target.

use glam::DMat2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use marksman_core::components::{Hitpoints, Target, TargetBody, TargetTimers, TargetVisual};
use marksman_core::constants::{TARGET_OPACITY_FLOOR, TARGET_OPACITY_RANGE};
use marksman_core::settings::Settings;

use crate::room::UsableRect;

/// Shared elapsed-time state for the update pass.
#[derive(Debug, Clone, Copy)]
pub struct TargetClock {
    pub prev_update_time: f64,
}

/// Advance every target by one frame.
///
/// Bounce reflection is evaluated against the current position
/// before this frame's translation (check-then-translate), and the
/// reflection is elastic: the offending velocity component has its
/// sign forced away from the exceeded bound rather than the position
/// being clamped.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut TargetClock,
    usable: Option<&UsableRect>,
    settings: &Settings,
    despawn_buffer: &mut Vec<Entity>,
    now: f64,
) {
    let elapsed = now - clock.prev_update_time;
    despawn_buffer.clear();

    for (entity, (_target, body, hitpoints, timers, visual)) in world.query_mut::<(
        &Target,
        &mut TargetBody,
        &mut Hitpoints,
        &mut TargetTimers,
        &mut TargetVisual,
    )>() {
        // Expired targets count as neither a hit nor a miss.
        if settings.target_lifespan_secs > 0.0
            && now - timers.spawned_at > settings.target_lifespan_secs
        {
            despawn_buffer.push(entity);
            continue;
        }

        if settings.target_speed > 0.0 {
            if let Some(usable) = usable {
                reflect_at_bounds(body, usable);
            }

            if settings.target_direction_change_secs > 0.0
                && settings.target_direction_change_secs < now - timers.last_turn_at
            {
                let angle = rng.gen_range(0.0..std::f64::consts::TAU);
                body.velocity = DMat2::from_angle(angle) * body.velocity;
                timers.last_turn_at = now;
            }

            body.position.x += body.velocity.x * elapsed;
            body.position.y += body.velocity.y * elapsed;
        }

        // Heal is all-or-nothing: a full interval without damage
        // restores every hitpoint at once.
        if settings.target_heal_secs > 0.0 && now - timers.last_hit_at > settings.target_heal_secs
        {
            hitpoints.current = settings.target_hitpoints;
        }

        visual.opacity = TARGET_OPACITY_FLOOR
            + TARGET_OPACITY_RANGE * f64::from(hitpoints.current)
                / f64::from(settings.target_hitpoints);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    clock.prev_update_time = now;
}

/// Reflect velocity components whose position has left the usable
/// rectangle on that axis.
fn reflect_at_bounds(body: &mut TargetBody, usable: &UsableRect) {
    if body.position.y > usable.max.y {
        body.velocity.y = -body.velocity.y.abs();
    }
    if body.position.x > usable.max.x {
        body.velocity.x = -body.velocity.x.abs();
    }
    if body.position.y < usable.min.y {
        body.velocity.y = body.velocity.y.abs();
    }
    if body.position.x < usable.min.x {
        body.velocity.x = body.velocity.x.abs();
    }
}
