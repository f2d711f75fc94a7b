//! Weapon state machine: rate-of-fire gated shots and reload
//! completion. Shots are returned to the engine as rays so the hit
//! test runs as an explicit orchestration step, not a callback.

use hecs::World;

use marksman_core::components::{CameraRig, Weapon};
use marksman_core::events::AudioCue;
use marksman_core::types::Ray;

use super::locomotion;

/// Advance the weapon by one frame. Returns the ray of the shot
/// fired this frame, if any.
///
/// A due shot window is always consumed, even on an empty clip —
/// that squeeze costs the window and plays the empty-clip cue
/// instead of firing. Reload completion is checked after firing, so
/// a reload that finishes this frame arms the weapon for the next.
pub fn run(world: &mut World, now: f64, audio_cues: &mut Vec<AudioCue>) -> Option<Ray> {
    let mut shot = None;

    for (_entity, (rig, weapon)) in world.query_mut::<(&CameraRig, &mut Weapon)>() {
        if weapon.firing && !weapon.reloading {
            let shot_due = now - weapon.prev_fire_time > 1.0 / weapon.rate_of_fire;
            if shot_due {
                weapon.prev_fire_time = now;

                let no_ammo = !weapon.infinite_ammo() && weapon.rounds_in_clip == 0;
                if no_ammo {
                    audio_cues.push(AudioCue::ClipEmpty);
                } else {
                    if !weapon.infinite_ammo() {
                        weapon.rounds_in_clip -= 1;
                    }
                    shot = Some(locomotion::fire_ray(rig));
                }
            }
        }

        if weapon.reloading && now - weapon.reload_started_at >= weapon.reload_duration_secs {
            weapon.rounds_in_clip = weapon.clip_size;
            weapon.reloading = false;
        }
    }

    shot
}
