//! Frame snapshot builder: the read-only view of the session handed
//! to the renderer after the update phase.

use std::collections::VecDeque;

use hecs::World;

use marksman_core::components::{
    CameraRig, HitMarker, Hitpoints, Target, TargetBody, TargetVisual, Weapon,
};
use marksman_core::constants::HIT_MARKER_COLOR;
use marksman_core::enums::SessionPhase;
use marksman_core::events::AudioCue;
use marksman_core::settings::Settings;
use marksman_core::state::{AmmoView, CameraView, FrameSnapshot, HitMarkerView, TargetView};
use marksman_core::stats::SessionStats;

use super::locomotion;

/// Build the snapshot for one frame. `audio_cues` is the drained
/// accumulator for this frame; ownership moves into the snapshot.
pub fn build(
    world: &World,
    time: f64,
    phase: SessionPhase,
    settings: &Settings,
    stats: &SessionStats,
    hit_markers: &VecDeque<HitMarker>,
    audio_cues: Vec<AudioCue>,
) -> FrameSnapshot {
    let camera = {
        let mut query = world.query::<&CameraRig>();
        query
            .iter()
            .next()
            .map(|(_, rig)| CameraView {
                position: rig.position,
                yaw: rig.yaw,
                pitch: rig.pitch,
                direction: locomotion::aim_direction(rig),
            })
            .unwrap_or_default()
    };

    let ammo = {
        let mut query = world.query::<&Weapon>();
        query
            .iter()
            .next()
            .map(|(_, weapon)| AmmoView {
                clip_size: weapon.clip_size,
                rounds_in_clip: weapon.rounds_in_clip,
                reloading: weapon.reloading,
                infinite_ammo: weapon.infinite_ammo(),
            })
            .unwrap_or_default()
    };

    let mut targets = Vec::new();
    let mut target_query = world.query::<(&Target, &TargetBody, &Hitpoints, &TargetVisual)>();
    for (_entity, (_target, body, hitpoints, visual)) in target_query.iter() {
        targets.push(TargetView {
            position: body.position,
            radius: body.radius,
            hitpoints: hitpoints.current,
            opacity: visual.opacity,
            color: settings.target_color,
        });
    }

    let markers = hit_markers
        .iter()
        .map(|marker| HitMarkerView {
            position: marker.position,
            size: settings.hit_marker_size,
            color: HIT_MARKER_COLOR,
        })
        .collect();

    FrameSnapshot {
        time,
        phase,
        camera,
        targets,
        hit_markers: markers,
        ammo,
        stats: stats_view(stats),
        audio_cues,
    }
}

fn stats_view(stats: &SessionStats) -> marksman_core::state::StatsView {
    marksman_core::state::StatsView {
        hits: stats.hits,
        attempts: stats.attempts,
        accuracy_percent: stats.accuracy_percent(),
        targets_destroyed: stats.targets_destroyed,
        targets_generated: stats.targets_generated,
        current_hit_streak: stats.current_hit_streak,
    }
}
