//! Hit-marker expiry. Markers are pushed in spawn order, so only the
//! queue front ever needs checking.

use std::collections::VecDeque;

use marksman_core::components::HitMarker;

/// Drop markers older than the display duration, oldest first.
pub fn run(hit_markers: &mut VecDeque<HitMarker>, duration_secs: f64, now: f64) {
    if duration_secs <= 0.0 {
        return;
    }
    while let Some(front) = hit_markers.front() {
        if now - front.spawned_at > duration_secs {
            hit_markers.pop_front();
        } else {
            break;
        }
    }
}
