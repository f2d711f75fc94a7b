//! Session engine — the core of the trainer.
//!
//! `RangeEngine` owns the hecs ECS world, the room geometry, and all
//! session state. The caller supplies monotonic timestamps to
//! `frame`; the engine never reads a clock, which is what makes a
//! session replayable and testable. Commands queue up between frames
//! and are applied at the next frame boundary, so input callbacks
//! never interleave with the update phase.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use marksman_core::commands::SessionCommand;
use marksman_core::components::{CameraRig, HitMarker, MoveState, Weapon};
use marksman_core::enums::{MoveKey, SessionPhase};
use marksman_core::events::AudioCue;
use marksman_core::settings::Settings;
use marksman_core::state::{FrameSnapshot, SceneView};
use marksman_core::stats::SessionStats;

use crate::collision::CollisionMap;
use crate::room::Room;
use crate::systems;
use crate::systems::spawner::SpawnClock;
use crate::systems::target_update::TargetClock;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// RNG seed. Same seed and same frame/command schedule produce
    /// an identical session.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The session engine. Owns the ECS world and all session state.
pub struct RangeEngine {
    world: World,
    settings: Settings,
    room: Room,
    collision: CollisionMap,
    phase: SessionPhase,
    rng: ChaCha8Rng,
    stats: SessionStats,
    spawn_clock: SpawnClock,
    target_clock: TargetClock,
    hit_markers: VecDeque<HitMarker>,
    audio_cues: Vec<AudioCue>,
    command_queue: VecDeque<SessionCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    /// Timestamp the current pause began, while paused.
    paused_at: Option<f64>,
    /// Engine clock as of the latest frame.
    time: f64,
}

impl RangeEngine {
    /// Build a session from validated settings. `now` seeds every
    /// timer so the first frame sees sane elapsed times.
    pub fn new(settings: Settings, config: EngineConfig, now: f64) -> Self {
        let room = Room::from_settings(&settings);

        let mut collision = CollisionMap::new();
        for surface in &room.obstacles {
            collision.add_obstacle(*surface);
        }

        let mut world = World::new();
        world_setup::spawn_player(&mut world, &settings, &room, now);

        Self {
            world,
            settings,
            room,
            collision,
            phase: SessionPhase::Ready,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stats: SessionStats::default(),
            spawn_clock: SpawnClock {
                prev_generate_time: now,
            },
            target_clock: TargetClock {
                prev_update_time: now,
            },
            hit_markers: VecDeque::new(),
            audio_cues: Vec::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            paused_at: None,
            time: now,
        }
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SessionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SessionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one frame and return the resulting
    /// snapshot. `now` must not go backwards between calls.
    pub fn frame(&mut self, now: f64) -> FrameSnapshot {
        self.process_commands(now);

        if self.phase == SessionPhase::Running {
            self.run_systems(now);
        }
        self.time = now;

        let audio_cues = std::mem::take(&mut self.audio_cues);
        systems::snapshot::build(
            &self.world,
            self.time,
            self.phase,
            &self.settings,
            &self.stats,
            &self.hit_markers,
            audio_cues,
        )
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Get the session stats.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Static scene description for the renderer, valid for the whole
    /// session.
    pub fn scene_view(&self) -> SceneView {
        self.room.scene_view()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Point the camera at a world position (for tests aiming at
    /// randomly spawned targets).
    #[cfg(test)]
    pub fn aim_at(&mut self, point: glam::DVec3) {
        for (_entity, rig) in self.world.query_mut::<&mut CameraRig>() {
            let to = (point - rig.position).normalize();
            rig.yaw = (-to.x).atan2(-to.z);
            rig.pitch = to.y.asin();
        }
    }

    /// Number of live hit markers.
    #[cfg(test)]
    pub fn hit_marker_count(&self) -> usize {
        self.hit_markers.len()
    }

    /// Process all queued commands.
    fn process_commands(&mut self, now: f64) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command, now);
        }
    }

    /// Handle a single command.
    ///
    /// Press-type input (pointer motion, key down, trigger down) is
    /// honored only while running. Release-type input (key up,
    /// trigger up) always clears its flag, so nothing stays held
    /// across a pause.
    fn handle_command(&mut self, command: SessionCommand, now: f64) {
        match command {
            SessionCommand::Start => {
                if self.phase == SessionPhase::Ready {
                    self.phase = SessionPhase::Running;
                }
            }
            SessionCommand::Pause => {
                if self.phase == SessionPhase::Running {
                    self.phase = SessionPhase::Paused;
                    self.paused_at = Some(now);
                }
            }
            SessionCommand::Resume => {
                if self.phase == SessionPhase::Paused {
                    self.phase = SessionPhase::Running;
                    if let Some(paused_at) = self.paused_at.take() {
                        let delta = now - paused_at;
                        systems::timers::adjust(
                            &mut self.world,
                            &mut self.spawn_clock,
                            &mut self.target_clock,
                            &mut self.hit_markers,
                            delta,
                        );
                    }
                }
            }
            SessionCommand::End => {
                if self.phase != SessionPhase::Ended {
                    self.dispose();
                    self.phase = SessionPhase::Ended;
                }
            }
            SessionCommand::PointerDelta { dx, dy } => {
                if self.phase == SessionPhase::Running {
                    for (_entity, rig) in self.world.query_mut::<&mut CameraRig>() {
                        rig.yaw -= dx * rig.sens_multiplier;
                        rig.pitch = (rig.pitch - dy * rig.sens_multiplier)
                            .clamp(-std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
                    }
                }
            }
            SessionCommand::KeyDown { key } => {
                if self.phase == SessionPhase::Running {
                    self.set_move_key(key, true);
                }
            }
            SessionCommand::KeyUp { key } => {
                self.set_move_key(key, false);
            }
            SessionCommand::TriggerDown => {
                if self.phase == SessionPhase::Running {
                    for (_entity, weapon) in self.world.query_mut::<&mut Weapon>() {
                        let cant_fire = !weapon.infinite_ammo()
                            && (weapon.reloading || weapon.rounds_in_clip == 0);
                        if !cant_fire {
                            weapon.firing = true;
                        }
                    }
                }
            }
            SessionCommand::TriggerUp => {
                let running = self.phase == SessionPhase::Running;
                for (_entity, weapon) in self.world.query_mut::<&mut Weapon>() {
                    weapon.firing = false;
                    // Releasing on a dry clip starts the reload.
                    if running
                        && !weapon.infinite_ammo()
                        && !weapon.reloading
                        && weapon.rounds_in_clip == 0
                    {
                        weapon.reloading = true;
                        weapon.reload_started_at = now;
                    }
                }
            }
            SessionCommand::Reload => {
                if self.phase == SessionPhase::Running {
                    for (_entity, weapon) in self.world.query_mut::<&mut Weapon>() {
                        if weapon.infinite_ammo()
                            || weapon.reloading
                            || weapon.rounds_in_clip == weapon.clip_size
                        {
                            continue;
                        }
                        weapon.reloading = true;
                        weapon.reload_started_at = now;
                    }
                }
            }
        }
    }

    fn set_move_key(&mut self, key: MoveKey, held: bool) {
        for (_entity, move_state) in self.world.query_mut::<&mut MoveState>() {
            match key {
                MoveKey::Forward => move_state.forward = held,
                MoveKey::Left => move_state.left = held,
                MoveKey::Back => move_state.back = held,
                MoveKey::Right => move_state.right = held,
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, now: f64) {
        // 1. Player movement, gated by the collision map.
        systems::locomotion::run(&mut self.world, &self.collision, now);
        // 2. Target spawning.
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            self.room.usable.as_ref(),
            &self.settings,
            &mut self.stats,
            now,
        );
        // 3. Target movement, healing, expiry, opacity.
        systems::target_update::run(
            &mut self.world,
            &mut self.rng,
            &mut self.target_clock,
            self.room.usable.as_ref(),
            &self.settings,
            &mut self.despawn_buffer,
            now,
        );
        // 4. Hit-marker expiry.
        systems::markers::run(&mut self.hit_markers, self.settings.hit_marker_secs, now);
        // 5. Weapon state machine; 6. hit test for any shot fired.
        if let Some(ray) = systems::firing::run(&mut self.world, now, &mut self.audio_cues) {
            systems::hit_test::run(
                &mut self.world,
                &ray,
                &self.room.target_wall,
                &self.settings,
                &mut self.stats,
                &mut self.hit_markers,
                &mut self.audio_cues,
                now,
            );
        }
    }

    /// Release everything the session owns. Safe to call more than
    /// once; `End` after `End` is a no-op.
    fn dispose(&mut self) {
        self.world.clear();
        self.hit_markers.clear();
        self.audio_cues.clear();
        self.collision.clear();
    }
}
