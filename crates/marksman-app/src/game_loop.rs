//! Frame-loop thread — drives the engine at the display rate and
//! hands each snapshot to the renderer.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc`; the loop exits when the
//! session ends, on Shutdown, or when the command channel closes.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use marksman_core::commands::SessionCommand;
use marksman_core::constants::FRAME_RATE;
use marksman_core::enums::SessionPhase;
use marksman_core::settings::Settings;
use marksman_core::state::StatsView;
use marksman_sim::engine::{EngineConfig, RangeEngine};

use crate::render::{CuePlayer, Renderer};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Commands accepted by the loop thread.
#[derive(Debug, Clone)]
pub enum LoopCommand {
    /// Forwarded to the engine at the next frame boundary.
    Session(SessionCommand),
    /// Stop the loop without waiting for the session to end.
    Shutdown,
}

/// Spawn the frame loop in a new thread.
///
/// Returns the command sender and a handle resolving to the final
/// session stats.
pub fn spawn_session_loop<R, C>(
    settings: Settings,
    config: EngineConfig,
    renderer: R,
    cue_player: C,
) -> (mpsc::Sender<LoopCommand>, JoinHandle<StatsView>)
where
    R: Renderer + Send + 'static,
    C: CuePlayer + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let handle = std::thread::Builder::new()
        .name("marksman-frame-loop".into())
        .spawn(move || run_session_loop(cmd_rx, settings, config, renderer, cue_player))
        .expect("Failed to spawn frame loop thread");

    (cmd_tx, handle)
}

/// The frame loop. Runs until the session ends, a Shutdown arrives,
/// or the channel disconnects. Returns the final stats.
fn run_session_loop<R, C>(
    cmd_rx: mpsc::Receiver<LoopCommand>,
    settings: Settings,
    config: EngineConfig,
    mut renderer: R,
    mut cue_player: C,
) -> StatsView
where
    R: Renderer,
    C: CuePlayer,
{
    let start = Instant::now();
    let mut engine = RangeEngine::new(settings, config, 0.0);
    let scene = engine.scene_view();
    let mut last_stats = StatsView::default();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Session(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return last_stats,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return last_stats,
            }
        }

        // 2. Advance one frame (the engine handles pause internally).
        let now = start.elapsed().as_secs_f64();
        let frame = engine.frame(now);

        // 3. Hand the frame to the audio and render seams.
        for cue in &frame.audio_cues {
            cue_player.play(*cue);
        }
        renderer.render(&scene, &frame);

        last_stats = frame.stats;
        if frame.phase == SessionPhase::Ended {
            return last_stats;
        }

        // 4. While paused, park on the channel instead of spinning:
        // no frames are scheduled until the next command arrives.
        if frame.phase == SessionPhase::Paused {
            match cmd_rx.recv() {
                Ok(LoopCommand::Session(cmd)) => {
                    engine.queue_command(cmd);
                    next_frame_time = Instant::now();
                    continue;
                }
                Ok(LoopCommand::Shutdown) | Err(_) => return last_stats,
            }
        }

        // 5. Sleep until the next frame boundary.
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral.
            next_frame_time = now;
        }
    }
}
