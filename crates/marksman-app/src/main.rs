//! Headless demo shell: runs a short scripted session against the
//! logging renderer and prints the resulting stats.
//!
//! Usage: `marksman-app [settings.json]`

use std::path::Path;
use std::thread;
use std::time::Duration;

use marksman_core::commands::SessionCommand;
use marksman_core::enums::MoveKey;
use marksman_core::settings::Settings;
use marksman_sim::engine::EngineConfig;

use marksman_app::game_loop::{spawn_session_loop, LoopCommand};
use marksman_app::render::{LogCuePlayer, LogRenderer};
use marksman_app::settings_io;

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => match settings_io::load_settings(Path::new(&path)) {
            Ok(settings) => {
                log::info!("loaded settings from {path}");
                settings
            }
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let (tx, handle) = spawn_session_loop(
        settings,
        EngineConfig::default(),
        LogRenderer::default(),
        LogCuePlayer::default(),
    );

    // A short scripted session in place of real input devices:
    // walk forward while spraying at the wall, pause briefly, resume,
    // then end.
    let script: &[(u64, SessionCommand)] = &[
        (0, SessionCommand::Start),
        (100, SessionCommand::KeyDown {
            key: MoveKey::Forward,
        }),
        (200, SessionCommand::TriggerDown),
        (1200, SessionCommand::TriggerUp),
        (1300, SessionCommand::KeyUp {
            key: MoveKey::Forward,
        }),
        (1400, SessionCommand::Pause),
        (1900, SessionCommand::Resume),
        (2000, SessionCommand::TriggerDown),
        (2600, SessionCommand::TriggerUp),
        (2700, SessionCommand::End),
    ];

    let mut elapsed_ms = 0;
    for (at_ms, command) in script {
        thread::sleep(Duration::from_millis(at_ms - elapsed_ms));
        elapsed_ms = *at_ms;
        if tx.send(LoopCommand::Session(command.clone())).is_err() {
            break;
        }
    }

    match handle.join() {
        Ok(stats) => {
            log::info!(
                "session over: {} hits / {} shots ({}%), {} targets destroyed of {} spawned",
                stats.hits,
                stats.attempts,
                stats.accuracy_percent,
                stats.targets_destroyed,
                stats.targets_generated,
            );
        }
        Err(_) => log::error!("frame loop thread panicked"),
    }
}
