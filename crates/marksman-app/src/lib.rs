//! Process shell for the marksman trainer: the frame-loop thread,
//! renderer/audio seams, and settings persistence.

pub mod game_loop;
pub mod render;
pub mod settings_io;
