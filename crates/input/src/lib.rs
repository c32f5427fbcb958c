//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and runs a
//! background reader thread that forwards terminal events over a channel, so
//! the main loop can wait for "next input or idle timeout".

pub mod map;
pub mod reader;

pub use tui_2048p_types as types;

pub use map::{handle_key_event, should_quit};
pub use reader::{spawn_reader, InputEvent};
