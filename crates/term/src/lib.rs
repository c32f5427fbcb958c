//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It renders a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer that is then
//! flushed to a crossterm backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal I/O
//! - Only write the cells that changed between frames
//! - Keep layout logic pure so it can be tested without a terminal

pub mod fb;
pub mod game_view;
pub mod redraw;
pub mod renderer;

pub use tui_2048p_core as core;
pub use tui_2048p_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, GameView, Viewport, GRID_H, GRID_W, TILE_W};
pub use redraw::RedrawPolicy;
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
