//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine: the 4x4 grid state machine that
//! applies slides and merges, spawns tiles, resolves special-tile bursts,
//! detects win/lose, and keeps one level of undo/redo.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Boards can be built from raw fixtures
//! - **Portable**: Any shell (terminal, headless, benchmark) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid, the rightward slide, slidability, special-tile bursts
//! - [`transform`]: mirror/rotate transforms that map every direction onto the rightward slide
//! - [`game_state`]: score, high score, history slot, player status, move pipeline
//! - [`rng`]: seeded LCG for tile placement and spawn odds
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Merging**: two equal tiles merge into their double; the double is added to the score
//! - **Single use**: a merged tile cannot merge again in the same slide
//! - **Special tiles**: `P` tiles only merge with each other; the merge bursts and doubles
//!   every tile around it, adding each gain to the score
//! - **Spawning**: after every move that changed the board, one tile appears
//!   (2: 90%, 4: 9%, P: 1%)
//! - **Winning**: reaching a 2048 tile; **losing**: no direction changes the board
//! - **History**: one slot; undo and redo swap the whole state
//!
//! # Example
//!
//! ```
//! use tui_2048p_core::{Board, GameState};
//! use tui_2048p_types::{GameAction, PlayerStatus};
//!
//! let board = Board::from_raw([
//!     [2, 2, -1, -1],
//!     [-1, -1, -1, -1],
//!     [-1, -1, -1, -1],
//!     [-1, -1, -1, -1],
//! ])
//! .unwrap();
//! let mut game = GameState::from_board(board, 12345);
//!
//! assert!(game.apply_action(GameAction::SlideRight));
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.status(), PlayerStatus::Playing);
//!
//! assert!(game.apply_action(GameAction::Undo));
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod transform;

pub use tui_2048p_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Grid, RawGrid, SlideOutcome};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
