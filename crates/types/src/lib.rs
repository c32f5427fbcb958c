//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 square grid indexed by `(row, col)`, with
//! `(0, 0)` at the top-left corner.
//!
//! # Cell Encoding
//!
//! Every cell is a [`Tile`]. Test fixtures and snapshots use the raw integer
//! encoding:
//!
//! | Raw | Tile | Rendered |
//! |-----|------|----------|
//! | -1 | `Empty` | blank |
//! | 0 | `Special` | `P` |
//! | 1 | `Triggered` | transient, cleared after every move |
//! | 2, 4, 8, ... | `Value(n)` | the number |
//!
//! # Spawn Odds
//!
//! | Tile | Chance |
//! |------|--------|
//! | 2 | 90% |
//! | 4 | 9% |
//! | P | 1% |
//!
//! # Examples
//!
//! ```
//! use tui_2048p_types::{Direction, GameAction, Tile, BOARD_SIZE};
//!
//! // Parse game action
//! let action = GameAction::from_str("slideLeft").unwrap();
//! assert_eq!(action.direction(), Some(Direction::Left));
//!
//! // Merge two equal tiles
//! assert_eq!(Tile::Value(8).merge(Tile::Value(8)), Some((Tile::Value(16), 16)));
//!
//! // Board dimensions
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Board width and height in cells (4x4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Reaching this tile value wins the game
pub const WIN_TILE: u32 = 2048;

/// Chance (percent) that a spawned tile is a 2
pub const SPAWN_TWO_PERCENT: u32 = 90;

/// Chance (percent) that a spawned tile is a 4.
///
/// The remaining `100 - SPAWN_TWO_PERCENT - SPAWN_FOUR_PERCENT` percent spawn a
/// special tile.
pub const SPAWN_FOUR_PERCENT: u32 = 9;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Idle redraw interval in milliseconds (1 second)
pub const IDLE_REDRAW_MS: u64 = 1000;


/// A single board cell
///
/// - **Empty**: no tile
/// - **Special**: the `P` tile; two of them merge into `Triggered`
/// - **Triggered**: transient marker left by a Special+Special merge, resolved
///   into a neighbor boost right after the move
/// - **Value**: an ordinary power-of-two tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Special,
    Triggered,
    Value(u32),
}

impl Tile {
    /// Decode the raw integer encoding (-1, 0, 1, or a power of two >= 2)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048p_types::Tile;
    ///
    /// assert_eq!(Tile::from_raw(-1), Some(Tile::Empty));
    /// assert_eq!(Tile::from_raw(0), Some(Tile::Special));
    /// assert_eq!(Tile::from_raw(16), Some(Tile::Value(16)));
    /// assert_eq!(Tile::from_raw(12), None);
    /// ```
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            -1 => Some(Tile::Empty),
            0 => Some(Tile::Special),
            1 => Some(Tile::Triggered),
            v if v > 1 && (v as u32).is_power_of_two() => Some(Tile::Value(v as u32)),
            _ => None,
        }
    }

    /// Encode as the raw integer form
    pub fn raw(self) -> i32 {
        match self {
            Tile::Empty => -1,
            Tile::Special => 0,
            Tile::Triggered => 1,
            Tile::Value(v) => i32::try_from(v).unwrap_or(i32::MAX),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    /// Numeric value of an ordinary tile
    pub fn value(self) -> Option<u32> {
        match self {
            Tile::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Merge `other` into `self`.
    ///
    /// Returns the resulting tile and the score it awards, or `None` when the
    /// two tiles cannot merge.
    pub fn merge(self, other: Tile) -> Option<(Tile, u32)> {
        match (self, other) {
            (Tile::Special, Tile::Special) => Some((Tile::Triggered, 0)),
            (Tile::Value(a), Tile::Value(b)) if a == b => {
                let merged = a.saturating_mul(2);
                Some((Tile::Value(merged), merged))
            }
            _ => None,
        }
    }

    /// Double an ordinary tile in place of a special-tile burst.
    ///
    /// Returns the boosted tile and the score delta (the value added).
    pub fn boosted(self) -> Option<(Tile, u32)> {
        match self {
            Tile::Value(v) if v > 1 => Some((Tile::Value(v.saturating_mul(2)), v)),
            _ => None,
        }
    }
}

/// Slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in the order the slidability check visits them
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action maps 1:1 onto a board-engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile left
    SlideLeft,
    /// Slide every tile right
    SlideRight,
    /// Slide every tile up
    SlideUp,
    /// Slide every tile down
    SlideDown,
    /// Start a new game (the high score is kept)
    Reset,
    /// Swap back to the state before the last move
    Undo,
    /// Swap forward to the state the last undo left
    Redo,
    /// Leave the game
    Quit,
}

impl GameAction {
    pub const ALL: [GameAction; 8] = [
        GameAction::SlideLeft,
        GameAction::SlideRight,
        GameAction::SlideUp,
        GameAction::SlideDown,
        GameAction::Reset,
        GameAction::Undo,
        GameAction::Redo,
        GameAction::Quit,
    ];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048p_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("slideUp"), Some(GameAction::SlideUp));
    /// assert_eq!(GameAction::from_str("UNDO"), Some(GameAction::Undo));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slideleft" => Some(GameAction::SlideLeft),
            "slideright" => Some(GameAction::SlideRight),
            "slideup" => Some(GameAction::SlideUp),
            "slidedown" => Some(GameAction::SlideDown),
            "reset" => Some(GameAction::Reset),
            "undo" => Some(GameAction::Undo),
            "redo" => Some(GameAction::Redo),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string (used in log fields)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::SlideLeft => "slideLeft",
            GameAction::SlideRight => "slideRight",
            GameAction::SlideUp => "slideUp",
            GameAction::SlideDown => "slideDown",
            GameAction::Reset => "reset",
            GameAction::Undo => "undo",
            GameAction::Redo => "redo",
            GameAction::Quit => "quit",
        }
    }

    /// The slide direction of a move action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::SlideLeft => Some(Direction::Left),
            GameAction::SlideRight => Some(Direction::Right),
            GameAction::SlideUp => Some(Direction::Up),
            GameAction::SlideDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Outcome of the current game
///
/// Once `Won` or `Lost`, moves and history are ignored until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Which history operation is currently legal
///
/// There is exactly one history slot, so at most one of Undo/Redo applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistoryMode {
    #[default]
    NoHistory,
    UndoAvailable,
    RedoAvailable,
}
