//! Game state module - manages the complete game state
//!
//! This module ties together the board, the tile RNG, scoring, the single
//! undo/redo slot, and the win/lose lifecycle.
//!
//! A full move ([`GameState::play`]) runs in this order:
//!
//! 1. snapshot the current state into the history slot
//! 2. slide (a slide that moves nothing stops here)
//! 3. resolve special-tile bursts ([`GameState::clear_ptile`])
//! 4. spawn one new tile
//! 5. evaluate win/lose ([`GameState::check_game_end`])
//!
//! The high score follows the score after every scoring step.

use tracing::{debug, info};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameAction, HistoryMode, PlayerStatus, Tile, INITIAL_TILES, WIN_TILE,
};

/// Everything a single undo/redo swaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SavedState {
    board: Board,
    score: u32,
    high_score: u32,
    moves: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    score: u32,
    high_score: u32,
    /// Moves that changed the board since the last reset
    moves: u32,
    previous: SavedState,
    history: HistoryMode,
    status: PlayerStatus,
    rng: SimpleRng,
}

impl GameState {
    /// Create a new game with the given RNG seed and two starting tiles
    pub fn new(seed: u32) -> Self {
        Self::fresh(SimpleRng::new(seed), 0)
    }

    /// Create a game around an existing board (no tiles are spawned)
    pub fn from_board(board: Board, seed: u32) -> Self {
        let saved = SavedState {
            board,
            score: 0,
            high_score: 0,
            moves: 0,
        };
        Self {
            board,
            score: 0,
            high_score: 0,
            moves: 0,
            previous: saved,
            history: HistoryMode::NoHistory,
            status: PlayerStatus::Playing,
            rng: SimpleRng::new(seed),
        }
    }

    fn fresh(rng: SimpleRng, high_score: u32) -> Self {
        let mut state = Self::from_board(Board::new(), 1);
        state.rng = rng;
        state.high_score = high_score;
        state.previous.high_score = high_score;
        for _ in 0..INITIAL_TILES {
            state.pop_new_tile();
        }
        state
    }

    /// Start over with a fresh board, keeping the high score
    pub fn reset(&mut self) {
        info!(
            score = self.score,
            high_score = self.high_score,
            moves = self.moves,
            "game reset"
        );
        *self = Self::fresh(self.rng.clone(), self.high_score);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        self.board.get(row, col)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn history(&self) -> HistoryMode {
        self.history
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }

    pub fn can_undo(&self) -> bool {
        self.is_playing() && self.history == HistoryMode::UndoAvailable
    }

    pub fn can_redo(&self) -> bool {
        self.is_playing() && self.history == HistoryMode::RedoAvailable
    }

    /// Write a render snapshot into an existing value
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.board.to_raw();
        out.score = self.score;
        out.high_score = self.high_score;
        out.moves = self.moves;
        out.status = self.status;
        out.history = self.history;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Map an input action onto the engine.
    ///
    /// Returns whether the action took effect; a slide that moves nothing
    /// returns false. `Quit` is left to the caller.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if let Some(dir) = action.direction() {
            return self.play(dir);
        }
        match action {
            GameAction::Undo => self.undo(),
            GameAction::Redo => self.redo(),
            GameAction::Reset => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// One complete move: history, slide, bursts, spawn, end check.
    ///
    /// Every attempt overwrites the history slot, even one that moves
    /// nothing. Returns whether the board changed; false once the game is over.
    pub fn play(&mut self, dir: Direction) -> bool {
        if !self.is_playing() {
            return false;
        }

        self.keep_prev_board();
        if !self.slide(dir) {
            return false;
        }

        self.clear_ptile();
        self.moves += 1;
        self.pop_new_tile();
        self.check_game_end();
        true
    }

    pub fn slide_left(&mut self) -> bool {
        self.slide(Direction::Left)
    }

    pub fn slide_right(&mut self) -> bool {
        self.slide(Direction::Right)
    }

    pub fn slide_up(&mut self) -> bool {
        self.slide(Direction::Up)
    }

    pub fn slide_down(&mut self) -> bool {
        self.slide(Direction::Down)
    }

    /// Slide only: no history, bursts, or spawning.
    ///
    /// Returns whether the board changed. Ignored once the game is over.
    pub fn slide(&mut self, dir: Direction) -> bool {
        if !self.is_playing() {
            return false;
        }
        let outcome = self.board.slide(dir);
        if outcome.moved {
            self.add_score(outcome.gained);
            self.note_win();
            debug!(
                direction = dir.as_str(),
                gained = outcome.gained,
                score = self.score,
                "slid"
            );
        }
        outcome.moved
    }

    /// Resolve special-tile bursts left by the last slide.
    ///
    /// Returns the score gained.
    pub fn clear_ptile(&mut self) -> u32 {
        if !self.board.has_triggered() {
            return 0;
        }
        let gained = self.board.clear_triggered();
        self.add_score(gained);
        self.note_win();
        debug!(gained, score = self.score, "special tiles burst");
        gained
    }

    /// Place one new tile on a random empty cell.
    ///
    /// Returns where it went, or `None` if the board is full.
    pub fn pop_new_tile(&mut self) -> Option<(usize, usize)> {
        let empty = self.board.empty_cells();
        let (row, col) = self.rng.pick(&empty)?;
        let tile = self.rng.spawn_tile();
        self.board.set(row, col, tile);
        debug!(row, col, tile = tile.raw(), "spawned tile");
        Some((row, col))
    }

    /// Whether any direction would change the board
    pub fn is_slidable(&self) -> bool {
        self.board.is_slidable()
    }

    /// Evaluate win/lose. Returns false only when the game is lost.
    pub fn check_game_end(&mut self) -> bool {
        self.note_win();
        if self.status == PlayerStatus::Won {
            return true;
        }
        if self.board.is_slidable() {
            return true;
        }
        if self.status != PlayerStatus::Lost {
            self.status = PlayerStatus::Lost;
            info!(score = self.score, moves = self.moves, "game lost");
        }
        false
    }

    /// Store the current state in the single history slot
    pub fn keep_prev_board(&mut self) {
        self.previous = self.save();
        self.history = HistoryMode::UndoAvailable;
    }

    /// Swap back to the stored state. Returns false if undo is not available.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.swap_previous();
        self.history = HistoryMode::RedoAvailable;
        debug!(score = self.score, "undo");
        true
    }

    /// Swap forward again after an undo. Returns false if redo is not available.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.swap_previous();
        self.history = HistoryMode::UndoAvailable;
        debug!(score = self.score, "redo");
        true
    }

    fn save(&self) -> SavedState {
        SavedState {
            board: self.board,
            score: self.score,
            high_score: self.high_score,
            moves: self.moves,
        }
    }

    fn swap_previous(&mut self) {
        let current = self.save();
        let SavedState {
            board,
            score,
            high_score,
            moves,
        } = self.previous;
        self.board = board;
        self.score = score;
        self.high_score = high_score;
        self.moves = moves;
        self.previous = current;
    }

    fn add_score(&mut self, gained: u32) {
        self.score = self.score.saturating_add(gained);
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Any tile at or above `WIN_TILE` wins.
    fn note_win(&mut self) {
        if self.status == PlayerStatus::Playing && self.board.max_value() >= WIN_TILE {
            self.status = PlayerStatus::Won;
            info!(score = self.score, moves = self.moves, "game won");
        }
    }
}
