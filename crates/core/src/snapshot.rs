use crate::types::{HistoryMode, PlayerStatus, BOARD_SIZE};

/// Read-only copy of everything the renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Raw tile encoding (-1 empty, 0 special, powers of two)
    pub grid: [[i32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub high_score: u32,
    pub moves: u32,
    pub status: PlayerStatus,
    pub history: HistoryMode,
}

impl GameSnapshot {
    /// Same rule as `GameState::can_undo`: finished games have no history.
    pub fn can_undo(&self) -> bool {
        !self.is_over() && self.history == HistoryMode::UndoAvailable
    }

    pub fn can_redo(&self) -> bool {
        !self.is_over() && self.history == HistoryMode::RedoAvailable
    }

    pub fn is_over(&self) -> bool {
        self.status != PlayerStatus::Playing
    }

    /// FNV-1a 64-bit hash of the visible state.
    ///
    /// Used to skip redraws when nothing changed.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut feed = |bytes: &[u8]| {
            for &b in bytes {
                h ^= b as u64;
                h = h.wrapping_mul(0x00000100000001B3);
            }
        };
        for v in self.grid.iter().flatten() {
            feed(&v.to_le_bytes());
        }
        feed(&self.score.to_le_bytes());
        feed(&self.high_score.to_le_bytes());
        feed(&self.moves.to_le_bytes());
        feed(&[self.status as u8, self.history as u8]);
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[-1; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            high_score: 0,
            moves: 0,
            status: PlayerStatus::Playing,
            history: HistoryMode::NoHistory,
        }
    }
}
