//! Board module - manages the 4x4 tile grid
//!
//! The board stores a square grid of [`Tile`]s, row-major, indexed by
//! `(row, col)` with `(0, 0)` at the top-left.
//!
//! Sliding is implemented once, for the rightward direction, and the other
//! directions go through [`crate::transform`].
//!
//! Rightward slide, per row, scanning from the rightmost column leftward:
//! - a tile moves if its right neighbor is an equal tile, or if there is an
//!   empty cell to its right before the row's movement limit;
//! - it advances past empty cells until it merges into an equal tile, settles
//!   in front of a different tile, or reaches the limit;
//! - after a merge at column `i`, or a settle against the tile at column `i`,
//!   the limit tightens to `i` so that every destination is used at most once
//!   per slide.

use arrayvec::ArrayVec;

use crate::transform;
use crate::types::{Direction, Tile, BOARD_CELLS, BOARD_SIZE};

/// Raw row-major grid
pub type Grid = [[Tile; BOARD_SIZE]; BOARD_SIZE];

/// Raw integer encoding of a grid (see [`Tile::from_raw`])
pub type RawGrid = [[i32; BOARD_SIZE]; BOARD_SIZE];

/// Result of one slide pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlideOutcome {
    /// Whether any tile moved or merged
    pub moved: bool,
    /// Score awarded by merges
    pub gained: u32,
}

impl SlideOutcome {
    fn absorb(&mut self, other: SlideOutcome) {
        self.moved |= other.moved;
        self.gained = self.gained.saturating_add(other.gained);
    }
}

/// The game board - 4x4 tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from the raw integer encoding.
    ///
    /// Returns `None` if any value is not a valid tile.
    pub fn from_raw(raw: RawGrid) -> Option<Self> {
        let mut board = Self::new();
        for (row, raw_row) in raw.iter().enumerate() {
            for (col, &v) in raw_row.iter().enumerate() {
                board.cells[row][col] = Tile::from_raw(v)?;
            }
        }
        Some(board)
    }

    /// Encode the board as raw integers
    pub fn to_raw(&self) -> RawGrid {
        let mut raw = [[-1; BOARD_SIZE]; BOARD_SIZE];
        for (raw_row, row) in raw.iter_mut().zip(self.cells.iter()) {
            for (v, tile) in raw_row.iter_mut().zip(row.iter()) {
                *v = tile.raw();
            }
        }
        raw
    }

    /// Board width and height
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get tile at `(row, col)`.
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set tile at `(row, col)`.
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Coordinates of every empty cell, row-major
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), BOARD_CELLS> {
        let mut out = ArrayVec::new();
        for (row, tiles) in self.cells.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                if tile.is_empty() {
                    out.push((row, col));
                }
            }
        }
        out
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|t| !t.is_empty())
    }

    /// Largest ordinary tile value, 0 if there is none
    pub fn max_value(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter_map(|t| t.value())
            .max()
            .unwrap_or(0)
    }

    /// Slide every row right.
    pub fn slide_right(&mut self) -> SlideOutcome {
        let mut outcome = SlideOutcome::default();
        for row in self.cells.iter_mut() {
            outcome.absorb(slide_row_right(row));
        }
        outcome
    }

    /// Slide in any direction via the rightward slide.
    pub fn slide(&mut self, dir: Direction) -> SlideOutcome {
        let mut framed = Board {
            cells: transform::into_right_frame(&self.cells, dir),
        };
        let outcome = framed.slide_right();
        self.cells = transform::from_right_frame(&framed.cells, dir);
        outcome
    }

    /// Whether some tile could slide right. Does not modify the board.
    pub fn can_slide_right(&self) -> bool {
        self.cells.iter().any(|row| {
            (0..BOARD_SIZE).any(|col| !row[col].is_empty() && can_slide_in_row(row, col, BOARD_SIZE))
        })
    }

    /// Whether some tile could slide in `dir`. Does not modify the board.
    pub fn can_slide(&self, dir: Direction) -> bool {
        Board {
            cells: transform::into_right_frame(&self.cells, dir),
        }
        .can_slide_right()
    }

    /// Whether any direction would change the board
    pub fn is_slidable(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_slide(dir))
    }

    /// Resolve every `Triggered` marker.
    ///
    /// Each marker becomes empty and every ordinary tile in its 3x3
    /// neighborhood (clipped to the board) doubles. Markers are resolved in
    /// row-major order, so a tile next to two markers doubles twice.
    /// Returns the score gained (the sum of the doublings).
    pub fn clear_triggered(&mut self) -> u32 {
        let mut gained = 0u32;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] != Tile::Triggered {
                    continue;
                }
                self.cells[row][col] = Tile::Empty;
                gained = gained.saturating_add(self.boost_neighbors(row, col));
            }
        }
        gained
    }

    pub fn has_triggered(&self) -> bool {
        self.cells.iter().flatten().any(|&t| t == Tile::Triggered)
    }

    fn boost_neighbors(&mut self, row: usize, col: usize) -> u32 {
        let mut gained = 0u32;
        let rows = row.saturating_sub(1)..=(row + 1).min(BOARD_SIZE - 1);
        for r in rows {
            let cols = col.saturating_sub(1)..=(col + 1).min(BOARD_SIZE - 1);
            for c in cols {
                if let Some((tile, delta)) = self.cells[r][c].boosted() {
                    self.cells[r][c] = tile;
                    gained = gained.saturating_add(delta);
                }
            }
        }
        gained
    }
}

/// Can the tile at `col` slide right, given the row's current `limit`?
fn can_slide_in_row(row: &[Tile; BOARD_SIZE], col: usize, limit: usize) -> bool {
    if col + 1 >= BOARD_SIZE {
        return false;
    }
    if col + 1 < limit && row[col].merge(row[col + 1]).is_some() {
        return true;
    }
    row[col + 1..limit.max(col + 1)].iter().any(|t| t.is_empty())
}

/// Move the tile at `col` right as far as it goes.
///
/// Returns the new movement limit and the score gained.
fn advance_right(row: &mut [Tile; BOARD_SIZE], col: usize, limit: usize) -> (usize, u32) {
    let tile = row[col];
    for i in col + 1..limit {
        if row[i].is_empty() {
            continue;
        }
        if let Some((merged, gained)) = row[i].merge(tile) {
            row[i] = merged;
            row[col] = Tile::Empty;
            return (i, gained);
        }
        row[i - 1] = tile;
        if i - 1 != col {
            row[col] = Tile::Empty;
        }
        return (i, 0);
    }
    // Nothing in the way: the destination stays open for a merge.
    row[limit - 1] = tile;
    row[col] = Tile::Empty;
    (limit, 0)
}

fn slide_row_right(row: &mut [Tile; BOARD_SIZE]) -> SlideOutcome {
    let mut outcome = SlideOutcome::default();
    let mut limit = BOARD_SIZE;
    for col in (0..BOARD_SIZE).rev() {
        if row[col].is_empty() || !can_slide_in_row(row, col, limit) {
            continue;
        }
        let (next_limit, gained) = advance_right(row, col, limit);
        limit = next_limit;
        outcome.moved = true;
        outcome.gained = outcome.gained.saturating_add(gained);
    }
    outcome
}
