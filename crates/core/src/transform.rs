//! Direction unification by grid transforms
//!
//! Only one slide algorithm exists: [`Board::slide_right`](crate::Board::slide_right).
//! Every other direction is expressed as a reversible transform into the
//! "rightward" frame, the rightward slide, and the inverse transform back:
//!
//! | Direction | Into the right frame | Back |
//! |-----------|----------------------|------|
//! | Right | identity | identity |
//! | Left | mirror columns | mirror columns |
//! | Up | rotate clockwise | rotate counter-clockwise |
//! | Down | rotate counter-clockwise | rotate clockwise |
//!
//! Rotating clockwise maps `(row, col)` to `(col, N-1-row)`, so moving towards
//! row 0 becomes moving towards the last column. Counter-clockwise is the
//! mirror image of that argument for `Down`.
//!
//! All transforms are pure: they return a new grid and never alias the input.

use crate::board::Grid;
use crate::types::{Direction, Tile, BOARD_SIZE};

const N: usize = BOARD_SIZE;

/// Reverse every row (left <-> right)
pub fn mirror(grid: &Grid) -> Grid {
    let mut out = *grid;
    for row in out.iter_mut() {
        row.reverse();
    }
    out
}

/// Rotate 90° clockwise
pub fn rotate_cw(grid: &Grid) -> Grid {
    let mut out = [[Tile::Empty; N]; N];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = grid[N - 1 - j][i];
        }
    }
    out
}

/// Rotate 90° counter-clockwise
pub fn rotate_ccw(grid: &Grid) -> Grid {
    let mut out = [[Tile::Empty; N]; N];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = grid[j][N - 1 - i];
        }
    }
    out
}

/// Map a grid into the frame where `dir` points right
pub fn into_right_frame(grid: &Grid, dir: Direction) -> Grid {
    match dir {
        Direction::Right => *grid,
        Direction::Left => mirror(grid),
        Direction::Up => rotate_cw(grid),
        Direction::Down => rotate_ccw(grid),
    }
}

/// Inverse of [`into_right_frame`]
pub fn from_right_frame(grid: &Grid, dir: Direction) -> Grid {
    match dir {
        Direction::Right => *grid,
        Direction::Left => mirror(grid),
        Direction::Up => rotate_ccw(grid),
        Direction::Down => rotate_cw(grid),
    }
}
