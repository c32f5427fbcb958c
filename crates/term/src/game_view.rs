//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, relative to the view origin:
//!
//! ```text
//! Score: 36 / High Score: 120
//! +----+----+----+----+
//! |   2|    |   4|   P|
//! +----+----+----+----+
//! ...                        (4 tile rows)
//! Moves: 7
//! [PgDn] Undo  [PgUp] Redo
//! usage text
//! ```
//!
//! The win/lose banner is drawn over the middle separator of the grid.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PlayerStatus, Tile, BOARD_SIZE};

/// Terminal columns per tile, including the left border.
pub const TILE_W: u16 = 5;

/// Width of the bordered grid in columns.
pub const GRID_W: u16 = TILE_W * BOARD_SIZE as u16 + 1;

/// Height of the bordered grid in rows.
pub const GRID_H: u16 = 2 * BOARD_SIZE as u16 + 1;

const WIN_BANNER: &str = "****** YOU WIN ******";
const LOSE_BANNER: &str = "***** YOU LOSE  *****";

const USAGE: [&str; 4] = [
    "Slide tiles with the arrow keys. Equal tiles merge into their double.",
    "Two P tiles merge into a burst that doubles every tile around it.",
    "GOAL: make a 2048 tile.",
    "Esc: quit / Space: reset / PgDn: undo / PgUp: redo",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    origin_x: u16,
    origin_y: u16,
}

impl GameView {
    pub fn new(origin_x: u16, origin_y: u16) -> Self {
        Self { origin_x, origin_y }
    }

    /// Row of the top grid border
    pub fn grid_top(&self) -> u16 {
        self.origin_y + 1
    }

    /// Terminal position of the first value column of tile `(row, col)`
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let x = self.origin_x + col as u16 * TILE_W + 1;
        let y = self.grid_top() + 2 * row as u16 + 1;
        (x, y)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let text = CellStyle::default();
        let label = text.bold();

        let (x0, mut y) = (self.origin_x, self.origin_y);

        // Score line.
        let x = fb.put_str(x0, y, "Score: ", label);
        let x = fb.put_u32(x, y, snap.score, text);
        let x = fb.put_str(x, y, " / High Score: ", label);
        fb.put_u32(x, y, snap.high_score, text);
        y += 1;

        self.draw_grid(fb, snap);
        y += GRID_H;

        let x = fb.put_str(x0, y, "Moves: ", label);
        fb.put_u32(x, y, snap.moves, text);
        y += 1;

        self.draw_history_hints(fb, snap, y);
        y += 1;

        for line in USAGE {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x0, y, line, text);
            y += 1;
        }

        match snap.status {
            PlayerStatus::Won => self.draw_banner(fb, WIN_BANNER),
            PlayerStatus::Lost => self.draw_banner(fb, LOSE_BANNER),
            PlayerStatus::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let top = self.grid_top();

        for line in 0..=BOARD_SIZE as u16 {
            self.draw_separator(fb, top + 2 * line, border);
        }

        for (row, values) in snap.grid.iter().enumerate() {
            let y = top + 2 * row as u16 + 1;
            for col in 0..=BOARD_SIZE as u16 {
                fb.put_char(self.origin_x + col * TILE_W, y, '|', border);
            }
            for (col, &raw) in values.iter().enumerate() {
                let (x, y) = self.tile_origin(row, col);
                draw_tile(fb, x, y, Tile::from_raw(raw).unwrap_or_default());
            }
        }
    }

    fn draw_separator(&self, fb: &mut FrameBuffer, y: u16, style: CellStyle) {
        for col in 0..BOARD_SIZE as u16 {
            let x = self.origin_x + col * TILE_W;
            fb.put_char(x, y, '+', style);
            fb.fill_rect(x + 1, y, TILE_W - 1, 1, '-', style);
        }
        fb.put_char(self.origin_x + GRID_W - 1, y, '+', style);
    }

    fn draw_history_hints(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, y: u16) {
        let on = CellStyle::default().bold();
        let off = CellStyle::new(Rgb::new(110, 110, 110), Rgb::new(0, 0, 0)).dim();

        let undo = if snap.can_undo() { on } else { off };
        let redo = if snap.can_redo() { on } else { off };

        let x = fb.put_str(self.origin_x, y, "[PgDn] Undo", undo);
        fb.put_str(x + 2, y, "[PgUp] Redo", redo);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(88, 88, 88)).bold();
        let mid = self.grid_top() + 2 * (BOARD_SIZE as u16 / 2);
        let text_w = text.chars().count() as u16;
        let x = self.origin_x + GRID_W.saturating_sub(text_w) / 2;
        fb.put_str(x, mid, text, style);
    }
}

fn draw_tile(fb: &mut FrameBuffer, x: u16, y: u16, tile: Tile) {
    let style = tile_style(tile);
    let w = TILE_W - 1;
    match tile {
        Tile::Empty => {
            fb.fill_rect(x, y, w, 1, ' ', CellStyle::default());
        }
        Tile::Special => {
            fb.fill_rect(x, y, w, 1, ' ', style);
            fb.put_char(x + w - 1, y, 'P', style);
        }
        Tile::Triggered => {
            fb.fill_rect(x, y, w, 1, ' ', style);
            fb.put_char(x + w - 1, y, '*', style);
        }
        Tile::Value(v) => fb.put_u32_right(x, y, w, v, style),
    }
}

/// Foreground/background pair for a tile.
pub fn tile_style(tile: Tile) -> CellStyle {
    let (fg, bg) = match tile {
        Tile::Empty => return CellStyle::default(),
        Tile::Special | Tile::Triggered => ((255, 215, 0), (95, 0, 135)),
        Tile::Value(2) => ((255, 255, 255), (0, 95, 0)),
        Tile::Value(4) => ((255, 255, 215), (0, 95, 95)),
        Tile::Value(8) => ((175, 255, 255), (135, 95, 0)),
        Tile::Value(16) => ((0, 0, 0), (175, 95, 135)),
        Tile::Value(32) => ((0, 0, 0), (95, 175, 255)),
        Tile::Value(64) => ((0, 0, 0), (95, 215, 95)),
        Tile::Value(128) => ((0, 0, 0), (215, 95, 0)),
        Tile::Value(256) => ((0, 0, 0), (215, 95, 95)),
        Tile::Value(512) => ((215, 255, 95), (95, 0, 95)),
        Tile::Value(1024) => ((215, 255, 95), (95, 0, 0)),
        Tile::Value(2048) => ((215, 255, 95), (135, 0, 0)),
        Tile::Value(_) => return CellStyle::default().bold(),
    };
    CellStyle::new(Rgb::new(fg.0, fg.1, fg.2), Rgb::new(bg.0, bg.1, bg.2)).bold()
}
