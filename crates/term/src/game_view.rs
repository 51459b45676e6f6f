//! GameView: draws the board and every placed piece into a terminal framebuffer.
//!
//! This module is pure (no I/O). The board is a 10x20 grid of outlined unit cells;
//! filled cells of every placed piece, falling or locked, are drawn as solid green
//! squares. Cell size and board offset are configurable.

use std::env;

use crate::core::Board;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

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

/// Where the board frame's top-left corner goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// One third of the viewport width, one tenth of its height.
    Proportional,
    Fixed { x: u16, y: u16 },
}

/// Board cell size and placement.
///
/// Environment overrides: `BLOCKFALL_CELL_WIDTH`, `BLOCKFALL_CELL_HEIGHT`,
/// `BLOCKFALL_OFFSET_X`, `BLOCKFALL_OFFSET_Y` (both offsets must be set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Board cell width in terminal columns.
    pub cell_w: u16,
    /// Board cell height in terminal rows.
    pub cell_h: u16,
    pub offset: Offset,
}

impl Default for ViewConfig {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            offset: Offset::Proportional,
        }
    }
}

impl ViewConfig {
    pub fn from_env() -> Self {
        let read = |key: &str| -> Option<u16> { env::var(key).ok()?.trim().parse().ok() };
        let defaults = Self::default();

        let offset = match (read("BLOCKFALL_OFFSET_X"), read("BLOCKFALL_OFFSET_Y")) {
            (Some(x), Some(y)) => Offset::Fixed { x, y },
            _ => Offset::Proportional,
        };

        Self {
            cell_w: read("BLOCKFALL_CELL_WIDTH")
                .filter(|w| *w > 0)
                .unwrap_or(defaults.cell_w),
            cell_h: read("BLOCKFALL_CELL_HEIGHT")
                .filter(|h| *h > 0)
                .unwrap_or(defaults.cell_h),
            offset,
        }
    }
}

const GRID_BG: Rgb = Rgb::new(0, 0, 0);
const OUTLINE: Rgb = Rgb::new(255, 255, 255);
const PIECE: Rgb = Rgb::new(0, 255, 0);

/// A lightweight terminal renderer for the board.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    config: ViewConfig,
}

impl GameView {
    pub fn new(config: ViewConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Size of the board frame (grid plus one-cell outline) in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16)
                .saturating_mul(self.config.cell_w)
                .saturating_add(2),
            (BOARD_HEIGHT as u16)
                .saturating_mul(self.config.cell_h)
                .saturating_add(2),
        )
    }

    /// Top-left corner of the board frame, pulled back so the frame fits when it can.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let (x, y) = match self.config.offset {
            Offset::Proportional => (viewport.width / 3, viewport.height / 10),
            Offset::Fixed { x, y } => (x, y),
        };
        (
            x.min(viewport.width.saturating_sub(frame_w)),
            y.min(viewport.height.saturating_sub(frame_h)),
        )
    }

    /// Render the board into an existing framebuffer.
    pub fn render_into(&self, board: &Board, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (start_x, start_y) = self.frame_origin(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let outline = CellStyle::plain(OUTLINE, GRID_BG);

        draw_border(fb, start_x, start_y, frame_w, frame_h, outline);

        let empty = CellStyle {
            dim: true,
            ..CellStyle::plain(OUTLINE, GRID_BG)
        };
        for row in 0..BOARD_HEIGHT as u16 {
            for col in 0..BOARD_WIDTH as u16 {
                self.fill_cell(fb, start_x, start_y, col, row, '·', empty);
            }
        }

        let filled = CellStyle {
            bold: true,
            ..CellStyle::plain(PIECE, GRID_BG)
        };
        for piece in board.pieces() {
            for (col, row) in piece.cells() {
                if (0..BOARD_WIDTH).contains(&col) && (0..BOARD_HEIGHT).contains(&row) {
                    self.fill_cell(fb, start_x, start_y, col as u16, row as u16, '█', filled);
                }
            }
        }

        let hint_y = start_y.saturating_add(frame_h);
        if hint_y < viewport.height {
            fb.put_str(start_x, hint_y, "A/D move  Q quit", CellStyle::default());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(col.saturating_mul(self.config.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(row.saturating_mul(self.config.cell_h));
        fb.fill_rect(px, py, self.config.cell_w, self.config.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x.saturating_add(w - 1), y.saturating_add(h - 1));

    fb.set(x, y, style.cell('┌'));
    fb.set(right, y, style.cell('┐'));
    fb.set(x, bottom, style.cell('└'));
    fb.set(right, bottom, style.cell('┘'));
    fb.fill_rect(x.saturating_add(1), y, w - 2, 1, '─', style);
    fb.fill_rect(x.saturating_add(1), bottom, w - 2, 1, '─', style);
    fb.fill_rect(x, y.saturating_add(1), 1, h - 2, '│', style);
    fb.fill_rect(right, y.saturating_add(1), 1, h - 2, '│', style);
}
