//! Framebuffer for terminal rendering.
//!
//! The framebuffer is the grid surface the animation draws onto. It persists
//! between ticks; tasks overwrite cells incrementally and never clear it.

use crate::core::Canvas;
use crate::types::Intensity;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub intensity: Intensity,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            intensity: Intensity::Normal,
        }
    }
}

/// 2D framebuffer of character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Row-major text dump, one line per row. Handy in tests.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| c.ch));
            out.push('\n');
        }
        out
    }
}

impl Canvas for FrameBuffer {
    fn height(&self) -> i32 {
        i32::from(self.height)
    }

    fn width(&self) -> i32 {
        i32::from(self.width)
    }

    fn set_cell(&mut self, row: i32, column: i32, symbol: char, intensity: Intensity) {
        if !self.contains(row, column) {
            return;
        }
        self.set(
            column as u16,
            row as u16,
            Cell {
                ch: symbol,
                intensity,
            },
        );
    }
}
