//! Static multi-line glyph art.
//!
//! A space is transparent: drawing never touches the cell beneath it.

use crate::canvas::Canvas;
use crate::types::Intensity;

/// How a sprite is put onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Draw every non-space glyph.
    Positive,
    /// Blank every cell the positive rendering would have written.
    Negative,
}

/// Immutable multi-line text art with a rectangular bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    lines: Vec<Vec<char>>,
    width: usize,
}

impl Sprite {
    /// Build a sprite from text; each line of `text` is one sprite row.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let width = lines.iter().map(Vec::len).max().unwrap_or(0);
        Self { lines, width }
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.lines.len() as i32
    }

    /// Length of the longest row.
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Draw with the top-left corner at (`row`, `column`).
    ///
    /// Rows and columns falling outside the canvas are skipped.
    pub fn draw(&self, canvas: &mut dyn Canvas, row: i32, column: i32, mode: DrawMode) {
        let max_row = canvas.height();
        let max_column = canvas.width();

        for (dy, line) in self.lines.iter().enumerate() {
            let r = row + dy as i32;
            if r < 0 {
                continue;
            }
            if r >= max_row {
                break;
            }

            for (dx, &symbol) in line.iter().enumerate() {
                let c = column + dx as i32;
                if c < 0 {
                    continue;
                }
                if c >= max_column {
                    break;
                }
                if symbol == ' ' {
                    continue;
                }

                match mode {
                    DrawMode::Positive => canvas.set_cell(r, c, symbol, Intensity::Normal),
                    DrawMode::Negative => canvas.erase(r, c),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestCanvas;

    const ART: &str = "  .\n .'.\n|o o|\n";

    #[test]
    fn size_uses_line_count_and_longest_line() {
        let sprite = Sprite::from_text(ART);
        assert_eq!(sprite.height(), 3);
        assert_eq!(sprite.width(), 5);
        assert!(!sprite.is_empty());
        assert!(Sprite::from_text("").is_empty());
    }

    #[test]
    fn spaces_leave_cells_untouched() {
        let sprite = Sprite::from_text(ART);
        let mut canvas = TestCanvas::new(5, 8);
        canvas.set_cell(1, 1, '#', Intensity::Bold);

        sprite.draw(&mut canvas, 1, 1, DrawMode::Positive);

        // (1,1) is under a leading space in the first sprite line.
        assert_eq!(canvas.symbol(1, 1), '#');
        assert_eq!(canvas.symbol(1, 3), '.');
        assert_eq!(canvas.symbol(3, 1), '|');
        assert_eq!(canvas.symbol(3, 3), ' ');
        assert_eq!(canvas.symbol(3, 5), '|');
    }

    #[test]
    fn negative_mode_erases_only_drawn_cells() {
        let sprite = Sprite::from_text(ART);
        let mut canvas = TestCanvas::new(5, 8);
        canvas.set_cell(1, 1, '#', Intensity::Bold);

        sprite.draw(&mut canvas, 1, 1, DrawMode::Positive);
        sprite.draw(&mut canvas, 1, 1, DrawMode::Negative);

        assert_eq!(canvas.symbol(1, 1), '#');
        assert_eq!(canvas.symbol(1, 3), ' ');
        assert_eq!(canvas.symbol(3, 5), ' ');
    }

    #[test]
    fn clipped_against_every_edge() {
        let sprite = Sprite::from_text("abc\ndef\nghi");
        let mut canvas = TestCanvas::new(2, 2);

        sprite.draw(&mut canvas, -1, -1, DrawMode::Positive);
        assert_eq!(canvas.symbol(0, 0), 'e');
        assert_eq!(canvas.symbol(0, 1), 'f');
        assert_eq!(canvas.symbol(1, 0), 'h');
        assert_eq!(canvas.symbol(1, 1), 'i');

        // Entirely off-canvas: nothing is written.
        let before = canvas.writes();
        sprite.draw(&mut canvas, 5, 5, DrawMode::Positive);
        assert_eq!(canvas.writes(), before);
    }
}
