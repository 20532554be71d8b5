//! Write-only drawing capability handed to animation tasks.

use crate::types::Intensity;

/// A grid surface that tasks may write to but never read back.
///
/// Implementations must ignore writes outside `0..height` x `0..width`.
pub trait Canvas {
    fn height(&self) -> i32;

    fn width(&self) -> i32;

    fn set_cell(&mut self, row: i32, column: i32, symbol: char, intensity: Intensity);

    fn contains(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && row < self.height() && column < self.width()
    }

    /// Blank a cell.
    fn erase(&mut self, row: i32, column: i32) {
        self.set_cell(row, column, ' ', Intensity::Normal);
    }
}

/// Draw a box border around the whole canvas.
pub fn draw_border(canvas: &mut dyn Canvas) {
    let h = canvas.height();
    let w = canvas.width();
    if w < 2 || h < 2 {
        return;
    }

    let style = Intensity::Normal;
    canvas.set_cell(0, 0, '┌', style);
    canvas.set_cell(0, w - 1, '┐', style);
    canvas.set_cell(h - 1, 0, '└', style);
    canvas.set_cell(h - 1, w - 1, '┘', style);

    for column in 1..w - 1 {
        canvas.set_cell(0, column, '─', style);
        canvas.set_cell(h - 1, column, '─', style);
    }
    for row in 1..h - 1 {
        canvas.set_cell(row, 0, '│', style);
        canvas.set_cell(row, w - 1, '│', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestCanvas;

    #[test]
    fn border_corners_and_edges() {
        let mut canvas = TestCanvas::new(4, 6);
        draw_border(&mut canvas);

        assert_eq!(canvas.symbol(0, 0), '┌');
        assert_eq!(canvas.symbol(0, 5), '┐');
        assert_eq!(canvas.symbol(3, 0), '└');
        assert_eq!(canvas.symbol(3, 5), '┘');
        assert_eq!(canvas.symbol(0, 2), '─');
        assert_eq!(canvas.symbol(2, 5), '│');
        assert_eq!(canvas.symbol(1, 1), ' ');
    }

    #[test]
    fn border_skipped_for_degenerate_canvas() {
        let mut canvas = TestCanvas::new(1, 8);
        draw_border(&mut canvas);
        assert_eq!(canvas.writes(), 0);
    }

    #[test]
    fn contains_rejects_negative_and_far_edges() {
        let canvas = TestCanvas::new(3, 3);
        assert!(canvas.contains(0, 0));
        assert!(canvas.contains(2, 2));
        assert!(!canvas.contains(-1, 0));
        assert!(!canvas.contains(0, 3));
        assert!(!canvas.contains(3, 0));
    }
}
