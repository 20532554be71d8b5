//! In-memory canvas for unit tests.

use crate::canvas::Canvas;
use crate::types::Intensity;

/// Records cells and panics on any out-of-range write, so a passing test
/// proves the caller bounds-checked first.
pub struct TestCanvas {
    height: i32,
    width: i32,
    cells: Vec<(char, Intensity)>,
    writes: usize,
}

impl TestCanvas {
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            height,
            width,
            cells: vec![(' ', Intensity::Normal); (height * width) as usize],
            writes: 0,
        }
    }

    pub fn symbol(&self, row: i32, column: i32) -> char {
        self.cells[(row * self.width + column) as usize].0
    }

    pub fn intensity(&self, row: i32, column: i32) -> Intensity {
        self.cells[(row * self.width + column) as usize].1
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Canvas for TestCanvas {
    fn height(&self) -> i32 {
        self.height
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn set_cell(&mut self, row: i32, column: i32, symbol: char, intensity: Intensity) {
        assert!(
            self.contains(row, column),
            "write outside canvas at ({row}, {column})"
        );
        self.writes += 1;
        self.cells[(row * self.width + column) as usize] = (symbol, intensity);
    }
}
