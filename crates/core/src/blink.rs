//! Background star that cycles through intensities forever.

use crate::rng::SimpleRng;
use crate::task::{Step, TickContext};
use crate::types::{Intensity, BLINK_DELAY_MAX, BLINK_DELAY_MIN, STAR_SYMBOLS};

/// Phases of one blink cycle.
pub const BLINK_PHASES: [Intensity; 4] = [
    Intensity::Dim,
    Intensity::Normal,
    Intensity::Bold,
    Intensity::Normal,
];

/// A star at a fixed cell. Each phase is held for `delay` ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blink {
    row: i32,
    column: i32,
    symbol: char,
    delay: u32,
    phase: usize,
    elapsed: u32,
}

impl Blink {
    /// A zero `delay` is treated as one tick.
    pub fn new(row: i32, column: i32, symbol: char, delay: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            delay: delay.max(1),
            phase: 0,
            elapsed: 0,
        }
    }

    /// Random symbol and delay, sampled once.
    pub fn random(rng: &mut SimpleRng, row: i32, column: i32) -> Self {
        let symbol = rng.choose(&STAR_SYMBOLS).unwrap_or('*');
        let delay = rng.range_inclusive(BLINK_DELAY_MIN as i32, BLINK_DELAY_MAX as i32) as u32;
        Self::new(row, column, symbol, delay)
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.column)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn delay(&self) -> u32 {
        self.delay
    }

    /// Intensity of the phase the star is currently in.
    pub fn intensity(&self) -> Intensity {
        BLINK_PHASES[self.phase]
    }

    pub(crate) fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if self.elapsed == 0 {
            let canvas = ctx.canvas();
            if canvas.contains(self.row, self.column) {
                canvas.set_cell(self.row, self.column, self.symbol, self.intensity());
            }
        }

        self.elapsed += 1;
        if self.elapsed >= self.delay {
            self.elapsed = 0;
            self.phase = (self.phase + 1) % BLINK_PHASES.len();
        }
        Step::Pending
    }
}
