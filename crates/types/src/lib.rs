//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from the scheduler core,
//! the terminal layer and the input layer alike.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed scheduling quantum |
//! | `BLINK_DELAY_MIN` | 1 | Shortest blink phase, in ticks |
//! | `BLINK_DELAY_MAX` | 20 | Longest blink phase, in ticks |
//! | `MIN_FIRE_SPEED` | 0.05 | Slowest shot, in cells per tick |
//!
//! # Examples
//!
//! ```
//! use tui_starship_types::Controls;
//!
//! let mut controls = Controls::IDLE;
//! controls.merge(Controls::new(-1, 0, false));
//! controls.merge(Controls::new(0, 1, true));
//! assert_eq!(controls, Controls::new(-1, 1, true));
//! ```

/// Fixed timestep interval in milliseconds.
pub const TICK_MS: u32 = 100;

/// Symbols a background star may be drawn with.
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Shortest number of ticks a blink phase is held.
pub const BLINK_DELAY_MIN: u32 = 1;

/// Longest number of ticks a blink phase is held.
pub const BLINK_DELAY_MAX: u32 = 20;

/// Default lower bound for the number of stars in the sky.
pub const DEFAULT_STARS_MIN: u32 = 100;

/// Default upper bound for the number of stars in the sky.
pub const DEFAULT_STARS_MAX: u32 = 200;

/// Hard cap on the configured star count.
pub const STARS_LIMIT: u32 = 10_000;

/// Default projectile velocity in rows per tick (negative is up).
pub const DEFAULT_FIRE_ROWS_SPEED: f64 = -0.3;

/// Default projectile velocity in columns per tick.
pub const DEFAULT_FIRE_COLUMNS_SPEED: f64 = 0.0;

/// Slowest speed a shot may travel at. Anything slower would outlive the
/// session instead of leaving the field.
pub const MIN_FIRE_SPEED: f64 = 0.05;

/// Muzzle flash drawn on the first tick of a shot.
pub const MUZZLE_SYMBOL: char = '*';

/// Transitional symbol drawn on the second tick of a shot.
pub const FLASH_SYMBOL: char = 'O';

/// Trail glyph for shots moving only along rows.
pub const TRAIL_VERTICAL: char = '|';

/// Trail glyph for shots with any column motion.
pub const TRAIL_HORIZONTAL: char = '-';

/// Visual intensity attribute of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Intensity {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Directional input sampled for one tick.
///
/// `rows` and `columns` are -1, 0 or 1. `fire` is set when the fire key was
/// pressed at least once since the previous poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub rows: i32,
    pub columns: i32,
    pub fire: bool,
}

impl Controls {
    /// No movement, no fire.
    pub const IDLE: Controls = Controls {
        rows: 0,
        columns: 0,
        fire: false,
    };

    pub const fn new(rows: i32, columns: i32, fire: bool) -> Self {
        Self {
            rows,
            columns,
            fire,
        }
    }

    /// Fold a later input into this one.
    ///
    /// A non-zero axis overrides the earlier value on that axis; fire is sticky.
    pub fn merge(&mut self, later: Controls) {
        if later.rows != 0 {
            self.rows = later.rows;
        }
        if later.columns != 0 {
            self.columns = later.columns;
        }
        self.fire |= later.fire;
    }
}

/// Result of draining the input device once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolledInput {
    /// Input accumulated since the previous poll (idle when nothing was pressed).
    Controls(Controls),
    /// The user asked to end the session.
    Quit,
}
