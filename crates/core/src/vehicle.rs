//! The piloted ship: two alternating sprite frames, steered by the tick's
//! controls and able to spawn projectiles.

use crate::fire::Fire;
use crate::sprite::{DrawMode, Sprite};
use crate::task::{Step, TickContext};
use crate::types::{Controls, DEFAULT_FIRE_COLUMNS_SPEED, DEFAULT_FIRE_ROWS_SPEED};

/// Apply one directional step, reverting the offending axis if the frame
/// would leave the playable area.
///
/// Valid rows are `1..=height - frame_height - 1` and valid columns
/// `1..=width - frame_width - 1`. The row check runs first; when it reverts
/// the row delta the column check is skipped for that step, so a diagonal
/// move can leave the column out of range. This mirrors the established
/// behaviour of the game and is pinned by tests.
pub fn step_within(
    position: (i32, i32),
    controls: Controls,
    frame: (i32, i32),
    grid: (i32, i32),
) -> (i32, i32) {
    let (frame_height, frame_width) = frame;
    let max_row = grid.0 - 1;
    let max_column = grid.1 - 1;

    let mut row = position.0 + controls.rows;
    let mut column = position.1 + controls.columns;

    if row > max_row - frame_height || row <= 0 {
        row -= controls.rows;
    } else if column > max_column - frame_width || column <= 0 {
        column -= controls.columns;
    }

    (row, column)
}

/// Player-controlled ship.
#[derive(Debug, Clone)]
pub struct Vehicle {
    row: i32,
    column: i32,
    frames: [Sprite; 2],
    current: usize,
    /// Frame index and position drawn on the previous tick, erased next tick.
    drawn: Option<(usize, i32, i32)>,
    fire_velocity: (f64, f64),
}

impl Vehicle {
    pub fn new(row: i32, column: i32, frames: [Sprite; 2]) -> Self {
        Self {
            row,
            column,
            frames,
            current: 0,
            drawn: None,
            fire_velocity: (DEFAULT_FIRE_ROWS_SPEED, DEFAULT_FIRE_COLUMNS_SPEED),
        }
    }

    /// Ship centred in a grid of `height` x `width`.
    pub fn centered(height: i32, width: i32, frames: [Sprite; 2]) -> Self {
        Self::new((height - 1) / 2, (width - 1) / 2, frames)
    }

    pub fn with_fire_velocity(mut self, rows_speed: f64, columns_speed: f64) -> Self {
        self.fire_velocity = (rows_speed, columns_speed);
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.row, self.column)
    }

    /// Bounding box of both frames as (height, width).
    pub fn frame_size(&self) -> (i32, i32) {
        let [a, b] = &self.frames;
        (a.height().max(b.height()), a.width().max(b.width()))
    }

    /// Cell just above the middle of the top row.
    pub fn nose(&self) -> (i32, i32) {
        let (_, width) = self.frame_size();
        (self.row - 1, self.column + width / 2)
    }

    pub(crate) fn resume(&mut self, ctx: &mut TickContext<'_>) -> Step {
        if let Some((frame, row, column)) = self.drawn.take() {
            self.frames[frame].draw(ctx.canvas(), row, column, DrawMode::Negative);
        }

        let controls = ctx.controls();
        let grid = {
            let canvas = ctx.canvas();
            (canvas.height(), canvas.width())
        };
        let (row, column) = step_within(self.position(), controls, self.frame_size(), grid);
        self.row = row;
        self.column = column;

        self.frames[self.current].draw(ctx.canvas(), row, column, DrawMode::Positive);
        self.drawn = Some((self.current, row, column));
        self.current = (self.current + 1) % self.frames.len();

        if controls.fire {
            let (nose_row, nose_column) = self.nose();
            let (rows_speed, columns_speed) = self.fire_velocity;
            tracing::debug!(nose_row, nose_column, "vehicle fired");
            ctx.spawn(Fire::new(
                f64::from(nose_row),
                f64::from(nose_column),
                rows_speed,
                columns_speed,
            ));
        }

        Step::Pending
    }
}
