//! Projectile: muzzle flash, then a straight trail until it leaves the field.

use crate::canvas::Canvas;
use crate::task::{Step, TaskFault, TickContext};
use crate::types::{
    Intensity, DEFAULT_FIRE_COLUMNS_SPEED, DEFAULT_FIRE_ROWS_SPEED, FLASH_SYMBOL, MIN_FIRE_SPEED,
    MUZZLE_SYMBOL, TRAIL_HORIZONTAL, TRAIL_VERTICAL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Muzzle,
    Flash,
    Launch,
    Trail,
    Done,
}

/// A shot travelling at constant velocity.
///
/// The playable area excludes the outermost rows and columns, so a shot is
/// inside while `0 < row < height - 1` and `0 < column < width - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fire {
    row: f64,
    column: f64,
    rows_speed: f64,
    columns_speed: f64,
    stage: Stage,
}

impl Fire {
    pub fn new(row: f64, column: f64, rows_speed: f64, columns_speed: f64) -> Self {
        Self {
            row,
            column,
            rows_speed,
            columns_speed,
            stage: Stage::Muzzle,
        }
    }

    /// Shot heading straight up at the default speed.
    pub fn upward(row: f64, column: f64) -> Self {
        Self::new(row, column, DEFAULT_FIRE_ROWS_SPEED, DEFAULT_FIRE_COLUMNS_SPEED)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    pub fn velocity(&self) -> (f64, f64) {
        (self.rows_speed, self.columns_speed)
    }

    fn trail_symbol(&self) -> char {
        if self.columns_speed != 0.0 {
            TRAIL_HORIZONTAL
        } else {
            TRAIL_VERTICAL
        }
    }

    fn cell(&self) -> (i32, i32) {
        (self.row.round() as i32, self.column.round() as i32)
    }

    fn inside(&self, canvas: &dyn Canvas) -> bool {
        let max_row = f64::from(canvas.height() - 1);
        let max_column = f64::from(canvas.width() - 1);
        0.0 < self.row && self.row < max_row && 0.0 < self.column && self.column < max_column
    }

    fn put(&self, canvas: &mut dyn Canvas, symbol: char) {
        let (row, column) = self.cell();
        if canvas.contains(row, column) {
            canvas.set_cell(row, column, symbol, Intensity::Normal);
        }
    }

    fn check(&self) -> Result<(), TaskFault> {
        if !self.row.is_finite() || !self.column.is_finite() {
            return Err(TaskFault::NonFinite {
                what: "position",
                row: self.row,
                column: self.column,
            });
        }
        if !self.rows_speed.is_finite() || !self.columns_speed.is_finite() {
            return Err(TaskFault::NonFinite {
                what: "velocity",
                row: self.rows_speed,
                column: self.columns_speed,
            });
        }
        let speed = self.rows_speed.hypot(self.columns_speed);
        if speed < MIN_FIRE_SPEED {
            return Err(TaskFault::Stalled { speed });
        }
        Ok(())
    }

    /// Erase the current cell, advance one step and redraw if still inside.
    fn fly(&mut self, ctx: &mut TickContext<'_>) -> Step {
        self.put(ctx.canvas(), ' ');
        self.row += self.rows_speed;
        self.column += self.columns_speed;

        if !self.inside(ctx.canvas()) {
            self.stage = Stage::Done;
            return Step::Done;
        }
        let symbol = self.trail_symbol();
        self.put(ctx.canvas(), symbol);
        self.stage = Stage::Trail;
        Step::Pending
    }

    pub(crate) fn resume(&mut self, ctx: &mut TickContext<'_>) -> Result<Step, TaskFault> {
        match self.stage {
            Stage::Muzzle => {
                self.check()?;
                if !self.inside(ctx.canvas()) {
                    self.stage = Stage::Done;
                    return Ok(Step::Done);
                }
                self.put(ctx.canvas(), MUZZLE_SYMBOL);
                self.stage = Stage::Flash;
                Ok(Step::Pending)
            }
            Stage::Flash => {
                self.put(ctx.canvas(), FLASH_SYMBOL);
                self.stage = Stage::Launch;
                Ok(Step::Pending)
            }
            Stage::Launch => {
                ctx.alert();
                Ok(self.fly(ctx))
            }
            Stage::Trail => Ok(self.fly(ctx)),
            Stage::Done => Ok(Step::Done),
        }
    }
}
