//! Animation tasks as explicit state machines.
//!
//! A task is resumed once per tick. It performs the drawing up to its next
//! wait-point and reports whether it wants to run again. Tasks only ever see
//! the write-only [`Canvas`], the tick's [`Controls`] and a spawn buffer.

use thiserror::Error;

use crate::blink::Blink;
use crate::canvas::Canvas;
use crate::fire::Fire;
use crate::types::Controls;
use crate::vehicle::Vehicle;

/// Outcome of resuming a task for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Reached a wait-point; resume again next tick.
    Pending,
    /// Finished naturally; remove from the live set.
    Done,
}

/// An unrecoverable fault inside a single task.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TaskFault {
    #[error("{what} is not finite: ({row}, {column})")]
    NonFinite {
        what: &'static str,
        row: f64,
        column: f64,
    },
    #[error("projectile speed {speed} is too slow to ever leave the grid")]
    Stalled { speed: f64 },
}

/// Everything a task may touch while it is being resumed.
pub struct TickContext<'a> {
    canvas: &'a mut dyn Canvas,
    controls: Controls,
    spawned: &'a mut Vec<Task>,
    alert: bool,
}

impl<'a> TickContext<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        controls: Controls,
        spawned: &'a mut Vec<Task>,
    ) -> Self {
        Self {
            canvas,
            controls,
            spawned,
            alert: false,
        }
    }

    pub fn canvas(&mut self) -> &mut dyn Canvas {
        &mut *self.canvas
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Queue a new task. It joins the live set after the current tick.
    pub fn spawn(&mut self, task: impl Into<Task>) {
        self.spawned.push(task.into());
    }

    /// Request the host's alert signal (terminal bell).
    pub fn alert(&mut self) {
        self.alert = true;
    }

    pub fn alert_requested(&self) -> bool {
        self.alert
    }
}

/// One live animation.
#[derive(Debug, Clone)]
pub enum Task {
    Blink(Blink),
    Fire(Fire),
    Vehicle(Vehicle),
}

impl Task {
    /// Advance to the next wait-point.
    pub fn resume(&mut self, ctx: &mut TickContext<'_>) -> Result<Step, TaskFault> {
        match self {
            Task::Blink(blink) => Ok(blink.resume(ctx)),
            Task::Fire(fire) => fire.resume(ctx),
            Task::Vehicle(vehicle) => Ok(vehicle.resume(ctx)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Task::Blink(_) => "blink",
            Task::Fire(_) => "fire",
            Task::Vehicle(_) => "vehicle",
        }
    }
}

impl From<Blink> for Task {
    fn from(blink: Blink) -> Self {
        Task::Blink(blink)
    }
}

impl From<Fire> for Task {
    fn from(fire: Fire) -> Self {
        Task::Fire(fire)
    }
}

impl From<Vehicle> for Task {
    fn from(vehicle: Vehicle) -> Self {
        Task::Vehicle(vehicle)
    }
}
