//! Animation core - cooperative scheduler and task state machines
//!
//! This crate has **no terminal I/O**. Everything it draws goes through the
//! write-only [`Canvas`] trait, and everything it reads arrives as
//! [`Controls`](types::Controls) handed in by the host each tick. That keeps
//! it deterministic and testable in isolation.
//!
//! # Module Structure
//!
//! - [`canvas`]: the write-only grid capability and the border helper
//! - [`sprite`]: multi-line glyph art with transparent spaces
//! - [`blink`], [`fire`], [`vehicle`]: the three kinds of animation
//! - [`task`]: the tagged task enum, resume context and task faults
//! - [`scheduler`]: the tick loop and live-set bookkeeping
//! - [`scene`]: the initial task set
//! - [`rng`]: small deterministic RNG
//!
//! # Example
//!
//! ```
//! use tui_starship_core::{Fire, Scheduler};
//! use tui_starship_core::canvas::Canvas;
//! use tui_starship_types::{Controls, Intensity};
//!
//! struct Null;
//! impl Canvas for Null {
//!     fn height(&self) -> i32 { 10 }
//!     fn width(&self) -> i32 { 10 }
//!     fn set_cell(&mut self, _: i32, _: i32, _: char, _: Intensity) {}
//! }
//!
//! let mut scheduler = Scheduler::new();
//! let shot = scheduler.spawn(Fire::new(5.0, 5.0, -1.0, 0.0));
//! let mut ticks = 0;
//! while scheduler.contains(shot) {
//!     scheduler.tick(&mut Null, Controls::IDLE);
//!     ticks += 1;
//! }
//! assert_eq!(ticks, 7);
//! ```

pub mod blink;
pub mod canvas;
pub mod fire;
pub mod rng;
pub mod scene;
pub mod scheduler;
pub mod sprite;
pub mod task;
pub mod vehicle;

#[cfg(test)]
mod testing;

pub use tui_starship_types as types;

pub use blink::Blink;
pub use canvas::{draw_border, Canvas};
pub use fire::Fire;
pub use rng::SimpleRng;
pub use scene::{build_scene, populate_sky, SceneSettings};
pub use scheduler::{Host, RunOutcome, Scheduler, TaskId, TickReport};
pub use sprite::{DrawMode, Sprite};
pub use task::{Step, Task, TaskFault, TickContext};
pub use vehicle::{step_within, Vehicle};
