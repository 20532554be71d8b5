//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Controls`] and polls the
//! keyboard without blocking, so the animation loop never waits on input.

pub mod map;
pub mod poller;

pub use tui_starship_types as types;

pub use map::{key_to_controls, should_quit};
pub use poller::{fold_events, KeyboardPoller};
