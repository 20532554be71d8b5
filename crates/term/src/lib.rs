//! Terminal output layer.
//!
//! Renders into a simple framebuffer that doubles as the animation's grid
//! surface, and flushes it to the terminal with crossterm.
//!
//! - [`fb`]: the framebuffer; implements the core `Canvas`
//! - [`renderer`]: raw-mode setup, diff commits and the alert bell
//! - [`sprite_file`]: loading sprite art from disk

pub mod fb;
pub mod renderer;
pub mod sprite_file;

pub use tui_starship_core as core;
pub use tui_starship_types as types;

pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprite_file::{load_rocket_frames, load_sprite, ROCKET_FRAMES};
