//! TUI Starship (workspace facade crate).
//!
//! Re-exports the member crates under `tui_starship::{core,input,term,types}`
//! and adds the session plumbing: environment configuration, file logging and
//! the terminal host that runs the animation.

pub use tui_starship_core as core;
pub use tui_starship_input as input;
pub use tui_starship_term as term;
pub use tui_starship_types as types;

pub mod app;
pub mod config;
pub mod logging;

pub use app::{run_animation, run_terminal, TerminalHost};
pub use config::Config;
