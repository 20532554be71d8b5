//! Terminal starship runner (default binary).
//!
//! Stars blink, the ship flies with the arrow keys (or WASD/HJKL) and fires
//! with space. `q`, `Esc` or Ctrl-C quits.

use anyhow::Result;

use tui_starship::app::{install_panic_hook, run_terminal};
use tui_starship::config::Config;
use tui_starship::logging;
use tui_starship::term::{load_rocket_frames, TerminalRenderer};

fn main() -> Result<()> {
    let config = Config::from_env();
    let _log_guard = logging::init(&config)?;
    tracing::info!(?config, "starting");

    // Load art before touching the terminal so a missing file prints cleanly.
    let frames = load_rocket_frames(&config.sprite_dir)?;

    install_panic_hook();
    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .and_then(|()| run_terminal(&mut term, frames, &config));

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(outcome) => tracing::info!(?outcome, "session ended"),
        Err(err) => tracing::error!(error = %format!("{err:#}"), "session failed"),
    }
    result.map(|_| ())
}
