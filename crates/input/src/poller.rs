//! Non-blocking keyboard polling.
//!
//! Each poll drains whatever events are already queued and folds them into a
//! single [`Controls`] value; it never waits for a key press.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{key_to_controls, should_quit};
use crate::types::{Controls, PolledInput};

/// Upper bound on events consumed per poll, so a flood of input cannot stall a tick.
pub const DEFAULT_MAX_EVENTS_PER_POLL: usize = 64;

/// Fold a batch of terminal events into one input sample.
///
/// Presses and auto-repeats count; releases are ignored. A quit key wins over
/// everything else in the batch.
pub fn fold_events<I>(events: I) -> PolledInput
where
    I: IntoIterator<Item = Event>,
{
    let mut controls = Controls::IDLE;
    for ev in events {
        match fold_one(&mut controls, &ev) {
            PolledInput::Quit => return PolledInput::Quit,
            PolledInput::Controls(_) => {}
        }
    }
    PolledInput::Controls(controls)
}

fn fold_one(controls: &mut Controls, ev: &Event) -> PolledInput {
    if let Event::Key(key) = ev {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if should_quit(*key) {
                    return PolledInput::Quit;
                }
                if let Some(c) = key_to_controls(*key) {
                    controls.merge(c);
                }
            }
            KeyEventKind::Release => {}
        }
    }
    PolledInput::Controls(*controls)
}

/// Reads the real keyboard through crossterm.
#[derive(Debug, Clone)]
pub struct KeyboardPoller {
    max_events: usize,
}

impl Default for KeyboardPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardPoller {
    pub fn new() -> Self {
        Self {
            max_events: DEFAULT_MAX_EVENTS_PER_POLL,
        }
    }

    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events.max(1);
        self
    }

    /// Drain queued events without blocking.
    pub fn poll(&mut self) -> Result<PolledInput> {
        let mut controls = Controls::IDLE;
        for _ in 0..self.max_events {
            if !event::poll(Duration::ZERO).context("poll input device")? {
                break;
            }
            let ev = event::read().context("read input device")?;
            if let Event::Resize(columns, rows) = ev {
                tracing::debug!(rows, columns, "terminal resized; grid size stays fixed");
                continue;
            }
            if fold_one(&mut controls, &ev) == PolledInput::Quit {
                return Ok(PolledInput::Quit);
            }
        }
        Ok(PolledInput::Controls(controls))
    }
}
