//! Wiring the scheduler to a real terminal.

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::core::{
    build_scene, draw_border, Canvas, Host, RunOutcome, Scheduler, SimpleRng, Sprite, TickReport,
};
use crate::input::KeyboardPoller;
use crate::term::{FrameBuffer, TerminalRenderer};
use crate::types::PolledInput;

/// Host backed by a framebuffer, the keyboard and a terminal renderer.
pub struct TerminalHost<'a> {
    grid: FrameBuffer,
    renderer: &'a mut TerminalRenderer,
    keyboard: KeyboardPoller,
    bell: bool,
}

impl<'a> TerminalHost<'a> {
    pub fn new(renderer: &'a mut TerminalRenderer, height: u16, width: u16, bell: bool) -> Self {
        Self {
            grid: FrameBuffer::new(width, height),
            renderer,
            keyboard: KeyboardPoller::new(),
            bell,
        }
    }
}

impl Host for TerminalHost<'_> {
    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.grid
    }

    fn poll(&mut self) -> Result<PolledInput> {
        self.keyboard.poll()
    }

    fn commit(&mut self, report: &TickReport) -> Result<()> {
        self.renderer.commit(&self.grid)?;
        if report.alert && self.bell {
            self.renderer.beep()?;
        }
        Ok(())
    }
}

/// Run the whole animation on a `height` x `width` grid until every task
/// finishes or the host quits.
pub fn run_animation<H: Host>(
    host: &mut H,
    height: i32,
    width: i32,
    frames: [Sprite; 2],
    config: &Config,
) -> Result<RunOutcome> {
    draw_border(host.canvas());

    let mut rng = SimpleRng::new(config.seed);
    let tasks = build_scene(&mut rng, height, width, frames, &config.scene());
    info!(height, width, seed = config.seed, tasks = tasks.len(), "scene built");

    let mut scheduler = Scheduler::with_tasks(tasks);
    scheduler.run(host, config.tick_interval())
}

/// Run on the real terminal. The renderer must already be in raw mode.
pub fn run_terminal(
    renderer: &mut TerminalRenderer,
    frames: [Sprite; 2],
    config: &Config,
) -> Result<RunOutcome> {
    let (rows, columns) = renderer.size()?;
    let mut host = TerminalHost::new(renderer, rows, columns, config.bell);
    run_animation(&mut host, i32::from(rows), i32::from(columns), frames, config)
}

/// Restore the terminal and log before the default panic output.
pub fn install_panic_hook() {
    let default = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        tracing::error!(target: "runtime.panic", %info, "panic");
        default(info);
    }));
}
