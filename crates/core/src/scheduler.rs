//! Cooperative tick scheduler.
//!
//! Every tick each live task is resumed exactly once, in insertion order.
//! Tasks spawned during a tick are buffered and join the live set once the
//! scan is over, so they are first resumed on the following tick. Finished
//! and faulted tasks are dropped at the end of the scan.

use std::fmt;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, trace, warn};

use crate::canvas::Canvas;
use crate::task::{Step, Task, TaskFault, TickContext};
use crate::types::{Controls, PolledInput};

/// Stable identifier of a task within one scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
struct Slot {
    id: TaskId,
    task: Task,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    /// Tasks resumed this tick.
    pub resumed: usize,
    /// Tasks that joined the live set at the end of this tick.
    pub spawned: Vec<TaskId>,
    /// Tasks that finished naturally.
    pub finished: Vec<TaskId>,
    /// Tasks removed because they faulted.
    pub faulted: Vec<(TaskId, TaskFault)>,
    /// Some task asked for the alert signal.
    pub alert: bool,
}

/// The environment a scheduler runs in: grid, input device and display.
pub trait Host {
    fn canvas(&mut self) -> &mut dyn Canvas;

    /// Non-blocking read of the input accumulated since the last poll.
    fn poll(&mut self) -> Result<PolledInput>;

    /// Push the grid to the display.
    fn commit(&mut self, report: &TickReport) -> Result<()>;

    fn sleep_until(&mut self, deadline: Instant) {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
}

/// How [`Scheduler::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every task finished.
    Completed { ticks: u64 },
    /// The host asked to stop.
    Interrupted { ticks: u64 },
}

/// Owns the live task set and advances it tick by tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<Slot>,
    incoming: Vec<Task>,
    next_id: u64,
    tick: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks<I, T>(tasks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Task>,
    {
        let mut scheduler = Self::new();
        for task in tasks {
            scheduler.spawn(task);
        }
        scheduler
    }

    /// Add a task to the live set. Between ticks it is resumed on the next tick.
    pub fn spawn(&mut self, task: impl Into<Task>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Slot {
            id,
            task: task.into(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|slot| slot.id == id)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.task)
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Resume every live task once.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, controls: Controls) -> TickReport {
        let mut report = TickReport {
            tick: self.tick,
            ..TickReport::default()
        };
        let mut incoming = std::mem::take(&mut self.incoming);

        self.tasks.retain_mut(|slot| {
            report.resumed += 1;
            let mut ctx = TickContext::new(&mut *canvas, controls, &mut incoming);
            let step = slot.task.resume(&mut ctx);
            report.alert |= ctx.alert_requested();

            match step {
                Ok(Step::Pending) => true,
                Ok(Step::Done) => {
                    debug!(id = %slot.id, kind = slot.task.kind(), "task finished");
                    report.finished.push(slot.id);
                    false
                }
                Err(fault) => {
                    warn!(id = %slot.id, kind = slot.task.kind(), %fault, "task faulted; removing");
                    report.faulted.push((slot.id, fault));
                    false
                }
            }
        });

        for task in incoming.drain(..) {
            let kind = task.kind();
            let id = self.spawn(task);
            debug!(%id, kind, "task spawned");
            report.spawned.push(id);
        }
        self.incoming = incoming;

        trace!(
            tick = report.tick,
            resumed = report.resumed,
            live = self.tasks.len(),
            "tick complete"
        );
        self.tick += 1;
        report
    }

    /// Drive the fixed-rate loop until every task finishes or the host quits.
    ///
    /// Input, display and sleeping go through `host`; its errors end the run.
    pub fn run<H: Host>(&mut self, host: &mut H, interval: Duration) -> Result<RunOutcome> {
        info!(tasks = self.len(), interval_ms = interval.as_millis() as u64, "scheduler started");
        let mut deadline = Instant::now();

        while !self.is_empty() {
            let controls = match host.poll()? {
                PolledInput::Controls(controls) => controls,
                PolledInput::Quit => {
                    info!(ticks = self.tick, "scheduler interrupted");
                    return Ok(RunOutcome::Interrupted { ticks: self.tick });
                }
            };

            let report = self.tick(host.canvas(), controls);
            host.commit(&report)?;

            deadline += interval;
            let now = Instant::now();
            if deadline < now {
                deadline = now;
            }
            host.sleep_until(deadline);
        }

        info!(ticks = self.tick, "all tasks finished");
        Ok(RunOutcome::Completed { ticks: self.tick })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blink::Blink;
    use crate::fire::Fire;
    use crate::sprite::Sprite;
    use crate::testing::TestCanvas;
    use crate::vehicle::Vehicle;

    #[test]
    fn fire_leaves_live_set_at_tick_six() {
        let mut canvas = TestCanvas::new(10, 10);
        let mut scheduler = Scheduler::new();
        let id = scheduler.spawn(Fire::new(5.0, 5.0, -1.0, 0.0));

        for tick in 0..6 {
            let report = scheduler.tick(&mut canvas, Controls::IDLE);
            assert!(report.finished.is_empty(), "tick {tick}");
            assert!(scheduler.contains(id), "tick {tick}");
        }

        let report = scheduler.tick(&mut canvas, Controls::IDLE);
        assert_eq!(report.tick, 6);
        assert_eq!(report.finished, vec![id]);
        assert!(!scheduler.contains(id));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn spawned_task_first_runs_next_tick() {
        let mut canvas = TestCanvas::new(20, 12);
        let frames = [Sprite::from_text("^"), Sprite::from_text("^")];
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Vehicle::new(10, 5, frames).with_fire_velocity(-1.0, 0.0));

        let report = scheduler.tick(&mut canvas, Controls::new(0, 0, true));
        assert_eq!(report.resumed, 1);
        assert_eq!(report.spawned.len(), 1);
        assert_eq!(scheduler.len(), 2);
        // Nose cell is untouched: the shot has not run yet.
        assert_eq!(canvas.symbol(9, 5), ' ');

        let report = scheduler.tick(&mut canvas, Controls::IDLE);
        assert_eq!(report.resumed, 2);
        assert_eq!(canvas.symbol(9, 5), '*');
    }

    #[test]
    fn crawling_shots_do_not_pile_up() {
        let mut canvas = TestCanvas::new(20, 20);
        let mut scheduler = Scheduler::new();
        scheduler.spawn(Blink::new(2, 2, '+', 1));

        for _ in 0..1_000 {
            scheduler.spawn(Fire::new(10.0, 10.0, -1e-9, 0.0));
            scheduler.tick(&mut canvas, Controls::IDLE);
        }
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn faulted_task_is_removed_and_others_keep_running() {
        let mut canvas = TestCanvas::new(10, 10);
        let mut scheduler = Scheduler::new();
        let star = scheduler.spawn(Blink::new(2, 2, '+', 1));
        let bad = scheduler.spawn(Fire::new(5.0, 5.0, 0.0, 0.0));

        let report = scheduler.tick(&mut canvas, Controls::IDLE);
        assert_eq!(report.faulted.len(), 1);
        assert_eq!(report.faulted[0], (bad, TaskFault::Stalled { speed: 0.0 }));
        assert!(scheduler.contains(star));
        assert!(!scheduler.contains(bad));

        let report = scheduler.tick(&mut canvas, Controls::IDLE);
        assert_eq!(report.resumed, 1);
        assert!(report.faulted.is_empty());
    }

    #[test]
    fn alert_is_reported_once_per_shot() {
        let mut canvas = TestCanvas::new(10, 10);
        let mut scheduler = Scheduler::with_tasks([Fire::new(5.0, 5.0, -1.0, 0.0)]);

        let alerts: Vec<bool> = (0..4)
            .map(|_| scheduler.tick(&mut canvas, Controls::IDLE).alert)
            .collect();
        assert_eq!(alerts, vec![false, false, true, false]);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.spawn(Blink::new(1, 1, '.', 3));
        let b = scheduler.spawn(Blink::new(1, 2, '.', 3));
        assert!(a < b);
        assert_eq!(a.to_string(), "#0");
        assert!(matches!(scheduler.get(b), Some(Task::Blink(_))));
    }

    struct ScriptedHost {
        canvas: TestCanvas,
        inputs: Vec<PolledInput>,
        commits: usize,
        sleeps: usize,
    }

    impl Host for ScriptedHost {
        fn canvas(&mut self) -> &mut dyn Canvas {
            &mut self.canvas
        }

        fn poll(&mut self) -> Result<PolledInput> {
            if self.inputs.is_empty() {
                return Ok(PolledInput::Controls(Controls::IDLE));
            }
            Ok(self.inputs.remove(0))
        }

        fn commit(&mut self, _report: &TickReport) -> Result<()> {
            self.commits += 1;
            Ok(())
        }

        fn sleep_until(&mut self, _deadline: Instant) {
            self.sleeps += 1;
        }
    }

    fn host(inputs: Vec<PolledInput>) -> ScriptedHost {
        ScriptedHost {
            canvas: TestCanvas::new(10, 10),
            inputs,
            commits: 0,
            sleeps: 0,
        }
    }

    #[test]
    fn run_completes_when_all_tasks_finish() {
        let mut host = host(Vec::new());
        let mut scheduler = Scheduler::with_tasks([Fire::new(5.0, 5.0, -1.0, 0.0)]);

        let outcome = scheduler.run(&mut host, Duration::from_millis(100)).unwrap();
        assert_eq!(outcome, RunOutcome::Completed { ticks: 7 });
        assert_eq!(host.commits, 7);
        assert_eq!(host.sleeps, 7);
    }

    #[test]
    fn run_stops_on_quit() {
        let mut host = host(vec![
            PolledInput::Controls(Controls::IDLE),
            PolledInput::Controls(Controls::IDLE),
            PolledInput::Quit,
        ]);
        let mut scheduler = Scheduler::with_tasks([Blink::new(1, 1, '*', 2)]);

        let outcome = scheduler.run(&mut host, Duration::ZERO).unwrap();
        assert_eq!(outcome, RunOutcome::Interrupted { ticks: 2 });
        assert_eq!(host.commits, 2);
    }

    #[test]
    fn run_with_no_tasks_returns_immediately() {
        let mut host = host(vec![PolledInput::Quit]);
        let outcome = Scheduler::new().run(&mut host, Duration::ZERO).unwrap();
        assert_eq!(outcome, RunOutcome::Completed { ticks: 0 });
        assert_eq!(host.commits, 0);
    }

    struct BrokenDisplay(TestCanvas);

    impl Host for BrokenDisplay {
        fn canvas(&mut self) -> &mut dyn Canvas {
            &mut self.0
        }

        fn poll(&mut self) -> Result<PolledInput> {
            Ok(PolledInput::Controls(Controls::IDLE))
        }

        fn commit(&mut self, _report: &TickReport) -> Result<()> {
            anyhow::bail!("display went away")
        }
    }

    #[test]
    fn display_failure_is_fatal() {
        let mut host = BrokenDisplay(TestCanvas::new(5, 5));
        let mut scheduler = Scheduler::with_tasks([Blink::new(1, 1, '*', 2)]);
        let err = scheduler.run(&mut host, Duration::ZERO).unwrap_err();
        assert!(err.to_string().contains("display went away"));
        assert_eq!(scheduler.ticks(), 1);
    }
}
