//! Delayed task execution
//!
//! Progress steps are fire-once timers. Where they run depends on the host:
//! the GUI hands them to floem's timer queue, the CLI sleeps on threads, and
//! tests drive a virtual clock.

use std::sync::Mutex;
use std::time::Duration;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task after a delay.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Runs each task on its own thread after sleeping for the delay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            task();
        });
    }
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Virtual clock. Nothing runs until [`ManualScheduler::advance`] is called.
///
/// Tasks due at the same instant run in the order they were scheduled.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ClockState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.state.lock().map(|s| s.now).unwrap_or_default()
    }

    /// Number of tasks that have not fired yet
    pub fn pending(&self) -> usize {
        self.state.lock().map(|s| s.pending.len()).unwrap_or_default()
    }

    /// Move the clock forward, running every task that falls due on the way.
    ///
    /// Tasks may schedule further tasks; those run too if they fall inside
    /// the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;

        while let Some(task) = self.pop_due(target) {
            task();
        }

        if let Ok(mut state) = self.state.lock() {
            state.now = target;
        }
    }

    // The lock is released before the task runs.
    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.state.lock().ok()?;
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= target)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let next = state.pending.swap_remove(index);
        state.now = next.due;
        Some(next.task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        if let Ok(mut state) = self.state.lock() {
            let due = state.now + delay;
            let seq = state.next_seq;
            state.next_seq += 1;
            state.pending.push(PendingTask { due, seq, task });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::mpsc;

    #[test]
    fn test_manual_scheduler_runs_in_due_order() {
        let clock = ManualScheduler::new();
        let (tx, rx) = mpsc::channel();

        for (delay, tag) in [(300, "c"), (100, "a"), (200, "b"), (100, "a2")] {
            let tx = tx.clone();
            clock.schedule(Duration::from_millis(delay), Box::new(move || {
                tx.send(tag).unwrap();
            }));
        }

        clock.advance(Duration::from_millis(150));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["a", "a2"]);
        assert_eq!(clock.pending(), 2);

        clock.advance(Duration::from_millis(150));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(clock.now(), Duration::from_millis(300));
    }

    #[test]
    fn test_manual_scheduler_nested_schedule() {
        let clock = Arc::new(ManualScheduler::new());
        let (tx, rx) = mpsc::channel();

        let inner_clock = clock.clone();
        clock.schedule(Duration::from_millis(10), Box::new(move || {
            inner_clock.schedule(Duration::from_millis(10), Box::new(move || {
                tx.send("fired").unwrap();
            }));
        }));

        clock.advance(Duration::from_millis(25));
        assert_eq!(rx.try_recv().unwrap(), "fired");
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_thread_scheduler_fires() {
        let (tx, rx) = mpsc::channel();
        ThreadScheduler::new().schedule(Duration::from_millis(5), Box::new(move || {
            tx.send(7u8).unwrap();
        }));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), 7);
    }
}
