use std::time::Duration;

use dropcore::scheduler::{Scheduler, Task};
use floem::action::exec_after;

/// Runs progress steps on floem's timer queue, on the UI thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloemScheduler;

impl Scheduler for FloemScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        exec_after(delay, move |_| task());
    }
}
