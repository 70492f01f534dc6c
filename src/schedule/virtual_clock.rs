//! Virtual clock scheduler.
//!
//! Time only moves when a task is taken: `next_task()` jumps `now()` to the
//! task's due time without waiting.

use super::{Millis, Scheduler, TimerQueue};

/// Deterministic scheduler with simulated time.
#[derive(Debug)]
pub struct VirtualClock<T> {
    now: Millis,
    queue: TimerQueue<T>,
}

impl<T> Default for VirtualClock<T> {
    fn default() -> Self {
        Self {
            now: 0,
            queue: TimerQueue::default(),
        }
    }
}

impl<T> VirtualClock<T> {
    /// Create a clock at time 0 with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Due time of the earliest queued task.
    #[must_use]
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.peek_due()
    }

}

impl<T> Scheduler<T> for VirtualClock<T> {
    fn now(&self) -> Millis {
        self.now
    }

    fn schedule(&mut self, delay: Millis, task: T) {
        self.queue.push(self.now + delay, task);
    }

    fn next_task(&mut self) -> Option<T> {
        let (due, task) = self.queue.pop()?;
        self.now = self.now.max(due);
        Some(task)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
