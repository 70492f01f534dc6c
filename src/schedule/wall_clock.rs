//! Wall-clock scheduler.
//!
//! Blocks the calling thread until the next task is due. Single-threaded:
//! there is no background timer, the driver simply sleeps between steps.

use std::time::{Duration, Instant};

use super::{Millis, Scheduler, TimerQueue};

/// Scheduler that waits in real time.
#[derive(Debug)]
pub struct WallClock<T> {
    started: Instant,
    queue: TimerQueue<T>,
}

impl<T> Default for WallClock<T> {
    fn default() -> Self {
        Self {
            started: Instant::now(),
            queue: TimerQueue::default(),
        }
    }
}

impl<T> WallClock<T> {
    /// Create a clock starting now.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Scheduler<T> for WallClock<T> {
    fn now(&self) -> Millis {
        self.started.elapsed().as_millis() as Millis
    }

    fn schedule(&mut self, delay: Millis, task: T) {
        self.queue.push(self.now() + delay, task);
    }

    fn next_task(&mut self) -> Option<T> {
        let due = self.queue.peek_due()?;
        let now = self.now();
        if due > now {
            std::thread::sleep(Duration::from_millis(due - now));
        }
        self.queue.pop().map(|(_, task)| task)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
