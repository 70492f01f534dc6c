//! Deferred task scheduling.
//!
//! The battle is a chain of delayed steps. Instead of wiring timers directly
//! into the sequencer, every step is handed to a `Scheduler` together with a
//! delay, and whoever drives the battle pulls due tasks back out.
//!
//! Two implementations are provided:
//!
//! - [`VirtualClock`]: Jumps straight to each task's due time. Deterministic
//!   and instant; used by tests and headless runs.
//! - [`WallClock`]: Sleeps until each task is due. Used by the demo binary.
//!
//! ## Ordering
//!
//! Tasks come out in due-time order. Tasks due at the same instant come out
//! in the order they were scheduled.
//!
//! ```
//! use card_brawl::schedule::{Scheduler, VirtualClock};
//!
//! let mut clock = VirtualClock::new();
//! clock.schedule(500, "second");
//! clock.schedule(100, "first");
//! clock.schedule(500, "third");
//!
//! assert_eq!(clock.next_task(), Some("first"));
//! assert_eq!(clock.now(), 100);
//! assert_eq!(clock.next_task(), Some("second"));
//! assert_eq!(clock.next_task(), Some("third"));
//! assert_eq!(clock.now(), 500);
//! assert!(clock.is_idle());
//! ```

mod virtual_clock;
mod wall_clock;

pub use virtual_clock::VirtualClock;
pub use wall_clock::WallClock;

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Milliseconds since the scheduler was created.
pub type Millis = u64;

/// Trait for task schedulers.
///
/// The scheduler owns the notion of time. Callers never observe time
/// passing except through `now()` after a task is taken.
pub trait Scheduler<T> {
    /// Current time.
    fn now(&self) -> Millis;

    /// Queue `task` to become due `delay` milliseconds from now.
    fn schedule(&mut self, delay: Millis, task: T);

    /// Wait until the earliest task is due, advance `now()` to its due time
    /// and return it. Returns `None` when nothing is queued.
    fn next_task(&mut self) -> Option<T>;

    /// Number of queued tasks.
    fn pending(&self) -> usize;

    /// Check if nothing is queued.
    fn is_idle(&self) -> bool {
        self.pending() == 0
    }
}

/// A queued task with its due time.
#[derive(Debug)]
struct Timer<T> {
    due: Millis,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Timer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Timer<T> {}

impl<T> PartialOrd for Timer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Timer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

/// Min-heap of timers shared by the scheduler implementations.
#[derive(Debug)]
struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<Timer<T>>>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    fn push(&mut self, due: Millis, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Timer { due, seq, task }));
    }

    fn peek_due(&self) -> Option<Millis> {
        self.heap.peek().map(|Reverse(timer)| timer.due)
    }

    fn pop(&mut self) -> Option<(Millis, T)> {
        self.heap.pop().map(|Reverse(timer)| (timer.due, timer.task))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
