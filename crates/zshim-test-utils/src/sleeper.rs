//! Stand-ins for the kernel's millisecond sleep.

use std::cell::{Cell, RefCell};
use std::thread;
use std::time::Duration;

use zshim_core::KernelSleep;

/// Records every request and returns at once.
///
/// Returns 0 unless [`wake_early`](Self::wake_early) set a remainder,
/// which models a thread woken before its timeout.
pub struct RecordingSleeper {
    calls: RefCell<Vec<i32>>,
    remaining: Cell<i32>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            remaining: Cell::new(0),
        }
    }

    pub fn wake_early(&self, remaining_ms: i32) {
        self.remaining.set(remaining_ms);
    }

    pub fn calls(&self) -> Vec<i32> {
        self.calls.borrow().clone()
    }
}

impl Default for RecordingSleeper {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelSleep for RecordingSleeper {
    fn msleep(&self, ms: i32) -> i32 {
        self.calls.borrow_mut().push(ms);
        self.remaining.get()
    }
}

/// Blocks the calling OS thread. Negative durations do not sleep.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleeper;

impl KernelSleep for ThreadSleeper {
    fn msleep(&self, ms: i32) -> i32 {
        if ms > 0 {
            thread::sleep(Duration::from_millis(ms as u64));
        }
        0
    }
}
