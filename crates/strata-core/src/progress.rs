// File: crates/strata-core/src/progress.rs
// Summary: Progress reporting seam for grid builds.

use std::cell::Cell;

/// Receives build progress, once per processed axis. Notify-only: the
/// builder never branches on what an implementation does with the call.
pub trait ProgressReporter {
    fn report(&self, done: usize, total: usize);
}

/// Reporter that counts invocations; handy in tests and demos.
#[derive(Debug, Default)]
pub struct CountingReporter {
    calls: Cell<usize>,
    last: Cell<(usize, usize)>,
}

impl CountingReporter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
    /// Last `(done, total)` pair reported.
    pub fn last(&self) -> (usize, usize) {
        self.last.get()
    }
}

impl ProgressReporter for CountingReporter {
    fn report(&self, done: usize, total: usize) {
        self.calls.set(self.calls.get() + 1);
        self.last.set((done, total));
    }
}
