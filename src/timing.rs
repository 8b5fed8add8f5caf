//! Wall-clock timing for arbitrary operations.
//!
//! The measurement is reported when the [`Stopwatch`] is dropped, so an
//! operation that panics is still timed before the panic continues unwinding.

use log::info;
use std::{
    future::Future,
    time::{Duration, Instant},
};

/// Scoped timer that logs `"{label} took {secs}s"` when dropped.
#[derive(Debug)]
pub struct Stopwatch {
    label: &'static str,
    start: Instant,
}

impl Stopwatch {
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Stopwatch {
    fn drop(&mut self) {
        info!("{} took {:.4}s", self.label, self.elapsed().as_secs_f64());
    }
}

/// Runs `op`, logging how long it took, and returns its output unchanged.
pub fn timed<T>(label: &'static str, op: impl FnOnce() -> T) -> T {
    let _stopwatch = Stopwatch::start(label);
    op()
}

/// Async counterpart of [`timed`]; the clock starts when the future is first polled.
pub async fn timed_async<F: Future>(label: &'static str, future: F) -> F::Output {
    let _stopwatch = Stopwatch::start(label);
    future.await
}
