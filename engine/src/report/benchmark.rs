//! A few utilities to measure how long executing algorithms takes.

use std::sync::atomic::{compiler_fence, Ordering::SeqCst};
use std::time::*;
use tracing::info;

/// This function will measure how long it takes to execute the given lambda,
/// log the time and return the result of the lambda.
pub fn report_time<Out, F: FnOnce() -> Out>(name: &str, f: F) -> Out {
    let (res, t_passed) = measure(f);
    info!("{} done - took: {}ms", name, t_passed.as_secs_f64() * 1000.0);
    res
}

/// This function will measure how long it takes to execute the given lambda
/// and return a tuple of the result of the lambda and a duration object.
pub fn measure<Out, F: FnOnce() -> Out>(f: F) -> (Out, Duration) {
    compiler_fence(SeqCst);
    let start = Instant::now();
    let res = f();
    let t_passed = start.elapsed();
    compiler_fence(SeqCst);
    (res, t_passed)
}

/// A struct to repeatedly measure the time passed since the timer was started
#[derive(Debug)]
pub struct Timer {
    start: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create and start a new `Timer`
    pub fn new() -> Timer {
        Timer { start: Instant::now() }
    }

    pub fn restart(&mut self) {
        self.start = Instant::now();
    }

    /// Log the passed time in ms since the timer was started
    pub fn report_passed_ms(&self, name: &str) {
        info!("{} - {}ms passed", name, self.start.elapsed().as_secs_f64() * 1000.0);
    }

    pub fn get_passed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    pub fn get_passed(&self) -> Duration {
        self.start.elapsed()
    }
}
