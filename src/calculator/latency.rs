//! Artificial delay injected at the calculator boundary.
//!
//! The pause only exists so an interactive front end can show a
//! "Calculating..." state; the math never waits.

use std::time::Duration;

pub trait Latency {
    fn wait(&self, duration: Duration);
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn wait(&self, _duration: Duration) {}
}

/// Blocks the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepLatency;

impl Latency for SleepLatency {
    fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
