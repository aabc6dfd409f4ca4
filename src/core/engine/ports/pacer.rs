use crate::core::data::speed::{Pace, Speed};
use std::time::Duration;

/// Suspension point between steps. The engine yields here after every
/// visualized operation; implementations decide what a pause means.
pub trait Pacer {
    fn pause(&mut self, pace: Pace);
}

/// Sleeps the sorting thread for the speed-derived delay.
#[derive(Debug, Copy, Clone)]
pub struct ThreadPacer {
    base_delay: Duration,
}

impl ThreadPacer {
    #[must_use]
    pub fn new(speed: Speed) -> Self {
        Self {
            base_delay: speed.base_delay(),
        }
    }
}

impl Pacer for ThreadPacer {
    fn pause(&mut self, pace: Pace) {
        let delay = pace.scaled(self.base_delay);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Skips every pause; for tests and benchmarks where only the step stream
/// matters.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn pause(&mut self, _pace: Pace) {}
}
