use std::time::Instant;

/// Monotonic milliseconds.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Milliseconds since the clock was created.
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
