use log::debug;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

pub const MAX_TICK_RATE: u32 = 200;
pub const MAX_FRAME_CAP: u32 = 240;
/// Slack allowed on top of the poll wait before a frame counts as long.
const LONG_FRAME_MARGIN_MS: u64 = 250;

/// Fixed physics constants. Inserted into the ECS resources and read by every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub floor_level: f32,
    pub restitution: f32,
    pub output_scale: u32,
    pub resolution: u32,
    pub spawn_velocity: f32,
    pub spawn_displacement: f32,
    pub spawn_acceleration: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            floor_level: 20.,
            restitution: 0.8,
            output_scale: 600,
            resolution: 6,
            spawn_velocity: 8.,
            spawn_displacement: 20.,
            spawn_acceleration: -0.0981,
        }
    }
}

impl SimulationConfig {
    pub fn history_len(&self) -> usize {
        (self.output_scale / self.resolution.max(1)) as usize
    }
}

/// Live-adjustable rates. Either may transiently be zero while a trackbar is dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateConfig {
    pub tick_rate: u32,
    pub frame_cap: u32,
}

impl Default for RateConfig {
    fn default() -> Self {
        RateConfig {
            tick_rate: 120,
            frame_cap: 200,
        }
    }
}

impl RateConfig {
    /// `None` while the tick rate is zero, which pauses physics.
    pub fn tick_duration_ms(&self) -> Option<u64> {
        if self.tick_rate == 0 {
            return None;
        }
        Some((1000 / self.tick_rate).max(1) as u64)
    }

    /// How long input polling may block. Doubles as the frame limiter.
    pub fn poll_timeout(&self) -> Duration {
        let ms = 1000 / self.frame_cap.max(1);
        Duration::from_millis(ms.max(1) as u64)
    }

    /// A frame is long when it overran the configured poll wait by more than the margin.
    pub fn is_long_frame(&self, delta_ms: u64) -> bool {
        delta_ms > self.poll_timeout().as_millis() as u64 + LONG_FRAME_MARGIN_MS
    }
}

/// Shared handle to the rates. The main loop reads it every frame; the trackbars write it.
#[derive(Clone, Debug, Default)]
pub struct SharedRates {
    inner: Rc<Cell<RateConfig>>,
}

impl SharedRates {
    pub fn new(rates: RateConfig) -> SharedRates {
        SharedRates {
            inner: Rc::new(Cell::new(rates)),
        }
    }

    pub fn get(&self) -> RateConfig {
        self.inner.get()
    }

    pub fn set_tick_rate(&self, tick_rate: u32) {
        let mut rates = self.inner.get();
        rates.tick_rate = tick_rate.min(MAX_TICK_RATE);
        self.inner.set(rates);
    }

    pub fn set_frame_cap(&self, frame_cap: u32) {
        let mut rates = self.inner.get();
        rates.frame_cap = frame_cap.min(MAX_FRAME_CAP);
        self.inner.set(rates);
    }
}

/// Carries time debt between variable-length frames and fixed-length ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeAccumulator {
    last_sample: u64,
    carry: u64,
    total_ticks: u64,
}

impl TimeAccumulator {
    pub fn new(now: u64) -> TimeAccumulator {
        TimeAccumulator {
            last_sample: now,
            carry: 0,
            total_ticks: 0,
        }
    }

    /// Folds the time since the last sample into the carry and returns how many whole ticks
    /// are due. A paused tick rate drops the elapsed time and keeps the carry as it was.
    pub fn advance(&mut self, now: u64, tick_duration_ms: Option<u64>) -> u64 {
        let delta = now.saturating_sub(self.last_sample);
        self.last_sample = now;
        let tick_ms = match tick_duration_ms {
            Some(tick_ms) if tick_ms > 0 => tick_ms,
            _ => {
                debug!("Physics paused, dropping {}ms", delta);
                return 0;
            }
        };
        let elapsed = delta + self.carry;
        let ticks = elapsed / tick_ms;
        self.carry = elapsed % tick_ms;
        self.total_ticks += ticks;
        ticks
    }

    pub fn last_sample(&self) -> u64 {
        self.last_sample
    }

    pub fn carry(&self) -> u64 {
        self.carry
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}
