//! Looping the host's ever-increasing clock into one motion cycle.

use instant::Instant;

use crate::config::MotionConfig;

/// Reduces a raw clock value to a position within one cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleClock {
    pub period_ms: f32,
}

impl CycleClock {
    pub fn new(period_ms: f32) -> Self {
        Self { period_ms }
    }

    pub fn for_config(config: &MotionConfig) -> Self {
        Self::new(config.total_cycle_duration())
    }

    /// `raw_ms mod period`, computed in f64 so long-running clocks keep their
    /// precision. Negative or non-finite input maps to 0, as does an empty period.
    pub fn looped(&self, raw_ms: f64) -> f32 {
        let period = self.period_ms as f64;
        if period <= 0.0 || !period.is_finite() || !raw_ms.is_finite() || raw_ms <= 0.0 {
            return 0.0;
        }
        let looped = (raw_ms % period) as f32;
        // f32 rounding can land exactly on the period; that instant is the next cycle's 0.
        if looped >= self.period_ms {
            0.0
        } else {
            looped
        }
    }

    /// Number of completed cycles at `raw_ms`.
    pub fn cycle_index(&self, raw_ms: f64) -> u64 {
        let period = self.period_ms as f64;
        if period <= 0.0 || !period.is_finite() || !raw_ms.is_finite() || raw_ms <= 0.0 {
            return 0;
        }
        (raw_ms / period).floor() as u64
    }
}

/// Monotonic wall clock a host reads once per frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    start: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::start()
    }
}
