//! Tick sources for hosts that do not have a display-refresh callback.
//!
//! The controller never reads a clock on its own; these helpers only produce
//! the millisecond deltas a host passes to `tick`.

use std::time::{Duration, Instant};

/// Something that hands out the time since it was last asked.
pub trait FrameClock {
    /// Milliseconds since the previous call (or since construction).
    fn delta_ms(&mut self) -> f64;
}

/// Fixed-rate clock for tests and offline rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualClock {
    step_ms: f64,
    frames: u64,
}

impl ManualClock {
    /// Clock advancing `step_ms` per frame.
    pub fn new(step_ms: f64) -> Self {
        Self {
            step_ms: step_ms.max(0.0),
            frames: 0,
        }
    }

    /// Clock for a given refresh rate (frames per second, at least 1).
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1000.0 / f64::from(fps.max(1)))
    }

    #[inline]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    /// Frames handed out so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameClock for ManualClock {
    fn delta_ms(&mut self) -> f64 {
        self.frames = self.frames.wrapping_add(1);
        self.step_ms
    }
}

/// Wall-clock deltas from [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    last: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Elapsed time since the last delta without consuming it.
    pub fn peek(&self) -> Duration {
        self.last.elapsed()
    }
}

impl FrameClock for MonotonicClock {
    fn delta_ms(&mut self) -> f64 {
        let now = Instant::now();
        // Instant is monotonic, so this never goes negative
        let delta = now.duration_since(self.last);
        self.last = now;
        delta.as_secs_f64() * 1000.0
    }
}
