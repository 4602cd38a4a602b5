//! Material indeterminate spinner: a ring arc whose head and tail chase each
//! other while the whole ring rotates.

use std::fmt;

use crate::controller::ProgressController;
use crate::easing::Easing;
use crate::types::{AnimError, Mode, ProgressSpec};

use super::{Preset, wrap_degrees};

/// One head/tail chase, in milliseconds.
pub const CYCLE_MS: f64 = 1332.0;
/// Longest the arc gets, as a fraction of the ring.
const MAX_ARC: f64 = 0.8;
const MIN_SWEEP_DEG: f64 = 1.0;
/// Rotation repeats every five cycles, after three full turns (1080 degrees).
const ROTATION_PERIOD_CYCLES: u64 = 5;
const DEG_PER_CYCLE: f64 = 1080.0 / ROTATION_PERIOD_CYCLES as f64;

/// Arc geometry in degrees, clockwise from 3 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFrame {
    pub start_deg: f64,
    pub sweep_deg: f64,
    pub rotation_deg: f64,
}

impl fmt::Display for ArcFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "start={:.1} sweep={:.1} rotation={:.1}",
            self.start_deg, self.sweep_deg, self.rotation_deg
        )
    }
}

#[derive(Debug)]
pub struct MaterialArc {
    ctl: ProgressController,
    trim: Easing,
}

impl MaterialArc {
    pub fn new() -> Result<Self, AnimError> {
        Self::with_cycle(CYCLE_MS)
    }

    /// Spinner with a custom chase length.
    pub fn with_cycle(cycle_ms: f64) -> Result<Self, AnimError> {
        // trims are eased per half-cycle, so the controller itself runs linear
        let spec = ProgressSpec::new(cycle_ms, Easing::Linear, Mode::Indeterminate)?;
        Ok(Self {
            ctl: ProgressController::new(spec)?,
            trim: Easing::FastOutSlowIn,
        })
    }
}

impl Preset for MaterialArc {
    type Frame = ArcFrame;

    fn controller(&self) -> &ProgressController {
        &self.ctl
    }

    fn controller_mut(&mut self) -> &mut ProgressController {
        &mut self.ctl
    }

    fn frame(&self) -> ArcFrame {
        let t = self.ctl.raw_progress();
        let turn = (self.ctl.loop_index() % ROTATION_PERIOD_CYCLES) as f64;

        // first half: head grows away from the tail; second half: tail catches up
        let (head, tail) = if t <= 0.5 {
            (MAX_ARC * self.trim.apply(t / 0.5), 0.0)
        } else {
            (MAX_ARC, MAX_ARC * self.trim.apply((t - 0.5) / 0.5))
        };
        // each cycle starts where the previous one's head stopped
        let offset = (turn * MAX_ARC).fract();

        ArcFrame {
            start_deg: wrap_degrees((offset + tail) * 360.0),
            sweep_deg: ((head - tail) * 360.0).max(MIN_SWEEP_DEG),
            rotation_deg: wrap_degrees(DEG_PER_CYCLE * (turn + t)),
        }
    }
}
