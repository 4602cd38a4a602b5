//! Two concentric circles breathing in antiphase.

use std::fmt;

use crate::controller::ProgressController;
use crate::easing::Easing;
use crate::types::{AnimError, Mode, ProgressSpec};

use super::Preset;

pub const CYCLE_MS: f64 = 1800.0;

/// Scales in `[0, 1]`; they always sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePairFrame {
    pub inner_scale: f64,
    pub outer_scale: f64,
}

impl fmt::Display for CirclePairFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inner={:.3} outer={:.3}", self.inner_scale, self.outer_scale)
    }
}

#[derive(Debug)]
pub struct DoubleCircle {
    ctl: ProgressController,
    pulse: Easing,
}

impl DoubleCircle {
    pub fn new() -> Result<Self, AnimError> {
        Self::with_cycle(CYCLE_MS)
    }

    pub fn with_cycle(cycle_ms: f64) -> Result<Self, AnimError> {
        let spec = ProgressSpec::new(cycle_ms, Easing::Linear, Mode::Indeterminate)?;
        Ok(Self {
            ctl: ProgressController::new(spec)?,
            pulse: Easing::AccelerateDecelerate,
        })
    }
}

impl Preset for DoubleCircle {
    type Frame = CirclePairFrame;

    fn controller(&self) -> &ProgressController {
        &self.ctl
    }

    fn controller_mut(&mut self) -> &mut ProgressController {
        &mut self.ctl
    }

    fn frame(&self) -> CirclePairFrame {
        // up then down once per cycle
        let t = self.ctl.raw_progress();
        let triangle = 1.0 - (2.0 * t - 1.0).abs();
        let inner_scale = self.pulse.apply(triangle);
        CirclePairFrame {
            inner_scale,
            outer_scale: 1.0 - inner_scale,
        }
    }
}
