//! "Resend code" countdown: a determinate run measured in whole seconds.

use std::fmt;

use crate::controller::ProgressController;
use crate::easing::Easing;
use crate::types::{AnimError, Mode, Phase, ProgressSpec};

use super::Preset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownFrame {
    pub remaining_secs: u32,
    pub ready: bool,
}

impl fmt::Display for CountdownFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ready {
            f.write_str("ready")
        } else {
            write!(f, "resend in {}s", self.remaining_secs)
        }
    }
}

#[derive(Debug)]
pub struct Countdown {
    ctl: ProgressController,
    seconds: u32,
}

impl Countdown {
    /// Countdown over `seconds` (must be at least one).
    pub fn new(seconds: u32) -> Result<Self, AnimError> {
        let spec = ProgressSpec::new(
            f64::from(seconds) * 1000.0,
            Easing::Linear,
            Mode::Determinate,
        )?;
        Ok(Self {
            ctl: ProgressController::new(spec)?,
            seconds,
        })
    }

    #[inline]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Whole seconds left, rounded up. Zero once finished or cancelled.
    pub fn remaining_secs(&self) -> u32 {
        match self.ctl.phase() {
            Phase::Running => {
                let left_ms = (self.ctl.spec().cycle_ms - self.ctl.elapsed_ms()).max(0.0);
                (left_ms / 1000.0).ceil() as u32
            }
            _ => 0,
        }
    }

    /// True when the button can be pressed again.
    pub fn is_ready(&self) -> bool {
        !self.ctl.is_running()
    }

    /// Start over from the full count, even mid-run.
    pub fn restart(&mut self) {
        self.ctl.stop();
        self.ctl.start();
    }
}

impl Preset for Countdown {
    type Frame = CountdownFrame;

    fn controller(&self) -> &ProgressController {
        &self.ctl
    }

    fn controller_mut(&mut self) -> &mut ProgressController {
        &mut self.ctl
    }

    fn frame(&self) -> CountdownFrame {
        CountdownFrame {
            remaining_secs: self.remaining_secs(),
            ready: self.is_ready(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seconds_is_rejected() {
        assert!(matches!(
            Countdown::new(0),
            Err(AnimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn counts_down_in_whole_seconds() {
        let mut cd = Countdown::new(60).unwrap();
        assert!(cd.is_ready());
        cd.controller_mut().start();
        assert_eq!(cd.remaining_secs(), 60);
        let _ = cd.controller_mut().tick(100.0).unwrap();
        assert_eq!(cd.remaining_secs(), 60);
        let _ = cd.controller_mut().tick(900.0).unwrap();
        assert_eq!(cd.remaining_secs(), 59);
        let _ = cd.controller_mut().tick(58_999.0).unwrap();
        assert_eq!(cd.frame().to_string(), "resend in 1s");
        let out = cd.controller_mut().tick(1.0).unwrap();
        assert!(out.completed);
        assert_eq!(cd.frame(), CountdownFrame { remaining_secs: 0, ready: true });
    }

    #[test]
    fn restart_begins_from_full_count() {
        let mut cd = Countdown::new(5).unwrap();
        cd.controller_mut().start();
        let _ = cd.controller_mut().tick(3000.0).unwrap();
        assert_eq!(cd.remaining_secs(), 2);
        cd.restart();
        assert_eq!(cd.remaining_secs(), 5);
        assert!(!cd.is_ready());
    }
}
