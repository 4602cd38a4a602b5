//! A dot running around a circle, slowing at the top.

use std::fmt;

use crate::controller::ProgressController;
use crate::easing::Easing;
use crate::types::{AnimError, Mode, ProgressSpec};

use super::{Preset, wrap_degrees};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotFrame {
    /// Clockwise from 12 o'clock.
    pub angle_deg: f64,
    /// Offset from the circle centre, y pointing down.
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for DotFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "angle={:.1} x={:.2} y={:.2}", self.angle_deg, self.x, self.y)
    }
}

#[derive(Debug)]
pub struct CirclingDot {
    ctl: ProgressController,
    radius: f64,
}

impl CirclingDot {
    pub fn new(cycle_ms: f64, radius: f64) -> Result<Self, AnimError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(AnimError::InvalidConfiguration("radius must be non-negative"));
        }
        let spec = ProgressSpec::new(cycle_ms, Easing::AccelerateDecelerate, Mode::Indeterminate)?;
        Ok(Self {
            ctl: ProgressController::new(spec)?,
            radius,
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Preset for CirclingDot {
    type Frame = DotFrame;

    fn controller(&self) -> &ProgressController {
        &self.ctl
    }

    fn controller_mut(&mut self) -> &mut ProgressController {
        &mut self.ctl
    }

    fn frame(&self) -> DotFrame {
        let angle_deg = wrap_degrees(360.0 * self.ctl.current_progress());
        let rad = angle_deg.to_radians();
        DotFrame {
            angle_deg,
            x: self.radius * rad.sin(),
            y: -self.radius * rad.cos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_starts_at_top() {
        let dot = CirclingDot::new(1000.0, 10.0).unwrap();
        let f = dot.frame();
        assert_eq!(f.angle_deg, 0.0);
        assert!(f.x.abs() < 1e-9);
        assert!((f.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn dot_is_at_bottom_halfway() {
        let mut dot = CirclingDot::new(1000.0, 10.0).unwrap();
        dot.controller_mut().start();
        let _ = dot.controller_mut().tick(500.0).unwrap();
        let f = dot.frame();
        assert!((f.angle_deg - 180.0).abs() < 1e-6);
        assert!((f.y - 10.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_negative_radius() {
        assert!(matches!(
            CirclingDot::new(1000.0, -1.0),
            Err(AnimError::InvalidConfiguration(_))
        ));
    }
}
