//! Render-geometry adapters for the classic loading widgets.
//!
//! Each preset owns a [`ProgressController`] and turns its progress into the
//! numbers a painter needs (angles, sweeps, scales, seconds). Hosts tick the
//! controller and call [`Preset::frame`] on every paint pass.

mod circling;
mod countdown;
mod double_circle;
mod material;

pub use circling::{CirclingDot, DotFrame};
pub use countdown::{Countdown, CountdownFrame};
pub use double_circle::{
    CYCLE_MS as DOUBLE_CIRCLE_CYCLE_MS, CirclePairFrame, DoubleCircle,
};
pub use material::{ArcFrame, CYCLE_MS as MATERIAL_CYCLE_MS, MaterialArc};

use crate::controller::ProgressController;

/// A controller plus the geometry derived from it.
pub trait Preset {
    type Frame: std::fmt::Display;

    fn controller(&self) -> &ProgressController;

    fn controller_mut(&mut self) -> &mut ProgressController;

    /// Geometry for the current progress. No side effects.
    fn frame(&self) -> Self::Frame;
}

/// Keeps an angle in `[0, 360)`.
fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_degrees_handles_negatives_and_overflow() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
    }
}
