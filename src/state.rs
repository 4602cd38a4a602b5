//! Animation state owned by a controller.

use crate::types::Phase;

/// Snapshot of where an animation is.
///
/// Only the controller mutates it; callers get copies through
/// [`ProgressController::state`](crate::ProgressController::state).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub(crate) elapsed_ms: f64,
    pub(crate) phase: Phase,
    pub(crate) loop_index: u64,
}

impl AnimationState {
    /// Time since the current phase started, in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed full cycles.
    #[inline]
    pub fn loop_index(&self) -> u64 {
        self.loop_index
    }

    /// Move to `phase`, resetting elapsed time.
    pub(crate) fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        self.elapsed_ms = 0.0;
    }

    /// Add `n` loops, saturating at `cap` when given.
    pub(crate) fn add_loops(&mut self, n: u64, cap: Option<u64>) {
        let next = self.loop_index.saturating_add(n);
        self.loop_index = match cap {
            Some(cap) => next.min(cap),
            None => next,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stopped_at_zero() {
        let s = AnimationState::default();
        assert_eq!(s.phase(), Phase::Stopped);
        assert_eq!(s.elapsed_ms(), 0.0);
        assert_eq!(s.loop_index(), 0);
    }

    #[test]
    fn enter_resets_elapsed() {
        let mut s = AnimationState {
            elapsed_ms: 42.0,
            phase: Phase::Running,
            loop_index: 3,
        };
        s.enter(Phase::Completing);
        assert_eq!(s.elapsed_ms(), 0.0);
        assert_eq!(s.loop_index(), 3);
    }

    #[test]
    fn loops_saturate_at_cap() {
        let mut s = AnimationState::default();
        s.add_loops(5, Some(3));
        assert_eq!(s.loop_index(), 3);
        s.add_loops(u64::MAX, None);
        assert_eq!(s.loop_index(), u64::MAX);
    }
}
