//! Progress controller: the state machine behind every spinner and bar.
//!
//! ```text
//! Stopped --start()--> Running --tick() wraps--> Running      (indeterminate)
//!                      Running --tick() ends---> Completing --> Stopped (determinate)
//!                      Running --stop()--------> Stopped
//! ```
//!
//! The controller is driven by a single logical thread. Hosts that tick from
//! a background clock must marshal calls back onto that thread themselves.

use std::fmt;
use std::time::Duration;

use tracing::{debug, trace};

use crate::interpolate::interpolate;
use crate::state::AnimationState;
use crate::types::{AnimError, Completion, Mode, Phase, ProgressSpec, TickOutcome};

type CompletionFn = Box<dyn FnMut(Completion) + Send>;

/// Frame-driven progress animation.
///
/// # Example
///
/// ```
/// use spin_state::{Easing, Mode, Phase, ProgressController, ProgressSpec};
///
/// let spec = ProgressSpec::new(1000.0, Easing::Linear, Mode::Determinate).unwrap();
/// let mut ctl = ProgressController::new(spec).unwrap();
/// ctl.start();
/// let _ = ctl.tick(500.0).unwrap();
/// assert_eq!(ctl.current_progress(), 0.5);
/// let outcome = ctl.tick(500.0).unwrap();
/// assert!(outcome.completed);
/// assert_eq!(ctl.phase(), Phase::Stopped);
/// assert_eq!(ctl.current_progress(), 1.0);
/// ```
pub struct ProgressController {
    spec: ProgressSpec,
    state: AnimationState,
    /// Normalized time shown while stopped (0 after stop, 1 after completion).
    held: f64,
    on_complete: Option<CompletionFn>,
}

impl fmt::Debug for ProgressController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressController")
            .field("spec", &self.spec)
            .field("state", &self.state)
            .field("held", &self.held)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

impl ProgressController {
    /// Create a stopped controller for a validated spec.
    pub fn new(spec: ProgressSpec) -> Result<Self, AnimError> {
        spec.validate()?;
        Ok(Self {
            spec,
            state: AnimationState::default(),
            held: 0.0,
            on_complete: None,
        })
    }

    /// Install the completion callback.
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnMut(Completion) + Send + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Begin a fresh run. No-op when already running.
    ///
    /// Returns `true` if the host should repaint.
    pub fn start(&mut self) -> bool {
        if self.state.phase == Phase::Running {
            return false;
        }
        self.state.enter(Phase::Running);
        self.state.loop_index = 0;
        self.held = 0.0;
        debug!(mode = ?self.spec.mode, cycle_ms = self.spec.cycle_ms, "animation started");
        true
    }

    /// Stop immediately, discarding in-flight progress.
    ///
    /// Fires [`Completion::Cancelled`] once. Stopping a stopped controller does
    /// nothing and does not notify.
    pub fn stop(&mut self) -> bool {
        if self.state.phase == Phase::Stopped {
            return false;
        }
        self.state.enter(Phase::Stopped);
        self.state.loop_index = 0;
        self.held = 0.0;
        debug!("animation cancelled");
        self.notify(Completion::Cancelled);
        true
    }

    /// Advance by `delta_ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Negative or non-finite deltas fail with [`AnimError::InvalidArgument`] and leave
    /// the state untouched.
    pub fn tick(&mut self, delta_ms: f64) -> Result<TickOutcome, AnimError> {
        if !delta_ms.is_finite() || delta_ms < 0.0 {
            return Err(AnimError::InvalidArgument("tick delta must be finite and non-negative"));
        }
        if self.state.phase != Phase::Running {
            return Ok(TickOutcome::default());
        }

        let before = self.current_progress();
        let cycle = self.spec.cycle_ms;
        let mut outcome = TickOutcome::default();
        self.state.elapsed_ms += delta_ms;

        if self.state.elapsed_ms >= cycle {
            match self.spec.mode {
                Mode::Indeterminate => {
                    let elapsed = self.state.elapsed_ms;
                    let rem = elapsed % cycle;
                    // count from the remainder so the two never disagree;
                    // float-to-int casts saturate, so huge deltas pin at u64::MAX
                    let wraps = ((elapsed - rem) / cycle).round() as u64;
                    self.state.elapsed_ms = rem;
                    self.state.add_loops(wraps, self.spec.loop_cap);
                    outcome.loops_completed = wraps;
                    trace!(wraps, loop_index = self.state.loop_index, "cycle wrapped");
                }
                Mode::Determinate => {
                    self.state.elapsed_ms = cycle;
                    self.complete();
                    outcome.completed = true;
                    outcome.dirty = true;
                    return Ok(outcome);
                }
            }
        }

        outcome.dirty = self.current_progress() != before || outcome.loops_completed > 0;
        Ok(outcome)
    }

    /// [`tick`](Self::tick) with a wall-clock delta.
    pub fn tick_duration(&mut self, delta: Duration) -> Result<TickOutcome, AnimError> {
        self.tick(delta.as_secs_f64() * 1000.0)
    }

    /// Jump the displayed position of a stopped animation to `progress`
    /// (normalized time in `[0, 1]`).
    ///
    /// Returns `true` if the displayed progress changed.
    ///
    /// # Errors
    ///
    /// - [`AnimError::InvalidArgument`] if `progress` is outside `[0, 1]`.
    /// - [`AnimError::InvalidState`] while running, in either mode.
    pub fn seek(&mut self, progress: f64) -> Result<bool, AnimError> {
        if !(0.0..=1.0).contains(&progress) {
            return Err(AnimError::InvalidArgument("seek position must lie in [0, 1]"));
        }
        if self.state.phase == Phase::Running {
            return Err(AnimError::InvalidState("cannot seek a running animation"));
        }
        let before = self.current_progress();
        self.held = progress;
        Ok(self.current_progress() != before)
    }

    /// Eased progress in `[0, 1]`. No side effects.
    pub fn current_progress(&self) -> f64 {
        match self.state.phase {
            Phase::Running => self.eased(self.state.elapsed_ms),
            Phase::Completing => self.spec.easing.apply(1.0),
            Phase::Stopped => self.spec.easing.apply(self.held),
        }
    }

    /// Linear time fraction through the current cycle, before easing.
    pub fn raw_progress(&self) -> f64 {
        match self.state.phase {
            Phase::Running => (self.state.elapsed_ms / self.spec.cycle_ms).clamp(0.0, 1.0),
            Phase::Completing => 1.0,
            Phase::Stopped => self.held,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[inline]
    pub fn loop_index(&self) -> u64 {
        self.state.loop_index
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.state.elapsed_ms
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.phase == Phase::Running
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn spec(&self) -> &ProgressSpec {
        &self.spec
    }

    /// Replace the spec. Only allowed while stopped.
    pub fn set_spec(&mut self, spec: ProgressSpec) -> Result<(), AnimError> {
        if self.state.phase != Phase::Stopped {
            return Err(AnimError::InvalidState("spec can only change while stopped"));
        }
        spec.validate()?;
        self.spec = spec;
        Ok(())
    }

    fn eased(&self, elapsed_ms: f64) -> f64 {
        // spec was validated on the way in, so the cycle is always positive
        interpolate(elapsed_ms, self.spec.cycle_ms, &self.spec.easing).unwrap_or(0.0)
    }

    fn complete(&mut self) {
        self.state.enter(Phase::Completing);
        trace!("determinate cycle reached its end");
        self.state.enter(Phase::Stopped);
        self.state.add_loops(1, self.spec.loop_cap);
        self.held = 1.0;
        debug!("animation finished");
        self.notify(Completion::Finished);
    }

    fn notify(&mut self, why: Completion) {
        if let Some(f) = self.on_complete.as_mut() {
            f(why);
        }
    }
}
