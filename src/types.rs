//! Core types and enums for spin_state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::easing::Easing;

/// Default cycle length (1 second).
pub const DEFAULT_CYCLE_MS: f64 = 1000.0;

/// How a controller behaves when a cycle runs out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Loops forever until `stop()`.
    #[default]
    Indeterminate,
    /// Runs one cycle, then auto-stops.
    Determinate,
}

/// Lifecycle phase of an animation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Stopped,
    Running,
    /// Transient: the determinate cycle reached its end and is settling.
    Completing,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Stopped => "stopped",
            Phase::Running => "running",
            Phase::Completing => "completing",
        })
    }
}

/// Why the completion callback fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// A determinate cycle ran to its end.
    Finished,
    /// `stop()` discarded the animation.
    Cancelled,
}

/// Animation configuration. Immutable while the animation runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProgressSpec {
    /// Length of one cycle in milliseconds.
    pub cycle_ms: f64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub mode: Mode,
    /// Upper bound for the loop counter. `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_cap: Option<u64>,
}

impl Default for ProgressSpec {
    fn default() -> Self {
        Self {
            cycle_ms: DEFAULT_CYCLE_MS,
            easing: Easing::default(),
            mode: Mode::default(),
            loop_cap: None,
        }
    }
}

impl ProgressSpec {
    /// Build a validated spec.
    pub fn new(cycle_ms: f64, easing: Easing, mode: Mode) -> Result<Self, AnimError> {
        let spec = Self {
            cycle_ms,
            easing,
            mode,
            loop_cap: None,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn with_loop_cap(mut self, cap: u64) -> Self {
        self.loop_cap = Some(cap);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the cycle length is a finite positive number and the easing
    /// parameters are in range.
    pub fn validate(&self) -> Result<(), AnimError> {
        if !self.cycle_ms.is_finite() || self.cycle_ms <= 0.0 {
            return Err(AnimError::InvalidConfiguration(
                "cycle duration must be finite and positive",
            ));
        }
        self.easing.validate()
    }
}

/// Result of advancing a controller by one tick.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The displayed progress or the phase changed; the host should repaint.
    pub dirty: bool,
    /// Full cycles wrapped during this tick (indeterminate mode).
    pub loops_completed: u64,
    /// A determinate cycle finished during this tick.
    pub completed: bool,
}

/// Library error type (no panics for expected failures).
#[derive(Error, Debug)]
pub enum AnimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("config serialization error")]
    Json(#[from] serde_json::Error),
    #[error("output exists; use --force to overwrite")]
    OutputExists,
}
