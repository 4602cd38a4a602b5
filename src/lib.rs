#![forbid(unsafe_code)]
//! # spin_state: frame-driven progress and loading animations.
//!
//! `spin_state` is the state machine behind spinners, progress arcs and
//! countdown buttons, with no rendering attached. A host ticks it with time
//! deltas from its own frame loop and paints whatever
//! [`ProgressController::current_progress`] (or a preset frame) reports.
//!
//! ## Features
//! - **Indeterminate** animations that loop until stopped
//! - **Determinate** animations that run one cycle and auto-stop
//! - **Easing curves** including the Android interpolators and Material
//!   fast-out-slow-in
//! - **Explicit repaint hints**: `tick` returns whether anything visible changed
//! - **Presets** for the Material arc, circling dot, double circle and
//!   countdown button
//! - **JSON spec files** for sharing animation settings
//!
//! ## Example: drive a determinate bar
//! ```
//! use spin_state::{Easing, Mode, Phase, ProgressController, ProgressSpec};
//!
//! let spec = ProgressSpec::new(1000.0, Easing::Linear, Mode::Determinate).unwrap();
//! let mut ctl = ProgressController::new(spec).unwrap();
//! ctl.start();
//! for _ in 0..4 {
//!     let frame = ctl.tick(250.0).unwrap();
//!     assert!(frame.dirty);
//! }
//! assert_eq!(ctl.phase(), Phase::Stopped);
//! assert_eq!(ctl.current_progress(), 1.0);
//! ```
//!
//! ## Example: a Material spinner
//! ```
//! use spin_state::presets::{MaterialArc, Preset};
//!
//! let mut arc = MaterialArc::new().unwrap();
//! arc.controller_mut().start();
//! let _ = arc.controller_mut().tick(16.0).unwrap();
//! println!("{}", arc.frame());
//! ```
//!
//! Threading: a controller is driven from one logical thread. It is `Send`,
//! so it may live on a render thread, but calls must not race.

mod clock;
mod config;
mod controller;
mod easing;
mod interpolate;
mod state;
mod types;

pub mod presets;

// Re-export public API from modules
pub use clock::{FrameClock, ManualClock, MonotonicClock};
pub use config::{load_spec, save_spec};
pub use controller::ProgressController;
pub use easing::Easing;
pub use interpolate::interpolate;
pub use state::AnimationState;
pub use types::*;
