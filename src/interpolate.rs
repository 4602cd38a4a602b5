//! Maps elapsed time within a cycle to eased progress.

use crate::easing::Easing;
use crate::types::AnimError;

/// Eased progress for `elapsed_ms` into a cycle of `cycle_ms`.
///
/// Both values are in milliseconds. Elapsed time outside the cycle is clamped,
/// so the result always lies in `[0, 1]` for well-behaved curves.
///
/// # Errors
///
/// Returns [`AnimError::InvalidConfiguration`] if `cycle_ms` is not a finite
/// positive number.
pub fn interpolate(elapsed_ms: f64, cycle_ms: f64, easing: &Easing) -> Result<f64, AnimError> {
    if !cycle_ms.is_finite() || cycle_ms <= 0.0 {
        return Err(AnimError::InvalidConfiguration(
            "cycle duration must be finite and positive",
        ));
    }
    let t = (elapsed_ms / cycle_ms).clamp(0.0, 1.0);
    Ok(easing.apply(t))
}
