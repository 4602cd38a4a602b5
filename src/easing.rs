//! Easing curves mapping normalized time to normalized progress.
//!
//! Every curve satisfies `apply(0) == 0` and `apply(1) == 1` and is monotonic
//! on `[0, 1]` as long as custom functions and bezier control points keep to
//! that contract. Inputs outside `[0, 1]` are clamped before evaluation.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::AnimError;

/// Animation easing function.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInOutSine,
    /// Power curve `t^(2f)`; `f == 1` is a plain quadratic ease-in.
    Accelerate(f64),
    /// Mirror of [`Easing::Accelerate`].
    Decelerate(f64),
    /// Cosine curve, slow at both ends.
    AccelerateDecelerate,
    /// Material motion standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    FastOutSlowIn,
    /// Custom cubic bezier with fixed end points at (0,0) and (1,1).
    CubicBezier(f64, f64, f64, f64),
    /// Caller-supplied curve. Not serializable.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Apply the curve to normalized time (clamped to 0.0..=1.0).
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::Accelerate(factor) => {
                if factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Easing::Decelerate(factor) => {
                if factor == 1.0 {
                    1.0 - (1.0 - t) * (1.0 - t)
                } else {
                    1.0 - (1.0 - t).powf(2.0 * factor)
                }
            }
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::FastOutSlowIn => cubic_bezier_sample(t, 0.4, 0.0, 0.2, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_sample(t, x1, y1, x2, y2),
            Easing::Custom(f) => f(t),
        }
    }

    /// Check curve parameters keep the output finite and inside `[0, 1]`.
    ///
    /// Factors must be finite and positive; bezier control points must all
    /// lie in `[0, 1]`. Custom functions are trusted.
    pub fn validate(&self) -> Result<(), AnimError> {
        match *self {
            Easing::Accelerate(k) | Easing::Decelerate(k) if !k.is_finite() || k <= 0.0 => Err(
                AnimError::InvalidConfiguration("easing factor must be finite and positive"),
            ),
            Easing::CubicBezier(x1, y1, x2, y2)
                if ![x1, y1, x2, y2].iter().all(|p| (0.0..=1.0).contains(p)) =>
            {
                Err(AnimError::InvalidConfiguration(
                    "cubic-bezier control points must lie in [0, 1]",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Kebab-case names accepted by [`Easing::from_str`].
    pub const NAMES: &'static [&'static str] = &[
        "linear",
        "ease-in-quad",
        "ease-out-quad",
        "ease-in-out-quad",
        "ease-in-cubic",
        "ease-out-cubic",
        "ease-in-out-cubic",
        "ease-in-out-sine",
        "accelerate",
        "decelerate",
        "accelerate-decelerate",
        "fast-out-slow-in",
    ];
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        use Easing::*;
        match (self, other) {
            (Accelerate(a), Accelerate(b)) | (Decelerate(a), Decelerate(b)) => a == b,
            (CubicBezier(a1, b1, c1, d1), CubicBezier(a2, b2, c2, d2)) => {
                a1 == a2 && b1 == b2 && c1 == c2 && d1 == d2
            }
            (Custom(f), Custom(g)) => std::ptr::fn_addr_eq(*f, *g),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => f.write_str("linear"),
            Easing::EaseInQuad => f.write_str("ease-in-quad"),
            Easing::EaseOutQuad => f.write_str("ease-out-quad"),
            Easing::EaseInOutQuad => f.write_str("ease-in-out-quad"),
            Easing::EaseInCubic => f.write_str("ease-in-cubic"),
            Easing::EaseOutCubic => f.write_str("ease-out-cubic"),
            Easing::EaseInOutCubic => f.write_str("ease-in-out-cubic"),
            Easing::EaseInOutSine => f.write_str("ease-in-out-sine"),
            Easing::Accelerate(k) => write!(f, "accelerate:{k}"),
            Easing::Decelerate(k) => write!(f, "decelerate:{k}"),
            Easing::AccelerateDecelerate => f.write_str("accelerate-decelerate"),
            Easing::FastOutSlowIn => f.write_str("fast-out-slow-in"),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1},{y1},{x2},{y2})")
            }
            Easing::Custom(_) => f.write_str("custom"),
        }
    }
}

impl FromStr for Easing {
    type Err = AnimError;

    /// Parse `linear`, `accelerate:2`, `cubic-bezier(0.4,0,0.2,1)` and friends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Some(args) = s
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let points = args
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| AnimError::InvalidArgument("cubic-bezier: bad control point"))?;
            let easing = match points.as_slice() {
                &[x1, y1, x2, y2] => Easing::CubicBezier(x1, y1, x2, y2),
                _ => {
                    return Err(AnimError::InvalidArgument(
                        "cubic-bezier: expected four control points",
                    ));
                }
            };
            easing.validate()?;
            return Ok(easing);
        }

        let (name, factor) = match s.split_once(':') {
            Some((name, k)) => {
                let k = k
                    .parse::<f64>()
                    .map_err(|_| AnimError::InvalidArgument("easing factor is not a number"))?;
                (name, Some(k))
            }
            None => (s.as_str(), None),
        };

        let easing = match (name, factor) {
            ("accelerate", k) => Easing::Accelerate(k.unwrap_or(1.0)),
            ("decelerate", k) => Easing::Decelerate(k.unwrap_or(1.0)),
            (_, Some(_)) => {
                return Err(AnimError::InvalidArgument(
                    "only accelerate/decelerate take a factor",
                ));
            }
            ("linear", None) => Easing::Linear,
            ("ease-in-quad", None) => Easing::EaseInQuad,
            ("ease-out-quad", None) => Easing::EaseOutQuad,
            ("ease-in-out-quad", None) => Easing::EaseInOutQuad,
            ("ease-in-cubic", None) => Easing::EaseInCubic,
            ("ease-out-cubic", None) => Easing::EaseOutCubic,
            ("ease-in-out-cubic", None) => Easing::EaseInOutCubic,
            ("ease-in-out-sine", None) => Easing::EaseInOutSine,
            ("accelerate-decelerate", None) => Easing::AccelerateDecelerate,
            ("fast-out-slow-in", None) => Easing::FastOutSlowIn,
            _ => return Err(AnimError::InvalidArgument("unknown easing name")),
        };
        easing.validate()?;
        Ok(easing)
    }
}

/// Sample a cubic bezier curve at time `t`.
///
/// Solves `x(s) = t` for the curve parameter with Newton-Raphson and falls
/// back to bisection when the slope flattens out.
fn cubic_bezier_sample(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut guess = t;
    for _ in 0..8 {
        let x = cubic_bezier_value(guess, x1, x2) - t;
        if x.abs() < 1e-7 {
            return cubic_bezier_value(guess, y1, y2);
        }
        let dx = cubic_bezier_derivative(guess, x1, x2);
        if dx.abs() < 1e-6 {
            break;
        }
        guess -= x / dx;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    guess = t;
    for _ in 0..64 {
        let x = cubic_bezier_value(guess, x1, x2);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = guess;
        } else {
            hi = guess;
        }
        guess = (lo + hi) / 2.0;
    }
    cubic_bezier_value(guess, y1, y2)
}

fn cubic_bezier_value(s: f64, p1: f64, p2: f64) -> f64 {
    let s2 = s * s;
    let s3 = s2 * s;
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s2 * p2 + s3
}

fn cubic_bezier_derivative(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn endpoints_hold_for_named_curves() {
        for name in Easing::NAMES {
            let e: Easing = name.parse().unwrap();
            assert!(close(e.apply(0.0), 0.0), "{name} at 0");
            assert!(close(e.apply(1.0), 1.0), "{name} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-3.0), 0.0);
        assert_eq!(Easing::Linear.apply(7.0), 1.0);
        assert_eq!(Easing::EaseInQuad.apply(f64::NAN), 0.0);
    }

    #[test]
    fn android_curves_match_reference_points() {
        assert!(close(Easing::Accelerate(1.0).apply(0.5), 0.25));
        assert!(close(Easing::Accelerate(2.0).apply(0.5), 0.0625));
        assert!(close(Easing::Decelerate(1.0).apply(0.5), 0.75));
        assert!(close(Easing::AccelerateDecelerate.apply(0.5), 0.5));
        // fast-out-slow-in is well past halfway at the midpoint
        let mid = Easing::FastOutSlowIn.apply(0.5);
        assert!(mid > 0.7 && mid < 0.85, "{mid}");
    }

    #[test]
    fn parse_accepts_factors_and_bezier() {
        assert_eq!("accelerate:1.5".parse::<Easing>().unwrap(), Easing::Accelerate(1.5));
        assert_eq!(
            "cubic-bezier(0.4, 0, 0.2, 1)".parse::<Easing>().unwrap(),
            Easing::CubicBezier(0.4, 0.0, 0.2, 1.0)
        );
        assert!("linear:2".parse::<Easing>().is_err());
        assert!("accelerate:-1".parse::<Easing>().is_err());
        assert!(matches!(
            "cubic-bezier(2,0,0,1)".parse::<Easing>(),
            Err(AnimError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            "accelerate:0".parse::<Easing>(),
            Err(AnimError::InvalidConfiguration(_))
        ));
        assert!("wobble".parse::<Easing>().is_err());
    }

    #[test]
    fn validate_rejects_degenerate_parameters() {
        for bad in [
            Easing::Accelerate(-1.0),
            Easing::Accelerate(0.0),
            Easing::Decelerate(f64::NAN),
            Easing::CubicBezier(1.5, 0.0, 0.2, 1.0),
            Easing::CubicBezier(0.4, -0.5, 0.2, 1.0),
        ] {
            assert!(
                matches!(bad.validate(), Err(AnimError::InvalidConfiguration(_))),
                "{bad} passed"
            );
        }
        Easing::Accelerate(2.0).validate().unwrap();
        Easing::FastOutSlowIn.validate().unwrap();
    }

    #[test]
    fn display_parses_back() {
        for e in [
            Easing::EaseInOutCubic,
            Easing::Decelerate(2.5),
            Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
        ] {
            assert_eq!(e.to_string().parse::<Easing>().unwrap(), e);
        }
    }

    #[test]
    fn custom_curve_is_applied_to_clamped_input() {
        fn sqrt_curve(t: f64) -> f64 {
            t.sqrt()
        }
        let e = Easing::Custom(sqrt_curve);
        assert!(close(e.apply(0.25), 0.5));
        assert!(close(e.apply(4.0), 1.0));
        assert!(serde_json::to_string(&e).is_err());
    }
}
