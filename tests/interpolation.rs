//! Properties of the interpolation engine.

use proptest::prelude::*;
use spin_state::{AnimError, Easing, interpolate};

const MONOTONIC: [Easing; 10] = [
    Easing::Linear,
    Easing::EaseInQuad,
    Easing::EaseOutQuad,
    Easing::EaseInOutQuad,
    Easing::EaseInCubic,
    Easing::EaseOutCubic,
    Easing::EaseInOutCubic,
    Easing::Accelerate(1.5),
    Easing::Decelerate(2.0),
    Easing::AccelerateDecelerate,
];

proptest! {
    #[test]
    fn monotonic_in_elapsed(
        cycle in 1.0f64..10_000.0,
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        idx in 0usize..MONOTONIC.len(),
    ) {
        let easing = MONOTONIC[idx];
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = interpolate(lo * cycle, cycle, &easing).unwrap();
        let p_hi = interpolate(hi * cycle, cycle, &easing).unwrap();
        prop_assert!(p_lo <= p_hi + 1e-12, "{easing}: {p_lo} > {p_hi}");
    }

    #[test]
    fn output_stays_in_unit_range(
        cycle in 1.0f64..10_000.0,
        elapsed in -1_000.0f64..20_000.0,
        idx in 0usize..MONOTONIC.len(),
    ) {
        let p = interpolate(elapsed, cycle, &MONOTONIC[idx]).unwrap();
        prop_assert!((0.0..=1.0 + 1e-12).contains(&p));
    }

    #[test]
    fn same_inputs_same_output(cycle in 1.0f64..5_000.0, elapsed in 0.0f64..5_000.0) {
        let e = Easing::FastOutSlowIn;
        prop_assert_eq!(
            interpolate(elapsed, cycle, &e).unwrap(),
            interpolate(elapsed, cycle, &e).unwrap()
        );
    }
}

#[test]
fn non_positive_cycle_is_a_configuration_error() {
    assert!(matches!(
        interpolate(10.0, 0.0, &Easing::Linear),
        Err(AnimError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        interpolate(10.0, -100.0, &Easing::Linear),
        Err(AnimError::InvalidConfiguration(_))
    ));
}

#[test]
fn fast_out_slow_in_rises_steadily() {
    let mut last = 0.0;
    for i in 0..=100 {
        let p = interpolate(f64::from(i), 100.0, &Easing::FastOutSlowIn).unwrap();
        assert!(p + 1e-6 >= last, "dip at {i}: {p} < {last}");
        last = p;
    }
    assert_eq!(last, 1.0);
}
