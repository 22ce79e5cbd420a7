//! Property-based tests for the position calculator.
//!
//! Day counts span roughly ±2700 years around J2000, which covers every birth
//! date the chart accepts with a wide margin on both sides.

use proptest::prelude::*;

use super::{circular_distance, mean_longitude, position_of, PositionCalculator};
use crate::bodies::EXTENDED_BODIES;
use crate::zodiac::SIGN_SPAN;

const DAY_RANGE: std::ops::Range<f64> = -1.0e6..1.0e6;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Longitude and sign degree stay inside their half-open ranges.
    #[test]
    fn prop_results_in_range(days in DAY_RANGE) {
        for p in PositionCalculator::extended().positions_at_days(days) {
            prop_assert!(
                (0.0..360.0).contains(&p.longitude),
                "{} longitude {} out of range at {} days", p.body_name, p.longitude, days
            );
            prop_assert!(
                (0.0..30.0).contains(&p.sign_degree),
                "{} sign degree {} out of range at {} days", p.body_name, p.sign_degree, days
            );
        }
    }

    /// Sign start plus degree-in-sign reconstructs the longitude.
    #[test]
    fn prop_sign_and_degree_reconstruct_longitude(days in DAY_RANGE) {
        for p in PositionCalculator::extended().positions_at_days(days) {
            let rebuilt = p.sign_index() as f64 * SIGN_SPAN + p.sign_degree;
            prop_assert!(
                (rebuilt - p.longitude).abs() <= 0.01,
                "{}: {} * 30 + {} != {}", p.body_name, p.sign_index(), p.sign_degree, p.longitude
            );
            prop_assert_eq!(p.sign_index(), (p.longitude / SIGN_SPAN).floor() as usize);
        }
    }

    /// Rounded output never strays more than half a hundredth from the raw value.
    #[test]
    fn prop_rounding_is_tight(days in DAY_RANGE, body_idx in 0usize..10) {
        let body = &EXTENDED_BODIES[body_idx];
        let raw = mean_longitude(body, days);
        let rounded = position_of(body, days).longitude;
        prop_assert!(circular_distance(raw, rounded) <= 0.005 + 1e-9);
    }

    /// Moving forward by a small step advances every body by motion * step,
    /// modulo the 360 -> 0 wrap.
    #[test]
    fn prop_monotonic_continuity(
        days in DAY_RANGE,
        step in 0.0f64..1.0,
        body_idx in 0usize..10,
    ) {
        let body = &EXTENDED_BODIES[body_idx];
        let before = mean_longitude(body, days);
        let after = mean_longitude(body, days + step);
        let advanced = (after - before).rem_euclid(360.0);
        let expected = body.mean_daily_motion * step;
        prop_assert!(
            circular_distance(advanced, expected) < 1e-6,
            "{} advanced {} over {} days, expected {}", body.name, advanced, step, expected
        );
    }

    /// Shifting by a whole number of mean periods lands on the same longitude,
    /// before or after the epoch.
    #[test]
    fn prop_periodic(days in -50_000.0f64..50_000.0, turns in -5i32..5, body_idx in 0usize..7) {
        let body = &EXTENDED_BODIES[body_idx];
        let shifted = days + turns as f64 * body.mean_period_days();
        let a = mean_longitude(body, days);
        let b = mean_longitude(body, shifted);
        prop_assert!(circular_distance(a, b) < 1e-6, "{}: {} vs {}", body.name, a, b);
    }

    /// The calculator is a pure function of its input.
    #[test]
    fn prop_idempotent(days in DAY_RANGE) {
        let calc = PositionCalculator::extended();
        prop_assert_eq!(calc.positions_at_days(days), calc.positions_at_days(days));
    }
}
