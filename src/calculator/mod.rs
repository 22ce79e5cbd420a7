//! Mean-motion position calculator.
//!
//! Every body advances at a constant rate from its longitude at J2000.0:
//!
//! ```text
//! longitude(t) = (longitude_at_epoch + days_since_j2000(t) * mean_daily_motion) mod 360
//! ```
//!
//! No perturbations, no light-time, no geocentric correction: the result is a
//! smooth approximation good for picking a sign, not for observation.
//!
//! Output is rounded to hundredths of a degree. Rounding happens once, on the
//! longitude, and the sign is taken from the rounded value. A body at 59.996°
//! is therefore reported as Gemini 0.00°, never as Taurus 30.00°.

#[cfg(test)]
mod proptest_calculator;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::bodies::{CelestialBody, CLASSICAL_BODIES, EXTENDED_BODIES};
use crate::time::days_since_j2000;
use crate::zodiac::{ZodiacSign, SIGN_SPAN};

const HUNDREDTHS_PER_CIRCLE: i64 = 36_000;
const HUNDREDTHS_PER_SIGN: i64 = 3_000;

/// Position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResult {
    pub body_name: &'static str,
    /// Ecliptic longitude in [0, 360), two decimals.
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// Degrees into `sign`, in [0, 30), two decimals.
    pub sign_degree: f64,
}

impl PositionResult {
    pub fn sign_index(&self) -> usize {
        self.sign.index()
    }

    /// Decanate (1, 2 or 3) of the sign the body is in.
    pub fn decanate(&self) -> u8 {
        ((self.sign_degree / 10.0).floor() as u8).min(2) + 1
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PositionCalculator<'a> {
    bodies: &'a [CelestialBody],
}

impl Default for PositionCalculator<'static> {
    fn default() -> Self {
        Self::classical()
    }
}

impl PositionCalculator<'static> {
    /// Sun through Saturn.
    pub fn classical() -> Self {
        Self::new(&CLASSICAL_BODIES)
    }

    /// Sun through Pluto.
    pub fn extended() -> Self {
        Self::new(&EXTENDED_BODIES)
    }
}

impl<'a> PositionCalculator<'a> {
    /// Results come back in the order of `bodies`.
    pub fn new(bodies: &'a [CelestialBody]) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &'a [CelestialBody] {
        self.bodies
    }

    pub fn compute_positions(&self, instant: DateTime<Utc>) -> Vec<PositionResult> {
        self.positions_at_days(days_since_j2000(instant))
    }

    pub fn positions_at_days(&self, days_since_epoch: f64) -> Vec<PositionResult> {
        self.bodies
            .iter()
            .map(|body| position_of(body, days_since_epoch))
            .collect()
    }
}

/// Unrounded longitude of `body`, in [0, 360) for finite input.
pub fn mean_longitude(body: &CelestialBody, days_since_epoch: f64) -> f64 {
    let raw = body.longitude_at_epoch + days_since_epoch * body.mean_daily_motion;
    let normalized = raw % 360.0;
    let normalized = if normalized < 0.0 { normalized + 360.0 } else { normalized };
    // -1e-14 + 360.0 rounds up to 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

pub fn position_of(body: &CelestialBody, days_since_epoch: f64) -> PositionResult {
    let hundredths = round_to_hundredths(mean_longitude(body, days_since_epoch));
    let sign_index = (hundredths / HUNDREDTHS_PER_SIGN) as usize;

    PositionResult {
        body_name: body.name,
        longitude: hundredths as f64 / 100.0,
        sign: ZodiacSign::from_index(sign_index),
        sign_degree: (hundredths % HUNDREDTHS_PER_SIGN) as f64 / 100.0,
    }
}

/// Rounds a longitude to hundredths of a degree, wrapped into [0, 36000).
///
/// Non-finite input collapses to 0 instead of panicking.
fn round_to_hundredths(longitude: f64) -> i64 {
    ((longitude * 100.0).round() as i64).rem_euclid(HUNDREDTHS_PER_CIRCLE)
}

/// Smallest angular distance between two longitudes, in [0, 180].
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

/// Degrees left before the body crosses into the next sign.
pub fn degrees_to_next_sign(result: &PositionResult) -> f64 {
    SIGN_SPAN - result.sign_degree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{MARS, MOON, SATURN, SUN};
    use crate::time::{j2000, utc_datetime};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn body(longitude_at_epoch: f64, mean_daily_motion: f64) -> CelestialBody {
        CelestialBody {
            name: "Test",
            portuguese_name: "Teste",
            symbol: "*",
            color: "#000000",
            mean_daily_motion,
            longitude_at_epoch,
        }
    }

    #[test]
    fn one_result_per_body_in_order() {
        let positions = PositionCalculator::classical().compute_positions(j2000());
        let names: Vec<_> = positions.iter().map(|p| p.body_name).collect();
        assert_eq!(
            names,
            ["Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn"]
        );
        assert_eq!(PositionCalculator::extended().compute_positions(j2000()).len(), 10);
    }

    #[test]
    fn epoch_returns_reference_longitudes() {
        for b in EXTENDED_BODIES.iter() {
            assert_abs_diff_eq!(mean_longitude(b, 0.0), b.longitude_at_epoch, epsilon = 1e-12);
        }
        let sun = position_of(&SUN, 0.0);
        assert_eq!(sun.longitude, 280.47);
        assert_eq!(sun.sign, ZodiacSign::Capricorn);
        assert_eq!(sun.sign_degree, 10.47);
    }

    #[test]
    fn one_period_before_epoch_returns_to_start() {
        for b in [SUN, MOON, MARS, SATURN] {
            let back = mean_longitude(&b, -b.mean_period_days());
            assert!(
                circular_distance(back, b.longitude_at_epoch) < 1e-6,
                "{}: {back} vs {}",
                b.name,
                b.longitude_at_epoch
            );
        }
    }

    #[test]
    fn negative_days_normalize_into_range() {
        let b = body(10.0, 1.0);
        assert_abs_diff_eq!(mean_longitude(&b, -20.0), 350.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mean_longitude(&b, -730.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(mean_longitude(&b, -745.5), 344.5, epsilon = 1e-9);

        let p = position_of(&b, -20.0);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert_eq!(p.sign_degree, 20.0);
    }

    #[test]
    fn slower_than_a_year_body_falls_just_short() {
        let b = body(0.0, 0.9856);
        let p = position_of(&b, 365.25);
        assert_eq!(p.longitude, 359.99);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert_eq!(p.sign_degree, 29.99);
    }

    #[test]
    fn sun_one_julian_year_after_epoch() {
        // 365.25 days is slightly longer than the Sun's mean period
        let raw = mean_longitude(&SUN, 365.25);
        assert_abs_diff_eq!(raw, 280.474_158_24, epsilon = 1e-6);
        let p = position_of(&SUN, 365.25);
        assert_eq!(p.longitude, 280.47);
        assert_eq!(p.sign, ZodiacSign::Capricorn);
    }

    #[test]
    fn moon_returns_after_a_sidereal_month() {
        let start = utc_datetime(1985, 3, 10, 6, 0, 0).unwrap();
        let later = start + chrono::TimeDelta::minutes((27.3 * 24.0 * 60.0) as i64);
        let calc = PositionCalculator::new(std::slice::from_ref(&MOON));
        let a = calc.compute_positions(start)[0];
        let b = calc.compute_positions(later)[0];
        assert!(circular_distance(a.longitude, b.longitude) < 1.0);
    }

    #[test]
    fn pinned_birth_positions() {
        let birth = utc_datetime(1990, 5, 15, 14, 30, 0).unwrap();
        let positions = PositionCalculator::classical().compute_positions(birth);
        let expected = [
            ("Sun", 53.06, ZodiacSign::Taurus, 23.06),
            ("Moon", 305.13, ZodiacSign::Aquarius, 5.13),
            ("Mercury", 255.83, ZodiacSign::Sagittarius, 15.83),
            ("Venus", 305.85, ZodiacSign::Aquarius, 5.85),
            ("Mars", 311.95, ZodiacSign::Aquarius, 11.95),
            ("Jupiter", 102.11, ZodiacSign::Cancer, 12.11),
            ("Saturn", 292.21, ZodiacSign::Capricorn, 22.21),
        ];
        for (p, (name, lon, sign, deg)) in positions.iter().zip(expected) {
            assert_eq!(p.body_name, name);
            assert_abs_diff_eq!(p.longitude, lon, epsilon = 1e-9);
            assert_eq!(p.sign, sign, "{name}");
            assert_abs_diff_eq!(p.sign_degree, deg, epsilon = 1e-9);
        }
    }

    #[test]
    fn rounding_rolls_into_next_sign() {
        let p = position_of(&body(59.996, 0.0), 0.0);
        assert_eq!(p.sign, ZodiacSign::Gemini);
        assert_eq!(p.longitude, 60.0);
        assert_eq!(p.sign_degree, 0.0);

        let p = position_of(&body(29.994, 0.0), 0.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert_eq!(p.sign_degree, 29.99);
    }

    #[test]
    fn rounding_wraps_past_360() {
        let p = position_of(&body(359.996, 0.0), 0.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert_eq!(p.longitude, 0.0);
        assert_eq!(p.sign_degree, 0.0);

        // tiny negative raw longitude must not surface as 360.0
        let p = position_of(&body(0.0, 1.0), -1e-15);
        assert_eq!(p.longitude, 0.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
    }

    #[test]
    fn non_finite_days_do_not_panic() {
        let calc = PositionCalculator::extended();
        for days in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300, -1e300] {
            for p in calc.positions_at_days(days) {
                assert!((0.0..360.0).contains(&p.longitude));
                assert!((0.0..30.0).contains(&p.sign_degree));
            }
        }
    }

    #[test]
    fn same_instant_same_answer() {
        let instant = utc_datetime(1969, 7, 20, 20, 17, 40).unwrap();
        let calc = PositionCalculator::extended();
        assert_eq!(calc.compute_positions(instant), calc.compute_positions(instant));
    }

    #[test]
    fn decanates() {
        let mk = |deg: f64| PositionResult {
            body_name: "Sun",
            longitude: deg,
            sign: ZodiacSign::Aries,
            sign_degree: deg,
        };
        assert_eq!(mk(0.0).decanate(), 1);
        assert_eq!(mk(9.99).decanate(), 1);
        assert_eq!(mk(10.0).decanate(), 2);
        assert_eq!(mk(29.99).decanate(), 3);
        assert_relative_eq!(degrees_to_next_sign(&mk(29.99)), 0.01, epsilon = 1e-9);
    }

    #[test]
    fn circular_distance_wraps() {
        assert_abs_diff_eq!(circular_distance(359.0, 1.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(circular_distance(10.0, 190.0), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(circular_distance(45.0, 45.0), 0.0, epsilon = 1e-12);
    }
}
