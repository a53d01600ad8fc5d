//! Eight-way direction quantization
//!
//! Movement input is snapped to one of eight compass directions, the same
//! set a player gets from a keypad.

use glam::Vec2;
use std::f32::consts::FRAC_1_SQRT_2;

/// Canonical directions in screen space (+Y down), in tie-break order:
/// N, NE, E, SE, S, SW, W, NW
pub const DIRECTIONS: [Vec2; 8] = [
    Vec2::new(0.0, -1.0),
    Vec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    Vec2::new(1.0, 0.0),
    Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Vec2::new(0.0, 1.0),
    Vec2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Vec2::new(-1.0, 0.0),
    Vec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

/// Snap a desired direction to the closest of the eight canonical directions.
///
/// Closeness is the dot product with the (normalized) desired direction; on a
/// tie the first direction in [`DIRECTIONS`] order wins. A zero (or non-finite)
/// desired direction yields `Vec2::ZERO`, meaning "no input".
pub fn quantize(desired: Vec2) -> Vec2 {
    let desired = desired.normalize_or_zero();
    if desired == Vec2::ZERO {
        return Vec2::ZERO;
    }
    DIRECTIONS[closest(desired, &DIRECTIONS)]
}

/// Index of the candidate with the largest dot product against `desired`.
/// Ties keep the earlier candidate. Empty `candidates` yields 0.
pub fn closest(desired: Vec2, candidates: &[Vec2]) -> usize {
    let mut best = 0;
    let mut best_dot = f32::NEG_INFINITY;
    for (i, candidate) in candidates.iter().enumerate() {
        let dot = candidate.dot(desired);
        if dot > best_dot {
            best_dot = dot;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_cardinals() {
        assert_eq!(quantize(Vec2::new(0.0, -3.0)), DIRECTIONS[0]);
        assert_eq!(quantize(Vec2::new(5.0, 0.0)), DIRECTIONS[2]);
        assert_eq!(quantize(Vec2::new(0.0, 0.2)), DIRECTIONS[4]);
        assert_eq!(quantize(Vec2::new(-1.0, 0.0)), DIRECTIONS[6]);
    }

    #[test]
    fn test_quantize_snaps_to_diagonal() {
        // 40° below the +X axis (screen space) is closer to SE than E
        let angle = 40.0_f32.to_radians();
        let desired = Vec2::new(angle.cos(), angle.sin());
        assert_eq!(quantize(desired), DIRECTIONS[3]);
    }

    #[test]
    fn test_closest_tie_prefers_first() {
        assert_eq!(closest(Vec2::X, &[Vec2::X, Vec2::X]), 0);
        // (0, 1) is equally far from both
        assert_eq!(closest(Vec2::Y, &[Vec2::X, Vec2::NEG_X]), 0);
        assert_eq!(closest(Vec2::Y, &[Vec2::NEG_X, Vec2::X]), 0);
        assert_eq!(closest(Vec2::X, &[Vec2::NEG_X, Vec2::Y, Vec2::X]), 2);
    }

    #[test]
    fn test_quantize_uses_closest_order() {
        for (i, direction) in DIRECTIONS.iter().enumerate() {
            assert_eq!(closest(*direction, &DIRECTIONS), i);
            assert_eq!(quantize(*direction * 3.0), *direction);
        }
    }

    #[test]
    fn test_quantize_zero_is_zero() {
        assert_eq!(quantize(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(quantize(Vec2::new(f32::NAN, 1.0)), Vec2::ZERO);
    }

    #[test]
    fn test_directions_are_unit() {
        for d in DIRECTIONS {
            assert!((d.length() - 1.0).abs() < 1e-6);
        }
    }

    mod proptests {
        use crate::sim::direction::{DIRECTIONS, quantize};
        use glam::Vec2;
        use proptest::prelude::*;

        proptest! {
            /// Property: output is always one of the eight canonical directions
            #[test]
            fn prop_output_is_canonical(x in -500.0f32..500.0, y in -500.0f32..500.0) {
                prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
                let q = quantize(Vec2::new(x, y));
                prop_assert!(DIRECTIONS.contains(&q));
            }

            /// Property: no canonical direction is strictly closer than the output
            #[test]
            fn prop_output_maximizes_dot(x in -500.0f32..500.0, y in -500.0f32..500.0) {
                prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
                let desired = Vec2::new(x, y).normalize();
                let chosen = quantize(desired).dot(desired);
                for d in DIRECTIONS {
                    prop_assert!(chosen + 1e-6 >= d.dot(desired));
                }
            }
        }
    }
}
