//! Cosine-eased interpolation between two samples.
use std::f32::consts::PI;

/// Blend `x0` → `x1` with an S-curve weight `(1 − cos(alpha·π)) / 2`.
///
/// Endpoints are exact: `alpha = 0` gives `x0`, `alpha = 1` gives `x1`, and
/// `alpha = 0.5` gives the linear midpoint. `alpha` outside `[0, 1]` is not
/// clamped.
#[inline]
pub fn interpolate(x0: f32, x1: f32, alpha: f32) -> f32 {
    let alpha2 = (1.0 - (alpha * PI).cos()) / 2.0;
    x0 * (1.0 - alpha2) + x1 * alpha2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SAMPLES: [(f32, f32); 6] = [
        (0.0, 10.0),
        (-3.5, 2.25),
        (1.0, 1.0),
        (0.123, 0.987),
        (1e6, -1e6),
        (-0.0, 0.5),
    ];

    #[test]
    fn endpoints_are_exact() {
        for &(a, b) in &SAMPLES {
            assert_eq!(interpolate(a, b, 0.0), a);
            assert_eq!(interpolate(a, b, 1.0), b);
        }
    }

    #[test]
    fn midpoint_matches_linear_midpoint() {
        assert_eq!(interpolate(0.0, 10.0, 0.5), 5.0);
        for &(a, b) in &SAMPLES {
            assert_eq!(interpolate(a, b, 0.5), (a + b) / 2.0);
        }
    }

    #[test]
    fn curve_eases_in_and_out() {
        // Slower than linear near 0, faster in the middle.
        let q = interpolate(0.0, 1.0, 0.25);
        assert!(q < 0.25, "ease-in expected below linear, got {q}");
        assert_abs_diff_eq!(q, (1.0 - (0.25f32 * PI).cos()) / 2.0, epsilon = 1e-6);
        let q3 = interpolate(0.0, 1.0, 0.75);
        assert_abs_diff_eq!(q + q3, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn monotone_between_endpoints() {
        let mut prev = interpolate(2.0, 8.0, 0.0);
        for i in 1..=100 {
            let v = interpolate(2.0, 8.0, i as f32 / 100.0);
            assert!(v >= prev, "not monotone at step {i}: {prev} → {v}");
            prev = v;
        }
    }
}
