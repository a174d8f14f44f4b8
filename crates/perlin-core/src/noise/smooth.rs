//! Per-octave smoothing of a base noise field.
//!
//! At octave `k` only every `2^k`-th cell (in both axes) is kept as an anchor;
//! cells in between are cosine-interpolated from the four surrounding anchors.
//! The far anchor wraps around the field edge, so the output tiles seamlessly.

use super::interpolate::interpolate;
use crate::field::ScalarField;

/// Anchor spacing in cells for `octave`.
///
/// Periods that do not fit in `usize` saturate; such a period is larger than
/// any field, which gives the same anchors as any other oversized period.
#[inline]
pub fn sample_period(octave: u32) -> usize {
    1usize.checked_shl(octave).unwrap_or(1usize << (usize::BITS - 1))
}

/// Near and far anchor indices along one axis, plus the blend factor.
#[inline]
fn anchors(i: usize, period: usize, len: usize) -> (usize, usize, f32) {
    let i0 = (i / period) * period;
    // i0 == 0 whenever period > i, so this sum cannot overflow.
    let i1 = (i0 + period) % len;
    let blend = ((i - i0) as f64 / period as f64) as f32;
    (i0, i1, blend)
}

/// Smoothed copy of `noise` at `octave`, same dimensions.
pub fn smooth(noise: &ScalarField, octave: u32) -> ScalarField {
    let (width, height) = (noise.width, noise.height);
    let period = sample_period(octave);

    let columns: Vec<(usize, usize, f32)> =
        (0..width).map(|x| anchors(x, period, width)).collect();

    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        let (y0, y1, vertical_blend) = anchors(y, period, height);
        for &(x0, x1, horizontal_blend) in &columns {
            let top = interpolate(noise.get(x0, y0), noise.get(x1, y0), horizontal_blend);
            let bottom = interpolate(noise.get(x0, y1), noise.get(x1, y1), horizontal_blend);
            data.push(interpolate(top, bottom, vertical_blend));
        }
    }

    ScalarField { data, width, height }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::generate_field;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn base(width: usize, height: usize, seed: u64) -> ScalarField {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_field(width, height, &mut rng).unwrap()
    }

    #[test]
    fn period_doubles_per_octave() {
        assert_eq!(sample_period(0), 1);
        assert_eq!(sample_period(1), 2);
        assert_eq!(sample_period(5), 32);
        assert!(sample_period(200) > 1 << 40);
    }

    #[test]
    fn dimensions_preserved_for_every_octave() {
        let noise = base(13, 7, 1);
        for octave in 0..10 {
            let s = smooth(&noise, octave);
            assert_eq!((s.width, s.height), (13, 7), "octave {octave}");
            assert_eq!(s.data.len(), 13 * 7);
        }
    }

    #[test]
    fn octave_zero_is_identity() {
        let noise = base(16, 9, 2);
        assert_eq!(smooth(&noise, 0), noise);
    }

    #[test]
    fn anchors_keep_their_values() {
        let noise = base(16, 16, 3);
        let s = smooth(&noise, 2);
        for y in (0..16).step_by(4) {
            for x in (0..16).step_by(4) {
                assert_eq!(s.get(x, y), noise.get(x, y), "anchor ({x},{y})");
            }
        }
    }

    #[test]
    fn midpoint_between_anchors_averages_them() {
        let mut noise = ScalarField::zeros(8, 1).unwrap();
        noise.set(0, 0, 0.2);
        noise.set(2, 0, 0.8);
        let s = smooth(&noise, 1);
        assert_abs_diff_eq!(s.get(1, 0), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn far_anchor_wraps_around_edge() {
        // Width 8, octave 2: x = 6 lies between anchor 4 and anchor 0 (wrapped).
        let mut noise = ScalarField::zeros(8, 1).unwrap();
        noise.set(0, 0, 1.0);
        noise.set(4, 0, 0.0);
        let s = smooth(&noise, 2);
        assert_abs_diff_eq!(s.get(6, 0), 0.5, epsilon = 1e-6);
        assert!(s.get(7, 0) > s.get(6, 0));
    }

    #[test]
    fn oversized_period_collapses_to_single_anchor() {
        // 8×8 with period 16: every anchor is (0, 0).
        let noise = base(8, 8, 4);
        let s = smooth(&noise, 4);
        let corner = noise.get(0, 0);
        assert!(s.data.iter().all(|&v| (v - corner).abs() < 1e-6));
        let s_huge = smooth(&noise, 100);
        assert!(s_huge.data.iter().all(|&v| (v - corner).abs() < 1e-6));
    }

    #[test]
    fn oversized_period_wraps_to_period_mod_width() {
        // Width 12, period 16: the far anchor is 16 % 12 = 4, not 0.
        let mut noise = ScalarField::zeros(12, 1).unwrap();
        noise.set(4, 0, 1.0);
        let s = smooth(&noise, 4);
        assert_eq!(s.get(0, 0), 0.0);
        assert_eq!(s.get(8, 0), 0.5);
        assert_abs_diff_eq!(s.get(4, 0), 0.146_446_6, epsilon = 1e-6);
        assert_abs_diff_eq!(s.get(11, 0), 0.777_785_1, epsilon = 1e-5);
    }

    #[test]
    fn period_not_dividing_width_wraps_into_interior() {
        // Width 6, period 4: x = 5 sits between anchor 4 and anchor 8 % 6 = 2.
        let mut noise = ScalarField::zeros(6, 1).unwrap();
        noise.set(2, 0, 1.0);
        let s = smooth(&noise, 2);
        assert_abs_diff_eq!(s.get(5, 0), 0.146_446_6, epsilon = 1e-6);
        assert_eq!(s.get(4, 0), 0.0);
        // x = 1 blends anchors 0 and 4, both zero.
        assert_eq!(s.get(1, 0), 0.0);
    }

    #[test]
    fn output_stays_within_input_range() {
        let noise = base(32, 32, 5);
        let (lo, hi) = (noise.min_value(), noise.max_value());
        for octave in 1..6 {
            let s = smooth(&noise, octave);
            assert!(s.min_value() >= lo - 1e-6 && s.max_value() <= hi + 1e-6);
        }
    }
}
