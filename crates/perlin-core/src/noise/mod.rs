pub mod interpolate;
pub mod params;
pub mod smooth;

use crate::error::Result;
use crate::field::ScalarField;
use params::NoiseParameters;

pub use interpolate::interpolate;
pub use smooth::smooth;

/// Blend the smoothed octaves of `base` into one field normalised to `[0, 1]`.
///
/// Pipeline:
///   1. Smooth `base` at every octave `0..octave_count`.
///   2. Walk octaves from coarsest (`octave_count − 1`) down to 1. Each step
///      multiplies the running amplitude by `persistence` before adding the
///      octave, so the coarsest octave carries the largest weight.
///   3. Divide by the summed amplitude.
///
/// Octave 0 (the raw base field) is smoothed but never summed.
///
/// # Errors
/// `DegenerateParameters` when `octave_count < 2` or `persistence` is not in
/// `(0, 1)`; nothing is computed in that case.
pub fn compose_noise(base: &ScalarField, octave_count: u32, persistence: f32) -> Result<ScalarField> {
    NoiseParameters::new(octave_count, persistence).validate()?;

    let smoothed = smooth_octaves(base, octave_count);

    let mut data = vec![0.0f32; base.width * base.height];
    let mut amplitude = 1.0f32;
    let mut total_amplitude = 0.0f32;

    for octave in (1..octave_count as usize).rev() {
        amplitude *= persistence;
        total_amplitude += amplitude;
        for (acc, &v) in data.iter_mut().zip(&smoothed[octave].data) {
            *acc += v * amplitude;
        }
    }

    // Clamp absorbs f32 rounding at the edges of the unit interval.
    for v in &mut data {
        *v = (*v / total_amplitude).clamp(0.0, 1.0);
    }

    Ok(ScalarField { data, width: base.width, height: base.height })
}

/// `compose_noise` with its parameters bundled.
pub fn compose_with(base: &ScalarField, params: &NoiseParameters) -> Result<ScalarField> {
    compose_noise(base, params.octave_count, params.persistence)
}

#[cfg(not(feature = "threading"))]
fn smooth_octaves(base: &ScalarField, octave_count: u32) -> Vec<ScalarField> {
    (0..octave_count).map(|octave| smooth(base, octave)).collect()
}

/// Octaves are independent; each gets its own output buffer.
#[cfg(feature = "threading")]
fn smooth_octaves(base: &ScalarField, octave_count: u32) -> Vec<ScalarField> {
    use rayon::prelude::*;
    (0..octave_count).into_par_iter().map(|octave| smooth(base, octave)).collect()
}
