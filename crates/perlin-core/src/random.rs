//! Base noise: a field of independent uniform draws in `[0, 1)`.
//!
//! The random source is injected so that tests can drive the pipeline with a
//! fixed sequence while the tools use a seeded `StdRng`.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

use crate::error::Result;
use crate::field::{check_dimensions, ScalarField};

/// A capability yielding uniform values in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for StdRng {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

impl RandomSource for ThreadRng {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f32>,
    pos: usize,
}

impl FixedSequence {
    /// An empty list behaves like a constant `0.0` source.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        v
    }
}

/// Fill a `width × height` field with independent draws from `source`.
///
/// Cells are drawn in row-major order. Fails with `InvalidDimension` before
/// drawing anything if either dimension is zero.
pub fn generate_field<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    source: &mut R,
) -> Result<ScalarField> {
    check_dimensions(width, height)?;
    let data = (0..width * height).map(|_| source.next_unit()).collect();
    ScalarField::from_vec(width, height, data)
}
