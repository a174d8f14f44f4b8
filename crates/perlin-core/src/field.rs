use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};

/// A 2D grid of `f32` samples, row-major.
///
/// `x` runs along a row (`0..width`), `y` selects the row (`0..height`).
/// Pipeline stages never mutate their input field; each returns a new one.
/// Build fields with `from_vec`, `filled` or `zeros`, which check that
/// `data.len() == width * height`; indexing assumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    /// Row-major values, `width * height` long.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl ScalarField {
    /// Create a field filled with the given value.
    pub fn filled(width: usize, height: usize, fill: f32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self { data: vec![fill; width * height], width, height })
    }

    /// Create an all-zero field.
    pub fn zeros(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, 0.0)
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        check_dimensions(width, height)?;
        if data.len() != width * height {
            return Err(NoiseError::FieldMismatch {
                reason: format!(
                    "buffer holds {} values, {width}×{height} field needs {}",
                    data.len(),
                    width * height
                ),
            });
        }
        Ok(Self { data, width, height })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, val: f32) {
        self.data[y * self.width + x] = val;
    }

    #[inline]
    pub fn same_shape(&self, other: &ScalarField) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn mean(&self) -> f32 {
        let sum: f64 = self.data.iter().map(|&v| v as f64).sum();
        (sum / self.data.len() as f64) as f32
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimension { width, height });
    }
    Ok(())
}
