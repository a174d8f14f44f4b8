//! Painting classified fields onto a pixel surface.
//!
//! Each field cell becomes a `scale × scale` block of pixels.

use crate::error::{NoiseError, Result};
use crate::field::ScalarField;
use crate::palette::{classify, Rgb};

/// Anything that can be painted with solid rectangles.
pub trait Surface {
    /// `(width, height)` in pixels.
    fn size(&self) -> (usize, usize);

    /// Fill the rectangle at `(x, y)` of size `w × h`. Parts outside the
    /// surface are clipped.
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgb);
}

/// Owned RGB8 pixel buffer, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// A black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self { pixels: vec![0; width * height * 3], width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(y_end)..y_end {
            let row = py * self.width;
            for px in x.min(x_end)..x_end {
                let i = (row + px) * 3;
                self.pixels[i..i + 3].copy_from_slice(&color);
            }
        }
    }
}

/// Paint `elevation` (with `detail` for highland shading) using the default
/// terrain palette.
pub fn paint_terrain<S: Surface + ?Sized>(
    surface: &mut S,
    elevation: &ScalarField,
    detail: &ScalarField,
    scale: usize,
) -> Result<()> {
    paint_with(surface, elevation, detail, scale, classify)
}

/// Paint with a caller-supplied `classifier(value, detail) -> Rgb`.
///
/// # Errors
/// `FieldMismatch` if the two fields differ in size or `scale` is zero.
pub fn paint_with<S, F>(
    surface: &mut S,
    elevation: &ScalarField,
    detail: &ScalarField,
    scale: usize,
    classifier: F,
) -> Result<()>
where
    S: Surface + ?Sized,
    F: Fn(f32, f32) -> Rgb,
{
    if !elevation.same_shape(detail) {
        return Err(NoiseError::FieldMismatch {
            reason: format!(
                "elevation is {}×{}, detail is {}×{}",
                elevation.width, elevation.height, detail.width, detail.height
            ),
        });
    }
    if scale == 0 {
        return Err(NoiseError::FieldMismatch { reason: "scale must be at least 1".into() });
    }

    for y in 0..elevation.height {
        for x in 0..elevation.width {
            let color = classifier(elevation.get(x, y), detail.get(x, y));
            surface.fill_rect(x * scale, y * scale, scale, scale, color);
        }
    }
    Ok(())
}
