//! Diagnostic visualizer: writes the terrain map and both raw noise fields as
//! PNG images to data/debug/.
//!
//! Usage: `visualize [config.json]`. Without a config the defaults are used
//! with seed 42.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use perlin_core::render::PixelBuffer;
use perlin_core::{ScalarField, TerrainConfig, TerrainGenerator};

/// Field value in [0, 1] → grayscale (0 = black, 1 = white).
fn gray(v: f32) -> image::Rgb<u8> {
    let c = (v.clamp(0.0, 1.0) * 255.0) as u8;
    image::Rgb([c, c, c])
}

fn save_field(field: &ScalarField, path: &Path) -> Result<()> {
    let mut img = image::RgbImage::new(field.width as u32, field.height as u32);
    for y in 0..field.height {
        for x in 0..field.width {
            img.put_pixel(x as u32, y as u32, gray(field.get(x, y)));
        }
    }
    img.save(path).with_context(|| format!("failed to save {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn save_buffer(buffer: PixelBuffer, path: &Path) -> Result<()> {
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    let img = image::RgbImage::from_raw(w, h, buffer.into_raw())
        .ok_or_else(|| anyhow!("pixel buffer does not match {w}×{h}"))?;
    img.save(path).with_context(|| format!("failed to save {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path).with_context(|| format!("cannot read {path}"))?;
            TerrainConfig::from_json(&json)?
        }
        None => TerrainConfig { seed: Some(42), ..TerrainConfig::default() },
    };

    let (fw, fh) = config.field_size();
    println!("Composing {fw}×{fh} elevation and detail fields…");
    let generator = TerrainGenerator::new();
    let maps = generator.generate(&config)?;

    let out_dir = Path::new("data/debug");
    fs::create_dir_all(out_dir).context("cannot create data/debug/")?;

    save_field(&maps.elevation, &out_dir.join("elevation.png"))?;
    save_field(&maps.detail, &out_dir.join("detail.png"))?;

    println!("Painting {}×{} terrain map…", config.width, config.height);
    let mut buffer = PixelBuffer::new(config.width, config.height);
    maps.paint(&mut buffer, config.scale)?;
    save_buffer(buffer, &out_dir.join("terrain.png"))?;

    println!("Done.");
    Ok(())
}
