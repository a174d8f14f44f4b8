//! Terrain pipeline orchestrator: base noise → composed fields → pixels.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::TerrainConfig;
use crate::error::Result;
use crate::field::ScalarField;
use crate::noise::compose_with;
use crate::random::{generate_field, RandomSource};
use crate::render::{paint_terrain, PixelBuffer, Surface};

// ── Output ────────────────────────────────────────────────────────────────────

/// The two composed fields behind one terrain map, at field resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainMaps {
    /// Broad elevation, drives the colour band.
    pub elevation: ScalarField,
    /// Independent fine texture, only consulted in the highlands.
    pub detail: ScalarField,
}

impl TerrainMaps {
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, scale: usize) -> Result<()> {
        paint_terrain(surface, &self.elevation, &self.detail, scale)
    }
}

// ── Orchestrator ──────────────────────────────────────────────────────────────

pub struct TerrainGenerator;

impl TerrainGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate both fields, seeding `StdRng` from `config.seed` or from entropy.
    pub fn generate(&self, config: &TerrainConfig) -> Result<TerrainMaps> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_from(config, &mut rng)
    }

    /// Generate both fields from an explicit random source.
    ///
    /// Pipeline order:
    ///   1. Validate the config (nothing is drawn on failure).
    ///   2. Elevation base noise, then detail base noise, from the same source.
    ///   3. Compose each with its own parameters.
    pub fn generate_from<R: RandomSource + ?Sized>(
        &self,
        config: &TerrainConfig,
        source: &mut R,
    ) -> Result<TerrainMaps> {
        config.validate()?;
        let (width, height) = config.field_size();

        let elevation_base = generate_field(width, height, source)?;
        let detail_base = generate_field(width, height, source)?;

        Ok(TerrainMaps {
            elevation: compose_with(&elevation_base, &config.elevation)?,
            detail: compose_with(&detail_base, &config.detail)?,
        })
    }

    /// Generate and paint onto a fresh `config.width × config.height` buffer.
    pub fn render(&self, config: &TerrainConfig) -> Result<PixelBuffer> {
        let maps = self.generate(config)?;
        let mut buffer = PixelBuffer::new(config.width, config.height);
        maps.paint(&mut buffer, config.scale)?;
        Ok(buffer)
    }
}

impl Default for TerrainGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
