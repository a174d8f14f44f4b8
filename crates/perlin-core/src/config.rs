use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};
use crate::field::check_dimensions;
use crate::noise::params::NoiseParameters;

/// Everything needed to produce one terrain map.
/// Defaults match a 512×512 canvas drawn at 2 pixels per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Surface width in pixels.
    pub width: usize,
    /// Surface height in pixels.
    pub height: usize,
    /// Pixels per field cell along each axis.
    pub scale: usize,
    pub elevation: NoiseParameters,
    pub detail: NoiseParameters,
    /// Seeds the base-noise generator; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scale: 2,
            elevation: NoiseParameters::elevation(),
            detail: NoiseParameters::detail(),
            seed: None,
        }
    }
}

impl TerrainConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| NoiseError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Field size in cells: the surface divided by `scale`, rounded down.
    pub fn field_size(&self) -> (usize, usize) {
        match self.scale {
            0 => (0, 0),
            s => (self.width / s, self.height / s),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.field_size();
        check_dimensions(w, h)?;
        self.elevation.validate()?;
        self.detail.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = TerrainConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.field_size(), (256, 256));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = TerrainConfig::from_json(r#"{"width": 100, "height": 60, "seed": 7}"#).unwrap();
        assert_eq!(c.field_size(), (50, 30));
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.elevation, NoiseParameters::elevation());
    }

    #[test]
    fn zero_scale_or_tiny_surface_is_invalid() {
        let zero_scale = TerrainConfig { scale: 0, ..TerrainConfig::default() };
        assert!(matches!(zero_scale.validate(), Err(NoiseError::InvalidDimension { .. })));
        let tiny = TerrainConfig { width: 1, height: 1, ..TerrainConfig::default() };
        assert!(tiny.validate().is_err());
    }

    #[test]
    fn bad_noise_parameters_rejected() {
        let json = r#"{"detail": {"octave_count": 1, "persistence": 0.2}}"#;
        assert!(matches!(
            TerrainConfig::from_json(json),
            Err(NoiseError::DegenerateParameters { octave_count: 1, .. })
        ));
        assert!(matches!(
            TerrainConfig::from_json("{ not json"),
            Err(NoiseError::InvalidConfig(_))
        ));
    }
}
