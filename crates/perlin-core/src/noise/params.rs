use serde::{Deserialize, Serialize};

use crate::error::{NoiseError, Result};

/// Octave count and amplitude decay for one composed noise field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParameters {
    /// Number of smoothed octaves generated. Octave 0 is never summed, so at
    /// least 2 are required.
    pub octave_count: u32,
    /// Amplitude multiplier per octave step, strictly between 0 and 1.
    pub persistence: f32,
}

impl NoiseParameters {
    pub fn new(octave_count: u32, persistence: f32) -> Self {
        Self { octave_count, persistence }
    }

    /// Reject parameters that would leave the total amplitude at zero (or NaN).
    pub fn validate(&self) -> Result<()> {
        let persistence_ok = self.persistence > 0.0 && self.persistence < 1.0;
        if self.octave_count < 2 || !persistence_ok {
            return Err(NoiseError::DegenerateParameters {
                octave_count: self.octave_count,
                persistence: self.persistence,
            });
        }
        Ok(())
    }

    /// Broad terrain shapes.
    pub fn elevation() -> Self {
        Self::new(6, 0.4)
    }

    /// Fine texture used to vary highland colouring.
    pub fn detail() -> Self {
        Self::new(5, 0.2)
    }
}

impl Default for NoiseParameters {
    fn default() -> Self {
        Self::elevation()
    }
}
