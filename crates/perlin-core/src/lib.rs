//! Tileable value-noise terrain synthesis.
//!
//! Base noise is a grid of independent uniform draws. Each octave keeps every
//! `2^k`-th cell as an anchor and cosine-interpolates between anchors; the
//! octaves are then summed with geometrically decaying weights and normalised
//! to `[0, 1]`.

pub mod config;
pub mod error;
pub mod field;
pub mod generator;
pub mod noise;
pub mod palette;
pub mod random;
pub mod render;

pub use config::TerrainConfig;
pub use error::{NoiseError, Result};
pub use field::ScalarField;
pub use generator::{TerrainGenerator, TerrainMaps};
pub use noise::{compose_noise, compose_with, interpolate, params::NoiseParameters, smooth};
pub use random::{generate_field, FixedSequence, RandomSource};
