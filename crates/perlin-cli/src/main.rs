/// Command-line front end: generate one composed noise field and write it as
/// JSON, or print summary statistics.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use perlin_core::palette::{band, TerrainBand};
use perlin_core::{compose_with, generate_field, NoiseParameters, ScalarField, TerrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "perlin", about = "Generate tileable multi-octave value noise")]
struct Args {
    /// TerrainConfig JSON; its elevation parameters and field size are the defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Field width in cells.
    #[arg(long)]
    width: Option<usize>,

    /// Field height in cells.
    #[arg(long)]
    height: Option<usize>,

    /// Number of octaves (≥ 2).
    #[arg(short = 'n', long)]
    octaves: Option<u32>,

    /// Amplitude decay per octave, 0 < p < 1.
    #[arg(short, long)]
    persistence: Option<f32>,

    /// Seed for the base noise.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the composed field as JSON here instead of printing a summary.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Resolved generation request after merging the config file and flags.
#[derive(Debug, Clone, PartialEq)]
struct Request {
    width: usize,
    height: usize,
    params: NoiseParameters,
    seed: Option<u64>,
}

fn resolve(args: &Args, config: &TerrainConfig) -> Request {
    let (cfg_w, cfg_h) = config.field_size();
    Request {
        width: args.width.unwrap_or(cfg_w),
        height: args.height.unwrap_or(cfg_h),
        params: NoiseParameters {
            octave_count: args.octaves.unwrap_or(config.elevation.octave_count),
            persistence: args.persistence.unwrap_or(config.elevation.persistence),
        },
        seed: args.seed.or(config.seed),
    }
}

#[derive(Serialize)]
struct Summary {
    width: usize,
    height: usize,
    octave_count: u32,
    persistence: f32,
    min: f32,
    max: f32,
    mean: f32,
    /// Fraction of cells per terrain band, in band order.
    bands: Vec<(TerrainBand, f32)>,
}

fn summarize(field: &ScalarField, params: &NoiseParameters) -> Summary {
    let mut counts = [0usize; TerrainBand::ALL.len()];
    for &v in &field.data {
        counts[band(v).index()] += 1;
    }
    let n = field.data.len() as f32;
    Summary {
        width: field.width,
        height: field.height,
        octave_count: params.octave_count,
        persistence: params.persistence,
        min: field.min_value(),
        max: field.max_value(),
        mean: field.mean(),
        bands: TerrainBand::ALL.iter().zip(counts).map(|(&b, c)| (b, c as f32 / n)).collect(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("cannot read config {}", path.display()))?;
            TerrainConfig::from_json(&json)
                .with_context(|| format!("bad config {}", path.display()))?
        }
        None => TerrainConfig::default(),
    };

    let req = resolve(&args, &config);
    eprintln!(
        "Generating {}×{} field, {} octaves, persistence {}…",
        req.width, req.height, req.params.octave_count, req.params.persistence
    );

    let mut rng = match req.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let base = generate_field(req.width, req.height, &mut rng).context("base noise")?;
    let field = compose_with(&base, &req.params).context("octave composition")?;

    match &args.output {
        Some(path) => {
            let json = serde_json::to_string(&field)?;
            fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let summary = summarize(&field, &req.params);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
