use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mono_dither::DitherAlgorithm;
use pocket_dither::models::ConvertProfile;

#[derive(Parser)]
#[command(name = "pocket-dither")]
#[command(about = "Convert videos, images and animated GIFs into dithered monochrome clips for small displays")]
struct Cli {
    /// Input file: a video (MP4, MOV, MKV, WebM, AVI; needs FFmpeg), PNG, JPEG, BMP or GIF
    input: PathBuf,

    /// Output file: .png writes the first frame, anything else an animated GIF
    output: PathBuf,

    /// Dithering algorithm [default: floyd-steinberg]
    #[arg(short, long, value_parser = parse_algorithm)]
    algorithm: Option<String>,

    /// Frames per second, for time windows and playback [default: 10]
    #[arg(short, long)]
    fps: Option<u32>,

    /// Output width in pixels [default: 384]
    #[arg(short, long)]
    width: Option<u32>,

    /// Output height in pixels [default: 168]
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Keep at most this many frames, sampled evenly
    #[arg(short, long)]
    max_frames: Option<usize>,

    /// Start of the time window in seconds
    #[arg(short, long)]
    start_time: Option<f64>,

    /// End of the time window in seconds
    #[arg(short, long)]
    end_time: Option<f64>,

    /// Invert the image before dithering
    #[arg(short, long)]
    invert: bool,

    /// With --invert, keep pure black areas black
    #[arg(short, long)]
    keep_black: bool,

    /// Exposure in stops, -2.0 to 2.0 [default: 0.0]
    #[arg(short = 'x', long, allow_negative_numbers = true)]
    exposure: Option<f64>,

    /// Lower bound of the range filter (0-255)
    #[arg(short = 'l', long)]
    min_value: Option<u8>,

    /// Upper bound of the range filter (0-255)
    #[arg(short = 'u', long)]
    max_value: Option<u8>,

    /// Seed for the random algorithm
    #[arg(long)]
    seed: Option<u64>,

    /// YAML profile with default options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only log warnings and skip the summary
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Options given on the command line, as a profile layer.
    fn overrides(&self) -> ConvertProfile {
        ConvertProfile {
            algorithm: self.algorithm.clone(),
            fps: self.fps,
            width: self.width,
            height: self.height,
            max_frames: self.max_frames,
            start_time: self.start_time,
            end_time: self.end_time,
            invert: self.invert.then_some(true),
            keep_black: self.keep_black.then_some(true),
            exposure: self.exposure,
            min_value: self.min_value,
            max_value: self.max_value,
            seed: self.seed,
        }
    }
}

fn parse_algorithm(name: &str) -> Result<String, String> {
    name.parse::<DitherAlgorithm>()
        .map(|algorithm| algorithm.to_string())
        .map_err(|e| {
            let names: Vec<_> = DitherAlgorithm::ALL.iter().map(|a| a.name()).collect();
            format!("{e} (expected one of: {})", names.join(", "))
        })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        pocket_dither::QUIET_LOG_FILTER
    } else {
        pocket_dither::DEFAULT_LOG_FILTER
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let base = match &cli.config {
        Some(path) => ConvertProfile::load(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?,
        None => ConvertProfile::default(),
    };
    let profile = base.merge(cli.overrides());

    let report = pocket_dither::convert_file(&cli.input, &cli.output, &profile)
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    if !cli.quiet {
        println!("{report}");
    }
    Ok(())
}
