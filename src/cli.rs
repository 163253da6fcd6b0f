use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use spheretrace::random::DEFAULT_SPHERE_COUNT;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "spheretrace")]
#[command(about = "A recursive ray tracer for spheres under point lights")]
pub struct Args {
    /// TOML scene description; a random scene is generated when omitted
    #[arg(short, long, help = "TOML scene description (random scene when omitted)")]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(
        long,
        default_value = "800",
        value_parser = clap::value_parser!(u32).range(2..),
        help = "Image width in pixels"
    )]
    pub width: u32,

    /// Image height in pixels
    #[arg(
        long,
        default_value = "600",
        value_parser = clap::value_parser!(u32).range(2..),
        help = "Image height in pixels"
    )]
    pub height: u32,

    /// Seed for the random scene
    #[arg(long, help = "Seed for the random scene (drawn from the OS when omitted)")]
    pub seed: Option<u64>,

    /// Number of spheres in the random scene
    #[arg(
        short = 'n',
        long = "spheres",
        default_value_t = DEFAULT_SPHERE_COUNT,
        help = "Number of spheres in the random scene"
    )]
    pub sphere_count: usize,

    /// Output file path (.png for 8-bit RGBA, .exr for HDR linear)
    #[arg(
        short,
        long,
        default_value = "out.png",
        help = "Output file path (.png for 8-bit RGBA, .exr for HDR linear)"
    )]
    pub output: PathBuf,
}
