use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use gallery_carousel::constants::{FPS, RENDER_HEIGHT, RENDER_WIDTH};

#[derive(Parser, Debug)]
#[command(
    name = "gallery-carousel",
    version,
    about = "Hero carousel gallery viewer with autoplay, swipe and a full-screen lightbox"
)]
pub struct Cli {
    /// Directory containing the images to show.
    #[arg(value_name = "IMAGE_DIRECTORY")]
    pub directory: PathBuf,

    /// Window width in pixels.
    #[arg(long, default_value_t = RENDER_WIDTH)]
    pub width: i32,

    /// Window height in pixels.
    #[arg(long, default_value_t = RENDER_HEIGHT)]
    pub height: i32,

    /// Target frames per second.
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Show the slides in random order.
    #[arg(long)]
    pub shuffle: bool,

    /// Behave as if the user prefers reduced motion (autoplay never starts).
    #[arg(long = "reduced-motion")]
    pub reduced_motion: bool,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Compact,
}
