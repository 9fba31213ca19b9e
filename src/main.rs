use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

mod cli;
mod host;
mod logging;
mod slide;
mod texture_loader;

use gallery_carousel::HostSignals;
use gallery_carousel::gallery::load_sorted_image_paths;

use crate::cli::Cli;
use crate::host::Viewer;
use crate::slide::Slide;
use crate::texture_loader::load_texture_with_exif_rotation;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli)?;

    // --- Discover Images ---
    let mut image_paths = load_sorted_image_paths(&cli.directory)
        .with_context(|| format!("loading images from '{}'", cli.directory.display()))?;
    if cli.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(count = image_paths.len(), dir = %cli.directory.display(), "images found");

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Gallery Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape belongs to the lightbox
    rl.set_exit_key(None);

    // --- Load Slides ---
    let mut slides = Vec::with_capacity(image_paths.len());
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!(error = %e, "skipping image"),
        }
    }
    if slides.is_empty() {
        bail!("no slides could be loaded from '{}'", cli.directory.display());
    }
    info!(slides = slides.len(), reduced_motion = cli.reduced_motion, "starting carousel");

    let signals = HostSignals::new().with_reduced_motion(cli.reduced_motion);
    let mut viewer = Viewer::new(slides, signals);

    // --- Main Loop ---
    while !rl.window_should_close() {
        viewer.update(&rl);

        let mut d = rl.begin_drawing(&thread);
        viewer.draw(&mut d);
    }

    Ok(())
}
