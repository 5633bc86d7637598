// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line entry point: replay a gesture script and print every
// published crop in video pixels.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use vidcrop::CropConfig;
use vidcrop::replay::{self, Script};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "vidcrop", version, about = "Replay crop gestures over a letterboxed video preview")]
pub struct Args {
    /// Gesture script (TOML).
    pub script: PathBuf,

    /// Config file. Defaults to the platform config directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the final overlay as PNG.
    #[cfg(feature = "raster")]
    #[arg(short, long)]
    pub overlay: Option<PathBuf>,

    /// Debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = CropConfig::load(args.config.as_deref())?;
    let script = Script::load(&args.script)?;
    let replay = replay::run(&script, config.clone());

    let mut out = io::stdout().lock();
    for rect in &replay.published {
        writeln!(out, "{:.2} {:.2} {:.2} {:.2}", rect.x, rect.y, rect.width, rect.height)?;
    }

    #[cfg(feature = "raster")]
    if let Some(path) = &args.overlay {
        use vidcrop::ui::{OverlayModel, RasterSurface};

        let model = OverlayModel::new(&replay.session, &config);
        RasterSurface::render(&model)?.save_png(path)?;
        log::info!("Overlay written to {}", path.display());
    }

    Ok(())
}
