//! wallslice - interactive wallpaper splitter for sway
//!
//! Entry point for the binary.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallslice::crop;
use wallslice::gui;
use wallslice::layout::sway;
use wallslice::session::SessionOutcome;

/// Command-line arguments for wallslice
#[derive(Parser, Debug)]
#[command(name = "wallslice")]
#[command(version, long_about = None)]
#[command(about = "Scale and cut an image into per-monitor sway wallpapers.\n\
    Scroll to scale, drag to move (Shift locks the dominant axis),\n\
    right-click to cycle fit modes, Space to confirm.")]
pub struct Args {
    /// Path to the source image
    pub filepath: PathBuf,

    /// Directory where the per-monitor images are written
    pub output_dir: PathBuf,

    /// Display scale of the placement window relative to the real desktop
    /// (interactive only; output is always full resolution)
    #[arg(long, env = "WALLSLICE_SCALE", default_value_t = 0.2)]
    pub scale: f32,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_logging(&args);

    info!(
        "wallslice v{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_DATE")
    );

    // Both startup collaborators are fatal on failure: without an image or
    // a layout there is nothing to place.
    let image = image::open(&args.filepath)
        .with_context(|| format!("Failed to load image: {}", args.filepath.display()))?;
    info!(
        "Loaded {} ({}x{})",
        args.filepath.display(),
        image.width(),
        image.height()
    );

    let desktop = sway::query_layout().context("Failed to query sway for the monitor layout")?;
    info!(
        "Desktop: {}x{}, {} monitor(s)",
        desktop.width(),
        desktop.height(),
        desktop.monitors().len()
    );

    // eframe::Error is not Send + Sync, so GuiError cannot go through
    // anyhow's Context bound directly; carry it as a message instead.
    let outcome = gui::run_session(&image, desktop.clone(), args.scale)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Interactive session failed")?;

    let placement = match outcome {
        SessionOutcome::Confirmed(placement) => placement,
        SessionOutcome::Cancelled => {
            info!("Session cancelled; no wallpapers written");
            return Ok(ExitCode::from(1));
        }
    };

    let plan = crop::resolve(&placement, &desktop)
        .context("Confirmed placement does not cover every monitor")?;
    let written = crop::output::write_wallpapers(&image, &plan, &args.output_dir)
        .context("Failed to write wallpapers")?;

    println!("{}", crop::output::swaybg_command(&written));
    println!("{}", crop::output::swaylock_command(&written));

    Ok(ExitCode::SUCCESS)
}

fn init_logging(args: &Args) {
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("wallslice={log_level},warn")));

    // Logs go to stderr: stdout is reserved for the swaybg/swaylock
    // command lines.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
