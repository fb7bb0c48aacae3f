//! Wallpaper Output
//!
//! Executes a [`CropPlan`](super::CropPlan) against the full-resolution
//! source image: resize once to the final size, cut one PNG per monitor,
//! and build the swaybg/swaylock command lines that consume them.
//!
//! Runs exactly once, synchronously, after the interactive session ends.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;
use tracing::{debug, info};

use super::CropPlan;

/// Output error types
#[derive(Error, Debug)]
pub enum OutputError {
    /// Writing a cropped wallpaper failed
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Target file path
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },
}

/// One wallpaper file written for a monitor.
#[derive(Debug, Clone)]
pub struct WrittenWallpaper {
    /// Monitor name
    pub monitor: String,
    /// Path of the saved PNG
    pub path: PathBuf,
}

/// Resize the full-resolution source and write one PNG per monitor.
///
/// The source is resized to the plan's final size (the resize filter is
/// not semantically significant; Lanczos3 keeps fine detail in downscaled
/// wallpapers), then each monitor's rectangle is cut and saved as
/// `{monitor}.png` in `out_dir`.
///
/// The crop rectangles were bounds-checked at resolution time, so the
/// cuts here cannot leave the resized image.
pub fn write_wallpapers(
    source: &DynamicImage,
    plan: &CropPlan,
    out_dir: &Path,
) -> Result<Vec<WrittenWallpaper>, OutputError> {
    let (final_w, final_h) = plan.final_size;
    debug!(
        "Resizing {}x{} source to {}x{}",
        source.width(),
        source.height(),
        final_w,
        final_h
    );
    let scaled = source.resize_exact(final_w, final_h, FilterType::Lanczos3);

    let mut written = Vec::with_capacity(plan.crops.len());
    for crop in &plan.crops {
        let rect = crop.rect;
        let cut = scaled.crop_imm(rect.x0 as u32, rect.y0 as u32, rect.width(), rect.height());

        let path = out_dir.join(format!("{}.png", crop.name));
        cut.save(&path).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {} ({}x{})", path.display(), rect.width(), rect.height());

        written.push(WrittenWallpaper {
            monitor: crop.name.clone(),
            path,
        });
    }

    Ok(written)
}

/// Build the swaybg invocation for the written wallpapers.
pub fn swaybg_command(wallpapers: &[WrittenWallpaper]) -> String {
    let mut cmd = String::from("swaybg");
    for wp in wallpapers {
        write!(cmd, " -o {} -i {}", wp.monitor, wp.path.display()).ok();
    }
    cmd
}

/// Build the swaylock invocation for the written wallpapers.
pub fn swaylock_command(wallpapers: &[WrittenWallpaper]) -> String {
    let mut cmd = String::from("swaylock");
    for wp in wallpapers {
        write!(cmd, " -i {}:{}", wp.monitor, wp.path.display()).ok();
    }
    cmd
}
