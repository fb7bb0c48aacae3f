//! Crop Resolution
//!
//! Maps a finalized placement back to per-monitor crop rectangles in the
//! coordinates of the resized source image. Pure geometry; the actual
//! resize/crop/save lives in [`output`].
//!
//! An under-covering placement that slipped through the advisory
//! classifier is caught here: any crop rectangle that falls outside the
//! resized image bounds is rejected instead of being clamped or padded,
//! so no corrupt wallpaper is ever written.

use thiserror::Error;

use crate::geometry::Rect;
use crate::layout::DesktopLayout;
use crate::placement::FinalPlacement;

pub mod output;

/// Crop resolution error types
#[derive(Error, Debug)]
pub enum CropError {
    /// A monitor's crop rectangle is not fully inside the resized image
    #[error("Crop for {monitor} is out of bounds: {rect} does not fit in {width}x{height}")]
    OutOfBoundsCrop {
        /// Monitor name
        monitor: String,
        /// The offending crop rectangle
        rect: Rect,
        /// Resized image width
        width: u32,
        /// Resized image height
        height: u32,
    },
}

/// Crop rectangle for one monitor, in resized-image coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorCrop {
    /// Monitor name (also the output file stem)
    pub name: String,
    /// Crop rectangle, half-open on the right/bottom edge
    pub rect: Rect,
}

/// The full commit-time plan: target image size plus one crop per monitor.
#[derive(Debug, Clone)]
pub struct CropPlan {
    /// Size the full-resolution source must be resized to
    pub final_size: (u32, u32),
    /// Per-monitor crops, in layout order
    pub crops: Vec<MonitorCrop>,
}

/// Resolve per-monitor crop rectangles from a finalized placement.
///
/// Each monitor's crop is its own rectangle translated by the finalized
/// offsets; fractional offsets are truncated toward zero. Every crop must
/// lie fully inside the resized image, otherwise the whole plan is
/// rejected with [`CropError::OutOfBoundsCrop`].
pub fn resolve(placement: &FinalPlacement, desktop: &DesktopLayout) -> Result<CropPlan, CropError> {
    let (final_w, final_h) = placement.final_size;
    let bounds = Rect::from_origin_size(0, 0, final_w, final_h);

    let mut crops = Vec::with_capacity(desktop.monitors().len());
    for monitor in desktop.monitors() {
        let x = (monitor.x as f64 + placement.xoff) as i32;
        let y = (monitor.y as f64 + placement.yoff) as i32;
        let rect = Rect::from_origin_size(x, y, monitor.width, monitor.height);

        if !rect.contained_in(&bounds) {
            return Err(CropError::OutOfBoundsCrop {
                monitor: monitor.name.clone(),
                rect,
                width: final_w,
                height: final_h,
            });
        }

        crops.push(MonitorCrop {
            name: monitor.name.clone(),
            rect,
        });
    }

    Ok(CropPlan {
        final_size: placement.final_size,
        crops,
    })
}
