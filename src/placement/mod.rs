//! Placement State Engine
//!
//! Tracks the transform applied to the source image during the interactive
//! session: a uniform scale plus a 2D offset in desktop coordinates, with
//! scroll-driven scaling, drag-driven movement (optionally axis-locked),
//! and discrete fit-scale modes.
//!
//! All coordinates here are **desktop coordinates** — the interactive
//! surface divides raw pointer positions by its display scale before
//! calling in, so this module never sees screen pixels.

use thiserror::Error;
use tracing::trace;

use crate::layout::DesktopLayout;

pub mod classify;

pub use classify::{classify, Validity};

/// Scale change per discrete scroll tick.
pub const SCROLL_STEP: f64 = 0.05;

/// Lower clamp for the scale factor.
///
/// The legacy behavior imposed no floor, which allows scrolling into a
/// zero or negative scale; clamping here is a deliberate robustness
/// deviation.
pub const MIN_SCALE: f64 = 0.01;

/// Placement error types
#[derive(Error, Debug)]
pub enum PlacementError {
    /// Drag continued without a preceding drag begin
    #[error("Drag state violation: drag continued without drag begin")]
    DragStateViolation,
}

/// Discrete scale modes.
///
/// `cycle_fit_mode` walks Original → FitWidth → FitHeight → Original;
/// any manual scroll scaling drops into `Free`, which also cycles back
/// to Original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// 1:1 with the source image
    Original,
    /// Scaled so the image width matches the desktop width
    FitWidth,
    /// Scaled so the image height matches the desktop height
    FitHeight,
    /// Manually adjusted via scroll
    Free,
}

/// In-progress drag anchors, in desktop coordinates.
#[derive(Debug, Clone, Copy)]
struct DragState {
    /// Where the drag began; axis-lock dominance is measured from here
    start: (f64, f64),
    /// Last observed pointer position; deltas accumulate from here
    last: (f64, f64),
}

/// Finalized placement, as consumed by the crop resolver.
///
/// Offsets are negated relative to the placement offsets: they express
/// how far the desktop origin sits inside the scaled image, i.e. the
/// crop origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalPlacement {
    /// Target size of the scaled image, `ceil(source * scale)`
    pub final_size: (u32, u32),
    /// Crop x origin (`-offset_x`)
    pub xoff: f64,
    /// Crop y origin (`-offset_y`)
    pub yoff: f64,
}

/// Mutable transform applied to the source image.
#[derive(Debug, Clone)]
pub struct PlacementState {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    mode: ScaleMode,
    source_width: u32,
    source_height: u32,
    drag: Option<DragState>,
}

impl PlacementState {
    /// Start a placement for a source image of the given pixel dimensions.
    ///
    /// Begins at scale 1 (`Original` mode) with the image at the desktop
    /// origin.
    pub fn new(source_width: u32, source_height: u32) -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            mode: ScaleMode::Original,
            source_width,
            source_height,
            drag: None,
        }
    }

    /// Current scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current top-left offset of the scaled image in desktop coordinates.
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Active scale mode.
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Source image dimensions this placement was created from.
    pub fn source_size(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Scaled image size in desktop coordinates.
    pub fn scaled_size(&self) -> (f64, f64) {
        (
            self.source_width as f64 * self.scale,
            self.source_height as f64 * self.scale,
        )
    }

    /// Apply one or more discrete scroll ticks.
    ///
    /// Positive deltas zoom in by [`SCROLL_STEP`], negative zoom out,
    /// clamped at [`MIN_SCALE`]. Any scroll forces `Free` mode.
    pub fn apply_scroll(&mut self, delta: i32) {
        if delta > 0 {
            self.scale += SCROLL_STEP;
        } else if delta < 0 {
            self.scale = (self.scale - SCROLL_STEP).max(MIN_SCALE);
        }
        self.mode = ScaleMode::Free;
        trace!("Scroll {delta:+} -> scale {:.3}", self.scale);
    }

    /// Record the drag anchor at the given desktop-coordinate position.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag = Some(DragState {
            start: (x, y),
            last: (x, y),
        });
    }

    /// Continue an in-progress drag.
    ///
    /// The offset accumulates the delta from the last observed position.
    /// With `axis_lock`, the dominant axis is decided by comparing |dx|
    /// against |dy| measured from the *original* drag-start point, and the
    /// delta is applied to that axis only; the last-position anchor is
    /// updated either way.
    ///
    /// Calling this without a preceding [`begin_drag`](Self::begin_drag)
    /// is a contract violation and returns an error rather than being
    /// silently ignored.
    pub fn continue_drag(&mut self, x: f64, y: f64, axis_lock: bool) -> Result<(), PlacementError> {
        let drag = self.drag.as_mut().ok_or(PlacementError::DragStateViolation)?;

        let (lx, ly) = drag.last;
        let (sx, sy) = drag.start;

        if axis_lock {
            let dx = (x - sx).abs();
            let dy = (y - sy).abs();
            if dx > dy {
                self.offset_x += x - lx;
            } else {
                self.offset_y += y - ly;
            }
        } else {
            self.offset_x += x - lx;
            self.offset_y += y - ly;
        }

        drag.last = (x, y);
        Ok(())
    }

    /// Clear the drag anchors.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Advance to the next fit mode and apply its scale.
    ///
    /// Transition table:
    ///
    /// | from               | to        | scale                          |
    /// |--------------------|-----------|--------------------------------|
    /// | Original           | FitWidth  | desktop.width / source_width   |
    /// | FitWidth           | FitHeight | desktop.height / source_height |
    /// | FitHeight or Free  | Original  | 1                              |
    pub fn cycle_fit_mode(&mut self, desktop: &DesktopLayout) {
        let (mode, scale) = match self.mode {
            ScaleMode::Original => (
                ScaleMode::FitWidth,
                desktop.width() as f64 / self.source_width as f64,
            ),
            ScaleMode::FitWidth => (
                ScaleMode::FitHeight,
                desktop.height() as f64 / self.source_height as f64,
            ),
            ScaleMode::FitHeight | ScaleMode::Free => (ScaleMode::Original, 1.0),
        };
        trace!("Fit mode {:?} -> {:?} (scale {:.3})", self.mode, mode, scale);
        self.mode = mode;
        self.scale = scale;
    }

    /// Finalize the placement for crop resolution.
    ///
    /// The final size rounds the scaled source dimensions up; the offsets
    /// are negated because the crop origin is how far the desktop origin
    /// sits inside the scaled image.
    pub fn finalize(&self) -> FinalPlacement {
        FinalPlacement {
            final_size: (
                (self.source_width as f64 * self.scale).ceil() as u32,
                (self.source_height as f64 * self.scale).ceil() as u32,
            ),
            xoff: -self.offset_x,
            yoff: -self.offset_y,
        }
    }
}
