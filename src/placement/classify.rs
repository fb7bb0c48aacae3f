//! Placement validity classification
//!
//! Pure function of the placement and layout, recomputed on every redraw
//! and never stored. The result drives the monitor-outline color in the
//! interactive surface; it is advisory feedback and never blocks commit.

use super::PlacementState;
use crate::layout::DesktopLayout;

/// Classification of the current placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// The scaled image covers the whole desktop at 1:1 density or better
    Ok,
    /// Some part of the desktop is not covered by the image
    UnderCoverage,
    /// The image is sampled coarser than 1:1 (scale > 1); quality warning
    OverZoom,
}

/// Classify the current placement against the desktop bounds.
///
/// `UnderCoverage` takes priority over `OverZoom`: an image that both
/// fails to cover the desktop and is zoomed past native density reports
/// the coverage problem.
pub fn classify(placement: &PlacementState, desktop: &DesktopLayout) -> Validity {
    let (ox, oy) = placement.offset();
    let (sw, sh) = placement.scaled_size();

    let under = ox > 0.0
        || oy > 0.0
        || ox + sw < desktop.width() as f64
        || oy + sh < desktop.height() as f64;

    if under {
        Validity::UnderCoverage
    } else if placement.scale() > 1.0 {
        Validity::OverZoom
    } else {
        Validity::Ok
    }
}
