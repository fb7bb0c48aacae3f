//! Desktop Layout Model
//!
//! Models the desktop as an ordered set of monitor rectangles and derives
//! the bounding box of their union. Monitors come from a single external
//! compositor query at startup (see [`sway`]) and are immutable afterwards.
//!
//! The layout deliberately does **not** validate that monitors are
//! contiguous or non-overlapping — that is the compositor's arrangement,
//! and the bounding box is well-defined either way.

use thiserror::Error;
use tracing::debug;

use crate::geometry::Rect;

pub mod sway;

/// Layout error types
#[derive(Error, Debug)]
pub enum LayoutError {
    /// No monitors reported by the compositor
    #[error("No active monitors in layout")]
    NoMonitors,

    /// Invalid monitor dimensions
    #[error("Invalid dimensions {width}x{height} for monitor {name}")]
    InvalidDimensions {
        /// Monitor name
        name: String,
        /// Reported width
        width: u32,
        /// Reported height
        height: u32,
    },

    /// The external layout query could not be executed
    #[error("Layout query failed: {0}")]
    QueryFailed(String),

    /// The external layout query returned unparseable output
    #[error("Malformed layout query output: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// One physical display in desktop coordinates.
///
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Output name as reported by the compositor (e.g. "eDP-1")
    pub name: String,
    /// X position in desktop coordinates (pixels)
    pub x: i32,
    /// Y position in desktop coordinates (pixels)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Monitor {
    /// Create a monitor, validating its dimensions.
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: u32, height: u32) -> Result<Self, LayoutError> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(LayoutError::InvalidDimensions { name, width, height });
        }
        Ok(Self {
            name,
            x,
            y,
            width,
            height,
        })
    }

    /// The monitor's rectangle in desktop coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

/// Ordered collection of monitors forming the desktop.
#[derive(Debug, Clone)]
pub struct DesktopLayout {
    monitors: Vec<Monitor>,
}

impl DesktopLayout {
    /// Build a layout from monitor descriptions.
    ///
    /// Requires at least one monitor. Overlapping or non-contiguous
    /// arrangements are accepted as-is.
    pub fn new(monitors: Vec<Monitor>) -> Result<Self, LayoutError> {
        if monitors.is_empty() {
            return Err(LayoutError::NoMonitors);
        }

        let layout = Self { monitors };
        debug!(
            "Desktop layout: {}x{} across {} monitor(s)",
            layout.width(),
            layout.height(),
            layout.monitors.len()
        );
        Ok(layout)
    }

    /// The monitors, in compositor order.
    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    /// Bounding width of the desktop: `max(x + width)` over all monitors.
    ///
    /// Computed on demand; monitors never change after construction.
    pub fn width(&self) -> i32 {
        self.monitors
            .iter()
            .map(|m| m.x + m.width as i32)
            .max()
            .unwrap_or(0)
    }

    /// Bounding height of the desktop: `max(y + height)` over all monitors.
    pub fn height(&self) -> i32 {
        self.monitors
            .iter()
            .map(|m| m.y + m.height as i32)
            .max()
            .unwrap_or(0)
    }

    /// Bounding width and height as a pair.
    pub fn size(&self) -> (i32, i32) {
        (self.width(), self.height())
    }
}
