//! Sway output query
//!
//! Thin collaborator around `swaymsg -t get_outputs -r`. One synchronous
//! subprocess call at startup; any failure here is fatal because there is
//! no layout to place against.

use std::process::Command;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{DesktopLayout, LayoutError, Monitor};

/// Rectangle as reported in sway's output JSON.
#[derive(Debug, Deserialize)]
struct SwayRect {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

/// One entry of `swaymsg -t get_outputs -r`.
///
/// Only the fields the layout needs; sway reports many more.
#[derive(Debug, Deserialize)]
struct SwayOutput {
    name: String,
    rect: SwayRect,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

/// Query sway for the current output layout.
pub fn query_layout() -> Result<DesktopLayout, LayoutError> {
    let output = Command::new("swaymsg")
        .args(["-t", "get_outputs", "-r"])
        .output()
        .map_err(|e| LayoutError::QueryFailed(format!("failed to run swaymsg: {e}")))?;

    if !output.status.success() {
        return Err(LayoutError::QueryFailed(format!(
            "swaymsg exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    parse_outputs(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `swaymsg -t get_outputs -r` JSON into a desktop layout.
///
/// Disabled outputs (`"active": false`) are skipped; they report 0x0
/// rectangles and are not part of the visible desktop.
pub fn parse_outputs(json: &str) -> Result<DesktopLayout, LayoutError> {
    let outputs: Vec<SwayOutput> = serde_json::from_str(json)?;

    let mut monitors = Vec::with_capacity(outputs.len());
    for out in outputs {
        if !out.active {
            warn!("Skipping inactive output {}", out.name);
            continue;
        }
        debug!(
            "Output {}: {}x{} at ({}, {})",
            out.name, out.rect.width, out.rect.height, out.rect.x, out.rect.y
        );
        monitors.push(Monitor::new(
            out.name,
            out.rect.x,
            out.rect.y,
            out.rect.width,
            out.rect.height,
        )?);
    }

    DesktopLayout::new(monitors)
}
