//! # wallslice
//!
//! Interactive wallpaper splitter for multi-monitor sway desktops.
//!
//! Position and scale one source image over the whole desktop, then cut
//! one full-resolution PNG per monitor for use with swaybg and swaylock.
//!
//! # Architecture
//!
//! ```text
//! wallslice
//!   ├─> Layout (swaymsg query → Monitor rectangles → DesktopLayout)
//!   ├─> Session (typed input events → PlacementState mutations)
//!   │     ├─> Placement (scale + offset transform, fit modes, drag)
//!   │     └─> Validity (live Ok / UnderCoverage / OverZoom feedback)
//!   ├─> GUI (egui window: render transform, monitor outlines, input)
//!   └─> Crop (finalized placement → per-monitor crops → PNG output)
//! ```
//!
//! # Data Flow
//!
//! **Interactive path:** pointer/scroll/key → `InputEvent` →
//! `Session::handle` → redraw with `Session::validity`
//!
//! **Commit path:** Space → `PlacementState::finalize` →
//! `crop::resolve` → `crop::output::write_wallpapers` → swaybg/swaylock
//! command lines on stdout
//!
//! The geometry core (`geometry`, `layout`, `placement`, `crop`,
//! `session`) has no GUI dependency; the `gui` cargo feature gates the
//! eframe surface and the binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Plain rectangle value type
pub mod geometry;

/// Desktop layout model and sway output query
pub mod layout;

/// Placement transform state and validity classification
pub mod placement;

/// Crop resolution and wallpaper output
pub mod crop;

/// Typed event-driven interactive session
pub mod session;

/// Interactive placement window (egui)
#[cfg(feature = "gui")]
pub mod gui;
