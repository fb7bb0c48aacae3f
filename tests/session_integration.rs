//! End-to-end placement and output tests
//!
//! Drives the full pipeline the binary uses — layout parsing, session
//! events, crop resolution, wallpaper output — without the GUI surface.

use image::{DynamicImage, Rgba, RgbaImage};

use wallslice::crop::{self, output, CropError};
use wallslice::geometry::Rect;
use wallslice::layout::{sway, DesktopLayout, Monitor};
use wallslice::placement::Validity;
use wallslice::session::{InputEvent, Session, SessionOutcome};

fn desktop(monitors: &[(&str, i32, i32, u32, u32)]) -> DesktopLayout {
    DesktopLayout::new(
        monitors
            .iter()
            .map(|&(name, x, y, w, h)| Monitor::new(name, x, y, w, h).unwrap())
            .collect(),
    )
    .unwrap()
}

/// Gradient image so crops are visually distinct in manual inspection.
fn test_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    }))
}

// =============================================================================
// Full pipeline
// =============================================================================

#[test]
fn test_fit_width_session_to_written_wallpapers() {
    // Single 1920x1080 monitor, 3840x2160 source, FitWidth then confirm
    let layout = desktop(&[("eDP-1", 0, 0, 1920, 1080)]);
    let mut session = Session::new(layout.clone(), 3840, 2160);

    session.handle(InputEvent::CycleFitMode).unwrap();
    assert_eq!(session.validity(), Validity::Ok);
    assert!((session.placement().scale() - 0.5).abs() < 1e-9);
    session.handle(InputEvent::Confirm).unwrap();

    let placement = match session.into_outcome() {
        SessionOutcome::Confirmed(p) => p,
        SessionOutcome::Cancelled => panic!("session should be confirmed"),
    };
    assert_eq!(placement.final_size, (1920, 1080));
    assert_eq!(placement.xoff, 0.0);
    assert_eq!(placement.yoff, 0.0);

    let plan = crop::resolve(&placement, &layout).unwrap();
    assert_eq!(plan.crops[0].rect, Rect::from_origin_size(0, 0, 1920, 1080));

    let dir = tempfile::tempdir().unwrap();
    let written = output::write_wallpapers(&test_image(3840, 2160), &plan, dir.path()).unwrap();

    assert_eq!(written.len(), 1);
    assert_eq!(written[0].monitor, "eDP-1");
    let saved = image::open(&written[0].path).unwrap();
    assert_eq!((saved.width(), saved.height()), (1920, 1080));
}

#[test]
fn test_two_monitor_split_writes_one_file_per_monitor() {
    let layout = desktop(&[("DP-1", 0, 0, 32, 16), ("DP-2", 32, 0, 32, 16)]);
    let mut session = Session::new(layout.clone(), 64, 16);
    session.handle(InputEvent::Confirm).unwrap();

    let placement = session.confirmed_placement().unwrap();
    let plan = crop::resolve(&placement, &layout).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let written = output::write_wallpapers(&test_image(64, 16), &plan, dir.path()).unwrap();

    assert_eq!(written.len(), 2);
    for (wp, (name, _, _, w, h)) in written.iter().zip([("DP-1", 0, 0, 32u32, 16u32), ("DP-2", 32, 0, 32, 16)]) {
        assert_eq!(wp.monitor, name);
        assert!(wp.path.ends_with(format!("{name}.png")));
        let saved = image::open(&wp.path).unwrap();
        assert_eq!((saved.width(), saved.height()), (w, h));
    }

    let bg = output::swaybg_command(&written);
    assert!(bg.starts_with("swaybg -o DP-1 -i "));
    assert!(bg.contains(" -o DP-2 -i "));
    let lock = output::swaylock_command(&written);
    assert!(lock.starts_with("swaylock -i DP-1:"));
    assert!(lock.contains(" -i DP-2:"));
}

#[test]
fn test_downsampled_interactive_dimensions_compose_into_output() {
    // The session ran against a half-resolution preview; the crop math is
    // in preview-derived desktop coordinates, and the full-resolution
    // image is resized down to the final size at output time.
    let layout = desktop(&[("eDP-1", 0, 0, 16, 8)]);
    let mut session = Session::new(layout.clone(), 16, 8); // preview dims
    session.handle(InputEvent::Confirm).unwrap();

    let plan = crop::resolve(&session.confirmed_placement().unwrap(), &layout).unwrap();
    assert_eq!(plan.final_size, (16, 8));

    let dir = tempfile::tempdir().unwrap();
    let full_res = test_image(32, 16); // twice the preview resolution
    let written = output::write_wallpapers(&full_res, &plan, dir.path()).unwrap();

    let saved = image::open(&written[0].path).unwrap();
    assert_eq!((saved.width(), saved.height()), (16, 8));
}

// =============================================================================
// Spec scenarios across module boundaries
// =============================================================================

#[test]
fn test_under_coverage_session_fails_at_crop_resolution() {
    // Two 1920x1080 monitors side by side, 1920x1080 source at scale 1:
    // advisory under-coverage during the session, hard failure at commit.
    let layout = desktop(&[("A", 0, 0, 1920, 1080), ("B", 1920, 0, 1920, 1080)]);
    let mut session = Session::new(layout.clone(), 1920, 1080);

    assert_eq!(session.validity(), Validity::UnderCoverage);

    // Commit is permitted regardless of the advisory classification
    session.handle(InputEvent::Confirm).unwrap();
    let placement = session.confirmed_placement().unwrap();

    assert!(matches!(
        crop::resolve(&placement, &layout),
        Err(CropError::OutOfBoundsCrop { .. })
    ));
}

#[test]
fn test_drag_and_zoom_session_round_trip() {
    // Cover a 100x100 desktop with a 400x400 source, drag up-left, zoom
    // out twice, and verify the finalized crop geometry.
    let layout = desktop(&[("eDP-1", 0, 0, 100, 100)]);
    let mut session = Session::new(layout.clone(), 400, 400);

    session.handle(InputEvent::DragBegin { x: 200.0, y: 200.0 }).unwrap();
    session
        .handle(InputEvent::DragMove {
            x: 150.0,
            y: 180.0,
            axis_lock: false,
        })
        .unwrap();
    session.handle(InputEvent::DragEnd).unwrap();
    session.handle(InputEvent::Scroll(-1)).unwrap();
    session.handle(InputEvent::Scroll(-1)).unwrap();

    // offset (-50, -20), scale 0.9: image spans (-50,-20)..(310,340)
    assert_eq!(session.validity(), Validity::Ok);
    session.handle(InputEvent::Confirm).unwrap();

    let placement = session.confirmed_placement().unwrap();
    assert_eq!(placement.final_size, (360, 360));
    assert_eq!(placement.xoff, 50.0);
    assert_eq!(placement.yoff, 20.0);

    let plan = crop::resolve(&placement, &layout).unwrap();
    assert_eq!(plan.crops[0].rect, Rect::from_origin_size(50, 20, 100, 100));
}

// =============================================================================
// Layout query parsing feeding the pipeline
// =============================================================================

#[test]
fn test_sway_fixture_to_crop_plan() {
    let json = r#"[
        {"name": "eDP-1", "active": true,
         "rect": {"x": 0, "y": 0, "width": 1920, "height": 1080}},
        {"name": "DP-3", "active": true,
         "rect": {"x": 1920, "y": 0, "width": 1920, "height": 1080}},
        {"name": "HDMI-A-1", "active": false,
         "rect": {"x": 0, "y": 0, "width": 0, "height": 0}}
    ]"#;
    let layout = sway::parse_outputs(json).unwrap();
    assert_eq!(layout.size(), (3840, 1080));

    let mut session = Session::new(layout.clone(), 3840, 1080);
    session.handle(InputEvent::Confirm).unwrap();

    let plan = crop::resolve(&session.confirmed_placement().unwrap(), &layout).unwrap();
    assert_eq!(plan.crops.len(), 2); // inactive output is not cropped for
    assert_eq!(plan.crops[1].name, "DP-3");
    assert_eq!(plan.crops[1].rect, Rect::from_origin_size(1920, 0, 1920, 1080));
}
