//! Interactive Placement Window
//!
//! egui/eframe surface for the placement session. This layer is thin I/O
//! glue: it converts pointer, scroll and key events into desktop-coordinate
//! [`InputEvent`]s, draws the image at the current transform, and strokes
//! the monitor outlines in the color of the current validity
//! classification (white = Ok, orange = over-zoom, red = under-coverage).
//!
//! The window shows the desktop shrunk by `display_scale`; all pointer
//! positions are divided by that factor before they reach the session, so
//! the geometry core only ever sees desktop coordinates.

use std::sync::{Arc, Mutex};

use eframe::egui;
use image::DynamicImage;
use thiserror::Error;
use tracing::{debug, error};

use crate::layout::{DesktopLayout, Monitor};
use crate::placement::{FinalPlacement, Validity};
use crate::session::{InputEvent, Session, SessionOutcome};

/// Outline color for a fully covering, 1:1-or-better placement.
const COLOR_OK: egui::Color32 = egui::Color32::WHITE;
/// Outline color for an over-zoomed placement.
const COLOR_OVER_ZOOM: egui::Color32 = egui::Color32::from_rgb(255, 150, 0);
/// Outline color for an under-covering placement.
const COLOR_UNDER_COVERAGE: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

/// GUI error types
#[derive(Error, Debug)]
pub enum GuiError {
    /// The window system failed
    #[error("Window system error: {0}")]
    WindowSystem(#[from] eframe::Error),
}

/// Run the interactive placement session to completion.
///
/// Opens a window sized to the desktop bounding box times
/// `display_scale`, runs the event loop until the user confirms with
/// Space or closes the window, and returns the ternary outcome.
pub fn run_session(
    image: &DynamicImage,
    desktop: DesktopLayout,
    display_scale: f32,
) -> Result<SessionOutcome, GuiError> {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());

    let window_size = egui::vec2(
        desktop.width() as f32 * display_scale,
        desktop.height() as f32 * display_scale,
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false),
        ..Default::default()
    };

    let session = Session::new(desktop, image.width(), image.height());
    let result: Arc<Mutex<Option<FinalPlacement>>> = Arc::new(Mutex::new(None));
    let result_slot = Arc::clone(&result);

    eframe::run_native(
        "wallslice",
        options,
        Box::new(move |cc| {
            Ok(Box::new(PlacementApp::new(
                cc,
                color_image,
                session,
                display_scale,
                result_slot,
            )))
        }),
    )?;

    let outcome = match result.lock().expect("result slot poisoned").take() {
        Some(placement) => SessionOutcome::Confirmed(placement),
        None => SessionOutcome::Cancelled,
    };
    debug!("Interactive session ended: {outcome:?}");
    Ok(outcome)
}

struct PlacementApp {
    session: Session,
    texture: egui::TextureHandle,
    display_scale: f32,
    result: Arc<Mutex<Option<FinalPlacement>>>,
}

impl PlacementApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        color_image: egui::ColorImage,
        session: Session,
        display_scale: f32,
        result: Arc<Mutex<Option<FinalPlacement>>>,
    ) -> Self {
        let texture =
            cc.egui_ctx
                .load_texture("wallpaper", color_image, egui::TextureOptions::LINEAR);
        Self {
            session,
            texture,
            display_scale,
            result,
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        // DragStateViolation is a contract bug in the event mapping; report
        // it rather than crashing the window.
        if let Err(e) = self.session.handle(event) {
            error!("Input event rejected: {e}");
        }
    }

    /// Convert a window position to desktop coordinates.
    fn to_desktop(&self, pos: egui::Pos2, origin: egui::Pos2) -> (f64, f64) {
        (
            ((pos.x - origin.x) / self.display_scale) as f64,
            ((pos.y - origin.y) / self.display_scale) as f64,
        )
    }

    fn monitor_outline(&self, monitor: &Monitor, origin: egui::Pos2) -> egui::Rect {
        let ds = self.display_scale;
        egui::Rect::from_min_size(
            origin + egui::vec2(monitor.x as f32 * ds, monitor.y as f32 * ds),
            egui::vec2(monitor.width as f32 * ds, monitor.height as f32 * ds),
        )
    }
}

impl eframe::App for PlacementApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Scroll wheel: one discrete scale tick per direction per frame
        let scroll_y = ctx.input(|i| i.raw_scroll_delta.y);
        if scroll_y > 0.0 {
            self.dispatch(InputEvent::Scroll(1));
        } else if scroll_y < 0.0 {
            self.dispatch(InputEvent::Scroll(-1));
        }

        // Space confirms and closes
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) {
            self.dispatch(InputEvent::Confirm);
            if let Some(placement) = self.session.confirmed_placement() {
                *self.result.lock().expect("result slot poisoned") = Some(placement);
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        let axis_lock = ctx.input(|i| i.modifiers.shift);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (canvas, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                // Pointer -> drag events, in desktop coordinates
                if response.drag_started() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let (x, y) = self.to_desktop(pos, canvas.min);
                        self.dispatch(InputEvent::DragBegin { x, y });
                    }
                } else if response.dragged() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let (x, y) = self.to_desktop(pos, canvas.min);
                        self.dispatch(InputEvent::DragMove { x, y, axis_lock });
                    }
                }
                if response.drag_stopped() {
                    self.dispatch(InputEvent::DragEnd);
                }
                if response.secondary_clicked() {
                    self.dispatch(InputEvent::CycleFitMode);
                }

                // Image at the current transform, shrunk to display scale
                let ds = self.display_scale;
                let placement = self.session.placement();
                let (ox, oy) = placement.offset();
                let (sw, sh) = placement.scaled_size();
                let image_rect = egui::Rect::from_min_size(
                    canvas.min + egui::vec2(ox as f32 * ds, oy as f32 * ds),
                    egui::vec2(sw as f32 * ds, sh as f32 * ds),
                );
                let painter = ui.painter_at(canvas);
                painter.image(
                    self.texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );

                // Monitor outlines colored by the live classification
                let color = match self.session.validity() {
                    Validity::Ok => COLOR_OK,
                    Validity::OverZoom => COLOR_OVER_ZOOM,
                    Validity::UnderCoverage => COLOR_UNDER_COVERAGE,
                };
                let stroke = egui::Stroke::new(2.0, color);
                for monitor in self.session.desktop().monitors() {
                    painter.rect_stroke(self.monitor_outline(monitor, canvas.min), 0.0, stroke);
                }
            });
    }
}
