//! Interactive Placement Session
//!
//! Owns the single mutable [`PlacementState`] for the lifetime of the
//! interactive window and translates surface-agnostic input events into
//! placement mutations. All mutation is synchronous and single-threaded:
//! the windowing layer dispatches one event at a time and recomputes the
//! validity classification on each redraw.
//!
//! The session result is a typed [`SessionOutcome`] rather than a bag of
//! values mutated by event handlers, so "window closed without
//! confirming" is a first-class outcome distinguishable from a confirmed
//! placement.

use tracing::debug;

use crate::layout::DesktopLayout;
use crate::placement::{classify, FinalPlacement, PlacementError, PlacementState, Validity};

/// Input event in desktop coordinates.
///
/// The interactive surface converts raw pointer positions (screen pixels)
/// to desktop coordinates by dividing by its display scale before
/// constructing these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Discrete scroll ticks; positive zooms in
    Scroll(i32),
    /// Primary button pressed at a desktop-coordinate position
    DragBegin {
        /// Pointer x
        x: f64,
        /// Pointer y
        y: f64,
    },
    /// Pointer moved while dragging
    DragMove {
        /// Pointer x
        x: f64,
        /// Pointer y
        y: f64,
        /// Restrict movement to the dominant drag axis
        axis_lock: bool,
    },
    /// Primary button released
    DragEnd,
    /// Advance to the next fit-scale mode
    CycleFitMode,
    /// Commit the current placement
    Confirm,
}

/// Terminal result of an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// The user confirmed a placement
    Confirmed(FinalPlacement),
    /// The window was closed without confirming
    Cancelled,
}

/// Event-driven placement session over one desktop layout.
#[derive(Debug)]
pub struct Session {
    desktop: DesktopLayout,
    placement: PlacementState,
    confirmed: Option<FinalPlacement>,
}

impl Session {
    /// Start a session for a source image of the given pixel dimensions.
    pub fn new(desktop: DesktopLayout, source_width: u32, source_height: u32) -> Self {
        Self {
            desktop,
            placement: PlacementState::new(source_width, source_height),
            confirmed: None,
        }
    }

    /// The desktop layout this session places against.
    pub fn desktop(&self) -> &DesktopLayout {
        &self.desktop
    }

    /// The current placement transform.
    pub fn placement(&self) -> &PlacementState {
        &self.placement
    }

    /// Classify the current placement. Recomputed per call, never cached.
    pub fn validity(&self) -> Validity {
        classify(&self.placement, &self.desktop)
    }

    /// True once a Confirm event has been handled.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.is_some()
    }

    /// Apply one input event.
    ///
    /// Events after a Confirm are ignored; the placement is frozen once
    /// committed.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), PlacementError> {
        if self.confirmed.is_some() {
            return Ok(());
        }

        match event {
            InputEvent::Scroll(delta) => self.placement.apply_scroll(delta),
            InputEvent::DragBegin { x, y } => self.placement.begin_drag(x, y),
            InputEvent::DragMove { x, y, axis_lock } => {
                self.placement.continue_drag(x, y, axis_lock)?
            }
            InputEvent::DragEnd => self.placement.end_drag(),
            InputEvent::CycleFitMode => self.placement.cycle_fit_mode(&self.desktop),
            InputEvent::Confirm => {
                let final_placement = self.placement.finalize();
                debug!(
                    "Placement confirmed: {}x{} at ({:.1}, {:.1})",
                    final_placement.final_size.0,
                    final_placement.final_size.1,
                    final_placement.xoff,
                    final_placement.yoff
                );
                self.confirmed = Some(final_placement);
            }
        }
        Ok(())
    }

    /// The confirmed placement, if a Confirm event has been handled.
    pub fn confirmed_placement(&self) -> Option<FinalPlacement> {
        self.confirmed
    }

    /// Consume the session into its terminal outcome.
    pub fn into_outcome(self) -> SessionOutcome {
        match self.confirmed {
            Some(placement) => SessionOutcome::Confirmed(placement),
            None => SessionOutcome::Cancelled,
        }
    }
}
