#![forbid(unsafe_code)]

//! Crossing detection: turning cursor movement into sibling toggles.
//!
//! Every processed movement event lands here. The detector compares the
//! cursor against the sibling window's two thresholds and, when a
//! threshold is crossed, emits a displacement toggle for the crossed
//! row, advances the window, and checks again: a single large movement
//! can cross several rows and each one is handled in order.
//!
//! # Invariants
//!
//! 1. A stationary event (`movement_delta == 0`) changes nothing and
//!    emits nothing.
//! 2. At most one traversal runs at a time. The in-flight flag is set
//!    for the duration of the crossing loop; an event arriving while it
//!    is set is dropped whole.
//! 3. A cursor inside the window (threshold comparisons inclusive)
//!    registers no crossing.
//! 4. Each crossing toggles exactly one row, by the grabbed row's
//!    effective height, signed opposite to the travel direction.
//! 5. The traversal loop stops at the list edges; the infinite sentinel
//!    thresholds cannot be crossed, and `NaN` compares false everywhere
//!    so it registers nothing.

use dragsort_core::geometry::{Direction, GeometryProvider};
use dragsort_core::trace;

use crate::session::DragSession;
use crate::tracker::SiblingWindow;
use crate::visual::{ShiftLedger, VisualCommand};

/// Per-session crossing detector.
///
/// Holds only the single-flight flag; all drag state lives in the
/// session, window, and ledger passed to [`on_move`](Self::on_move). If
/// a traversal aborts mid-loop (a panicking geometry provider), the
/// flag stays set and the detector drops every further event until
/// [`clear`](Self::clear) or session teardown.
#[derive(Debug, Clone, Default)]
pub struct CrossingDetector {
    in_flight: bool,
}

impl CrossingDetector {
    /// Detector with no traversal in flight.
    #[must_use]
    pub const fn new() -> Self {
        Self { in_flight: false }
    }

    /// Whether a traversal is (or was aborted while) in flight.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Drops the in-flight flag.
    pub fn clear(&mut self) {
        self.in_flight = false;
    }

    /// Processes one movement event.
    ///
    /// Emits one toggle command per row the cursor crossed, in crossing
    /// order. Stationary events, events arriving mid-traversal, and
    /// cursors still inside the window all return an empty stream.
    pub fn on_move<P>(
        &mut self,
        session: &mut DragSession,
        window: &mut SiblingWindow,
        ledger: &mut ShiftLedger,
        provider: &P,
        cursor_pos: f64,
        movement_delta: f64,
    ) -> Vec<VisualCommand>
    where
        P: GeometryProvider + ?Sized,
    {
        if movement_delta == 0.0 {
            return Vec::new();
        }
        if self.in_flight {
            return Vec::new();
        }
        if window.contains(cursor_pos) {
            return Vec::new();
        }

        let direction = Direction::from_delta(movement_delta);
        // Crossed rows slide into the vacated slot, opposite to travel.
        let shift_offset = -(session.grab_height() * direction.signum() as f64);
        let item_count = session.item_count() as isize;

        self.in_flight = true;
        let mut commands = Vec::new();
        loop {
            let crossed = match direction {
                Direction::Up => {
                    window.prev_index() >= 0 && cursor_pos < window.prev_midpoint()
                }
                Direction::Down => {
                    window.next_index() < item_count && cursor_pos > window.next_midpoint()
                }
            };
            if !crossed {
                break;
            }

            let boundary = match direction {
                Direction::Up => window.prev_index(),
                Direction::Down => window.next_index(),
            };
            let row = session.actual_index(boundary);
            debug_assert!(
                row >= 0 && row < item_count,
                "crossed slot must project onto a real row"
            );
            commands.push(ledger.toggle(row as usize, shift_offset));
            window.advance(direction);
            window.refresh_after_advance(direction, session, provider);
            session.apply_crossing(direction);
            trace!(
                row,
                net = session.net_change(),
                direction = %direction,
                "sibling crossed"
            );
        }
        self.in_flight = false;

        commands
    }
}
