#![forbid(unsafe_code)]

//! Drag lifecycle controller.
//!
//! [`Reorderer`] is the entry point hosts talk to. It owns the session,
//! window, ledger, and detector for the drag currently in progress (if
//! any) and walks a three-state machine:
//!
//! ```text
//! IDLE --grab--> ARMED --first movement--> DRAGGING
//!   ^              |                          |
//!   +--------------+------release/cancel------+
//! ```
//!
//! - **Idle**: no drag state exists at all.
//! - **Armed**: a grab was accepted and its measurements cached, but no
//!   movement has been processed. Releasing here commits nothing.
//! - **Dragging**: movement has been processed; visuals follow the
//!   cursor and crossings are live.
//!
//! Input that makes no sense in the current state (movement while idle,
//! a second grab mid-drag, release without a grab) is dropped without
//! an error: such sequences are ordinary event-stream noise, not bugs
//! worth surfacing to the host.

use dragsort_core::config::ReorderConfig;
use dragsort_core::debug;
use dragsort_core::geometry::{Direction, GeometryProvider};

use crate::commit::{self, ReorderOp};
use crate::crossing::CrossingDetector;
use crate::session::DragSession;
use crate::tracker::SiblingWindow;
use crate::visual::{ShiftLedger, VisualCommand};

/// Where the controller sits in the drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderState {
    /// No drag in progress, nothing retained.
    Idle,
    /// Grab accepted, no movement processed yet.
    Armed,
    /// Movement processed, crossings live.
    Dragging,
}

impl std::fmt::Display for ReorderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Armed => "armed",
            Self::Dragging => "dragging",
        };
        f.write_str(name)
    }
}

/// Everything a release hands back to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// Visual unwind commands, replayed before any list mutation.
    pub commands: Vec<VisualCommand>,
    /// The committed reorder, absent when the drag ended at its origin.
    pub op: Option<ReorderOp>,
}

impl ReleaseOutcome {
    const fn idle() -> Self {
        Self {
            commands: Vec::new(),
            op: None,
        }
    }

    /// Whether this release changes the list order.
    #[must_use]
    pub const fn committed(&self) -> bool {
        self.op.is_some()
    }
}

struct ActiveDrag {
    session: DragSession,
    window: SiblingWindow,
    ledger: ShiftLedger,
    detector: CrossingDetector,
}

/// Lifecycle controller for one reorderable list.
///
/// One value per list; a controller never runs two drags at once. All
/// geometry is read through the provider passed to each call, so the
/// controller holds no reference to the host's rows between events.
pub struct Reorderer {
    config: ReorderConfig,
    drag: Option<ActiveDrag>,
}

impl Reorderer {
    /// Controller with the given configuration, idle.
    #[must_use]
    pub const fn new(config: ReorderConfig) -> Self {
        Self { config, drag: None }
    }

    /// Configuration this controller runs with.
    #[must_use]
    pub const fn config(&self) -> ReorderConfig {
        self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ReorderState {
        match &self.drag {
            None => ReorderState::Idle,
            Some(drag) if drag.session.started() => ReorderState::Dragging,
            Some(_) => ReorderState::Armed,
        }
    }

    /// Whether a drag is live (armed or dragging).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Session of the live drag, if one exists.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.drag.as_ref().map(|drag| &drag.session)
    }

    /// Sibling window of the live drag, if one exists.
    #[must_use]
    pub fn window(&self) -> Option<&SiblingWindow> {
        self.drag.as_ref().map(|drag| &drag.window)
    }

    /// Displacement ledger of the live drag, if one exists.
    #[must_use]
    pub fn ledger(&self) -> Option<&ShiftLedger> {
        self.drag.as_ref().map(|drag| &drag.ledger)
    }

    /// Accepts a grab on row `item_index` at cursor `cursor_pos`.
    ///
    /// Measures everything the drag will need up front: item count,
    /// container bounds, the grabbed row's effective height, and the
    /// two sibling midpoints. A grab while another drag is live, or on
    /// an index the provider does not know, is dropped.
    pub fn on_grab<P>(
        &mut self,
        provider: &P,
        item_index: usize,
        cursor_pos: f64,
    ) -> Vec<VisualCommand>
    where
        P: GeometryProvider + ?Sized,
    {
        if self.drag.is_some() {
            debug!(index = item_index, "grab dropped: drag already live");
            return Vec::new();
        }
        let item_count = provider.item_count();
        if item_index >= item_count {
            return Vec::new();
        }
        let Some(metrics) = provider.metrics(item_index) else {
            return Vec::new();
        };

        let session = DragSession::new(
            item_index,
            item_count,
            cursor_pos,
            metrics.effective_height(),
            provider.bounds(),
        );
        let window = SiblingWindow::initialize(provider, item_index);
        debug!(
            index = item_index,
            cursor = cursor_pos,
            height = session.grab_height(),
            "row grabbed"
        );
        self.drag = Some(ActiveDrag {
            session,
            window,
            ledger: ShiftLedger::new(),
            detector: CrossingDetector::new(),
        });
        vec![VisualCommand::Grab { index: item_index }]
    }

    /// Processes one movement event at `cursor_pos`.
    ///
    /// The first movement past the activation distance flips the drag
    /// live; from then on every non-stationary event emits a follow
    /// command, a keep-visible hint while the cursor is inside the
    /// container, and whatever crossings the detector finds. Movement
    /// while idle, stationary events, and events arriving mid-traversal
    /// emit nothing.
    pub fn on_move<P>(
        &mut self,
        provider: &P,
        cursor_pos: f64,
        movement_delta: f64,
    ) -> Vec<VisualCommand>
    where
        P: GeometryProvider + ?Sized,
    {
        let Some(drag) = self.drag.as_mut() else {
            return Vec::new();
        };
        if drag.detector.is_in_flight() {
            return Vec::new();
        }
        if movement_delta == 0.0 {
            return Vec::new();
        }
        if !drag.session.started() {
            let travelled = (cursor_pos - drag.session.cursor_start()).abs();
            if travelled < self.config.activation_distance {
                return Vec::new();
            }
            drag.session.mark_started();
            debug!(cursor = cursor_pos, "drag live");
        }
        drag.session
            .set_last_direction(Direction::from_delta(movement_delta));

        let mut commands = vec![VisualCommand::Follow {
            offset: drag.session.follow_offset(cursor_pos),
        }];
        if self.config.keep_visible_hints && drag.session.bounds().contains(cursor_pos) {
            commands.push(VisualCommand::KeepVisible {
                index: drag.session.origin_index(),
            });
        }
        commands.extend(drag.detector.on_move(
            &mut drag.session,
            &mut drag.window,
            &mut drag.ledger,
            provider,
            cursor_pos,
            movement_delta,
        ));
        commands
    }

    /// Ends the drag and reports what to do about it.
    ///
    /// The host replays the unwind commands first, then applies the op
    /// (when present) to its list. Release while idle returns an empty
    /// outcome.
    pub fn on_release(&mut self) -> ReleaseOutcome {
        let Some(drag) = self.drag.take() else {
            return ReleaseOutcome::idle();
        };
        let op = commit::outcome(&drag.session);
        match op {
            Some(op) => debug!(from = op.from, to = op.to, "drag committed"),
            None => debug!("drag released at origin"),
        }
        ReleaseOutcome {
            commands: vec![VisualCommand::ResetAll],
            op,
        }
    }

    /// Abandons the drag without committing anything.
    ///
    /// Covers pointer-cancel events and host teardown mid-drag. All
    /// displacement is unwound; the net change is discarded even when
    /// non-zero. A poisoned detector is discarded along with the rest
    /// of the drag state.
    pub fn cancel(&mut self) -> Vec<VisualCommand> {
        if self.drag.take().is_some() {
            debug!("drag cancelled");
            vec![VisualCommand::ResetAll]
        } else {
            Vec::new()
        }
    }
}

impl Default for Reorderer {
    fn default() -> Self {
        Self::new(ReorderConfig::default())
    }
}
