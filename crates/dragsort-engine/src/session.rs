#![forbid(unsafe_code)]

//! Per-drag session state.
//!
//! A [`DragSession`] is created the moment a grab is accepted and
//! dropped the moment the drag ends. Everything in it is either a
//! grab-time measurement (origin index, cursor start, grabbed height,
//! container bounds) or a running tally (net index change, travel
//! direction). Nothing here survives a release: idle retains no drag
//! state at all.
//!
//! # Invariants
//!
//! 1. `origin_index < item_count` for the whole session lifetime. The
//!    list is not mutated while a drag is live, so neither value moves.
//! 2. `net_change` stays within `[-origin_index,
//!    item_count - 1 - origin_index]`; the current slot
//!    (`origin_index + net_change`) is always a valid index.
//! 3. `net_change` changes by exactly ±1 per recorded crossing.
//!
//! # Logical vs. actual indices
//!
//! Mid-drag, the engine reasons in *logical slots*: the order the list
//! would have if the grabbed row were already sitting at its current
//! slot. The backing list, however, still has the row at
//! `origin_index`; displaced siblings have visually slid into the gap
//! without changing their indices. [`DragSession::actual_index`] maps a
//! logical slot back to the index a geometry provider must be asked
//! about.

use dragsort_core::geometry::{Bounds, Direction};

/// State for one live drag, from accepted grab to release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    origin_index: usize,
    item_count: usize,
    cursor_start: f64,
    grab_height: f64,
    bounds: Bounds,
    net_change: isize,
    last_direction: Option<Direction>,
    started: bool,
}

impl DragSession {
    /// Opens a session from grab-time measurements.
    ///
    /// `grab_height` is the grabbed row's effective height (content
    /// plus vertical margins); it is the displacement magnitude for
    /// every sibling toggle in this session.
    #[must_use]
    pub const fn new(
        origin_index: usize,
        item_count: usize,
        cursor_start: f64,
        grab_height: f64,
        bounds: Bounds,
    ) -> Self {
        Self {
            origin_index,
            item_count,
            cursor_start,
            grab_height,
            bounds,
            net_change: 0,
            last_direction: None,
            started: false,
        }
    }

    /// Index the grabbed row occupied when the drag began.
    #[must_use]
    pub const fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Number of rows in the list, cached at grab time.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Cursor position at the accepted grab.
    #[must_use]
    pub const fn cursor_start(&self) -> f64 {
        self.cursor_start
    }

    /// Effective height of the grabbed row.
    #[must_use]
    pub const fn grab_height(&self) -> f64 {
        self.grab_height
    }

    /// Container bounds cached at grab time.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Signed number of positions the grabbed row has moved so far.
    #[must_use]
    pub const fn net_change(&self) -> isize {
        self.net_change
    }

    /// Logical slot the grabbed row currently occupies.
    #[must_use]
    pub const fn slot(&self) -> isize {
        self.origin_index as isize + self.net_change
    }

    /// Whether any movement has been processed since the grab.
    ///
    /// A session that never starts is a press-and-release on the
    /// handle; it commits nothing.
    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    /// Direction of the most recent non-stationary movement.
    #[must_use]
    pub const fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Offset the grabbed row's visual should carry for `cursor_pos`.
    ///
    /// The row follows the cursor verbatim: the offset is the raw
    /// distance travelled since the grab, unclamped even when the
    /// cursor leaves the container bounds.
    #[must_use]
    pub fn follow_offset(&self, cursor_pos: f64) -> f64 {
        cursor_pos - self.cursor_start
    }

    /// Marks the first processed movement of the session.
    pub fn mark_started(&mut self) {
        self.started = true;
    }

    /// Records the direction of the latest movement.
    pub fn set_last_direction(&mut self, direction: Direction) {
        self.last_direction = Some(direction);
    }

    /// Records one crossing in `direction`.
    pub fn apply_crossing(&mut self, direction: Direction) {
        self.net_change += direction.signum();
        debug_assert!(
            self.net_change >= -(self.origin_index as isize),
            "net change walked past the top of the list"
        );
        debug_assert!(
            self.net_change <= self.item_count as isize - 1 - self.origin_index as isize,
            "net change walked past the bottom of the list"
        );
    }

    /// Maps a logical slot to the backing-list index that currently
    /// renders at that slot.
    ///
    /// While the grabbed row logically sits at `slot()`, the rows
    /// between the origin and the slot are displaced by one position
    /// each; everything outside that band is untouched. Out-of-range
    /// logical values (one before the first row, one past the last) map
    /// to themselves, so sentinel lookups pass through unchanged.
    #[must_use]
    pub const fn actual_index(&self, logical: isize) -> isize {
        let origin = self.origin_index as isize;
        let slot = self.slot();
        if slot < origin && logical > slot && logical <= origin {
            logical - 1
        } else if slot > origin && logical >= origin && logical < slot {
            logical + 1
        } else {
            logical
        }
    }
}
