#![forbid(unsafe_code)]

//! Sibling window: the two midpoint thresholds bracketing the drag.
//!
//! The crossing detector never scans the list. It watches exactly two
//! values, the vertical midpoint of the row logically above the grabbed
//! slot and the midpoint of the row logically below, and compares the
//! cursor against them. After every crossing the window slides one slot
//! in the travel direction and its two midpoints are re-derived.
//!
//! # Invariants
//!
//! 1. `prev_index < slot < next_index` in logical-slot space, with the
//!    window exactly one slot wide on each side.
//! 2. A missing neighbour (window edge past either end of the list)
//!    carries an infinite midpoint, so the cursor can never cross it.
//! 3. After an advance, the *away*-side midpoint is derived
//!    arithmetically from the midpoint it replaces, offset by the
//!    grabbed row's height; only the *toward*-side midpoint is
//!    re-measured from the provider.
//!
//! Invariant 3 matches what displacement does to the geometry: the row
//! the cursor just crossed slides by exactly the grabbed height, so its
//! new midpoint is a constant offset from a value the window already
//! holds. Re-measuring it would race against hosts that animate the
//! slide; the toward side is quiescent and safe to measure fresh.

use dragsort_core::geometry::{Direction, GeometryProvider, next_midpoint_of, prev_midpoint_of};

use crate::session::DragSession;

/// Midpoint thresholds for the rows logically adjacent to the drag.
#[derive(Debug, Clone, PartialEq)]
pub struct SiblingWindow {
    prev_index: isize,
    next_index: isize,
    prev_midpoint: f64,
    next_midpoint: f64,
}

impl SiblingWindow {
    /// Builds the window around a freshly grabbed row.
    ///
    /// At grab time nothing is displaced, so logical slots and backing
    /// indices coincide and both midpoints are plain measurements.
    /// Neighbours past either end of the list resolve to the infinite
    /// sentinels.
    #[must_use]
    pub fn initialize<P>(provider: &P, grabbed_index: usize) -> Self
    where
        P: GeometryProvider + ?Sized,
    {
        let prev_index = grabbed_index as isize - 1;
        let next_index = grabbed_index as isize + 1;
        Self {
            prev_index,
            next_index,
            prev_midpoint: prev_midpoint_of(provider, prev_index),
            next_midpoint: next_midpoint_of(provider, next_index),
        }
    }

    /// Logical slot of the row above the drag; `-1` when the drag is at
    /// the top.
    #[must_use]
    pub const fn prev_index(&self) -> isize {
        self.prev_index
    }

    /// Logical slot of the row below the drag; `item_count` when the
    /// drag is at the bottom.
    #[must_use]
    pub const fn next_index(&self) -> isize {
        self.next_index
    }

    /// Midpoint threshold on the upward side.
    #[must_use]
    pub const fn prev_midpoint(&self) -> f64 {
        self.prev_midpoint
    }

    /// Midpoint threshold on the downward side.
    #[must_use]
    pub const fn next_midpoint(&self) -> f64 {
        self.next_midpoint
    }

    /// Whether `cursor_pos` sits inside the window.
    ///
    /// Both comparisons are inclusive: a cursor resting exactly on a
    /// threshold has not crossed it. `NaN` never tests inside, which
    /// also means it can never register as crossed.
    #[must_use]
    pub fn contains(&self, cursor_pos: f64) -> bool {
        cursor_pos >= self.prev_midpoint && cursor_pos <= self.next_midpoint
    }

    /// Slides the window one slot in `direction`.
    ///
    /// The grabbed slot is skipped if an edge would land on it. In
    /// logical-slot space the window brackets the slot exactly, so the
    /// skip cannot fire; the guard keeps the invariant explicit.
    pub fn advance(&mut self, direction: Direction) {
        let step = direction.signum();
        let slot = self.prev_index + 1 + step;
        self.prev_index += step;
        self.next_index += step;
        if self.prev_index == slot {
            self.prev_index += step;
        }
        if self.next_index == slot {
            self.next_index += step;
        }
        debug_assert_eq!(
            self.next_index - self.prev_index,
            2,
            "sibling window must stay one slot wide on each side"
        );
    }

    /// Re-derives both midpoints after an [`advance`](Self::advance).
    ///
    /// The side the cursor came from takes the displaced row's new
    /// midpoint: the old opposite-side threshold offset by the grabbed
    /// height. The side the cursor travels toward is measured from the
    /// provider at the backing index currently rendering in that slot.
    pub fn refresh_after_advance<P>(
        &mut self,
        direction: Direction,
        session: &DragSession,
        provider: &P,
    ) where
        P: GeometryProvider + ?Sized,
    {
        match direction {
            Direction::Up => {
                self.next_midpoint = self.prev_midpoint + session.grab_height();
                let actual = session.actual_index(self.prev_index);
                self.prev_midpoint = prev_midpoint_of(provider, actual);
            }
            Direction::Down => {
                self.prev_midpoint = self.next_midpoint - session.grab_height();
                let actual = session.actual_index(self.next_index);
                self.next_midpoint = next_midpoint_of(provider, actual);
            }
        }
    }
}
