#![forbid(unsafe_code)]

//! Geometry vocabulary and the measurement contract.
//!
//! All coordinates are vertical page-space positions in `f64`, increasing
//! downward. The engine never measures anything itself; it queries a
//! [`GeometryProvider`] the host implements and treats out-of-range neighbors
//! as the infinity sentinels, which makes the quiescent check on an exhausted
//! side structurally unviolable.
//!
//! # Invariants
//!
//! 1. [`MIDPOINT_BEFORE_FIRST`] compares below every finite midpoint and
//!    [`MIDPOINT_AFTER_LAST`] above every finite midpoint.
//! 2. [`prev_midpoint_of`] and [`next_midpoint_of`] never panic for any
//!    signed index; unresolvable queries degrade to the side's sentinel.
//! 3. Midpoints reported by a provider are *current visual* positions: a row
//!    carrying a settled shift reports its shifted midpoint.

use std::fmt;

/// Midpoint sentinel for a neighbor below the start of the list.
pub const MIDPOINT_BEFORE_FIRST: f64 = f64::NEG_INFINITY;

/// Midpoint sentinel for a neighbor past the end of the list.
pub const MIDPOINT_AFTER_LAST: f64 = f64::INFINITY;

// ── Direction ───────────────────────────────────────────────────────────

/// Vertical travel direction of the grabbed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Toward smaller coordinates (and smaller indices).
    Up,
    /// Toward larger coordinates (and larger indices).
    Down,
}

impl Direction {
    /// Direction implied by a nonzero movement delta.
    ///
    /// Callers filter zero deltas out first; a zero here reads as `Down`,
    /// matching the sign convention of the crossing step.
    #[must_use]
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 { Self::Up } else { Self::Down }
    }

    /// The signed index step of one crossing in this direction.
    #[must_use]
    pub const fn signum(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Whether this is upward travel.
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, Self::Up)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

// ── Bounds ──────────────────────────────────────────────────────────────

/// Vertical extent of the list container, in the same coordinate space as
/// midpoints and cursor positions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Top edge of the container.
    pub top: f64,
    /// Bottom edge of the container.
    pub bottom: f64,
}

impl Bounds {
    /// Create bounds from top and bottom edges.
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Vertical size; zero when inverted.
    #[must_use]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// Whether a position lies within the container, edges inclusive.
    #[must_use]
    pub fn contains(&self, pos: f64) -> bool {
        pos >= self.top && pos <= self.bottom
    }

    /// Whether the bounds enclose no space.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bottom <= self.top
    }
}

// ── Item metrics ────────────────────────────────────────────────────────

/// Measured vertical footprint of one row.
///
/// The *effective height* (content plus both vertical margins) is the room a
/// row occupies in list flow, and therefore the magnitude of every shift and
/// of the midpoint arithmetic during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMetrics {
    /// Border-box height of the row content.
    pub content_height: f64,
    /// Margin above the row.
    pub margin_top: f64,
    /// Margin below the row.
    pub margin_bottom: f64,
}

impl ItemMetrics {
    /// Metrics for a row without margins.
    #[must_use]
    pub const fn new(content_height: f64) -> Self {
        Self {
            content_height,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    /// Set both vertical margins.
    #[must_use]
    pub const fn with_margins(mut self, top: f64, bottom: f64) -> Self {
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    /// Content height plus both vertical margins.
    #[must_use]
    pub fn effective_height(&self) -> f64 {
        self.content_height + self.margin_top + self.margin_bottom
    }
}

// ── Provider contract ───────────────────────────────────────────────────

/// Measurement service the engine queries and never implements.
///
/// Implementors report *current visual* geometry: a row with a settled shift
/// applied reports its shifted midpoint, exactly as a rectangle measurement
/// of the presented row would. The engine deliberately avoids querying rows
/// that are mid-transition (see the sibling tracker's refresh rule), so
/// providers do not need to model animation timing.
pub trait GeometryProvider {
    /// Number of rows in the list.
    fn item_count(&self) -> usize;

    /// Current visual midpoint of the row at `index`.
    ///
    /// `None` when the index is out of range or the row cannot be measured.
    fn midpoint(&self, index: usize) -> Option<f64>;

    /// Container bounds, queried once per drag at grab time.
    fn bounds(&self) -> Bounds;

    /// Vertical footprint of the row at `index`, `None` when out of range or
    /// unmeasurable.
    fn metrics(&self, index: usize) -> Option<ItemMetrics>;
}

/// Midpoint of the neighbor *above*, mapped onto the low sentinel.
///
/// Accepts a signed index so an exhausted window (index `-1` and below) needs
/// no special casing at call sites. An in-range row the provider cannot
/// measure also degrades to the sentinel, freezing crossings on that side.
#[must_use]
pub fn prev_midpoint_of<P: GeometryProvider + ?Sized>(provider: &P, index: isize) -> f64 {
    resolve_midpoint(provider, index).unwrap_or(MIDPOINT_BEFORE_FIRST)
}

/// Midpoint of the neighbor *below*, mapped onto the high sentinel.
#[must_use]
pub fn next_midpoint_of<P: GeometryProvider + ?Sized>(provider: &P, index: isize) -> f64 {
    resolve_midpoint(provider, index).unwrap_or(MIDPOINT_AFTER_LAST)
}

fn resolve_midpoint<P: GeometryProvider + ?Sized>(provider: &P, index: isize) -> Option<f64> {
    if index < 0 {
        return None;
    }
    let index = index as usize;
    if index >= provider.item_count() {
        return None;
    }
    provider.midpoint(index)
}

// ── Test helpers ────────────────────────────────────────────────────────

/// Fixed-geometry providers for tests.
///
/// [`testing::FixedRows`] reports *natural* (unshifted) positions only. That
/// is sufficient for grab-time measurements, same-direction crossing chains,
/// and single-step reversals, where every fresh query lands on an unshifted
/// row. Sequences that re-query previously shifted rows need a model that
/// applies shift commands back into its layout; the harness crate provides
/// one.
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing {
    use super::{Bounds, GeometryProvider, ItemMetrics};

    /// Equal-height rows stacked from a fixed container top.
    #[derive(Debug, Clone)]
    pub struct FixedRows {
        count: usize,
        metrics: ItemMetrics,
        top: f64,
    }

    impl FixedRows {
        /// `count` rows of the given content height, no margins, top at 0.
        #[must_use]
        pub const fn new(count: usize, content_height: f64) -> Self {
            Self {
                count,
                metrics: ItemMetrics::new(content_height),
                top: 0.0,
            }
        }

        /// Set vertical margins on every row.
        #[must_use]
        pub const fn with_margins(mut self, top: f64, bottom: f64) -> Self {
            self.metrics = self.metrics.with_margins(top, bottom);
            self
        }

        /// Set the container's top edge.
        #[must_use]
        pub const fn with_top(mut self, top: f64) -> Self {
            self.top = top;
            self
        }

        /// Natural midpoint of the row at `index`, ignoring row count.
        #[must_use]
        pub fn natural_midpoint(&self, index: usize) -> f64 {
            let stride = self.metrics.effective_height();
            self.top
                + stride * index as f64
                + self.metrics.margin_top
                + self.metrics.content_height / 2.0
        }
    }

    impl GeometryProvider for FixedRows {
        fn item_count(&self) -> usize {
            self.count
        }

        fn midpoint(&self, index: usize) -> Option<f64> {
            (index < self.count).then(|| self.natural_midpoint(index))
        }

        fn bounds(&self) -> Bounds {
            let height = self.metrics.effective_height() * self.count as f64;
            Bounds::new(self.top, self.top + height)
        }

        fn metrics(&self, index: usize) -> Option<ItemMetrics> {
            (index < self.count).then_some(self.metrics)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────
