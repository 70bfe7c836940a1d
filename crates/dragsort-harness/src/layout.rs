#![forbid(unsafe_code)]

//! Simulated list layout for closed-loop engine testing.
//!
//! [`LayoutModel`] plays the host: it owns a column of rows, replays
//! every [`VisualCommand`] the engine emits, and answers the engine's
//! geometry queries from the resulting state. Midpoints reported back
//! include live displacement, exactly as a real layout engine would
//! report them mid-animation, which is what deep reversal sequences
//! need to resolve correctly.
//!
//! The model also counts keep-visible requests and tracks the
//! grab/reordering markers, so tests can assert the full command
//! protocol and not just the index arithmetic.

use ahash::AHashMap;
use dragsort_core::geometry::{Bounds, GeometryProvider, ItemMetrics};
use dragsort_engine::commit::{self, ApplyError, ReorderOp};
use dragsort_engine::visual::VisualCommand;

/// In-memory stand-in for a rendered reorderable list.
#[derive(Debug, Clone)]
pub struct LayoutModel {
    rows: Vec<ItemMetrics>,
    top: f64,
    shifts: AHashMap<usize, f64>,
    grabbed: Option<usize>,
    follow_offset: f64,
    reordering: bool,
    keep_visible_requests: usize,
}

impl LayoutModel {
    /// List of `count` rows of identical `content_height`, no margins,
    /// starting at vertical position zero.
    #[must_use]
    pub fn uniform(count: usize, content_height: f64) -> Self {
        Self::from_rows(vec![ItemMetrics::new(content_height); count])
    }

    /// List with per-row metrics, starting at vertical position zero.
    #[must_use]
    pub fn from_rows(rows: Vec<ItemMetrics>) -> Self {
        Self {
            rows,
            top: 0.0,
            shifts: AHashMap::new(),
            grabbed: None,
            follow_offset: 0.0,
            reordering: false,
            keep_visible_requests: 0,
        }
    }

    /// Moves the whole list to start at `top`.
    #[must_use]
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Top edge of row `index` with every row at rest.
    #[must_use]
    pub fn natural_top(&self, index: usize) -> f64 {
        self.top
            + self.rows[..index]
                .iter()
                .map(ItemMetrics::effective_height)
                .sum::<f64>()
    }

    /// Content midpoint of row `index` with every row at rest.
    #[must_use]
    pub fn natural_midpoint(&self, index: usize) -> f64 {
        let row = self.rows[index];
        self.natural_top(index) + row.margin_top + row.content_height / 2.0
    }

    /// Content midpoint of row `index` as currently rendered:
    /// displacement included, and the follow offset for the grabbed
    /// row.
    #[must_use]
    pub fn visual_midpoint(&self, index: usize) -> f64 {
        let mut midpoint = self.natural_midpoint(index) + self.shift_of(index);
        if self.grabbed == Some(index) {
            midpoint += self.follow_offset;
        }
        midpoint
    }

    /// Current displacement of row `index`, zero when at rest.
    #[must_use]
    pub fn shift_of(&self, index: usize) -> f64 {
        self.shifts.get(&index).copied().unwrap_or(0.0)
    }

    /// Row currently marked grabbed, if any.
    #[must_use]
    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    /// Whether the list carries the reordering marker.
    #[must_use]
    pub fn is_reordering(&self) -> bool {
        self.reordering
    }

    /// How many keep-visible hints have been replayed.
    #[must_use]
    pub fn keep_visible_requests(&self) -> usize {
        self.keep_visible_requests
    }

    /// Replays one engine command onto the layout.
    pub fn apply(&mut self, command: &VisualCommand) {
        match *command {
            VisualCommand::Grab { index } => {
                self.grabbed = Some(index);
                self.reordering = true;
            }
            VisualCommand::Follow { offset } => {
                self.follow_offset = offset;
            }
            VisualCommand::KeepVisible { .. } => {
                self.keep_visible_requests += 1;
            }
            VisualCommand::Shift { index, offset } => {
                self.shifts.insert(index, offset);
            }
            VisualCommand::Settle { index } => {
                self.shifts.remove(&index);
            }
            VisualCommand::ResetAll => {
                self.shifts.clear();
                self.grabbed = None;
                self.follow_offset = 0.0;
                self.reordering = false;
            }
        }
    }

    /// Replays a command stream in order.
    pub fn apply_all(&mut self, commands: &[VisualCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Applies a committed reorder to the backing rows.
    pub fn commit(&mut self, op: ReorderOp) -> Result<(), ApplyError> {
        commit::apply(&mut self.rows, op)
    }

    /// Whether every visual is back at rest.
    ///
    /// Holds after a replayed `ResetAll`; the keep-visible counter is a
    /// running total and does not participate.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.shifts.is_empty()
            && self.grabbed.is_none()
            && self.follow_offset == 0.0
            && !self.reordering
    }
}

impl GeometryProvider for LayoutModel {
    fn item_count(&self) -> usize {
        self.rows.len()
    }

    fn midpoint(&self, index: usize) -> Option<f64> {
        (index < self.rows.len()).then(|| self.visual_midpoint(index))
    }

    fn bounds(&self) -> Bounds {
        let height: f64 = self.rows.iter().map(ItemMetrics::effective_height).sum();
        Bounds::new(self.top, self.top + height)
    }

    fn metrics(&self, index: usize) -> Option<ItemMetrics> {
        self.rows.get(index).copied()
    }
}
