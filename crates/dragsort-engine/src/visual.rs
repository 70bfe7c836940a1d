#![forbid(unsafe_code)]

//! Visual command stream and the displacement ledger.
//!
//! The engine never touches a widget tree. Every observable effect of a
//! drag leaves the engine as a [`VisualCommand`], and the host replays
//! those commands onto whatever it renders with. Commands are ordered;
//! replaying them in sequence reproduces the engine's view of the
//! world.
//!
//! [`ShiftLedger`] is the engine-side record of which rows are
//! currently displaced. A row is displaced or it is not; crossing a row
//! twice returns it home. The ledger is what makes a reversal an exact
//! undo instead of an accumulating error.

use ahash::AHashMap;

/// One rendering instruction for the host.
///
/// Indices refer to the backing list, which does not change while a
/// drag is live. Offsets are vertical page-space distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualCommand {
    /// Mark `index` as the grabbed row and mark the list reordering.
    Grab { index: usize },
    /// Position the grabbed row's visual `offset` away from its
    /// resting place.
    Follow { offset: f64 },
    /// Keep row `index` visible in the host's viewport if it can.
    KeepVisible { index: usize },
    /// Slide row `index` out of place by `offset`.
    Shift { index: usize, offset: f64 },
    /// Return row `index` to its resting place.
    Settle { index: usize },
    /// Clear every visual: follow offset, shifts, grab markers.
    ResetAll,
}

impl VisualCommand {
    /// Whether this command displaces a row.
    #[must_use]
    pub const fn is_shift(&self) -> bool {
        matches!(self, Self::Shift { .. })
    }

    /// Whether this command returns a row home.
    #[must_use]
    pub const fn is_settle(&self) -> bool {
        matches!(self, Self::Settle { .. })
    }

    /// Row the command addresses, if it addresses one.
    #[must_use]
    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::Grab { index }
            | Self::KeepVisible { index }
            | Self::Shift { index, .. }
            | Self::Settle { index } => Some(*index),
            Self::Follow { .. } | Self::ResetAll => None,
        }
    }
}

/// Which rows are displaced right now, and by how much.
#[derive(Debug, Clone, Default)]
pub struct ShiftLedger {
    shifts: AHashMap<usize, f64>,
}

impl ShiftLedger {
    /// Empty ledger: nothing displaced.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shifts: AHashMap::new(),
        }
    }

    /// Toggles row `index` between displaced and home.
    ///
    /// A row not in the ledger becomes displaced by `offset` and the
    /// returned command says so; a row already in the ledger settles,
    /// and `offset` is ignored in favour of simply going home.
    pub fn toggle(&mut self, index: usize, offset: f64) -> VisualCommand {
        if self.shifts.remove(&index).is_some() {
            VisualCommand::Settle { index }
        } else {
            self.shifts.insert(index, offset);
            VisualCommand::Shift { index, offset }
        }
    }

    /// Whether row `index` is currently displaced.
    #[must_use]
    pub fn is_shifted(&self, index: usize) -> bool {
        self.shifts.contains_key(&index)
    }

    /// Current displacement of row `index`, if any.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> Option<f64> {
        self.shifts.get(&index).copied()
    }

    /// Number of displaced rows.
    #[must_use]
    pub fn shifted_count(&self) -> usize {
        self.shifts.len()
    }

    /// Whether every row is home.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Displaced row indices in ascending order.
    #[must_use]
    pub fn shifted_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.shifts.keys().copied().collect();
        rows.sort_unstable();
        rows
    }

    /// Forgets every displacement.
    pub fn clear(&mut self) {
        self.shifts.clear();
    }
}
