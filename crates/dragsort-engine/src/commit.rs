#![forbid(unsafe_code)]

//! Commit: collapsing a finished drag into a list mutation.
//!
//! Everything that happened during the drag, however many crossings and
//! reversals, reduces to a single net index change. A session that ends
//! where it began commits nothing; the host only unwinds visuals. A
//! session with a non-zero net change commits one [`ReorderOp`], which
//! [`apply`] replays onto a backing `Vec` as a remove followed by an
//! insert.

use std::fmt;

use crate::session::DragSession;

/// One committed reorder: the grabbed row moves `from` its origin `to`
/// its final index.
///
/// Both indices are positions in the pre-drag list order. `to` is where
/// the row ends up after the move completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReorderOp {
    /// Index the row occupied when the drag began.
    pub from: usize,
    /// Index the row occupies once the move is applied.
    pub to: usize,
}

impl ReorderOp {
    /// Signed distance the row moved.
    #[must_use]
    pub const fn net_change(&self) -> isize {
        self.to as isize - self.from as isize
    }

    /// Index of the row the grabbed row must be inserted before, for
    /// hosts that splice with an insert-before primitive.
    ///
    /// The anchor addresses the list as it stands *before* the grabbed
    /// row is removed. Moving up, the row lands before its target;
    /// moving down, before the row one past the target, because
    /// removal pulls everything after the origin up by one.
    #[must_use]
    pub const fn insert_before_anchor(&self) -> usize {
        if self.to < self.from { self.to } else { self.to + 1 }
    }
}

impl fmt::Display for ReorderOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Commit decision for a finished session.
///
/// `None` when the session ends at its origin, whether because it never
/// started, every crossing was reversed, or no crossing ever happened.
#[must_use]
pub fn outcome(session: &DragSession) -> Option<ReorderOp> {
    let net = session.net_change();
    if net == 0 {
        return None;
    }
    let from = session.origin_index();
    let to = (from as isize + net) as usize;
    Some(ReorderOp { from, to })
}

/// A [`ReorderOp`] that does not address the list it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyError {
    /// An op index is past the end of the list.
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "reorder index {index} out of range for list of {len}")
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Replays a committed op onto a backing list.
///
/// The grabbed item is removed from `op.from` and re-inserted at
/// `op.to`; every other item keeps its relative order. The list is
/// untouched on error.
pub fn apply<T>(items: &mut Vec<T>, op: ReorderOp) -> Result<(), ApplyError> {
    let len = items.len();
    if op.from >= len {
        return Err(ApplyError::OutOfRange { index: op.from, len });
    }
    if op.to >= len {
        return Err(ApplyError::OutOfRange { index: op.to, len });
    }
    let item = items.remove(op.from);
    items.insert(op.to, item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragsort_core::geometry::{Bounds, Direction};

    fn moved_session(origin: usize, count: usize, net: isize) -> DragSession {
        let mut session = DragSession::new(origin, count, 25.0, 10.0, Bounds::new(0.0, 50.0));
        session.mark_started();
        let direction = if net < 0 { Direction::Up } else { Direction::Down };
        for _ in 0..net.abs() {
            session.apply_crossing(direction);
        }
        session
    }

    // ── Outcome ─────────────────────────────────────────────────────

    #[test]
    fn session_ending_at_origin_commits_nothing() {
        assert_eq!(outcome(&moved_session(2, 5, 0)), None);
    }

    #[test]
    fn reversed_session_commits_nothing() {
        let mut session = moved_session(2, 5, -2);
        session.apply_crossing(Direction::Down);
        session.apply_crossing(Direction::Down);
        assert_eq!(outcome(&session), None);
    }

    #[test]
    fn net_change_maps_to_from_and_to() {
        assert_eq!(
            outcome(&moved_session(2, 5, -2)),
            Some(ReorderOp { from: 2, to: 0 })
        );
        assert_eq!(
            outcome(&moved_session(1, 5, 3)),
            Some(ReorderOp { from: 1, to: 4 })
        );
    }

    // ── Anchor ──────────────────────────────────────────────────────

    #[test]
    fn upward_anchor_is_the_target_itself() {
        let op = ReorderOp { from: 3, to: 1 };
        assert_eq!(op.insert_before_anchor(), 1);
        assert_eq!(op.net_change(), -2);
    }

    #[test]
    fn downward_anchor_is_one_past_the_target() {
        // Removal shifts everything after the origin up by one, so the
        // pre-removal anchor sits one past the final index.
        let op = ReorderOp { from: 1, to: 3 };
        assert_eq!(op.insert_before_anchor(), 4);
        assert_eq!(op.net_change(), 2);
    }

    // ── Apply ───────────────────────────────────────────────────────

    #[test]
    fn apply_moves_up_and_shifts_the_band_right() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        apply(&mut items, ReorderOp { from: 2, to: 0 }).unwrap();
        assert_eq!(items, vec!['c', 'a', 'b', 'd', 'e']);
    }

    #[test]
    fn apply_moves_down_and_shifts_the_band_left() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        apply(&mut items, ReorderOp { from: 1, to: 3 }).unwrap();
        assert_eq!(items, vec!['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn apply_to_the_same_index_is_identity() {
        let mut items = vec![1, 2, 3];
        apply(&mut items, ReorderOp { from: 1, to: 1 }).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn apply_rejects_out_of_range_indices() {
        let mut items = vec![1, 2, 3];
        assert_eq!(
            apply(&mut items, ReorderOp { from: 3, to: 0 }),
            Err(ApplyError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            apply(&mut items, ReorderOp { from: 0, to: 7 }),
            Err(ApplyError::OutOfRange { index: 7, len: 3 })
        );
        assert_eq!(items, vec![1, 2, 3], "list untouched on error");
    }

    #[test]
    fn apply_error_message_names_both_values() {
        let error = ApplyError::OutOfRange { index: 7, len: 3 };
        assert_eq!(
            error.to_string(),
            "reorder index 7 out of range for list of 3"
        );
    }
}
