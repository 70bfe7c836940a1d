//! Property-based tests for the reorder engine.
//!
//! Invariants under test:
//! 1. The grabbed slot never leaves the list: `0 <= slot < item_count`
//!    after every prefix of every movement sequence.
//! 2. The sibling window brackets the grabbed slot exactly, one slot on
//!    each side, for the whole drag.
//! 3. After every processed event with a finite cursor, the cursor sits
//!    inside the refreshed window (quiescence).
//! 4. The displacement ledger holds exactly `|net_change|` rows at all
//!    times: each position of travel displaces one row, each reversal
//!    settles one.
//! 5. A committed op is a permutation: the grabbed item lands at
//!    `op.to`, every other item keeps its relative order.
//! 6. One event sequence, one outcome: replaying a drag yields the same
//!    command stream and the same commit.
//! 7. Hostile cursor streams (NaN, infinities) never panic and never
//!    break invariants 1, 2, or 4.

use dragsort_core::geometry::testing::FixedRows;
use dragsort_engine::commit::apply;
use dragsort_engine::controller::{ReorderState, Reorderer};
use dragsort_engine::visual::VisualCommand;
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════
// Strategies
// ═══════════════════════════════════════════════════════════════════

/// List shape: row count, grabbed origin, uniform row height.
fn list_shape() -> impl Strategy<Value = (usize, usize, f64)> {
    (1usize..=12).prop_flat_map(|count| (Just(count), 0..count, 8.0f64..40.0))
}

/// Finite per-event cursor deltas.
fn movement_deltas() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-120.0f64..120.0, 0..40)
}

/// Deltas with NaN and infinities sprinkled in.
fn hostile_deltas() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![
            4 => -200.0f64..200.0,
            1 => Just(f64::NAN),
            1 => Just(f64::INFINITY),
            1 => Just(f64::NEG_INFINITY),
        ],
        0..30,
    )
}

/// Grabs `origin` and replays `deltas`, collecting every command.
fn drive(
    count: usize,
    origin: usize,
    height: f64,
    deltas: &[f64],
) -> (Reorderer, Vec<VisualCommand>) {
    let rows = FixedRows::new(count, height);
    let mut reorderer = Reorderer::default();
    let mut commands = reorderer.on_grab(&rows, origin, rows.natural_midpoint(origin));
    let mut cursor = rows.natural_midpoint(origin);
    for &delta in deltas {
        cursor += delta;
        commands.extend(reorderer.on_move(&rows, cursor, delta));
    }
    (reorderer, commands)
}

// ═══════════════════════════════════════════════════════════════════
// 1 + 2. Slot stays in range, window brackets it
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn slot_and_window_stay_lawful(
        (count, origin, height) in list_shape(),
        deltas in movement_deltas(),
    ) {
        let rows = FixedRows::new(count, height);
        let mut reorderer = Reorderer::default();
        reorderer.on_grab(&rows, origin, rows.natural_midpoint(origin));
        let mut cursor = rows.natural_midpoint(origin);

        for &delta in &deltas {
            cursor += delta;
            reorderer.on_move(&rows, cursor, delta);

            let session = reorderer.session().unwrap();
            let window = reorderer.window().unwrap();
            prop_assert!(
                session.slot() >= 0 && session.slot() < count as isize,
                "slot {} escaped a list of {}",
                session.slot(),
                count
            );
            prop_assert_eq!(
                window.prev_index(),
                session.slot() - 1,
                "window lost the slot's upper edge"
            );
            prop_assert_eq!(
                window.next_index(),
                session.slot() + 1,
                "window lost the slot's lower edge"
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 3. Quiescence after every processed event
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cursor_is_quiescent_after_every_event(
        (count, origin, height) in list_shape(),
        deltas in movement_deltas(),
    ) {
        let rows = FixedRows::new(count, height);
        let mut reorderer = Reorderer::default();
        reorderer.on_grab(&rows, origin, rows.natural_midpoint(origin));
        let mut cursor = rows.natural_midpoint(origin);

        for &delta in &deltas {
            cursor += delta;
            reorderer.on_move(&rows, cursor, delta);
            let window = reorderer.window().unwrap();
            prop_assert!(
                window.contains(cursor),
                "cursor {} left outside window [{}, {}]",
                cursor,
                window.prev_midpoint(),
                window.next_midpoint()
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 4. Ledger size tracks the net change
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ledger_holds_exactly_net_change_rows(
        (count, origin, height) in list_shape(),
        deltas in movement_deltas(),
    ) {
        let rows = FixedRows::new(count, height);
        let mut reorderer = Reorderer::default();
        reorderer.on_grab(&rows, origin, rows.natural_midpoint(origin));
        let mut cursor = rows.natural_midpoint(origin);

        for &delta in &deltas {
            cursor += delta;
            reorderer.on_move(&rows, cursor, delta);
            let session = reorderer.session().unwrap();
            let ledger = reorderer.ledger().unwrap();
            prop_assert_eq!(
                ledger.shifted_count(),
                session.net_change().unsigned_abs(),
                "displaced rows out of step with net change {}",
                session.net_change()
            );
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 5. Commit is a permutation preserving relative order
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn commit_moves_one_item_and_keeps_the_rest_ordered(
        (count, origin, height) in list_shape(),
        deltas in movement_deltas(),
    ) {
        let (mut reorderer, _) = drive(count, origin, height, &deltas);
        let slot = reorderer.session().unwrap().slot();
        let outcome = reorderer.on_release();

        match outcome.op {
            None => prop_assert_eq!(slot, origin as isize, "no-op commit must end at origin"),
            Some(op) => {
                prop_assert_eq!(op.from, origin);
                prop_assert_eq!(op.to as isize, slot, "op target must match the final slot");

                let mut items: Vec<usize> = (0..count).collect();
                apply(&mut items, op).unwrap();
                prop_assert_eq!(items[op.to], op.from, "grabbed item must land at op.to");
                let rest: Vec<usize> =
                    items.iter().copied().filter(|&item| item != op.from).collect();
                let expected: Vec<usize> =
                    (0..count).filter(|&item| item != op.from).collect();
                prop_assert_eq!(rest, expected, "bystanders must keep their relative order");
            }
        }
        prop_assert_eq!(reorderer.state(), ReorderState::Idle);
    }
}

// ═══════════════════════════════════════════════════════════════════
// 6. Determinism
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn replaying_a_drag_reproduces_it(
        (count, origin, height) in list_shape(),
        deltas in movement_deltas(),
    ) {
        let (mut first, first_commands) = drive(count, origin, height, &deltas);
        let (mut second, second_commands) = drive(count, origin, height, &deltas);
        prop_assert_eq!(first_commands, second_commands);
        prop_assert_eq!(first.on_release(), second.on_release());
    }
}

// ═══════════════════════════════════════════════════════════════════
// 7. Hostile input never panics, never corrupts state
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hostile_cursor_streams_keep_the_engine_lawful(
        (count, origin, height) in list_shape(),
        deltas in hostile_deltas(),
    ) {
        let rows = FixedRows::new(count, height);
        let mut reorderer = Reorderer::default();
        reorderer.on_grab(&rows, origin, rows.natural_midpoint(origin));
        let mut cursor = rows.natural_midpoint(origin);

        for &delta in &deltas {
            cursor += delta;
            reorderer.on_move(&rows, cursor, delta);

            let session = reorderer.session().unwrap();
            let ledger = reorderer.ledger().unwrap();
            prop_assert!(session.slot() >= 0 && session.slot() < count as isize);
            prop_assert_eq!(ledger.shifted_count(), session.net_change().unsigned_abs());
        }

        let outcome = reorderer.on_release();
        if let Some(op) = outcome.op {
            let mut items: Vec<usize> = (0..count).collect();
            prop_assert!(apply(&mut items, op).is_ok());
        }
    }
}
