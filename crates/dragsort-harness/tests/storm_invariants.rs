//! Storm-driven invariant checks on the full closed loop.
//!
//! Invariants under test:
//! 1. No storm panics the pipeline, and every release leaves the layout
//!    clean.
//! 2. The ledger mirrors the net change at every step.
//! 3. Window thresholds always equal the live visual midpoints of the
//!    rows they stand for: the arithmetic side of a refresh agrees with
//!    what a fresh measurement would have returned.
//! 4. A committed op always applies cleanly to a same-length list.
//! 5. Cancel wipes a drag mid-storm exactly like release does, minus
//!    the commit.

use dragsort_core::geometry::GeometryProvider;
use dragsort_engine::commit::apply;
use dragsort_engine::controller::Reorderer;
use dragsort_harness::layout::LayoutModel;
use dragsort_harness::storm::{StormConfig, StormPattern, generate_storm};
use proptest::prelude::*;

// ═══════════════════════════════════════════════════════════════════
// Strategies
// ═══════════════════════════════════════════════════════════════════

fn storm_setup() -> impl Strategy<Value = (usize, usize, f64, StormConfig)> {
    (2usize..=10).prop_flat_map(|count| {
        (
            Just(count),
            0..count,
            8.0f64..24.0,
            (0u8..3, any::<u64>()),
        )
            .prop_map(|(count, origin, height, (pattern_index, seed))| {
                let pattern = match pattern_index {
                    0 => StormPattern::Jitter {
                        count: 40,
                        amplitude: height * 1.5,
                    },
                    1 => StormPattern::Sweep {
                        count: 40,
                        step: if seed % 2 == 0 { height * 0.8 } else { -(height * 0.8) },
                    },
                    _ => StormPattern::ZigZag {
                        count: 40,
                        span: height * 2.0,
                    },
                };
                (count, origin, height, StormConfig::new(pattern, seed))
            })
    })
}

/// Asserts both window thresholds against live model geometry.
fn assert_window_matches_model(
    reorderer: &Reorderer,
    model: &LayoutModel,
) -> Result<(), TestCaseError> {
    let session = reorderer.session().unwrap();
    let window = reorderer.window().unwrap();
    let count = model.item_count() as isize;

    let prev_actual = session.actual_index(window.prev_index());
    if prev_actual >= 0 && prev_actual < count {
        let measured = model.visual_midpoint(prev_actual as usize);
        prop_assert!(
            (window.prev_midpoint() - measured).abs() < 1e-9,
            "upper threshold {} drifted from live midpoint {}",
            window.prev_midpoint(),
            measured
        );
    }
    let next_actual = session.actual_index(window.next_index());
    if next_actual >= 0 && next_actual < count {
        let measured = model.visual_midpoint(next_actual as usize);
        prop_assert!(
            (window.next_midpoint() - measured).abs() < 1e-9,
            "lower threshold {} drifted from live midpoint {}",
            window.next_midpoint(),
            measured
        );
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════
// 1 + 2 + 3 + 4. Full storm, release at the end
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn storms_hold_every_invariant_to_release(
        (count, origin, height, config) in storm_setup(),
    ) {
        let storm = generate_storm(&config);
        let mut model = LayoutModel::uniform(count, height);
        let mut reorderer = Reorderer::default();

        let mut cursor = model.natural_midpoint(origin);
        let commands = reorderer.on_grab(&model, origin, cursor);
        model.apply_all(&commands);

        for &delta in &storm.deltas {
            cursor += delta;
            let commands = reorderer.on_move(&model, cursor, delta);
            model.apply_all(&commands);

            let session = reorderer.session().unwrap();
            prop_assert!(
                session.slot() >= 0 && session.slot() < count as isize,
                "slot escaped the list"
            );
            prop_assert_eq!(
                reorderer.ledger().unwrap().shifted_count(),
                session.net_change().unsigned_abs(),
                "ledger out of step with net change"
            );
            assert_window_matches_model(&reorderer, &model)?;
        }

        let outcome = reorderer.on_release();
        model.apply_all(&outcome.commands);
        prop_assert!(model.is_clean(), "release must return the layout to rest");

        if let Some(op) = outcome.op {
            let mut items: Vec<usize> = (0..count).collect();
            prop_assert!(apply(&mut items, op).is_ok());
            prop_assert_eq!(items[op.to], origin);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// 5. Cancel mid-storm
// ═══════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cancel_mid_storm_wipes_the_drag(
        (count, origin, height, config) in storm_setup(),
    ) {
        let storm = generate_storm(&config);
        let mut model = LayoutModel::uniform(count, height);
        let mut reorderer = Reorderer::default();

        let mut cursor = model.natural_midpoint(origin);
        let commands = reorderer.on_grab(&model, origin, cursor);
        model.apply_all(&commands);

        for &delta in storm.deltas.iter().take(storm.deltas.len() / 2) {
            cursor += delta;
            let commands = reorderer.on_move(&model, cursor, delta);
            model.apply_all(&commands);
        }

        let commands = reorderer.cancel();
        model.apply_all(&commands);
        prop_assert!(model.is_clean(), "cancel must return the layout to rest");
        prop_assert!(!reorderer.is_active());

        // A fresh grab works immediately after.
        let commands = reorderer.on_grab(&model, origin, model.natural_midpoint(origin));
        prop_assert_eq!(commands.len(), 1);
    }
}
