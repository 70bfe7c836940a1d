#![forbid(unsafe_code)]

//! Reference driver for the Dragsort harness.
//!
//! Replays a scripted drag against a simulated six-row list and prints
//! the JSONL trace, its checksum, and the committed move. Useful as a
//! smoke check and as a way to eyeball the command protocol.
//!
//! # Running
//!
//! ```sh
//! cargo run -p dragsort-harness
//! ```

use std::process::ExitCode;

use dragsort_core::config::ReorderConfig;
use dragsort_core::geometry::ItemMetrics;
use dragsort_harness::golden::compute_trace_checksum;
use dragsort_harness::layout::LayoutModel;
use dragsort_harness::script::{GestureScript, run_pointer_script};

fn main() -> ExitCode {
    // Six rows with one taller entry, like a settings list.
    let rows = vec![
        ItemMetrics::new(32.0).with_margins(4.0, 4.0),
        ItemMetrics::new(32.0).with_margins(4.0, 4.0),
        ItemMetrics::new(48.0).with_margins(4.0, 4.0),
        ItemMetrics::new(32.0).with_margins(4.0, 4.0),
        ItemMetrics::new(32.0).with_margins(4.0, 4.0),
        ItemMetrics::new(32.0).with_margins(4.0, 4.0),
    ];
    let mut model = LayoutModel::from_rows(rows);

    // Grab row 4 and haul it up past two rows, then let go.
    let script = GestureScript::new()
        .grab(4)
        .move_by(-30.0)
        .move_by(-30.0)
        .move_by(-30.0)
        .release();

    let report = match run_pointer_script(&mut model, ReorderConfig::default(), &script) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("script failed: {error}");
            return ExitCode::FAILURE;
        }
    };

    for line in &report.trace {
        println!("{line}");
    }
    println!("checksum: {}", compute_trace_checksum(&report.trace));
    match report.op {
        Some(op) => println!("committed: {op}"),
        None => println!("committed: nothing"),
    }
    ExitCode::SUCCESS
}
