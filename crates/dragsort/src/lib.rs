#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Dragsort public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a lightweight
//! prelude for day-to-day usage.
//!
//! # Example
//!
//! Drive one drag by hand against a fixed-layout provider:
//!
//! ```
//! use dragsort::{Bounds, GeometryProvider, ItemMetrics, ReorderConfig, Reorderer};
//!
//! struct Rows {
//!     height: f64,
//!     count: usize,
//! }
//!
//! impl GeometryProvider for Rows {
//!     fn item_count(&self) -> usize {
//!         self.count
//!     }
//!     fn midpoint(&self, index: usize) -> Option<f64> {
//!         (index < self.count).then(|| index as f64 * self.height + self.height / 2.0)
//!     }
//!     fn bounds(&self) -> Bounds {
//!         Bounds::new(0.0, self.count as f64 * self.height)
//!     }
//!     fn metrics(&self, index: usize) -> Option<ItemMetrics> {
//!         (index < self.count).then(|| ItemMetrics::new(self.height))
//!     }
//! }
//!
//! let rows = Rows { height: 10.0, count: 5 };
//! let mut reorderer = Reorderer::new(ReorderConfig::default());
//!
//! // Grab row 2 at its midpoint, drag up past the row above, release.
//! reorderer.on_grab(&rows, 2, 25.0);
//! reorderer.on_move(&rows, 14.0, -11.0);
//! let outcome = reorderer.on_release();
//!
//! let op = outcome.op.unwrap();
//! assert_eq!((op.from, op.to), (2, 1));
//!
//! let mut items = vec!["a", "b", "c", "d", "e"];
//! dragsort::apply(&mut items, op)?;
//! assert_eq!(items, ["a", "c", "b", "d", "e"]);
//! # Ok::<(), dragsort::ApplyError>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use dragsort_core::config::{ConfigError, DEFAULT_ACTIVATION_DISTANCE, ReorderConfig};
pub use dragsort_core::event::{
    InputSample, Modifiers, MoveInput, NormalizedInput, PointerButton, PointerSample,
    SampleNormalizer, SamplePhase, TouchPoint, TouchSample,
};
pub use dragsort_core::geometry::{Bounds, Direction, GeometryProvider, ItemMetrics};

// --- Engine re-exports -----------------------------------------------------

pub use dragsort_engine::commit::{ApplyError, ReorderOp, apply};
pub use dragsort_engine::controller::{ReleaseOutcome, ReorderState, Reorderer};
pub use dragsort_engine::session::DragSession;
pub use dragsort_engine::tracker::SiblingWindow;
pub use dragsort_engine::visual::{ShiftLedger, VisualCommand};

// --- Errors ---------------------------------------------------------------

mod error;

pub use error::{Error, RecoveryAction, Result};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Bounds, Error, GeometryProvider, ItemMetrics, ReorderConfig, ReorderOp, ReorderState,
        Reorderer, Result, VisualCommand, apply,
    };

    pub use crate::{core, engine};
}

pub use dragsort_core as core;
pub use dragsort_engine as engine;
