#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Reorder engine: the state machines behind a pointer-driven
//! drag-to-reorder interaction.
//!
//! # Role in Dragsort
//!
//! `dragsort-engine` turns normalized pointer movement into list
//! mutations. It owns every decision between "the user pressed a drag
//! handle" and "row 4 now lives at index 1": when a drag becomes live,
//! which sibling the cursor crossed, which rows are displaced, and what
//! the final order is.
//!
//! # Primary responsibilities
//!
//! - **Session bookkeeping** ([`session`]): one value per active drag
//!   holding the grab-time measurements and the running index change.
//! - **Sibling tracking** ([`tracker`]): the two midpoint thresholds
//!   bracketing the dragged row, advanced as crossings happen.
//! - **Crossing detection** ([`crossing`]): compares the cursor against
//!   the tracked thresholds and emits displacement toggles, looping when
//!   a single movement event jumps several rows.
//! - **Displacement ledger** ([`visual`]): which rows are currently
//!   pushed out of place, and the command stream a host renders from.
//! - **Commit** ([`commit`]): collapses a finished session into a
//!   `ReorderOp` and applies it to a backing `Vec`.
//! - **Controller** ([`controller`]): the facade tying the above into a
//!   grab / move / release lifecycle with a three-state machine.
//!
//! # How it fits in the system
//!
//! The engine is deliberately blind to any UI toolkit. Geometry comes
//! in through [`dragsort_core::geometry::GeometryProvider`], input
//! arrives pre-normalized from `dragsort-core`, and everything the host
//! must render leaves as [`visual::VisualCommand`] values. Hosts that
//! only want the high-level lifecycle can stay on
//! [`controller::Reorderer`] and never touch the inner modules.

pub mod commit;
pub mod controller;
pub mod crossing;
pub mod session;
pub mod tracker;
pub mod visual;
