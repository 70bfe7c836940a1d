#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Test harness for the Dragsort reorder engine.
//!
//! # Role in Dragsort
//!
//! `dragsort-harness` closes the loop the engine leaves open: the
//! engine emits visual commands and queries geometry, and something has
//! to play the part of the rendered list. This crate provides that
//! something, plus the machinery to drive whole gestures through it and
//! record what happened.
//!
//! # Primary responsibilities
//!
//! - **Layout simulation** ([`layout`]): a [`layout::LayoutModel`] that
//!   replays engine commands and answers geometry queries with
//!   displacement included, the way a live layout would.
//! - **Gesture scripting** ([`script`]): a step DSL and runners that
//!   push pointer or touch samples through the real input normalizer
//!   and controller.
//! - **Storm generation** ([`storm`]): seeded, reproducible
//!   movement-delta sequences for stress tests.
//! - **Golden traces** ([`golden`]): JSONL trace validation, checksums,
//!   and fixture IO for regression tests.
//!
//! # How it fits in the system
//!
//! Integration tests in this crate (and anywhere else) can express an
//! entire drag as a one-line script and assert on the committed
//! outcome, the command stream, and the final layout state, without a
//! browser or a UI toolkit in sight.

pub mod golden;
pub mod layout;
pub mod script;
pub mod storm;
