#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: input samples, geometry contract, and configuration.
//!
//! # Role in Dragsort
//! `dragsort-core` is the boundary layer. It owns the normalized input
//! vocabulary (pointer and touch samples, movement deltas), the geometry
//! contract the host implements, and the engine configuration.
//!
//! # Primary responsibilities
//! - **Samples**: canonical pointer/touch input as a tagged union, plus the
//!   stateful [`event::SampleNormalizer`] that collapses both into the one
//!   `(cursor position, movement delta)` shape the engine consumes.
//! - **Geometry**: [`geometry::GeometryProvider`], the midpoint/bounds/height
//!   measurement seam, with infinity sentinels for absent neighbors.
//! - **Configuration**: [`config::ReorderConfig`] with validation.
//!
//! # How it fits in the system
//! The engine (`dragsort-engine`) consumes normalized inputs and queries the
//! geometry contract; it never sees raw host events or presentation
//! structure. Everything host-specific stops here.

pub mod config;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
