//! Core types for the `vertexing-rs` toolbox.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec3`, `Pt3`, ...),
//! - the [`TrackModel`] evaluator trait (the boundary to the surrounding
//!   reconstruction framework) and the [`Track`] data model built on it,
//! - pair classification (detector halves, charge, parity bucket),
//! - configuration types shared by the vertexing pipeline,
//! - deterministic synthetic track models for tests and examples.
//!
//! Everything here is immutable after construction: tracks, pairs and
//! configurations are plain values, and no type holds per-event state.

/// Linear algebra type aliases and helpers.
pub mod math;
/// Track data model and the external track-model evaluator boundary.
pub mod track;
/// Two-track pair classification.
pub mod pair;
/// Shared configuration types.
pub mod config;
/// Deterministic synthetic track models and noise helpers.
pub mod synthetic;

pub use config::*;
pub use math::*;
pub use pair::*;
pub use track::*;
