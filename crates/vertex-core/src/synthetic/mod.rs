//! Deterministic synthetic track generation helpers.
//!
//! This module provides small building blocks for constructing synthetic
//! vertexing problems used in tests and examples:
//! - simple analytic track models ([`LineTrackModel`], [`ParabolicTrackModel`]),
//! - hit generation along a model,
//! - deterministic pseudo-random jitter utilities.
//!
//! The helpers are deterministic (explicit seeds; stable ordering) so that
//! pipeline idempotence can be asserted bit-for-bit.
//!
//! # Example
//!
//! ```
//! use vertex_core::synthetic::{hits_along, LineTrackModel};
//! use vertex_core::{Pt3, Vec3};
//!
//! let model = LineTrackModel::through(Pt3::new(10.0, -5.0, -620.0), Vec3::new(0.1, 0.2, 1.0), 1.0);
//! let hits = hits_along(&model, &[-100.0, 0.0, 100.0]);
//! assert_eq!(hits.len(), 3);
//! ```

mod noise;
mod tracks;

pub use noise::*;
pub use tracks::*;
