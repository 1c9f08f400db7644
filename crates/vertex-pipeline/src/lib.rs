//! Per-pair orchestration for two-track vertex reconstruction.
//!
//! Control flow per candidate pair:
//!
//! ```text
//! select(pair) → coarse crossing z → sample(A), sample(B)
//!              → fit(A), fit(B) → solve(vertex) → kinematics(A, B)
//!              → PairVertexReport
//! ```
//!
//! Every stage is a pure function from `vertex-linear`; this crate adds the
//! caller policies the solvers deliberately leave out: the sampling-window
//! choice, electron/positron labeling under the configured field sign, the
//! reference-plane diagnostics, and the text dump emitted per accepted
//! pair. Failures are typed per pair and never outlive it: the per-event
//! helper logs the skip and moves on to the next pair.
//!
//! # Example
//!
//! ```
//! use vertex_core::synthetic::{hits_along, LineTrackModel};
//! use vertex_core::{Pt3, Track, Vec3};
//! use vertex_pipeline::{vertex_pair, PairVertexingConfig};
//!
//! let decay = Pt3::new(10.0, -5.0, -620.0);
//! let up = LineTrackModel::through(decay, Vec3::new(0.1, 0.2, 1.0), 0.9);
//! let down = LineTrackModel::through(decay, Vec3::new(-0.05, -0.15, 1.0), 1.1);
//! let hit_zs: Vec<f64> = (0..10).map(|i| -520.0 + 10.0 * i as f64).collect();
//!
//! let track_a = Track::new(-1, hits_along(&up, &hit_zs), up);
//! let track_b = Track::new(1, hits_along(&down, &hit_zs), down);
//!
//! let config = PairVertexingConfig {
//!     z_reference: -670.0,
//!     ..Default::default()
//! };
//! let report = vertex_pair(1, &track_a, &track_b, &config).unwrap();
//! assert!((report.vertex - decay).norm() < 1e-6);
//! ```

mod config;
mod dump;
mod vertexing;

pub use config::*;
pub use dump::*;
pub use vertexing::*;
