//! High-level entry crate for the `vertexing-rs` toolbox.
//!
//! Two-track 3D vertex reconstruction: sample each trajectory over a
//! narrow z window, fit a 3D line to each sample by principal-axis
//! analysis, solve for the point of closest approach of the two lines, and
//! derive the pair kinematics in the massless approximation.
//!
//! ## Building blocks
//!
//! ```no_run
//! use vertex::linear::{fit_line, solve_vertex, sample_positions, sample_trajectory};
//! use vertex::core::{Pt3, TrackModel};
//!
//! # fn example(model: impl TrackModel) -> Result<(), Box<dyn std::error::Error>> {
//! let sample = sample_trajectory(&model, -700.0, -640.0, 100)?;
//! let line = fit_line(&sample_positions(&sample))?;
//! println!("direction: {:?}", line.direction);
//! # Ok(())
//! # }
//! ```
//!
//! ## Full pipeline
//!
//! ```no_run
//! use vertex::pipeline::{process_event, PairVertexingConfig};
//! use vertex::core::{Track, TrackModel};
//!
//! # fn example<M: TrackModel>(tracks: Vec<Track<M>>) {
//! let config = PairVertexingConfig {
//!     z_reference: -674.0,
//!     ..Default::default()
//! };
//! for report in process_event(1, &tracks, &config) {
//!     println!("vertex at z = {:.2}", report.vertex.z);
//! }
//! # }
//! ```
//!
//! ## Module organization
//!
//! - **[`core`]**: math types, the track-model boundary, pair
//!   classification, synthetic helpers
//! - **[`linear`]**: the closed-form sampling / fit / solve / kinematics
//!   components
//! - **[`pipeline`]**: per-pair orchestration, configuration, text dump
//! - **[`prelude`]**: convenient re-exports for common use cases
//!
//! ## Stability
//!
//! The `vertex` crate is the public compatibility boundary. Lower-level
//! crates are intended for advanced usage and may evolve more quickly.

/// Math types, track-model boundary, and pair classification.
pub mod core {
    pub use vertex_core::*;
}

/// Closed-form vertexing components (sampling, line fit, closest approach,
/// kinematics).
pub mod linear {
    pub use vertex_linear::*;
}

/// Per-pair orchestration, configuration, and the text dump.
pub mod pipeline {
    pub use vertex_pipeline::*;
}

/// Convenient re-exports for common use cases.
///
/// Import with `use vertex::prelude::*;` to get started quickly.
pub mod prelude {
    pub use crate::core::{
        is_v0_candidate, FieldSign, Pt3, Real, Track, TrackModel, TrackPair, TrackState, Vec3,
    };
    pub use crate::linear::{
        fit_line, invariant_mass, sample_trajectory, solve_vertex, FittedLine, SampledPoint,
        VertexCandidate,
    };
    pub use crate::pipeline::{
        process_event, vertex_pair, DumpWriter, PairError, PairVertexReport, PairVertexingConfig,
    };
}
