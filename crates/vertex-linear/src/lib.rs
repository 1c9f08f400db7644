//! Closed-form building blocks for two-track vertex reconstruction.
//!
//! Four independent, pure components:
//! - [`sampling`]: evaluate a track model at evenly spaced z positions,
//! - [`line_fit`]: total-least-squares 3D line fit via SVD,
//! - [`closest_approach`]: point minimising the summed squared distance to
//!   two fitted lines,
//! - [`kinematics`]: invariant mass and combined momentum in the massless
//!   approximation.
//!
//! All functions are deterministic and hold no state; failures are typed
//! per module and abort only the pair under evaluation.

mod closest_approach;
mod kinematics;
mod line_fit;
mod sampling;

pub use closest_approach::*;
pub use kinematics::*;
pub use line_fit::*;
pub use sampling::*;
