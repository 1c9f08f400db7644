//! Trajectory sampling over a z window.
//!
//! The line fit downstream assumes the sampled arc is locally straight, so
//! callers choose the window narrow and centred on a coarse estimate of the
//! two tracks' crossing z. That policy lives with the caller; this routine
//! only evaluates the model at the requested positions.

use thiserror::Error;
use vertex_core::{Pt3, Real, TrackModel, Vec3};

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("need at least 2 sampling steps, got {0}")]
    TooFewSteps(usize),
    #[error("empty z range: z_start == z_end ({0})")]
    EmptyRange(Real),
    #[error("track model undefined at z = {z}")]
    Propagation { z: Real },
}

/// A trajectory point at a requested z, tagged with the momentum there.
///
/// The momentum is carried along so the kinematics stage can reuse the same
/// evaluation instead of re-querying the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint {
    pub z: Real,
    pub position: Pt3,
    pub momentum: Vec3,
}

/// Sample a track model at `n_steps` evenly spaced z values spanning
/// `[z_start, z_end]` inclusive.
///
/// Deterministic and side-effect free: the same inputs always produce the
/// same sequence, so a failed call is never worth retrying. A model that
/// cannot be evaluated at one of the positions fails the whole sample with
/// [`SamplingError::Propagation`].
pub fn sample_trajectory<M: TrackModel>(
    model: &M,
    z_start: Real,
    z_end: Real,
    n_steps: usize,
) -> Result<Vec<SampledPoint>, SamplingError> {
    if n_steps < 2 {
        return Err(SamplingError::TooFewSteps(n_steps));
    }
    if z_start == z_end {
        return Err(SamplingError::EmptyRange(z_start));
    }

    let step = (z_end - z_start) / (n_steps - 1) as Real;
    let mut points = Vec::with_capacity(n_steps);
    for i in 0..n_steps {
        let z = z_start + step * i as Real;
        let state = model
            .state_at_z(z)
            .ok_or(SamplingError::Propagation { z })?;
        points.push(SampledPoint {
            z,
            position: state.position,
            momentum: state.momentum,
        });
    }
    Ok(points)
}

/// Extract the bare positions of a sample, in order.
pub fn sample_positions(points: &[SampledPoint]) -> Vec<Pt3> {
    points.iter().map(|p| p.position).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertex_core::synthetic::{LineTrackModel, ParabolicTrackModel};

    #[test]
    fn sample_spans_the_window_inclusive() {
        let model = LineTrackModel::through(Pt3::origin(), Vec3::new(0.0, 0.1, 1.0), 1.0);
        let pts = sample_trajectory(&model, -10.0, 10.0, 5).unwrap();
        assert_eq!(pts.len(), 5);
        assert!((pts[0].z + 10.0).abs() < 1e-12);
        assert!((pts[4].z - 10.0).abs() < 1e-12);
        assert!((pts[2].z).abs() < 1e-12);
    }

    #[test]
    fn sample_is_restartable() {
        let model = LineTrackModel::through(Pt3::new(1.0, 2.0, 3.0), Vec3::new(0.2, -0.1, 1.0), 1.0);
        let a = sample_trajectory(&model, -50.0, 50.0, 100).unwrap();
        let b = sample_trajectory(&model, -50.0, 50.0, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_few_steps_is_rejected() {
        let model = LineTrackModel::through(Pt3::origin(), Vec3::new(0.0, 0.0, 1.0), 1.0);
        assert!(matches!(
            sample_trajectory(&model, 0.0, 1.0, 1),
            Err(SamplingError::TooFewSteps(1))
        ));
    }

    #[test]
    fn empty_range_is_rejected() {
        let model = LineTrackModel::through(Pt3::origin(), Vec3::new(0.0, 0.0, 1.0), 1.0);
        assert!(matches!(
            sample_trajectory(&model, 3.0, 3.0, 10),
            Err(SamplingError::EmptyRange(_))
        ));
    }

    #[test]
    fn invalid_model_point_fails_the_sample() {
        let model = ParabolicTrackModel {
            reference: Pt3::origin(),
            slope_x: 0.0,
            curvature_x: 0.0,
            slope_y: 0.1,
            momentum_mag: 1.0,
            valid_half_range: Some(5.0),
        };
        let err = sample_trajectory(&model, -10.0, 10.0, 21).unwrap_err();
        assert!(matches!(err, SamplingError::Propagation { .. }));
    }
}
