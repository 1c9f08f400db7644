//! Track data model and the external evaluator boundary.
//!
//! A [`Track`] bundles the quantities this toolbox needs from a
//! reconstructed charged particle: its charge, its ordered hit positions,
//! and a [`TrackModel`] handle able to evaluate the trajectory at an
//! arbitrary position along the beam axis. The model itself (helical in a
//! magnetic field, straight-line without one) is owned by the surrounding
//! reconstruction framework; this crate only consumes its output.

use crate::math::{Pt3, Real, Vec3};

/// Position and momentum of a trajectory at a given z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackState {
    pub position: Pt3,
    pub momentum: Vec3,
}

/// Trajectory evaluator supplied by the reconstruction framework.
///
/// Implementations must be deterministic: the same `z` always yields the
/// same state. `None` means the model is not valid at that `z` (e.g. the
/// extrapolation leaves the model's validity range); callers treat this as
/// fatal for the pair under evaluation and never retry.
pub trait TrackModel {
    fn state_at_z(&self, z: Real) -> Option<TrackState>;
}

impl<T: TrackModel + ?Sized> TrackModel for &T {
    fn state_at_z(&self, z: Real) -> Option<TrackState> {
        (**self).state_at_z(z)
    }
}

/// A reconstructed charged-particle track.
///
/// Immutable after construction; all derived quantities are recomputed on
/// demand from the stored fields.
#[derive(Debug, Clone)]
pub struct Track<M: TrackModel> {
    /// Reconstructed charge sign (±1).
    pub charge: i32,
    /// Hit positions ordered along the trajectory.
    pub hits: Vec<Pt3>,
    /// Trajectory evaluator for this track.
    pub model: M,
}

impl<M: TrackModel> Track<M> {
    pub fn new(charge: i32, hits: Vec<Pt3>, model: M) -> Self {
        Self {
            charge,
            hits,
            model,
        }
    }

    /// Detector-half classification: sign of the first hit's non-bend (y)
    /// coordinate. A track with no hits is treated as bottom-half.
    pub fn top_half(&self) -> bool {
        self.hits.first().is_some_and(|h| h.y > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoModel;

    impl TrackModel for NoModel {
        fn state_at_z(&self, _z: Real) -> Option<TrackState> {
            None
        }
    }

    #[test]
    fn top_half_follows_first_hit_sign() {
        let top = Track::new(1, vec![Pt3::new(0.0, 12.0, -670.0)], NoModel);
        let bottom = Track::new(-1, vec![Pt3::new(0.0, -12.0, -670.0)], NoModel);
        assert!(top.top_half());
        assert!(!bottom.top_half());
    }

    #[test]
    fn hitless_track_is_bottom_half() {
        let t = Track::new(1, vec![], NoModel);
        assert!(!t.top_half());
    }
}
