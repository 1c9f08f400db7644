//! Analytic track models for tests and examples.

use crate::math::{Pt3, Real, Vec3};
use crate::track::{TrackModel, TrackState};

/// Slope below which a trajectory is considered perpendicular to the beam
/// axis and not evaluable as a function of z.
const MIN_DZ_SLOPE: Real = 1e-12;

/// Field-free straight-line trajectory.
///
/// The position at `z` is `origin + t * direction` with
/// `t = (z - origin.z) / direction.z`; the momentum points along
/// `direction` with fixed magnitude.
#[derive(Debug, Clone, Copy)]
pub struct LineTrackModel {
    pub origin: Pt3,
    pub direction: Vec3,
    pub momentum_mag: Real,
}

impl LineTrackModel {
    /// A line through `point` along `direction` carrying `momentum_mag`.
    pub fn through(point: Pt3, direction: Vec3, momentum_mag: Real) -> Self {
        Self {
            origin: point,
            direction,
            momentum_mag,
        }
    }
}

impl TrackModel for LineTrackModel {
    fn state_at_z(&self, z: Real) -> Option<TrackState> {
        if self.direction.z.abs() < MIN_DZ_SLOPE {
            return None;
        }
        let t = (z - self.origin.z) / self.direction.z;
        Some(TrackState {
            position: self.origin + self.direction * t,
            momentum: self.direction.normalize() * self.momentum_mag,
        })
    }
}

/// Trajectory with a quadratic bend in x, linear in y.
///
/// Approximates a helix over a short z window:
/// `x(z) = x0 + ax*dz + bx*dz²`, `y(z) = y0 + ay*dz` with `dz = z - z0`.
/// The momentum follows the tangent with fixed magnitude.
#[derive(Debug, Clone, Copy)]
pub struct ParabolicTrackModel {
    pub reference: Pt3,
    pub slope_x: Real,
    pub curvature_x: Real,
    pub slope_y: Real,
    pub momentum_mag: Real,
    /// Half-width of the z window where the model is valid; `None` means
    /// valid everywhere.
    pub valid_half_range: Option<Real>,
}

impl TrackModel for ParabolicTrackModel {
    fn state_at_z(&self, z: Real) -> Option<TrackState> {
        let dz = z - self.reference.z;
        if let Some(half) = self.valid_half_range {
            if dz.abs() > half {
                return None;
            }
        }
        let position = Pt3::new(
            self.reference.x + self.slope_x * dz + self.curvature_x * dz * dz,
            self.reference.y + self.slope_y * dz,
            z,
        );
        let tangent = Vec3::new(self.slope_x + 2.0 * self.curvature_x * dz, self.slope_y, 1.0);
        Some(TrackState {
            position,
            momentum: tangent.normalize() * self.momentum_mag,
        })
    }
}

/// Evaluate a model at the given z values and collect the hit positions,
/// requiring the model to be valid everywhere.
pub fn try_hits_along<M: TrackModel>(model: &M, zs: &[Real]) -> anyhow::Result<Vec<Pt3>> {
    let mut hits = Vec::with_capacity(zs.len());
    for &z in zs {
        let Some(state) = model.state_at_z(z) else {
            anyhow::bail!("synthetic model undefined at z = {z}");
        };
        hits.push(state.position);
    }
    Ok(hits)
}

/// Evaluate a model at the given z values, keeping only the positions where
/// the model is valid.
///
/// Convenient for tests where part of the requested range may fall outside
/// a model's validity window.
pub fn hits_along<M: TrackModel>(model: &M, zs: &[Real]) -> Vec<Pt3> {
    zs.iter()
        .filter_map(|&z| model.state_at_z(z).map(|s| s.position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_model_passes_through_its_origin() {
        let model = LineTrackModel::through(Pt3::new(10.0, -5.0, -620.0), Vec3::new(0.1, 0.2, 1.0), 1.5);
        let state = model.state_at_z(-620.0).unwrap();
        assert!((state.position - Pt3::new(10.0, -5.0, -620.0)).norm() < 1e-12);
        assert!((state.momentum.norm() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn line_model_perpendicular_to_z_is_unevaluable() {
        let model = LineTrackModel::through(Pt3::origin(), Vec3::new(1.0, 0.0, 0.0), 1.0);
        assert!(model.state_at_z(5.0).is_none());
    }

    #[test]
    fn parabolic_model_respects_validity_window() {
        let model = ParabolicTrackModel {
            reference: Pt3::new(0.0, 0.0, 0.0),
            slope_x: 0.01,
            curvature_x: 1e-4,
            slope_y: 0.02,
            momentum_mag: 1.0,
            valid_half_range: Some(50.0),
        };
        assert!(model.state_at_z(40.0).is_some());
        assert!(model.state_at_z(60.0).is_none());
    }

    #[test]
    fn parabolic_tangent_changes_along_z() {
        let model = ParabolicTrackModel {
            reference: Pt3::new(0.0, 0.0, 0.0),
            slope_x: 0.0,
            curvature_x: 1e-3,
            slope_y: 0.0,
            momentum_mag: 1.0,
            valid_half_range: None,
        };
        let a = model.state_at_z(-10.0).unwrap().momentum;
        let b = model.state_at_z(10.0).unwrap().momentum;
        assert!((a - b).norm() > 1e-6);
    }
}
