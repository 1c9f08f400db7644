//! Total-least-squares 3D line fit.
//!
//! # Algorithm
//!
//! 1. Compute the centroid of the points.
//! 2. Build the N×3 matrix of centred points and take its SVD.
//! 3. The right singular vector of the largest singular value is the
//!    direction of maximum variance, the fitted line direction.
//!
//! This is the principal-axis (PCA) line: it minimises the summed squared
//! perpendicular distance, with no preferred projection axis. The sign of
//! the direction is not determined; consumers must not rely on it.

use nalgebra::DMatrix;
use thiserror::Error;
use vertex_core::{Pt3, Real, Vec3};

/// Largest singular value below which the point cloud has no usable
/// extent (all points coincide).
const DEGENERATE_TOL: Real = 1e-9;

#[derive(Debug, Error)]
pub enum LineFitError {
    #[error("need at least 2 points for a line fit, got {0}")]
    TooFewPoints(usize),
    #[error("degenerate fit: points have near-zero variance")]
    Degenerate,
}

/// A 3D line fitted through a point cloud.
#[derive(Debug, Clone)]
pub struct FittedLine {
    /// Mean of the fitted points; the line passes through it.
    pub centroid: Pt3,
    /// Unit direction of maximum variance. Sign is arbitrary.
    pub direction: Vec3,
    /// Per-point perpendicular offsets from the fitted line, in input
    /// order. Diagnostic only; they do not feed back into the fit.
    pub residuals: Vec<Vec3>,
}

impl FittedLine {
    /// Point on the line at parameter `t`: `centroid + t * direction`.
    pub fn point_at(&self, t: Real) -> Pt3 {
        self.centroid + self.direction * t
    }

    /// Parameter of the perpendicular projection of `p` onto the line.
    pub fn param_of(&self, p: &Pt3) -> Real {
        (p - self.centroid).dot(&self.direction) / self.direction.norm_squared()
    }

    /// Extrapolate the line to the plane `z = z_plane`.
    ///
    /// `None` when the line is (numerically) perpendicular to the beam
    /// axis and never crosses the plane.
    pub fn point_at_z(&self, z_plane: Real) -> Option<Pt3> {
        if self.direction.z.abs() < DEGENERATE_TOL {
            return None;
        }
        let t = (z_plane - self.centroid.z) / self.direction.z;
        Some(self.point_at(t))
    }
}

/// Fit a 3D line through `points` by principal-axis analysis.
///
/// Fails with [`LineFitError::Degenerate`] when the points have near-zero
/// variance (all coincident within tolerance) rather than returning an
/// arbitrary direction.
pub fn fit_line(points: &[Pt3]) -> Result<FittedLine, LineFitError> {
    let n = points.len();
    if n < 2 {
        return Err(LineFitError::TooFewPoints(n));
    }

    let mut centroid = Vec3::zeros();
    for p in points {
        centroid += p.coords;
    }
    centroid /= n as Real;
    let centroid = Pt3::from(centroid);

    let mut a = DMatrix::<Real>::zeros(n, 3);
    for (i, p) in points.iter().enumerate() {
        let centred = p - centroid;
        a[(i, 0)] = centred.x;
        a[(i, 1)] = centred.y;
        a[(i, 2)] = centred.z;
    }

    // Singular values come out in descending order; the first right
    // singular vector spans the direction of maximum variance.
    let svd = a.svd(false, true);
    let v_t = svd.v_t.as_ref().ok_or(LineFitError::Degenerate)?;
    if svd.singular_values[0] < DEGENERATE_TOL {
        return Err(LineFitError::Degenerate);
    }
    let direction = Vec3::new(v_t[(0, 0)], v_t[(0, 1)], v_t[(0, 2)]);

    let inv_norm_sq = 1.0 / direction.norm_squared();
    let residuals = points
        .iter()
        .map(|p| {
            let t = (p - centroid).dot(&direction) * inv_norm_sq;
            centroid + direction * t - p
        })
        .collect();

    Ok(FittedLine {
        centroid,
        direction,
        residuals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colinear_points(origin: Pt3, dir: Vec3, n: usize) -> Vec<Pt3> {
        (0..n).map(|i| origin + dir * (i as Real)).collect()
    }

    #[test]
    fn exact_line_gives_zero_residuals_and_parallel_direction() {
        let dir = Vec3::new(0.3, -0.2, 1.0);
        let pts = colinear_points(Pt3::new(1.0, 2.0, -600.0), dir, 7);
        let fit = fit_line(&pts).unwrap();

        for r in &fit.residuals {
            assert!(r.norm() < 1e-9, "residual too large: {r}");
        }
        // Sign-insensitive parallelism check.
        let cos = fit.direction.dot(&dir.normalize()).abs();
        assert!((cos - 1.0).abs() < 1e-12);
        assert!((fit.direction.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_is_the_mean() {
        let pts = colinear_points(Pt3::origin(), Vec3::new(1.0, 0.0, 0.0), 5);
        let fit = fit_line(&pts).unwrap();
        assert!((fit.centroid - Pt3::new(2.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let pts = vec![Pt3::new(1.0, 1.0, 1.0); 10];
        assert!(matches!(fit_line(&pts), Err(LineFitError::Degenerate)));
    }

    #[test]
    fn single_point_is_rejected() {
        let pts = vec![Pt3::origin()];
        assert!(matches!(fit_line(&pts), Err(LineFitError::TooFewPoints(1))));
    }

    #[test]
    fn noisy_line_recovers_dominant_direction() {
        let dir = Vec3::new(0.05, 0.1, 1.0).normalize();
        let pts: Vec<Pt3> = (0..50)
            .map(|i| {
                let t = i as Real - 25.0;
                // Small deterministic transverse wiggle.
                Pt3::origin() + dir * t + Vec3::new((i as Real * 0.7).sin(), (i as Real * 1.3).cos(), 0.0) * 0.01
            })
            .collect();
        let fit = fit_line(&pts).unwrap();
        assert!(fit.direction.dot(&dir).abs() > 0.9999);
    }

    #[test]
    fn extrapolation_to_z_plane() {
        let pts = colinear_points(Pt3::new(0.0, 0.0, 0.0), Vec3::new(1.0, -1.0, 2.0), 4);
        let fit = fit_line(&pts).unwrap();
        let at = fit.point_at_z(10.0).unwrap();
        assert!((at - Pt3::new(5.0, -5.0, 10.0)).norm() < 1e-9);
    }

    #[test]
    fn extrapolation_fails_perpendicular_to_z() {
        let pts = colinear_points(Pt3::origin(), Vec3::new(1.0, 0.0, 0.0), 4);
        let fit = fit_line(&pts).unwrap();
        assert!(fit.point_at_z(10.0).is_none());
    }
}
