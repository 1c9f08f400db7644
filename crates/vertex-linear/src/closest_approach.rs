//! Closest-approach point of two fitted 3D lines.
//!
//! # Algorithm
//!
//! For a line with centroid `c` and direction `d`, the matrix
//! `M = |d|² I − d dᵗ` projects onto the orthogonal complement of `d`, so
//! `(V − c)ᵗ M (V − c) / |d|²` is the squared perpendicular distance from
//! `V` to the line. Minimising the sum over both lines gives the normal
//! equations
//!
//! ```text
//! (M_A + M_B) V = M_A c_A + M_B c_B
//! ```
//!
//! solved here through an SVD pseudo-inverse rather than a direct 3×3
//! inverse: near-parallel directions make the combined matrix
//! near-singular, and detector-half-symmetric track pairs hit that case
//! routinely.

use thiserror::Error;
use vertex_core::{Mat3, Pt3, Real, Vec3};

use crate::line_fit::FittedLine;

/// Relative singular-value threshold for declaring the combined normal
/// matrix singular (directions parallel or nearly so).
const PARALLEL_TOL: Real = 1e-9;

#[derive(Debug, Error)]
pub enum VertexSolveError {
    #[error("line directions are parallel or nearly so; no unique crossing point")]
    NearParallel,
    #[error("svd failed")]
    SvdFailed,
}

/// Reconstructed point of closest approach between two lines.
#[derive(Debug, Clone, Copy)]
pub struct VertexCandidate {
    /// Point minimising the summed squared perpendicular distance.
    pub position: Pt3,
    /// Closest point on line A to `position`.
    pub point_on_a: Pt3,
    /// Closest point on line B to `position`.
    pub point_on_b: Pt3,
    /// Distance between the two closest points, the vertex quality
    /// metric, zero for intersecting lines.
    pub separation: Real,
    /// Parametric coordinate of the closest point along line A.
    pub t_a: Real,
    /// Parametric coordinate of the closest point along line B.
    pub t_b: Real,
}

fn orthogonal_projector(d: &Vec3) -> Mat3 {
    Mat3::identity() * d.norm_squared() - d * d.transpose()
}

/// Solve for the point of closest approach of two fitted lines.
///
/// Directions are normalised before the projectors are built, so the
/// solution does not depend on the scale of either direction vector, only
/// on the lines themselves.
///
/// Fails with [`VertexSolveError::NearParallel`] when the smallest singular
/// value of `M_A + M_B` vanishes relative to the largest; parallel lines
/// have no unique crossing point.
pub fn solve_vertex(
    line_a: &FittedLine,
    line_b: &FittedLine,
) -> Result<VertexCandidate, VertexSolveError> {
    let m_a = orthogonal_projector(&line_a.direction.normalize());
    let m_b = orthogonal_projector(&line_b.direction.normalize());
    let combined = m_a + m_b;
    let rhs = m_a * line_a.centroid.coords + m_b * line_b.centroid.coords;

    let svd = combined.svd(true, true);
    let sv = &svd.singular_values;
    if sv[0] < PARALLEL_TOL || sv[2] < PARALLEL_TOL * sv[0] {
        return Err(VertexSolveError::NearParallel);
    }
    let position = svd
        .solve(&rhs, PARALLEL_TOL * sv[0])
        .map_err(|_| VertexSolveError::SvdFailed)?;
    let position = Pt3::from(position);

    let t_a = line_a.param_of(&position);
    let t_b = line_b.param_of(&position);
    let point_on_a = line_a.point_at(t_a);
    let point_on_b = line_b.point_at(t_b);
    let separation = (point_on_a - point_on_b).norm();

    Ok(VertexCandidate {
        position,
        point_on_a,
        point_on_b,
        separation,
        t_a,
        t_b,
    })
}
