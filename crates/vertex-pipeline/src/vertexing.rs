//! Pair evaluation: selection, sampling window, fit, solve, kinematics.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vertex_core::{
    parity_bucket, KinematicsReference, Pt3, Real, Track, TrackModel, TrackPair, TrackState, Vec3,
};
use vertex_linear::{
    combined_momentum, fit_line, invariant_mass, sample_positions, sample_trajectory,
    solve_vertex, LineFitError, SamplingError, VertexSolveError,
};

use crate::config::PairVertexingConfig;

/// Failure of a single pair evaluation. Local to the pair: the event loop
/// and all other pairs are unaffected, and nothing is retried.
#[derive(Debug, Error)]
pub enum PairError {
    #[error(
        "pair fails V0 topology (opposite halves: {opposite_halves}, opposite charge: {opposite_charge})"
    )]
    NotEligible {
        opposite_halves: bool,
        opposite_charge: bool,
    },
    #[error("no coarse crossing estimate for the pair")]
    NoCrossingEstimate,
    #[error(transparent)]
    Sampling(#[from] SamplingError),
    #[error(transparent)]
    LineFit(#[from] LineFitError),
    #[error(transparent)]
    VertexSolve(#[from] VertexSolveError),
    #[error("track state undefined at z = {z}")]
    StateUnavailable { z: Real },
    #[error("fitted line never crosses the reference plane")]
    NoReferenceCrossing,
    #[error("impact point outside the fiducial window: x = {x:.3}, y = {y:.3}")]
    OutsideFiducial { x: Real, y: Real },
}

/// One track's contribution to an accepted pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleSummary {
    /// Reconstructed charge (detector convention, before the field-sign
    /// relabeling).
    pub reco_charge: i32,
    /// Momentum at the configured kinematics reference.
    pub momentum: Vec3,
    /// Fitted-line impact point on the reference plane.
    pub impact_at_reference: Pt3,
}

/// Result record for one accepted pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairVertexReport {
    pub event: u64,
    /// Physical electron under the configured field sign.
    pub electron: ParticleSummary,
    /// Physical positron under the configured field sign.
    pub positron: ParticleSummary,
    /// Point of closest approach of the two fitted lines.
    pub vertex: Pt3,
    /// Distance between the per-line closest points (vertex quality).
    pub separation: Real,
    /// Distance between the two impact points on the reference plane.
    pub separation_at_reference: Real,
    /// Invariant mass in the massless approximation; `NaN` when the
    /// radicand is negative.
    pub invariant_mass: Real,
    /// Vector sum of the two momenta.
    pub combined_momentum: Vec3,
    /// Categorisation bucket of the first track of the pair.
    pub parity: i32,
}

/// Rough crossing-z estimate from straight lines through each track's
/// first and last hits, in the non-bend (y–z) plane.
///
/// `None` when either track has fewer than two hits, degenerate hit
/// spacing, or the two lines are parallel. Cheap by construction: this only
/// seeds the sampling window, the vertex itself comes from the full solve.
pub fn coarse_crossing_z(a_hits: &[Pt3], b_hits: &[Pt3]) -> Option<Real> {
    let (m_a, b_a) = yz_line(a_hits)?;
    let (m_b, b_b) = yz_line(b_hits)?;
    let dm = m_a - m_b;
    if dm.abs() < 1e-12 {
        return None;
    }
    Some((b_b - b_a) / dm)
}

fn yz_line(hits: &[Pt3]) -> Option<(Real, Real)> {
    let first = hits.first()?;
    let last = hits.last()?;
    let dz = last.z - first.z;
    if dz.abs() < 1e-12 {
        return None;
    }
    let slope = (last.y - first.y) / dz;
    Some((slope, first.y - slope * first.z))
}

fn state_at<M: TrackModel>(model: &M, z: Real) -> Result<TrackState, PairError> {
    model.state_at_z(z).ok_or(PairError::StateUnavailable { z })
}

/// Evaluate one candidate pair end to end.
///
/// The sampling window is centred on the reference plane with half-range
/// `|crossing_z − z_reference|` (at least `min_half_range`), so it spans
/// from the target past the coarse crossing estimate. Pure: two calls with
/// identical inputs produce bit-identical reports.
pub fn vertex_pair<A: TrackModel, B: TrackModel>(
    event: u64,
    track_a: &Track<A>,
    track_b: &Track<B>,
    config: &PairVertexingConfig,
) -> Result<PairVertexReport, PairError> {
    let pair = TrackPair::new(track_a, track_b);
    if !pair.is_v0_candidate() {
        return Err(PairError::NotEligible {
            opposite_halves: pair.opposite_halves,
            opposite_charge: pair.opposite_charge,
        });
    }

    let crossing = coarse_crossing_z(&track_a.hits, &track_b.hits)
        .ok_or(PairError::NoCrossingEstimate)?;
    let half_range = (crossing - config.z_reference)
        .abs()
        .max(config.min_half_range);
    let z_start = config.z_reference - half_range;
    let z_end = config.z_reference + half_range;

    let sample_a = sample_trajectory(&track_a.model, z_start, z_end, config.n_steps)?;
    let sample_b = sample_trajectory(&track_b.model, z_start, z_end, config.n_steps)?;

    let fit_a = fit_line(&sample_positions(&sample_a))?;
    let fit_b = fit_line(&sample_positions(&sample_b))?;

    let vertex = solve_vertex(&fit_a, &fit_b)?;

    let impact_a = fit_a
        .point_at_z(config.z_reference)
        .ok_or(PairError::NoReferenceCrossing)?;
    let impact_b = fit_b
        .point_at_z(config.z_reference)
        .ok_or(PairError::NoReferenceCrossing)?;
    let separation_at_reference = (impact_a - impact_b).norm();

    if let Some(cuts) = &config.fiducial {
        for impact in [&impact_a, &impact_b] {
            if !cuts.contains(impact.x, impact.y) {
                return Err(PairError::OutsideFiducial {
                    x: impact.x,
                    y: impact.y,
                });
            }
        }
    }

    let momentum_z = match config.kinematics_reference {
        KinematicsReference::Vertex => vertex.position.z,
        KinematicsReference::ReferencePlane => config.z_reference,
    };
    let momentum_a = state_at(&track_a.model, momentum_z)?.momentum;
    let momentum_b = state_at(&track_b.model, momentum_z)?.momentum;

    let summary_a = ParticleSummary {
        reco_charge: track_a.charge,
        momentum: momentum_a,
        impact_at_reference: impact_a,
    };
    let summary_b = ParticleSummary {
        reco_charge: track_b.charge,
        momentum: momentum_b,
        impact_at_reference: impact_b,
    };

    // Physical labels depend on the field polarity, not on the raw
    // reconstructed sign.
    let (electron, positron) = if pair.physical_charge_a(config.field_sign) < 0 {
        (summary_a, summary_b)
    } else {
        (summary_b, summary_a)
    };

    Ok(PairVertexReport {
        event,
        electron,
        positron,
        vertex: vertex.position,
        separation: vertex.separation,
        separation_at_reference,
        invariant_mass: invariant_mass(&electron.momentum, &positron.momentum),
        combined_momentum: combined_momentum(&electron.momentum, &positron.momentum),
        parity: parity_bucket(track_a.top_half(), track_a.charge),
    })
}

/// Evaluate every unordered pair in an event, skipping failures.
///
/// Skips are logged at debug level and never abort the event.
pub fn process_event<M: TrackModel>(
    event: u64,
    tracks: &[Track<M>],
    config: &PairVertexingConfig,
) -> Vec<PairVertexReport> {
    let mut reports = Vec::new();
    for i in 0..tracks.len() {
        for j in (i + 1)..tracks.len() {
            match vertex_pair(event, &tracks[i], &tracks[j], config) {
                Ok(report) => reports.push(report),
                Err(err) => debug!("event {event}: pair ({i}, {j}) skipped: {err}"),
            }
        }
    }
    reports
}
