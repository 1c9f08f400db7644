//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use vertex_core::{FiducialCuts, FieldSign, KinematicsReference, Real};

/// Knobs for one pair evaluation.
///
/// The numeric windows deliberately have no physics defaults: the upstream
/// analyses carried several inconsistent hard-coded variants, so the
/// beamline-specific numbers (reference plane, fiducial cuts) are always
/// supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairVertexingConfig {
    /// Number of evenly spaced samples per track.
    pub n_steps: usize,
    /// z of the fixed reference plane (the target) used for impact-point
    /// extrapolation and, by default, for the sampling window centre.
    pub z_reference: Real,
    /// Lower bound on the sampling half-window, so a crossing estimate
    /// sitting exactly on the reference plane still yields a usable range.
    pub min_half_range: Real,
    /// Magnetic-field polarity convention for particle labeling.
    pub field_sign: FieldSign,
    /// Where the momenta entering the pair kinematics are evaluated.
    pub kinematics_reference: KinematicsReference,
    /// Optional fiducial window applied to both impact points at the
    /// reference plane.
    pub fiducial: Option<FiducialCuts>,
}

impl Default for PairVertexingConfig {
    fn default() -> Self {
        Self {
            n_steps: 100,
            z_reference: 0.0,
            min_half_range: 5.0,
            field_sign: FieldSign::Positive,
            kinematics_reference: KinematicsReference::ReferencePlane,
            fiducial: None,
        }
    }
}
