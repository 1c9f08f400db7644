//! Shared configuration types.

use crate::math::Real;
use serde::{Deserialize, Serialize};

/// Magnetic-field polarity convention.
///
/// Track reconstruction assigns charge assuming a positive field along the
/// bend axis. When the actual field is negative the physical charge is the
/// opposite of the reconstructed one, which would silently swap
/// electron/positron labels if left implicit. Making the convention an
/// explicit parameter keeps the labeling correct under either polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldSign {
    Positive,
    Negative,
}

impl FieldSign {
    /// Physical charge of a particle given its reconstructed charge.
    pub fn physical_charge(self, reco_charge: i32) -> i32 {
        match self {
            FieldSign::Positive => reco_charge,
            FieldSign::Negative => -reco_charge,
        }
    }
}

impl Default for FieldSign {
    fn default() -> Self {
        FieldSign::Positive
    }
}

/// Which reference point supplies the momenta for pair kinematics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KinematicsReference {
    /// Momenta evaluated at the reconstructed vertex z.
    Vertex,
    /// Momenta evaluated at the fixed reference plane.
    ReferencePlane,
}

/// Fiducial window applied to the impact points at the reference plane.
///
/// The windows are deliberately caller-supplied: the upstream analyses used
/// several mutually inconsistent hard-coded variants, so no particular set
/// of numbers is treated as authoritative here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiducialCuts {
    /// Allowed bend-plane (x) range at the reference plane.
    pub x_range: (Real, Real),
    /// Allowed non-bend (y) range at the reference plane.
    pub y_range: (Real, Real),
}

impl FiducialCuts {
    pub fn contains(&self, x: Real, y: Real) -> bool {
        self.x_range.0 < x && x < self.x_range.1 && self.y_range.0 < y && y < self.y_range.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_field_flips_physical_charge() {
        assert_eq!(FieldSign::Positive.physical_charge(1), 1);
        assert_eq!(FieldSign::Negative.physical_charge(1), -1);
        assert_eq!(FieldSign::Negative.physical_charge(-1), 1);
    }

    #[test]
    fn fiducial_window_is_exclusive() {
        let cuts = FiducialCuts {
            x_range: (11.0, 29.0),
            y_range: (-3.5, 3.5),
        };
        assert!(cuts.contains(20.0, 0.0));
        assert!(!cuts.contains(11.0, 0.0));
        assert!(!cuts.contains(20.0, 4.0));
    }

    #[test]
    fn field_sign_json_roundtrip() {
        let json = serde_json::to_string(&FieldSign::Negative).unwrap();
        let de: FieldSign = serde_json::from_str(&json).unwrap();
        assert_eq!(de, FieldSign::Negative);
    }
}
