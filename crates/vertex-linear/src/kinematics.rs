//! Pair kinematics in the massless approximation.
//!
//! Both tracks are far above their rest mass in this domain, so each
//! track's energy is taken equal to its momentum magnitude.

use vertex_core::{Real, Vec3};

/// Invariant mass of a two-track pair: `m² = 2·E_A·E_B − 2·pA·pB` with
/// `E = |p|`.
///
/// A negative radicand can occur legitimately near threshold under the
/// massless approximation; it is reported as a `NaN` sentinel, not an
/// error. This policy is uniform across the workspace.
pub fn invariant_mass(p_a: &Vec3, p_b: &Vec3) -> Real {
    let m_sq = 2.0 * p_a.norm() * p_b.norm() - 2.0 * p_a.dot(p_b);
    if m_sq >= 0.0 {
        m_sq.sqrt()
    } else {
        Real::NAN
    }
}

/// Combined momentum of the pair.
pub fn combined_momentum(p_a: &Vec3, p_b: &Vec3) -> Vec3 {
    p_a + p_b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_momenta_give_zero_mass() {
        let p = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(invariant_mass(&p, &p), 0.0);
    }

    #[test]
    fn back_to_back_unit_momenta_give_mass_two() {
        let p_a = Vec3::new(1.0, 0.0, 0.0);
        let p_b = Vec3::new(-1.0, 0.0, 0.0);
        assert_eq!(invariant_mass(&p_a, &p_b), 2.0);
    }

    #[test]
    fn opening_angle_sets_the_mass() {
        // |p| = 1 each, 90 degrees apart: m² = 2 - 0 = 2.
        let p_a = Vec3::new(1.0, 0.0, 0.0);
        let p_b = Vec3::new(0.0, 1.0, 0.0);
        assert!((invariant_mass(&p_a, &p_b) - (2.0 as Real).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn mass_is_symmetric_in_its_arguments() {
        let p_a = Vec3::new(0.3, -0.1, 0.9);
        let p_b = Vec3::new(-0.2, 0.4, 1.1);
        assert_eq!(invariant_mass(&p_a, &p_b), invariant_mass(&p_b, &p_a));
    }

    #[test]
    fn combined_momentum_is_the_vector_sum() {
        let p_a = Vec3::new(0.3, -0.1, 0.9);
        let p_b = Vec3::new(-0.2, 0.4, 1.1);
        let sum = combined_momentum(&p_a, &p_b);
        assert!((sum - Vec3::new(0.1, 0.3, 2.0)).norm() < 1e-15);
    }
}
