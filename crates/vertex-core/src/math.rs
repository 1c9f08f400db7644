//! Mathematical type definitions.
//!
//! Coordinate convention used throughout the workspace: `z` runs along the
//! beam axis, `y` is the non-bend (vertical) coordinate separating the top
//! and bottom detector halves, and `x` is the bend-plane coordinate.

use nalgebra::{Matrix3, Point3, Vector3};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 3D vector with [`Real`] components.
pub type Vec3 = Vector3<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;
/// 3×3 matrix with [`Real`] entries.
pub type Mat3 = Matrix3<Real>;
