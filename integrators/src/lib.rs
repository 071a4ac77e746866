//! Integrators

#[macro_use]
extern crate log;

mod matte;
mod phong;

// Re-export
pub use matte::*;
pub use phong::*;

use rt_core::common::Float;
use rt_core::geometry::Vector3f;

/// Builds an orthonormal basis `(u, v, w)` around a surface normal,
/// with `w` the normal itself. The reference up vector is jittered
/// slightly off the y-axis so the cross product stays stable for
/// normals near straight up.
///
/// * `normal` - The surface normal.
pub(crate) fn orthonormal_basis(normal: &Vector3f) -> (Vector3f, Vector3f, Vector3f) {
    let w = *normal;
    let u = Vector3f::new(0.0072, 1.0, 0.0034).cross(&w).normalize();
    let v = w.cross(&u);
    (u, v, w)
}

/// Converts a hemisphere angle pair `(φ, θ)` into a world-space
/// direction over the given basis.
///
/// * `basis` - Orthonormal basis with the normal last.
/// * `phi`   - Azimuth angle.
/// * `theta` - Elevation angle from the normal.
pub(crate) fn hemisphere_direction(
    basis: &(Vector3f, Vector3f, Vector3f),
    phi: Float,
    theta: Float,
) -> Vector3f {
    let (u, v, w) = basis;
    let (sin_phi, cos_phi) = (phi.sin(), phi.cos());
    let (sin_theta, cos_theta) = (theta.sin(), theta.cos());
    *u * (sin_theta * cos_phi) + *v * (sin_theta * sin_phi) + *w * cos_theta
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn basis_is_orthogonal() {
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let (u, v, w) = orthonormal_basis(&n);
        assert!(approx_eq!(Float, u.dot(&v), 0.0, epsilon = 1e-5));
        assert!(approx_eq!(Float, u.dot(&w), 0.0, epsilon = 1e-5));
        assert!(approx_eq!(Float, v.dot(&w), 0.0, epsilon = 1e-5));
    }

    #[test]
    fn zero_elevation_is_the_normal() {
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let basis = orthonormal_basis(&n);
        let d = hemisphere_direction(&basis, 1.0, 0.0);
        assert!(approx_eq!(Float, d.dot(&n), 1.0, epsilon = 1e-5));
    }
}
