//! Orientation math for force-vector glyphs.
//!
//! Arrow geometry is modeled in Maya with its long axis on `(0, 1, 0)`. To
//! point an arrow from a muscle's origin to its insertion, we compute the
//! rotation matrix that maps the reference axis onto the origin→insertion
//! direction (Rodrigues' formula) and decompose it into the x, y, z rotation
//! sequence that `rotate -xyz` expects.

use nalgebra::{Matrix3, Vector3};

/// Norm (or squared sine) below which a vector is treated as zero.
const ZERO_TOL: f64 = 1e-12;

/// Failure modes of the orientation calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrientationError {
    /// An input direction had zero magnitude, so it cannot be normalized.
    /// For muscle records this means coincident origin and insertion points.
    #[error("input vector has zero magnitude")]
    ZeroVector,
}

/// Sequential rotation angles in degrees, about the fixed x, y and z axes
/// in that order. Matches Maya's default `rotate -xyz` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Builds the skew-symmetric cross-product matrix of `v`.
///
/// The returned matrix K satisfies `K * w == v.cross(w)` for any `w`.
#[must_use]
pub fn skew_symmetric(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -v.z, v.y, //
        v.z, 0.0, -v.x, //
        -v.y, v.x, 0.0,
    )
}

/// Calculates the rotation matrix that rotates vector `a` onto vector `b`.
///
/// Both vectors are normalized to unit vectors before the rotation is
/// computed, so only their directions matter.
///
/// Collinear inputs make Rodrigues' denominator vanish; they are handled
/// explicitly: parallel inputs yield the identity, anti-parallel inputs a
/// half-turn about an axis perpendicular to `a`.
///
/// # Errors
///
/// Returns [`OrientationError::ZeroVector`] if either input has zero
/// magnitude.
pub fn rotation_aligning(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
) -> Result<Matrix3<f64>, OrientationError> {
    let a_len = a.norm();
    let b_len = b.norm();
    if a_len < ZERO_TOL || b_len < ZERO_TOL {
        return Err(OrientationError::ZeroVector);
    }
    let a_hat = a / a_len;
    let b_hat = b / b_len;

    let v = a_hat.cross(&b_hat);
    let c = a_hat.dot(&b_hat);
    // Squared sine of the angle between the unit vectors.
    let s2 = v.norm_squared();

    if s2 < ZERO_TOL {
        if c > 0.0 {
            return Ok(Matrix3::identity());
        }
        // Anti-parallel: any axis perpendicular to `a` works for the
        // half-turn. sin(pi) = 0 and 1 - cos(pi) = 2, so U = I + 2K^2.
        let k = skew_symmetric(&perpendicular_axis(&a_hat));
        return Ok(Matrix3::identity() + k * k * 2.0);
    }

    let k = skew_symmetric(&v);
    Ok(Matrix3::identity() + k + k * k * ((1.0 - c) / s2))
}

/// Unit vector perpendicular to `v`, seeded from the coordinate axis least
/// aligned with it.
fn perpendicular_axis(v: &Vector3<f64>) -> Vector3<f64> {
    let m = v.abs();
    let seed = if m.x <= m.y && m.x <= m.z {
        Vector3::x()
    } else if m.y <= m.z {
        Vector3::y()
    } else {
        Vector3::z()
    };
    (seed - v * seed.dot(v)).normalize()
}

/// Decomposes rotation matrix `u` into Euler angles in degrees.
///
/// The angles reconstruct `u` when applied about the fixed x, y and z axes
/// in that order, i.e. `u ≈ Rz(z) * Ry(y) * Rx(x)`.
#[must_use]
pub fn euler_angles(u: &Matrix3<f64>) -> EulerAngles {
    let x = u[(2, 1)].atan2(u[(2, 2)]);
    let y = (-u[(2, 0)]).atan2((u[(2, 1)].powi(2) + u[(2, 2)].powi(2)).sqrt());
    let z = u[(1, 0)].atan2(u[(0, 0)]);
    EulerAngles {
        x: x.to_degrees(),
        y: y.to_degrees(),
        z: z.to_degrees(),
    }
}

/// Calculates the Euler angles for rotating `a` onto `b`.
///
/// The utility is to set up geometry with a known normal `(0, 1, 0)` and
/// calculate the x, y, z rotation sequence that points it along another
/// vector.
///
/// # Errors
///
/// Returns [`OrientationError::ZeroVector`] if either input has zero
/// magnitude.
pub fn euler_angles_aligning(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
) -> Result<EulerAngles, OrientationError> {
    Ok(euler_angles(&rotation_aligning(a, b)?))
}
