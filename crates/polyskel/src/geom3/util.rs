//! Small 3D vector helpers shared by the radial order and the normalizer.

use nalgebra::Vector3;

/// Below this norm a vector is treated as zero.
const ZERO_NORM: f64 = 1e-12;

/// Unit vector in the direction of `v`, or the zero vector if `v` is (almost) zero.
#[inline]
pub fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let n = v.norm();
    if n > ZERO_NORM {
        v / n
    } else {
        Vector3::zeros()
    }
}

/// Component of `v` orthogonal to the unit vector `n`.
#[inline]
pub(crate) fn project_plane(v: Vector3<f64>, n: Vector3<f64>) -> Vector3<f64> {
    v - n * v.dot(&n)
}

/// Some unit vector perpendicular to the unit vector `n`.
///
/// Picks the first coordinate axis that is not nearly parallel to `n`
/// (|component| < 0.9) and projects it onto the plane orthogonal to `n`.
pub fn any_perp(n: Vector3<f64>) -> Vector3<f64> {
    let axis = if n.x.abs() < 0.9 {
        Vector3::x()
    } else if n.y.abs() < 0.9 {
        Vector3::y()
    } else {
        Vector3::z()
    };
    let e1 = normalize_or_zero(project_plane(axis, n));
    if e1.norm() < ZERO_NORM {
        Vector3::x()
    } else {
        e1
    }
}

/// Unit polygon normal by Newell's method; zero vector for degenerate cycles.
///
/// Orientation follows the cycle order (counter-clockwise seen from the tip).
pub fn newell_normal(positions: &[Vector3<f64>], face: &[usize]) -> Vector3<f64> {
    let m = face.len();
    let mut n = Vector3::<f64>::zeros();
    for i in 0..m {
        let p = positions[face[i]];
        let q = positions[face[(i + 1) % m]];
        n.x += (p.y - q.y) * (p.z + q.z);
        n.y += (p.z - q.z) * (p.x + q.x);
        n.z += (p.x - q.x) * (p.y + q.y);
    }
    let len = n.norm();
    if len > 0.0 {
        n / len
    } else {
        Vector3::zeros()
    }
}

/// Plain vertex average of a face.
pub fn face_centroid(positions: &[Vector3<f64>], face: &[usize]) -> Vector3<f64> {
    if face.is_empty() {
        return Vector3::zeros();
    }
    let sum = face
        .iter()
        .fold(Vector3::zeros(), |acc, &i| acc + positions[i]);
    sum / face.len() as f64
}
