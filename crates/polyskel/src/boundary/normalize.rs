//! Face normalizer: outward CCW orientation and canonical rotation.

use nalgebra::Vector3;

use crate::geom3::{face_centroid, newell_normal};

/// Reverse `face` if its Newell normal points toward `interior`.
///
/// The test is `dot(n, centroid(face) − interior) < 0`. Cycles shorter than
/// three vertices are returned unchanged.
pub fn ensure_outward_ccw(
    positions: &[Vector3<f64>],
    interior: Vector3<f64>,
    face: Vec<usize>,
) -> Vec<usize> {
    if face.len() < 3 {
        return face;
    }
    let n = newell_normal(positions, &face);
    let c = face_centroid(positions, &face);
    if n.dot(&(c - interior)) < 0.0 {
        let mut rev = face;
        rev.reverse();
        rev
    } else {
        face
    }
}

/// Rotation of `face` starting at its minimum id; among several occurrences of
/// the minimum, the lexicographically smallest rotation wins.
pub fn canonicalize_min_id(face: &[usize]) -> Vec<usize> {
    let m = face.len();
    let Some(&min) = face.iter().min() else {
        return Vec::new();
    };
    let rotated = |s: usize| (0..m).map(move |k| face[(s + k) % m]);
    let best = (0..m)
        .filter(|&i| face[i] == min)
        .min_by(|&a, &b| rotated(a).cmp(rotated(b)))
        .unwrap_or(0);
    rotated(best).collect()
}
