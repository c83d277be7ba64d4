//! Fan triangulation of convex faces.

use super::types::Triangle;

/// Fan `face` around `face[0]`: `(f0, fi, fi+1)` for `i = 1..m-1`.
///
/// Pre: `face` is convex and outward CCW (triangles inherit the winding).
/// Faces shorter than three vertices yield no triangles.
pub fn fan(face: &[usize]) -> Vec<Triangle> {
    let Some((&anchor, rest)) = face.split_first() else {
        return Vec::new();
    };
    rest.windows(2).map(|w| [anchor, w[0], w[1]]).collect()
}
