//! Special convex polytope skeletons used in tests, benchmarks, and the CLI.
//!
//! Purpose
//! - Provide explicit vertex positions and adjacency for common families:
//!   tetrahedron, cube, octahedron, n-gonal prisms, pyramids, and bipyramids.
//! - Keep constructors small so tests can rely on exact face counts.
//!
//! Face counts (for cross-checks via Euler's formula V − E + F = 2):
//! - tetrahedron 4, cube 6, octahedron 8
//! - prism(n): n + 2, pyramid(n): n + 1, bipyramid(n): 2n

use std::f64::consts::TAU;

use nalgebra::Vector3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::types::Skeleton;
use crate::boundary::ReconError;

/// Corner tetrahedron with vertices 0, e1, e2, e3.
pub fn tetrahedron() -> Skeleton {
    let positions = vec![
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    let graph = (0..4)
        .map(|i| (0..4).filter(|&j| j != i).collect())
        .collect();
    Skeleton::from_parts(positions, graph)
}

/// Axis-aligned cube [-a,a]³. Vertex `i` has coordinate signs from bits 0/1/2.
pub fn cube(a: f64) -> Skeleton {
    let sign = |i: usize, bit: usize| if i & bit != 0 { a } else { -a };
    let positions = (0..8)
        .map(|i| Vector3::new(sign(i, 1), sign(i, 2), sign(i, 4)))
        .collect();
    let graph = (0..8).map(|i| vec![i ^ 1, i ^ 2, i ^ 4]).collect();
    Skeleton::from_parts(positions, graph)
}

/// Octahedron (ℓ1 ball of radius `r`): vertices ±r e_k, antipodes not adjacent.
pub fn octahedron(r: f64) -> Skeleton {
    let mut positions = Vec::with_capacity(6);
    for k in 0..3 {
        let mut e = Vector3::zeros();
        e[k] = r;
        positions.push(e);
        positions.push(-e);
    }
    let graph = (0..6)
        .map(|i: usize| (0..6).filter(|&j| j != i && j != (i ^ 1)).collect())
        .collect();
    Skeleton::from_parts(positions, graph)
}

/// Right prism over a regular n-gon of circumradius `r`, spanning z ∈ [-h, h].
///
/// Bottom ring is `0..n`, top ring is `n..2n` with `n + i` above `i`.
pub fn prism(n: usize, r: f64, h: f64) -> Result<Skeleton, ReconError> {
    check_sides(n)?;
    let mut positions = ring(n, r, -h);
    positions.extend(ring(n, r, h));
    let mut graph = Vec::with_capacity(2 * n);
    for layer in 0..2 {
        for i in 0..n {
            let base = layer * n;
            let other = (1 - layer) * n;
            graph.push(vec![base + (i + 1) % n, base + (i + n - 1) % n, other + i]);
        }
    }
    Ok(Skeleton::from_parts(positions, graph))
}

/// Pyramid over a regular n-gon at z = 0 with apex `n` at height `h`.
pub fn pyramid(n: usize, r: f64, h: f64) -> Result<Skeleton, ReconError> {
    check_sides(n)?;
    let mut positions = ring(n, r, 0.0);
    positions.push(Vector3::new(0.0, 0.0, h));
    let mut graph: Vec<Vec<usize>> = (0..n)
        .map(|i| vec![(i + 1) % n, (i + n - 1) % n, n])
        .collect();
    graph.push((0..n).collect());
    Ok(Skeleton::from_parts(positions, graph))
}

/// Bipyramid over a regular n-gon at z = 0 with apexes `n` (z = h) and `n + 1` (z = -h).
pub fn bipyramid(n: usize, r: f64, h: f64) -> Result<Skeleton, ReconError> {
    check_sides(n)?;
    let mut positions = ring(n, r, 0.0);
    positions.push(Vector3::new(0.0, 0.0, h));
    positions.push(Vector3::new(0.0, 0.0, -h));
    let mut graph: Vec<Vec<usize>> = (0..n)
        .map(|i| vec![(i + 1) % n, (i + n - 1) % n, n, n + 1])
        .collect();
    graph.push((0..n).collect());
    graph.push((0..n).collect());
    Ok(Skeleton::from_parts(positions, graph))
}

/// Copy of `skel` with every coordinate perturbed uniformly in `[-amplitude, amplitude]`.
///
/// Reproducible for a fixed `seed`. Adjacency is unchanged, so faces with four
/// or more vertices become slightly non-planar.
pub fn jitter(skel: &Skeleton, amplitude: f64, seed: u64) -> Skeleton {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = amplitude.abs();
    let positions = skel
        .positions()
        .iter()
        .map(|p| p.map(|x| x + rng.gen_range(-a..=a)))
        .collect();
    Skeleton::from_parts(positions, skel.graph().to_vec())
}

fn ring(n: usize, r: f64, z: f64) -> Vec<Vector3<f64>> {
    (0..n)
        .map(|i| {
            let t = TAU * i as f64 / n as f64;
            Vector3::new(r * t.cos(), r * t.sin(), z)
        })
        .collect()
}

fn check_sides(n: usize) -> Result<(), ReconError> {
    if n < 3 {
        return Err(ReconError::invalid(format!(
            "polygon needs at least 3 sides, got {n}"
        )));
    }
    Ok(())
}
