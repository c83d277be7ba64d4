//! Radial (cyclic angular) order of each vertex's neighbors.
//!
//! At vertex `v` the outward ray is `o = normalize(p_v − p_in)`. Neighbor
//! directions are projected onto the plane orthogonal to `o` and sorted by
//! angle in the frame `(e1, e2 = o × e1)`, i.e. counter-clockwise seen from
//! outside. For a convex polytope this is the cyclic order of the faces
//! around `v`, which is all the extractor needs to turn at each vertex.
//!
//! Tie policy: a neighbor whose projected direction is shorter than
//! `eps_radial` (direction parallel to `o`) gets angle +∞ and sorts last;
//! the sort is stable, so such neighbors keep their adjacency order.

use std::collections::HashMap;

use nalgebra::Vector3;

use super::types::ReconError;
use crate::geom3::{any_perp, normalize_or_zero, project_plane};

/// Per-vertex cyclic neighbor order with reverse index.
#[derive(Clone, Debug)]
pub struct RadialOrder {
    orders: Vec<Vec<usize>>,
    index: Vec<HashMap<usize, usize>>,
}

impl RadialOrder {
    /// Sort every vertex's neighbors by angle around its outward ray.
    ///
    /// Panics if `graph` names a vertex outside `positions`; validate through
    /// [`crate::geom3::Skeleton`] first.
    pub fn build(
        positions: &[Vector3<f64>],
        graph: &[Vec<usize>],
        interior: Vector3<f64>,
        eps_radial: f64,
    ) -> Self {
        let mut orders = Vec::with_capacity(graph.len());
        let mut index = Vec::with_capacity(graph.len());
        for (v, nbrs) in graph.iter().enumerate() {
            let p = positions[v];
            let o = normalize_or_zero(p - interior);
            let e1 = any_perp(o);
            let e2 = o.cross(&e1);
            let mut keyed: Vec<(usize, f64)> = nbrs
                .iter()
                .map(|&w| {
                    let d = normalize_or_zero(positions[w] - p);
                    let dp = project_plane(d, o);
                    let theta = if dp.norm() < eps_radial {
                        f64::INFINITY
                    } else {
                        e2.dot(&dp).atan2(e1.dot(&dp))
                    };
                    (w, theta)
                })
                .collect();
            keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
            let order: Vec<usize> = keyed.into_iter().map(|(w, _)| w).collect();
            index.push(order.iter().enumerate().map(|(i, &w)| (w, i)).collect());
            orders.push(order);
        }
        Self { orders, index }
    }

    /// Cyclic neighbor order at `v`.
    #[inline]
    pub fn order(&self, v: usize) -> &[usize] {
        &self.orders[v]
    }

    /// Position of `w` in the order at `v`.
    #[inline]
    pub fn position(&self, v: usize, w: usize) -> Option<usize> {
        self.index.get(v).and_then(|m| m.get(&w)).copied()
    }

    /// Neighbor following `from` in the cyclic order at `v`.
    pub fn next_left(&self, v: usize, from: usize) -> Result<usize, ReconError> {
        let i = self.position(v, from).ok_or(ReconError::NoSuchNeighbor {
            vertex: v,
            neighbor: from,
        })?;
        let list = &self.orders[v];
        Ok(list[(i + 1) % list.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    /// Vertex 0 at the origin, three neighbors 120° apart below it, interior
    /// point straight below: outward ray is +z.
    fn degree3_star() -> (Vec<Vector3<f64>>, Vec<Vec<usize>>, Vector3<f64>) {
        let mut pts = vec![Vector3::zeros()];
        for k in 0..3 {
            let t = TAU * k as f64 / 3.0;
            pts.push(Vector3::new(t.cos(), t.sin(), -0.5));
        }
        let graph = vec![vec![1, 2, 3], vec![0], vec![0], vec![0]];
        (pts, graph, Vector3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn degree3_order_is_ccw_seen_from_outside() {
        let (pts, graph, interior) = degree3_star();
        let rad = RadialOrder::build(&pts, &graph, interior, 1e-12);
        // Frame at vertex 0 is e1 = x, e2 = y, so angles are -120°, 0°, 120°.
        assert_eq!(rad.order(0), &[3, 1, 2]);
        assert_eq!(rad.next_left(0, 1).unwrap(), 2);
        assert_eq!(rad.next_left(0, 2).unwrap(), 3);
        assert_eq!(rad.next_left(0, 3).unwrap(), 1);
    }

    #[test]
    fn adjacency_order_does_not_change_cyclic_order() {
        let (pts, _, interior) = degree3_star();
        let graph = vec![vec![2, 3, 1], vec![0], vec![0], vec![0]];
        let rad = RadialOrder::build(&pts, &graph, interior, 1e-12);
        assert_eq!(rad.next_left(0, 1).unwrap(), 2);
        assert_eq!(rad.next_left(0, 3).unwrap(), 1);
    }

    #[test]
    fn parallel_direction_sorts_last_in_input_order() {
        // Neighbors 1 and 2 sit straight above vertex 0 along the outward ray.
        let pts = vec![
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        ];
        let graph = vec![vec![1, 3, 2, 4], vec![0], vec![0], vec![0], vec![0]];
        let rad = RadialOrder::build(&pts, &graph, Vector3::new(0.0, 0.0, -1.0), 1e-12);
        assert_eq!(rad.order(0), &[3, 4, 1, 2]);
    }

    #[test]
    fn unknown_neighbor_is_an_error() {
        let (pts, graph, interior) = degree3_star();
        let rad = RadialOrder::build(&pts, &graph, interior, 1e-12);
        assert_eq!(
            rad.next_left(1, 2),
            Err(ReconError::NoSuchNeighbor {
                vertex: 1,
                neighbor: 2
            })
        );
    }
}
