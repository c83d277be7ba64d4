//! Skeleton input: vertex positions plus a symmetric adjacency list.

use std::collections::{HashSet, VecDeque};

use nalgebra::Vector3;

use crate::boundary::ReconError;

/// 1-skeleton of a convex polytope embedded in R³.
///
/// Invariants (checked by [`Skeleton::new`]):
/// - `graph.len() == positions.len()`, neighbor ids are in range.
/// - No self-loops, no repeated neighbors, every edge listed in both directions.
/// - The graph is connected.
#[derive(Clone, Debug)]
pub struct Skeleton {
    positions: Vec<Vector3<f64>>,
    graph: Vec<Vec<usize>>,
}

impl Skeleton {
    /// Validate and wrap positions and adjacency.
    pub fn new(positions: Vec<Vector3<f64>>, graph: Vec<Vec<usize>>) -> Result<Self, ReconError> {
        if let Some(i) = positions.iter().position(|p| !p.iter().all(|x| x.is_finite())) {
            return Err(ReconError::invalid(format!("vertex {i} is not finite")));
        }
        validate_graph(positions.len(), &graph)?;
        Ok(Self { positions, graph })
    }

    /// Wrap parts that are valid by construction (special polytopes, jitter).
    pub(crate) fn from_parts(positions: Vec<Vector3<f64>>, graph: Vec<Vec<usize>>) -> Self {
        debug_assert!(validate_graph(positions.len(), &graph).is_ok());
        Self { positions, graph }
    }

    /// Build from raw coordinates; 2D points are lifted to `z = 0`.
    pub fn from_coords(coords: &[Vec<f64>], graph: Vec<Vec<usize>>) -> Result<Self, ReconError> {
        let mut positions = Vec::with_capacity(coords.len());
        for (i, c) in coords.iter().enumerate() {
            let p = match c.as_slice() {
                [x, y] => Vector3::new(*x, *y, 0.0),
                [x, y, z] => Vector3::new(*x, *y, *z),
                _ => {
                    return Err(ReconError::invalid(format!(
                        "vertex {i} has {} coordinates (expected 2 or 3)",
                        c.len()
                    )))
                }
            };
            positions.push(p);
        }
        Self::new(positions, graph)
    }

    #[inline]
    pub fn positions(&self) -> &[Vector3<f64>] {
        &self.positions
    }

    #[inline]
    pub fn graph(&self) -> &[Vec<usize>] {
        &self.graph
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of directed edges (each undirected edge counts twice).
    pub fn directed_edge_count(&self) -> usize {
        self.graph.iter().map(Vec::len).sum()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.directed_edge_count() / 2
    }

    /// Vertex average; strictly interior for a full-dimensional convex polytope.
    pub fn centroid(&self) -> Vector3<f64> {
        if self.positions.is_empty() {
            return Vector3::zeros();
        }
        let sum = self
            .positions
            .iter()
            .fold(Vector3::zeros(), |acc, p| acc + p);
        sum / self.positions.len() as f64
    }

    /// Diagonal of the axis-aligned bounding box; `1.0` if the box is a point.
    pub fn bbox_diagonal(&self) -> f64 {
        bbox_diagonal(&self.positions)
    }
}

/// Diagonal of the bounding box of `positions`; `1.0` when degenerate or empty.
pub(crate) fn bbox_diagonal(positions: &[Vector3<f64>]) -> f64 {
    let Some(first) = positions.first() else {
        return 1.0;
    };
    let (lo, hi) = positions
        .iter()
        .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
    let d = (hi - lo).norm();
    if d.is_finite() && d > 0.0 {
        d
    } else {
        1.0
    }
}

fn validate_graph(n: usize, graph: &[Vec<usize>]) -> Result<(), ReconError> {
    if graph.len() != n {
        return Err(ReconError::invalid(format!(
            "adjacency has {} rows for {n} vertices",
            graph.len()
        )));
    }
    let mut sets: Vec<HashSet<usize>> = Vec::with_capacity(n);
    for (u, nbrs) in graph.iter().enumerate() {
        let mut set = HashSet::with_capacity(nbrs.len());
        for &v in nbrs {
            if v >= n {
                return Err(ReconError::invalid(format!(
                    "vertex {u} lists neighbor {v} out of range"
                )));
            }
            if v == u {
                return Err(ReconError::invalid(format!("self-loop at vertex {u}")));
            }
            if !set.insert(v) {
                return Err(ReconError::invalid(format!(
                    "vertex {u} lists neighbor {v} twice"
                )));
            }
        }
        sets.push(set);
    }
    for (u, nbrs) in graph.iter().enumerate() {
        for &v in nbrs {
            if !sets[v].contains(&u) {
                return Err(ReconError::invalid(format!(
                    "edge {u}->{v} has no reverse {v}->{u}"
                )));
            }
        }
    }
    let components = count_components(graph);
    if components > 1 {
        return Err(ReconError::Disconnected { components });
    }
    Ok(())
}

fn count_components(graph: &[Vec<usize>]) -> usize {
    let mut seen = vec![false; graph.len()];
    let mut components = 0;
    let mut queue = VecDeque::new();
    for s in 0..graph.len() {
        if seen[s] {
            continue;
        }
        components += 1;
        seen[s] = true;
        queue.push_back(s);
        while let Some(u) = queue.pop_front() {
            for &v in &graph[u] {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }
    components
}
