//! Half-edge registry: ids and usage flags for every directed edge.

use std::collections::HashMap;

use super::types::ReconError;

/// Directed-edge ids plus one used/unused flag each.
///
/// Invariants:
/// - Ids are dense in `0..len()`, assigned in adjacency order (u ascending,
///   then neighbor order of u).
/// - A used flag is never cleared.
#[derive(Clone, Debug)]
pub struct HalfEdgeRegistry {
    ids: Vec<HashMap<usize, usize>>,
    tail: Vec<usize>,
    head: Vec<usize>,
    used: Vec<bool>,
}

impl HalfEdgeRegistry {
    /// Register every `(u, v)` with `v` in `graph[u]`.
    pub fn build(graph: &[Vec<usize>]) -> Self {
        let m: usize = graph.iter().map(Vec::len).sum();
        let mut ids = Vec::with_capacity(graph.len());
        let mut tail = Vec::with_capacity(m);
        let mut head = Vec::with_capacity(m);
        for (u, nbrs) in graph.iter().enumerate() {
            let mut map = HashMap::with_capacity(nbrs.len());
            for &v in nbrs {
                map.insert(v, tail.len());
                tail.push(u);
                head.push(v);
            }
            ids.push(map);
        }
        Self {
            ids,
            tail,
            head,
            used: vec![false; m],
        }
    }

    /// Number of directed edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Id of `(u, v)`, or `None` if the pair is not adjacent.
    #[inline]
    pub fn lookup(&self, u: usize, v: usize) -> Option<usize> {
        self.ids.get(u).and_then(|m| m.get(&v)).copied()
    }

    /// `(tail, head)` of edge `id`.
    #[inline]
    pub fn endpoints(&self, id: usize) -> (usize, usize) {
        (self.tail[id], self.head[id])
    }

    /// Whether `(u, v)` is consumed. Unknown pairs report `true` so a walk
    /// can never step onto them.
    #[inline]
    pub fn is_used(&self, u: usize, v: usize) -> bool {
        self.lookup(u, v).map_or(true, |id| self.used[id])
    }

    pub fn set_used(&mut self, u: usize, v: usize) -> Result<(), ReconError> {
        let id = self
            .lookup(u, v)
            .ok_or(ReconError::UnknownEdge { from: u, to: v })?;
        self.used[id] = true;
        Ok(())
    }

    /// Mark every consecutive pair of the closed cycle, including `(last, first)`.
    pub fn mark_cycle_used(&mut self, cycle: &[usize]) -> Result<(), ReconError> {
        let m = cycle.len();
        for i in 0..m {
            self.set_used(cycle[i], cycle[(i + 1) % m])?;
        }
        Ok(())
    }

    /// Number of directed edges not yet consumed.
    pub fn unused_count(&self) -> usize {
        self.used.iter().filter(|&&u| !u).count()
    }

    /// Directed edges not yet consumed, in id order.
    pub fn unused(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.used
            .iter()
            .enumerate()
            .filter(|(_, &u)| !u)
            .map(|(id, _)| self.endpoints(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec<usize>> {
        vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]]
    }

    #[test]
    fn ids_are_dense_and_distinct_per_direction() {
        let reg = HalfEdgeRegistry::build(&square());
        assert_eq!(reg.len(), 8);
        let a = reg.lookup(0, 1).unwrap();
        let b = reg.lookup(1, 0).unwrap();
        assert_ne!(a, b);
        assert_eq!(reg.endpoints(a), (0, 1));
        assert_eq!(reg.endpoints(b), (1, 0));
        assert_eq!(reg.lookup(0, 2), None);
        assert_eq!(reg.lookup(9, 0), None);
    }

    #[test]
    fn set_used_is_directional() {
        let mut reg = HalfEdgeRegistry::build(&square());
        assert!(!reg.is_used(0, 1));
        reg.set_used(0, 1).unwrap();
        assert!(reg.is_used(0, 1));
        assert!(!reg.is_used(1, 0));
        assert_eq!(reg.unused_count(), 7);
    }

    #[test]
    fn unknown_edge_is_reported_and_treated_as_used() {
        let mut reg = HalfEdgeRegistry::build(&square());
        assert_eq!(
            reg.set_used(0, 2),
            Err(ReconError::UnknownEdge { from: 0, to: 2 })
        );
        assert!(reg.is_used(0, 2));
    }

    #[test]
    fn mark_cycle_includes_wraparound() {
        let mut reg = HalfEdgeRegistry::build(&square());
        reg.mark_cycle_used(&[0, 1, 2, 3]).unwrap();
        for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
            assert!(reg.is_used(u, v));
        }
        let rest: Vec<_> = reg.unused().collect();
        assert_eq!(rest.len(), 4);
        assert!(rest.contains(&(1, 0)) && rest.contains(&(0, 3)));
    }
}
