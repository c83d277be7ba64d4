//! Face extractor: walk one closed boundary cycle from a directed edge.
//!
//! Algorithm
//! - Current half-edge `(a, b)` starts at `(u, v)`; the cycle starts with `v`.
//! - At `b`, scan b's neighbors cyclically starting right after `a` in the
//!   radial order. Skip candidates `c` whose segment pair `(a→b, b→c)` is
//!   near-collinear. The first valid candidate seeds the face plane (anchor
//!   `p_a`, normal `(b−a)×(c−b)`); later steps accept the first candidate
//!   within `eps_plane · scale` of that plane and fold its sign-aligned
//!   normal into a running average.
//! - Close when the next half-edge is `(u, v)` again.
//!
//! Failure modes (returned as values, see `WalkFailure`): no candidate on the
//! plane, hop bound exceeded, or stepping onto a half-edge that another face
//! already owns. The walk is a bounded loop; depth never grows with input size.

use std::collections::HashSet;

use nalgebra::Vector3;

use super::half_edge::HalfEdgeRegistry;
use super::radial::RadialOrder;
use super::types::{ReconError, WalkFailure, WalkOutcome};
use crate::geom3::{MarkPolicy, ReconCfg};

/// Running best-fit plane of the face being walked.
#[derive(Clone, Copy, Debug)]
struct FacePlane {
    anchor: Vector3<f64>,
    sum: Vector3<f64>,
    normal: Vector3<f64>,
}

impl FacePlane {
    fn seed(anchor: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            anchor,
            sum: normal,
            normal,
        }
    }

    #[inline]
    fn distance(&self, p: Vector3<f64>) -> f64 {
        self.normal.dot(&(p - self.anchor)).abs()
    }

    fn absorb(&mut self, n: Vector3<f64>) {
        let aligned = if n.dot(&self.normal) < 0.0 { -n } else { n };
        self.sum += aligned;
        let len = self.sum.norm();
        if len > 0.0 {
            self.normal = self.sum / len;
        }
    }
}

/// Shared read-only context for boundary walks over one skeleton.
#[derive(Clone, Copy, Debug)]
pub struct FaceWalker<'a> {
    positions: &'a [Vector3<f64>],
    radial: &'a RadialOrder,
    cfg: ReconCfg,
    scale: f64,
    max_hops: usize,
}

impl<'a> FaceWalker<'a> {
    /// `scale` is the length unit for the relative tolerances (bbox diagonal).
    pub fn new(
        positions: &'a [Vector3<f64>],
        radial: &'a RadialOrder,
        cfg: ReconCfg,
        scale: f64,
    ) -> Self {
        Self {
            positions,
            radial,
            cfg,
            scale,
            max_hops: cfg.max_hops(positions.len()),
        }
    }

    /// Walk the face to the left of `(u, v)` and mark its half-edges used.
    pub fn walk(
        &self,
        u: usize,
        v: usize,
        registry: &mut HalfEdgeRegistry,
    ) -> Result<WalkOutcome, ReconError> {
        if registry.is_used(u, v) {
            return Ok(WalkOutcome::AlreadyUsed);
        }
        let eager = self.cfg.mark_policy == MarkPolicy::Eager;
        let mut pending: HashSet<(usize, usize)> = HashSet::new();
        let mut plane: Option<FacePlane> = None;
        let mut cycle = vec![v];
        let (mut a, mut b) = (u, v);
        let mut hops = 0usize;
        loop {
            if hops >= self.max_hops {
                return Ok(WalkOutcome::Failed(WalkFailure::HopLimit { hops }));
            }
            hops += 1;
            if eager {
                registry.set_used(a, b)?;
            } else {
                registry
                    .lookup(a, b)
                    .ok_or(ReconError::UnknownEdge { from: a, to: b })?;
                pending.insert((a, b));
            }
            let Some(c) = self.next_on_plane(a, b, &mut plane)? else {
                return Ok(WalkOutcome::Failed(WalkFailure::NoCandidate { at: b, from: a }));
            };
            if (b, c) == (u, v) {
                break;
            }
            if registry.is_used(b, c) || pending.contains(&(b, c)) {
                return Ok(WalkOutcome::Failed(WalkFailure::EdgeReused { from: b, to: c }));
            }
            cycle.push(c);
            a = b;
            b = c;
        }
        if !eager {
            registry.mark_cycle_used(&cycle)?;
        }
        tracing::trace!(u, v, hops, ?cycle, "walk closed");
        Ok(WalkOutcome::Closed(cycle))
    }

    /// First neighbor `c` of `b` after `a` (radial order) that continues the face plane.
    fn next_on_plane(
        &self,
        a: usize,
        b: usize,
        plane: &mut Option<FacePlane>,
    ) -> Result<Option<usize>, ReconError> {
        let order = self.radial.order(b);
        let start = self.radial.position(b, a).ok_or(ReconError::NoSuchNeighbor {
            vertex: b,
            neighbor: a,
        })?;
        let pa = self.positions[a];
        let pb = self.positions[b];
        let ab = pb - pa;
        let min_normal = self.cfg.eps_normal * self.scale * self.scale;
        let tol = self.cfg.eps_plane * self.scale;
        let deg = order.len();
        for k in 1..=deg {
            let c = order[(start + k) % deg];
            let pc = self.positions[c];
            let n = ab.cross(&(pc - pb));
            let len = n.norm();
            if len < min_normal {
                continue;
            }
            let n = n / len;
            match *plane {
                None => {
                    *plane = Some(FacePlane::seed(pa, n));
                    return Ok(Some(c));
                }
                Some(ref mut pl) => {
                    if pl.distance(pc) <= tol {
                        pl.absorb(n);
                        return Ok(Some(c));
                    }
                }
            }
        }
        Ok(None)
    }
}

/// One-shot extraction of the face left of `(u, v)`.
///
/// `scale` is the skeleton's bounding-box diagonal; see [`FaceWalker`].
pub fn extract_face(
    u: usize,
    v: usize,
    positions: &[Vector3<f64>],
    radial: &RadialOrder,
    registry: &mut HalfEdgeRegistry,
    cfg: &ReconCfg,
    scale: f64,
) -> Result<WalkOutcome, ReconError> {
    FaceWalker::new(positions, radial, *cfg, scale).walk(u, v, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom3::{special, Skeleton};

    fn setup(skel: &Skeleton) -> (RadialOrder, HalfEdgeRegistry) {
        let rad = RadialOrder::build(skel.positions(), skel.graph(), skel.centroid(), 1e-12);
        let reg = HalfEdgeRegistry::build(skel.graph());
        (rad, reg)
    }

    fn walk(skel: &Skeleton, cfg: ReconCfg, u: usize, v: usize) -> (WalkOutcome, HalfEdgeRegistry) {
        let (rad, mut reg) = setup(skel);
        let out = extract_face(
            u,
            v,
            skel.positions(),
            &rad,
            &mut reg,
            &cfg,
            skel.bbox_diagonal(),
        )
        .unwrap();
        (out, reg)
    }

    #[test]
    fn tetrahedron_walk_is_a_triangle_and_marks_it() {
        let t = special::tetrahedron();
        let (out, reg) = walk(&t, ReconCfg::default(), 0, 1);
        let cycle = match out {
            WalkOutcome::Closed(cycle) => cycle,
            other => panic!("expected a closed walk, got {other:?}"),
        };
        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle[0], 1);
        assert_eq!(*cycle.last().unwrap(), 0);
        let m = cycle.len();
        for i in 0..m {
            assert!(reg.is_used(cycle[i], cycle[(i + 1) % m]));
        }
        assert_eq!(reg.unused_count(), 12 - 3);
    }

    #[test]
    fn cube_walk_is_a_square_face() {
        let c = special::cube(1.0);
        let (out, _) = walk(&c, ReconCfg::default(), 0, 1);
        let cycle = match out {
            WalkOutcome::Closed(cycle) => cycle,
            other => panic!("expected a closed walk, got {other:?}"),
        };
        assert_eq!(cycle.len(), 4);
        // All four vertices share one coordinate value.
        let p = c.positions();
        let shared = (0..3).any(|k| cycle.iter().all(|&i| p[i][k] == p[cycle[0]][k]));
        assert!(shared);
    }

    #[test]
    fn used_start_edge_returns_immediately() {
        let t = special::tetrahedron();
        let (rad, mut reg) = setup(&t);
        reg.set_used(0, 1).unwrap();
        let out = extract_face(0, 1, t.positions(), &rad, &mut reg, &ReconCfg::default(), 1.0)
            .unwrap();
        assert_eq!(out, WalkOutcome::AlreadyUsed);
        assert_eq!(reg.unused_count(), 11);
    }

    #[test]
    fn hop_bound_stops_the_walk() {
        let c = special::cube(1.0);
        let cfg = ReconCfg {
            max_hops: Some(2),
            ..ReconCfg::default()
        };
        let (out, reg) = walk(&c, cfg, 0, 1);
        assert_eq!(out, WalkOutcome::Failed(WalkFailure::HopLimit { hops: 2 }));
        // Eager policy keeps the two marks made before giving up.
        assert_eq!(reg.unused_count(), 24 - 2);
    }

    #[test]
    fn on_success_policy_leaves_no_marks_on_failure() {
        let c = special::cube(1.0);
        let cfg = ReconCfg {
            max_hops: Some(2),
            mark_policy: MarkPolicy::OnSuccess,
            ..ReconCfg::default()
        };
        let (out, reg) = walk(&c, cfg, 0, 1);
        assert!(matches!(out, WalkOutcome::Failed(WalkFailure::HopLimit { .. })));
        assert_eq!(reg.unused_count(), 24);
    }

    #[test]
    fn on_success_policy_marks_closed_cycle() {
        let c = special::cube(1.0);
        let cfg = ReconCfg {
            mark_policy: MarkPolicy::OnSuccess,
            ..ReconCfg::default()
        };
        let (out, reg) = walk(&c, cfg, 0, 1);
        assert!(matches!(out, WalkOutcome::Closed(ref f) if f.len() == 4));
        assert_eq!(reg.unused_count(), 20);
    }

    #[test]
    fn skew_quadrilateral_trap_fails_without_looping() {
        // A 4-cycle whose last vertex leaves the plane of the first three.
        let skel = Skeleton::new(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 1.0),
            ],
            vec![vec![1, 3], vec![0, 2], vec![1, 3], vec![2, 0]],
        )
        .unwrap();
        let (out, _) = walk(&skel, ReconCfg::default(), 0, 1);
        assert_eq!(
            out,
            WalkOutcome::Failed(WalkFailure::NoCandidate { at: 2, from: 1 })
        );
    }

    #[test]
    fn walk_refuses_half_edges_owned_by_another_face() {
        let c = special::cube(1.0);
        let (rad, mut reg) = setup(&c);
        let walker = FaceWalker::new(c.positions(), &rad, ReconCfg::default(), c.bbox_diagonal());
        let WalkOutcome::Closed(face) = walker.walk(0, 1, &mut reg.clone()).unwrap() else {
            panic!("first walk must close");
        };
        // Hand the face's second half-edge to some other owner, then retry.
        reg.set_used(face[0], face[1]).unwrap();
        let out = walker.walk(0, 1, &mut reg).unwrap();
        assert_eq!(
            out,
            WalkOutcome::Failed(WalkFailure::EdgeReused {
                from: face[0],
                to: face[1]
            })
        );
    }
}
