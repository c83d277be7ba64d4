//! Boundary reconstruction driver: every directed edge → face pipeline.

use std::collections::HashSet;

use nalgebra::Vector3;

use super::extract::FaceWalker;
use super::half_edge::HalfEdgeRegistry;
use super::normalize::{canonicalize_min_id, ensure_outward_ccw};
use super::radial::RadialOrder;
use super::triangulate::fan;
use super::types::{FailedWalk, ReconError, Reconstruction, WalkOutcome};
use crate::geom3::{bbox_diagonal, ReconCfg, Skeleton};

/// Run extract → orient → canonicalize → dedup → fan over all directed edges.
///
/// Edges are visited in adjacency order (u ascending, then `graph[u]`).
/// Failed walks are skipped and recorded in `report.failures`; they are never
/// retried. Only structural errors (unknown edge, missing neighbor) abort.
///
/// `graph` must have one row per position with neighbor ids in range
/// (`InvalidSkeleton` otherwise); `radial` and `registry` must be built from
/// the same graph. Going through [`Skeleton`] guarantees both.
pub fn reconstruct(
    positions: &[Vector3<f64>],
    interior: Vector3<f64>,
    graph: &[Vec<usize>],
    radial: &RadialOrder,
    registry: &mut HalfEdgeRegistry,
    cfg: &ReconCfg,
) -> Result<Reconstruction, ReconError> {
    check_ids(positions.len(), graph)?;
    let walker = FaceWalker::new(positions, radial, *cfg, bbox_diagonal(positions));
    let mut out = Reconstruction::default();
    let mut seen: HashSet<Vec<usize>> = HashSet::new();

    for (u, nbrs) in graph.iter().enumerate() {
        for &v in nbrs {
            if registry.is_used(u, v) {
                continue;
            }
            out.report.walks += 1;
            let raw = match walker.walk(u, v, registry)? {
                WalkOutcome::Closed(cycle) => cycle,
                WalkOutcome::AlreadyUsed => continue,
                WalkOutcome::Failed(failure) => {
                    tracing::warn!(u, v, ?failure, "boundary walk failed");
                    out.report.failures.push(FailedWalk {
                        from: u,
                        to: v,
                        failure,
                    });
                    continue;
                }
            };
            tracing::trace!(u, v, ?raw, "raw cycle");
            let oriented = ensure_outward_ccw(positions, interior, raw);
            if oriented.len() < 3 {
                tracing::debug!(u, v, ?oriented, "degenerate cycle skipped");
                out.report.degenerate += 1;
                continue;
            }
            let canon = canonicalize_min_id(&oriented);
            tracing::trace!(?oriented, ?canon, "normalized");
            if !seen.insert(canon.clone()) {
                tracing::debug!(?canon, "duplicate face skipped");
                out.report.duplicates += 1;
                continue;
            }
            tracing::debug!(face = ?canon, "face");
            out.triangles.extend(fan(&canon));
            out.faces.push(canon);
        }
    }

    tracing::info!(
        faces = out.faces.len(),
        triangles = out.triangles.len(),
        walks = out.report.walks,
        duplicates = out.report.duplicates,
        degenerate = out.report.degenerate,
        failures = out.report.failures.len(),
        "reconstruction finished"
    );
    Ok(out)
}

fn check_ids(n: usize, graph: &[Vec<usize>]) -> Result<(), ReconError> {
    if graph.len() != n {
        return Err(ReconError::invalid(format!(
            "adjacency has {} rows for {n} positions",
            graph.len()
        )));
    }
    for (u, nbrs) in graph.iter().enumerate() {
        if let Some(&v) = nbrs.iter().find(|&&v| v >= n) {
            return Err(ReconError::invalid(format!(
                "vertex {u} lists neighbor {v} out of range"
            )));
        }
    }
    Ok(())
}

/// Build registry and radial order for `skel` (interior point = centroid) and reconstruct.
pub fn reconstruct_skeleton(skel: &Skeleton, cfg: &ReconCfg) -> Result<Reconstruction, ReconError> {
    reconstruct_with_interior(skel, skel.centroid(), cfg)
}

/// Like [`reconstruct_skeleton`] with a caller-supplied interior point.
pub fn reconstruct_with_interior(
    skel: &Skeleton,
    interior: Vector3<f64>,
    cfg: &ReconCfg,
) -> Result<Reconstruction, ReconError> {
    let radial = RadialOrder::build(skel.positions(), skel.graph(), interior, cfg.eps_radial);
    let mut registry = HalfEdgeRegistry::build(skel.graph());
    reconstruct(
        skel.positions(),
        interior,
        skel.graph(),
        &radial,
        &mut registry,
        cfg,
    )
}
