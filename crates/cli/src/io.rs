//! JSON documents read and written by the CLI.

use anyhow::{bail, Context, Result};
use polyskel::boundary::{FailedWalk, Reconstruction, Triangle, WalkFailure};
use polyskel::geom3::Skeleton;
use polyskel::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Skeleton input: positions (2 or 3 coordinates each) plus adjacency.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkeletonDoc {
    pub positions: Vec<Vec<f64>>,
    pub graph: Vec<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior_point: Option<[f64; 3]>,
}

impl SkeletonDoc {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_skeleton(skel: &Skeleton) -> Self {
        Self {
            positions: skel
                .positions()
                .iter()
                .map(|p| vec![p.x, p.y, p.z])
                .collect(),
            graph: skel.graph().to_vec(),
            interior_point: None,
        }
    }

    /// Validated skeleton and interior point (given or centroid).
    pub fn to_skeleton(&self) -> Result<(Skeleton, Vec3<f64>)> {
        let skel = Skeleton::from_coords(&self.positions, self.graph.clone())?;
        let interior = match self.interior_point {
            Some([x, y, z]) => {
                if !(x.is_finite() && y.is_finite() && z.is_finite()) {
                    bail!("interior_point is not finite");
                }
                Vec3::new(x, y, z)
            }
            None => skel.centroid(),
        };
        Ok((skel, interior))
    }
}

/// Reconstruction output for renderers and downstream tooling.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacesDoc {
    pub faces: Vec<Vec<usize>>,
    pub triangles: Vec<Triangle>,
    pub indices: Vec<usize>,
    pub report: ReportDoc,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportDoc {
    pub walks: usize,
    pub duplicates: usize,
    pub degenerate: usize,
    pub euler_characteristic: i64,
    pub failures: Vec<FailureDoc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FailureDoc {
    pub from: usize,
    pub to: usize,
    pub reason: String,
}

impl From<&FailedWalk> for FailureDoc {
    fn from(f: &FailedWalk) -> Self {
        let reason = match f.failure {
            WalkFailure::NoCandidate { at, from } => {
                format!("no coplanar continuation at {at} (from {from})")
            }
            WalkFailure::HopLimit { hops } => format!("hop limit {hops} exceeded"),
            WalkFailure::EdgeReused { from, to } => format!("edge {from}->{to} already used"),
        };
        Self {
            from: f.from,
            to: f.to,
            reason,
        }
    }
}

impl FacesDoc {
    pub fn new(rec: &Reconstruction, skel: &Skeleton) -> Self {
        Self {
            faces: rec.faces.clone(),
            triangles: rec.triangles.clone(),
            indices: rec.flat_indices(),
            report: ReportDoc {
                walks: rec.report.walks,
                duplicates: rec.report.duplicates,
                degenerate: rec.report.degenerate,
                euler_characteristic: rec.euler_characteristic(skel),
                failures: rec.report.failures.iter().map(FailureDoc::from).collect(),
            },
        }
    }
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyskel::geom3::special;
    use tempfile::tempdir;

    #[test]
    fn skeleton_doc_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cube.json");
        let doc = SkeletonDoc::from_skeleton(&special::cube(1.0));
        write_json(&path, &doc).unwrap();
        let back = SkeletonDoc::read(&path).unwrap();
        let (skel, interior) = back.to_skeleton().unwrap();
        assert_eq!(skel.vertex_count(), 8);
        assert!(interior.norm() < 1e-12);
    }

    #[test]
    fn accepts_2d_positions_and_explicit_interior() {
        let doc: SkeletonDoc = serde_json::from_str(
            r#"{"positions": [[0,0],[1,0],[0,1]],
                "graph": [[1,2],[0,2],[0,1]],
                "interior_point": [0.2, 0.2, 0.0]}"#,
        )
        .unwrap();
        let (skel, interior) = doc.to_skeleton().unwrap();
        assert_eq!(skel.positions()[2].z, 0.0);
        assert_eq!(interior, Vec3::new(0.2, 0.2, 0.0));
    }

    #[test]
    fn invalid_graph_is_an_error() {
        let doc: SkeletonDoc = serde_json::from_str(
            r#"{"positions": [[0,0,0],[1,0,0]], "graph": [[1],[]]}"#,
        )
        .unwrap();
        let err = doc.to_skeleton().unwrap_err();
        assert!(err.to_string().contains("no reverse"));
    }
}
