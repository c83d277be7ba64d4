//! Data types for the reconstruction pipeline: errors, walk outcomes, results.

use thiserror::Error;

use crate::geom3::Skeleton;

/// Fatal errors. Per-face walk failures are reported through [`WalkOutcome`]
/// and [`ReconReport`] instead.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReconError {
    /// Usage mutation on a pair that is not a registered directed edge.
    #[error("no directed edge {from}->{to}")]
    UnknownEdge { from: usize, to: usize },
    /// Radial query from a vertex that is not adjacent.
    #[error("vertex {vertex} has no neighbor {neighbor}")]
    NoSuchNeighbor { vertex: usize, neighbor: usize },
    #[error("invalid skeleton: {reason}")]
    InvalidSkeleton { reason: String },
    #[error("skeleton graph has {components} connected components")]
    Disconnected { components: usize },
    /// Some boundary walks failed; the face list is incomplete.
    #[error("{failures} boundary walk(s) failed")]
    Incomplete { failures: usize },
}

impl ReconError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidSkeleton {
            reason: reason.into(),
        }
    }
}

/// Why a boundary walk gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkFailure {
    /// No neighbor of `at` (arriving from `from`) lies on the running face plane.
    NoCandidate { at: usize, from: usize },
    /// The walk did not close within the hop bound.
    HopLimit { hops: usize },
    /// The next half-edge already belongs to a face.
    EdgeReused { from: usize, to: usize },
}

/// Result of one extraction attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Closed cycle, starting at the head of the initial half-edge.
    Closed(Vec<usize>),
    /// The initial half-edge was consumed before the call.
    AlreadyUsed,
    Failed(WalkFailure),
}

/// A walk that failed, with its initial half-edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FailedWalk {
    pub from: usize,
    pub to: usize,
    pub failure: WalkFailure,
}

/// Vertex-id triple, counter-clockwise seen from outside.
pub type Triangle = [usize; 3];

/// Counters collected by the driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconReport {
    /// Extraction attempts (unused starting half-edges).
    pub walks: usize,
    /// Closed walks whose canonical key was already present.
    pub duplicates: usize,
    /// Closed walks shorter than three vertices.
    pub degenerate: usize,
    pub failures: Vec<FailedWalk>,
}

/// Faces and triangles of a reconstructed boundary.
///
/// Invariants:
/// - Every face is outward CCW, canonicalized, and unique.
/// - `triangles` are grouped by face in discovery order.
#[derive(Clone, Debug, Default)]
pub struct Reconstruction {
    pub faces: Vec<Vec<usize>>,
    pub triangles: Vec<Triangle>,
    pub report: ReconReport,
}

impl Reconstruction {
    /// Flat index buffer (three entries per triangle).
    pub fn flat_indices(&self) -> Vec<usize> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// `V − E + F`; equals 2 for a complete polytope boundary.
    pub fn euler_characteristic(&self, skel: &Skeleton) -> i64 {
        skel.vertex_count() as i64 - skel.edge_count() as i64 + self.faces.len() as i64
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.report.failures.is_empty()
    }

    /// Turn walk failures into an error instead of a silently short face list.
    pub fn ensure_complete(self) -> Result<Self, ReconError> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(ReconError::Incomplete {
                failures: self.report.failures.len(),
            })
        }
    }
}
