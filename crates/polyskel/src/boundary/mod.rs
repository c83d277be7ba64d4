//! Boundary reconstruction from a polytope skeleton (faces + fan triangles).
//!
//! Purpose
//! - Recover the faces of a convex polytope from vertex positions and edge
//!   adjacency alone, each face exactly once, outward and counter-clockwise.
//!
//! Pipeline (leaves first)
//! - `half_edge`: ids and used flags per directed edge (owned per run).
//! - `radial`: cyclic neighbor order per vertex around its outward ray.
//! - `extract`: bounded boundary walk from one unused directed edge, with a
//!   running plane fit to tolerate noisy coordinates.
//! - `normalize`: Newell-based outward orientation + min-id canonical rotation.
//! - `triangulate`: fan triangulation of each convex face.
//! - `driver`: visits every directed edge, dedups by canonical key, collects
//!   faces/triangles and a report of skipped walks.
//!
//! Assumptions and conventions
//! - Single-threaded; all mutable state (used flags, accumulators) is owned by
//!   one `reconstruct` call. Inputs are read-only.
//! - Walk failures are local (skip the edge); structural errors abort.

mod driver;
mod extract;
mod half_edge;
mod normalize;
mod radial;
mod triangulate;
mod types;

pub use driver::{reconstruct, reconstruct_skeleton, reconstruct_with_interior};
pub use extract::{extract_face, FaceWalker};
pub use half_edge::HalfEdgeRegistry;
pub use normalize::{canonicalize_min_id, ensure_outward_ccw};
pub use radial::RadialOrder;
pub use triangulate::fan;
pub use types::{
    FailedWalk, ReconError, ReconReport, Reconstruction, Triangle, WalkFailure, WalkOutcome,
};
