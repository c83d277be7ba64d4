//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   code (the CLI, benches, examples). Breaking changes are allowed and expected.

// Skeleton input and geometry helpers
pub use crate::geom3::{
    any_perp, face_centroid, newell_normal, special, MarkPolicy, ReconCfg, Skeleton,
};
// Pipeline stages
pub use crate::boundary::{
    canonicalize_min_id, ensure_outward_ccw, extract_face, fan, reconstruct,
    reconstruct_skeleton, reconstruct_with_interior, FaceWalker, FailedWalk, HalfEdgeRegistry,
    RadialOrder, ReconError, ReconReport, Reconstruction, Triangle, WalkFailure, WalkOutcome,
};
