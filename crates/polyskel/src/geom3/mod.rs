//! 3D skeleton input, geometry helpers, and tolerances.
//!
//! Purpose
//! - Hold the read-only inputs of a reconstruction: vertex positions and a
//!   validated, symmetric adjacency list (`Skeleton`).
//! - Provide the few vector helpers the pipeline needs (Newell normal, face
//!   centroid, perpendicular frames) and the tolerance config (`ReconCfg`).
//!
//! Assumptions and conventions
//! - 2D inputs are lifted to `z = 0`; all geometry runs in R³.
//! - The reference interior point defaults to the vertex centroid.
//! - Tolerances are relative to the bounding-box diagonal (see `cfg`).

pub mod cfg;
pub mod special;
mod types;
mod util;

pub use cfg::{MarkPolicy, ReconCfg};
pub use types::Skeleton;
pub(crate) use types::bbox_diagonal;
pub use util::{any_perp, face_centroid, newell_normal, normalize_or_zero};
pub(crate) use util::project_plane;

#[cfg(test)]
mod tests_special;
