//! Boundary reconstruction for convex polytope skeletons.
//!
//! Input is a 1-skeleton (vertex positions plus a symmetric adjacency list);
//! output is the list of outward, counter-clockwise faces and a fan
//! triangulation of each face.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity and better design over compatibility; breaking changes are
//!   fine when they improve quality.

pub mod api;
pub mod boundary;
pub mod geom3;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector3 as Vec3;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{
        reconstruct, reconstruct_skeleton, reconstruct_with_interior, ReconError, ReconReport,
        Reconstruction, Triangle,
    };
    pub use crate::geom3::{special, MarkPolicy, ReconCfg, Skeleton};
    pub use nalgebra::Vector3 as Vec3;
}
