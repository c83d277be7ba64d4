//! Tolerance defaults and the reconstruction config.
//!
//! Policy
//! - Tolerances are relative: the extractor multiplies them by the skeleton's
//!   bounding-box diagonal so that uniformly scaled inputs behave identically.
//! - Defaults are fixed constants; `ReconCfg` exists so callers (CLI, tests)
//!   can tighten or loosen a single knob without touching call sites.

/// Max distance of a candidate vertex from the running face plane, relative to scale.
pub(crate) const PLANE_EPS: f64 = 1e-7;
/// Segment pairs whose cross product is shorter than this (times scale²) are skipped.
pub(crate) const NORMAL_EPS: f64 = 1e-12;
/// Projected neighbor directions shorter than this get angle +∞ in the radial order.
pub(crate) const RADIAL_EPS: f64 = 1e-12;
/// Default hop bound per walk is `HOP_FACTOR * vertex_count`.
pub(crate) const HOP_FACTOR: usize = 10;

/// When a boundary walk commits its half-edges to the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkPolicy {
    /// Mark each half-edge as soon as the walk traverses it. A failed walk
    /// keeps the marks it made.
    #[default]
    Eager,
    /// Buffer marks and commit them only once the walk closes.
    OnSuccess,
}

/// Reconstruction configuration (tolerances and walk bounds).
#[derive(Clone, Copy, Debug)]
pub struct ReconCfg {
    pub eps_plane: f64,
    pub eps_normal: f64,
    pub eps_radial: f64,
    pub hop_factor: usize,
    /// Absolute hop bound; overrides `hop_factor` when set.
    pub max_hops: Option<usize>,
    pub mark_policy: MarkPolicy,
}

impl Default for ReconCfg {
    fn default() -> Self {
        Self {
            eps_plane: PLANE_EPS,
            eps_normal: NORMAL_EPS,
            eps_radial: RADIAL_EPS,
            hop_factor: HOP_FACTOR,
            max_hops: None,
            mark_policy: MarkPolicy::Eager,
        }
    }
}

impl ReconCfg {
    /// Hop bound for a skeleton with `vertex_count` vertices.
    #[inline]
    pub fn max_hops(&self, vertex_count: usize) -> usize {
        self.max_hops
            .unwrap_or_else(|| self.hop_factor.saturating_mul(vertex_count))
    }
}
