//! Basic 2D types, limits and errors used by the hull kernel.
//!
//! - `HullCfg`: centralizes the recursion/input ceilings and the membership slack.
//! - `Hull`: cyclic boundary in the order QuickHull emitted it.
//! - `MinkowskiOp`, `AlgoMode`: operation selectors.
//! - `HullError`: failures of hull construction.

use nalgebra::Vector2;
use thiserror::Error;

use super::locate::point_in_hull_eps;

/// Kernel configuration (limits and tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// QuickHull recursion ceiling. Adversarial inputs recurse up to once per point.
    pub max_depth: Option<usize>,
    /// Largest point set accepted by the builder.
    pub max_points: Option<usize>,
    /// Membership slack in cross-product units; `0.0` means exact predicates.
    pub eps: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            max_depth: Some(4096),
            max_points: None,
            eps: 0.0,
        }
    }
}

impl HullCfg {
    /// No ceilings at all; stack usage is then bounded only by the input.
    #[inline]
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            max_points: None,
            eps: 0.0,
        }
    }
}

/// Failures of hull construction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HullError {
    #[error("cannot build a hull from zero points")]
    EmptyInput,
    #[error("point set has {len} points, limit is {limit}")]
    TooManyPoints { len: usize, limit: usize },
    #[error("quickhull recursion exceeded depth {limit}")]
    DepthExceeded { limit: usize },
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Convex boundary as a cyclic vertex sequence (no repeated closing vertex).
///
/// Invariants (for hulls produced by `compute_hull`):
/// - No two vertices coincide and no turn goes against the hull's winding.
/// - Three consecutive vertices may be collinear. Ties are kept by first
///   occurrence, so an x-extreme can sit mid-way along a vertical edge and a
///   farthest point mid-way along an edge parallel to its base segment.
/// - Vertex 0 is the first x-extreme of the input; the order is never re-sorted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    verts: Vec<Vector2<f64>>,
}

impl Hull {
    /// Wrap an existing convex boundary. Either winding direction is accepted.
    #[inline]
    pub fn from_vertices(verts: Vec<Vector2<f64>>) -> Self {
        Self { verts }
    }
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.verts
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.verts
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    /// Fewer than three vertices: a point or a segment, no interior.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.verts.len() < 3
    }
    /// Boundary-inclusive membership with exact predicates.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_hull_eps(p, self, 0.0)
    }
    /// Vertex average (not the area centroid).
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        if self.verts.is_empty() {
            return None;
        }
        let sum = self
            .verts
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, v| acc + v);
        Some(sum / self.verts.len() as f64)
    }
}

/// Which Minkowski combination to form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MinkowskiOp {
    /// `p + q - origin`
    Sum,
    /// `p - q + origin`
    Difference,
}

impl MinkowskiOp {
    #[inline]
    pub fn apply(self, p: Vector2<f64>, q: Vector2<f64>, origin: Vector2<f64>) -> Vector2<f64> {
        match self {
            MinkowskiOp::Sum => p + q - origin,
            MinkowskiOp::Difference => p - q + origin,
        }
    }
}

/// The five interactive algorithm modes a front end toggles between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgoMode {
    QuickHull,
    PointInHull,
    MinkowskiSum,
    MinkowskiDifference,
    /// Origin-in-Minkowski-difference overlap test (not iterative GJK).
    Overlap,
}

impl AlgoMode {
    pub const ALL: [AlgoMode; 5] = [
        AlgoMode::QuickHull,
        AlgoMode::PointInHull,
        AlgoMode::MinkowskiSum,
        AlgoMode::MinkowskiDifference,
        AlgoMode::Overlap,
    ];

    /// Combination used by the mode, if any.
    #[inline]
    pub fn minkowski_op(self) -> Option<MinkowskiOp> {
        match self {
            AlgoMode::MinkowskiSum => Some(MinkowskiOp::Sum),
            AlgoMode::MinkowskiDifference | AlgoMode::Overlap => Some(MinkowskiOp::Difference),
            AlgoMode::QuickHull | AlgoMode::PointInHull => None,
        }
    }

    /// Number of point sets the mode consumes.
    #[inline]
    pub fn point_sets(self) -> usize {
        match self {
            AlgoMode::QuickHull => 1,
            _ => 2,
        }
    }
}
