//! Minkowski sum/difference of two hulls and the overlap test built on it.
//!
//! `combine` forms all |A|·|B| pairwise points and leaves hulling to QuickHull:
//! O(nm log(nm)) instead of the O(n + m) merge of angle-sorted edges. Fine for
//! interactive point counts; switch to the edge merge before reusing at scale.
//!
//! `overlaps` is a single-shot convex/convex test: two convex shapes intersect
//! iff the origin lies in their Minkowski difference. There is no iterative
//! simplex/support-function search here (that would be GJK proper).

use nalgebra::Vector2;

use super::locate::point_in_hull_eps;
use super::quickhull::compute_hull_with;
use super::types::{Hull, HullCfg, HullError, MinkowskiOp};

/// Raw pairwise point set (duplicates kept). Needs a re-hull before use as a boundary.
pub fn combine(a: &Hull, b: &Hull, origin: Vector2<f64>, op: MinkowskiOp) -> Vec<Vector2<f64>> {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for &p in a.vertices() {
        for &q in b.vertices() {
            out.push(op.apply(p, q, origin));
        }
    }
    tracing::trace!(a = a.len(), b = b.len(), out = out.len(), ?op, "combine");
    out
}

/// Boundary of the Minkowski combination with the default configuration.
pub fn minkowski_hull(
    a: &Hull,
    b: &Hull,
    origin: Vector2<f64>,
    op: MinkowskiOp,
) -> Result<Hull, HullError> {
    minkowski_hull_with(a, b, origin, op, &HullCfg::default())
}

/// Boundary of the Minkowski combination. Fails with `EmptyInput` if either hull is empty.
pub fn minkowski_hull_with(
    a: &Hull,
    b: &Hull,
    origin: Vector2<f64>,
    op: MinkowskiOp,
    cfg: &HullCfg,
) -> Result<Hull, HullError> {
    compute_hull_with(&combine(a, b, origin, op), cfg)
}

/// Whether the shapes bounded by `a` and `b` intersect (touching counts).
pub fn overlaps(a: &Hull, b: &Hull, origin: Vector2<f64>) -> Result<bool, HullError> {
    overlaps_with(a, b, origin, &HullCfg::default())
}

/// Origin-in-Minkowski-difference test under explicit limits and slack.
///
/// An empty hull overlaps nothing. Note the difference hull obeys the same
/// degeneracy rules as membership: if it collapses to a segment, the answer
/// is `false` even when the segment passes through `origin`.
pub fn overlaps_with(
    a: &Hull,
    b: &Hull,
    origin: Vector2<f64>,
    cfg: &HullCfg,
) -> Result<bool, HullError> {
    if a.is_empty() || b.is_empty() {
        return Ok(false);
    }
    let diff = minkowski_hull_with(a, b, origin, MinkowskiOp::Difference, cfg)?;
    let hit = point_in_hull_eps(origin, &diff, cfg.eps);
    tracing::debug!(a = a.len(), b = b.len(), diff = diff.len(), hit, "overlap");
    Ok(hit)
}
