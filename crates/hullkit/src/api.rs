//! Curated surface for callers that drive the kernel per input event.
//!
//! The presentation side (sampling points, dragging, drawing) only ever needs
//! these calls. Prefer them over reaching into `geom2` submodules.

pub use crate::geom2::{
    combine, compute_hull, compute_hull_with, minkowski_hull, minkowski_hull_with, overlaps,
    overlaps_with, point_in_hull, point_in_hull_eps, AlgoMode, Hull, HullCfg, HullError,
    MinkowskiOp,
};

use nalgebra::Vector2;

/// Hull boundaries and the combined boundary for one of the two Minkowski modes.
///
/// Returns `(hull_a, hull_b, combined)`; the caller draws all three.
pub fn minkowski_scene(
    a: &[Vector2<f64>],
    b: &[Vector2<f64>],
    origin: Vector2<f64>,
    op: MinkowskiOp,
    cfg: &HullCfg,
) -> Result<(Hull, Hull, Hull), HullError> {
    let ha = compute_hull_with(a, cfg)?;
    let hb = compute_hull_with(b, cfg)?;
    let combined = minkowski_hull_with(&ha, &hb, origin, op, cfg)?;
    Ok((ha, hb, combined))
}
