//! Recursive QuickHull.
//!
//! Model
//! - Split the input by the segment between the two x-extremes, then for each
//!   side recurse on the point farthest from the current base segment.
//! - Each recursion level returns its own chain; chains are concatenated as the
//!   recursion unwinds. Nothing is accumulated through captured state.
//!
//! Output order
//! - `left`, the chain on the positive side of `left → right` (from left to right),
//!   then `right` and the chain on the positive side of `right → left`. In a y-up
//!   frame that is clockwise; membership does not depend on which.
//!
//! Complexity: O(n log n) on average, O(n²) and depth O(n) on adversarial inputs,
//! hence the `HullCfg::max_depth` ceiling.

use nalgebra::Vector2;

use super::orient::{is_right, orientation};
use super::types::{Hull, HullCfg, HullError};

/// Convex hull of `points` with the default configuration.
pub fn compute_hull(points: &[Vector2<f64>]) -> Result<Hull, HullError> {
    compute_hull_with(points, &HullCfg::default())
}

/// Convex hull of `points` under explicit limits.
///
/// Post:
/// - every vertex is an element of `points`;
/// - one distinct input point yields a 1-vertex hull, collinear inputs a 2-vertex hull.
pub fn compute_hull_with(points: &[Vector2<f64>], cfg: &HullCfg) -> Result<Hull, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(limit) = cfg.max_points {
        if points.len() > limit {
            return Err(HullError::TooManyPoints {
                len: points.len(),
                limit,
            });
        }
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }

    let (left, right) = extremes(points);
    if left == right {
        tracing::trace!(n = points.len(), "all points coincide");
        return Ok(Hull::from_vertices(vec![left]));
    }

    let upper = right_of(left, right, points);
    let lower = right_of(right, left, points);
    let mut verts = find_hull(left, right, &upper, 1, cfg)?;
    verts.extend(find_hull(right, left, &lower, 1, cfg)?);

    tracing::debug!(
        n = points.len(),
        upper = upper.len(),
        lower = lower.len(),
        hull = verts.len(),
        "quickhull"
    );
    Ok(Hull::from_vertices(verts))
}

/// First minimum-x and first maximum-x point. A vertical input (all x equal)
/// falls back to the y-extremes so the base segment is never a single point
/// unless every point coincides.
fn extremes(points: &[Vector2<f64>]) -> (Vector2<f64>, Vector2<f64>) {
    let first = points[0];
    let (mut left, mut right) = (first, first);
    for &p in &points[1..] {
        if p.x < left.x {
            left = p;
        }
        if p.x > right.x {
            right = p;
        }
    }
    if left.x < right.x {
        return (left, right);
    }
    let (mut low, mut high) = (first, first);
    for &p in &points[1..] {
        if p.y < low.y {
            low = p;
        }
        if p.y > high.y {
            high = p;
        }
    }
    (low, high)
}

/// Points strictly on the positive side of `a → b`, in input order.
fn right_of(a: Vector2<f64>, b: Vector2<f64>, points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    points.iter().copied().filter(|&p| is_right(a, b, p)).collect()
}

/// Point of `subset` farthest from the line through `left` and `right`.
/// Compares unnormalized cross products; ties keep the first occurrence.
fn farthest(
    left: Vector2<f64>,
    right: Vector2<f64>,
    subset: &[Vector2<f64>],
) -> Option<Vector2<f64>> {
    let mut best: Option<(Vector2<f64>, f64)> = None;
    for &p in subset {
        let d = orientation(left, right, p).abs();
        if best.as_ref().is_none_or(|(_, bd)| d > *bd) {
            best = Some((p, d));
        }
    }
    best.map(|(p, _)| p)
}

/// Chain of hull vertices from `left` (inclusive) towards `right` (exclusive)
/// covering `subset`, which lies strictly on the positive side of `left → right`.
fn find_hull(
    left: Vector2<f64>,
    right: Vector2<f64>,
    subset: &[Vector2<f64>],
    depth: usize,
    cfg: &HullCfg,
) -> Result<Vec<Vector2<f64>>, HullError> {
    if let Some(limit) = cfg.max_depth {
        if depth > limit {
            return Err(HullError::DepthExceeded { limit });
        }
    }
    let Some(far) = farthest(left, right, subset) else {
        return Ok(vec![left]);
    };
    let outer_left = right_of(left, far, subset);
    let outer_right = right_of(far, right, subset);
    let mut chain = find_hull(left, far, &outer_left, depth + 1, cfg)?;
    chain.extend(find_hull(far, right, &outer_right, depth + 1, cfg)?);
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_with_interior_point() {
        let pts = [
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
            vector![5.0, 5.0],
        ];
        let h = compute_hull(&pts).unwrap();
        assert_eq!(
            h.vertices(),
            &[
                vector![0.0, 0.0],
                vector![0.0, 10.0],
                vector![10.0, 10.0],
                vector![10.0, 0.0],
            ]
        );
    }

    #[test]
    fn empty_and_non_finite_inputs_fail() {
        assert_eq!(compute_hull(&[]), Err(HullError::EmptyInput));
        let pts = [vector![0.0, 0.0], vector![f64::NAN, 1.0]];
        assert_eq!(compute_hull(&pts), Err(HullError::NonFinite { index: 1 }));
    }

    #[test]
    fn degenerate_sizes() {
        let one = compute_hull(&[vector![3.0, 4.0], vector![3.0, 4.0]]).unwrap();
        assert_eq!(one.vertices(), &[vector![3.0, 4.0]]);

        let line = [
            vector![0.0, 0.0],
            vector![2.0, 2.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
        ];
        let seg = compute_hull(&line).unwrap();
        assert_eq!(seg.vertices(), &[vector![0.0, 0.0], vector![2.0, 2.0]]);

        let vertical = [vector![1.0, 5.0], vector![1.0, -2.0], vector![1.0, 0.0]];
        let seg = compute_hull(&vertical).unwrap();
        assert_eq!(seg.vertices(), &[vector![1.0, -2.0], vector![1.0, 5.0]]);
    }

    #[test]
    fn x_ties_keep_first_occurrence() {
        let pts = [
            vector![0.0, 5.0],
            vector![0.0, -5.0],
            vector![4.0, 0.0],
        ];
        let h = compute_hull(&pts).unwrap();
        assert_eq!(h.vertices()[0], vector![0.0, 5.0]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn tied_extreme_mid_edge_stays_a_vertex() {
        let pts = [
            vector![0.0, 5.0],
            vector![0.0, 10.0],
            vector![10.0, 10.0],
            vector![10.0, 0.0],
            vector![0.0, 0.0],
        ];
        let h = compute_hull(&pts).unwrap();
        assert_eq!(h.vertices(), &pts);
        assert_eq!(orientation(pts[4], pts[0], pts[1]), 0.0);
    }

    #[test]
    fn limits_are_enforced() {
        let pts = [
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ];
        let shallow = HullCfg {
            max_depth: Some(1),
            ..HullCfg::default()
        };
        assert_eq!(
            compute_hull_with(&pts, &shallow),
            Err(HullError::DepthExceeded { limit: 1 })
        );
        let small = HullCfg {
            max_points: Some(3),
            ..HullCfg::default()
        };
        assert_eq!(
            compute_hull_with(&pts, &small),
            Err(HullError::TooManyPoints { len: 4, limit: 3 })
        );
        assert_eq!(compute_hull_with(&pts, &HullCfg::unbounded()).unwrap().len(), 4);
    }
}
