//! Point location in a convex polygon, O(log n).
//!
//! The polygon is viewed as a fan of triangles `(v0, v[i], v[i+1])` around the
//! pivot `v0`. Two edge tests reject points outside the fan's angular range; a
//! binary search over the fan rays then finds the wedge containing the query,
//! and one last edge test decides inside/outside within that wedge.
//!
//! The search interval `[lo, hi]` shrinks strictly on every step with
//! `1 <= lo < hi <= n - 1`, so the loop always terminates and `v[lo + 1]` is
//! always in bounds, whatever vertex sequence is passed in.

use nalgebra::Vector2;

use super::orient::orientation;
use super::types::Hull;

/// Winding direction of a hull boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise in a y-up frame (positive turns).
    Ccw,
    /// Clockwise in a y-up frame (negative turns).
    Cw,
}

/// Direction of the first non-collinear turn, or `None` for fewer than three
/// vertices or an all-collinear boundary.
pub fn winding(hull: &Hull) -> Option<Winding> {
    let v = hull.vertices();
    let n = v.len();
    if n < 3 {
        return None;
    }
    for i in 0..n {
        let o = orientation(v[i], v[(i + 1) % n], v[(i + 2) % n]);
        if o > 0.0 {
            return Some(Winding::Ccw);
        }
        if o < 0.0 {
            return Some(Winding::Cw);
        }
    }
    None
}

/// Boundary-inclusive membership with exact predicates.
///
/// Hulls with fewer than three vertices have no interior: a 1-vertex hull
/// contains only that exact point, a 2-vertex hull contains nothing.
pub fn point_in_hull(p: Vector2<f64>, hull: &Hull) -> bool {
    point_in_hull_eps(p, hull, 0.0)
}

/// Membership with slack: edge tests accept `orientation >= -eps`.
pub fn point_in_hull_eps(p: Vector2<f64>, hull: &Hull, eps: f64) -> bool {
    let v = hull.vertices();
    let n = v.len();
    match n {
        0 | 2 => return false,
        1 => return v[0] == p,
        _ => {}
    }
    let Some(w) = winding(hull) else {
        return false;
    };
    let sign = match w {
        Winding::Ccw => 1.0,
        Winding::Cw => -1.0,
    };
    // Interior lies on the non-negative side of every edge after this flip.
    let side = |a: Vector2<f64>, b: Vector2<f64>| sign * orientation(a, b, p);

    let pivot = v[0];
    if side(v[n - 1], pivot) < -eps || side(pivot, v[1]) < -eps {
        return false;
    }
    let (mut lo, mut hi) = (1usize, n - 1);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if side(pivot, v[mid]) >= 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    side(v[lo], v[lo + 1]) >= -eps
}
