//! 2D convex-hull geometry (vertex representation).
//!
//! Purpose
//! - Build convex hulls of small, frequently rebuilt point sets and answer
//!   membership, Minkowski and overlap queries against them.
//! - Keep every operation a pure function of its inputs (no shared state).
//!
//! Layout
//! - `orient`: the orientation predicate everything else is built on.
//! - `quickhull`: recursive QuickHull; emits the boundary in unwinding order.
//! - `locate`: O(log n) point location against a convex fan around vertex 0.
//! - `minkowski`: all-pairs sum/difference, re-hull, origin-containment overlap.
//!
//! Numerics
//! - Predicates are exact sign tests on `f64` cross products; collinear is never
//!   "right". `HullCfg::eps` only widens the membership boundary.

mod locate;
mod minkowski;
mod orient;
mod quickhull;
mod types;

pub use locate::{point_in_hull, point_in_hull_eps, winding, Winding};
pub use minkowski::{combine, minkowski_hull, minkowski_hull_with, overlaps, overlaps_with};
pub use orient::{is_right, orientation};
pub use quickhull::{compute_hull, compute_hull_with};
pub use types::{AlgoMode, Hull, HullCfg, HullError, MinkowskiOp};
