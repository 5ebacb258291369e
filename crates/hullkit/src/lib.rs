//! Planar convex-hull kernel.
//!
//! Orientation predicate, recursive QuickHull, O(log n) point-in-convex-polygon
//! location and a Minkowski sum/difference combinator, plus the overlap check
//! built from the last two.
//!
//! API Policy
//! - Every kernel call is a pure function over value inputs; nothing is cached
//!   between calls and nothing borrows caller-owned point storage past the call.
//! - Hull vertices keep the exact order QuickHull emits them in. Membership relies
//!   on vertex 0 being the pivot of a convex fan, so never re-sort a `Hull`.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{AlgoMode, Hull, HullCfg, HullError, MinkowskiOp};
pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        combine, compute_hull, compute_hull_with, is_right, minkowski_hull, minkowski_hull_with,
        orientation, overlaps, overlaps_with, point_in_hull, point_in_hull_eps, winding,
        AlgoMode, Hull, HullCfg, HullError, MinkowskiOp, Winding,
    };
    pub use nalgebra::Vector2 as Vec2;
}
