use nalgebra::Vector2;

/// Signed cross product `(b - a) × (c - a)`.
///
/// Positive when `a → b → c` turns counter-clockwise in a y-up frame. In a
/// y-down (screen) frame the visual sense flips; only the sign is meaningful.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Strict side test: `c` lies on the positive side of the directed segment `a → b`.
///
/// Collinear points (zero cross product) are never "right".
#[inline]
pub fn is_right(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> bool {
    orientation(a, b, c) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn sign_and_antisymmetry() {
        let a = vector![0.0, 0.0];
        let b = vector![10.0, 0.0];
        assert!(is_right(a, b, vector![3.0, 4.0]));
        assert!(!is_right(a, b, vector![3.0, -4.0]));
        assert!(is_right(b, a, vector![3.0, -4.0]));
        assert!((orientation(a, b, vector![3.0, 4.0]) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_is_not_right() {
        let a = vector![1.0, 1.0];
        let b = vector![3.0, 3.0];
        assert!(!is_right(a, b, vector![2.0, 2.0]));
        assert!(!is_right(a, b, vector![7.0, 7.0]));
        assert!(!is_right(a, a, vector![5.0, -1.0]));
    }
}
