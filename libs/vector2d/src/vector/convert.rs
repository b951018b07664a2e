//! Conversions between [`Vector2D`] and tuples, arrays and `glam::DVec2`.

use glam::DVec2;

use super::Vector2D;

impl From<(f64, f64)> for Vector2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for (f64, f64) {
    #[inline]
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}

impl From<[f64; 2]> for Vector2D {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    #[inline]
    fn from(v: Vector2D) -> Self {
        [v.x, v.y]
    }
}

impl From<DVec2> for Vector2D {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    #[inline]
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}
