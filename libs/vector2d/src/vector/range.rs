//! Componentwise interpolation, range remapping and clamping.
//!
//! Each method applies one of the [`scalar`](crate::scalar) kernels to `x`
//! and `y` independently.

use super::Vector2D;
use crate::scalar::{clamp_ordered, linear_interpolate, map_range};

impl Vector2D {
    /// Interpolates from `self` towards `v2` by `amount`, componentwise.
    ///
    /// `amount` is not clamped: values outside `[0, 1]` extrapolate along
    /// the line.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let mid = Vector2D::zero().linear_interpolate_to_vector(Vector2D::new(10.0, 10.0), 0.5);
    /// assert_eq!(mid, Vector2D::new(5.0, 5.0));
    /// ```
    pub fn linear_interpolate_to_vector(self, v2: Self, amount: f64) -> Self {
        Self::new(
            linear_interpolate(self.x, v2.x, amount),
            linear_interpolate(self.y, v2.y, amount),
        )
    }

    /// Remaps both components from `[old_min, old_max]` onto
    /// `[new_min, new_max]`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let v = Vector2D::new(5.0, 5.0).map_to_scalars(0.0, 10.0, 0.0, 100.0);
    /// assert_eq!(v, Vector2D::new(50.0, 50.0));
    /// ```
    pub fn map_to_scalars(self, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> Self {
        Self::new(
            map_range(self.x, old_min, old_max, new_min, new_max),
            map_range(self.y, old_min, old_max, new_min, new_max),
        )
    }

    /// Remaps each component using the matching component of the range
    /// vectors: `x` uses the `x` bounds, `y` uses the `y` bounds.
    pub fn map_to_vectors(
        self,
        old_min_v: Self,
        old_max_v: Self,
        new_min_v: Self,
        new_max_v: Self,
    ) -> Self {
        Self::new(
            map_range(self.x, old_min_v.x, old_max_v.x, new_min_v.x, new_max_v.x),
            map_range(self.y, old_min_v.y, old_max_v.y, new_min_v.y, new_max_v.y),
        )
    }

    /// Clamps both components into `[min, max]` with ordered comparisons.
    ///
    /// See [`clamp_ordered`] for the behaviour when `min > max`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let v = Vector2D::new(-1.0, 20.0).clamp_to_scalars(0.0, 10.0);
    /// assert_eq!(v, Vector2D::new(0.0, 10.0));
    /// ```
    pub fn clamp_to_scalars(self, min: f64, max: f64) -> Self {
        Self::new(clamp_ordered(self.x, min, max), clamp_ordered(self.y, min, max))
    }

    /// Clamps each component between the matching components of `min_v` and
    /// `max_v`.
    pub fn clamp_to_vectors(self, min_v: Self, max_v: Self) -> Self {
        Self::new(
            clamp_ordered(self.x, min_v.x, max_v.x),
            clamp_ordered(self.y, min_v.y, max_v.y),
        )
    }

    /// Rounds both components towards negative infinity.
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Reverses the direction by scaling with `-1`.
    pub fn negate(self) -> Self {
        self.multiply_scalar(-1.0)
    }
}
