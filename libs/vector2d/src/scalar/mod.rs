//! Scalar kernels applied per component by [`Vector2D`](crate::Vector2D).
//!
//! These are plain `f64` functions so callers can use the same interpolation,
//! remapping and clamping rules on single values.

/// Linearly interpolates from `start` towards `end`.
///
/// `amount` is not clamped, so values outside `[0, 1]` extrapolate.
///
/// # Examples
/// ```
/// use vector2d::scalar::linear_interpolate;
/// assert_eq!(linear_interpolate(0.0, 10.0, 0.25), 2.5);
/// assert_eq!(linear_interpolate(0.0, 10.0, 2.0), 20.0);
/// ```
#[inline]
pub fn linear_interpolate(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// Remaps `value` from the range `[old_min, old_max]` onto `[new_min, new_max]`.
///
/// An empty source range (`old_min == old_max`) divides by zero and yields
/// `NaN` or an infinity.
///
/// # Examples
/// ```
/// use vector2d::scalar::map_range;
/// assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// assert!(map_range(5.0, 1.0, 1.0, 0.0, 1.0).is_infinite());
/// ```
#[inline]
pub fn map_range(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    new_min + (new_max - new_min) * ((value - old_min) / (old_max - old_min))
}

/// Restricts `value` using ordered boundary comparisons.
///
/// The lower bound is checked first: `value <= min` gives `min`, then
/// `value >= max` gives `max`, otherwise `value`. Unlike [`f64::clamp`] this
/// never panics when `min > max`, and a `NaN` value passes through untouched.
///
/// # Examples
/// ```
/// use vector2d::scalar::clamp_ordered;
/// assert_eq!(clamp_ordered(-1.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp_ordered(20.0, 0.0, 10.0), 10.0);
/// // Inverted bounds: the lower-bound branch wins.
/// assert_eq!(clamp_ordered(5.0, 8.0, 2.0), 8.0);
/// ```
#[inline]
pub fn clamp_ordered(value: f64, min: f64, max: f64) -> f64 {
    if value <= min {
        min
    } else if value >= max {
        max
    } else {
        value
    }
}
