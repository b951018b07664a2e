//! The [`Vector2D`] value type.
//!
//! Every operation takes `self` by value and returns a fresh result, so a
//! vector is never modified after construction. Degenerate inputs follow
//! IEEE-754: division by zero yields infinities or `NaN` rather than errors.
//!
//! Operations are split by concern:
//! - this module: construction, magnitude, distance, componentwise arithmetic
//! - `transform`: reflection, normalization, angles and rotation, e.g.
//!   [`Vector2D::reflect`], [`Vector2D::normalize`], [`Vector2D::rotate`]
//! - `range`: interpolation, remapping, clamping, flooring and negation, e.g.
//!   [`Vector2D::linear_interpolate_to_vector`], [`Vector2D::clamp_to_scalars`]
//! - `ops`, `convert`, `format`, `compare`: trait implementations

use serde::{Deserialize, Serialize};

mod compare;
mod convert;
mod format;
mod ops;
mod range;
mod transform;

/// An immutable pair of `f64` components describing a point or direction in
/// the plane.
///
/// # Examples
/// ```
/// use vector2d::Vector2D;
///
/// let v = Vector2D::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.add(Vector2D::unit()), Vector2D::new(4.0, 5.0));
/// assert_eq!(v.to_string(), "3:4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2D {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates a vector from explicit components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// assert_eq!(Vector2D::from_scalar(2.5), Vector2D::new(2.5, 2.5));
    /// ```
    #[inline]
    pub const fn from_scalar(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Creates the unit-length direction `(cos r, sin r)` for an angle in
    /// radians.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// assert_eq!(Vector2D::from_radians(0.0), Vector2D::new(1.0, 0.0));
    /// ```
    #[inline]
    pub fn from_radians(r: f64) -> Self {
        Self::new(r.cos(), r.sin())
    }

    /// The origin, `(0, 0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The pair of ones, `(1, 1)`.
    ///
    /// This is not a unit-length vector; its magnitude is `√2`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// assert_eq!(Vector2D::unit(), Vector2D::new(1.0, 1.0));
    /// assert_eq!(Vector2D::unit().magnitude(), std::f64::consts::SQRT_2);
    /// ```
    #[inline]
    pub const fn unit() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Returns a structural duplicate.
    #[inline]
    pub const fn copy(self) -> Self {
        Self::new(self.x, self.y)
    }

    // =========================================================================
    // MAGNITUDE & DISTANCE
    // =========================================================================

    /// Euclidean length, `√(x² + y²)`.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Squared length, `x² + y²`. Avoids the square root when only
    /// comparisons are needed.
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Distance measure `√(((x - x2) + (y - y2))²)`.
    ///
    /// This squares the *sum* of the componentwise differences, which is
    /// `|Δx + Δy|` and not the Euclidean distance: `(0, 0)` and `(1, -1)` are
    /// at distance `0`. Use [`Vector2D::euclidean_distance`] for the straight
    /// line length.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let a = Vector2D::new(0.0, 0.0);
    /// assert_eq!(a.distance(Vector2D::new(3.0, 4.0)), 7.0);
    /// assert_eq!(a.distance(Vector2D::new(1.0, -1.0)), 0.0);
    /// ```
    #[inline]
    pub fn distance(self, v2: Self) -> f64 {
        let sum = (self.x - v2.x) + (self.y - v2.y);
        (sum * sum).sqrt()
    }

    /// Straight-line distance `√((x - x2)² + (y - y2)²)`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let a = Vector2D::new(0.0, 0.0);
    /// assert_eq!(a.euclidean_distance(Vector2D::new(3.0, 4.0)), 5.0);
    /// ```
    #[inline]
    pub fn euclidean_distance(self, v2: Self) -> f64 {
        self.subtract(v2).magnitude()
    }

    /// Dot product, `x·x2 + y·y2`.
    #[inline]
    pub fn dot(self, v2: Self) -> f64 {
        self.x * v2.x + self.y * v2.y
    }

    // =========================================================================
    // COMPONENTWISE & SCALAR ARITHMETIC
    // =========================================================================

    /// Componentwise sum.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, v2: Self) -> Self {
        Self::new(self.x + v2.x, self.y + v2.y)
    }

    /// Componentwise difference.
    #[inline]
    pub fn subtract(self, v2: Self) -> Self {
        Self::new(self.x - v2.x, self.y - v2.y)
    }

    /// Componentwise product.
    #[inline]
    pub fn multiply(self, v2: Self) -> Self {
        Self::new(self.x * v2.x, self.y * v2.y)
    }

    /// Componentwise quotient. Zero components in `v2` produce infinities or
    /// `NaN`.
    #[inline]
    pub fn divide(self, v2: Self) -> Self {
        Self::new(self.x / v2.x, self.y / v2.y)
    }

    /// Scales both components by `s`.
    #[inline]
    pub fn multiply_scalar(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    /// Divides both components by `s`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let v = Vector2D::new(1.0, -1.0).divide_scalar(0.0);
    /// assert_eq!(v, Vector2D::new(f64::INFINITY, f64::NEG_INFINITY));
    /// ```
    #[inline]
    pub fn divide_scalar(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}
