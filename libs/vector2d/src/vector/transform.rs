//! Geometric transforms: reflection, normalization, limiting, angles and
//! rotation.
//!
//! `rotate` and `angle_between` keep their established formulas, which differ
//! from the textbook definitions. The textbook versions are available as
//! [`Vector2D::rotate_standard`] and [`Vector2D::angle_between_acos`].

use std::f64::consts::PI;

use super::Vector2D;

impl Vector2D {
    /// Reflects the vector off a surface with the given `normal`:
    /// `v - 2(v·n)n`.
    ///
    /// `normal` is expected to be unit length; it is not normalized here.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let bounced = Vector2D::new(1.0, -1.0).reflect(Vector2D::new(0.0, 1.0));
    /// assert_eq!(bounced, Vector2D::new(1.0, 1.0));
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        let dot_product = self.dot(normal);
        Self::new(
            self.x - 2.0 * dot_product * normal.x,
            self.y - 2.0 * dot_product * normal.y,
        )
    }

    /// Scales the vector to unit length.
    ///
    /// A magnitude of exactly `0.0` or exactly `1.0` returns the vector
    /// unchanged without dividing. Nearly-unit vectors are still divided.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// assert_eq!(Vector2D::new(3.0, 4.0).normalize(), Vector2D::new(0.6, 0.8));
    /// assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    /// ```
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 || mag == 1.0 {
            log::trace!("normalize: magnitude {} of {} returned unchanged", mag, self);
            return self.copy();
        }
        self.divide_scalar(mag)
    }

    /// Caps the magnitude at `max`, keeping the direction.
    ///
    /// Vectors already within `max` are returned unchanged; the check compares
    /// squared magnitudes so the common case skips the square root.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let v = Vector2D::new(30.0, 40.0).limit(5.0);
    /// assert_eq!(v, Vector2D::new(3.0, 4.0));
    /// assert_eq!(Vector2D::new(1.0, 1.0).limit(5.0), Vector2D::new(1.0, 1.0));
    /// ```
    pub fn limit(self, max: f64) -> Self {
        if self.magnitude_squared() <= max * max {
            return self.copy();
        }
        self.normalize().multiply_scalar(max)
    }

    /// Heading of the vector in radians, computed as `-atan2(-y, x)`.
    ///
    /// Equal to `atan2(y, x)` for ordinary inputs; the double negation is
    /// kept so signed-zero inputs resolve the same way everywhere.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// use std::f64::consts::FRAC_PI_2;
    /// assert_eq!(Vector2D::new(0.0, 1.0).angle(), FRAC_PI_2);
    /// ```
    pub fn angle(self) -> f64 {
        -(-self.y).atan2(self.x)
    }

    /// Applies `(x·cos a − y·sin a, x·sin a − y·cos a)`.
    ///
    /// The second component subtracts `y·cos a`, so this is a rotation
    /// followed by a flip of the y axis contribution, not a pure rotation.
    /// For a counter-clockwise rotation use [`Vector2D::rotate_standard`].
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// // With a zero angle the y component is negated.
    /// assert_eq!(Vector2D::new(2.0, 3.0).rotate(0.0), Vector2D::new(2.0, -3.0));
    /// ```
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin - self.y * cos)
    }

    /// Rotates counter-clockwise by `angle` radians using the standard
    /// rotation matrix `(x·cos a − y·sin a, x·sin a + y·cos a)`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// assert_eq!(Vector2D::new(2.0, 3.0).rotate_standard(0.0), Vector2D::new(2.0, 3.0));
    /// ```
    pub fn rotate_standard(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Coarse angle measure between two vectors.
    ///
    /// Evaluates `dot / |v| * |v2|` left to right (dividing by `|v|` only,
    /// then multiplying by `|v2|`), then returns `π` when that value is
    /// `<= -1`, `0` when it is `>= 0`, and the raw value otherwise. Most
    /// inputs therefore land on exactly `0` or `π`. A `NaN` raw value, as
    /// produced by a zero-length receiver, is returned as `NaN`.
    ///
    /// For the geometric angle use [`Vector2D::angle_between_acos`].
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// use std::f64::consts::PI;
    /// let right = Vector2D::new(1.0, 0.0);
    /// assert_eq!(right.angle_between(Vector2D::new(0.0, 1.0)), 0.0);
    /// assert_eq!(right.angle_between(Vector2D::new(-1.0, 0.0)), PI);
    /// assert_eq!(right.angle_between(Vector2D::new(-0.5, 0.0)), -0.25);
    /// ```
    pub fn angle_between(self, v2: Self) -> f64 {
        let raw = self.dot(v2) / self.magnitude() * v2.magnitude();
        if raw <= -1.0 {
            PI
        } else if raw >= 0.0 {
            0.0
        } else {
            raw
        }
    }

    /// Unsigned angle in radians between two vectors,
    /// `acos(dot / (|v|·|v2|))`, in `[0, π]`.
    ///
    /// The cosine is clamped into `[-1, 1]` before `acos`. A zero-length
    /// input gives `NaN`.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// use std::f64::consts::FRAC_PI_2;
    /// let a = Vector2D::new(1.0, 0.0);
    /// let angle = a.angle_between_acos(Vector2D::new(0.0, 2.0));
    /// assert!((angle - FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle_between_acos(self, v2: Self) -> f64 {
        let cos = self.dot(v2) / (self.magnitude() * v2.magnitude());
        cos.clamp(-1.0, 1.0).acos()
    }
}
