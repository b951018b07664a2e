//! Tolerance-based comparisons.
//!
//! Structural `PartialEq` stays exact. These helpers compare componentwise
//! within the tolerances from the `config` crate.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use config::constants::{
    approx_equal, ToleranceConfig, DEFAULT_MAX_ULPS, EPSILON_TOLERANCE, RELATIVE_TOLERANCE,
};

use super::Vector2D;

impl Vector2D {
    /// Componentwise [`approx_equal`], i.e. the default [`ToleranceConfig`].
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// use std::f64::consts::FRAC_PI_2;
    /// assert!(Vector2D::from_radians(FRAC_PI_2).approx_eq(Vector2D::new(0.0, 1.0)));
    /// ```
    pub fn approx_eq(self, v2: Self) -> bool {
        approx_equal(self.x, v2.x) && approx_equal(self.y, v2.y)
    }

    /// Componentwise comparison with caller-supplied tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// use vector2d::Vector2D;
    /// let loose = ToleranceConfig::new(0.01, 1e-9).expect("valid tolerance");
    /// assert!(Vector2D::new(1.0, 2.0).approx_eq_with(Vector2D::new(1.005, 2.0), &loose));
    /// ```
    pub fn approx_eq_with(self, v2: Self, tolerance: &ToleranceConfig) -> bool {
        tolerance.accepts(self.x, v2.x) && tolerance.accepts(self.y, v2.y)
    }
}

impl AbsDiffEq for Vector2D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON_TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vector2D {
    fn default_max_relative() -> f64 {
        RELATIVE_TOLERANCE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Vector2D {
    fn default_max_ulps() -> u32 {
        DEFAULT_MAX_ULPS
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        f64::ulps_eq(&self.x, &other.x, epsilon, max_ulps)
            && f64::ulps_eq(&self.y, &other.y, epsilon, max_ulps)
    }
}
