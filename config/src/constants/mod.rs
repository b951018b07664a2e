//! Centralized configuration values shared across the vector2d workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that the vector library can remain declarative and avoid
//! scattering literals.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance used when comparing vector components.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Relative tolerance used when comparing vector components whose magnitude
/// makes an absolute bound meaningless.
///
/// # Examples
/// ```
/// use config::constants::RELATIVE_TOLERANCE;
/// let a: f64 = 1.0e12;
/// let b = a + 1.0;
/// assert!((a - b).abs() <= RELATIVE_TOLERANCE * a.abs().max(b.abs()));
/// ```
pub const RELATIVE_TOLERANCE: f64 = 1.0e-9;

/// Default number of units-in-the-last-place accepted by ULPs comparisons.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_ULPS;
/// assert!(DEFAULT_MAX_ULPS >= 1);
/// ```
pub const DEFAULT_MAX_ULPS: u32 = 4;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Separator between the two components in the `x:y` text format.
///
/// # Examples
/// ```
/// use config::constants::COMPONENT_SEPARATOR;
/// assert_eq!(format!("{}{}{}", 1, COMPONENT_SEPARATOR, 2), "1:2");
/// ```
pub const COMPONENT_SEPARATOR: char = ':';

// =============================================================================
// TOLERANCE SNAPSHOT
// =============================================================================

/// Immutable snapshot of comparison tolerances that callers pass into
/// approximate vector comparisons.
///
/// # Examples
/// ```
/// use config::constants::ToleranceConfig;
/// let config = ToleranceConfig::default();
/// assert!(config.absolute > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawToleranceConfig")]
pub struct ToleranceConfig {
    /// Largest absolute difference treated as equal.
    pub absolute: f64,
    /// Largest difference, relative to the larger operand, treated as equal.
    pub relative: f64,
}

impl ToleranceConfig {
    /// Builds a tolerance snapshot, rejecting zero, negative and non-finite
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// let cfg = ToleranceConfig::new(1.0e-6, 1.0e-4).expect("valid config");
    /// assert_eq!(cfg.relative, 1.0e-4);
    /// assert!(ToleranceConfig::new(0.0, 1.0e-4).is_err());
    /// ```
    pub fn new(absolute: f64, relative: f64) -> Result<Self, ConfigError> {
        if !is_valid_tolerance(absolute) {
            log::warn!("rejecting absolute tolerance {absolute}");
            return Err(ConfigError::InvalidTolerance(absolute));
        }
        if !is_valid_tolerance(relative) {
            log::warn!("rejecting relative tolerance {relative}");
            return Err(ConfigError::InvalidRelative(relative));
        }
        Ok(Self { absolute, relative })
    }

    /// Returns true when `a` and `b` are within the absolute tolerance, or
    /// within the relative tolerance scaled by the larger magnitude.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ToleranceConfig;
    /// let cfg = ToleranceConfig::default();
    /// assert!(cfg.accepts(1.0, 1.0 + 1.0e-12));
    /// assert!(!cfg.accepts(1.0, 1.1));
    /// ```
    #[inline]
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= self.absolute || diff <= self.relative * a.abs().max(b.abs())
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            absolute: EPSILON_TOLERANCE,
            relative: RELATIVE_TOLERANCE,
        }
    }
}

/// Unvalidated wire shape of [`ToleranceConfig`]; deserialization goes
/// through [`ToleranceConfig::new`].
#[derive(Deserialize)]
struct RawToleranceConfig {
    absolute: f64,
    relative: f64,
}

impl TryFrom<RawToleranceConfig> for ToleranceConfig {
    type Error = ConfigError;

    fn try_from(raw: RawToleranceConfig) -> Result<Self, Self::Error> {
        Self::new(raw.absolute, raw.relative)
    }
}

fn is_valid_tolerance(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the absolute tolerance is zero, negative or not finite.
    #[error("absolute tolerance must be positive and finite: {0}")]
    InvalidTolerance(f64),
    /// Raised when the relative tolerance is zero, negative or not finite.
    #[error("relative tolerance must be positive and finite: {0}")]
    InvalidRelative(f64),
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal under the default
/// [`ToleranceConfig`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(approx_equal(1.0e12, 1.0e12 + 1.0));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    ToleranceConfig::default().accepts(a, b)
}
