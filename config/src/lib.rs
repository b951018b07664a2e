//! # Config Crate
//!
//! Centralized configuration constants for the vector2d workspace.
//! Every tolerance, separator and comparison default lives here so the
//! vector library never scatters literals through its operations.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, ToleranceConfig, EPSILON_TOLERANCE};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 1e-10;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//! assert!(approx_equal(value, 0.0));
//!
//! // Build a validated tolerance snapshot for looser comparisons
//! let loose = ToleranceConfig::new(1e-3, 1e-6).expect("valid tolerance");
//! assert_eq!(loose.absolute, 1e-3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `ToleranceConfig` can only hold usable values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
