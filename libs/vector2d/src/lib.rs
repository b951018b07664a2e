//! # vector2d
//!
//! An immutable two-dimensional vector value type and the pure operations
//! defined on it: arithmetic, normalization, rotation, interpolation,
//! clamping, range mapping and reflection.
//!
//! ## Usage
//!
//! ```rust
//! use vector2d::Vector2D;
//!
//! let position = Vector2D::new(3.0, 4.0);
//! let velocity = Vector2D::from_radians(0.0).multiply_scalar(2.0);
//!
//! let next = position.add(velocity);
//! assert_eq!(next, Vector2D::new(5.0, 4.0));
//! assert_eq!(next.to_string(), "5:4");
//! assert_eq!("5:4".parse::<Vector2D>(), Ok(next));
//! ```
//!
//! ## Design Principles
//!
//! - **Value Semantics**: every operation returns a new vector
//! - **Total Functions**: degenerate input yields `NaN`/infinity, never a panic
//! - **Established Formulas**: `distance`, `rotate` and `angle_between` keep
//!   their historical definitions; corrected forms have their own names
//! - **Centralized Tolerances**: approximate comparisons read the `config` crate

pub mod error;
pub mod scalar;
pub mod vector;

pub use error::{Axis, ParseVectorError};
pub use vector::Vector2D;
