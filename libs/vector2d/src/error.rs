//! # Error Types
//!
//! Vector arithmetic has no failure states: degenerate inputs surface as
//! `NaN` or infinities. The only fallible entry point is parsing the
//! `x:y` text format.

use std::num::ParseFloatError;

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Component of a vector named in a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The first component.
    X,
    /// The second component.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors returned when parsing a [`Vector2D`](crate::Vector2D) from text.
///
/// ## Example
///
/// ```rust
/// use vector2d::{ParseVectorError, Vector2D};
///
/// match "1.5".parse::<Vector2D>() {
///     Err(ParseVectorError::MissingSeparator { input }) => assert_eq!(input, "1.5"),
///     other => unreachable!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseVectorError {
    /// The text has no component separator.
    #[error("missing ':' separator in {input:?}")]
    MissingSeparator {
        /// Text that was parsed.
        input: String,
    },

    /// The text has more than one component separator.
    #[error("more than one ':' separator in {input:?}")]
    ExtraSeparator {
        /// Text that was parsed.
        input: String,
    },

    /// One side of the separator is not a floating-point number.
    #[error("invalid {axis} component {value:?}: {source}")]
    InvalidComponent {
        /// Which component failed.
        axis: Axis,
        /// The offending text, trimmed.
        value: String,
        /// Underlying float parse failure.
        #[source]
        source: ParseFloatError,
    },
}

// =============================================================================
// TESTS
// =============================================================================
