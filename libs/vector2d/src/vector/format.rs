//! The `x:y` text format.
//!
//! Components are written with the default `f64` `Display`, so `1.5` and
//! `-2.0` render as `1.5:-2`. Parsing accepts anything `f64::from_str`
//! accepts on each side of a single separator.

use std::fmt;
use std::str::FromStr;

use config::constants::COMPONENT_SEPARATOR;

use super::Vector2D;
use crate::error::{Axis, ParseVectorError};

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.x, COMPONENT_SEPARATOR, self.y)
    }
}

impl FromStr for Vector2D {
    type Err = ParseVectorError;

    /// Parses `"<x>:<y>"`, trimming whitespace around each component.
    ///
    /// # Examples
    /// ```
    /// use vector2d::Vector2D;
    /// let v: Vector2D = "1.5:-2".parse().expect("valid vector");
    /// assert_eq!(v, Vector2D::new(1.5, -2.0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x_text, y_text) = s.split_once(COMPONENT_SEPARATOR).ok_or_else(|| {
            log::debug!("no separator in vector text {s:?}");
            ParseVectorError::MissingSeparator {
                input: s.to_string(),
            }
        })?;
        if y_text.contains(COMPONENT_SEPARATOR) {
            log::debug!("extra separator in vector text {s:?}");
            return Err(ParseVectorError::ExtraSeparator {
                input: s.to_string(),
            });
        }
        Ok(Self::new(
            parse_component(Axis::X, x_text)?,
            parse_component(Axis::Y, y_text)?,
        ))
    }
}

fn parse_component(axis: Axis, text: &str) -> Result<f64, ParseVectorError> {
    let value = text.trim();
    value.parse::<f64>().map_err(|source| {
        log::debug!("invalid {axis} component {value:?}: {source}");
        ParseVectorError::InvalidComponent {
            axis,
            value: value.to_string(),
            source,
        }
    })
}
