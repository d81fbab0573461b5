//! Interpolation transforms

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Per-axis interpolation strategy
///
/// A transform maps two scalar endpoints and a normalized time value to an
/// interpolated scalar. Arithmetic runs in `f64`; the result is truncated
/// toward zero back to `i32`, matching legacy integer pixel rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transform {
    /// Uniform interpolation: `x1 + t * (x2 - x1)`.
    #[default]
    Linear,
    /// Ease-in: `x1 + t² * (x2 - x1)`. Starts at x1 like linear,
    /// accelerates toward x2 as t grows.
    Quadratic,
}

impl Transform {
    /// Interpolate one coordinate axis at time `t`.
    ///
    /// Pure and total: any finite `t` yields a value. At t = 0 the result is
    /// exactly `x1`; the morph generator never samples t = 1, so `x2` is
    /// approached but never emitted. The `x1 + s * (x2 - x1)` form is exact
    /// whenever `x1 == x2`, for every `t` — the two-product form is not, and
    /// a truncated 9.999… would lose a whole pixel.
    pub fn apply(&self, x1: i32, x2: i32, t: f64) -> i32 {
        let (a, b) = (x1 as f64, x2 as f64);
        let value = match self {
            Transform::Linear => a + t * (b - a),
            Transform::Quadratic => a + t * t * (b - a),
        };
        value as i32
    }

    /// Strategy name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Linear => "linear",
            Transform::Quadratic => "quadratic",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a transform name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown transform `{0}`, expected `linear` or `quadratic`")]
pub struct ParseTransformError(String);

impl FromStr for Transform {
    type Err = ParseTransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Transform::Linear),
            "quadratic" => Ok(Transform::Quadratic),
            other => Err(ParseTransformError(other.to_owned())),
        }
    }
}
