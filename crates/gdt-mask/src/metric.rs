//! Metric identifiers and their per-step cost tables.

use gdt_core::TransformError;
use std::fmt;
use std::str::FromStr;

/// A discrete chamfer distance metric.
///
/// Parsed from either the short identifiers `city`, `chess`, `borges`,
/// `quasi` or the long names `cityblock`, `chessboard`, `borgefors`,
/// `quasi-euclidean`. Matching is exact.
///
/// # Examples
///
/// ```
/// use gdt_mask::Metric;
///
/// let m: Metric = "chess".parse().unwrap();
/// assert_eq!(m, Metric::Chessboard);
/// assert_eq!(m.to_string(), "chess");
/// assert!("euclid".parse::<Metric>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Axis steps only, unit cost (L1 / Manhattan).
    Cityblock,
    /// Axis and diagonal steps, unit cost (L∞).
    Chessboard,
    /// Borgefors integer chamfer weights: 3 / 4 / 5.
    Borgefors,
    /// Euclidean step lengths: 1 / √2 / √3.
    QuasiEuclidean,
}

impl Metric {
    /// Every metric, in declaration order.
    pub const ALL: [Metric; 4] = [
        Metric::Cityblock,
        Metric::Chessboard,
        Metric::Borgefors,
        Metric::QuasiEuclidean,
    ];

    /// Short identifier: `city`, `chess`, `borges` or `quasi`.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Cityblock => "city",
            Self::Chessboard => "chess",
            Self::Borgefors => "borges",
            Self::QuasiEuclidean => "quasi",
        }
    }

    /// Long name: `cityblock`, `chessboard`, `borgefors` or `quasi-euclidean`.
    pub fn long_name(self) -> &'static str {
        match self {
            Self::Cityblock => "cityblock",
            Self::Chessboard => "chessboard",
            Self::Borgefors => "borgefors",
            Self::QuasiEuclidean => "quasi-euclidean",
        }
    }

    /// Resolve an identifier (short or long name).
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::UnknownMetric`] for any other string.
    pub fn parse(name: &str) -> Result<Self, TransformError> {
        Self::ALL
            .into_iter()
            .find(|m| m.short_name() == name || m.long_name() == name)
            .ok_or_else(|| TransformError::UnknownMetric {
                name: name.to_string(),
            })
    }

    /// Cost of a step that moves by one along `axes` axes at once, or
    /// `None` if the metric has no such step.
    ///
    /// `axes == 1` is an axis step, `2` a face diagonal, `3` a corner
    /// diagonal.
    pub fn step_cost(self, axes: usize) -> Option<f64> {
        match (self, axes) {
            (Self::Cityblock, 1) => Some(1.0),
            (Self::Cityblock, _) => None,
            (Self::Chessboard, 1..=3) => Some(1.0),
            (Self::Borgefors, 1) => Some(3.0),
            (Self::Borgefors, 2) => Some(4.0),
            (Self::Borgefors, 3) => Some(5.0),
            (Self::QuasiEuclidean, 1) => Some(1.0),
            (Self::QuasiEuclidean, 2) => Some(std::f64::consts::SQRT_2),
            (Self::QuasiEuclidean, 3) => Some(3f64.sqrt()),
            _ => None,
        }
    }

    /// Whether every step cost is a whole number, so that convergence can
    /// be checked exactly.
    pub fn is_integral(self) -> bool {
        !matches!(self, Self::QuasiEuclidean)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Metric {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
