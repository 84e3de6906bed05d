//! Single entry point for both kinds of curves.
//!
//! [`Curve`] pairs a set of control points with the way they are interpreted. It is what a
//! caller holding user supplied control points keeps around and repeatedly discretizes.

use crate::bspline;
use crate::decasteljau;
use crate::error::{CurveError, Result};
use crate::point::Point;
use crate::sampling::Samples;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How control points are turned into a curve
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CurveKind {
    /// A single bezier curve whose degree is one lower than its number of control points
    Bezier,

    /// An open uniform quadratic b-spline
    #[cfg_attr(feature = "serde", serde(rename = "bspline"))]
    OpenUniformQuadraticBSpline,
}

impl CurveKind {
    /// Minimal number of control points a curve of this kind needs
    pub fn min_points(self) -> usize {
        match self {
            CurveKind::Bezier => 1,
            CurveKind::OpenUniformQuadraticBSpline => bspline::DEGREE + 1,
        }
    }
}

/// Control points together with their interpretation
///
/// The number of control points is checked once on construction, so evaluating a curve can only
/// fail for a parameter outside of its [`domain`](Curve::domain).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawCurve")
)]
pub struct Curve {
    kind: CurveKind,
    points: Vec<Point>,
}

impl Curve {
    /// Creates a curve after checking it has enough control points.
    pub fn new(kind: CurveKind, points: Vec<Point>) -> Result<Self> {
        let required = kind.min_points();
        if points.len() < required {
            return Err(CurveError::NotEnoughPoints {
                required,
                found: points.len(),
            });
        }
        Ok(Curve { kind, points })
    }

    /// Creates a bezier curve.
    pub fn bezier(points: Vec<Point>) -> Result<Self> {
        Curve::new(CurveKind::Bezier, points)
    }

    /// Creates an open uniform quadratic b-spline.
    pub fn bspline(points: Vec<Point>) -> Result<Self> {
        Curve::new(CurveKind::OpenUniformQuadraticBSpline, points)
    }

    /// Returns how the control points are interpreted
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Returns the control points
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the polynomial degree of the curve's segments
    pub fn degree(&self) -> usize {
        match self.kind {
            CurveKind::Bezier => self.points.len() - 1,
            CurveKind::OpenUniformQuadraticBSpline => bspline::DEGREE,
        }
    }

    /// Returns the range of valid parameters
    ///
    /// Bezier curves are defined over `[0, 1]`, b-splines over one unit per segment.
    pub fn domain(&self) -> (f64, f64) {
        match self.kind {
            CurveKind::Bezier => (0.0, 1.0),
            CurveKind::OpenUniformQuadraticBSpline => {
                (0.0, (self.points.len() - bspline::DEGREE) as f64)
            }
        }
    }

    /// Get the point on the curve at position `t`.
    pub fn evaluate(&self, t: f64) -> Result<Point> {
        match self.kind {
            CurveKind::Bezier => decasteljau::evaluate(&self.points, t),
            CurveKind::OpenUniformQuadraticBSpline => bspline::evaluate(&self.points, t),
        }
    }

    /// Lazily discretizes the curve.
    pub fn samples(&self, n: usize) -> Result<Samples<'_>> {
        match self.kind {
            CurveKind::Bezier => decasteljau::samples(&self.points, n),
            CurveKind::OpenUniformQuadraticBSpline => bspline::samples(&self.points, n),
        }
    }

    /// Discretizes the curve into about `n` points.
    pub fn discretize(&self, n: usize) -> Result<Vec<Point>> {
        self.samples(n)?.collect()
    }
}

/// Unchecked mirror of [`Curve`] used to validate deserialized curves
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCurve {
    kind: CurveKind,
    points: Vec<Point>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCurve> for Curve {
    type Error = CurveError;

    fn try_from(raw: RawCurve) -> Result<Self> {
        Curve::new(raw.kind, raw.points)
    }
}
