//! Bezier curves of arbitrary degree evaluated with de castlejau's algorithm.
//!
//! A curve is given by its control points, its degree is one lower than their number.

use crate::error::{CurveError, Result};
use crate::point::Point;
use crate::sampling::Samples;
use smallvec::SmallVec;

/// Buffer holding the points of one castlejau step
///
/// Curves up to cubic ones are reduced without touching the heap.
pub type Reduction = SmallVec<[Point; 4]>;

/// Computes `pa * u + pb * v`
pub fn linear_combination(pa: Point, pb: Point, u: f64, v: f64) -> Point {
    Point::linear_combination(pa, pb, u, v)
}

/// Interpolates between `pa` and `pb`.
///
/// `pa` is weighted by `t` and `pb` by `1 - t`, so `t = 1` yields `pa`.
pub fn linear_interpolation(pa: Point, pb: Point, t: f64) -> Point {
    linear_combination(pa, pb, t, 1.0 - t)
}

/// Performs a single castlejau step
///
/// Each pair of neighbouring points is replaced by the point at `t` on the line between them,
/// which leaves one point less than before.
pub fn reduction(points: &[Point], t: f64) -> Reduction {
    points
        .windows(2)
        .map(|pair| linear_interpolation(pair[0], pair[1], 1.0 - t))
        .collect()
}

/// Get the point on the curve at position `t`.
///
/// `t` is expected to be between 0 and 1 but isn't checked.
/// A single control point is a curve of degree 0 and yields itself for every `t`.
pub fn evaluate(points: &[Point], t: f64) -> Result<Point> {
    if points.is_empty() {
        return Err(CurveError::NotEnoughPoints {
            required: 1,
            found: 0,
        });
    }

    let mut points: Reduction = SmallVec::from_slice(points);
    while points.len() > 1 {
        points = reduction(&points, t);
    }
    Ok(points[0])
}

/// Get the y coordinate of the point on the curve at position `t`.
pub fn evaluate_y(points: &[Point], t: f64) -> Result<f64> {
    evaluate(points, t).map(|point| point.y())
}

/// Lazily discretizes the curve into roughly `n` points.
///
/// See [`Samples`] for how the parameter is stepped. The first sample is the first control point.
pub fn samples(points: &[Point], n: usize) -> Result<Samples<'_>> {
    if points.is_empty() {
        return Err(CurveError::NotEnoughPoints {
            required: 1,
            found: 0,
        });
    }
    Samples::bezier(points, n)
}

/// Discretizes the curve into `n` or `n + 1` points, always ending at the curve's last point.
pub fn discretize(points: &[Point], n: usize) -> Result<Vec<Point>> {
    samples(points, n)?.collect()
}
