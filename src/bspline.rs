//! Open uniform quadratic b-splines evaluated in matrix form.
//!
//! A spline over `n` control points consists of `n - 2` quadratic segments. Segment `i` is
//! shaped by the control points `i`, `i + 1` and `i + 2` and covers the parameters `[i, i + 1]`.
//! Each segment is evaluated as
//!
//! ```text
//! [x(t), y(t)] = [Px, Py] * M * [u^2, u, 1]^T    with u = t - i
//! ```
//!
//! where `M` is one of three constant basis matrices depending on whether the segment is the
//! first, an interior or the last one.

use crate::decasteljau;
use crate::error::{CurveError, Result};
use crate::matrix::Matrix;
use crate::point::Point;
use crate::sampling::Samples;
use log::trace;
use once_cell::sync::Lazy;

/// Degree of the splines in this module
pub const DEGREE: usize = 2;

/// Number of control points influencing a single segment
const WINDOW: usize = DEGREE + 1;

/// Position of a segment inside a spline
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The segment starting at the first control point
    First,
    /// Any segment neither touching the first nor the last control point
    Interior,
    /// The segment ending at the last control point
    Last,
}

impl Segment {
    /// Classifies the segment starting at control point `index` of a spline with `points`
    /// control points.
    pub fn classify(index: usize, points: usize) -> Segment {
        if index == 0 {
            Segment::First
        } else if index + WINDOW == points {
            Segment::Last
        } else {
            Segment::Interior
        }
    }

    /// Returns the segment's basis matrix.
    pub fn basis(self) -> &'static Matrix<f64> {
        let [first, interior, last] = &*BASIS;
        match self {
            Segment::First => first,
            Segment::Interior => interior,
            Segment::Last => last,
        }
    }
}

static BASIS: Lazy<[Matrix<f64>; 3]> = Lazy::new(|| {
    let half = 1.0 / 2.0;
    [
        Matrix::from_array([[2.0, -4.0, 2.0], [-3.0, 4.0, 0.0], [1.0, 0.0, 0.0]]).scale(half),
        Matrix::from_array([[1.0, -2.0, 1.0], [-2.0, 2.0, 1.0], [1.0, 0.0, 0.0]]).scale(half),
        Matrix::from_array([[1.0, -2.0, 1.0], [-3.0, 2.0, 1.0], [2.0, 0.0, 0.0]]).scale(half),
    ]
});

/// Computes the knot vector of an open b-spline of degree `k` over `n` control points.
///
/// The vector has `k + n + 1` entries. Its first `k + 1` entries are 0, its last `k + 1` entries
/// are `n - k` and the ones in between count up by one.
pub fn knot_vector_open(k: usize, n: usize) -> Result<Vec<usize>> {
    if k > n {
        return Err(CurveError::DegreeExceedsPointCount {
            degree: k,
            points: n,
        });
    }
    let top = n - k;
    Ok((0..k + n + 1).map(|i| i.saturating_sub(k).min(top)).collect())
}

/// Finds the index of the segment containing `t`.
///
/// The index is also the position of the segment's first control point.
/// The last segment is closed, so `t` equal to the last knot still belongs to it.
pub fn segment_index(knots: &[usize], t: f64, k: usize) -> Result<usize> {
    let len = knots.len();
    let out_of_range = || CurveError::Range {
        t,
        min: knots.first().copied().unwrap_or(0) as f64,
        max: knots.last().copied().unwrap_or(0) as f64,
    };
    if len < 2 * k + 2 {
        return Err(out_of_range());
    }
    let knot = |i: usize| knots[i] as f64;

    if knot(0) <= t && t < knot(k + 1) {
        return Ok(0);
    }
    if knot(k + 1) <= t && t < knot(len - k - 2) {
        // The scan never leaves the interior knots, even if they aren't sorted
        let mut i = 1;
        while k + 1 + i < len - k - 2 && knot(k + 1 + i) <= t {
            i += 1;
        }
        return Ok(i);
    }
    if knot(len - k - 2) <= t && t <= knot(len - 1) {
        return Ok(len - 2 * k - 2);
    }
    Err(out_of_range())
}

/// Returns the parameter range `[0, n - 2]` of a spline with `n` control points.
pub fn domain(points: usize) -> Result<(f64, f64)> {
    require_points(points)?;
    let knots = knot_vector_open(DEGREE, points)?;
    Ok((knots[0] as f64, knots[knots.len() - 1] as f64))
}

/// Get the point on the spline at position `t`.
///
/// `t` has to lie inside the spline's [`domain`].
pub fn evaluate(points: &[Point], t: f64) -> Result<Point> {
    require_points(points.len())?;
    let knots = knot_vector_open(DEGREE, points.len())?;
    evaluate_with_knots(points, &knots, t)
}

/// Evaluates the spline with an already computed knot vector.
pub(crate) fn evaluate_with_knots(points: &[Point], knots: &[usize], t: f64) -> Result<Point> {
    let index = segment_index(knots, t, DEGREE)?;

    // A single segment is both first and last, i.e. a plain quadratic bezier curve
    if points.len() == WINDOW {
        trace!("single segment spline, evaluating t = {} as bezier curve", t);
        return decasteljau::evaluate(points, t);
    }

    let segment = Segment::classify(index, points.len());
    trace!("t = {} lies in segment {} ({:?})", t, index, segment);

    let window = &points[index..index + WINDOW];
    let u = t - index as f64;
    let powers = Matrix::from_array([[u.powi(2)], [u], [1.0]]);
    let xs = Matrix::from_array([[window[0].x(), window[1].x(), window[2].x()]]);
    let ys = Matrix::from_array([[window[0].y(), window[1].y(), window[2].y()]]);

    let weights = segment.basis().multiply(&powers)?;
    let x = xs.multiply(&weights)?.element(0, 0)?;
    let y = ys.multiply(&weights)?.element(0, 0)?;
    Ok(Point::new(x, y))
}

/// Lazily discretizes the spline.
///
/// Splines with 3 control points or less are a single bezier curve and are discretized by
/// [`decasteljau::samples`] instead.
pub fn samples(points: &[Point], n: usize) -> Result<Samples<'_>> {
    if points.len() <= WINDOW {
        trace!(
            "discretizing {} control points as bezier curve",
            points.len()
        );
        return decasteljau::samples(points, n);
    }
    let knots = knot_vector_open(DEGREE, points.len())?;
    Samples::bspline(points, knots, n)
}

/// Discretizes the spline into about `n` points, always ending at the spline's last point.
pub fn discretize(points: &[Point], n: usize) -> Result<Vec<Point>> {
    samples(points, n)?.collect()
}

fn require_points(found: usize) -> Result<()> {
    if found < WINDOW {
        return Err(CurveError::NotEnoughPoints {
            required: WINDOW,
            found,
        });
    }
    Ok(())
}
