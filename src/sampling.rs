//! Lazy discretization of a curve into sample points.

use crate::bspline;
use crate::decasteljau;
use crate::error::{CurveError, Result};
use crate::point::Point;
use log::debug;
use std::iter::FusedIterator;

/// Iterator over a curve's sample points
///
/// The parameter is stepped by a fixed amount from the start of the curve's domain while it stays
/// below the domain's end. Accumulating the step rarely lands exactly on the end, so unless the
/// last sample already has `x == 1` the curve is evaluated once more at the end of its domain.
///
/// Samples are computed on demand. A clone taken before iterating walks the same samples again.
#[derive(Clone, Debug)]
pub struct Samples<'a> {
    source: Source<'a>,
    head: Option<Point>,
    t: f64,
    dt: f64,
    end: f64,
    last: Option<Point>,
    finished: bool,
}

#[derive(Clone, Debug)]
enum Source<'a> {
    Bezier(&'a [Point]),
    BSpline { points: &'a [Point], knots: Vec<usize> },
}

impl Source<'_> {
    fn evaluate(&self, t: f64) -> Result<Point> {
        match self {
            Source::Bezier(points) => decasteljau::evaluate(points, t),
            Source::BSpline { points, knots } => bspline::evaluate_with_knots(points, knots, t),
        }
    }
}

impl<'a> Samples<'a> {
    /// Samples a bezier curve over `[0, 1]`.
    ///
    /// The first control point is yielded as is, evaluation starts one step into the curve.
    pub(crate) fn bezier(points: &'a [Point], n: usize) -> Result<Self> {
        let dt = step(n)?;
        Ok(Samples {
            source: Source::Bezier(points),
            head: points.first().copied(),
            t: dt,
            dt,
            end: 1.0,
            last: None,
            finished: false,
        })
    }

    /// Samples a b-spline over its whole knot range.
    pub(crate) fn bspline(points: &'a [Point], knots: Vec<usize>, n: usize) -> Result<Self> {
        let end = knots.last().copied().unwrap_or(0) as f64;
        let dt = step(n)? * end;
        Ok(Samples {
            source: Source::BSpline { points, knots },
            head: None,
            t: 0.0,
            dt,
            end,
            last: None,
            finished: false,
        })
    }

    fn record(&mut self, sample: Result<Point>) -> Result<Point> {
        match sample {
            Ok(point) => self.last = Some(point),
            Err(_) => self.finished = true,
        }
        sample
    }
}

/// Parameter step for `n` samples over a unit interval
fn step(n: usize) -> Result<f64> {
    if n == 0 {
        return Err(CurveError::NoSamples);
    }
    Ok(1.0 / n as f64)
}

impl Iterator for Samples<'_> {
    type Item = Result<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Some(head) = self.head.take() {
            self.last = Some(head);
            return Some(Ok(head));
        }

        if self.t < self.end {
            let t = self.t;
            self.t += self.dt;
            let sample = self.source.evaluate(t);
            return Some(self.record(sample));
        }

        self.finished = true;
        match self.last {
            Some(point) if point.x() == 1.0 => None,
            _ => {
                debug!(
                    "stepping stopped at t = {}, appending the endpoint t = {}",
                    self.t - self.dt,
                    self.end
                );
                Some(self.source.evaluate(self.end))
            }
        }
    }
}

impl FusedIterator for Samples<'_> {}
