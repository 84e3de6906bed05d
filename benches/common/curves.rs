use crate::common::samples::CONTROL_POINTS;
use criterion::{black_box, Criterion};
use nspline::{bspline, decasteljau};

pub fn castlejau_eval(c: &mut Criterion) {
    c.bench_function("castlejau_eval", |b| {
        for points in CONTROL_POINTS.iter() {
            b.iter(|| black_box(decasteljau::evaluate(points, 0.5)))
        }
    });
}

pub fn bspline_eval(c: &mut Criterion) {
    c.bench_function("bspline_eval", |b| {
        for points in CONTROL_POINTS.iter() {
            b.iter(|| black_box(bspline::evaluate(points, 0.5)))
        }
    });
}

pub fn discretize(c: &mut Criterion) {
    c.bench_function("discretize", |b| {
        for points in CONTROL_POINTS.iter() {
            b.iter(|| black_box(bspline::discretize(points, 256)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    castlejau_eval(c);
    bspline_eval(c);
    discretize(c);
}
