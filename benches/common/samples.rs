use nspline::Point;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"({i / 9:.5f}, {random():.5f}),")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    (0.00000, 0.12043),
    (0.11111, 0.87214),
    (0.22222, 0.40981),
    (0.33333, 0.05317),
    (0.44444, 0.66082),
    (0.55556, 0.93540),
    (0.66667, 0.21976),
    (0.77778, 0.48313),
    (0.88889, 0.71129),
    (1.00000, 0.30458),
];

pub static CONTROL_POINTS: Lazy<ControlPoints> = Lazy::new(ControlPoints::new);
#[allow(non_snake_case)]
pub struct ControlPoints {
    pub QUADRATIC: Vec<Point>,
    pub CUBIC: Vec<Point>,
    pub HIGHER: Vec<Point>,
}
impl ControlPoints {
    pub fn new() -> ControlPoints {
        let pick = |indices: &[usize]| -> Vec<Point> {
            indices.iter().map(|&i| Point::from(POINTS[i])).collect()
        };
        ControlPoints {
            QUADRATIC: pick(&[0, 4, 9]),
            CUBIC:     pick(&[0, 3, 6, 9]),
            HIGHER:    pick(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Point>> {
        [&self.QUADRATIC, &self.CUBIC, &self.HIGHER].into_iter()
    }
}
