//! 2D point used as control point and as curve sample.

use nalgebra::{Scalar, Vector2};
use num::Num;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pair of coordinates
///
/// Points are plain values: they are copied freely and never shared.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T = f64> {
    x: T,
    y: T,
}

impl<T: Copy> Point<T> {
    /// Creates a new point
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Returns the x coordinate
    pub fn x(&self) -> T {
        self.x
    }

    /// Returns the y coordinate
    pub fn y(&self) -> T {
        self.y
    }

    /// Replaces the x coordinate
    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    /// Replaces the y coordinate
    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }
}

impl<T: Copy + Num> Point<T> {
    /// Computes `a * u + b * v` component wise
    pub fn linear_combination(a: Self, b: Self, u: T, v: T) -> Self {
        Point::new(a.x * u + b.x * v, a.y * u + b.y * v)
    }
}

/* Basic arithmetic */
impl<T: Copy + Num> Add for Point<T> {
    type Output = Point<T>;
    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl<T: Copy + Num> Sub for Point<T> {
    type Output = Point<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl<T: Copy + Num> Mul<T> for Point<T> {
    type Output = Point<T>;
    fn mul(self, k: T) -> Self::Output {
        Point::new(self.x * k, self.y * k)
    }
}

/* Conversions from and to tuples, arrays and nalgebra */
impl<T: Copy> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}
impl<T: Copy> From<Point<T>> for (T, T) {
    fn from(p: Point<T>) -> Self {
        (p.x, p.y)
    }
}
impl<T: Copy> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point::new(x, y)
    }
}
impl<T: Copy> From<Point<T>> for [T; 2] {
    fn from(p: Point<T>) -> Self {
        [p.x, p.y]
    }
}
impl<T: Scalar + Copy> From<Vector2<T>> for Point<T> {
    fn from(v: Vector2<T>) -> Self {
        Point::new(v.x, v.y)
    }
}
impl<T: Scalar + Copy> From<Point<T>> for Vector2<T> {
    fn from(p: Point<T>) -> Self {
        Vector2::new(p.x, p.y)
    }
}
