#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bspline;
pub mod curve;
pub mod decasteljau;
pub mod error;
pub mod matrix;
pub mod point;
pub mod sampling;

pub use crate::curve::{Curve, CurveKind};
pub use crate::error::{CurveError, ErrorKind, Result};
pub use crate::matrix::Matrix;
pub use crate::point::Point;
pub use crate::sampling::Samples;
