//! Exact geometric primitives built from [`Rational`](crate::rational::Rational) coordinates.
//!
//! - [`Point2D`] / [`Point3D`]: coordinate tuples with text and binary forms.
//! - [`Range`]: a closed interval with `min <= max`.
//! - [`Orthotope2D`]: an axis-aligned box, the product of two ranges.
//!
//! All values are immutable and may be shared freely.

pub mod orthotope;
pub mod point;
pub mod range;

pub use orthotope::Orthotope2D;
pub use point::{Point2D, Point3D};
pub use range::Range;
