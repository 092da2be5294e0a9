//! Axis-aligned bounding boxes in the plane.

use super::point::Point2D;
use super::range::Range;
use crate::error::{Error, Result};
use crate::rational::Rational;
use serde::{Deserialize, Serialize};

/// A closed axis-aligned rectangle: the product of an x-interval and a y-interval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orthotope2D {
    x: Range,
    y: Range,
}

impl Orthotope2D {
    #[inline]
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Builds the box from its corner coordinates.
    ///
    /// Fails with [`Error::InvalidRange`] if either axis is inverted.
    pub fn from_bounds(
        min_x: Rational,
        min_y: Rational,
        max_x: Rational,
        max_y: Rational,
    ) -> Result<Self> {
        Ok(Self::new(Range::new(min_x, max_x)?, Range::new(min_y, max_y)?))
    }

    /// The tightest box containing every point in `points`.
    ///
    /// Walks the input once, tracking running minima and maxima per axis.
    /// Fails with [`Error::InvalidArgument`] on an empty sequence.
    pub fn from_points<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| Error::InvalidArgument("point set is empty".to_string()))?;

        let mut min_x = first.x();
        let mut max_x = first.x();
        let mut min_y = first.y();
        let mut max_y = first.y();
        for point in iter {
            min_x = min_x.min(point.x());
            max_x = max_x.max(point.x());
            min_y = min_y.min(point.y());
            max_y = max_y.max(point.y());
        }
        Self::from_bounds(min_x.clone(), min_y.clone(), max_x.clone(), max_y.clone())
    }

    #[inline]
    pub fn x(&self) -> &Range {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Range {
        &self.y
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.x.midpoint(), self.y.midpoint())
    }

    /// Inclusive on every edge of the box.
    pub fn contains(&self, point: &Point2D) -> bool {
        self.x.contains(point.x()) && self.y.contains(point.y())
    }

    /// Pads both axes by `thickness`; see [`Range::padded`].
    pub fn padded(&self, thickness: &Rational) -> Result<Self> {
        Ok(Self::new(self.x.padded(thickness)?, self.y.padded(thickness)?))
    }

    /// Scales both axes about the center; see [`Range::scaled`].
    pub fn scaled(&self, factor: &Rational) -> Result<Self> {
        Ok(Self::new(self.x.scaled(factor)?, self.y.scaled(factor)?))
    }

    /// Same extent, moved so that its center is `center`.
    pub fn centered_at(&self, center: &Point2D) -> Self {
        Self::new(self.x.centered_at(center.x()), self.y.centered_at(center.y()))
    }

    pub fn intersects(&self, other: &Orthotope2D) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }
}
