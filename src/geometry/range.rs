//! Closed one-dimensional intervals.

use crate::error::{Error, Result};
use crate::rational::Rational;
use serde::{Deserialize, Serialize};

/// The closed interval `[min, max]`.
///
/// # Invariant
/// - `min <= max`; every constructor and transform checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr", into = "RangeRepr")]
pub struct Range {
    min: Rational,
    max: Rational,
}

impl Range {
    /// Creates `[min, max]`; fails with [`Error::InvalidRange`] when `min > max`.
    pub fn new(min: Rational, max: Rational) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidRange(format!(
                "min {} is greater than max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> &Rational {
        &self.min
    }

    #[inline]
    pub fn max(&self) -> &Rational {
        &self.max
    }

    /// The value halfway between `min` and `max`.
    pub fn midpoint(&self) -> Rational {
        (&self.min + &self.max).halved()
    }

    /// `max - min`; never negative.
    pub fn size(&self) -> Rational {
        &self.max - &self.min
    }

    /// Inclusive membership test.
    pub fn contains(&self, value: &Rational) -> bool {
        &self.min <= value && value <= &self.max
    }

    /// Returns `[min - thickness, max + thickness]`.
    ///
    /// A negative thickness shrinks the interval; shrinking by more than half
    /// its size fails with [`Error::InvalidRange`].
    pub fn padded(&self, thickness: &Rational) -> Result<Self> {
        Self::new(&self.min - thickness, &self.max + thickness)
    }

    /// Returns an interval with the same midpoint and `size * factor` size.
    ///
    /// Fails with [`Error::InvalidArgument`] when `factor` is negative.
    pub fn scaled(&self, factor: &Rational) -> Result<Self> {
        if factor.is_negative() {
            return Err(Error::InvalidArgument(format!(
                "scale factor {} is negative",
                factor
            )));
        }
        let midpoint = self.midpoint();
        let delta = (self.size() * factor).halved();
        Self::new(&midpoint - &delta, midpoint + delta)
    }

    /// Returns an interval of the same size whose midpoint is `center`.
    pub fn centered_at(&self, center: &Rational) -> Self {
        let delta = center - self.midpoint();
        Self {
            min: &self.min + &delta,
            max: &self.max + &delta,
        }
    }

    /// True when the two closed intervals share at least one value.
    pub fn intersects(&self, other: &Range) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// Unchecked mirror used so deserialization goes through [`Range::new`].
#[derive(Serialize, Deserialize)]
struct RangeRepr {
    min: Rational,
    max: Rational,
}

impl TryFrom<RangeRepr> for Range {
    type Error = Error;

    fn try_from(repr: RangeRepr) -> Result<Self> {
        Range::new(repr.min, repr.max)
    }
}

impl From<Range> for RangeRepr {
    fn from(range: Range) -> Self {
        RangeRepr {
            min: range.min,
            max: range.max,
        }
    }
}
