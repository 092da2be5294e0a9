//! Exact points in two and three dimensions.
//!
//! Text form is the comma-joined [`Rational`] text of each coordinate with no
//! whitespace (`"3/4,-2"`); binary form is the concatenated [`BinaryFormat`]
//! encodings of the coordinates.

use crate::binary::BinaryFormat;
use crate::error::{Error, Result};
use crate::rational::Rational;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A point in the plane.
///
/// Ordering is lexicographic by `(x, y)`; graphs rely on it to give
/// undirected edges a canonical orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point2D {
    x: Rational,
    y: Rational,
}

impl Point2D {
    #[inline]
    pub fn new(x: Rational, y: Rational) -> Self {
        Self { x, y }
    }

    /// The point `(0, 0)`.
    pub fn origin() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }

    #[inline]
    pub fn x(&self) -> &Rational {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Rational {
        &self.y
    }

    /// Squared Euclidean distance between two points; exact, unlike the distance itself.
    pub fn quadrance(a: &Point2D, b: &Point2D) -> Rational {
        (&a.x - &b.x).squared() + (&a.y - &b.y).squared()
    }
}

impl<X: Into<Rational>, Y: Into<Rational>> From<(X, Y)> for Point2D {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x.into(), y.into())
    }
}

impl Ord for Point2D {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then_with(|| self.y.cmp(&other.y))
    }
}

impl PartialOrd for Point2D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An inert three-dimensional point. No algorithm in the crate manipulates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point3D {
    x: Rational,
    y: Rational,
    z: Rational,
}

impl Point3D {
    #[inline]
    pub fn new(x: Rational, y: Rational, z: Rational) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(Rational::zero(), Rational::zero(), Rational::zero())
    }

    #[inline]
    pub fn x(&self) -> &Rational {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Rational {
        &self.y
    }

    #[inline]
    pub fn z(&self) -> &Rational {
        &self.z
    }
}

// ----------------------------------------------------------------------------
// Text form
// ----------------------------------------------------------------------------

/// Splits `text` into exactly `N` comma-separated rationals.
fn parse_components<const N: usize>(text: &str) -> Result<[Rational; N]> {
    if text.chars().any(char::is_whitespace) {
        return Err(Error::malformed(format!("whitespace in point {:?}", text)));
    }
    let tokens: Vec<&str> = text.split(',').collect();
    if tokens.len() != N {
        return Err(Error::malformed(format!(
            "expected {} coordinates in {:?}, found {}",
            N,
            text,
            tokens.len()
        )));
    }
    let parsed = tokens
        .into_iter()
        .map(str::parse::<Rational>)
        .collect::<Result<Vec<_>>>()?;
    parsed
        .try_into()
        .map_err(|_| Error::malformed(format!("invalid point {:?}", text)))
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point2D {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y] = parse_components::<2>(s)?;
        Ok(Self::new(x, y))
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

impl FromStr for Point3D {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y, z] = parse_components::<3>(s)?;
        Ok(Self::new(x, y, z))
    }
}

macro_rules! serde_via_text {
    ($t:ty) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_text!(Point2D);
serde_via_text!(Point3D);

// ----------------------------------------------------------------------------
// Binary form
// ----------------------------------------------------------------------------

impl BinaryFormat for Point2D {
    fn encode_into(&self, out: &mut Vec<u8>) {
        self.x.encode_into(out);
        self.y.encode_into(out);
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self> {
        let x = Rational::decode_from(input)?;
        let y = Rational::decode_from(input)?;
        Ok(Self::new(x, y))
    }
}

impl BinaryFormat for Point3D {
    fn encode_into(&self, out: &mut Vec<u8>) {
        self.x.encode_into(out);
        self.y.encode_into(out);
        self.z.encode_into(out);
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self> {
        let x = Rational::decode_from(input)?;
        let y = Rational::decode_from(input)?;
        let z = Rational::decode_from(input)?;
        Ok(Self::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn text_round_trip() {
        let p = Point2D::new(r(3, 4), r(-2, 1));
        assert_eq!(p.to_string(), "3/4,-2");
        assert_eq!("3/4,-2".parse::<Point2D>().unwrap(), p);

        let q = Point3D::new(r(1, 1), r(-1, 3), r(0, 1));
        assert_eq!(q.to_string(), "1,-1/3,0");
        assert_eq!(q.to_string().parse::<Point3D>().unwrap(), q);
    }

    #[test]
    fn text_rejects_malformed() {
        for bad in ["", "1", "1,2,3", "1, 2", " 1,2", "1,2 ", "1;2", "1,", ",2", "1,x"] {
            assert!(
                matches!(bad.parse::<Point2D>(), Err(Error::MalformedInput(_))),
                "{:?} should be rejected",
                bad
            );
        }
        assert!("1,2".parse::<Point3D>().is_err());
        assert!("1,2,3,4".parse::<Point3D>().is_err());
    }

    #[test]
    fn binary_round_trip() {
        let p = Point2D::new(r(-7, 3), r(1_000_000_007, 2));
        let bytes = p.to_bytes();
        assert_eq!(bytes.len(), r(-7, 3).to_bytes().len() + r(1_000_000_007, 2).to_bytes().len());
        assert_eq!(Point2D::from_bytes(&bytes).unwrap(), p);

        let q = Point3D::new(r(1, 2), r(0, 1), r(-5, 1));
        assert_eq!(Point3D::from_bytes(&q.to_bytes()).unwrap(), q);
    }

    #[test]
    fn binary_is_plain_concatenation() {
        let p = Point2D::from((1, 2));
        let mut expected = Rational::from(1).to_bytes();
        expected.extend(Rational::from(2).to_bytes());
        assert_eq!(p.to_bytes(), expected);

        // A 2D encoding is too short for a 3D point.
        assert!(matches!(Point3D::from_bytes(&expected), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn lexicographic_order() {
        let a = Point2D::from((0, 5));
        let b = Point2D::from((1, 0));
        let c = Point2D::from((1, 2));
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn quadrance_is_exact() {
        let a = Point2D::new(r(1, 2), r(0, 1));
        let b = Point2D::new(r(0, 1), r(1, 3));
        assert_eq!(Point2D::quadrance(&a, &b), r(13, 36));
        assert_eq!(Point2D::quadrance(&a, &a), Rational::zero());
    }

    #[test]
    fn origin_is_zero_zero() {
        assert_eq!(Point2D::origin(), Point2D::from((0, 0)));
        assert_eq!(Point2D::origin().to_string(), "0,0");
    }
}
