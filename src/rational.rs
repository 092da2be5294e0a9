//! Exact, arbitrarily large signed rational numbers.
//!
//! Every coordinate and weight in the crate is a [`Rational`], so geometric
//! predicates never suffer from floating-point rounding.
//!
//! # Invariants
//! - The denominator is strictly positive.
//! - `gcd(|numerator|, denominator) == 1`; zero is stored as `0/1`.
//!
//! Because the representation is canonical, structural equality and hashing
//! coincide with numeric equality. Reduction and arithmetic come from
//! [`num_rational::BigRational`]; this wrapper adds the strict text grammar,
//! the binary layout and division that reports a zero divisor as an error.
//!
//! # Citations
//! - Knuth, "The Art of Computer Programming", Vol. 2, Section 4.5.1 (1997) – fraction arithmetic
//! - Euclid, "Elements", Book VII, Propositions 1–2 – greatest common divisor

use crate::binary::{self, BinaryFormat};
use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// An exact fraction kept in lowest terms.
///
/// Values are immutable; arithmetic always yields a freshly reduced result.
/// Division is only offered through [`Rational::checked_div`] so that a zero
/// divisor is always reported as [`Error::DivisionByZero`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    /// Creates `numer / denom`, normalizing sign and dividing out the gcd.
    ///
    /// Fails with [`Error::DivisionByZero`] when `denom` is zero.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(BigRational::new(numer.into(), denom)))
    }

    /// Creates a whole number.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    #[inline]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self(BigRational::one())
    }

    #[inline]
    pub fn minus_one() -> Self {
        Self::from_integer(-1)
    }

    /// The underlying `num-rational` value.
    #[inline]
    pub fn as_big_rational(&self) -> &BigRational {
        &self.0
    }

    /// Returns the numerator (carries the sign).
    #[inline]
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Returns the denominator (always positive).
    #[inline]
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns -1, 0 or 1 according to the sign of the value.
    pub fn signum(&self) -> i32 {
        match self.numer().sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The value multiplied by itself.
    pub fn squared(&self) -> Self {
        Self(&self.0 * &self.0)
    }

    /// Half of the value; used for midpoints.
    pub fn halved(&self) -> Self {
        Self(&self.0 / BigRational::from_integer(BigInt::from(2u32)))
    }

    /// The multiplicative inverse; zero has none.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0.recip()))
    }

    /// Exact division. Fails with [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Rational) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    /// Largest whole number not greater than the value.
    pub fn floor(&self) -> Self {
        Self(self.0.floor())
    }

    /// Smallest whole number not less than the value.
    pub fn ceil(&self) -> Self {
        Self(self.0.ceil())
    }

    /// Nearest whole number; exact halves round to the even neighbour.
    pub fn round(&self) -> Self {
        let floor = self.0.floor();
        let twice_fraction = (&self.0 - &floor) * BigRational::from_integer(BigInt::from(2u32));
        let round_up = match twice_fraction.cmp(&BigRational::one()) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => floor.to_integer().is_odd(),
        };
        if round_up {
            Self(floor + BigRational::one())
        } else {
            Self(floor)
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl<'a, 'b> $imp<&'b Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'b Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }

        impl<'a> $imp<&'a Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: &'a Rational) -> Rational {
                Rational(self.0.$method(&rhs.0))
            }
        }

        impl<'a> $imp<Rational> for &'a Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                Rational((&self.0).$method(rhs.0))
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        Rational(iter.map(|x| x.0).sum())
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        Rational(iter.map(|x| &x.0).sum())
    }
}

macro_rules! from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                #[inline]
                fn from(value: $t) -> Self {
                    Rational::from_integer(value)
                }
            }
        )*
    };
}

from_primitive!(i32, i64, u32, u64);

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Rational(value)
    }
}

impl From<Rational> for BigRational {
    fn from(value: Rational) -> Self {
        value.0
    }
}

// ----------------------------------------------------------------------------
// Text form
// ----------------------------------------------------------------------------

impl fmt::Display for Rational {
    /// `numerator/denominator`, or just the numerator for whole numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

fn parse_digits(text: &str, whole: &str) -> Result<BigUint> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed(format!("invalid rational {:?}", whole)));
    }
    BigUint::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| Error::malformed(format!("invalid rational {:?}", whole)))
}

impl FromStr for Rational {
    type Err = Error;

    /// Accepts `-?[0-9]+(/[0-9]+)?` with a non-zero denominator and nothing else.
    fn from_str(s: &str) -> Result<Self> {
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, s),
        };
        let (numer_text, denom_text) = match body.split_once('/') {
            Some((n, d)) => (n, Some(d)),
            None => (body, None),
        };
        let numer = BigInt::from_biguint(sign, parse_digits(numer_text, s)?);
        let denom = match denom_text {
            Some(d) => {
                let d = parse_digits(d, s)?;
                if d.is_zero() {
                    return Err(Error::malformed(format!("zero denominator in {:?}", s)));
                }
                BigInt::from(d)
            }
            None => BigInt::one(),
        };
        Ok(Self(BigRational::new(numer, denom)))
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ----------------------------------------------------------------------------
// Binary form
// ----------------------------------------------------------------------------

const SIGN_NON_NEGATIVE: u8 = 0;
const SIGN_NEGATIVE: u8 = 1;

impl BinaryFormat for Rational {
    /// Layout: `sign:u8 || numer_len:u32 LE || denom_len:u32 LE || numer magnitude || denom`,
    /// magnitudes as little-endian bytes.
    fn encode_into(&self, out: &mut Vec<u8>) {
        let sign = if self.is_negative() {
            SIGN_NEGATIVE
        } else {
            SIGN_NON_NEGATIVE
        };
        let numer_bytes = self.numer().magnitude().to_bytes_le();
        let denom_bytes = self.denom().magnitude().to_bytes_le();
        out.reserve(9 + numer_bytes.len() + denom_bytes.len());
        out.push(sign);
        out.extend_from_slice(&(numer_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(&(denom_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(&numer_bytes);
        out.extend_from_slice(&denom_bytes);
    }

    fn decode_from(input: &mut &[u8]) -> Result<Self> {
        let sign = match binary::take_u8(input)? {
            SIGN_NON_NEGATIVE => Sign::Plus,
            SIGN_NEGATIVE => Sign::Minus,
            other => return Err(Error::malformed(format!("invalid sign byte {:#04x}", other))),
        };
        let numer_len = binary::take_u32_le(input)? as usize;
        let denom_len = binary::take_u32_le(input)? as usize;
        if numer_len == 0 || denom_len == 0 {
            return Err(Error::malformed("zero-length magnitude"));
        }
        let numer = BigUint::from_bytes_le(binary::take(input, numer_len)?);
        let denom = BigUint::from_bytes_le(binary::take(input, denom_len)?);
        if denom.is_zero() {
            return Err(Error::malformed("zero denominator"));
        }
        if sign == Sign::Minus && numer.is_zero() {
            return Err(Error::malformed("negative zero"));
        }
        Ok(Self(BigRational::new(
            BigInt::from_biguint(sign, numer),
            BigInt::from(denom),
        )))
    }
}
