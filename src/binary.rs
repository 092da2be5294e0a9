//! Fixed-layout binary encoding for scalar and point values.
//!
//! A composite value is the plain concatenation of its [`Rational`] parts,
//! with no framing or length prefix of its own: one part for a scalar, two for
//! a [`Point2D`], three for a [`Point3D`].
//!
//! [`Rational`]: crate::rational::Rational
//! [`Point2D`]: crate::geometry::Point2D
//! [`Point3D`]: crate::geometry::Point3D

use crate::error::{Error, Result};

/// Binary (de)serialization into a byte buffer.
pub trait BinaryFormat: Sized {
    /// Appends the encoding of `self` to `out`.
    fn encode_into(&self, out: &mut Vec<u8>);

    /// Decodes one value from the front of `input`, advancing the slice past it.
    fn decode_from(input: &mut &[u8]) -> Result<Self>;

    /// Returns the encoding of `self` as a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(&mut out);
        out
    }

    /// Decodes a value that must occupy the whole of `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut cursor = bytes;
        let value = Self::decode_from(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(Error::malformed(format!(
                "{} trailing bytes after value",
                cursor.len()
            )));
        }
        Ok(value)
    }
}

/// Splits `n` bytes off the front of `input`.
pub(crate) fn take<'a>(input: &mut &'a [u8], n: usize) -> Result<&'a [u8]> {
    if input.len() < n {
        return Err(Error::malformed(format!(
            "truncated stream: wanted {} bytes, {} left",
            n,
            input.len()
        )));
    }
    let (head, tail) = input.split_at(n);
    *input = tail;
    Ok(head)
}

pub(crate) fn take_u8(input: &mut &[u8]) -> Result<u8> {
    Ok(take(input, 1)?[0])
}

pub(crate) fn take_u32_le(input: &mut &[u8]) -> Result<u32> {
    let bytes = take(input, 4)?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_advances_cursor() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor: &[u8] = &data;
        assert_eq!(take(&mut cursor, 2).unwrap(), &[1, 2]);
        assert_eq!(cursor, &[3, 4, 5]);
    }

    #[test]
    fn take_reports_truncation() {
        let data = [1u8, 2];
        let mut cursor: &[u8] = &data;
        assert!(matches!(take_u32_le(&mut cursor), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn u32_is_little_endian() {
        let data = [0x01u8, 0x02, 0x00, 0x00];
        let mut cursor: &[u8] = &data;
        assert_eq!(take_u32_le(&mut cursor).unwrap(), 0x0201);
        assert!(cursor.is_empty());
    }
}
