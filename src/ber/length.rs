use crate::error::{BerError, BerResult};
use core::convert::TryFrom;
use nom::Err;

/// Ber Object Length
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Length {
    /// Definite form (X.690 8.1.3.3)
    Definite(usize),
    /// Indefinite form (X.690 8.1.3.6)
    Indefinite,
}

impl Length {
    /// Return true if length is definite and equal to 0
    pub fn is_null(&self) -> bool {
        *self == Length::Definite(0)
    }

    /// Get the declared length, failing for the indefinite form
    #[inline]
    pub fn definite(&self) -> Result<usize, BerError> {
        match self {
            Length::Definite(sz) => Ok(*sz),
            Length::Indefinite => Err(BerError::InvalidLength),
        }
    }
}

impl From<usize> for Length {
    fn from(v: usize) -> Self {
        Length::Definite(v)
    }
}

impl TryFrom<u64> for Length {
    type Error = BerError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let v = usize::try_from(value).or(Err(BerError::InvalidLength))?;
        Ok(Length::Definite(v))
    }
}

/// Big-endian accumulation of long-form length octets
fn bytes_to_u64(s: &[u8]) -> Result<u64, BerError> {
    let mut u: u64 = 0;
    for &c in s {
        if u & 0xff00_0000_0000_0000 != 0 {
            return Err(BerError::InvalidLength);
        }
        u <<= 8;
        u |= u64::from(c);
    }
    Ok(u)
}

/// Read the length octets following an identifier
///
/// The indefinite form is returned as-is; deciding whether it is acceptable is left to the
/// caller.
pub(crate) fn parse_length(i: &[u8]) -> BerResult<'_, Length> {
    let (&first, rem) = match i.split_first() {
        Some(x) => x,
        None => return Err(Err::Error(BerError::TruncatedInput)),
    };
    match first {
        0x80 => Ok((rem, Length::Indefinite)),
        // reserved (8.1.3.5)
        0xff => Err(Err::Error(BerError::InvalidLength)),
        b if b & 0x80 == 0 => Ok((rem, Length::Definite(usize::from(b)))),
        b => {
            let count = usize::from(b & 0x7f);
            custom_check!(rem, rem.len() < count, BerError::TruncatedInput)?;
            let (octets, rem) = rem.split_at(count);
            let len = bytes_to_u64(octets).and_then(Length::try_from);
            match len {
                Ok(len) => Ok((rem, len)),
                Err(e) => Err(Err::Error(e)),
            }
        }
    }
}
