use super::{read_header, Class, Length, Tag};
use crate::error::{BerError, BerResult};
use nom::bytes::complete::take;
use std::borrow::Cow;
use tracing::debug;

/// Maximum recursion limit
pub const MAX_RECURSION: usize = 256;

/// Encoding rules used when decoding lengths
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// Basic Encoding Rules: indefinite lengths are accepted on constructed elements
    Ber,
    /// Distinguished Encoding Rules: indefinite lengths are rejected
    Der,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Ber
    }
}

/// One decoded TLV element
///
/// The content is borrowed from the input buffer. For an indefinite-length element, the
/// content runs up to and including the terminating end-of-contents marker, so that
/// `header_len + content_len()` is always the number of bytes the element occupies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    pub class: Class,
    pub tag: Tag,
    pub constructed: bool,
    /// Length as encoded in the header
    pub length: Length,
    /// Number of identifier and length octets
    pub header_len: usize,
    pub content: &'a [u8],
}

impl<'a> Element<'a> {
    /// Number of bytes following the header
    #[inline]
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Number of bytes the element occupies in its buffer
    #[inline]
    pub fn total_len(&self) -> usize {
        self.header_len + self.content.len()
    }

    #[inline]
    pub fn is_indefinite(&self) -> bool {
        self.length == Length::Indefinite
    }

    pub fn description(&self) -> Cow<'static, str> {
        self.tag.description()
    }
}

/// Read one element, using BER rules and the default recursion limit
///
/// ```rust
/// use ber_dump::ber::{parse_element, Tag};
///
/// let bytes = [0x02, 0x01, 0x05, 0xff];
/// let (rem, elt) = parse_element(&bytes).expect("parsing failed");
/// assert_eq!(rem, &[0xff]);
/// assert_eq!(elt.tag, Tag::Integer);
/// assert_eq!(elt.header_len, 2);
/// assert_eq!(elt.content, &[0x05]);
/// ```
#[inline]
pub fn parse_element(i: &[u8]) -> BerResult<'_> {
    read_element(i, Encoding::Ber, 0, MAX_RECURSION)
}

/// Read one element, rejecting indefinite lengths
#[inline]
pub fn parse_der_element(i: &[u8]) -> BerResult<'_> {
    read_element(i, Encoding::Der, 0, MAX_RECURSION)
}

/// Read one element located at nesting level `depth`
///
/// Only the header is interpreted: the content is returned as a slice, and constructed
/// elements are not descended into, except to find the end of an indefinite-length
/// element. That scan fails with `NestingTooDeep` if nested elements go beyond `max_depth`.
///
/// Errors:
/// - `EmptyInput` if `i` is empty
/// - `TruncatedInput` if the tag, length or content go past the end of `i`
/// - `InvalidLength` for reserved or oversized lengths, an indefinite length on a primitive
///   element, or any indefinite length in DER mode
/// - `UnsupportedTagForm` if the high-tag-number form is too long
pub fn read_element(
    i: &[u8],
    encoding: Encoding,
    depth: usize,
    max_depth: usize,
) -> BerResult<'_> {
    let (rem, hdr) = read_header(i)?;
    let header_len = i.len() - rem.len();
    let (rem, content) = match hdr.len {
        Length::Definite(len) => {
            custom_check!(rem, rem.len() < len, BerError::TruncatedInput)?;
            take::<_, _, BerError>(len)(rem)?
        }
        Length::Indefinite => {
            custom_check!(rem, encoding == Encoding::Der, BerError::InvalidLength)?;
            // X.690 8.1.3.2: indefinite form is only for constructed encodings
            custom_check!(rem, !hdr.constructed, BerError::InvalidLength)?;
            scan_indefinite(rem, depth + 1, max_depth)?
        }
    };
    let element = Element {
        class: hdr.class,
        tag: hdr.tag,
        constructed: hdr.constructed,
        length: hdr.len,
        header_len,
        content,
    };
    Ok((rem, element))
}

/// Find the extent of an indefinite-length content, up to and including its EOC marker
///
/// Nested elements are skipped over. Nested indefinite-length elements are tracked with a
/// count of pending EOC markers, so the scan uses constant stack space whatever the nesting.
fn scan_indefinite(i: &[u8], depth: usize, max_depth: usize) -> BerResult<'_, &[u8]> {
    custom_check!(i, depth > max_depth, BerError::NestingTooDeep)?;
    debug!(
        ber.depth = depth,
        ber.available = i.len(),
        "scanning indefinite-length content"
    );
    let mut pending = 0usize;
    let mut rem = i;
    loop {
        custom_check!(rem, rem.is_empty(), BerError::TruncatedInput)?;
        let (after, hdr) = read_header(rem)?;
        rem = match hdr.len {
            Length::Definite(len) => {
                custom_check!(after, after.len() < len, BerError::TruncatedInput)?;
                &after[len..]
            }
            Length::Indefinite => {
                custom_check!(after, !hdr.constructed, BerError::InvalidLength)?;
                pending += 1;
                custom_check!(after, depth + pending > max_depth, BerError::NestingTooDeep)?;
                after
            }
        };
        if hdr.is_eoc() {
            if pending == 0 {
                let used = i.len() - rem.len();
                return Ok((rem, &i[..used]));
            }
            pending -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nom::Err;

    #[test]
    fn test_definite_element() {
        let bytes = [0x30, 0x03, 0x02, 0x01, 0x01, 0x05, 0x00];
        let (rem, elt) = parse_element(&bytes).expect("parsing failed");
        assert_eq!(rem, &[0x05, 0x00]);
        assert!(elt.constructed);
        assert_eq!(elt.tag, Tag::Sequence);
        assert_eq!(elt.content, &bytes[2..5]);
        assert_eq!(elt.total_len(), 5);
    }

    #[test]
    fn test_truncated_content() {
        assert_eq!(
            parse_element(&[0x02, 0x05, 0x01, 0x02]),
            Err(Err::Error(BerError::TruncatedInput))
        );
    }

    #[test]
    fn test_indefinite_includes_eoc() {
        let bytes = [0x30, 0x80, 0x02, 0x01, 0x01, 0x00, 0x00, 0x05, 0x00];
        let (rem, elt) = parse_element(&bytes).expect("parsing failed");
        assert_eq!(rem, &[0x05, 0x00]);
        assert!(elt.is_indefinite());
        assert_eq!(elt.header_len, 2);
        assert_eq!(elt.content, &bytes[2..7]);
    }

    #[test]
    fn test_indefinite_rejected() {
        let bytes = [0x30, 0x80, 0x00, 0x00];
        assert_eq!(
            parse_der_element(&bytes),
            Err(Err::Error(BerError::InvalidLength))
        );
        // primitive with indefinite length
        assert_eq!(
            parse_element(&[0x04, 0x80, 0x00, 0x00]),
            Err(Err::Error(BerError::InvalidLength))
        );
    }

    #[test]
    fn test_indefinite_missing_eoc() {
        assert_eq!(
            parse_element(&[0x30, 0x80, 0x02, 0x01, 0x01]),
            Err(Err::Error(BerError::TruncatedInput))
        );
    }

    #[test]
    fn test_indefinite_nested_extent() {
        // 30 80 { 30 80 { 02 01 01 } 00 00 , 04 00 } 00 00
        let bytes = [
            0x30, 0x80, 0x30, 0x80, 0x02, 0x01, 0x01, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x05,
            0x00,
        ];
        let (rem, elt) = parse_element(&bytes).expect("parsing failed");
        assert_eq!(rem, &[0x05, 0x00]);
        assert_eq!(elt.content, &bytes[2..13]);
        let (rem, inner) = parse_element(elt.content).expect("parsing failed");
        assert_eq!(inner.content, &bytes[4..9]);
        assert_eq!(rem, &bytes[9..13]);
    }

    #[test]
    fn test_indefinite_depth_limit() {
        let bytes = [0x30, 0x80, 0x30, 0x80, 0x00, 0x00, 0x00, 0x00];
        assert!(read_element(&bytes, Encoding::Ber, 0, 2).is_ok());
        assert_eq!(
            read_element(&bytes, Encoding::Ber, 0, 1),
            Err(Err::Error(BerError::NestingTooDeep))
        );
    }
}
