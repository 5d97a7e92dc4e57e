use super::length::parse_length;
use super::{Length, Tag};
use crate::error::{BerError, BerResult};
use core::fmt;
use nom::Err;

/// BER Object class of tag
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Class {
    Universal = 0b00,
    Application = 0b01,
    ContextSpecific = 0b10,
    Private = 0b11,
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Class::Universal => "UNIVERSAL",
            Class::Application => "APPLICATION",
            Class::ContextSpecific => "CONTEXT-SPECIFIC",
            Class::Private => "PRIVATE",
        };
        write!(f, "{}", s)
    }
}

impl Class {
    /// Class encoded in the two high bits of an identifier octet
    #[inline]
    pub fn from_identifier(b: u8) -> Class {
        match b >> 6 {
            0b00 => Class::Universal,
            0b01 => Class::Application,
            0b10 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }
}

/// Maximum number of continuation octets in a high-tag-number identifier
pub const MAX_TAG_OCTETS: usize = 4;

/// Identifier and length octets of an element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Object class: universal, application, context-specific, or private
    pub class: Class,
    /// Constructed attribute (bit 6 of the identifier)
    pub constructed: bool,
    /// Tag number
    pub tag: Tag,
    /// Object length: definite or indefinite
    pub len: Length,
}

impl Header {
    pub fn new(class: Class, constructed: bool, tag: Tag, len: Length) -> Self {
        Header {
            class,
            constructed,
            tag,
            len,
        }
    }

    /// Test if this header is an end-of-contents marker (`00 00`)
    pub fn is_eoc(&self) -> bool {
        self.class == Class::Universal
            && !self.constructed
            && self.tag == Tag::EndOfContent
            && self.len.is_null()
    }
}

/// Read the identifier octet(s): class, constructed bit and tag number
///
/// Tag numbers up to 30 use the low-tag-number form. Value 0x1f in the low bits announces
/// the high-tag-number form: base-128 octets follow, the last one having its high bit
/// cleared. At most [`MAX_TAG_OCTETS`] are accepted, so that the tag fits in a `u32`.
pub(crate) fn parse_identifier(i: &[u8]) -> BerResult<'_, (Class, bool, Tag)> {
    if i.is_empty() {
        return Err(Err::Error(BerError::EmptyInput));
    }
    let class = Class::from_identifier(i[0]);
    let constructed = i[0] & 0b0010_0000 != 0;
    let mut tag = u32::from(i[0] & 0b0001_1111);

    let mut tag_byte_count = 1;

    if tag == 0x1f {
        tag = 0;
        loop {
            custom_check!(i, tag_byte_count >= i.len(), BerError::TruncatedInput)?;
            custom_check!(
                i,
                tag_byte_count > MAX_TAG_OCTETS,
                BerError::UnsupportedTagForm
            )?;

            tag = (tag << 7) | (u32::from(i[tag_byte_count]) & 0x7f);
            let done = i[tag_byte_count] & 0x80 == 0;
            tag_byte_count += 1;
            if done {
                break;
            }
        }
    }

    Ok((&i[tag_byte_count..], (class, constructed, Tag(tag))))
}

/// Read an element header (identifier and length octets)
pub fn read_header(i: &[u8]) -> BerResult<'_, Header> {
    let (rem, (class, constructed, tag)) = parse_identifier(i)?;
    let (rem, len) = parse_length(rem)?;
    Ok((rem, Header::new(class, constructed, tag, len)))
}
