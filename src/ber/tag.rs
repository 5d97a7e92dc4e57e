use rusticata_macros::newtype_enum;
use std::borrow::Cow;

/// BER/DER Tag as defined in X.680 section 8.4
///
/// X.690 doesn't specify the maxmimum tag size so we're assuming that people
/// aren't going to need anything more than a u32.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub u32);

newtype_enum! {
impl debug Tag {
    EndOfContent = 0x0,
    Boolean = 0x1,
    Integer = 0x2,
    BitString = 0x3,
    OctetString = 0x4,
    Null = 0x05,
    Oid = 0x06,
    ObjDescriptor = 0x07,
    External = 0x08,
    RealType = 0x09,
    Enumerated = 0xa,
    EmbeddedPdv = 0xb,
    Utf8String = 0xc,
    RelativeOid = 0xd,

    Sequence = 0x10,
    Set = 0x11,
    NumericString = 0x12,
    PrintableString = 0x13,
    T61String = 0x14,
    VideotexString = 0x15,

    Ia5String = 0x16,
    UtcTime = 0x17,
    GeneralizedTime = 0x18,

    GraphicString = 0x19,
    VisibleString = 0x1a,
    GeneralString = 0x1b,

    UniversalString = 0x1c,
    CharacterString = 0x1d,
    BmpString = 0x1e,
}
}

impl Tag {
    /// Human-readable label of the tag number (see [`describe`])
    #[inline]
    pub fn description(self) -> Cow<'static, str> {
        describe(self.0)
    }
}

impl From<u32> for Tag {
    fn from(v: u32) -> Self {
        Tag(v)
    }
}

/// Return the label of a universal tag number
///
/// The class is not taken into account: `[0]` in any class is described as an
/// end-of-contents tag. Tag numbers without a label (including 0x0d-0x0f and everything
/// from 0x1f on) are described as `Unknown or Application-specific Tag [0x..]`.
pub fn describe(tag: u32) -> Cow<'static, str> {
    let s = match Tag(tag) {
        Tag::EndOfContent => "EOC (End of Content)",
        Tag::Boolean => "BOOLEAN",
        Tag::Integer => "INTEGER",
        Tag::BitString => "BIT STRING",
        Tag::OctetString => "OCTET STRING",
        Tag::Null => "NULL",
        Tag::Oid => "OBJECT IDENTIFIER",
        Tag::ObjDescriptor => "OBJECT DESCRIPTOR",
        Tag::External => "EXTERNAL",
        Tag::RealType => "REAL (Floating Point)",
        Tag::Enumerated => "ENUMERATED",
        Tag::EmbeddedPdv => "EMBEDDED PDV",
        Tag::Utf8String => "UTF8String",
        Tag::Sequence => "SEQUENCE and SEQUENCE OF",
        Tag::Set => "SET and SET OF",
        Tag::NumericString => "NumericString",
        Tag::PrintableString => "PrintableString",
        Tag::T61String => "TeletexString / T61String",
        Tag::VideotexString => "VideotexString",
        Tag::Ia5String => "IA5String (ASCII)",
        Tag::UtcTime => "UTCTime",
        Tag::GeneralizedTime => "GeneralizedTime",
        Tag::GraphicString => "GraphicString",
        Tag::VisibleString => "VisibleString (ISO646String)",
        Tag::GeneralString => "GeneralString",
        Tag::UniversalString => "UniversalString",
        Tag::CharacterString => "CHARACTER STRING",
        Tag::BmpString => "BMPString",
        _ => {
            return Cow::Owned(format!(
                "Unknown or Application-specific Tag [0x{:X}]",
                tag
            ))
        }
    };
    Cow::Borrowed(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        assert_eq!(format!("{:?}", Tag::Integer), "Integer");
        assert_eq!(format!("{:?}", Tag::BmpString), "BmpString");
    }

    #[test]
    fn test_tag_description() {
        assert_eq!(Tag::Sequence.description(), "SEQUENCE and SEQUENCE OF");
        assert_eq!(
            Tag(0x1f).description(),
            "Unknown or Application-specific Tag [0x1F]"
        );
    }
}
