#[macro_use]
extern crate pretty_assertions;

#[macro_use]
extern crate hex_literal;

use ber_dump::ber::*;
use ber_dump::error::BerError;
use nom::Err;

#[test]
fn test_context_specific_bmpstring() {
    // This is a 4 bytes (2 characters) UTF-16-BE string. The first two bytes are the tag and size.
    let bytes = [0x80, 0x04, 0x00, 0x4c, 0x00, 0x65];
    let (rem, elt) = parse_element(&bytes).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(elt.class, Class::ContextSpecific);
    assert_eq!(elt.tag, Tag(0));
    assert!(!elt.constructed);
    assert_eq!(elt.content, &bytes[2..]);
}

#[test]
fn test_remaining_starts_after_content() {
    let data = hex!("04 03 56 78 90 02 01 01");
    let (rem, elt) = parse_element(&data).expect("parsing failed");
    assert_eq!(rem, &data[5..]);
    assert_eq!(elt.header_len, 2);
    assert_eq!(elt.content, &data[2..5]);
    assert_eq!(elt.length, Length::Definite(3));
    let (rem, elt) = parse_element(rem).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(elt.tag, Tag::Integer);
}

#[test]
fn test_constructed_not_descended() {
    // the content of the sequence is garbage, but only the header is decoded
    let data = hex!("30 03 ff ff ff");
    let (rem, elt) = parse_element(&data).expect("parsing failed");
    assert!(rem.is_empty());
    assert!(elt.constructed);
    assert_eq!(elt.content, &data[2..]);
}

#[test]
fn test_seq_indefinite_length() {
    let data = hex!("30 80 04 03 56 78 90 00 00 02 01 01");
    let (rem, elt) = parse_element(&data).expect("parsing failed");
    assert_eq!(rem, &data[9..]);
    assert_eq!(elt.length, Length::Indefinite);
    assert_eq!(elt.content, &data[2..9]);
    assert_eq!(elt.total_len(), 9);
}

#[test]
fn test_decoder_errors() {
    assert_eq!(parse_element(&[]), Err(Err::Error(BerError::EmptyInput)));
    assert_eq!(
        parse_element(&[0x02]),
        Err(Err::Error(BerError::TruncatedInput))
    );
    assert_eq!(
        parse_element(&hex!("02 05 01 02")),
        Err(Err::Error(BerError::TruncatedInput))
    );
    assert_eq!(
        parse_element(&hex!("04 ff 00")),
        Err(Err::Error(BerError::InvalidLength))
    );
    assert_eq!(
        parse_der_element(&hex!("31 80 00 00")),
        Err(Err::Error(BerError::InvalidLength))
    );
    assert_eq!(
        parse_element(&hex!("1f ff ff ff ff 7f 00")),
        Err(Err::Error(BerError::UnsupportedTagForm))
    );
}

#[test]
fn test_read_header() {
    let bytes = hex!("a3 82 01 00");
    let (rem, hdr) = read_header(&bytes).expect("parsing failed");
    assert!(rem.is_empty());
    assert_eq!(
        hdr,
        Header::new(Class::ContextSpecific, true, Tag(3), Length::Definite(256))
    );
}
