//! # BER/DER structural dumper
//!
//! A decoder for the Tag-Length-Value structure of Basic Encoding Rules (BER [[X.690]]) and
//! Distinguished Encoding Rules (DER [[X.690]]) data, implemented with the
//! [nom](https://github.com/Geal/nom) parser combinator framework.
//!
//! The crate does not interpret values: it lists every element of a buffer, with its
//! offset, nesting depth, header and content lengths, primitive/constructed form and a
//! description of its tag, in the layout used by `openssl asn1parse`.
//!
//! # Design
//!
//! Two layers are provided:
//!
//! - [`ber::read_element`] decodes a single element header and returns its content as a
//!   borrowed slice, along with the remaining input (the usual nom `(rem, output)` pair).
//! - [`walk`] iterates over all elements of a buffer, recursively descending into
//!   constructed elements (pre-order, depth-first). Each yielded [`WalkItem`] knows its
//!   absolute offset in the original buffer.
//!
//! ```rust
//! use ber_dump::{dump_to_string, WalkConfig};
//!
//! let bytes = [ 0x30, 0x06,
//!               0x02, 0x01, 0x01,
//!               0x02, 0x01, 0x02,
//! ];
//!
//! let listing = dump_to_string(&bytes, &WalkConfig::default()).expect("walk failed");
//! assert_eq!(
//!     listing,
//!     "   0:d=0  hl=2 l=   6 cons: SEQUENCE and SEQUENCE OF\n\
//!     \x20  2:d=1  hl=2 l=   1 prim: INTEGER\n\
//!     \x20  5:d=1  hl=2 l=   1 prim: INTEGER\n"
//! );
//! ```
//!
//! # Notes
//!
//! - The walk aborts on the first malformed element. The error ([`WalkError`]) gives the
//!   offset and depth of the offending element.
//! - Indefinite lengths are accepted in BER mode (the default) on constructed elements, and
//!   rejected in DER mode. The content of such an element includes its end-of-contents
//!   marker, which is listed as a child element.
//! - Nesting is limited by [`WalkConfig::max_depth`] (default [`ber::MAX_RECURSION`]).
//!
//! # References
//!
//! - [[X.680]] Abstract Syntax Notation One (ASN.1): Specification of basic notation.
//! - [[X.690]] ASN.1 encoding rules: Specification of Basic Encoding Rules (BER), Canonical
//!   Encoding Rules (CER) and Distinguished Encoding Rules (DER).
//!
//! [X.680]: http://www.itu.int/rec/T-REC-X.680/en "Abstract Syntax Notation One (ASN.1):
//!   Specification of basic notation."
//! [X.690]: https://www.itu.int/rec/T-REC-X.690/en "ASN.1 encoding rules: Specification of
//!   Basic Encoding Rules (BER), Canonical Encoding Rules (CER) and Distinguished Encoding Rules
//!   (DER)."

#![deny(/*missing_docs,*/unsafe_code,
        unstable_features,
        unused_import_braces, unused_qualifications)]

#[macro_use]
extern crate rusticata_macros;

pub mod ber;
pub mod error;
pub mod print;
pub mod walker;

pub use ber::describe;
pub use error::{BerError, DumpError, WalkError};
pub use walker::{dump, dump_to_string, lines, walk, walk_with, WalkConfig, WalkItem, Walker};
