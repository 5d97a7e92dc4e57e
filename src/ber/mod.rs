//! Basic Encoding Rules (BER) element decoding
//!
//! An element is read as its identifier and length octets, followed by a borrowed slice of
//! content bytes. Nothing is interpreted beyond the header: descending into constructed
//! elements is left to the [walker](crate::walker).

mod decoder;
mod header;
mod length;
mod tag;

pub use crate::ber::decoder::*;
pub use crate::ber::header::*;
pub use crate::ber::length::*;
pub use crate::ber::tag::*;
