//! Error types for element decoding and tree walking

use crate::ber::Element;
use nom::error::{ErrorKind, ParseError};
use nom::IResult;
use std::error::Error;
use std::fmt;
use std::io;

/// Holds the result of parsing functions
///
/// `O` is the output type, and defaults to an [`Element`].
///
/// Note that this type is also a `Result`, so usual functions (`map`, `unwrap` etc.) are available.
pub type BerResult<'a, O = Element<'a>> = IResult<&'a [u8], O, BerError>;

/// Decoding error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BerError {
    /// No bytes left: end of siblings, not necessarily a failure
    EmptyInput,
    /// Declared tag, length or content runs past the end of the buffer
    TruncatedInput,
    /// Malformed or forbidden length encoding
    InvalidLength,
    /// Nesting exceeds the configured maximum depth
    NestingTooDeep,
    /// High-tag-number identifier too long to be represented
    UnsupportedTagForm,

    NomError(ErrorKind),
}

impl fmt::Display for BerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BerError::EmptyInput => write!(f, "empty input"),
            BerError::TruncatedInput => write!(f, "truncated input"),
            BerError::InvalidLength => write!(f, "invalid length encoding"),
            BerError::NestingTooDeep => write!(f, "nesting too deep"),
            BerError::UnsupportedTagForm => write!(f, "unsupported tag form"),
            BerError::NomError(kind) => write!(f, "parse error: {:?}", kind),
        }
    }
}

impl Error for BerError {}

impl<I> ParseError<I> for BerError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        BerError::NomError(kind)
    }
    fn append(_input: I, kind: ErrorKind, _other: Self) -> Self {
        BerError::NomError(kind)
    }
}

impl From<nom::Err<BerError>> for BerError {
    fn from(e: nom::Err<BerError>) -> Self {
        match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
            nom::Err::Incomplete(_) => BerError::TruncatedInput,
        }
    }
}

/// A decoding error, located in the top-level buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkError {
    /// Absolute offset of the element that failed to decode
    pub offset: usize,
    /// Nesting depth of that element
    pub depth: usize,
    pub kind: BerError,
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at offset {} (depth {})",
            self.kind, self.offset, self.depth
        )
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.kind)
    }
}

/// Error returned when dumping to an output sink
#[derive(Debug)]
pub enum DumpError {
    Walk(WalkError),
    Io(io::Error),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpError::Walk(e) => write!(f, "{}", e),
            DumpError::Io(e) => write!(f, "write error: {}", e),
        }
    }
}

impl Error for DumpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DumpError::Walk(e) => Some(e),
            DumpError::Io(e) => Some(e),
        }
    }
}

impl From<WalkError> for DumpError {
    fn from(e: WalkError) -> Self {
        DumpError::Walk(e)
    }
}

impl From<io::Error> for DumpError {
    fn from(e: io::Error) -> Self {
        DumpError::Io(e)
    }
}
