//! Depth-first traversal of BER/DER elements
//!
//! The walker reads a buffer of concatenated elements and yields them in encoding order,
//! descending into constructed elements before moving on to their next sibling. Each item
//! carries its absolute offset in the top-level buffer and its nesting depth.

use crate::ber::{read_element, Element, Encoding, MAX_RECURSION};
use crate::error::{BerError, DumpError, WalkError};
use crate::print::PrettyPrinterFlag;
use std::io::Write;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Walk parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    /// Encoding rules applied to lengths
    pub encoding: Encoding,
    /// Deepest nesting level accepted (top-level elements are at depth 0)
    pub max_depth: usize,
    /// Flags used when formatting lines
    pub flags: Vec<PrettyPrinterFlag>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        WalkConfig {
            encoding: Encoding::Ber,
            max_depth: MAX_RECURSION,
            flags: Vec::new(),
        }
    }
}

impl WalkConfig {
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn set_flag(&mut self, flag: PrettyPrinterFlag) {
        if !self.flags.contains(&flag) {
            self.flags.push(flag);
        }
    }

    pub fn with_flag(mut self, flag: PrettyPrinterFlag) -> Self {
        self.set_flag(flag);
        self
    }
}

/// An element, with its position in the top-level buffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkItem<'a> {
    /// Absolute offset of the first identifier octet
    pub offset: usize,
    /// Nesting level, 0 for top-level elements
    pub depth: usize,
    pub element: Element<'a>,
}

#[derive(Debug)]
struct Frame<'a> {
    input: &'a [u8],
    offset: usize,
    depth: usize,
}

/// Iterator over the elements of a buffer, in pre-order
///
/// The walk stops after the first error: the error is yielded once, then the iterator
/// returns `None`. Items yielded before the error are valid.
#[derive(Debug)]
pub struct Walker<'a> {
    stack: Vec<Frame<'a>>,
    encoding: Encoding,
    max_depth: usize,
    failed: bool,
}

impl<'a> Walker<'a> {
    pub fn new(input: &'a [u8], config: &WalkConfig) -> Self {
        Walker::with_origin(input, 0, 0, config)
    }

    /// Walk `input` as if it started at `offset` in an enclosing buffer, at nesting level
    /// `depth`
    ///
    /// Reported offsets and depths are relative to that origin, and `config.max_depth`
    /// still counts from the outermost level.
    pub fn with_origin(
        input: &'a [u8],
        offset: usize,
        depth: usize,
        config: &WalkConfig,
    ) -> Self {
        Walker {
            stack: vec![Frame {
                input,
                offset,
                depth,
            }],
            encoding: config.encoding,
            max_depth: config.max_depth,
            failed: false,
        }
    }

    fn fail(&mut self, offset: usize, depth: usize, kind: BerError) -> WalkError {
        debug!(ber.offset = offset, ber.depth = depth, error = %kind, "walk aborted");
        self.failed = true;
        self.stack.clear();
        WalkError {
            offset,
            depth,
            kind,
        }
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = Result<WalkItem<'a>, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some(frame) = self.stack.last() {
            if !frame.input.is_empty() {
                break;
            }
            self.stack.pop();
        }
        let (input, offset, depth) = match self.stack.last() {
            Some(frame) => (frame.input, frame.offset, frame.depth),
            None => return None,
        };
        if depth > self.max_depth {
            return Some(Err(self.fail(offset, depth, BerError::NestingTooDeep)));
        }
        let (rem, element) = match read_element(input, self.encoding, depth, self.max_depth) {
            Ok(res) => res,
            Err(e) => return Some(Err(self.fail(offset, depth, e.into()))),
        };
        debug_assert_eq!(input.len() - rem.len(), element.total_len());
        trace!(
            ber.offset = offset,
            ber.depth = depth,
            ber.tag = element.tag.0,
            ber.header_len = element.header_len,
            ber.content_len = element.content_len(),
            "decoded element"
        );
        if let Some(frame) = self.stack.last_mut() {
            frame.input = rem;
            frame.offset += element.total_len();
        }
        if element.constructed && !element.content.is_empty() {
            // children are consumed before the next sibling
            self.stack.push(Frame {
                input: element.content,
                offset: offset + element.header_len,
                depth: depth + 1,
            });
        }
        Some(Ok(WalkItem {
            offset,
            depth,
            element,
        }))
    }
}

impl<'a> FusedIterator for Walker<'a> {}

/// Walk a buffer using the default configuration (BER, [`MAX_RECURSION`])
///
/// ```rust
/// let bytes = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02];
/// let depths: Vec<_> = ber_dump::walk(&bytes)
///     .map(|item| item.map(|item| item.depth))
///     .collect::<Result<_, _>>()
///     .expect("walk failed");
/// assert_eq!(depths, vec![0, 1, 1]);
/// ```
pub fn walk(input: &[u8]) -> Walker<'_> {
    Walker::new(input, &WalkConfig::default())
}

pub fn walk_with<'a>(input: &'a [u8], config: &WalkConfig) -> Walker<'a> {
    Walker::new(input, config)
}

/// Lazily format each element as a line (without trailing newline)
pub fn lines<'a>(
    input: &'a [u8],
    config: &'a WalkConfig,
) -> impl Iterator<Item = Result<String, WalkError>> + 'a {
    walk_with(input, config)
        .map(move |item| item.map(|item| item.as_pretty(&config.flags).to_string()))
}

/// Write one line per element to `out`, returning the number of elements
///
/// Lines for the elements decoded before an error have already been written when the
/// error is returned.
pub fn dump<W: Write>(
    input: &[u8],
    config: &WalkConfig,
    out: &mut W,
) -> Result<usize, DumpError> {
    let mut count = 0;
    for item in walk_with(input, config) {
        let item = item?;
        writeln!(out, "{}", item.as_pretty(&config.flags))?;
        count += 1;
    }
    Ok(count)
}

pub fn dump_to_string(input: &[u8], config: &WalkConfig) -> Result<String, WalkError> {
    let mut s = String::new();
    for line in lines(input, config) {
        s.push_str(&line?);
        s.push('\n');
    }
    Ok(s)
}
