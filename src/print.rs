//! Line formatting, in the layout of `openssl asn1parse`
//!
//! ```text
//!    0:d=0  hl=2 l=   6 cons: SEQUENCE and SEQUENCE OF
//!    2:d=1  hl=2 l=   1 prim: INTEGER
//! ```

use crate::ber::{Class, Length};
use crate::walker::WalkItem;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrettyPrinterFlag {
    /// Indent the description by one space per nesting level
    Indent,
    /// Describe non-universal elements by class and tag number
    ShowClass,
}

pub struct PrettyItem<'a, 'b> {
    item: &'b WalkItem<'a>,
    flags: &'b [PrettyPrinterFlag],
}

impl<'a> WalkItem<'a> {
    pub fn as_pretty<'b>(&'b self, flags: &'b [PrettyPrinterFlag]) -> PrettyItem<'a, 'b> {
        PrettyItem { item: self, flags }
    }
}

impl<'a, 'b> PrettyItem<'a, 'b> {
    fn has_flag(&self, flag: PrettyPrinterFlag) -> bool {
        self.flags.contains(&flag)
    }
}

impl<'a, 'b> fmt::Display for PrettyItem<'a, 'b> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elt = &self.item.element;
        write!(
            f,
            "{:4}:d={}  hl={} ",
            self.item.offset, self.item.depth, elt.header_len
        )?;
        match elt.length {
            Length::Indefinite => write!(f, "l= inf ")?,
            Length::Definite(_) => write!(f, "l={:4} ", elt.content_len())?,
        }
        let ty = if elt.constructed { "cons" } else { "prim" };
        write!(f, "{}: ", ty)?;
        if self.has_flag(PrettyPrinterFlag::Indent) && self.item.depth > 0 {
            write!(f, "{:1$}", "", self.item.depth)?;
        }
        if self.has_flag(PrettyPrinterFlag::ShowClass) && elt.class != Class::Universal {
            write!(f, "[{} {}]", elt.class, elt.tag.0)
        } else {
            f.write_str(&elt.description())
        }
    }
}

impl<'a> fmt::Display for WalkItem<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_pretty(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::PrettyPrinterFlag;
    use crate::walker::{walk, WalkItem};

    fn items(bytes: &[u8]) -> Vec<WalkItem<'_>> {
        walk(bytes)
            .collect::<Result<Vec<_>, _>>()
            .expect("walk failed")
    }

    #[test]
    fn test_pretty_print() {
        let bytes = [0x30, 0x03, 0x02, 0x01, 0x01];
        let v = items(&bytes);
        assert_eq!(
            v[0].to_string(),
            "   0:d=0  hl=2 l=   3 cons: SEQUENCE and SEQUENCE OF"
        );
        assert_eq!(v[1].to_string(), "   2:d=1  hl=2 l=   1 prim: INTEGER");
    }

    #[test]
    fn test_pretty_print_flags() {
        let bytes = [0x30, 0x04, 0xa0, 0x02, 0x05, 0x00];
        let v = items(&bytes);
        let flags = [PrettyPrinterFlag::Indent, PrettyPrinterFlag::ShowClass];
        assert_eq!(
            v[1].as_pretty(&flags).to_string(),
            "   2:d=1  hl=2 l=   2 cons:  [CONTEXT-SPECIFIC 0]"
        );
        assert_eq!(
            v[2].as_pretty(&flags).to_string(),
            "   4:d=2  hl=2 l=   0 prim:   NULL"
        );
        // without flags, the class is ignored
        assert_eq!(
            v[1].to_string(),
            "   2:d=1  hl=2 l=   2 cons: EOC (End of Content)"
        );
    }

    #[test]
    fn test_pretty_print_indefinite() {
        let bytes = [0x30, 0x80, 0x05, 0x00, 0x00, 0x00];
        let v = items(&bytes);
        assert_eq!(
            v[0].to_string(),
            "   0:d=0  hl=2 l= inf cons: SEQUENCE and SEQUENCE OF"
        );
        assert_eq!(v[2].to_string(), "   4:d=1  hl=2 l=   0 prim: EOC (End of Content)");
    }
}
