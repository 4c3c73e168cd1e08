//! Block text
//!
//! The text shown for a display block: every printable code point of the
//! block, in order, kept as UTF-16 so tooltip positions index it the same way
//! a text widget would.

use std::ops::Range;

use gv_unicode::utf16::{len_utf16, push_code_point};
use gv_unicode::{is_printable, DisplayBlock};

/// Rendered text of a display block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockText {
    units: Vec<u16>,
    /// UTF-16 offset of each printed code point
    offsets: Vec<(u32, usize)>,
}

impl BlockText {
    /// Build the text of a block
    pub fn build(block: &DisplayBlock) -> Self {
        let mut text = Self::default();
        for code_point in block.code_points().filter(|cp| is_printable(*cp)) {
            text.offsets.push((code_point, text.units.len()));
            push_code_point(&mut text.units, code_point);
        }
        text
    }

    /// UTF-16 units of the text
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Number of printed code points
    pub fn char_count(&self) -> usize {
        self.offsets.len()
    }

    /// UTF-16 range of a code point in the text, if it was printed
    pub fn find(&self, code_point: u32) -> Option<Range<usize>> {
        self.offsets
            .binary_search_by_key(&code_point, |(cp, _)| *cp)
            .ok()
            .map(|i| {
                let start = self.offsets[i].1;
                start..start + len_utf16(code_point)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Clear the text
    pub fn clear(&mut self) {
        self.units.clear();
        self.offsets.clear();
    }
}

impl std::fmt::Display for BlockText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf16_lossy(&self.units))
    }
}
