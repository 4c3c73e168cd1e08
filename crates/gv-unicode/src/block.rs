//! Unicode blocks and display chunks
//!
//! A named block is split into chunks of at most [`MAX_CHAR_BY_BLOCK`]
//! code points so that a single view never has to hold a whole plane.

use std::fmt;

/// Maximum number of code points in one display chunk
pub const MAX_CHAR_BY_BLOCK: u32 = 1024;

/// A named Unicode block, as read from the block table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeBlock {
    /// First code point (inclusive)
    pub begin_char_code: u32,
    /// Last code point (inclusive)
    pub end_char_code: u32,
    /// Block name, e.g. "Basic Latin"
    pub name: String,
}

impl UnicodeBlock {
    /// Create a block. Returns `None` if `begin > end`.
    pub fn new(begin_char_code: u32, end_char_code: u32, name: impl Into<String>) -> Option<Self> {
        if begin_char_code > end_char_code {
            return None;
        }
        Some(Self {
            begin_char_code,
            end_char_code,
            name: name.into(),
        })
    }

    /// Number of split points; the chunk count is one more
    pub fn split_count(&self) -> u32 {
        (self.end_char_code - self.begin_char_code) / MAX_CHAR_BY_BLOCK
    }

    /// Split into display chunks of at most [`MAX_CHAR_BY_BLOCK`] code points
    pub fn expand(&self) -> Vec<DisplayBlock> {
        let split = self.split_count();
        let mut chunks = Vec::with_capacity(split as usize + 1);

        for curs in 0..=split {
            // u64 so a block ending at u32::MAX cannot overflow
            let begin = self.begin_char_code as u64 + curs as u64 * MAX_CHAR_BY_BLOCK as u64;
            let end = (begin + MAX_CHAR_BY_BLOCK as u64 - 1).min(self.end_char_code as u64);
            let (begin, end) = (begin as u32, end as u32);

            let mut label = self.name.clone();
            if split > 0 {
                label.push_str(&format!(" {}/{}", curs + 1, split + 1));
            }
            label.push_str(&format!("[U+{:X} - U+{:X}]", begin, end));

            chunks.push(DisplayBlock {
                begin_char_code: begin,
                end_char_code: end,
                label,
            });
        }

        chunks
    }
}

/// Expand every block, keeping source order
pub fn expand_all(blocks: &[UnicodeBlock]) -> Vec<DisplayBlock> {
    blocks.iter().flat_map(UnicodeBlock::expand).collect()
}

/// A display-ready chunk of a Unicode block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBlock {
    /// First code point (inclusive)
    pub begin_char_code: u32,
    /// Last code point (inclusive)
    pub end_char_code: u32,
    /// Label shown in the block chooser
    pub label: String,
}

impl DisplayBlock {
    /// Check if the chunk contains a code point
    pub fn contains(&self, code_point: u32) -> bool {
        (self.begin_char_code..=self.end_char_code).contains(&code_point)
    }

    /// Number of code points in the chunk
    pub fn len(&self) -> u32 {
        self.end_char_code - self.begin_char_code + 1
    }

    /// Iterate over the chunk's code points
    pub fn code_points(&self) -> impl Iterator<Item = u32> {
        self.begin_char_code..=self.end_char_code
    }
}

impl fmt::Display for DisplayBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
