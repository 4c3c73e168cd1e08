//! Font face glyph lookups

use ttf_parser::{Face, GlyphId};

/// Parsed font face
pub struct FontFace<'a> {
    /// The underlying ttf-parser face
    face: Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parse a font face from data
    pub fn parse(data: &'a [u8], index: u32) -> Option<Self> {
        Face::parse(data, index).ok().map(|face| Self { face })
    }

    /// Get glyph ID for a character
    pub fn glyph_index(&self, c: char) -> Option<GlyphId> {
        self.face.glyph_index(c)
    }

    /// Check if font has glyph for character
    pub fn has_char(&self, c: char) -> bool {
        self.glyph_index(c).is_some()
    }

    /// Count the code points of an inclusive range that have a glyph
    pub fn coverage(&self, begin: u32, end: u32) -> usize {
        (begin..=end)
            .filter_map(char::from_u32)
            .filter(|c| self.has_char(*c))
            .count()
    }
}
