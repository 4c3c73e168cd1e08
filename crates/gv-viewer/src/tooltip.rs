//! Character tooltip

use std::fmt;

use gv_unicode::{category_names, code_point_at};

/// Information shown when hovering a character of the block text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Code point under the cursor
    pub code_point: u32,
    /// The character itself, empty for lone surrogates
    pub glyph: String,
    /// Family of the system default font
    pub system_family: Option<String>,
    /// Family of the selected test font
    pub test_family: Option<String>,
    /// Whether the test font has a glyph for the code point
    pub test_has_glyph: bool,
    /// General Category names
    pub categories: String,
}

impl Tooltip {
    /// Resolve the code point at a UTF-16 position.
    ///
    /// Positions past the end are clamped to the last unit; an empty text
    /// has no tooltip.
    pub fn code_point_under(units: &[u16], position: usize) -> Option<u32> {
        let last = units.len().checked_sub(1)?;
        code_point_at(units, position.min(last))
    }

    /// Build the tooltip of a code point
    pub fn new(code_point: u32, system_family: Option<String>, test_family: Option<String>, test_has_glyph: bool) -> Self {
        Self {
            code_point,
            glyph: char::from_u32(code_point).map(String::from).unwrap_or_default(),
            system_family,
            test_family,
            test_has_glyph,
            categories: category_names(code_point),
        }
    }

    /// `U+<HEX>` label
    pub fn label(&self) -> String {
        format!("U+{:X}", self.code_point)
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label())?;
        writeln!(
            f,
            "Printed by your system font ({}): {}",
            self.system_family.as_deref().unwrap_or("unknown"),
            self.glyph
        )?;
        match &self.test_family {
            Some(family) => {
                let missing = if self.test_has_glyph { "" } else { " (no glyph)" };
                writeln!(f, "Printed using \"{}\" Font: {}{}", family, self.glyph, missing)?;
            }
            None => writeln!(f, "No test font selected")?,
        }
        write!(f, "Categories: {}", self.categories)
    }
}
