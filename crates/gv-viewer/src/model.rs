//! Viewer data model
//!
//! Plain state observed by a [`View`](crate::view::View). Only action
//! handlers mutate it.

use std::ops::Range;
use std::path::PathBuf;

use gv_unicode::DisplayBlock;

use crate::text::BlockText;
use crate::tooltip::Tooltip;

/// Label shown when the block table failed to load
pub const BLOCK_TABLE_ERROR: &str = "Couldn't load UCB File.";

/// How long status messages stay visible
pub const STATUS_TIMEOUT_MS: u32 = 10_000;

/// Status bar message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub timeout_ms: u32,
}

impl Status {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timeout_ms: STATUS_TIMEOUT_MS,
        }
    }
}

/// Entry of the font chooser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    pub file_name: String,
    pub family: String,
}

/// Viewer state
#[derive(Debug, Clone, Default)]
pub struct ViewerModel {
    /// Display blocks of the block chooser
    pub blocks: Vec<DisplayBlock>,
    /// Set when the block table could not be loaded
    pub block_error: Option<String>,
    /// Index into `blocks`
    pub selected_block: usize,
    /// Entries of the font chooser
    pub fonts: Vec<FontEntry>,
    /// Selected font file name; kept even when not currently loaded
    pub selected_font: Option<String>,
    /// Directory fonts are loaded from
    pub font_dir: PathBuf,
    /// Content of the char code entry
    pub char_code: String,
    /// Text of the selected block
    pub text: BlockText,
    /// UTF-16 range of the highlighted character
    pub highlight: Option<Range<usize>>,
    /// Status bar message
    pub status: Option<Status>,
    /// Tooltip of the hovered character
    pub tooltip: Option<Tooltip>,
}

impl ViewerModel {
    /// Currently selected display block
    pub fn current_block(&self) -> Option<&DisplayBlock> {
        self.blocks.get(self.selected_block)
    }

    /// Font chooser entry of the selected font, if it is loaded
    pub fn current_font(&self) -> Option<&FontEntry> {
        let name = self.selected_font.as_deref()?;
        self.fonts.iter().find(|f| f.file_name == name)
    }
}
