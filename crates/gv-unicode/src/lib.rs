//! glyphview Unicode - Block table and code point helpers
//!
//! This crate provides the Unicode side of glyphview:
//! - Unicode block table loading (bundled JSON resource)
//! - Splitting blocks into display chunks of at most 1024 code points
//! - General Category lookup as a flag set
//! - UTF-16 surrogate pair handling
//! - Hex code point entry and block lookup

pub mod block;
pub mod table;
pub mod category;
pub mod utf16;
pub mod lookup;

pub use block::{DisplayBlock, UnicodeBlock, MAX_CHAR_BY_BLOCK};
pub use table::BlockTable;
pub use category::{Category, CategorySet, category_names, is_printable};
pub use utf16::{code_point_at, push_code_point};
pub use lookup::{find_block, parse_hex};

/// Unicode table error types
#[derive(Debug, thiserror::Error)]
pub enum UnicodeError {
    #[error("Couldn't read block table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bad formed block table: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Block table has no \"blocks\" array")]
    MissingBlocks,

    #[error("Error in block table for block index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, UnicodeError>;
