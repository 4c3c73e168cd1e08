//! glyphview Text - Font handling
//!
//! This crate provides font handling for glyphview:
//! - Font loading and matching (fontdb)
//! - Glyph coverage lookups (ttf-parser)
//! - Font directory registry with family de-duplication

pub mod font;

pub use font::{FontDatabase, FontFace, FontId, FontQuery, FontRegistry, RegisteredFont};

/// Text error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),

    #[error("All families of {file} are already stored: {families}")]
    DuplicateFamily { file: String, families: String },

    #[error("Failed to read font directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TextError>;
