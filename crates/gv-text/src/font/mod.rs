//! Font loading and matching module

mod database;
mod face;
mod matching;
mod registry;

pub use database::FontDatabase;
pub use face::FontFace;
pub use matching::{FontQuery, resolve_generic_family};
pub use registry::{FontRegistry, RegisteredFont, is_font_file};

/// Unique identifier for a loaded font face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub fontdb::ID);
