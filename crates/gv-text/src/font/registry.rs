//! Font directory registry
//!
//! Registers the `otf`/`ttf` files of one directory. A file whose families
//! are all provided by an earlier file is rejected and its faces removed
//! again, so every family maps to exactly one file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::{FontDatabase, FontFace, FontId};
use crate::{Result, TextError};

/// Font file extensions considered by the registry
const FONT_EXTENSIONS: [&str; 2] = ["otf", "ttf"];

/// A font file accepted by the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFont {
    /// File name, used as the font chooser entry
    pub file_name: String,
    /// Absolute path of the file
    pub path: PathBuf,
    /// Faces registered from the file
    pub face_ids: Vec<FontId>,
    /// Family used to render with this font
    pub family: String,
    /// Every family name the file provides
    pub families: Vec<String>,
}

/// Registry of fonts loaded from a directory
#[derive(Default)]
pub struct FontRegistry {
    db: FontDatabase,
    fonts: Vec<RegisteredFont>,
    dir: Option<PathBuf>,
}

/// Check if a path has a font file extension
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|f| ext.eq_ignore_ascii_case(f)))
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unregister everything, then register the fonts of `dir`.
    ///
    /// Files that fail to load or only duplicate known families are logged
    /// and skipped. Returns the number of fonts registered.
    pub fn reload(&mut self, dir: &Path) -> Result<usize> {
        self.clear();

        let entries = std::fs::read_dir(dir).map_err(|source| TextError::Directory {
            path: dir.display().to_string(),
            source,
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_font_file(path))
            .collect();
        files.sort();

        for path in files {
            if let Err(e) = self.register_file(&path) {
                tracing::debug!("Can't add font named: {}: {}", path.display(), e);
            }
        }

        self.dir = Some(dir.to_path_buf());
        tracing::info!("{} Fonts loaded from {}", self.fonts.len(), dir.display());
        Ok(self.fonts.len())
    }

    /// Register a single font file
    pub fn register_file(&mut self, path: &Path) -> Result<&RegisteredFont> {
        let shown = path.display().to_string();
        let face_ids = self.db.register_file(path);
        if face_ids.is_empty() {
            return Err(TextError::FontParsing(shown));
        }

        let mut families: Vec<String> = Vec::new();
        for id in &face_ids {
            for family in self.db.families_of(*id) {
                if !families.contains(&family) {
                    families.push(family);
                }
            }
        }

        let stored: HashSet<&str> = self.fonts
            .iter()
            .flat_map(|f| f.families.iter().map(String::as_str))
            .collect();
        let new_family = families.iter().find(|f| !stored.contains(f.as_str())).cloned();

        let Some(family) = new_family else {
            for id in face_ids {
                self.db.remove(id);
            }
            return Err(TextError::DuplicateFamily {
                file: shown,
                families: families.join(";"),
            });
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| shown.clone());

        tracing::debug!(
            "Added: {} with {} faces with families: {}",
            shown,
            face_ids.len(),
            families.join(";")
        );

        self.fonts.push(RegisteredFont {
            file_name,
            path: path.to_path_buf(),
            face_ids,
            family,
            families,
        });
        Ok(&self.fonts[self.fonts.len() - 1])
    }

    /// Unregister every font
    pub fn clear(&mut self) {
        for font in self.fonts.drain(..) {
            for id in font.face_ids {
                self.db.remove(id);
            }
        }
        self.dir = None;
    }

    /// Registered fonts, in registration order
    pub fn fonts(&self) -> &[RegisteredFont] {
        &self.fonts
    }

    /// Find a font by file name
    pub fn find(&self, file_name: &str) -> Option<&RegisteredFont> {
        self.fonts.iter().find(|f| f.file_name == file_name)
    }

    /// Directory of the last successful reload
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Check if a registered font has a glyph for a code point
    pub fn has_glyph(&self, file_name: &str, code_point: u32) -> bool {
        self.find(file_name)
            .and_then(|font| font.face_ids.first())
            .is_some_and(|id| self.db.has_glyph(*id, code_point))
    }

    /// Count the code points of `begin..=end` a registered font has glyphs for
    pub fn coverage(&self, file_name: &str, begin: u32, end: u32) -> Result<usize> {
        let font = self.find(file_name)
            .ok_or_else(|| TextError::FontNotFound(file_name.to_string()))?;
        let id = *font.face_ids
            .first()
            .ok_or_else(|| TextError::FontNotFound(file_name.to_string()))?;

        self.db
            .with_face_data(id, |data, index| {
                FontFace::parse(data, index).map(|face| face.coverage(begin, end))
            })
            .flatten()
            .ok_or_else(|| TextError::FontParsing(font.path.display().to_string()))
    }

    /// Underlying font database
    pub fn database(&self) -> &FontDatabase {
        &self.db
    }

    /// Number of registered fonts
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Check if no font is registered
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
