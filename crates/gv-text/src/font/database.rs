//! Font database for loading and managing fonts

use std::path::Path;
use fontdb::{Database, FaceInfo, Source};
use super::matching::to_fontdb_family;
use super::{FontFace, FontId, FontQuery};

/// Font database for loading and matching fonts
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self {
            db: Database::new(),
        }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        Self { db }
    }

    /// Register every face of a font file.
    ///
    /// Returns the ids of the registered faces; empty if the file could not
    /// be read or holds no parsable face.
    pub fn register_file(&mut self, path: &Path) -> Vec<FontId> {
        self.db
            .load_font_source(Source::File(path.to_path_buf()))
            .iter()
            .map(|id| FontId(*id))
            .collect()
    }

    /// Unregister a face
    pub fn remove(&mut self, id: FontId) {
        self.db.remove_face(id.0);
    }

    /// Find a font matching the query
    pub fn query(&self, query: &FontQuery) -> Option<FontId> {
        let families: Vec<fontdb::Family> = query.families
            .iter()
            .map(|f| to_fontdb_family(f))
            .collect();

        self.db.query(&fontdb::Query {
            families: &families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        }).map(FontId)
    }

    /// Family name of the font matching the query
    pub fn query_family(&self, query: &FontQuery) -> Option<String> {
        self.query(query).and_then(|id| self.families_of(id).into_iter().next())
    }

    /// Get font info by ID
    pub fn face_info(&self, id: FontId) -> Option<&FaceInfo> {
        self.db.face(id.0)
    }

    /// Family names of a face, in the order the font lists them
    pub fn families_of(&self, id: FontId) -> Vec<String> {
        self.face_info(id)
            .map(|info| info.families.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default()
    }

    /// Get font data by ID
    pub fn with_face_data<R>(&self, id: FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        self.db.with_face_data(id.0, f)
    }

    /// Check if a face has a glyph for a code point
    pub fn has_glyph(&self, id: FontId, code_point: u32) -> bool {
        let Some(c) = char::from_u32(code_point) else { return false };
        self.with_face_data(id, |data, index| {
            FontFace::parse(data, index).is_some_and(|face| face.has_char(c))
        })
        .unwrap_or(false)
    }

    /// Number of loaded faces
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}
