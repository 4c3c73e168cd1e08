//! Font matching and query

/// Font query for matching; faces are matched at normal weight and style
#[derive(Debug, Clone)]
pub struct FontQuery {
    /// Font families to try (in order)
    pub families: Vec<String>,
}

impl FontQuery {
    /// Create a new font query
    pub fn new(families: &[&str]) -> Self {
        Self {
            families: families.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for FontQuery {
    /// The system default font: generic sans-serif, then common fallbacks
    fn default() -> Self {
        let mut families = vec!["sans-serif"];
        families.extend_from_slice(resolve_generic_family("sans-serif"));
        Self::new(&families)
    }
}

/// Resolve generic font family to common system families
pub fn resolve_generic_family(family: &str) -> &'static [&'static str] {
    match family.to_lowercase().as_str() {
        "serif" => &["Times New Roman", "Times", "DejaVu Serif", "Noto Serif"],
        "sans-serif" => &["Arial", "Helvetica", "DejaVu Sans", "Noto Sans", "Liberation Sans"],
        "monospace" => &["Courier New", "Consolas", "DejaVu Sans Mono", "Noto Sans Mono"],
        "cursive" => &["Comic Sans MS", "Brush Script MT"],
        "fantasy" => &["Impact", "Papyrus"],
        _ => &[],
    }
}

/// Map a family name onto a fontdb family, generic names included
pub(crate) fn to_fontdb_family(name: &str) -> fontdb::Family<'_> {
    match name.to_lowercase().as_str() {
        "serif" => fontdb::Family::Serif,
        "sans-serif" => fontdb::Family::SansSerif,
        "monospace" => fontdb::Family::Monospace,
        "cursive" => fontdb::Family::Cursive,
        "fantasy" => fontdb::Family::Fantasy,
        _ => fontdb::Family::Name(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_starts_generic() {
        let query = FontQuery::default();
        assert_eq!(query.families[0], "sans-serif");
        assert!(query.families.iter().any(|f| f == "DejaVu Sans"));
        assert_eq!(query.families.len(), 6);
    }

    #[test]
    fn test_generic_mapping() {
        assert!(matches!(to_fontdb_family("Sans-Serif"), fontdb::Family::SansSerif));
        assert!(matches!(to_fontdb_family("Noto Sans"), fontdb::Family::Name("Noto Sans")));
        assert!(resolve_generic_family("unknown").is_empty());
    }
}
