//! Edge case tests for gv-viewer
//!
//! Viewer actions, config persistence and tooltips. Tests that need real
//! font files use fonts installed on the system and return early when none
//! are found.

use std::fs;
use std::path::{Path, PathBuf};

use gv_unicode::BlockTable;
use gv_viewer::*;

/// View recording every refresh
#[derive(Default)]
struct RecordingView {
    refreshes: usize,
    statuses: Vec<String>,
}

impl View for RecordingView {
    fn refresh(&mut self, model: &ViewerModel) {
        self.refreshes += 1;
        if let Some(status) = &model.status {
            self.statuses.push(status.message.clone());
        }
    }
}

fn test_table() -> gv_unicode::Result<BlockTable> {
    BlockTable::from_json_str(
        r#"{ "blocks": [
            { "beginCharCode": "0000", "endCharCode": "0FFF", "name": "Test" },
            { "beginCharCode": "1F600", "endCharCode": "1F64F", "name": "Emoticons" }
        ] }"#,
    )
}

fn system_font(name: &str) -> Option<PathBuf> {
    ["/usr/share/fonts/truetype/dejavu", "/usr/share/fonts/dejavu", "/usr/share/fonts/TTF"]
        .iter()
        .map(|dir| Path::new(dir).join(name))
        .find(|path| path.is_file())
}

/// Font directory holding one copy of DejaVu Sans, if installed
fn dejavu_dir() -> Option<tempfile::TempDir> {
    let font = system_font("DejaVuSans.ttf")?;
    let dir = tempfile::tempdir().unwrap();
    fs::copy(font, dir.path().join("DejaVuSans.ttf")).unwrap();
    Some(dir)
}

// ============================================================================
// BLOCK SELECTION TESTS
// ============================================================================

#[test]
fn test_blocks_listed_in_order() {
    let viewer = Viewer::new(test_table(), &Config::default());
    let labels: Vec<&str> = viewer.model().blocks.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec![
        "Test 1/4[U+0 - U+3FF]",
        "Test 2/4[U+400 - U+7FF]",
        "Test 3/4[U+800 - U+BFF]",
        "Test 4/4[U+C00 - U+FFF]",
        "Emoticons[U+1F600 - U+1F64F]",
    ]);
}

#[test]
fn test_hex_entry_navigation() {
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();

    viewer.dispatch(Action::CommitCharCode("500".into()), &mut view);
    let block = viewer.model().current_block().unwrap();
    assert_eq!((block.begin_char_code, block.end_char_code), (0x400, 0x7FF));

    viewer.dispatch(Action::CommitCharCode("zz".into()), &mut view);
    assert_eq!(viewer.model().selected_block, 1);
    assert_eq!(viewer.model().char_code, "");
}

#[test]
fn test_hex_entry_outside_all_blocks() {
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();
    viewer.dispatch(Action::SelectBlock(2), &mut view);
    viewer.dispatch(Action::CommitCharCode("50000".into()), &mut view);
    assert_eq!(viewer.model().selected_block, 2);
    assert_eq!(viewer.model().char_code, "50000");
}

#[test]
fn test_one_refresh_per_action() {
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();
    viewer.dispatch(Action::SelectBlock(3), &mut view);
    viewer.dispatch(Action::CommitCharCode("41".into()), &mut view);
    assert_eq!(view.refreshes, 2);
}

#[test]
fn test_text_needs_a_font() {
    let dir = tempfile::tempdir().unwrap();
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();
    viewer.start(Some(dir.path().to_path_buf()), &mut view);
    viewer.dispatch(Action::SelectBlock(4), &mut view);
    assert!(viewer.model().text.is_empty());
    assert_eq!(view.statuses.first().map(String::as_str), Some("0 Fonts loaded"));
}

#[test]
fn test_missing_font_dir() {
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();
    viewer.dispatch(Action::ReloadFonts(Some(PathBuf::from("/nonexistent/fonts"))), &mut view);
    assert!(viewer.model().fonts.is_empty());
    assert!(viewer.model().status.as_ref().unwrap().message.contains("doesn't exist"));
}

#[test]
fn test_select_unknown_font() {
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();
    assert!(!viewer.dispatch(Action::SelectFont(String::new()), &mut view));
    viewer.dispatch(Action::SelectFont("missing.ttf".into()), &mut view);
    assert!(viewer.model().selected_font.is_none());
}

#[test]
fn test_hover_without_text() {
    let mut viewer = Viewer::new(test_table(), &Config::default()).with_system_family(None);
    let mut view = RecordingView::default();
    viewer.dispatch(Action::Hover(0), &mut view);
    assert!(viewer.model().tooltip.is_none());
}

// ============================================================================
// CONFIG TESTS
// ============================================================================

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config {
        current_font_dir: Some("/tmp/fonts".into()),
        current_font_file: Some("NotoSans.ttf".into()),
        char_code: Some("1F600".into()),
    };
    assert!(config.save_or_log(&path));
    assert_eq!(Config::load(&path).unwrap(), config);
}

#[test]
fn test_config_missing_file_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(&dir.path().join("config.json"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_malformed_file_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ \"mCurrentFontDir\": ").unwrap();
    assert!(matches!(Config::load(&path), Err(ConfigError::Json(_))));
    assert_eq!(Config::load_or_default(&path), Config::default());
}

#[test]
fn test_config_unwritable_path() {
    let config = Config::default();
    assert!(!config.save_or_log(Path::new("/nonexistent/dir/config.json")));
}

#[test]
fn test_viewer_state_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();
    viewer.start(Some(dir.path().to_path_buf()), &mut view);
    viewer.dispatch(Action::CommitCharCode("1F600".into()), &mut view);

    let config = viewer.config();
    assert_eq!(config.current_font_dir, Some(dir.path().display().to_string()));
    assert_eq!(config.char_code.as_deref(), Some("1F600"));
}

#[test]
fn test_block_table_error_keeps_viewer_usable() {
    let dir = tempfile::tempdir().unwrap();
    let table = BlockTable::from_json_str(
        r#"{ "blocks": [ { "beginCharCode": "0", "endCharCode": "zz", "name": "Bad" } ] }"#,
    );
    let mut viewer = Viewer::new(table, &Config::default());
    let mut view = RecordingView::default();
    assert!(viewer.model().block_error.is_some());
    viewer.start(Some(dir.path().to_path_buf()), &mut view);
    viewer.dispatch(Action::CommitCharCode("41".into()), &mut view);
    assert!(viewer.model().current_block().is_none());
}

// ============================================================================
// SYSTEM FONT TESTS
// ============================================================================

#[test]
fn test_show_block_with_font() {
    let Some(dir) = dejavu_dir() else { return };
    let mut viewer = Viewer::new(test_table(), &Config::default()).with_system_family(Some("Sans".into()));
    let mut view = RecordingView::default();

    viewer.start(Some(dir.path().to_path_buf()), &mut view);
    assert_eq!(viewer.model().selected_font.as_deref(), Some("DejaVuSans.ttf"));

    viewer.dispatch(Action::CommitCharCode("41".into()), &mut view);
    assert_eq!(viewer.model().selected_block, 0);
    // Printable code points start at U+0020
    assert_eq!(viewer.model().highlight, Some(0x21..0x22));
    assert!(viewer.coverage().unwrap() > 0);

    viewer.dispatch(Action::ResetText, &mut view);
    assert_eq!(viewer.model().highlight, None);
    assert!(!viewer.model().text.is_empty());
}

#[test]
fn test_unprintable_char_status() {
    let Some(dir) = dejavu_dir() else { return };
    let mut viewer = Viewer::new(test_table(), &Config::default());
    let mut view = RecordingView::default();
    viewer.start(Some(dir.path().to_path_buf()), &mut view);
    viewer.dispatch(Action::CommitCharCode("7".into()), &mut view);
    assert_eq!(
        viewer.model().status.as_ref().unwrap().message,
        "This char U+7 is not printable. Categories: Other_Control (Cc)"
    );
    assert_eq!(viewer.model().highlight, None);
}

#[test]
fn test_private_use_char_status() {
    let Some(dir) = dejavu_dir() else { return };
    let table = BlockTable::from_json_str(
        r#"{ "blocks": [
            { "beginCharCode": "E000", "endCharCode": "E0FF", "name": "Private Use Area" }
        ] }"#,
    );
    let mut viewer = Viewer::new(table, &Config::default());
    let mut view = RecordingView::default();
    viewer.start(Some(dir.path().to_path_buf()), &mut view);
    viewer.dispatch(Action::CommitCharCode("E000".into()), &mut view);
    assert!(viewer.model().text.is_empty());
    assert_eq!(
        viewer.model().status.as_ref().unwrap().message,
        "This char U+E000 is not printable. Categories: Other_PrivateUse (Co)"
    );
}

#[test]
fn test_hover_emoji_pair() {
    let Some(dir) = dejavu_dir() else { return };
    let mut viewer = Viewer::new(test_table(), &Config::default()).with_system_family(Some("Sans".into()));
    let mut view = RecordingView::default();
    viewer.start(Some(dir.path().to_path_buf()), &mut view);
    viewer.dispatch(Action::SelectBlock(4), &mut view);

    viewer.dispatch(Action::Hover(0), &mut view);
    let tooltip = viewer.model().tooltip.clone().unwrap();
    assert_eq!(tooltip.code_point, 0x1F600);
    assert_eq!(tooltip.label(), "U+1F600");
    assert_eq!(tooltip.system_family.as_deref(), Some("Sans"));
    assert!(tooltip.test_family.is_some());
    assert_eq!(tooltip.categories, "Symbol_Other (So)");

    // Low surrogate half of the pair is reported as itself
    viewer.dispatch(Action::Hover(1), &mut view);
    assert_eq!(viewer.model().tooltip.as_ref().unwrap().code_point, 0xDE00);
}

#[test]
fn test_configured_font_restored() {
    let Some(dir) = dejavu_dir() else { return };
    let config = Config {
        current_font_dir: Some(dir.path().display().to_string()),
        current_font_file: Some("DejaVuSans.ttf".into()),
        char_code: Some("400".into()),
    };
    let mut viewer = Viewer::new(test_table(), &config);
    let mut view = RecordingView::default();
    viewer.start(None, &mut view);
    assert_eq!(viewer.model().current_font().unwrap().file_name, "DejaVuSans.ttf");
    assert_eq!(viewer.model().selected_block, 1);
}
