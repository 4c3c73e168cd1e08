//! Viewer actions
//!
//! User actions are routed through [`HANDLERS`], a table keyed by
//! [`ActionKind`]. A handler applies all of its model updates and reports
//! whether anything changed; the view is then refreshed once.

use std::cell::OnceCell;
use std::path::PathBuf;

use gv_text::{FontDatabase, FontQuery, FontRegistry};
use gv_unicode::{category_names, find_block, is_printable, parse_hex, BlockTable};

use crate::config::Config;
use crate::model::{FontEntry, Status, ViewerModel, BLOCK_TABLE_ERROR};
use crate::text::BlockText;
use crate::tooltip::Tooltip;
use crate::view::View;

/// Font directory used when none is configured
pub const DEFAULT_FONT_DIR: &str = "fonts";

/// A user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reload fonts from a directory; `None` reuses the current one
    ReloadFonts(Option<PathBuf>),
    /// Pick a font by file name
    SelectFont(String),
    /// Pick a display block by index
    SelectBlock(usize),
    /// Commit the char code entry
    CommitCharCode(String),
    /// Restore the block text, dropping the highlight
    ResetText,
    /// Hover the block text at a UTF-16 position
    Hover(usize),
}

/// Key of the handler table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    ReloadFonts,
    SelectFont,
    SelectBlock,
    CommitCharCode,
    ResetText,
    Hover,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ReloadFonts(_) => ActionKind::ReloadFonts,
            Action::SelectFont(_) => ActionKind::SelectFont,
            Action::SelectBlock(_) => ActionKind::SelectBlock,
            Action::CommitCharCode(_) => ActionKind::CommitCharCode,
            Action::ResetText => ActionKind::ResetText,
            Action::Hover(_) => ActionKind::Hover,
        }
    }
}

/// Action handler; returns whether the model changed
type Handler = fn(&mut Viewer, Action) -> bool;

/// Event-handler table
const HANDLERS: [(ActionKind, Handler); 6] = [
    (ActionKind::ReloadFonts, Viewer::on_reload_fonts as Handler),
    (ActionKind::SelectFont, Viewer::on_select_font as Handler),
    (ActionKind::SelectBlock, Viewer::on_select_block as Handler),
    (ActionKind::CommitCharCode, Viewer::on_commit_char_code as Handler),
    (ActionKind::ResetText, Viewer::on_reset_text as Handler),
    (ActionKind::Hover, Viewer::on_hover as Handler),
];

/// The glyph viewer
pub struct Viewer {
    model: ViewerModel,
    registry: FontRegistry,
    system_family: OnceCell<Option<String>>,
}

impl Viewer {
    /// Create a viewer from a loaded block table and the saved config.
    ///
    /// A failed table load only disables the block chooser.
    pub fn new(table: gv_unicode::Result<BlockTable>, config: &Config) -> Self {
        let mut model = ViewerModel::default();
        match table {
            Ok(table) => model.blocks = table.display_blocks(),
            Err(e) => {
                tracing::error!("{}", e);
                model.block_error = Some(BLOCK_TABLE_ERROR.to_string());
            }
        }
        model.font_dir = config
            .current_font_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_DIR));
        model.selected_font = config.current_font_file.clone().filter(|f| !f.is_empty());
        model.char_code = config.char_code.clone().unwrap_or_default();

        Self {
            model,
            registry: FontRegistry::new(),
            system_family: OnceCell::new(),
        }
    }

    /// Use a fixed system font family instead of querying the system
    pub fn with_system_family(self, family: Option<String>) -> Self {
        let _ = self.system_family.set(family);
        self
    }

    /// Startup sequence: load fonts, then apply the saved char code.
    ///
    /// `dir` overrides the configured font directory.
    pub fn start(&mut self, dir: Option<PathBuf>, view: &mut dyn View) {
        self.dispatch(Action::ReloadFonts(dir), view);
        let char_code = self.model.char_code.clone();
        self.dispatch(Action::CommitCharCode(char_code), view);
    }

    /// Route an action through the handler table
    pub fn dispatch(&mut self, action: Action, view: &mut dyn View) -> bool {
        let kind = action.kind();
        let Some(handler) = HANDLERS.iter().find(|(k, _)| *k == kind).map(|(_, h)| *h) else {
            tracing::warn!("No handler for {:?}", kind);
            return false;
        };

        let changed = handler(self, action);
        if changed {
            view.refresh(&self.model);
        }
        changed
    }

    /// Current model
    pub fn model(&self) -> &ViewerModel {
        &self.model
    }

    /// Font registry
    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    /// State to persist on shutdown
    pub fn config(&self) -> Config {
        Config {
            current_font_dir: Some(self.model.font_dir.display().to_string()),
            current_font_file: Some(self.model.selected_font.clone().unwrap_or_default()),
            char_code: Some(self.model.char_code.clone()),
        }
    }

    /// Glyphs the selected font has in the selected block
    pub fn coverage(&self) -> Option<usize> {
        let font = self.model.current_font()?;
        let block = self.model.current_block()?;
        self.registry
            .coverage(&font.file_name, block.begin_char_code, block.end_char_code)
            .map_err(|e| tracing::warn!("{}", e))
            .ok()
    }

    fn system_family(&self) -> Option<String> {
        self.system_family
            .get_or_init(|| FontDatabase::with_system_fonts().query_family(&FontQuery::default()))
            .clone()
    }

    fn on_reload_fonts(&mut self, action: Action) -> bool {
        let Action::ReloadFonts(dir) = action else { return false };
        let dir = dir.unwrap_or_else(|| self.model.font_dir.clone());

        self.registry.clear();
        self.model.fonts.clear();
        self.model.text.clear();
        self.model.highlight = None;
        self.model.tooltip = None;

        if !dir.is_dir() {
            tracing::warn!("Font directory {} doesn't exist", dir.display());
            self.model.status = Some(Status::new(format!("Font directory {} doesn't exist", dir.display())));
            return true;
        }
        self.model.font_dir = dir;

        let count = match self.registry.reload(&self.model.font_dir) {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!("{}", e);
                0
            }
        };
        self.model.fonts = self.registry
            .fonts()
            .iter()
            .map(|f| FontEntry {
                file_name: f.file_name.clone(),
                family: f.family.clone(),
            })
            .collect();
        self.model.status = Some(Status::new(format!("{} Fonts loaded", count)));

        if self.model.current_font().is_none() {
            if let Some(first) = self.model.fonts.first() {
                self.model.selected_font = Some(first.file_name.clone());
            }
        }
        self.rebuild_text();
        true
    }

    fn on_select_font(&mut self, action: Action) -> bool {
        let Action::SelectFont(file_name) = action else { return false };
        if file_name.is_empty() {
            return false;
        }
        if !self.model.fonts.iter().any(|f| f.file_name == file_name) {
            tracing::warn!("Font not loaded: {}", file_name);
            self.model.status = Some(Status::new(format!("Font not loaded: {}", file_name)));
            return true;
        }

        self.model.selected_font = Some(file_name);
        self.rebuild_text();
        true
    }

    fn on_select_block(&mut self, action: Action) -> bool {
        let Action::SelectBlock(index) = action else { return false };
        if index >= self.model.blocks.len() {
            return false;
        }

        self.model.selected_block = index;
        self.rebuild_text();
        true
    }

    fn on_commit_char_code(&mut self, action: Action) -> bool {
        let Action::CommitCharCode(text) = action else { return false };

        match parse_hex(&text) {
            Some(code_point) => {
                self.model.char_code = text;
                if let Some(index) = find_block(&self.model.blocks, code_point) {
                    self.model.selected_block = index;
                }
            }
            None => self.model.char_code.clear(),
        }
        self.rebuild_text();
        true
    }

    fn on_reset_text(&mut self, action: Action) -> bool {
        if action != Action::ResetText {
            return false;
        }
        self.rebuild_text();
        self.model.highlight = None;
        true
    }

    fn on_hover(&mut self, action: Action) -> bool {
        let Action::Hover(position) = action else { return false };

        self.model.tooltip = Tooltip::code_point_under(self.model.text.units(), position).map(|code_point| {
            let font = self.model.current_font();
            let has_glyph = font.is_some_and(|f| self.registry.has_glyph(&f.file_name, code_point));
            Tooltip::new(
                code_point,
                self.system_family(),
                font.map(|f| f.family.clone()),
                has_glyph,
            )
        });
        true
    }

    /// Rebuild the block text for the current font and block
    fn rebuild_text(&mut self) {
        if self.model.current_font().is_none() {
            return;
        }
        self.model.tooltip = None;
        self.model.highlight = None;

        let text = match self.model.current_block() {
            Some(block) => BlockText::build(block),
            None => BlockText::default(),
        };
        self.model.text = text;

        if let Some(code_point) = parse_hex(&self.model.char_code) {
            self.model.highlight = self.model.text.find(code_point);
            if !is_printable(code_point) {
                self.model.status = Some(Status::new(format!(
                    "This char U+{:X} is not printable. Categories: {}",
                    code_point,
                    category_names(code_point)
                )));
            }
        }
    }
}
