//! glyphview - Unicode block glyph viewer
//!
//! Shows the code points of a Unicode block in fonts loaded from a
//! directory. The viewer state lives in a plain [`ViewerModel`] mutated by
//! the handlers of [`Viewer::dispatch`] and observed by a [`View`].

pub mod config;
pub mod model;
pub mod text;
pub mod tooltip;
pub mod view;
pub mod viewer;

pub use config::{Config, ConfigError};
pub use model::{FontEntry, Status, ViewerModel};
pub use text::BlockText;
pub use tooltip::Tooltip;
pub use view::{TerminalView, View};
pub use viewer::{Action, ActionKind, Viewer};
