//! Rendering layer interface

use std::io::Write;

use crate::model::ViewerModel;

/// Observer of the viewer model.
///
/// `refresh` is called once per dispatched action that changed the model,
/// after all of the action's updates are applied.
pub trait View {
    fn refresh(&mut self, model: &ViewerModel);
}

/// View printing status changes to a writer
pub struct TerminalView<W: Write> {
    out: W,
    last_status: Option<String>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_status: None }
    }
}

impl<W: Write> View for TerminalView<W> {
    fn refresh(&mut self, model: &ViewerModel) {
        let status = model.status.as_ref().map(|s| s.message.clone());
        if status != self.last_status {
            if let Some(message) = &status {
                if let Err(e) = writeln!(self.out, "{}", message) {
                    tracing::warn!("Couldn't write status: {}", e);
                }
            }
            self.last_status = status;
        }
    }
}
