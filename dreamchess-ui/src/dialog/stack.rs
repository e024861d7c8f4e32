//! Bounded stack of open dialogs with deferred destruction

use tracing::{debug, trace};

use crate::core::{Context, UiEvent};
use crate::dialog::{Dialog, DialogPosition, DialogStyle};
use crate::error::DialogError;
use crate::render::Canvas;

/// Most dialogs that can be open, and most that can await destruction.
pub const DIALOG_MAX: usize = 10;

/// Open dialogs, topmost last, plus closed dialogs waiting for `cleanup`.
///
/// A dialog is either open, pending destruction, or gone. Closing only moves
/// it to the pending list so a dialog can close itself from its own callback.
#[derive(Debug, Default)]
pub struct DialogStack {
    open: Vec<Dialog>,
    closed: Vec<Dialog>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes `dialog` on top. A full stack hands it back in the error.
    pub fn open(&mut self, dialog: Dialog) -> Result<(), DialogError> {
        if self.open.len() == DIALOG_MAX {
            return Err(DialogError::StackFull(dialog));
        }
        debug!(depth = self.open.len() + 1, modal = dialog.is_modal(), "dialog opened");
        self.open.push(dialog);
        Ok(())
    }

    /// Moves the top dialog to the pending list. With the pending list full
    /// the dialog stays open.
    pub fn close(&mut self) -> Result<(), DialogError> {
        if self.open.is_empty() {
            return Err(DialogError::Empty);
        }
        if self.closed.len() == DIALOG_MAX {
            return Err(DialogError::PendingFull);
        }
        if let Some(dialog) = self.open.pop() {
            self.closed.push(dialog);
        }
        debug!(depth = self.open.len(), "dialog closed");
        Ok(())
    }

    /// Destroys pending dialogs in the order they were closed. Returns how many.
    pub fn cleanup(&mut self) -> usize {
        let count = self.closed.len();
        if count > 0 {
            debug!(count, "destroying closed dialogs");
        }
        for dialog in self.closed.drain(..) {
            drop(dialog);
        }
        count
    }

    pub fn current(&self) -> Option<&Dialog> {
        self.open.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Dialog> {
        self.open.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.closed.len()
    }

    /// Gives `event` to the top dialog. Escape closes a non-modal dialog
    /// without reaching its widgets. Returns whether anything handled it.
    pub fn input(&mut self, event: UiEvent, ctx: &mut Context<'_>) -> Result<bool, DialogError> {
        let Some(modal) = self.current().map(Dialog::is_modal) else {
            return Ok(false);
        };
        if event == UiEvent::Escape && !modal {
            self.close()?;
            return Ok(true);
        }
        let Some(dialog) = self.open.last_mut() else {
            return Ok(false);
        };
        let handled = dialog.widget_mut().on_event(event, ctx);
        trace!(?event, handled, "dialog input");
        Ok(handled)
    }

    /// Renders the top dialog only.
    pub fn render(&self, canvas: &mut Canvas<'_>, style: &DialogStyle, position: &DialogPosition) {
        if let Some(dialog) = self.current() {
            dialog.render(canvas, style, position);
        }
    }
}
