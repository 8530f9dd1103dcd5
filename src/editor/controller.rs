use crossterm::event::KeyEvent;

use super::TextSurface;
use crate::autopair::{self, Pair};
use crate::command::Command;
use crate::dispatch::{self, EditError, Outcome};
use crate::format::{InputResponse, PendingInput};

/// A markdown editor bound to one text surface.
///
/// Each instance owns its surface, so a page can host any number of
/// independent editors.
#[derive(Debug)]
pub struct Editor<S> {
    surface: S,
    autopair: bool,
    pending: Option<PendingInput>,
}

impl<S: TextSurface> Editor<S> {
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            autopair: true,
            pending: None,
        }
    }

    /// Enable or disable closing-marker completion.
    #[must_use]
    pub fn with_autopair(mut self, enabled: bool) -> Self {
        self.autopair = enabled;
        self
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The link or image command waiting for input, if any.
    pub const fn pending(&self) -> Option<&PendingInput> {
        self.pending.as_ref()
    }

    /// Run `command` on the surface's current selection.
    ///
    /// An applied edit is committed to the surface: the value is replaced,
    /// the cursor moved, the field focused and a change notification fired.
    /// A link or image command is parked until [`resume`](Self::resume);
    /// later edits leave it parked.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, EditError> {
        let value = self.surface.value();
        let selection = self.surface.selection();
        let outcome = dispatch::apply(command, &value, selection.start, selection.end)?;
        self.settle(&outcome);
        Ok(outcome)
    }

    /// Run a command named by a toolbar control. Unknown names do nothing.
    pub fn execute_named(&mut self, id: &str) -> Result<Outcome, EditError> {
        match id.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                tracing::debug!(%err, "ignoring toolbar command");
                Ok(Outcome::Unchanged)
            }
        }
    }

    /// Handle a key press. Returns `None` when the key is not a shortcut
    /// and should reach the text field.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Outcome>, EditError> {
        let Some(command) = Command::from_shortcut(key) else {
            return Ok(None);
        };
        self.execute(command).map(Some)
    }

    /// Complete a marker pair after the user inserted text.
    ///
    /// The closer goes right after the cursor and the cursor stays put.
    pub fn handle_insert(&mut self) -> Option<Pair> {
        if !self.autopair {
            return None;
        }
        let cursor = self.surface.selection().start;
        let value = self.surface.value();
        let pair = autopair::completion_at(&value, cursor)?;
        let completed = autopair::close_pair(&value, cursor)?;
        self.surface.set_value(&completed.text);
        self.surface.set_selection(completed.cursor, completed.cursor);
        Some(pair)
    }

    /// Answer the parked link or image command.
    ///
    /// With nothing parked this is a no-op.
    pub fn resume(&mut self, response: &InputResponse) -> Result<Outcome, EditError> {
        let Some(pending) = self.pending.take() else {
            return Ok(Outcome::Unchanged);
        };
        let value = self.surface.value();
        let outcome = dispatch::resume(&pending, &value, response)?;
        self.settle(&outcome);
        Ok(outcome)
    }

    fn settle(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Applied(applied) => {
                self.surface.set_value(&applied.text);
                self.surface.set_selection(applied.cursor, applied.cursor);
                self.surface.focus();
                self.surface.notify_change();
            }
            Outcome::NeedsInput(pending) => {
                if let Some(previous) = self.pending.replace(pending.clone()) {
                    tracing::debug!(kind = ?previous.kind, "dropping unanswered input request");
                }
            }
            Outcome::Unchanged => {}
        }
    }
}
