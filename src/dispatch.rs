//! Command dispatch over a text buffer and selection.
//!
//! [`apply`] is a pure function: it reads the buffer and the selected range,
//! runs the command's rule and returns the buffer that should replace it
//! together with the new cursor. Committing the result is the host's job.
//!
//! Offsets are character offsets into the buffer.

use std::ops::Range;

use serde::Serialize;

use crate::command::Command;
use crate::format::{self, InputResponse, PendingInput, PromptKind, Step, Transformation};

/// Errors from dispatching a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("selection {start}..{end} is outside a buffer of {len} characters")]
    InvalidSelection { start: usize, end: usize, len: usize },
    #[error("the selection changed while waiting for {} input", .kind.command())]
    StaleSelection { kind: PromptKind },
}

/// A completed edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applied {
    /// Full buffer after the edit.
    pub text: String,
    /// Collapsed cursor position in `text`.
    pub cursor: usize,
    /// The text that was spliced in.
    pub inserted: String,
}

/// What a command did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Applied(Applied),
    /// Nothing changed: unknown command or cancelled input.
    Unchanged,
    /// The command is waiting for the host to collect input.
    NeedsInput(PendingInput),
}

impl Outcome {
    /// The buffer after this outcome, given the buffer it was computed from.
    pub fn text_or<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Self::Applied(applied) => &applied.text,
            Self::Unchanged | Self::NeedsInput(_) => original,
        }
    }
}

/// Apply `command` to `buffer[start..end]`.
pub fn apply(
    command: Command,
    buffer: &str,
    start: usize,
    end: usize,
) -> Result<Outcome, EditError> {
    let span = CharSpan::resolve(buffer, start, end)?;
    let selected = &buffer[span.bytes.clone()];
    match format::transform(command, selected) {
        Step::Done(transformation) => Ok(Outcome::Applied(splice(buffer, &span, transformation))),
        Step::NeedsInput(kind) => {
            tracing::debug!(%command, start, end, "waiting for input");
            Ok(Outcome::NeedsInput(PendingInput::new(kind, start, end, selected)))
        }
    }
}

/// Apply a command given by its toolbar identifier.
///
/// Unknown identifiers leave the buffer untouched.
pub fn apply_named(id: &str, buffer: &str, start: usize, end: usize) -> Result<Outcome, EditError> {
    match id.parse::<Command>() {
        Ok(command) => apply(command, buffer, start, end),
        Err(err) => {
            tracing::debug!(%err, "ignoring toolbar command");
            Ok(Outcome::Unchanged)
        }
    }
}

/// Finish a command that returned [`Outcome::NeedsInput`].
///
/// A cancel or an empty URL aborts without touching the buffer. The buffer
/// must still hold the captured selection at the captured range.
pub fn resume(
    pending: &PendingInput,
    buffer: &str,
    response: &InputResponse,
) -> Result<Outcome, EditError> {
    let InputResponse::Provided { url, text } = response else {
        tracing::debug!(kind = ?pending.kind, "input cancelled");
        return Ok(Outcome::Unchanged);
    };
    if url.is_empty() {
        tracing::debug!(kind = ?pending.kind, "empty url, aborting");
        return Ok(Outcome::Unchanged);
    }

    let stale = EditError::StaleSelection { kind: pending.kind };
    let span = CharSpan::resolve(buffer, pending.start, pending.end).map_err(|_| stale.clone())?;
    if buffer[span.bytes.clone()] != pending.selected {
        return Err(stale);
    }

    let transformation = pending.complete(url, text.as_deref());
    Ok(Outcome::Applied(splice(buffer, &span, transformation)))
}

/// Byte index of the character at `char_idx`, or the end of `text`.
pub(crate) fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(idx, _)| idx)
}

/// A validated selection, in characters and bytes.
struct CharSpan {
    start: usize,
    bytes: Range<usize>,
}

impl CharSpan {
    fn resolve(buffer: &str, start: usize, end: usize) -> Result<Self, EditError> {
        let len = buffer.chars().count();
        if start > end || end > len {
            return Err(EditError::InvalidSelection { start, end, len });
        }
        Ok(Self {
            start,
            bytes: byte_offset(buffer, start)..byte_offset(buffer, end),
        })
    }
}

fn splice(buffer: &str, span: &CharSpan, transformation: Transformation) -> Applied {
    let Transformation {
        new_text,
        cursor_offset,
    } = transformation;

    let mut text = String::with_capacity(buffer.len() + new_text.len());
    text.push_str(&buffer[..span.bytes.start]);
    text.push_str(&new_text);
    text.push_str(&buffer[span.bytes.end..]);

    // The offset can point before the buffer or past it; pin it inside.
    let insert_end = span.start + new_text.chars().count();
    let cursor = insert_end
        .saturating_add_signed(cursor_offset)
        .min(text.chars().count());

    tracing::trace!(start = span.start, inserted = %new_text, cursor, "spliced selection");
    Applied {
        text,
        cursor,
        inserted: new_text,
    }
}
