//! Markdown transformations applied to a selection.
//!
//! Each command turns the selected text into replacement text plus a cursor
//! offset measured from the end of that replacement. The rules here know
//! nothing about the surrounding buffer; splicing happens in
//! [`crate::dispatch`].
//!
//! - Inline wrappers (`bold`, `italic`, `code`) toggle their markers.
//! - Line prefixes (`heading`, `quote`, `ul`, `ol`) toggle per line.
//! - `link` and `image` need a URL and display text before they can run.

mod inline;
mod lines;
mod prompt;

pub use prompt::{InputField, InputResponse, PendingInput, PromptKind, URL_PLACEHOLDER};

use serde::Serialize;

use crate::command::Command;

/// Replacement text for a selection and where the cursor lands afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transformation {
    /// Text that replaces the selection.
    pub new_text: String,
    /// Cursor offset relative to the end of `new_text`, in characters.
    pub cursor_offset: isize,
}

impl Transformation {
    pub(crate) fn new(new_text: impl Into<String>, cursor_offset: isize) -> Self {
        Self {
            new_text: new_text.into(),
            cursor_offset,
        }
    }

    /// Replacement that leaves the cursor right after the inserted text.
    pub(crate) fn at_end(new_text: impl Into<String>) -> Self {
        Self::new(new_text, 0)
    }
}

/// Result of running a command's rule on a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The command produced its replacement.
    Done(Transformation),
    /// The command has to ask the user for values first.
    NeedsInput(PromptKind),
}

/// Run the rule for `command` over `selected`.
pub fn transform(command: Command, selected: &str) -> Step {
    let transformation = match command {
        Command::Bold => inline::bold(selected),
        Command::Italic => inline::italic(selected),
        Command::Code => inline::code(selected),
        Command::Heading => lines::heading(selected),
        Command::Quote => lines::quote(selected),
        Command::UnorderedList => lines::unordered_list(selected),
        Command::OrderedList => lines::ordered_list(selected),
        Command::Link => return Step::NeedsInput(PromptKind::Link),
        Command::Image => return Step::NeedsInput(PromptKind::Image),
    };
    Step::Done(transformation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(command: Command, selected: &str) -> Transformation {
        match transform(command, selected) {
            Step::Done(t) => t,
            Step::NeedsInput(kind) => panic!("{command} unexpectedly asked for {kind:?} input"),
        }
    }

    #[test]
    fn test_prompted_commands_need_input() {
        assert_eq!(
            transform(Command::Link, "docs"),
            Step::NeedsInput(PromptKind::Link)
        );
        assert_eq!(
            transform(Command::Image, ""),
            Step::NeedsInput(PromptKind::Image)
        );
    }

    #[test]
    fn test_every_other_command_completes() {
        for command in Command::ALL.into_iter().filter(|c| !c.needs_input()) {
            let t = done(command, "text");
            assert!(!t.new_text.is_empty(), "{command} produced nothing");
        }
    }

    #[test]
    fn test_bold_wraps_selection() {
        assert_eq!(done(Command::Bold, "hello"), Transformation::new("**hello**", 0));
    }

    #[test]
    fn test_heading_prefixes_lines() {
        assert_eq!(
            done(Command::Heading, "one\ntwo"),
            Transformation::at_end("# one\n# two")
        );
    }
}
