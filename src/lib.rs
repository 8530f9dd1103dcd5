// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. upload::UploadError)
    clippy::module_name_repetitions
)]

//! # Markdraft
//!
//! The editing engine behind a markdown blog editor.
//!
//! Markdraft turns toolbar commands into buffer edits:
//! - Inline toggles for bold, italic and code
//! - Per-line prefixes for headings, quotes and lists
//! - Links and images through a two-step input request
//! - Closing-marker completion while typing
//!
//! ## Architecture
//!
//! The core is a pure function from `(command, buffer, selection)` to an
//! [`dispatch::Outcome`]. An [`editor::Editor`] binds that function to a
//! host text field through the [`editor::TextSurface`] trait and commits
//! the result.
//!
//! ## Modules
//!
//! - [`command`]: Command identifiers and keyboard shortcuts
//! - [`format`]: Per-command transformation rules
//! - [`dispatch`]: Applying commands to a buffer
//! - [`autopair`]: Closing-marker completion
//! - [`editor`]: Host integration
//! - [`stats`]: Word count and reading time
//! - [`tags`]: Tag field cleanup and suggestions
//! - [`upload`]: Cover image checks
//! - [`preview`]: HTML preview
//! - [`config`]: Saved defaults

pub mod autopair;
pub mod command;
pub mod config;
pub mod dispatch;
pub mod editor;
pub mod format;
pub mod preview;
pub mod stats;
pub mod tags;
pub mod upload;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::command::Command;
    pub use crate::dispatch::{Applied, EditError, Outcome, apply, apply_named, resume};
    pub use crate::editor::{Editor, EditorBuffer, TextSurface};
    pub use crate::format::{InputResponse, PendingInput, PromptKind};
}
