//! Two-step input for commands that need a URL and display text.
//!
//! Instead of blocking on a modal prompt, the dispatcher hands the host a
//! [`PendingInput`]. The host collects the fields however it likes and
//! answers with an [`InputResponse`].

use serde::{Deserialize, Serialize};

use super::Transformation;
use crate::command::Command;

/// Default shown in the URL field.
pub const URL_PLACEHOLDER: &str = "https://";

/// Which prompted command is waiting for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Link,
    Image,
}

impl PromptKind {
    pub const fn command(self) -> Command {
        match self {
            Self::Link => Command::Link,
            Self::Image => Command::Image,
        }
    }

    const fn url_label(self) -> &'static str {
        match self {
            Self::Link => "Enter URL:",
            Self::Image => "Enter image URL:",
        }
    }

    const fn text_label(self) -> &'static str {
        match self {
            Self::Link => "Enter link text:",
            Self::Image => "Enter alt text:",
        }
    }
}

/// One value the host must collect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputField {
    pub name: &'static str,
    pub label: &'static str,
    /// Pre-filled value. `None` when it depends on an earlier field; see
    /// [`PendingInput::text_default`].
    pub default: Option<String>,
}

/// A link or image command parked until the host supplies its values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInput {
    pub kind: PromptKind,
    /// Selection start captured when the command was issued.
    pub start: usize,
    /// Selection end captured when the command was issued.
    pub end: usize,
    /// Text that was selected at that time.
    pub selected: String,
}

impl PendingInput {
    pub(crate) fn new(kind: PromptKind, start: usize, end: usize, selected: &str) -> Self {
        Self {
            kind,
            start,
            end,
            selected: selected.to_owned(),
        }
    }

    /// The fields to collect, in order: URL first, then display text.
    pub fn fields(&self) -> [InputField; 2] {
        let text_default = match (self.kind, self.selected.is_empty()) {
            (PromptKind::Link, true) => None,
            _ => Some(self.text_default("")),
        };
        [
            InputField {
                name: "url",
                label: self.kind.url_label(),
                default: Some(URL_PLACEHOLDER.to_owned()),
            },
            InputField {
                name: "text",
                label: self.kind.text_label(),
                default: text_default,
            },
        ]
    }

    /// Display text used when the host does not supply one.
    ///
    /// The selection wins; an empty link selection falls back to the URL and
    /// an empty image selection to no alt text.
    pub fn text_default(&self, url: &str) -> String {
        if !self.selected.is_empty() {
            return self.selected.clone();
        }
        match self.kind {
            PromptKind::Link => url.to_owned(),
            PromptKind::Image => String::new(),
        }
    }

    pub(crate) fn complete(&self, url: &str, text: Option<&str>) -> Transformation {
        let text = text.map_or_else(|| self.text_default(url), ToOwned::to_owned);
        let new_text = match self.kind {
            PromptKind::Link => format!("[{text}]({url})"),
            PromptKind::Image => format!("![{text}]({url})"),
        };
        let offset = if self.selected.is_empty() {
            text.chars().count() as isize + 2
        } else {
            0
        };
        Transformation::new(new_text, offset)
    }
}

/// The host's answer to a [`PendingInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputResponse {
    /// Values collected from the user. An empty URL counts as a cancel.
    Provided { url: String, text: Option<String> },
    Cancelled,
}

impl InputResponse {
    pub fn provided(url: impl Into<String>, text: Option<String>) -> Self {
        Self::Provided {
            url: url.into(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending(kind: PromptKind, selected: &str) -> PendingInput {
        PendingInput::new(kind, 0, selected.chars().count(), selected)
    }

    #[test]
    fn test_link_fields_with_selection() {
        let fields = pending(PromptKind::Link, "docs").fields();
        assert_eq!(fields[0].name, "url");
        assert_eq!(fields[0].label, "Enter URL:");
        assert_eq!(fields[0].default.as_deref(), Some("https://"));
        assert_eq!(fields[1].name, "text");
        assert_eq!(fields[1].default.as_deref(), Some("docs"));
    }

    #[test]
    fn test_link_text_default_depends_on_url_without_selection() {
        let p = pending(PromptKind::Link, "");
        assert_eq!(p.fields()[1].default, None);
        assert_eq!(p.text_default("https://a.io"), "https://a.io");
    }

    #[test]
    fn test_image_alt_defaults_to_empty() {
        let p = pending(PromptKind::Image, "");
        assert_eq!(p.fields()[1].label, "Enter alt text:");
        assert_eq!(p.fields()[1].default.as_deref(), Some(""));
    }

    #[test]
    fn test_complete_link_with_selection() {
        let t = pending(PromptKind::Link, "docs").complete("https://a.io", None);
        assert_eq!(t, Transformation::new("[docs](https://a.io)", 0));
    }

    #[test]
    fn test_complete_link_without_selection_offsets_by_text() {
        let t = pending(PromptKind::Link, "").complete("u", Some("here"));
        assert_eq!(t, Transformation::new("[here](u)", 6));
    }

    #[test]
    fn test_complete_image() {
        let t = pending(PromptKind::Image, "").complete("cat.png", Some("a cat"));
        assert_eq!(t, Transformation::new("![a cat](cat.png)", 7));
    }

    #[test]
    fn test_explicit_empty_text_is_kept() {
        let t = pending(PromptKind::Link, "docs").complete("u", Some(""));
        assert_eq!(t.new_text, "[](u)");
    }

    #[test]
    fn test_response_serde_shape() {
        let json = serde_json::to_string(&InputResponse::Cancelled).unwrap();
        assert_eq!(json, r#"{"type":"cancelled"}"#);
        let parsed: InputResponse =
            serde_json::from_str(r#"{"type":"provided","url":"u","text":null}"#).unwrap();
        assert_eq!(parsed, InputResponse::provided("u", None));
    }
}
