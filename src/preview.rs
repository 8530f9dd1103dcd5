//! Quick HTML preview of a draft.
//!
//! This is a line-oriented substitution pass, not a markdown parser. Rules
//! run in a fixed order over the whole text, and later rules see the output
//! of earlier ones. The output is not escaped.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::tags::split_tags;

/// Title used when the draft has none.
pub const UNTITLED: &str = "Untitled";

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("preview rule pattern")
}

// Rules applied before fenced blocks, in order.
static INLINE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (rule(r"(?m)^##### (.*)$"), "<h5>${1}</h5>"),
        (rule(r"(?m)^#### (.*)$"), "<h4>${1}</h4>"),
        (rule(r"(?m)^### (.*)$"), "<h3>${1}</h3>"),
        (rule(r"(?m)^## (.*)$"), "<h2>${1}</h2>"),
        (rule(r"(?m)^# (.*)$"), "<h1>${1}</h1>"),
        (rule(r"\*\*(.*?)\*\*"), "<strong>${1}</strong>"),
        (rule(r"\*(.*?)\*"), "<em>${1}</em>"),
        (rule(r"`([^`]+)`"), "<code>${1}</code>"),
    ]
});

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| rule(r"```[\s\S]*?```"));

// Rules applied after fenced blocks, in order.
static BLOCK_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (rule(r"!\[(.*?)\]\((.*?)\)"), r#"<img src="${2}" alt="${1}">"#),
        (rule(r"\[(.*?)\]\((.*?)\)"), r#"<a href="${2}">${1}</a>"#),
        (rule(r"(?m)^> (.*)$"), "<blockquote>${1}</blockquote>"),
        (rule(r"(?m)^- (.*)$"), "<li>${1}</li>"),
        (rule(r"(?m)^[0-9]+\. (.*)$"), "<li>${1}</li>"),
    ]
});

/// Convert a markdown body to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let mut html = content.to_owned();
    for (pattern, template) in INLINE_RULES.iter() {
        html = pattern.replace_all(&html, *template).into_owned();
    }
    html = FENCED_BLOCK
        .replace_all(&html, |caps: &Captures<'_>| {
            format!("<pre><code>{}</code></pre>", caps[0].replace("```", ""))
        })
        .into_owned();
    for (pattern, template) in BLOCK_RULES.iter() {
        html = pattern.replace_all(&html, *template).into_owned();
    }
    html.replace("\n\n", "</p><p>").replace('\n', "<br>")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreviewError {
    #[error("Please add some content to preview.")]
    Empty,
}

/// Everything a host needs to show a preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub title: String,
    pub body_html: String,
    pub tags: Vec<String>,
}

impl Preview {
    /// Build a preview, refusing a draft with neither title nor content.
    pub fn build(title: &str, content: &str, tags: &str) -> Result<Self, PreviewError> {
        if title.is_empty() && content.is_empty() {
            return Err(PreviewError::Empty);
        }
        Ok(Self {
            title: if title.is_empty() { UNTITLED } else { title }.to_owned(),
            body_html: render_markdown(content),
            tags: split_tags(tags).map(ToOwned::to_owned).collect(),
        })
    }
}

/// Title, tag line when there are tags, a blank line, then the body.
impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if !self.tags.is_empty() {
            writeln!(f, "Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f)?;
        write!(f, "{}", self.body_html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(render_markdown("# One"), "<h1>One</h1>");
        assert_eq!(render_markdown("### Three"), "<h3>Three</h3>");
        assert_eq!(render_markdown("##### Five"), "<h5>Five</h5>");
    }

    #[test]
    fn test_heading_needs_space() {
        assert_eq!(render_markdown("#tag"), "#tag");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            render_markdown("a **b** and *c*"),
            "a <strong>b</strong> and <em>c</em>"
        );
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(render_markdown("run `cargo`"), "run <code>cargo</code>");
    }

    #[test]
    fn test_empty_fenced_block() {
        assert_eq!(render_markdown("``````"), "<pre><code></code></pre>");
    }

    #[test]
    fn test_inline_code_rule_runs_before_fences() {
        // Inline code may span lines, so it claims the inner backticks of a
        // multi-line fence first.
        assert_eq!(
            render_markdown("```\nx\n```"),
            "``<code><br>x<br></code>``"
        );
    }

    #[test]
    fn test_image_before_link() {
        assert_eq!(
            render_markdown("![cat](c.png) [home](/)"),
            r#"<img src="c.png" alt="cat"> <a href="/">home</a>"#
        );
    }

    #[test]
    fn test_quote_and_lists() {
        assert_eq!(
            render_markdown("> said\n- a\n1. b"),
            "<blockquote>said</blockquote><br><li>a</li><br><li>b</li>"
        );
    }

    #[test]
    fn test_list_number_must_be_ascii() {
        assert_eq!(render_markdown("2. b"), "<li>b</li>");
        assert_eq!(render_markdown("\u{663}. b"), "\u{663}. b");
    }

    #[test]
    fn test_paragraphs_and_breaks() {
        assert_eq!(render_markdown("a\nb\n\nc"), "a<br>b</p><p>c");
    }

    #[test]
    fn test_empty_preview_is_refused() {
        assert_eq!(Preview::build("", "", "rust"), Err(PreviewError::Empty));
    }

    #[test]
    fn test_preview_defaults_title() {
        let preview = Preview::build("", "hello", "").unwrap();
        assert_eq!(preview.title, "Untitled");
        assert_eq!(preview.body_html, "hello");
        assert!(preview.tags.is_empty());
    }

    #[test]
    fn test_preview_display_shows_title_and_tags() {
        let preview = Preview::build("Post", "**hi**", "rust, ai").unwrap();
        assert_eq!(
            preview.to_string(),
            "Post\nTags: rust, ai\n\n<strong>hi</strong>"
        );
        let untagged = Preview::build("", "hi", "").unwrap();
        assert_eq!(untagged.to_string(), "Untitled\n\nhi");
    }

    #[test]
    fn test_preview_tags_are_trimmed() {
        let preview = Preview::build("Post", "", " rust , ai,").unwrap();
        assert_eq!(preview.tags, vec!["rust", "ai"]);
        assert_eq!(preview.body_html, "");
    }
}
