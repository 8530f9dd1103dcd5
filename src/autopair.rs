//! Closing-marker completion after typing.
//!
//! A best-effort helper: after each insertion, if the text right before the
//! cursor is a known opener, its closer is inserted after the cursor. There
//! is no nesting check, so fast typing or pasting can leave extra closers.

use serde::Serialize;

use crate::dispatch::{Applied, byte_offset};

/// An opener and the closer inserted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pair {
    pub open: &'static str,
    pub close: &'static str,
}

const fn pair(open: &'static str, close: &'static str) -> Pair {
    Pair { open, close }
}

/// Pairs in lookup order. The first match wins, so the triple backtick
/// entry is shadowed by the single one.
pub const PAIRS: [Pair; 7] = [
    pair("**", "**"),
    pair("*", "*"),
    pair("`", "`"),
    pair("```", "```"),
    pair("(", ")"),
    pair("[", "]"),
    pair("{", "}"),
];

/// The pair whose opener ends exactly at `cursor`, if any.
pub fn completion_at(text: &str, cursor: usize) -> Option<Pair> {
    let before = &text[..byte_offset(text, cursor)];
    PAIRS.iter().copied().find(|p| before.ends_with(p.open))
}

/// Insert the matching closer at `cursor`, leaving the cursor where it is.
pub fn close_pair(text: &str, cursor: usize) -> Option<Applied> {
    let pair = completion_at(text, cursor)?;
    let at = byte_offset(text, cursor);

    let mut completed = String::with_capacity(text.len() + pair.close.len());
    completed.push_str(&text[..at]);
    completed.push_str(pair.close);
    completed.push_str(&text[at..]);

    tracing::trace!(open = pair.open, cursor, "closing pair");
    Some(Applied {
        text: completed,
        cursor: cursor.min(text.chars().count()),
        inserted: pair.close.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paren_is_closed() {
        let a = close_pair("call(", 5).unwrap();
        assert_eq!(a.text, "call()");
        assert_eq!(a.cursor, 5);
        assert_eq!(a.inserted, ")");
    }

    #[test]
    fn test_brackets_and_braces() {
        assert_eq!(close_pair("[", 1).unwrap().text, "[]");
        assert_eq!(close_pair("{", 1).unwrap().text, "{}");
    }

    #[test]
    fn test_double_star_wins_over_single() {
        assert_eq!(completion_at("**", 2), Some(pair("**", "**")));
        assert_eq!(close_pair("**", 2).unwrap().text, "****");
    }

    #[test]
    fn test_single_star() {
        assert_eq!(completion_at("a *", 3), Some(pair("*", "*")));
    }

    #[test]
    fn test_triple_backtick_shadowed_by_single() {
        assert_eq!(completion_at("```", 3), Some(pair("`", "`")));
        assert_eq!(close_pair("```", 3).unwrap().text, "````");
    }

    #[test]
    fn test_only_text_before_cursor_matters() {
        assert_eq!(completion_at("(abc", 4), None);
        assert_eq!(completion_at("a(bc", 2), Some(pair("(", ")")));
        assert_eq!(close_pair("a(bc", 2).unwrap().text, "a()bc");
    }

    #[test]
    fn test_cursor_at_start() {
        assert_eq!(completion_at("(", 0), None);
    }

    #[test]
    fn test_plain_text_has_no_completion() {
        assert!(close_pair("hello", 5).is_none());
    }

    #[test]
    fn test_closer_is_not_an_opener() {
        assert!(close_pair("()", 2).is_none());
    }

    #[test]
    fn test_multibyte_text_before_opener() {
        let a = close_pair("né(", 3).unwrap();
        assert_eq!(a.text, "né()");
        assert_eq!(a.cursor, 3);
    }

    #[test]
    fn test_redundant_closers_are_not_prevented() {
        let a = close_pair("(()", 2).unwrap();
        assert_eq!(a.text, "(())");
    }
}
