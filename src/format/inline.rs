use super::Transformation;

pub(super) fn bold(selected: &str) -> Transformation {
    toggle_wrap(selected, "**")
}

pub(super) fn italic(selected: &str) -> Transformation {
    toggle_wrap(selected, "*")
}

/// Multi-line selections become a fenced block; anything else toggles
/// inline backticks.
pub(super) fn code(selected: &str) -> Transformation {
    if selected.contains('\n') {
        return Transformation::at_end(format!("```\n{selected}\n```\n"));
    }
    toggle_wrap(selected, "`")
}

/// Strip `marker` from both ends when present, otherwise wrap in it.
///
/// Removing moves the cursor back by both markers' width. Wrapping an empty
/// selection parks the cursor between the markers, one marker before the end.
fn toggle_wrap(selected: &str, marker: &str) -> Transformation {
    let width = marker.len() as isize;
    if let Some(inner) = strip_wrap(selected, marker) {
        return Transformation::new(inner, -2 * width);
    }
    let offset = if selected.is_empty() { -width } else { 0 };
    Transformation::new(format!("{marker}{selected}{marker}"), offset)
}

fn strip_wrap<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    if text.len() < marker.len() * 2 {
        return None;
    }
    text.strip_prefix(marker)?.strip_suffix(marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Bold ---

    #[test]
    fn test_bold_wraps_non_empty() {
        assert_eq!(bold("hello"), Transformation::new("**hello**", 0));
    }

    #[test]
    fn test_bold_empty_places_cursor_between_markers() {
        assert_eq!(bold(""), Transformation::new("****", -2));
    }

    #[test]
    fn test_bold_toggles_off() {
        assert_eq!(bold("**hello**"), Transformation::new("hello", -4));
    }

    #[test]
    fn test_bold_toggles_off_empty_pair() {
        assert_eq!(bold("****"), Transformation::new("", -4));
    }

    #[test]
    fn test_bold_short_marker_run_is_wrapped() {
        // "***" cannot hold two separate `**` markers
        assert_eq!(bold("***"), Transformation::new("*******", 0));
        assert_eq!(bold("**"), Transformation::new("******", 0));
    }

    // --- Italic ---

    #[test]
    fn test_italic_wraps_and_toggles() {
        assert_eq!(italic("word"), Transformation::new("*word*", 0));
        assert_eq!(italic("*word*"), Transformation::new("word", -2));
        assert_eq!(italic(""), Transformation::new("**", -1));
    }

    #[test]
    fn test_strip_wrap_needs_both_markers() {
        assert_eq!(strip_wrap("`x`", "`"), Some("x"));
        assert_eq!(strip_wrap("`x", "`"), None);
        assert_eq!(strip_wrap("`", "`"), None);
    }

    #[test]
    fn test_italic_on_bold_strips_one_layer() {
        assert_eq!(italic("**word**"), Transformation::new("*word*", -2));
    }

    #[test]
    fn test_italic_single_star_is_wrapped() {
        assert_eq!(italic("*"), Transformation::new("***", 0));
    }

    // --- Code ---

    #[test]
    fn test_code_inline_wraps_and_toggles() {
        assert_eq!(code("x"), Transformation::new("`x`", 0));
        assert_eq!(code("`x`"), Transformation::new("x", -2));
        assert_eq!(code(""), Transformation::new("``", -1));
    }

    #[test]
    fn test_code_multiline_fences() {
        assert_eq!(
            code("x = 1\ny = 2"),
            Transformation::at_end("```\nx = 1\ny = 2\n```\n")
        );
    }

    #[test]
    fn test_code_multiline_with_backticks_is_not_toggled() {
        assert_eq!(
            code("`a\nb`"),
            Transformation::at_end("```\n`a\nb`\n```\n")
        );
    }

    #[test]
    fn test_multibyte_content_is_preserved() {
        assert_eq!(bold("**café**"), Transformation::new("café", -4));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn bold_twice_restores_text(text in "[a-z ]{1,40}") {
                let on = bold(&text);
                let off = bold(&on.new_text);
                prop_assert_eq!(off.new_text, text);
            }

            #[test]
            fn italic_twice_restores_text(text in "[a-z ]{1,40}") {
                let on = italic(&text);
                let off = italic(&on.new_text);
                prop_assert_eq!(off.new_text, text);
            }

            #[test]
            fn inline_code_twice_restores_text(text in "[a-z =]{1,40}") {
                let on = code(&text);
                let off = code(&on.new_text);
                prop_assert_eq!(off.new_text, text);
            }
        }
    }
}
