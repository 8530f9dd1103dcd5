//! Tag field cleanup and suggestions.

/// Suggestions offered when the tag field gains focus.
pub const COMMON_TAGS: [&str; 14] = [
    "technology",
    "programming",
    "web development",
    "python",
    "javascript",
    "design",
    "productivity",
    "startup",
    "ai",
    "writing",
    "blogging",
    "tutorial",
    "how-to",
    "opinion",
];

/// Split a comma-separated tag field into trimmed, non-empty entries.
pub fn split_tags(input: &str) -> impl Iterator<Item = &str> {
    input.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

/// Normalize a tag field: trimmed, lowercase, no empty entries, joined
/// with `", "`.
pub fn normalize_tags(input: &str) -> String {
    split_tags(input)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Append a suggested tag unless the field already has it.
pub fn add_suggestion(input: &str, tag: &str) -> String {
    if split_tags(input).any(|existing| existing == tag) {
        return input.to_owned();
    }
    if input.trim().is_empty() {
        tag.to_owned()
    } else {
        format!("{input}, {tag}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_tags(" Rust ,  Web Development,,AI "), "rust, web development, ai");
    }

    #[test]
    fn test_normalize_empty_field() {
        assert_eq!(normalize_tags(" , ,"), "");
    }

    #[test]
    fn test_add_to_empty_field() {
        assert_eq!(add_suggestion("  ", "python"), "python");
    }

    #[test]
    fn test_add_appends_with_separator() {
        assert_eq!(add_suggestion("rust", "ai"), "rust, ai");
    }

    #[test]
    fn test_add_skips_existing_tag() {
        assert_eq!(add_suggestion("rust,  ai ", "ai"), "rust,  ai ");
    }

    #[test]
    fn test_common_tags_are_normalized() {
        for tag in COMMON_TAGS {
            assert_eq!(normalize_tags(tag), tag);
        }
    }
}
