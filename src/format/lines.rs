use std::sync::LazyLock;

use regex::Regex;

use super::Transformation;

static ORDERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("ordered list prefix pattern"));

// Every line decides on its own whether it gains or loses the prefix. A
// selection mixing prefixed and bare lines is flipped line by line, not
// normalized.

pub(super) fn heading(selected: &str) -> Transformation {
    toggle_prefix(selected, "# ")
}

pub(super) fn quote(selected: &str) -> Transformation {
    toggle_prefix(selected, "> ")
}

/// Blank lines never gain a bullet.
pub(super) fn unordered_list(selected: &str) -> Transformation {
    map_lines(selected, |line| {
        if let Some(rest) = line.strip_prefix("- ") {
            rest.to_owned()
        } else if is_blank(line) {
            line.to_owned()
        } else {
            format!("- {line}")
        }
    })
}

/// Numbered lines lose their number; other non-blank lines take their
/// position among the selection's non-blank lines, counting from 1.
pub(super) fn ordered_list(selected: &str) -> Transformation {
    let mut position = 0usize;
    map_lines(selected, |line| {
        if is_blank(line) {
            return line.to_owned();
        }
        position += 1;
        match ORDERED_PREFIX.find(line) {
            Some(prefix) => line[prefix.end()..].to_owned(),
            None => format!("{position}. {line}"),
        }
    })
}

fn toggle_prefix(selected: &str, prefix: &str) -> Transformation {
    map_lines(selected, |line| {
        line.strip_prefix(prefix)
            .map_or_else(|| format!("{prefix}{line}"), ToOwned::to_owned)
    })
}

fn map_lines(selected: &str, mut f: impl FnMut(&str) -> String) -> Transformation {
    let lines: Vec<String> = selected.split('\n').map(&mut f).collect();
    Transformation::at_end(lines.join("\n"))
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
