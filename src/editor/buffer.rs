use std::ops::Range;

use ropey::Rope;

use super::TextSurface;

/// A text buffer backed by a rope data structure.
///
/// Tracks a character selection, whether the content changed since it was
/// loaded, and how many change notifications listeners have received.
pub struct EditorBuffer {
    rope: Rope,
    selection: Range<usize>,
    dirty: bool,
    revision: u64,
    focused: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, with the cursor at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: 0..0,
            dirty: false,
            revision: 0,
            focused: false,
        }
    }

    /// Whether the buffer has been modified since it was created.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of change notifications delivered so far.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Length of the buffer in characters.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Cursor position: the start of the selection.
    pub const fn cursor(&self) -> usize {
        self.selection.start
    }

    /// Collapse the selection to `char_idx`, clamped to the buffer.
    pub fn move_to(&mut self, char_idx: usize) {
        let idx = char_idx.min(self.len_chars());
        self.selection = idx..idx;
    }

    /// Type `s` over the selection, leaving the cursor after it.
    pub fn insert_str(&mut self, s: &str) {
        let Range { start, end } = self.selection.clone();
        if s.is_empty() && start == end {
            return;
        }
        self.rope.remove(start..end);
        self.rope.insert(start, s);
        let cursor = start + s.chars().count();
        self.selection = cursor..cursor;
        self.dirty = true;
    }
}

impl TextSurface for EditorBuffer {
    fn value(&self) -> String {
        self.text()
    }

    fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.rope = Rope::from_str(value);
        let len = self.len_chars();
        self.selection = self.selection.start.min(len)..self.selection.end.min(len);
        self.dirty = true;
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len_chars();
        let end = end.min(len);
        self.selection = start.min(end)..end;
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn notify_change(&mut self) {
        self.revision += 1;
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} chars)", self.rope.len_chars()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .field("revision", &self.revision)
            .finish()
    }
}
