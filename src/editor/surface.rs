use std::ops::Range;

/// An editable text field the editor drives.
///
/// Offsets are character offsets into [`value`](Self::value).
pub trait TextSurface {
    /// Current content.
    fn value(&self) -> String;

    /// Current selection as a half-open range; collapsed for a plain cursor.
    fn selection(&self) -> Range<usize>;

    /// Replace the whole content.
    fn set_value(&mut self, value: &str);

    /// Select `start..end`.
    fn set_selection(&mut self, start: usize, end: usize);

    /// Give the field input focus.
    fn focus(&mut self) {}

    /// Tell listeners (word count, autosave) that the content changed.
    fn notify_change(&mut self);
}
