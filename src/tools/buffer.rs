use std::ops::Range;

use tracing::debug;

/// An in-memory text with a single movable cursor. Offsets are byte offsets into the text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// A buffer with the cursor at the start of `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Move the cursor, clamped to the end of the text and to a char boundary
    pub fn goto(&mut self, offset: usize) {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        self.cursor = offset;
    }

    /// Insert at the cursor and leave the cursor after the inserted text
    pub fn insert(&mut self, content: &str) {
        self.text.insert_str(self.cursor, content);
        self.cursor += content.len();
    }

    /// Case-sensitive search for `needle` from the cursor forward. On a hit the cursor moves to the
    /// end of the match and the matched range is returned; on a miss the cursor stays put.
    pub fn search_forward(&mut self, needle: &str) -> Option<Range<usize>> {
        let start = self.cursor + self.text[self.cursor..].find(needle)?;
        let range = start..start + needle.len();
        self.cursor = range.end;
        Some(range)
    }

    /// Replace `range` with `content`, leaving the cursor after the replacement
    pub fn replace_range(&mut self, range: Range<usize>, content: &str) {
        self.text.replace_range(range.clone(), content);
        self.cursor = range.start + content.len();
    }
}

/// Replace the first `placeholder` in the buffer with a single space and put the cursor right
/// before that space. Returns false and leaves both text and cursor untouched when the
/// placeholder is absent.
pub fn place_cursor(buffer: &mut TextBuffer, placeholder: &str) -> bool {
    let origin = buffer.cursor();
    buffer.goto(0);

    match buffer.search_forward(placeholder) {
        Some(range) if !placeholder.is_empty() => {
            let start = range.start;
            buffer.replace_range(range, " ");
            buffer.goto(start);
            debug!(offset = start, "Cursor placed");
            true
        }
        _ => {
            buffer.goto(origin);
            debug!(%placeholder, "Placeholder not found; cursor restored");
            false
        }
    }
}
