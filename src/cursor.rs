//! Literal runs and position bookkeeping.

use crate::ast::Position;
use crate::syntax::ScanMode;

/// Returns the longest prefix of `text` that contains no stop character for `mode`.
///
/// An empty result means `text` starts with a stop character; the caller has
/// to handle that character itself instead of reading again.
pub fn read_literal(text: &str, mode: ScanMode) -> &str {
    match text.find(|c: char| mode.is_stop(c)) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Number of `\n` characters in `text`.
pub fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Forward-only byte cursor with a running 1-based line counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: usize,
    line: usize,
}

impl Cursor {
    pub(crate) fn new() -> Self {
        Self { offset: 0, line: 1 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Steps over `content`, which must start at the current offset, and
    /// returns where it sat in the source.
    pub(crate) fn consume(&mut self, content: &str) -> Position {
        let position = Position::new(self.offset, self.line, content);
        self.offset += position.length;
        self.line += position.newlines;
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_stops_at_marker() {
        assert_eq!(read_literal("abc$def", ScanMode::Text), "abc");
        assert_eq!(read_literal("$abc", ScanMode::Text), "");
    }

    #[test]
    fn test_literal_argument_mode() {
        assert_eq!(read_literal("abc[def", ScanMode::Argument), "abc");
        assert_eq!(read_literal("a;b", ScanMode::Argument), "a");
        assert_eq!(read_literal("a]b", ScanMode::Argument), "a");
        assert_eq!(read_literal("a;b[c]", ScanMode::Text), "a;b[c]");
    }

    #[test]
    fn test_literal_without_stop_is_whole_text() {
        assert_eq!(read_literal("plain text", ScanMode::Argument), "plain text");
        assert_eq!(read_literal("", ScanMode::Text), "");
    }

    #[test]
    fn test_cursor_tracks_lines() {
        let mut cursor = Cursor::new();
        let first = cursor.consume("one\ntwo\n");
        assert_eq!(first, Position { offset: 0, line: 1, length: 8, newlines: 2 });

        let second = cursor.consume("three");
        assert_eq!(second.offset, 8);
        assert_eq!(second.line, 3);
        assert_eq!(cursor.offset(), 13);
        assert_eq!(cursor.line(), 3);
    }
}
