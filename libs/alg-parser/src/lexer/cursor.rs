//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks position (byte, line, column) as it advances.
//!
//! ## Example
//!
//! ```rust
//! use alg_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("R2'");
//! assert_eq!(cursor.peek(), Some('R'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('2'));
//! ```

use crate::span::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
///
/// Provides peekable iteration over source characters
/// while tracking byte offset, line, and column.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
    /// Current line (0-indexed).
    line: usize,
    /// Current column (0-indexed).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte: 0,
            line: 0,
            column: 0,
        }
    }

    /// Get current position.
    pub fn position(&self) -> Position {
        Position::new(self.byte, self.line, self.column)
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Peek at the character after the current one.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.byte..].chars();
        chars.next(); // Skip current
        chars.next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at end of input
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.byte += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Advance while predicate is true.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use alg_parser::lexer::Cursor;
    ///
    /// let mut cursor = Cursor::new("123R");
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.peek(), Some('R'));
    /// ```
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Text between a previous position and the current one.
    pub fn slice_from(&self, start: Position) -> &'a str {
        &self.source[start.byte..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_peek_next() {
        let cursor = Cursor::new("Rw");
        assert_eq!(cursor.peek(), Some('R'));
        assert_eq!(cursor.peek_next(), Some('w'));
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.position().byte, 1);
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_newline() {
        let mut cursor = Cursor::new("R\nU");
        cursor.advance(); // 'R'
        assert_eq!(cursor.position().line, 0);
        cursor.advance(); // '\n'
        assert_eq!(cursor.position().line, 1);
        assert_eq!(cursor.position().column, 0);
    }

    #[test]
    fn test_cursor_utf8() {
        let mut cursor = Cursor::new("é");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position().byte, 2); // é is 2 bytes in UTF-8
    }

    #[test]
    fn test_cursor_slice_from() {
        let mut cursor = Cursor::new("2-3Rw");
        let start = cursor.position();
        cursor.advance_while(|c| c != 'R');
        assert_eq!(cursor.slice_from(start), "2-3");
    }
}
