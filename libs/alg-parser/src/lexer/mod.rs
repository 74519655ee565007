//! # Alg Lexer
//!
//! Tokenizes move notation into tokens. Line breaks are tokens because
//! they are nodes of the alg; other whitespace only separates tokens.
//!
//! ## Example
//!
//! ```rust
//! use alg_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("[R, U2']").tokenize();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::LBracket, TokenKind::Symbol, TokenKind::Comma, TokenKind::Symbol,
//!     TokenKind::Integer, TokenKind::Prime, TokenKind::RBracket, TokenKind::Eof,
//! ]);
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use crate::span::{Position, Span};
use config::constants::{INVERSE_MARK, LAYER_RANGE_SEPARATOR, TIMESTAMP_PREFIX, TIMESTAMP_SUFFIX};

// =============================================================================
// LEXER
// =============================================================================

/// Alg lexer.
///
/// Converts source text into a stream of tokens. Never fails: characters it
/// does not understand become [`TokenKind::Error`] tokens for the parser to
/// report.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens ending with an EOF token.
    pub fn tokenize(mut self) -> Vec<Token> {
        loop {
            self.skip_blanks();
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token();
        }

        let eof_pos = self.cursor.position();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof_pos, eof_pos),
            String::new(),
        ));

        self.tokens
    }

    /// Skip whitespace other than line breaks.
    fn skip_blanks(&mut self) {
        self.cursor.advance_while(|c| c.is_whitespace() && c != '\n');
    }

    /// Scan a single token.
    fn scan_token(&mut self) {
        let start = self.cursor.position();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return,
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Pause,
            '\n' => TokenKind::Newline,
            c if c == INVERSE_MARK => TokenKind::Prime,
            c if c == LAYER_RANGE_SEPARATOR => TokenKind::Dash,
            c if c == TIMESTAMP_PREFIX => self.scan_timestamp(),
            '/' => self.scan_comment(),
            '0'..='9' => {
                self.cursor.advance_while(|c| c.is_ascii_digit());
                TokenKind::Integer
            }
            'U' | 'F' | 'R' | 'B' | 'L' | 'D' => {
                if self.cursor.peek() == Some('w') {
                    self.cursor.advance();
                }
                TokenKind::Symbol
            }
            'u' | 'f' | 'r' | 'b' | 'l' | 'd' | 'M' | 'N' | 'E' | 'S' | 'x' | 'y' | 'z' => {
                TokenKind::Symbol
            }
            _ => TokenKind::Error,
        };

        self.push(kind, start);
    }

    /// Scan the rest of `@<number>s`.
    fn scan_timestamp(&mut self) -> TokenKind {
        let digits_start = self.cursor.position();
        self.cursor.advance_while(|c| c.is_ascii_digit());
        if self.cursor.peek() == Some('.') {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }
        let has_digits = self
            .cursor
            .slice_from(digits_start)
            .chars()
            .any(|c| c.is_ascii_digit());

        if has_digits && self.cursor.peek() == Some(TIMESTAMP_SUFFIX) {
            self.cursor.advance();
            TokenKind::Timestamp
        } else {
            TokenKind::Error
        }
    }

    /// Scan the rest of `// ...` or `/* ... */`.
    fn scan_comment(&mut self) -> TokenKind {
        match self.cursor.peek() {
            Some('/') => {
                self.cursor.advance_while(|c| c != '\n');
                TokenKind::CommentShort
            }
            Some('*') => {
                self.cursor.advance(); // *
                while !self.cursor.is_eof() {
                    if self.cursor.peek() == Some('*') && self.cursor.peek_next() == Some('/') {
                        self.cursor.advance(); // *
                        self.cursor.advance(); // /
                        return TokenKind::CommentLong;
                    }
                    self.cursor.advance();
                }
                TokenKind::UnterminatedComment
            }
            _ => TokenKind::Error,
        }
    }

    fn push(&mut self, kind: TokenKind, start: Position) {
        let end = self.cursor.position();
        let text = self.cursor.slice_from(start).to_string();
        self.tokens.push(Token::new(kind, Span::new(start, end), text));
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_wide_and_range() {
        let tokens = Lexer::new("2-3Rw r").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[1].kind, TokenKind::Dash);
        assert_eq!(tokens[2].text, "3");
        assert_eq!(tokens[3].kind, TokenKind::Symbol);
        assert_eq!(tokens[3].text, "Rw");
        assert_eq!(tokens[4].text, "r");
        assert_eq!(tokens[5].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_pauses_and_newlines() {
        assert_eq!(
            kinds("..\r\nU"),
            vec![TokenKind::Pause, TokenKind::Pause, TokenKind::Newline, TokenKind::Symbol, TokenKind::Eof]
        );
    }

    #[test]
    fn test_tokenize_comments() {
        let tokens = Lexer::new("R // trigger\n/* a\nb */").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::CommentShort);
        assert_eq!(tokens[1].text, "// trigger");
        assert_eq!(tokens[2].kind, TokenKind::Newline);
        assert_eq!(tokens[3].kind, TokenKind::CommentLong);
        assert_eq!(tokens[3].text, "/* a\nb */");
    }

    #[test]
    fn test_tokenize_unterminated_comment() {
        assert_eq!(kinds("/* open"), vec![TokenKind::UnterminatedComment, TokenKind::Eof]);
    }

    #[test]
    fn test_tokenize_timestamp() {
        let tokens = Lexer::new("@12.5s @3s @s").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Timestamp);
        assert_eq!(tokens[0].text, "@12.5s");
        assert_eq!(tokens[1].kind, TokenKind::Timestamp);
        assert_eq!(tokens[2].kind, TokenKind::Error);
    }

    #[test]
    fn test_tokenize_unknown_character() {
        assert_eq!(kinds("R Q"), vec![TokenKind::Symbol, TokenKind::Error, TokenKind::Eof]);
    }
}
