//! # Tokens
//!
//! Token types for the alg lexer.

use crate::span::Span;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// ## Example
///
/// ```rust
/// use alg_parser::lexer::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("Rw").tokenize();
/// assert_eq!(tokens[0].kind, TokenKind::Symbol);
/// assert_eq!(tokens[0].text, "Rw");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Source span.
    pub span: Span,
    /// Token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Check if token is end of input.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// Unsigned integer like `2` (layer or amount)
    Integer,
    /// Move symbol like `R`, `Rw`, `r`, `M` or `x`
    Symbol,
    /// `@12.5s`
    Timestamp,
    /// `// ...` up to (not including) the line break
    CommentShort,
    /// `/* ... */`
    CommentLong,

    // Punctuation
    /// `.`
    Pause,
    /// `'`
    Prime,
    /// `-`
    Dash,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// Line break
    Newline,

    // Meta
    /// End of input
    Eof,
    /// `/*` that never closes
    UnterminatedComment,
    /// Error token
    Error,
}

impl TokenKind {
    /// Check if this token can start a node.
    pub const fn starts_node(&self) -> bool {
        matches!(
            self,
            Self::Integer
                | Self::Symbol
                | Self::Timestamp
                | Self::CommentShort
                | Self::CommentLong
                | Self::Pause
                | Self::LParen
                | Self::LBracket
                | Self::Newline
        )
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Symbol => "move",
            Self::Timestamp => "timestamp",
            Self::CommentShort | Self::CommentLong => "comment",
            Self::Pause => ".",
            Self::Prime => "'",
            Self::Dash => "-",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Newline => "line break",
            Self::Eof => "end of alg",
            Self::UnterminatedComment => "unterminated comment",
            Self::Error => "error",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_node() {
        assert!(TokenKind::Symbol.starts_node());
        assert!(TokenKind::LBracket.starts_node());
        assert!(!TokenKind::Comma.starts_node());
        assert!(!TokenKind::RParen.starts_node());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::RBracket.display(), "]");
        assert_eq!(TokenKind::Symbol.display(), "move");
    }
}
