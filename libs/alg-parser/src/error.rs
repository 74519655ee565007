//! # Parse Errors
//!
//! Error types for the alg parser.
//!
//! ## Example
//!
//! ```rust
//! use alg_parser::error::ParseError;
//!
//! let error = ParseError::unexpected_token(")", "move");
//! assert!(error.to_string().contains("unexpected token ')'"));
//! ```

use crate::span::Span;
use std::fmt;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create unexpected end-of-input error.
    pub fn unexpected_eof(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind,
            self.span.start.line + 1,
            self.span.start.column + 1
        )
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Input ended inside a construct.
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// Integer that does not fit, or a malformed timestamp.
    InvalidNumber {
        /// The invalid text.
        text: String,
    },

    /// Layer prefix on a symbol that cannot take one, like `2M` or `2-3R`.
    InvalidLayerPrefix {
        /// The move symbol.
        symbol: String,
    },

    /// `/*` without a closing `*/`.
    UnterminatedComment,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token '{}', expected {}", found, expected)
            }
            Self::UnexpectedEof { expected } => {
                write!(f, "unexpected end of alg, expected {}", expected)
            }
            Self::InvalidNumber { text } => write!(f, "invalid number '{}'", text),
            Self::InvalidLayerPrefix { symbol } => {
                write!(f, "layer prefix not allowed on '{}'", symbol)
            }
            Self::UnterminatedComment => write!(f, "unterminated long comment"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_unexpected_eof_display() {
        let error = ParseError::unexpected_eof("']'");
        let msg = format!("{}", error);
        assert!(msg.contains("unexpected end of alg"));
        assert!(msg.contains("']'"));
    }

    #[test]
    fn test_display_is_one_based() {
        let at = Position::new(7, 1, 3);
        let error = ParseError::new(ParseErrorKind::UnterminatedComment, Span::new(at, at));
        assert_eq!(error.to_string(), "unterminated long comment at line 2, column 4");
    }
}
