//! # Alg Parser
//!
//! Recursive descent parser for move notation.
//! Produces an `alg_ast` sequence; the first error aborts the parse.
//!
//! ## Example
//!
//! ```rust
//! use alg_parser::lexer::Lexer;
//! use alg_parser::parser::Parser;
//!
//! let tokens = Lexer::new("[R, U]").tokenize();
//! let alg = Parser::new(tokens).parse().unwrap();
//! assert_eq!(alg.len(), 1);
//! ```

mod moves;
mod sequence;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use alg_ast::Sequence;

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for algs.
pub struct Parser {
    /// Token stream, always ending in EOF.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Create a new parser over tokens from [`crate::lexer::Lexer`].
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let end = tokens.last().map(|t| t.span.end).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, Span::new(end, end), String::new()));
        }
        Self { tokens, current: 0 }
    }

    /// Parse the whole token stream into a sequence.
    pub fn parse(&mut self) -> Result<Sequence, ParseError> {
        let alg = self.parse_sequence()?;
        if !self.is_at_end() {
            return Err(self.unexpected("move or end of alg"));
        }
        Ok(alg)
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> &Token {
        // `tokens` always ends with EOF and `current` never passes it.
        &self.tokens[self.current]
    }

    /// Get current token kind.
    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Check if at end of input.
    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    /// Advance to next token, returning the consumed one.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Whether the current token starts exactly where the previous one ended.
    ///
    /// Suffixes must be glued to what they modify: `R2` is one move,
    /// `R 2U` is `R` followed by `2U`.
    fn touches_previous(&self) -> bool {
        match self.current.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(prev) => prev.span.end.byte == self.peek().span.start.byte,
            None => false,
        }
    }

    /// Consume token if it matches expected kind.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display()))
        }
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    /// Error for the current token, given what was expected instead.
    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => ParseError::unexpected_eof(expected),
            TokenKind::UnterminatedComment => {
                ParseError::new(ParseErrorKind::UnterminatedComment, token.span)
            }
            _ => ParseError::unexpected_token(&token.text, expected),
        }
        .with_span(token.span)
    }
}

// =============================================================================
// TESTS
// =============================================================================
