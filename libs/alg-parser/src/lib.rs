//! # Alg Parser (Pure Rust)
//!
//! A pure Rust parser for twisty-puzzle move notation.
//!
//! ## Architecture
//!
//! ```text
//! Alg Text → Lexer → Tokens → Parser → alg_ast::Sequence
//! ```
//!
//! ## Example
//!
//! ```rust
//! use alg_parser::parse;
//!
//! let alg = parse("[R U R': D]2").unwrap();
//! assert_eq!(alg.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! This crate is the first layer in the alg pipeline:
//!
//! ```text
//! alg-parser → alg-engine passes → alg-ast printer
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

// Re-export public API
pub use error::{ParseError, ParseErrorKind};
pub use span::{Position, Span};

use alg_ast::Sequence;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse alg text into a sequence.
///
/// ## Errors
///
/// Returns the first [`ParseError`] found. There is no recovery: a
/// malformed alg has no meaningful partial tree.
///
/// ```rust
/// use alg_parser::parse;
///
/// assert!(parse("[R, U").is_err());
/// ```
pub fn parse(source: &str) -> Result<Sequence, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize();
    parser::Parser::new(tokens).parse()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alg_ast::Node;

    #[test]
    fn test_parse_sune() {
        let alg = parse("R U R' U R U2 R'").unwrap();
        assert_eq!(alg.len(), 7);
        assert!(alg.iter().all(|n| matches!(n, Node::Move(_))));
    }

    #[test]
    fn test_parse_multiline() {
        let alg = parse("R U\nR' U'").unwrap();
        assert_eq!(alg.len(), 5);
        assert!(matches!(alg[2], Node::Newline));
    }

    #[test]
    fn test_error_position() {
        let err = parse("R U\nR' Q").unwrap_err();
        assert_eq!(err.span.start.line, 1);
        assert_eq!(err.span.start.column, 3);
    }
}
