//! # Sequence Parsing
//!
//! Sequences, bracketed constructs and leaf nodes.
//!
//! ## Grammar
//!
//! ```text
//! sequence   = { node }
//! node       = move | commutator | conjugate | group | "." | newline
//!            | comment | timestamp
//! commutator = "[" sequence "," sequence "]" suffix
//! conjugate  = "[" sequence ":" sequence "]" suffix
//! group      = "(" sequence ")" suffix
//! ```

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use alg_ast::{Commutator, Conjugate, Group, Node, Pause, Sequence, Timestamp};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, TIMESTAMP_PREFIX, TIMESTAMP_SUFFIX};

impl Parser {
    /// Parse nodes until a token that cannot start one.
    pub(super) fn parse_sequence(&mut self) -> Result<Sequence, ParseError> {
        let mut nodes = Vec::new();
        while self.peek_kind().starts_node() {
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || self.parse_node_inner())
    }

    fn parse_node_inner(&mut self) -> Result<Node, ParseError> {
        match self.peek_kind() {
            TokenKind::Integer | TokenKind::Symbol => self.parse_move().map(Node::Move),
            TokenKind::LBracket => self.parse_bracketed(),
            TokenKind::LParen => self.parse_group(),
            TokenKind::Pause => {
                let token = self.advance();
                Ok(Node::Pause(Pause {
                    location: Some(token.span.to_ast()),
                }))
            }
            TokenKind::Newline => {
                self.advance();
                Ok(Node::Newline)
            }
            TokenKind::CommentShort => Ok(Node::comment_short(self.advance().text)),
            TokenKind::CommentLong => Ok(Node::comment_long(self.advance().text)),
            TokenKind::Timestamp => self.parse_timestamp(),
            _ => Err(self.unexpected("move")),
        }
    }

    /// Parse `[A, B]` or `[A: B]`.
    fn parse_bracketed(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LBracket)?;
        let a = self.parse_sequence()?;

        let is_commutator = if self.match_token(TokenKind::Comma) {
            true
        } else if self.match_token(TokenKind::Colon) {
            false
        } else {
            return Err(self.unexpected("',' or ':'"));
        };

        let b = self.parse_sequence()?;
        self.expect(TokenKind::RBracket)?;
        let amount = self.parse_suffix()?;

        Ok(if is_commutator {
            Node::Commutator(Commutator { a, b, amount })
        } else {
            Node::Conjugate(Conjugate { a, b, amount })
        })
    }

    /// Parse `(A)`.
    fn parse_group(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::LParen)?;
        let a = self.parse_sequence()?;
        self.expect(TokenKind::RParen)?;
        let amount = self.parse_suffix()?;
        Ok(Node::Group(Group { a, amount }))
    }

    /// Parse `@<seconds>s`.
    fn parse_timestamp(&mut self) -> Result<Node, ParseError> {
        let token = self.expect(TokenKind::Timestamp)?;
        let seconds = token
            .text
            .trim_start_matches(TIMESTAMP_PREFIX)
            .trim_end_matches(TIMESTAMP_SUFFIX);
        let time = seconds.parse::<f64>().map_err(|_| {
            ParseError::new(ParseErrorKind::InvalidNumber { text: token.text.clone() }, token.span)
        })?;
        Ok(Node::Timestamp(Timestamp { time }))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::ParseErrorKind;
    use crate::parse;
    use alg_ast::Node;

    #[test]
    fn test_parse_commutator_and_conjugate() {
        let alg = parse("[R, U] [F: [R, U]]2'").unwrap();
        assert_eq!(alg.len(), 2);
        match &alg[0] {
            Node::Commutator(c) => {
                assert_eq!(c.a.len(), 1);
                assert_eq!(c.b.len(), 1);
                assert_eq!(c.amount, 1);
            }
            other => panic!("Expected commutator, got {:?}", other),
        }
        match &alg[1] {
            Node::Conjugate(c) => {
                assert!(matches!(c.b[0], Node::Commutator(_)));
                assert_eq!(c.amount, -2);
            }
            other => panic!("Expected conjugate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_group_with_empty_sides() {
        let alg = parse("()3 [, ]").unwrap();
        assert!(matches!(&alg[0], Node::Group(g) if g.a.is_empty() && g.amount == 3));
        assert!(matches!(&alg[1], Node::Commutator(c) if c.a.is_empty() && c.b.is_empty()));
    }

    #[test]
    fn test_parse_leaves() {
        let alg = parse("R . // hi\n/* x */ @2.5s").unwrap();
        assert!(matches!(&alg[1], Node::Pause(p) if p.location == Some(alg_ast::Span::new(2, 3))));
        assert!(matches!(&alg[2], Node::CommentShort(c) if c.comment == "// hi"));
        assert!(matches!(alg[3], Node::Newline));
        assert!(matches!(&alg[4], Node::CommentLong(c) if c.comment == "/* x */"));
        assert!(matches!(&alg[5], Node::Timestamp(t) if t.time == 2.5));
    }

    #[test]
    fn test_missing_separator_is_error() {
        let err = parse("[R U]").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken { found: "]".to_string(), expected: "',' or ':'".to_string() }
        );
    }

    #[test]
    fn test_unclosed_group_is_error() {
        let err = parse("(R U").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedEof { .. }));
    }
}
