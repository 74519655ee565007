//! # Move Parsing
//!
//! ## Grammar
//!
//! ```text
//! move   = [ layers ] symbol suffix
//! layers = int | int "-" int
//! suffix = [ int ] [ "'" ]          (glued to what it follows)
//! ```
//!
//! A single-integer prefix sets `layer` on single-layer symbols and
//! `end_layer` on wide symbols. A range is only allowed before a wide
//! symbol. Slices, rotations and pauses take no prefix.

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use alg_ast::{Base, Family, Move};
use config::constants::DEFAULT_SINGLE_LAYER;

/// Layers written before a symbol.
enum LayerPrefix {
    One(u32),
    Range(u32, u32),
}

impl Parser {
    pub(super) fn parse_move(&mut self) -> Result<Move, ParseError> {
        let prefix = self.parse_layer_prefix()?;

        let token = self.expect(TokenKind::Symbol)?;
        let base: Base = token
            .text
            .parse()
            .map_err(|_| ParseError::unexpected_token(&token.text, "move").with_span(token.span))?;

        let mut mv = Move::new(base, 1);
        match (prefix, base.family()) {
            (None, _) => {}
            // `1R` is plain `R`.
            (Some(LayerPrefix::One(layer)), Family::Single) => {
                mv.layer = Some(layer).filter(|&l| l != DEFAULT_SINGLE_LAYER)
            }
            (Some(LayerPrefix::One(end)), Family::Wide) => mv.end_layer = Some(end),
            (Some(LayerPrefix::Range(start, end)), Family::Wide) => {
                mv.start_layer = Some(start);
                mv.end_layer = Some(end);
            }
            (Some(_), _) => {
                return Err(ParseError::new(
                    ParseErrorKind::InvalidLayerPrefix { symbol: token.text },
                    token.span,
                ))
            }
        }

        mv.amount = self.parse_suffix()?;
        Ok(mv)
    }

    fn parse_layer_prefix(&mut self) -> Result<Option<LayerPrefix>, ParseError> {
        if !self.check(TokenKind::Integer) {
            return Ok(None);
        }
        let first = layer_number(&self.advance())?;
        if self.match_token(TokenKind::Dash) {
            let second = layer_number(&self.expect(TokenKind::Integer)?)?;
            return Ok(Some(LayerPrefix::Range(first, second)));
        }
        Ok(Some(LayerPrefix::One(first)))
    }

    /// Parse an optional repetition suffix, returning the signed amount.
    pub(super) fn parse_suffix(&mut self) -> Result<i32, ParseError> {
        let mut amount = 1;
        if self.check(TokenKind::Integer) && self.touches_previous() {
            let token = self.advance();
            amount = token.text.parse::<i32>().map_err(|_| invalid_number(&token))?;
        }
        if self.check(TokenKind::Prime) && self.touches_previous() {
            self.advance();
            amount = -amount;
        }
        Ok(amount)
    }
}

fn layer_number(token: &Token) -> Result<u32, ParseError> {
    match token.text.parse::<u32>() {
        Ok(layer) if layer > 0 => Ok(layer),
        _ => Err(invalid_number(token)),
    }
}

fn invalid_number(token: &Token) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidNumber {
            text: token.text.clone(),
        },
        token.span,
    )
}

// =============================================================================
// TESTS
// =============================================================================
