//! # Source Positions
//!
//! Byte/line/column positions tracked by the lexer, used for error messages.
//! Converted to the byte-only [`alg_ast::Span`] when stored on nodes.

use serde::{Deserialize, Serialize};

/// A point in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset.
    pub byte: usize,
    /// Line (0-indexed).
    pub line: usize,
    /// Column in characters (0-indexed).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }
}

/// A range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start (inclusive).
    pub start: Position,
    /// End (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span between two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Zero-width span at the start of the source.
    pub const fn zero() -> Self {
        Self::new(Position::new(0, 0, 0), Position::new(0, 0, 0))
    }

    /// Byte range stored on AST nodes.
    pub fn to_ast(self) -> alg_ast::Span {
        alg_ast::Span::new(self.start.byte, self.end.byte)
    }
}
