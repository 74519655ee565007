//! # Source Span
//!
//! Byte range in the alg text a node was parsed from. Pause nodes keep
//! their span so animation code can highlight the tick being played.
//!
//! ## Usage
//!
//! ```rust
//! use alg_ast::Span;
//!
//! // The pause in "R . U".
//! let span = Span::new(2, 3);
//! assert_eq!(&"R . U"[span.start()..span.end()], ".");
//! ```

use serde::{Deserialize, Serialize};

/// A range in the source text, represented as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Starting byte offset (inclusive)
    start: usize,
    /// Ending byte offset (exclusive)
    end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_serializes_as_offsets() {
        let json = serde_json::to_string(&Span::new(4, 5)).unwrap();
        assert_eq!(json, r#"{"start":4,"end":5}"#);
    }
}
