//! # Engine Errors
//!
//! Error types for alg passes.

use alg_ast::Base;
use alg_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while running a pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgError {
    /// Input text is not valid notation.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The pass rejected its input or configuration.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// A move's layer range is neither a rotation, an outer move nor an inner slice.
    #[error("Unknown move: {base} turning layers {start_layer}-{end_layer} on a puzzle of dimension {dimension}")]
    UnknownMove {
        base: Base,
        start_layer: u32,
        end_layer: u32,
        dimension: u32,
    },

    /// The pass has no defined behavior for this input.
    #[error("Unsupported operation: {operation}")]
    Unsupported { operation: &'static str },
}

impl AlgError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        AlgError::Validation {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alg_ast::Face;

    #[test]
    fn test_error_display() {
        let err = AlgError::UnknownMove {
            base: Base::Single(Face::R),
            start_layer: 3,
            end_layer: 2,
            dimension: 3,
        };
        assert_eq!(
            err.to_string(),
            "Unknown move: R turning layers 3-2 on a puzzle of dimension 3"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let parse_err = alg_parser::parse("[R").unwrap_err();
        let err: AlgError = parse_err.into();
        assert!(err.to_string().starts_with("Parse error:"));
    }
}
