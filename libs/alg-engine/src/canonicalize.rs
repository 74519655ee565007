//! # Move Canonicalizer
//!
//! Resolves a move's symbol and optional layer fields to the face it turns
//! and an explicit inclusive layer range on a puzzle of a given dimension.
//!
//! | Family   | Start layer       | End layer           |
//! |----------|-------------------|---------------------|
//! | single   | `layer` or 1      | `layer` or 1        |
//! | wide     | `startLayer` or 1 | `endLayer` or 2     |
//! | slice    | 2                 | dimension - 1       |
//! | rotation | 1                 | dimension           |
//!
//! Slices and rotations ignore explicit layer fields: their range is
//! defined by the puzzle size, not by a literal layer.

use crate::error::AlgError;
use crate::traverse::Transform;
use alg_ast::{Base, Family, Move, Node, Sequence};
use config::constants::{DEFAULT_SINGLE_LAYER, DEFAULT_WIDE_END_LAYER, SLICE_START_LAYER};

/// Canonicalize one move.
///
/// The result has a face (or pause) base, `start_layer` and `end_layer`
/// set, no `layer`, and the input's amount. Pause moves occupy layer 1.
///
/// ## Example
///
/// ```rust
/// use alg_ast::{Base, Face, Move, Slice};
/// use alg_engine::canonicalize_move;
///
/// let m = canonicalize_move(&Move::new(Base::Slice(Slice::M), -1), 5);
/// assert_eq!(m.base, Base::Single(Face::L));
/// assert_eq!((m.start_layer, m.end_layer), (Some(2), Some(4)));
/// assert_eq!(m.amount, -1);
/// ```
pub fn canonicalize_move(mv: &Move, dimension: u32) -> Move {
    let (start, end) = match mv.base.family() {
        Family::Single => {
            let layer = mv.layer.unwrap_or(DEFAULT_SINGLE_LAYER);
            (layer, layer)
        }
        Family::Wide => (
            mv.start_layer.unwrap_or(DEFAULT_SINGLE_LAYER),
            mv.end_layer.unwrap_or(DEFAULT_WIDE_END_LAYER),
        ),
        Family::Slice => (SLICE_START_LAYER, dimension.saturating_sub(1)),
        Family::Rotation => (DEFAULT_SINGLE_LAYER, dimension),
        Family::Pause => (DEFAULT_SINGLE_LAYER, DEFAULT_SINGLE_LAYER),
    };

    Move {
        base: canonical_base(mv.base),
        amount: mv.amount,
        layer: None,
        start_layer: Some(start),
        end_layer: Some(end),
        location: mv.location,
    }
}

/// The face a symbol turns, as a single-layer base.
fn canonical_base(base: Base) -> Base {
    match base.face() {
        Some(face) => Base::Single(face),
        None => Base::Pause,
    }
}

/// Canonicalizes every move of a tree for a puzzle of `dimension` layers.
#[derive(Debug, Clone, Copy)]
pub struct Canonicalize {
    pub dimension: u32,
}

impl Transform for Canonicalize {
    fn validate(&self, _alg: &[Node]) -> Result<(), AlgError> {
        if self.dimension == 0 {
            return Err(AlgError::validation("dimension must be a positive integer"));
        }
        Ok(())
    }

    fn transform_move(&self, mv: &Move) -> Result<Sequence, AlgError> {
        Ok(vec![canonicalize_move(mv, self.dimension).into()])
    }
}

// =============================================================================
// TESTS
// =============================================================================
