//! # Simplifier
//!
//! Folds runs of adjacent moves that turn the same layers into one move,
//! reducing the summed amount to a representative in `-2..=2`. Moves whose
//! amounts cancel are removed, which can expose another foldable pair:
//! `R U U' R` simplifies to `R2`.
//!
//! Only moves that are direct neighbours fold. Any other node, including a
//! pause, ends the run. Composite nodes are simplified inside but never
//! merged with their neighbours.
//!
//! Layers are compared as stored. Run [`Canonicalize`](crate::Canonicalize)
//! first to fold moves written differently that turn the same layers, such
//! as `r` and `Rw`.

use crate::error::AlgError;
use crate::traverse::Transform;
use alg_ast::{Move, Node, Sequence};
use config::constants::QUARTER_TURNS_PER_REVOLUTION;

/// The simplification pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplify;

impl Transform for Simplify {
    fn transform_sequence(&self, alg: &[Node]) -> Result<Sequence, AlgError> {
        let mut out = Vec::with_capacity(alg.len());
        for node in alg {
            match node {
                Node::Move(mv) => push_move(&mut out, mv),
                other => {
                    // Any non-move node breaks a run of foldable moves.
                    tracing::trace!(kind = other.kind().as_str(), "Simplifying node");
                    out.extend(self.transform_node(other)?)
                }
            }
        }
        Ok(out)
    }
}

/// Append a move, folding it into the previous node if that is a move on
/// the same layers.
fn push_move(out: &mut Sequence, mv: &Move) {
    if let Some(Node::Move(prev)) = out.last_mut() {
        if prev.same_layers(mv) {
            let sum = i64::from(prev.amount) + i64::from(mv.amount);
            let folded = fold_amount(sum);
            if folded == 0 {
                tracing::debug!(base = %mv.base, sum, "Moves cancel");
                out.pop();
            } else {
                tracing::debug!(base = %mv.base, sum, folded, "Folding moves");
                prev.amount = folded;
            }
            return;
        }
    }
    out.push(Node::Move(mv.clone()));
}

/// Reduce an amount of quarter turns to `amount - 4 * round(amount / 4)`,
/// where `round` breaks ties toward zero.
///
/// Results lie in `-2..=2`; an exact half turn keeps its sign.
///
/// ## Example
///
/// ```rust
/// use alg_engine::simplify::fold_amount;
///
/// assert_eq!(fold_amount(6), 2);
/// assert_eq!(fold_amount(-6), -2);
/// assert_eq!(fold_amount(3), -1);
/// assert_eq!(fold_amount(4), 0);
/// ```
pub fn fold_amount(amount: i64) -> i32 {
    let n = i64::from(QUARTER_TURNS_PER_REVOLUTION);
    let folded = match amount.rem_euclid(n) {
        r if 2 * r < n => r,
        r if 2 * r > n => r - n,
        r if amount < 0 => -r,
        r => r,
    };
    // Always within one half turn, so the cast cannot truncate.
    folded as i32
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn simplify(source: &str) -> String {
        Simplify.apply_text(source).unwrap()
    }

    #[test]
    fn test_fold_amount_matches_centered_rounding() {
        for amount in -40i64..=40 {
            let quotient = amount as f64 / 4.0;
            // Round half toward zero.
            let rounded = if quotient.fract().abs() == 0.5 { quotient.trunc() } else { quotient.round() };
            let expected = amount - 4 * rounded as i64;
            assert_eq!(i64::from(fold_amount(amount)), expected, "amount {}", amount);
        }
    }

    #[test]
    fn test_three_and_three_fold_to_two() {
        assert_eq!(simplify("R3 R3"), "R2");
    }

    #[test]
    fn test_two_and_two_cancel() {
        assert_eq!(simplify("R2 R2"), "");
        assert_eq!(simplify("U R2 R2 F"), "U F");
    }

    #[test]
    fn test_cancellation_exposes_earlier_move() {
        assert_eq!(simplify("R U U' R"), "R2");
        assert_eq!(simplify("R U R' U'"), "R U R' U'");
    }

    #[test]
    fn test_only_adjacent_moves_fold() {
        assert_eq!(simplify("R . R"), "R . R");
        assert_eq!(simplify("R // c\nR"), "R // c\nR");
        assert_eq!(simplify("R (R) R"), "R (R) R");
    }

    #[test]
    fn test_layers_must_match() {
        assert_eq!(simplify("R 2R"), "R 2R");
        assert_eq!(simplify("Rw r"), "Rw r");
        assert_eq!(simplify("2R 2R"), "2R2");
    }

    #[test]
    fn test_simplifies_inside_composites() {
        assert_eq!(simplify("[R R, U U'] (F F F)2"), "[R2, ] (F')2");
    }

    #[test]
    fn test_lone_moves_keep_their_amount() {
        assert_eq!(simplify("R5"), "R5");
    }

    #[test]
    fn test_negative_half_turns_keep_sign() {
        assert_eq!(simplify("R' R'"), "R2'");
    }
}
