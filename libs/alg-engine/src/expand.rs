//! # Expander
//!
//! Rewrites commutators, conjugates and groups as flat move lists.
//!
//! - `[A, B]n` becomes `A B A' B'` repeated `n` times.
//! - `[A: B]n` becomes `A B A'` repeated `n` times.
//! - `(A)n` becomes `A` repeated `n` times.
//!
//! A negative `n` inverts the unit before repeating it `|n|` times.
//!
//! [`Expand`] keeps pauses, line breaks, comments and timestamps.
//! [`ToMoves`] drops them, except that each pause becomes a one-tick move
//! on the pause symbol, which gives players a list of moves to animate.
//!
//! Group contents are flattened by the same pass that meets the group, so
//! [`Expand`] keeps annotations inside `(A)n` instead of reducing them to moves.

use crate::error::AlgError;
use crate::invert::Invert;
use crate::traverse::Transform;
use alg_ast::{Base, Comment, Commutator, Conjugate, Group, Move, Pause, Sequence, Timestamp};

/// Flattens composites, keeping every other node.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expand;

impl Transform for Expand {
    fn transform_commutator(&self, comm: &Commutator) -> Result<Sequence, AlgError> {
        expand_commutator(self, comm)
    }

    fn transform_conjugate(&self, conj: &Conjugate) -> Result<Sequence, AlgError> {
        expand_conjugate(self, conj)
    }

    fn transform_group(&self, group: &Group) -> Result<Sequence, AlgError> {
        expand_group(self, group)
    }
}

/// Flattens an alg to the moves a player performs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToMoves;

impl Transform for ToMoves {
    fn transform_commutator(&self, comm: &Commutator) -> Result<Sequence, AlgError> {
        expand_commutator(self, comm)
    }

    fn transform_conjugate(&self, conj: &Conjugate) -> Result<Sequence, AlgError> {
        expand_conjugate(self, conj)
    }

    fn transform_group(&self, group: &Group) -> Result<Sequence, AlgError> {
        expand_group(self, group)
    }

    fn transform_pause(&self, pause: &Pause) -> Result<Sequence, AlgError> {
        let mut tick = Move::new(Base::Pause, 1);
        tick.location = pause.location;
        Ok(vec![tick.into()])
    }

    fn transform_newline(&self) -> Result<Sequence, AlgError> {
        Ok(Vec::new())
    }

    fn transform_comment_short(&self, _comment: &Comment) -> Result<Sequence, AlgError> {
        Ok(Vec::new())
    }

    fn transform_comment_long(&self, _comment: &Comment) -> Result<Sequence, AlgError> {
        Ok(Vec::new())
    }

    fn transform_timestamp(&self, _timestamp: &Timestamp) -> Result<Sequence, AlgError> {
        Ok(Vec::new())
    }
}

// =============================================================================
// SHARED EXPANSION
// =============================================================================

fn expand_commutator<T: Transform + ?Sized>(t: &T, comm: &Commutator) -> Result<Sequence, AlgError> {
    let a = t.transform_sequence(&comm.a)?;
    let b = t.transform_sequence(&comm.b)?;
    let a_inv = Invert.transform_sequence(&a)?;
    let b_inv = Invert.transform_sequence(&b)?;
    repeat([a, b, a_inv, b_inv].concat(), comm.amount)
}

fn expand_conjugate<T: Transform + ?Sized>(t: &T, conj: &Conjugate) -> Result<Sequence, AlgError> {
    let a = t.transform_sequence(&conj.a)?;
    let b = t.transform_sequence(&conj.b)?;
    let a_inv = Invert.transform_sequence(&a)?;
    repeat([a, b, a_inv].concat(), conj.amount)
}

fn expand_group<T: Transform + ?Sized>(t: &T, group: &Group) -> Result<Sequence, AlgError> {
    repeat(t.transform_sequence(&group.a)?, group.amount)
}

/// Repeat a unit `|amount|` times, inverting it first if `amount` is negative.
///
/// ## Example
///
/// ```rust
/// use alg_engine::expand::repeat;
///
/// let unit = alg_parser::parse("R U").unwrap();
/// let out = repeat(unit, -2).unwrap();
/// assert_eq!(alg_ast::print(&out), "U' R' U' R'");
/// ```
pub fn repeat(unit: Sequence, amount: i32) -> Result<Sequence, AlgError> {
    let unit = if amount < 0 {
        Invert.transform_sequence(&unit)?
    } else {
        unit
    };
    let times = amount.unsigned_abs() as usize;
    tracing::debug!(amount, unit_len = unit.len(), "Repeating unit");

    let mut out = Vec::new();
    for _ in 0..times {
        out.extend_from_slice(&unit);
    }
    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alg_ast::{Node, Span};

    fn expand(source: &str) -> String {
        Expand.apply_text(source).unwrap()
    }

    fn to_moves(source: &str) -> String {
        ToMoves.apply_text(source).unwrap()
    }

    #[test]
    fn test_expand_commutator() {
        assert_eq!(expand("[R, U]"), "R U R' U'");
        assert_eq!(expand("[R, U]2"), "R U R' U' R U R' U'");
        assert_eq!(expand("[R, U]'"), "U R U' R'");
    }

    #[test]
    fn test_expand_conjugate() {
        assert_eq!(expand("[F: R U R']"), "F R U R' F'");
        assert_eq!(expand("[R U: D]"), "R U D U' R'");
    }

    #[test]
    fn test_expand_group() {
        assert_eq!(expand("(R U)3"), "R U R U R U");
        assert_eq!(expand("(R U)'"), "U' R'");
        assert_eq!(expand("(R U)0"), "");
    }

    #[test]
    fn test_expand_nested() {
        assert_eq!(expand("[F: [R, U]]"), "F R U R' U' F'");
        assert_eq!(expand("([R, U])2"), "R U R' U' R U R' U'");
    }

    #[test]
    fn test_group_contents_follow_the_pass() {
        assert_eq!(expand("(R . // c\n)2"), "R . // c\nR . // c\n");
        assert_eq!(to_moves("(R . // c\n)2"), "R . R .");
    }

    #[test]
    fn test_expand_keeps_leaves() {
        assert_eq!(expand("R . // c\n(U)2"), "R . // c\nU U");
    }

    #[test]
    fn test_to_moves_drops_annotations() {
        assert_eq!(to_moves("R // c\n/* x */ U @2s"), "R U");
        assert_eq!(to_moves("(R // c\n)2"), "R R");
    }

    #[test]
    fn test_to_moves_turns_pauses_into_ticks() {
        let alg = alg_parser::parse("R .").unwrap();
        let out = ToMoves.apply_tree(&alg).unwrap();
        match &out[1] {
            Node::Move(tick) => {
                assert_eq!(tick.base, Base::Pause);
                assert_eq!(tick.amount, 1);
                assert_eq!(tick.location, Some(Span::new(2, 3)));
            }
            other => panic!("Expected pause move, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_unit_keeps_pause_ticks() {
        assert_eq!(to_moves("(R .)'"), ". R'");
    }
}
