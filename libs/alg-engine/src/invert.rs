//! # Inverter
//!
//! Builds the alg that undoes its input.
//!
//! | Node         | Inverse                                  |
//! |--------------|------------------------------------------|
//! | move         | amount negated (pauses unchanged)        |
//! | `[A, B]`     | `[B, A]`                                 |
//! | `[A: B]`     | `[A: B']`                                |
//! | `(A)n`       | `(A')n`                                  |
//! | timestamp    | unsupported                              |
//!
//! Sequences are inverted line by line: each line is reversed in place and
//! then the order of lines is reversed, so a multi-line alg keeps its
//! layout. A short comment that ends a line stays at the end of the line.

use crate::error::AlgError;
use crate::traverse::Transform;
use alg_ast::{Base, Commutator, Conjugate, Group, Move, Node, Sequence, Timestamp};

/// The inversion pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl Transform for Invert {
    fn transform_sequence(&self, alg: &[Node]) -> Result<Sequence, AlgError> {
        let lines: Vec<&[Node]> = alg.split(|node| matches!(node, Node::Newline)).collect();
        if lines.len() > 1 {
            tracing::debug!(lines = lines.len(), "Inverting multi-line alg");
        }

        let mut out = Vec::with_capacity(alg.len());
        for (i, line) in lines.iter().rev().enumerate() {
            if i > 0 {
                out.push(Node::Newline);
            }
            out.extend(self.invert_line(line)?);
        }
        Ok(out)
    }

    fn transform_move(&self, mv: &Move) -> Result<Sequence, AlgError> {
        let mut inverse = mv.clone();
        if mv.base != Base::Pause {
            inverse.amount = mv.amount.saturating_neg();
        }
        Ok(vec![inverse.into()])
    }

    fn transform_commutator(&self, comm: &Commutator) -> Result<Sequence, AlgError> {
        Ok(vec![Commutator {
            a: comm.b.clone(),
            b: comm.a.clone(),
            amount: comm.amount,
        }
        .into()])
    }

    fn transform_conjugate(&self, conj: &Conjugate) -> Result<Sequence, AlgError> {
        Ok(vec![Conjugate {
            a: conj.a.clone(),
            b: self.transform_sequence(&conj.b)?,
            amount: conj.amount,
        }
        .into()])
    }

    fn transform_group(&self, group: &Group) -> Result<Sequence, AlgError> {
        Ok(vec![Group {
            a: self.transform_sequence(&group.a)?,
            amount: group.amount,
        }
        .into()])
    }

    fn transform_timestamp(&self, _timestamp: &Timestamp) -> Result<Sequence, AlgError> {
        Err(AlgError::Unsupported {
            operation: "timestamp inversion",
        })
    }
}

impl Invert {
    /// Invert one line's nodes in reverse order.
    fn invert_line(&self, line: &[Node]) -> Result<Sequence, AlgError> {
        let mut out = Vec::with_capacity(line.len());
        for node in line.iter().rev() {
            out.extend(self.transform_node(node)?);
        }
        if matches!(out.first(), Some(Node::CommentShort(_))) {
            out.rotate_left(1);
        }
        Ok(out)
    }
}

// =============================================================================
// TESTS
// =============================================================================
