//! # Traversal
//!
//! The two pass shapes every alg operation is built from.
//!
//! - [`Transform`] rebuilds a tree. Each handler returns the nodes that
//!   replace its input (zero, one or many), and the walker splices them
//!   into the parent sequence.
//! - [`Fold`] reduces a tree to a value, such as a move count.
//!
//! Both traits follow the visitor layout: one method per node variant, each
//! defaulting to a public `walk_*` function. An override can call the
//! `walk_*` function to get the default behavior for the same node, which
//! is how passes delegate back to the generic recursion.
//!
//! ## Example
//!
//! ```rust
//! use alg_ast::{Move, Sequence};
//! use alg_engine::{AlgError, Transform};
//!
//! /// Doubles every move.
//! struct Double;
//!
//! impl Transform for Double {
//!     fn transform_move(&self, mv: &Move) -> Result<Sequence, AlgError> {
//!         let mut mv = mv.clone();
//!         mv.amount *= 2;
//!         Ok(vec![mv.into()])
//!     }
//! }
//!
//! assert_eq!(Double.apply_text("[R, U']").unwrap(), "[R2, U2']");
//! ```

use std::borrow::Cow;

use crate::error::AlgError;
use alg_ast::{Comment, Commutator, Conjugate, Group, Move, Node, Pause, Sequence, Timestamp};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};

// =============================================================================
// INPUT / OUTPUT
// =============================================================================

/// An alg given either as notation text or as an already-parsed tree.
///
/// Text is parsed before the pass runs. Tree inputs are borrowed and never
/// modified.
#[derive(Debug, Clone, Copy)]
pub enum AlgInput<'a> {
    Text(&'a str),
    Tree(&'a [Node]),
}

impl<'a> AlgInput<'a> {
    /// Resolve to a tree, parsing text if needed.
    pub fn into_tree(self) -> Result<Cow<'a, [Node]>, AlgError> {
        match self {
            AlgInput::Text(source) => Ok(Cow::Owned(alg_parser::parse(source)?)),
            AlgInput::Tree(alg) => Ok(Cow::Borrowed(alg)),
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, AlgInput::Text(_))
    }
}

impl<'a> From<&'a str> for AlgInput<'a> {
    fn from(source: &'a str) -> Self {
        AlgInput::Text(source)
    }
}

impl<'a> From<&'a String> for AlgInput<'a> {
    fn from(source: &'a String) -> Self {
        AlgInput::Text(source)
    }
}

impl<'a> From<&'a [Node]> for AlgInput<'a> {
    fn from(alg: &'a [Node]) -> Self {
        AlgInput::Tree(alg)
    }
}

impl<'a> From<&'a Sequence> for AlgInput<'a> {
    fn from(alg: &'a Sequence) -> Self {
        AlgInput::Tree(alg)
    }
}

/// Result of a [`Transform`], in the same form as its input.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgOutput {
    Text(String),
    Tree(Sequence),
}

impl AlgOutput {
    /// The output as text, printing it if it is a tree.
    pub fn into_text(self) -> String {
        match self {
            AlgOutput::Text(text) => text,
            AlgOutput::Tree(alg) => alg_ast::print(&alg),
        }
    }

    /// The output as a tree, parsing it if it is text.
    pub fn into_tree(self) -> Result<Sequence, AlgError> {
        match self {
            AlgOutput::Text(text) => Ok(alg_parser::parse(&text)?),
            AlgOutput::Tree(alg) => Ok(alg),
        }
    }
}

// =============================================================================
// TRANSFORM
// =============================================================================

/// A pass that rebuilds an alg.
///
/// Every handler receives the node by reference and returns the nodes that
/// replace it. The defaults copy leaves unchanged and rebuild composites
/// from their transformed children, so an empty `impl Transform for X {}`
/// is the identity.
pub trait Transform {
    /// Reject input this pass cannot handle. Runs once, before traversal.
    fn validate(&self, _alg: &[Node]) -> Result<(), AlgError> {
        Ok(())
    }

    fn transform_sequence(&self, alg: &[Node]) -> Result<Sequence, AlgError> {
        walk_sequence(self, alg)
    }

    fn transform_node(&self, node: &Node) -> Result<Sequence, AlgError> {
        walk_node(self, node)
    }

    fn transform_move(&self, mv: &Move) -> Result<Sequence, AlgError> {
        walk_move(self, mv)
    }

    fn transform_commutator(&self, comm: &Commutator) -> Result<Sequence, AlgError> {
        walk_commutator(self, comm)
    }

    fn transform_conjugate(&self, conj: &Conjugate) -> Result<Sequence, AlgError> {
        walk_conjugate(self, conj)
    }

    fn transform_group(&self, group: &Group) -> Result<Sequence, AlgError> {
        walk_group(self, group)
    }

    fn transform_pause(&self, pause: &Pause) -> Result<Sequence, AlgError> {
        Ok(vec![Node::Pause(pause.clone())])
    }

    fn transform_newline(&self) -> Result<Sequence, AlgError> {
        Ok(vec![Node::Newline])
    }

    fn transform_comment_short(&self, comment: &Comment) -> Result<Sequence, AlgError> {
        Ok(vec![Node::CommentShort(comment.clone())])
    }

    fn transform_comment_long(&self, comment: &Comment) -> Result<Sequence, AlgError> {
        Ok(vec![Node::CommentLong(comment.clone())])
    }

    fn transform_timestamp(&self, timestamp: &Timestamp) -> Result<Sequence, AlgError> {
        Ok(vec![Node::Timestamp(*timestamp)])
    }

    /// Validate and transform a tree.
    fn apply_tree(&self, alg: &[Node]) -> Result<Sequence, AlgError> {
        self.validate(alg)?;
        self.transform_sequence(alg)
    }

    /// Parse, transform and print.
    fn apply_text(&self, source: &str) -> Result<String, AlgError> {
        let alg = alg_parser::parse(source)?;
        Ok(alg_ast::print(&self.apply_tree(&alg)?))
    }

    /// Run on either input form; text in gives text out.
    fn apply(&self, input: AlgInput<'_>) -> Result<AlgOutput, AlgError> {
        let text_in = input.is_text();
        let alg = input.into_tree()?;
        tracing::trace!(nodes = alg.len(), text_in, "Applying transform");
        let out = self.apply_tree(&alg)?;
        Ok(if text_in {
            AlgOutput::Text(alg_ast::print(&out))
        } else {
            AlgOutput::Tree(out)
        })
    }
}

/// Transform each node and splice the results in order.
pub fn walk_sequence<T: Transform + ?Sized>(t: &T, alg: &[Node]) -> Result<Sequence, AlgError> {
    let mut out = Vec::with_capacity(alg.len());
    for node in alg {
        out.extend(t.transform_node(node)?);
    }
    Ok(out)
}

/// Dispatch a node to the handler for its variant.
///
/// Every level of nesting passes through here, so this is where the stack
/// is grown for deeply nested algs.
pub fn walk_node<T: Transform + ?Sized>(t: &T, node: &Node) -> Result<Sequence, AlgError> {
    stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match node {
        Node::Move(mv) => t.transform_move(mv),
        Node::Commutator(comm) => t.transform_commutator(comm),
        Node::Conjugate(conj) => t.transform_conjugate(conj),
        Node::Group(group) => t.transform_group(group),
        Node::Pause(pause) => t.transform_pause(pause),
        Node::Newline => t.transform_newline(),
        Node::CommentShort(comment) => t.transform_comment_short(comment),
        Node::CommentLong(comment) => t.transform_comment_long(comment),
        Node::Timestamp(timestamp) => t.transform_timestamp(timestamp),
    })
}

pub fn walk_move<T: Transform + ?Sized>(_t: &T, mv: &Move) -> Result<Sequence, AlgError> {
    Ok(vec![Node::Move(mv.clone())])
}

pub fn walk_commutator<T: Transform + ?Sized>(t: &T, comm: &Commutator) -> Result<Sequence, AlgError> {
    Ok(vec![Node::Commutator(Commutator {
        a: t.transform_sequence(&comm.a)?,
        b: t.transform_sequence(&comm.b)?,
        amount: comm.amount,
    })])
}

pub fn walk_conjugate<T: Transform + ?Sized>(t: &T, conj: &Conjugate) -> Result<Sequence, AlgError> {
    Ok(vec![Node::Conjugate(Conjugate {
        a: t.transform_sequence(&conj.a)?,
        b: t.transform_sequence(&conj.b)?,
        amount: conj.amount,
    })])
}

pub fn walk_group<T: Transform + ?Sized>(t: &T, group: &Group) -> Result<Sequence, AlgError> {
    Ok(vec![Node::Group(Group {
        a: t.transform_sequence(&group.a)?,
        amount: group.amount,
    })])
}

// =============================================================================
// FOLD
// =============================================================================

/// Folded children of a commutator or conjugate.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldedPair<T> {
    pub a: T,
    pub b: T,
    pub amount: i32,
}

/// Folded child of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldedGroup<T> {
    pub a: T,
    pub amount: i32,
}

/// A pass that reduces an alg to a value.
///
/// Implementors say how to fold a move, how to combine the values of a
/// sequence, and how to combine the folded parts of each composite. Leaves
/// other than moves go through [`Fold::fold_leaf`].
pub trait Fold {
    type Output;

    /// Reject input or configuration this pass cannot handle. Runs once,
    /// before traversal.
    fn validate(&self, _alg: &[Node]) -> Result<(), AlgError> {
        Ok(())
    }

    /// Combine the values of a sequence's nodes, in order.
    fn combine(&self, values: Vec<Self::Output>) -> Result<Self::Output, AlgError>;

    fn fold_move(&self, mv: &Move) -> Result<Self::Output, AlgError>;

    fn fold_commutator(&self, parts: FoldedPair<Self::Output>) -> Result<Self::Output, AlgError>;

    fn fold_conjugate(&self, parts: FoldedPair<Self::Output>) -> Result<Self::Output, AlgError>;

    fn fold_group(&self, parts: FoldedGroup<Self::Output>) -> Result<Self::Output, AlgError>;

    /// Pauses, newlines, comments and timestamps.
    fn fold_leaf(&self, node: &Node) -> Result<Self::Output, AlgError>;

    fn fold_sequence(&self, alg: &[Node]) -> Result<Self::Output, AlgError> {
        let values = fold_children(self, alg)?;
        self.combine(values)
    }

    fn fold_node(&self, node: &Node) -> Result<Self::Output, AlgError> {
        walk_fold_node(self, node)
    }

    /// Validate and fold either input form.
    fn evaluate(&self, input: AlgInput<'_>) -> Result<Self::Output, AlgError> {
        let alg = input.into_tree()?;
        self.validate(&alg)?;
        tracing::trace!(nodes = alg.len(), "Evaluating fold");
        self.fold_sequence(&alg)
    }
}

/// Fold every node of a sequence, keeping one value per node.
pub fn fold_children<F: Fold + ?Sized>(f: &F, alg: &[Node]) -> Result<Vec<F::Output>, AlgError> {
    alg.iter().map(|node| f.fold_node(node)).collect()
}

/// Fold a node's children, then hand the parts to the handler for its variant.
pub fn walk_fold_node<F: Fold + ?Sized>(f: &F, node: &Node) -> Result<F::Output, AlgError> {
    stacker::maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match node {
        Node::Move(mv) => f.fold_move(mv),
        Node::Commutator(comm) => f.fold_commutator(FoldedPair {
            a: f.fold_sequence(&comm.a)?,
            b: f.fold_sequence(&comm.b)?,
            amount: comm.amount,
        }),
        Node::Conjugate(conj) => f.fold_conjugate(FoldedPair {
            a: f.fold_sequence(&conj.a)?,
            b: f.fold_sequence(&conj.b)?,
            amount: conj.amount,
        }),
        Node::Group(group) => f.fold_group(FoldedGroup {
            a: f.fold_sequence(&group.a)?,
            amount: group.amount,
        }),
        leaf => f.fold_leaf(leaf),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;
    impl Transform for Identity {}

    /// Drops comments and doubles groups, to exercise splicing.
    struct Splicer;
    impl Transform for Splicer {
        fn transform_comment_short(&self, _comment: &Comment) -> Result<Sequence, AlgError> {
            Ok(vec![])
        }

        fn transform_group(&self, group: &Group) -> Result<Sequence, AlgError> {
            let a = self.transform_sequence(&group.a)?;
            Ok(a.iter().chain(a.iter()).cloned().collect())
        }
    }

    /// Counts nodes that are not leaves, weighting composites by amount.
    struct NodeCount;
    impl Fold for NodeCount {
        type Output = u64;

        fn combine(&self, values: Vec<u64>) -> Result<u64, AlgError> {
            Ok(values.into_iter().sum())
        }

        fn fold_move(&self, _mv: &Move) -> Result<u64, AlgError> {
            Ok(1)
        }

        fn fold_commutator(&self, parts: FoldedPair<u64>) -> Result<u64, AlgError> {
            Ok(2 * (parts.a + parts.b))
        }

        fn fold_conjugate(&self, parts: FoldedPair<u64>) -> Result<u64, AlgError> {
            Ok(2 * parts.a + parts.b)
        }

        fn fold_group(&self, parts: FoldedGroup<u64>) -> Result<u64, AlgError> {
            Ok(parts.a * u64::from(parts.amount.unsigned_abs()))
        }

        fn fold_leaf(&self, _node: &Node) -> Result<u64, AlgError> {
            Ok(0)
        }
    }

    #[test]
    fn test_identity_round_trips() {
        let source = "[R, U] [F: R]\n// x\n[r U r': R2]3' . @1s";
        assert_eq!(Identity.apply_text(source).unwrap(), source);
    }

    #[test]
    fn test_handlers_splice_results() {
        let out = Splicer.apply_text("R (U F) // gone").unwrap();
        assert_eq!(out, "R U F U F");
    }

    #[test]
    fn test_output_form_follows_input() {
        let alg = alg_parser::parse("R U").unwrap();
        let tree_out = Identity.apply(AlgInput::from(&alg)).unwrap();
        assert_eq!(tree_out, AlgOutput::Tree(alg.clone()));

        let text_out = Identity.apply(AlgInput::from("R U")).unwrap();
        assert_eq!(text_out, AlgOutput::Text("R U".to_string()));
        assert_eq!(text_out.into_tree().unwrap().len(), 2);
    }

    #[test]
    fn test_tree_input_is_not_modified() {
        let alg = alg_parser::parse("(R U)2").unwrap();
        let before = alg.clone();
        let _ = Splicer.apply(AlgInput::from(&alg)).unwrap();
        assert_eq!(alg, before);
    }

    #[test]
    fn test_parse_errors_surface() {
        let err = Identity.apply(AlgInput::from("[R, U")).unwrap_err();
        assert!(matches!(err, AlgError::Parse(_)));
    }

    #[test]
    fn test_fold_composites() {
        let count = NodeCount.evaluate(AlgInput::from("[R, U] [F: R] (R U)3 . // c")).unwrap();
        assert_eq!(count, 4 + 3 + 6);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let mut alg: Sequence = vec![Move::new(alg_ast::Base::Single(alg_ast::Face::R), 1).into()];
        for _ in 0..1_000 {
            alg = vec![Group { a: alg, amount: 1 }.into()];
        }
        let out = Identity.apply_tree(&alg).unwrap();
        assert_eq!(alg_ast::print(&out).matches('(').count(), 1_000);
        assert_eq!(NodeCount.fold_sequence(&alg).unwrap(), 1);
    }
}
