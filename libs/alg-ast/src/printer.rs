//! # Printer
//!
//! Renders a tree back to alg text. Output depends only on the fields
//! present on each node, so a raw `Rw` and its canonical form `R` (layers
//! 1-2) print differently.

use crate::node::*;
use crate::symbol::Family;
use config::constants::{DEFAULT_SINGLE_LAYER, INVERSE_MARK, LAYER_RANGE_SEPARATOR, PAUSE_SYMBOL, TIMESTAMP_PREFIX, TIMESTAMP_SUFFIX};

/// Render a sequence.
///
/// Nodes are separated by one space, except around newlines, after the
/// last node, and between consecutive pauses.
///
/// # Example
///
/// ```rust
/// use alg_ast::{print, Base, Face, Move, Node};
///
/// let alg = vec![
///     Node::from(Move::new(Base::Single(Face::R), 1)),
///     Node::pause(),
///     Node::pause(),
///     Node::from(Move::new(Base::Single(Face::U), -2)),
/// ];
/// assert_eq!(print(&alg), "R .. U2'");
/// ```
pub fn print(sequence: &[Node]) -> String {
    let mut out = String::new();
    for (i, node) in sequence.iter().enumerate() {
        out.push_str(&print_node(node));

        let next = sequence.get(i + 1);
        let last = next.is_none();
        let after_newline = matches!(node, Node::Newline);
        let before_newline = matches!(next, Some(Node::Newline));
        let between_pauses = matches!(node, Node::Pause(_)) && matches!(next, Some(Node::Pause(_)));

        if !last && !after_newline && !before_newline && !between_pauses {
            out.push(' ');
        }
    }
    out
}

/// Render a single node, including its suffix if it is repeatable.
pub fn print_node(node: &Node) -> String {
    let mut out = match node {
        Node::Move(m) => format!("{}{}", layer_prefix(m), m.base),
        Node::Commutator(c) => format!("[{}, {}]", print(&c.a), print(&c.b)),
        Node::Conjugate(c) => format!("[{}: {}]", print(&c.a), print(&c.b)),
        Node::Group(g) => format!("({})", print(&g.a)),
        Node::Timestamp(t) => format!("{}{}{}", TIMESTAMP_PREFIX, t.time, TIMESTAMP_SUFFIX),
        Node::CommentShort(c) | Node::CommentLong(c) => c.comment.clone(),
        Node::Pause(_) => PAUSE_SYMBOL.to_string(),
        Node::Newline => "\n".to_string(),
    };
    if let Some(amount) = node.amount() {
        out.push_str(&suffix(amount));
    }
    out
}

/// Repetition suffix: the magnitude unless it is 1, then `'` if negative.
///
/// # Example
///
/// ```rust
/// use alg_ast::printer::suffix;
///
/// assert_eq!(suffix(1), "");
/// assert_eq!(suffix(-1), "'");
/// assert_eq!(suffix(-2), "2'");
/// assert_eq!(suffix(0), "0");
/// ```
pub fn suffix(amount: i32) -> String {
    let mut out = String::new();
    let magnitude = amount.unsigned_abs();
    if magnitude != 1 {
        out.push_str(&magnitude.to_string());
    }
    if amount < 0 {
        out.push(INVERSE_MARK);
    }
    out
}

fn layer_prefix(m: &Move) -> String {
    match m.base.family() {
        Family::Single => match m.layer {
            Some(layer) if layer > DEFAULT_SINGLE_LAYER => layer.to_string(),
            _ => String::new(),
        },
        Family::Wide => match (m.start_layer, m.end_layer) {
            (Some(s), Some(e)) => format!("{}{}{}", s, LAYER_RANGE_SEPARATOR, e),
            (None, Some(e)) => e.to_string(),
            (_, None) => String::new(),
        },
        Family::Slice | Family::Rotation | Family::Pause => String::new(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Axis, Base, Face, Slice, WideStyle};

    fn mv(base: Base, amount: i32) -> Node {
        Move::new(base, amount).into()
    }

    #[test]
    fn test_print_layer_prefixes() {
        let r = Base::Single(Face::R);
        let rw = Base::Wide(Face::R, WideStyle::Suffixed);
        assert_eq!(print_node(&Move::new(r, 1).with_layer(2).into()), "2R");
        assert_eq!(print_node(&Move::new(r, 1).with_layer(1).into()), "R");
        assert_eq!(print_node(&Move::new(rw, 1).with_end_layer(3).into()), "3Rw");
        assert_eq!(print_node(&Move::new(rw, -1).with_layers(2, 3).into()), "2-3Rw'");
        // Slices and rotations imply their range.
        assert_eq!(print_node(&Move::new(Base::Slice(Slice::M), 2).with_layers(2, 4).into()), "M2");
        assert_eq!(print_node(&Move::new(Base::Rotation(Axis::Y), 1).with_layers(1, 5).into()), "y");
    }

    #[test]
    fn test_print_composites() {
        let r = mv(Base::Single(Face::R), 1);
        let u = mv(Base::Single(Face::U), 1);
        let comm = Node::Commutator(Commutator { a: vec![r.clone()], b: vec![u.clone()], amount: 1 });
        let conj = Node::Conjugate(Conjugate { a: vec![r.clone()], b: vec![u.clone()], amount: -2 });
        let group = Node::Group(Group { a: vec![r, u], amount: 3 });
        assert_eq!(print(&[comm, conj, group]), "[R, U] [R: U]2' (R U)3");
    }

    #[test]
    fn test_print_newlines_and_comments() {
        let alg = vec![
            mv(Base::Single(Face::R), 1),
            Node::comment_short("// sexy"),
            Node::Newline,
            Node::comment_long("/* next */"),
            mv(Base::Single(Face::U), -1),
        ];
        assert_eq!(print(&alg), "R // sexy\n/* next */ U'");
    }

    #[test]
    fn test_print_timestamp() {
        let alg = vec![Node::Timestamp(Timestamp { time: 12.5 }), Node::Timestamp(Timestamp { time: 3.0 })];
        assert_eq!(print(&alg), "@12.5s @3s");
    }

    #[test]
    fn test_print_suffix_only_on_repeatable_nodes() {
        let alg = vec![
            Node::Group(Group { a: vec![mv(Base::Single(Face::R), 1)], amount: 0 }),
            Node::pause(),
            Node::comment_long("/* 2' */"),
            mv(Base::Single(Face::U), -3),
        ];
        for node in &alg {
            assert_eq!(node.amount().is_some(), node.kind().is_repeatable());
        }
        assert_eq!(print(&alg), "(R)0 . /* 2' */ U3'");
    }

    #[test]
    fn test_print_empty() {
        assert_eq!(print(&[]), "");
    }
}
