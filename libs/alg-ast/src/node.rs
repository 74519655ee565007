//! # Alg Nodes
//!
//! The tagged tree every pass works on. A [`Sequence`] is an ordered list of
//! [`Node`]s; commutators, conjugates and groups hold nested sequences.
//!
//! The serde representation matches the object shape used by web tooling:
//!
//! ```rust
//! use alg_ast::{Base, Face, Move, Node};
//!
//! let node = Node::from(Move::new(Base::Single(Face::R), -1).with_layer(2));
//! let json = serde_json::to_string(&node).unwrap();
//! assert_eq!(json, r#"{"type":"move","base":"R","amount":-1,"layer":2}"#);
//! ```

use crate::span::Span;
use crate::symbol::Base;
use serde::{Deserialize, Serialize};

/// An ordered list of nodes. Order is significant.
pub type Sequence = Vec<Node>;

// =============================================================================
// NODE
// =============================================================================

/// One element of an alg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A primitive turn.
    Move(Move),
    /// `[A, B]`: A, B, A', B'.
    Commutator(Commutator),
    /// `[A: B]`: A, B, A'.
    Conjugate(Conjugate),
    /// `(A)`: A repeated.
    Group(Group),
    /// `.`: one tick of nothing.
    Pause(Pause),
    /// Line break.
    Newline,
    /// `// ...` up to the end of the line.
    CommentShort(Comment),
    /// `/* ... */`
    CommentLong(Comment),
    /// `@12.5s`
    Timestamp(Timestamp),
}

/// Discriminant of a [`Node`]; its name matches the serialized `type` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Move,
    Commutator,
    Conjugate,
    Group,
    Pause,
    Newline,
    CommentShort,
    CommentLong,
    Timestamp,
}

impl NodeKind {
    /// Name used in the serialized `type` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Move => "move",
            NodeKind::Commutator => "commutator",
            NodeKind::Conjugate => "conjugate",
            NodeKind::Group => "group",
            NodeKind::Pause => "pause",
            NodeKind::Newline => "newline",
            NodeKind::CommentShort => "comment_short",
            NodeKind::CommentLong => "comment_long",
            NodeKind::Timestamp => "timestamp",
        }
    }

    /// Whether nodes of this kind carry a repetition amount and a suffix.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            NodeKind::Move | NodeKind::Commutator | NodeKind::Conjugate | NodeKind::Group
        )
    }
}

impl Node {
    /// Kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Move(_) => NodeKind::Move,
            Node::Commutator(_) => NodeKind::Commutator,
            Node::Conjugate(_) => NodeKind::Conjugate,
            Node::Group(_) => NodeKind::Group,
            Node::Pause(_) => NodeKind::Pause,
            Node::Newline => NodeKind::Newline,
            Node::CommentShort(_) => NodeKind::CommentShort,
            Node::CommentLong(_) => NodeKind::CommentLong,
            Node::Timestamp(_) => NodeKind::Timestamp,
        }
    }

    /// Repetition amount of a repeatable node.
    pub fn amount(&self) -> Option<i32> {
        match self {
            Node::Move(m) => Some(m.amount),
            Node::Commutator(c) => Some(c.amount),
            Node::Conjugate(c) => Some(c.amount),
            Node::Group(g) => Some(g.amount),
            _ => None,
        }
    }

    /// Shorthand for a short comment node.
    pub fn comment_short(text: impl Into<String>) -> Node {
        Node::CommentShort(Comment::new(text))
    }

    /// Shorthand for a long comment node.
    pub fn comment_long(text: impl Into<String>) -> Node {
        Node::CommentLong(Comment::new(text))
    }

    /// Shorthand for a pause without a source location.
    pub fn pause() -> Node {
        Node::Pause(Pause::default())
    }
}

// =============================================================================
// MOVE
// =============================================================================

/// A primitive turn of one or more contiguous layers.
///
/// Layer fields are optional on parsed moves ("use the family default") and
/// always present on canonical moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub base: Base,
    /// Signed quarter turns.
    pub amount: i32,
    /// Layer of a single-layer move, e.g. the `2` of `2R`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_layer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_layer: Option<u32>,
    /// Source of the pause this move stands in for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

impl Move {
    /// A move with no explicit layers.
    pub fn new(base: Base, amount: i32) -> Self {
        Self {
            base,
            amount,
            layer: None,
            start_layer: None,
            end_layer: None,
            location: None,
        }
    }

    /// Set the single layer (`2R`).
    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Set the innermost layer of a wide move (`3Rw`).
    pub fn with_end_layer(mut self, end_layer: u32) -> Self {
        self.end_layer = Some(end_layer);
        self
    }

    /// Set an inclusive layer range (`2-3Rw`).
    pub fn with_layers(mut self, start_layer: u32, end_layer: u32) -> Self {
        self.start_layer = Some(start_layer);
        self.end_layer = Some(end_layer);
        self
    }

    /// Whether two moves turn the same layers about the same face, so their
    /// amounts can be added.
    pub fn same_layers(&self, other: &Move) -> bool {
        self.base == other.base
            && self.layer == other.layer
            && self.start_layer == other.start_layer
            && self.end_layer == other.end_layer
    }
}

// =============================================================================
// COMPOSITES
// =============================================================================

/// `[A, B]` repeated `amount` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commutator {
    #[serde(rename = "A")]
    pub a: Sequence,
    #[serde(rename = "B")]
    pub b: Sequence,
    pub amount: i32,
}

/// `[A: B]` repeated `amount` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conjugate {
    #[serde(rename = "A")]
    pub a: Sequence,
    #[serde(rename = "B")]
    pub b: Sequence,
    pub amount: i32,
}

/// `(A)` repeated `amount` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "A")]
    pub a: Sequence,
    pub amount: i32,
}

// =============================================================================
// LEAVES
// =============================================================================

/// A pause tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Span>,
}

/// Comment text, stored with its delimiters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            comment: text.into(),
        }
    }
}

/// Time offset marker, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    pub time: f64,
}

macro_rules! impl_into_node {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$ty(value)
                }
            }
        )*
    };
}

impl_into_node!(Move, Commutator, Conjugate, Group, Pause, Timestamp);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Face;

    #[test]
    fn test_repeatable_kinds() {
        assert!(NodeKind::Move.is_repeatable());
        assert!(NodeKind::Group.is_repeatable());
        assert!(!NodeKind::Pause.is_repeatable());
        assert!(!NodeKind::Timestamp.is_repeatable());
        assert_eq!(Node::Newline.amount(), None);
    }

    #[test]
    fn test_kind_names_match_type_tag() {
        let nodes = [
            Move::new(Base::Single(Face::R), 1).into(),
            Node::Group(Group { a: vec![], amount: 1 }),
            Node::pause(),
            Node::Newline,
            Node::comment_short("// x"),
            Node::comment_long("/* x */"),
            Node::Timestamp(Timestamp { time: 1.0 }),
        ];
        for node in &nodes {
            let json = serde_json::to_value(node).unwrap();
            assert_eq!(json["type"], node.kind().as_str());
        }
    }

    #[test]
    fn test_same_layers_compares_every_layer_field() {
        let r = Move::new(Base::Single(Face::R), 1);
        assert!(r.same_layers(&Move::new(Base::Single(Face::R), -1)));
        assert!(!r.same_layers(&r.clone().with_layer(2)));
        assert!(!r.same_layers(&Move::new(Base::Single(Face::L), 1)));
    }

    #[test]
    fn test_json_commutator_shape() {
        let node = Node::Commutator(Commutator {
            a: vec![Move::new(Base::Single(Face::R), 1).into()],
            b: vec![Node::Newline],
            amount: 2,
        });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "commutator");
        assert_eq!(json["A"][0]["base"], "R");
        assert_eq!(json["B"][0]["type"], "newline");
        assert_eq!(json["amount"], 2);
    }

    #[test]
    fn test_json_repeatable_without_amount_rejected() {
        let json = r#"{"type":"group","A":[]}"#;
        assert!(serde_json::from_str::<Node>(json).is_err());
    }

    #[test]
    fn test_json_unknown_base_rejected() {
        let json = r#"{"type":"move","base":"Q","amount":1}"#;
        assert!(serde_json::from_str::<Node>(json).is_err());
    }
}
