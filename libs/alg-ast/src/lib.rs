//! # Alg AST Crate
//!
//! Typed syntax tree for twisty-puzzle algorithms ("algs") written in
//! cube notation, plus the printer that turns a tree back into text.
//!
//! ## Architecture
//!
//! ```text
//! Alg text → alg-parser (AST) → alg-engine passes (AST / moves / counts) → alg-ast printer (text)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use alg_ast::{print, Base, Face, Group, Move, Node};
//!
//! let sexy = vec![
//!     Node::from(Move::new(Base::Single(Face::R), 1)),
//!     Node::from(Move::new(Base::Single(Face::U), 1)),
//! ];
//! let alg = vec![Node::from(Group { a: sexy, amount: 6 })];
//! assert_eq!(print(&alg), "(R U)6");
//! ```
//!
//! ## Design Principles
//!
//! - **Typed Symbols**: Move symbols are a closed enum, never strings
//! - **Value Semantics**: Nodes own their children; passes build new trees
//! - **No Semantics**: This crate only models and prints syntax

pub mod node;
pub mod printer;
pub mod span;
pub mod symbol;

// Re-exports for convenience
pub use node::*;
pub use printer::{print, print_node};
pub use span::Span;
pub use symbol::{Axis, Base, Face, Family, Slice, UnknownSymbol, WideStyle};
