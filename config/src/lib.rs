//! # Config Crate
//!
//! Centralized configuration constants for the twisty-puzzle alg pipeline.
//! Notation symbols, layer defaults, and recursion limits are defined here so
//! the parser, the serializer, and the engine passes agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{QUARTER_TURNS_PER_REVOLUTION, PAUSE_SYMBOL};
//!
//! // Five quarter turns are the same as one.
//! assert_eq!(5 % QUARTER_TURNS_PER_REVOLUTION, 1);
//! assert_eq!(PAUSE_SYMBOL, ".");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Runtime State**: Pass configuration (dimension, metric) lives on the pass itself
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
