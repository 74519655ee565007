//! # Alg Engine
//!
//! Structural passes over twisty-puzzle algs: canonicalization,
//! simplification, expansion, inversion, mirroring and move counting.
//!
//! ## Architecture
//!
//! ```text
//! alg-parser (AST) → alg-engine passes → AST / flat moves / counts → alg-ast printer
//! ```
//!
//! Every alg-valued pass implements [`Transform`] and every scalar pass
//! implements [`Fold`]. Passes never modify their input; they build new
//! trees.
//!
//! ## Example
//!
//! ```rust
//! use alg_engine::{count_moves, expand, invert, simplify};
//!
//! assert_eq!(expand("[R, U]").unwrap().into_text(), "R U R' U'");
//! assert_eq!(invert("[F: R U]").unwrap().into_text(), "[F: U' R']");
//! assert_eq!(simplify("R U U' R").unwrap().into_text(), "R2");
//! assert_eq!(count_moves("[R, U]", "obtm", 3).unwrap(), 4);
//! ```
//!
//! Passing a tree instead of text gives a tree back:
//!
//! ```rust
//! use alg_engine::{invert, AlgOutput};
//!
//! let alg = alg_parser::parse("R U").unwrap();
//! let AlgOutput::Tree(inverse) = invert(&alg).unwrap() else {
//!     panic!("tree in, tree out");
//! };
//! assert_eq!(inverse.len(), 2);
//! ```

pub mod canonicalize;
pub mod error;
pub mod expand;
pub mod invert;
pub mod locations;
pub mod metrics;
pub mod mirror;
pub mod simplify;
pub mod traverse;

pub use canonicalize::{canonicalize_move, Canonicalize};
pub use error::AlgError;
pub use expand::{Expand, ToMoves};
pub use invert::Invert;
pub use locations::ForgetLocations;
pub use metrics::{Metric, MoveClass, MoveCounter};
pub use mirror::{Mirror, MirrorTable};
pub use simplify::Simplify;
pub use traverse::{AlgInput, AlgOutput, Fold, FoldedGroup, FoldedPair, Transform};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Canonicalize every move for a puzzle of `dimension` layers.
pub fn canonicalize<'a>(alg: impl Into<AlgInput<'a>>, dimension: u32) -> Result<AlgOutput, AlgError> {
    Canonicalize { dimension }.apply(alg.into())
}

/// Fold adjacent moves on the same layers.
pub fn simplify<'a>(alg: impl Into<AlgInput<'a>>) -> Result<AlgOutput, AlgError> {
    Simplify.apply(alg.into())
}

/// Flatten commutators, conjugates and groups.
pub fn expand<'a>(alg: impl Into<AlgInput<'a>>) -> Result<AlgOutput, AlgError> {
    Expand.apply(alg.into())
}

/// Flatten to moves only; pauses become pause moves.
pub fn to_moves<'a>(alg: impl Into<AlgInput<'a>>) -> Result<AlgOutput, AlgError> {
    ToMoves.apply(alg.into())
}

/// The alg that undoes `alg`.
///
/// ## Errors
///
/// [`AlgError::Unsupported`] if the alg contains a timestamp.
pub fn invert<'a>(alg: impl Into<AlgInput<'a>>) -> Result<AlgOutput, AlgError> {
    Invert.apply(alg.into())
}

/// Reflect across the M slice, swapping R and L.
pub fn mirror_across_m<'a>(alg: impl Into<AlgInput<'a>>) -> Result<AlgOutput, AlgError> {
    Mirror::ACROSS_M.apply(alg.into())
}

/// Reflect across the S slice, swapping F and B.
pub fn mirror_across_s<'a>(alg: impl Into<AlgInput<'a>>) -> Result<AlgOutput, AlgError> {
    Mirror::ACROSS_S.apply(alg.into())
}

/// Count moves under the named metric on a puzzle of `dimension` layers.
///
/// ## Errors
///
/// - [`AlgError::Validation`] for an unknown metric or a zero dimension
/// - [`AlgError::UnknownMove`] for a move that does not fit the puzzle
pub fn count_moves<'a>(alg: impl Into<AlgInput<'a>>, metric: &str, dimension: u32) -> Result<u64, AlgError> {
    MoveCounter::new(metric, dimension)?.evaluate(alg.into())
}
