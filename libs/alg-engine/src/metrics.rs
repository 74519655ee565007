//! # Move-Count Metrics
//!
//! Weighted move counts under the common speedcubing metrics.
//!
//! Each metric assigns an `(offset, per quarter turn)` pair to three
//! classes of move, decided from the move's canonical layer range:
//!
//! | Metric  | Rotation | Outer  | Inner  |
//! |---------|----------|--------|--------|
//! | `obtm`  | (0, 0)   | (1, 0) | (2, 0) |
//! | `btm`   | (0, 0)   | (1, 0) | (1, 0) |
//! | `obqtm` | (0, 0)   | (0, 1) | (0, 2) |
//! | `etm`   | (1, 0)   | (1, 0) | (1, 0) |
//!
//! A move of amount `a` costs `offset + |a| * per_quarter_turn`, or nothing
//! if `a` is zero. Composites multiply by `|amount|`: a commutator costs
//! `2A + 2B`, a conjugate `2A + B` and a group `A`.
//!
//! ## Example
//!
//! ```rust
//! use alg_engine::count_moves;
//!
//! assert_eq!(count_moves("R U R' U R U2 R'", "obtm", 3).unwrap(), 7);
//! assert_eq!(count_moves("R U R' U R U2 R'", "obqtm", 3).unwrap(), 8);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::canonicalize::canonicalize_move;
use crate::error::AlgError;
use crate::traverse::{Fold, FoldedGroup, FoldedPair};
use alg_ast::{Base, Move, Node};
use config::constants::{DEFAULT_SINGLE_LAYER, METRIC_NAMES};

// =============================================================================
// METRIC
// =============================================================================

/// A named counting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Outer block turn metric: slices count twice, rotations are free.
    Obtm,
    /// Block turn metric: any block of layers counts once.
    Btm,
    /// Outer block quarter turn metric.
    Obqtm,
    /// Execution turn metric: every move counts once, rotations included.
    Etm,
}

/// Cost of one class of move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar {
    pub offset: u64,
    pub per_quarter_turn: u64,
}

const fn scalar(offset: u64, per_quarter_turn: u64) -> Scalar {
    Scalar {
        offset,
        per_quarter_turn,
    }
}

impl Metric {
    pub const ALL: [Metric; 4] = [Metric::Obtm, Metric::Btm, Metric::Obqtm, Metric::Etm];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Obtm => METRIC_NAMES[0],
            Metric::Btm => METRIC_NAMES[1],
            Metric::Obqtm => METRIC_NAMES[2],
            Metric::Etm => METRIC_NAMES[3],
        }
    }

    /// Cost of a move of the given class.
    pub fn scalar(self, class: MoveClass) -> Scalar {
        match (self, class) {
            (Metric::Obtm, MoveClass::Rotation) => scalar(0, 0),
            (Metric::Obtm, MoveClass::Outer) => scalar(1, 0),
            (Metric::Obtm, MoveClass::Inner) => scalar(2, 0),
            (Metric::Btm, MoveClass::Rotation) => scalar(0, 0),
            (Metric::Btm, _) => scalar(1, 0),
            (Metric::Obqtm, MoveClass::Rotation) => scalar(0, 0),
            (Metric::Obqtm, MoveClass::Outer) => scalar(0, 1),
            (Metric::Obqtm, MoveClass::Inner) => scalar(0, 2),
            (Metric::Etm, _) => scalar(1, 0),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = AlgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == s)
            .ok_or_else(|| {
                AlgError::validation(format!(
                    "unknown metric '{}', expected one of: {}",
                    s,
                    METRIC_NAMES.join(", ")
                ))
            })
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// How much of the puzzle a move turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    /// Every layer: a whole-puzzle rotation.
    Rotation,
    /// A block touching the first or last layer.
    Outer,
    /// A block strictly inside the puzzle.
    Inner,
}

/// Classify a canonical move on a puzzle of `dimension` layers.
///
/// ## Errors
///
/// [`AlgError::UnknownMove`] if the range is empty or lies outside the
/// puzzle, as happens for a slice on a puzzle with fewer than three layers.
pub fn classify(mv: &Move, dimension: u32) -> Result<MoveClass, AlgError> {
    let start = mv.start_layer.unwrap_or(DEFAULT_SINGLE_LAYER);
    let end = mv.end_layer.unwrap_or(DEFAULT_SINGLE_LAYER);

    let class = if start == 1 && end == dimension {
        MoveClass::Rotation
    } else if start == 1 || end == dimension {
        MoveClass::Outer
    } else if 1 < start && start <= end && end < dimension {
        MoveClass::Inner
    } else {
        return Err(AlgError::UnknownMove {
            base: mv.base,
            start_layer: start,
            end_layer: end,
            dimension,
        });
    };
    tracing::debug!(base = %mv.base, start, end, ?class, "Classified move");
    Ok(class)
}

// =============================================================================
// COUNTER
// =============================================================================

/// Counts the moves of an alg under one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCounter {
    pub metric: Metric,
    pub dimension: u32,
}

impl MoveCounter {
    /// Configure a counter from a metric name.
    pub fn new(metric: &str, dimension: u32) -> Result<Self, AlgError> {
        Ok(Self {
            metric: metric.parse()?,
            dimension,
        })
    }

    /// Cost of one move, canonicalizing it first.
    pub fn move_cost(&self, mv: &Move) -> Result<u64, AlgError> {
        if mv.amount == 0 || mv.base == Base::Pause {
            return Ok(0);
        }
        let canonical = canonicalize_move(mv, self.dimension);
        let Scalar {
            offset,
            per_quarter_turn,
        } = self.metric.scalar(classify(&canonical, self.dimension)?);
        let quarter_turns = u64::from(canonical.amount.unsigned_abs());
        Ok(offset.saturating_add(quarter_turns.saturating_mul(per_quarter_turn)))
    }
}

fn times(cost: u64, amount: i32) -> u64 {
    cost.saturating_mul(u64::from(amount.unsigned_abs()))
}

impl Fold for MoveCounter {
    type Output = u64;

    fn validate(&self, _alg: &[Node]) -> Result<(), AlgError> {
        if self.dimension == 0 {
            return Err(AlgError::validation("dimension must be a positive integer"));
        }
        Ok(())
    }

    fn combine(&self, values: Vec<u64>) -> Result<u64, AlgError> {
        Ok(values.into_iter().fold(0, u64::saturating_add))
    }

    fn fold_move(&self, mv: &Move) -> Result<u64, AlgError> {
        self.move_cost(mv)
    }

    fn fold_commutator(&self, parts: FoldedPair<u64>) -> Result<u64, AlgError> {
        let unit = parts.a.saturating_add(parts.b).saturating_mul(2);
        Ok(times(unit, parts.amount))
    }

    fn fold_conjugate(&self, parts: FoldedPair<u64>) -> Result<u64, AlgError> {
        let unit = parts.a.saturating_mul(2).saturating_add(parts.b);
        Ok(times(unit, parts.amount))
    }

    fn fold_group(&self, parts: FoldedGroup<u64>) -> Result<u64, AlgError> {
        Ok(times(parts.a, parts.amount))
    }

    fn fold_leaf(&self, _node: &Node) -> Result<u64, AlgError> {
        Ok(0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
