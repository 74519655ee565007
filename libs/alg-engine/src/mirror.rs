//! # Mirror Transforms
//!
//! Reflections of an alg across the plane of the M slice (swapping the R
//! and L faces) or of the S slice (swapping F and B).
//!
//! Each reflection reverses the direction of every turn. Symbols in the
//! table's fixed set keep their base; single and wide symbols on one of the
//! swapped faces move to the other face; everything else keeps its base.
//! Pause moves carry no direction and are left alone.

use crate::error::AlgError;
use crate::traverse::Transform;
use alg_ast::{Axis, Base, Face, Move, Sequence, Slice};

/// A reflection: the symbols it fixes and the pair of faces it swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorTable {
    pub fixed: &'static [Base],
    pub swap: (Face, Face),
}

/// Reflection across the M slice.
pub const MIRROR_M: MirrorTable = MirrorTable {
    fixed: &[Base::Rotation(Axis::X), Base::Slice(Slice::M), Base::Slice(Slice::N)],
    swap: (Face::R, Face::L),
};

/// Reflection across the S slice.
pub const MIRROR_S: MirrorTable = MirrorTable {
    fixed: &[Base::Rotation(Axis::Z), Base::Slice(Slice::S)],
    swap: (Face::F, Face::B),
};

impl MirrorTable {
    /// Counterpart of a symbol under this reflection.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use alg_ast::Base;
    /// use alg_engine::mirror::MIRROR_M;
    ///
    /// let rw: Base = "Rw".parse().unwrap();
    /// assert_eq!(MIRROR_M.counterpart(rw).to_string(), "Lw");
    /// assert_eq!(MIRROR_M.counterpart("U".parse().unwrap()).to_string(), "U");
    /// ```
    pub fn counterpart(&self, base: Base) -> Base {
        if self.fixed.contains(&base) {
            return base;
        }
        let (a, b) = self.swap;
        match base {
            Base::Single(face) | Base::Wide(face, _) if face == a => base.with_face(b),
            Base::Single(face) | Base::Wide(face, _) if face == b => base.with_face(a),
            other => other,
        }
    }

    fn reflect(&self, mv: &Move) -> Move {
        let mut out = mv.clone();
        if mv.base != Base::Pause {
            out.base = self.counterpart(mv.base);
            out.amount = mv.amount.saturating_neg();
        }
        out
    }
}

/// A mirror pass over one reflection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mirror {
    table: &'static MirrorTable,
}

impl Mirror {
    pub const ACROSS_M: Mirror = Mirror { table: &MIRROR_M };
    pub const ACROSS_S: Mirror = Mirror { table: &MIRROR_S };

    pub fn table(&self) -> &'static MirrorTable {
        self.table
    }
}

impl Transform for Mirror {
    fn transform_move(&self, mv: &Move) -> Result<Sequence, AlgError> {
        Ok(vec![self.table.reflect(mv).into()])
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror_m(source: &str) -> String {
        Mirror::ACROSS_M.apply_text(source).unwrap()
    }

    fn mirror_s(source: &str) -> String {
        Mirror::ACROSS_S.apply_text(source).unwrap()
    }

    #[test]
    fn test_mirror_m_swaps_right_and_left() {
        assert_eq!(mirror_m("R U R' U'"), "L' U' L U");
        assert_eq!(mirror_m("Rw2 r' 3Lw"), "Lw2' l 3Rw'");
    }

    #[test]
    fn test_mirror_m_fixed_symbols_reverse_direction() {
        assert_eq!(mirror_m("x M' N2"), "x' M N2'");
        assert_eq!(mirror_m("y E S"), "y' E' S'");
    }

    #[test]
    fn test_mirror_s_swaps_front_and_back() {
        assert_eq!(mirror_s("F B' Fw b"), "B' F Bw' f'");
        assert_eq!(mirror_s("z S R"), "z' S' R'");
    }

    #[test]
    fn test_mirror_recurses_into_composites() {
        assert_eq!(mirror_m("[R, U] [L: F]2 (R)'"), "[L', U'] [R': F']2 (L')'");
    }

    #[test]
    fn test_layers_are_kept() {
        assert_eq!(mirror_m("2R 2-3Rw"), "2L' 2-3Lw'");
    }

    #[test]
    fn test_pause_moves_are_unchanged() {
        let tick = Move::new(Base::Pause, 1);
        assert_eq!(Mirror::ACROSS_S.table().reflect(&tick), tick);
        assert_eq!(mirror_m("R . L"), "L' . R'");
    }
}
