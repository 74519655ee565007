//! Clears source locations, so trees parsed from differently spaced text
//! compare equal.

use crate::error::AlgError;
use crate::traverse::Transform;
use alg_ast::{Move, Node, Pause, Sequence};

#[derive(Debug, Clone, Copy, Default)]
pub struct ForgetLocations;

impl Transform for ForgetLocations {
    fn transform_move(&self, mv: &Move) -> Result<Sequence, AlgError> {
        let mut mv = mv.clone();
        mv.location = None;
        Ok(vec![mv.into()])
    }

    fn transform_pause(&self, _pause: &Pause) -> Result<Sequence, AlgError> {
        Ok(vec![Node::pause()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_no_longer_matters() {
        let tight = alg_parser::parse("R . (.)").unwrap();
        let loose = alg_parser::parse("R  .  ( . )").unwrap();
        assert_ne!(tight, loose);
        assert_eq!(
            ForgetLocations.apply_tree(&tight).unwrap(),
            ForgetLocations.apply_tree(&loose).unwrap()
        );
    }
}
