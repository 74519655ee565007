//! # Tests for Config Constants
//!
//! Unit tests verifying the consistency of configuration constants.

use crate::constants::*;

// =============================================================================
// NOTATION TESTS
// =============================================================================

#[test]
fn test_quarter_turns_form_a_revolution() {
    assert_eq!(QUARTER_TURNS_PER_REVOLUTION, 4);
}

#[test]
fn test_notation_characters_are_distinct() {
    let chars = [
        INVERSE_MARK,
        TIMESTAMP_PREFIX,
        TIMESTAMP_SUFFIX,
        LAYER_RANGE_SEPARATOR,
    ];
    for (i, a) in chars.iter().enumerate() {
        for b in &chars[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(PAUSE_SYMBOL.len(), 1);
}

// =============================================================================
// LAYER TESTS
// =============================================================================

#[test]
fn test_wide_moves_cover_more_than_one_layer() {
    assert!(DEFAULT_WIDE_END_LAYER > DEFAULT_SINGLE_LAYER);
}

#[test]
fn test_slices_skip_outer_layer() {
    assert_eq!(SLICE_START_LAYER, DEFAULT_SINGLE_LAYER + 1);
}

// =============================================================================
// METRIC TESTS
// =============================================================================

#[test]
fn test_metric_names_are_lowercase_and_unique() {
    for (i, name) in METRIC_NAMES.iter().enumerate() {
        assert_eq!(name.to_lowercase(), *name);
        assert!(!METRIC_NAMES[i + 1..].contains(name));
    }
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stack_segment_larger_than_red_zone() {
    assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
}
