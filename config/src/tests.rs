//! # Tests for Config Constants
//!
//! Unit tests verifying the defaults the drawing helpers depend on.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_segment_defaults() {
    assert_eq!(DEFAULT_CIRCLE_SEGMENTS, 64);
    assert_eq!(DEFAULT_BEZIER_SEGMENTS, 90);
}

#[test]
fn test_radius_defaults() {
    assert_eq!(DEFAULT_CIRCLE_RADIUS, 5.0);
    assert_eq!(DEFAULT_SAMPLER_RADIUS, 0.5);
}

#[test]
fn test_default_arc_is_full_circle() {
    assert_eq!(DEFAULT_ARC_START_DEG, 0.0);
    assert_eq!(DEFAULT_ARC_END_DEG, 360.0);
}

#[test]
fn test_default_axis_code_is_a_permutation() {
    let mut chars: Vec<char> = DEFAULT_AXIS_CODE.chars().collect();
    chars.sort_unstable();
    assert_eq!(chars, vec!['X', 'Y', 'Z']);
}

// =============================================================================
// STROKE TESTS
// =============================================================================

#[test]
fn test_line_widths() {
    assert_eq!(DEFAULT_CIRCLE_LINE_WIDTH, 50);
    assert_eq!(DEFAULT_BEZIER_LINE_WIDTH, 10);
}

#[test]
fn test_default_colors_are_opaque() {
    assert_eq!(DEFAULT_FILL_COLOR[3], 1.0);
    assert_eq!(DEFAULT_STROKE_COLOR[3], 1.0);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}
