use super::*;
use crate::layer::helper_functions::{calculate_output_shape_2d_pooling, calculate_pooled_extent};

#[test]
fn pooled_extent_rounds_up() {
    // Exact multiple: every window is full
    assert_eq!(calculate_pooled_extent(4, 2), 2);
    // Nonzero remainder adds one trailing partial window
    assert_eq!(calculate_pooled_extent(5, 2), 3);
    // Window larger than the input still produces one window
    assert_eq!(calculate_pooled_extent(1, 3), 1);
    // Window of one never changes the extent
    assert_eq!(calculate_pooled_extent(7, 1), 7);
}

#[test]
fn output_shape_follows_both_extents_independently() {
    let window = PoolWindow {
        height: 2,
        width: 3,
    };

    assert_eq!(calculate_output_shape_2d_pooling((4, 6), &window), (2, 2));
    assert_eq!(calculate_output_shape_2d_pooling((5, 7), &window), (3, 3));
    assert_eq!(calculate_output_shape_2d_pooling((1, 1), &window), (1, 1));
}
