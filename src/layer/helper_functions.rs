use super::max_pooling_2d::PoolWindow;

/// Calculates the pooled extent along one dimension.
///
/// Windows are non-overlapping and tile the input from index zero; a trailing
/// window smaller than `window_extent` still produces an output cell, so the
/// result is `input_extent / window_extent` rounded up.
///
/// # Parameters
///
/// - `input_extent` - Input size along the dimension (rows or columns)
/// - `window_extent` - Window size along the same dimension
///
/// # Returns
///
/// * `usize` - The number of windows placed along the dimension
pub fn calculate_pooled_extent(input_extent: usize, window_extent: usize) -> usize {
    let mut output_extent = input_extent / window_extent;
    if input_extent % window_extent > 0 {
        output_extent += 1;
    }
    output_extent
}

/// Calculates the output shape of a 2D pooling layer.
///
/// # Parameters
///
/// * `input_shape` - Shape of the input plate as (rows, cols)
/// * `window` - Size of the pooling window
///
/// # Returns
///
/// * `(usize, usize)` - The pooled shape as (output_rows, output_cols)
pub fn calculate_output_shape_2d_pooling(
    input_shape: (usize, usize),
    window: &PoolWindow,
) -> (usize, usize) {
    (
        calculate_pooled_extent(input_shape.0, window.height),
        calculate_pooled_extent(input_shape.1, window.width),
    )
}
