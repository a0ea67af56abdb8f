use super::helper_functions::{calculate_output_shape_2d_pooling, calculate_pooled_extent};
use super::input_validation_function::{
    validate_gradient_batch, validate_plates_non_empty, validate_pool_window,
};
use crate::Plate;
use crate::error::ModelError;
use crate::traits::PlateLayer;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

/// Threshold for deciding between parallel and sequential execution.
/// When the batch contains at least this many plates, use parallel execution.
const MAX_POOLING_2D_PARALLEL_THRESHOLD: usize = 32;

/// Pooling window geometry.
///
/// A validated configuration record; both extents must be strictly positive.
/// [`MaxPooling2D::new`] rejects a zero extent with a message naming the
/// offending dimension.
///
/// # Fields
///
/// - `height` - Window extent along plate rows
/// - `width` - Window extent along plate columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolWindow {
    pub height: usize,
    pub width: usize,
}

/// Positions of the window maxima recorded by a [`MaxPooling2D`] forward
/// pass.
///
/// Returned by `forward` alongside the pooled batch and borrowed by the
/// matching `backward` call, which scatters each incoming gradient value back
/// onto the recorded position. Per plate this stores one flat row-major input
/// index per output window, so its footprint is proportional to the pooled
/// output rather than the input.
pub struct MaxPositions {
    plates: Vec<PlateMaxPositions>,
}

impl MaxPositions {
    /// Returns the number of plates in the forward batch that produced this
    /// state.
    pub fn plate_count(&self) -> usize {
        self.plates.len()
    }

    pub(crate) fn pooled_shape(&self, index: usize) -> (usize, usize) {
        let plate = &self.plates[index];
        (plate.output_rows, plate.output_cols)
    }
}

/// Recorded winners for a single plate.
struct PlateMaxPositions {
    input_rows: usize,
    input_cols: usize,
    output_rows: usize,
    output_cols: usize,
    /// Flat row-major input index of the window maximum, one per output cell.
    argmax: Vec<usize>,
}

/// 2D max pooling layer.
///
/// Selects the maximum value within each pooling window. Windows are
/// non-overlapping and tile each plate from the top-left corner; trailing
/// windows clipped by the plate boundary are reduced over the in-bounds cells
/// only. A plate of shape `(rows, cols)` pools to
/// `(ceil(rows / height), ceil(cols / width))`, and the number of plates in a
/// batch is unchanged.
///
/// The forward pass records, per output window, the position of the first
/// maximum found in row-major scan order (ties resolve to the earliest cell,
/// deterministically). The backward pass routes each upstream gradient value
/// to exactly that position and produces zero everywhere else.
///
/// # Fields
///
/// - `window` - Size of the pooling window as a [`PoolWindow`]
///
/// # Examples
/// ```rust
/// use platepool::layer::{MaxPooling2D, PoolWindow};
/// use platepool::traits::PlateLayer;
/// use ndarray::arr2;
///
/// let pool = MaxPooling2D::new(PoolWindow {
///     height: 2,
///     width: 2,
/// })
/// .unwrap();
///
/// let batch = vec![arr2(&[
///     [1.0, 3.0, 2.0, 9.0],
///     [4.0, 1.0, 0.0, 9.0],
///     [5.0, 2.0, 8.0, 1.0],
///     [0.0, 0.0, 0.0, 0.0],
/// ])];
///
/// let (pooled, positions) = pool.forward(&batch).unwrap();
/// assert_eq!(pooled[0], arr2(&[[4.0, 9.0], [5.0, 8.0]]));
///
/// // Both cells of the top-right window hold 9.0; the gradient flows to
/// // (0, 3), the first of them in scan order.
/// let grad = vec![arr2(&[[10.0, 20.0], [30.0, 40.0]])];
/// let upstream = pool.backward(&grad, &positions, 0.01).unwrap();
/// assert_eq!(
///     upstream[0],
///     arr2(&[
///         [0.0, 0.0, 0.0, 20.0],
///         [10.0, 0.0, 0.0, 0.0],
///         [30.0, 0.0, 40.0, 0.0],
///         [0.0, 0.0, 0.0, 0.0],
///     ])
/// );
/// ```
///
/// # Performance
///
/// Parallel execution is used when the batch contains at least
/// `MAX_POOLING_2D_PARALLEL_THRESHOLD` (32) plates.
#[derive(Debug)]
pub struct MaxPooling2D {
    window: PoolWindow,
}

impl MaxPooling2D {
    /// Creates a new 2D max pooling layer.
    ///
    /// # Parameters
    ///
    /// - `window` - Size of the pooling window
    ///
    /// # Returns
    ///
    /// - `Result<MaxPooling2D, ModelError>` - New layer instance on success
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the window height or width
    ///   is zero
    pub fn new(window: PoolWindow) -> Result<Self, ModelError> {
        validate_pool_window(&window)?;

        Ok(MaxPooling2D { window })
    }

    /// Returns the configured window height
    pub fn window_height(&self) -> usize {
        self.window.height
    }

    /// Returns the configured window width
    pub fn window_width(&self) -> usize {
        self.window.width
    }

    /// Performs max pooling on a single plate.
    ///
    /// # Parameters
    ///
    /// * `plate` - Input plate with at least one row and one column
    ///
    /// # Returns
    ///
    /// * `(Plate, PlateMaxPositions)` - The pooled plate and the recorded
    ///   winner positions for the backward pass
    fn pool_plate(&self, plate: &Plate) -> (Plate, PlateMaxPositions) {
        let (rows, cols) = plate.dim();
        let (output_rows, output_cols) =
            calculate_output_shape_2d_pooling((rows, cols), &self.window);

        let mut output = Plate::zeros((output_rows, output_cols));
        let mut argmax = Vec::with_capacity(output_rows * output_cols);

        for out_i in 0..output_rows {
            let i_start = out_i * self.window.height;
            let i_end = (i_start + self.window.height).min(rows);

            for out_j in 0..output_cols {
                let j_start = out_j * self.window.width;
                let j_end = (j_start + self.window.width).min(cols);

                // Find the maximum in the window; strict comparison keeps the
                // first maximum in row-major scan order on ties
                let mut max_val = f32::NEG_INFINITY;
                let mut max_pos = (i_start, j_start);

                for i in i_start..i_end {
                    for j in j_start..j_end {
                        let val = plate[[i, j]];
                        if val > max_val {
                            max_val = val;
                            max_pos = (i, j);
                        }
                    }
                }

                output[[out_i, out_j]] = max_val;
                argmax.push(max_pos.0 * cols + max_pos.1);
            }
        }

        let positions = PlateMaxPositions {
            input_rows: rows,
            input_cols: cols,
            output_rows,
            output_cols,
            argmax,
        };

        (output, positions)
    }
}

/// Scatters one gradient plate back onto the input shape recorded for it.
///
/// Windows do not overlap, so each input cell receives at most one value;
/// cells that never won a window stay zero.
fn scatter_gradient(grad: &Plate, positions: &PlateMaxPositions) -> Plate {
    let mut upstream = Plate::zeros((positions.input_rows, positions.input_cols));

    for out_i in 0..positions.output_rows {
        for out_j in 0..positions.output_cols {
            let flat = positions.argmax[out_i * positions.output_cols + out_j];
            let in_i = flat / positions.input_cols;
            let in_j = flat % positions.input_cols;
            upstream[[in_i, in_j]] = grad[[out_i, out_j]];
        }
    }

    upstream
}

impl PlateLayer for MaxPooling2D {
    type State = MaxPositions;

    fn output_plate_count(&self, input_plates: usize) -> usize {
        input_plates
    }

    fn output_height(&self, input_height: usize) -> usize {
        calculate_pooled_extent(input_height, self.window.height)
    }

    fn output_width(&self, input_width: usize) -> usize {
        calculate_pooled_extent(input_width, self.window.width)
    }

    fn forward(&self, input: &[Plate]) -> Result<(Vec<Plate>, MaxPositions), ModelError> {
        validate_plates_non_empty(input, "MaxPooling2D")?;

        let results: Vec<(Plate, PlateMaxPositions)> =
            if input.len() >= MAX_POOLING_2D_PARALLEL_THRESHOLD {
                input.par_iter().map(|plate| self.pool_plate(plate)).collect()
            } else {
                input.iter().map(|plate| self.pool_plate(plate)).collect()
            };

        let (output, plates): (Vec<Plate>, Vec<PlateMaxPositions>) =
            results.into_iter().unzip();

        Ok((output, MaxPositions { plates }))
    }

    fn backward(
        &self,
        grad_output: &[Plate],
        state: &MaxPositions,
        _learning_rate: f32,
    ) -> Result<Vec<Plate>, ModelError> {
        validate_gradient_batch(grad_output, state)?;

        let upstream: Vec<Plate> = if grad_output.len() >= MAX_POOLING_2D_PARALLEL_THRESHOLD {
            grad_output
                .par_iter()
                .zip(state.plates.par_iter())
                .map(|(grad, positions)| scatter_gradient(grad, positions))
                .collect()
        } else {
            grad_output
                .iter()
                .zip(state.plates.iter())
                .map(|(grad, positions)| scatter_gradient(grad, positions))
                .collect()
        };

        Ok(upstream)
    }

    fn layer_type(&self) -> &str {
        "MaxPooling2D"
    }

    fn describe(&self) -> String {
        format!(
            "MaxPooling2D (window height: {}, window width: {})",
            self.window.height, self.window.width
        )
    }
}
