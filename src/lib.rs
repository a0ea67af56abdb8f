use ndarray::Array2;

/// Type alias for the 2D numeric surfaces ("plates") flowing through a
/// plate pipeline.
///
/// A plate is a rows x cols grid of `f32` values. Batches are ordered
/// sequences of plates (`Vec<Plate>` / `&[Plate]`); plates within one batch
/// may have differing dimensions, as long as each has at least one row and
/// one column.
pub type Plate = Array2<f32>;

/// Module `error` contains the error types reported by this crate.
///
/// All fallible operations return [`error::ModelError`], which distinguishes
/// configuration/shape problems detected up front from inconsistencies found
/// while processing. Errors are surfaced synchronously to the caller; nothing
/// in this crate retries or panics on malformed input.
pub mod error;

/// Module `layer` contains the plate-pipeline layer implementations.
///
/// # Core Components
///
/// - **MaxPooling2D**: windowed-maximum reduction over non-overlapping
///   windows, with the backward pass that routes each upstream gradient value
///   back to the exact input cell that produced the forward maximum
/// - **PoolWindow**: validated window-geometry configuration record
/// - **MaxPositions**: per-forward-call state handed from `forward` to the
///   matching `backward` call
///
/// Shared size calculators live in `helper_functions`; parameter and shape
/// validation lives in `input_validation_function`.
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
/// let grad = vec![arr2(&[[10.0, 20.0], [30.0, 40.0]])];
/// let upstream = pool.backward(&grad, &positions, 0.01).unwrap();
/// assert_eq!(upstream[0][[1, 0]], 10.0);
/// assert_eq!(upstream[0][[0, 3]], 20.0);
/// ```
pub mod layer;

/// A convenience module that re-exports the most commonly used types and
/// traits from this crate.
///
/// # Examples
/// ```rust
/// use platepool::prelude::*;
///
/// // Quick access to all commonly used components
/// ```
pub mod prelude;

/// Module `traits` defines the interface shared by plate-pipeline layers.
///
/// The [`traits::PlateLayer`] trait covers size calculation, forward
/// propagation, backward propagation, and layer introspection. The state a
/// forward pass captures for its matching backward pass is an associated
/// type, so the forward-then-backward pairing is checked at compile time and
/// dispatch is static.
pub mod traits;
