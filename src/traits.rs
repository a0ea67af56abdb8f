use crate::Plate;
use crate::error::ModelError;

/// Defines the interface for plate-pipeline layers.
///
/// This trait provides the core functionality that all plate layers must
/// implement: output-size calculation, forward propagation, and backward
/// propagation, plus an introspection surface for diagnostics.
///
/// The state a forward pass captures for backpropagation is the associated
/// [`State`](PlateLayer::State) type. `forward` returns it alongside the
/// output batch and `backward` borrows it, so a backward call can only be
/// made with state produced by an earlier forward call, and layers stay
/// immutable after construction.
pub trait PlateLayer {
    /// State captured by a forward pass and consumed by the matching
    /// backward pass.
    type State;

    /// Calculates the number of plates produced for a batch of `input_plates`.
    ///
    /// # Parameters
    ///
    /// - `input_plates` - Number of plates in the input batch
    ///
    /// # Returns
    ///
    /// - `usize` - The number of plates in the output batch
    fn output_plate_count(&self, input_plates: usize) -> usize;

    /// Calculates the output height for a plate of `input_height` rows.
    ///
    /// # Parameters
    ///
    /// - `input_height` - Number of rows in the input plate
    ///
    /// # Returns
    ///
    /// - `usize` - Number of rows in the corresponding output plate
    fn output_height(&self, input_height: usize) -> usize;

    /// Calculates the output width for a plate of `input_width` columns.
    ///
    /// # Parameters
    ///
    /// - `input_width` - Number of columns in the input plate
    ///
    /// # Returns
    ///
    /// - `usize` - Number of columns in the corresponding output plate
    fn output_width(&self, input_width: usize) -> usize;

    /// Performs forward propagation through the layer.
    ///
    /// # Parameters
    ///
    /// - `input` - The ordered batch of input plates
    ///
    /// # Returns
    ///
    /// - `Ok((Vec<Plate>, Self::State))` - The output batch together with the
    ///   state the matching backward call needs
    /// - `Err(ModelError)` - If the input batch fails validation
    fn forward(&self, input: &[Plate]) -> Result<(Vec<Plate>, Self::State), ModelError>;

    /// Performs backward propagation through the layer.
    ///
    /// # Parameters
    ///
    /// - `grad_output` - The gradient batch from the next layer, shaped like
    ///   the output of the forward call that produced `state`
    /// - `state` - State returned by the matching forward call
    /// - `learning_rate` - Learning rate for parameter updates; ignored by
    ///   layers without trainable parameters
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Plate>)` - The gradient batch to be passed to the previous
    ///   layer, shaped like the forward call's input
    /// - `Err(ModelError)` - If the gradient batch does not match `state`
    fn backward(
        &self,
        grad_output: &[Plate],
        state: &Self::State,
        learning_rate: f32,
    ) -> Result<Vec<Plate>, ModelError>;

    /// Returns the type name of the layer (e.g. "MaxPooling2D").
    ///
    /// # Returns
    ///
    /// - `&str` - A string slice representing the layer type
    fn layer_type(&self) -> &str {
        "Unknown"
    }

    /// Returns a human-readable description of the layer configuration.
    ///
    /// For diagnostics only, no parsing contract.
    ///
    /// # Returns
    ///
    /// - `String` - A string describing the layer and its parameters
    fn describe(&self) -> String {
        self.layer_type().to_string()
    }

    /// Returns the total number of trainable parameters in the layer.
    ///
    /// # Returns
    ///
    /// - `usize` - The count of parameters
    fn param_count(&self) -> usize {
        0
    }
}
