use super::max_pooling_2d::{MaxPositions, PoolWindow};
use crate::Plate;
use crate::error::ModelError;

/// Validates that both window dimensions are strictly positive.
///
/// # Errors
///
/// Returns `ModelError::InputValidationError` naming the offending dimension
/// if the window height or width is zero.
pub fn validate_pool_window(window: &PoolWindow) -> Result<(), ModelError> {
    if window.height == 0 {
        return Err(ModelError::InputValidationError(
            "Window height must be greater than zero".to_string(),
        ));
    }
    if window.width == 0 {
        return Err(ModelError::InputValidationError(
            "Window width must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Validates that every plate in the batch has at least one row and one column.
///
/// # Errors
///
/// Returns `ModelError::InputValidationError` if any plate has a zero extent.
pub fn validate_plates_non_empty(input: &[Plate], layer_name: &str) -> Result<(), ModelError> {
    for (index, plate) in input.iter().enumerate() {
        let (rows, cols) = plate.dim();
        if rows == 0 || cols == 0 {
            return Err(ModelError::InputValidationError(format!(
                "Plate {} has shape ({}, {}); every plate passed to {} must have at least one row and one column",
                index, rows, cols, layer_name
            )));
        }
    }
    Ok(())
}

/// Validates a gradient batch against the state recorded by a forward pass.
///
/// The batch must contain one gradient plate per forward plate, each shaped
/// exactly like the pooled output of that plate.
///
/// # Errors
///
/// Returns `ModelError::InputValidationError` if the batch size or any plate
/// shape does not match the recorded state.
pub fn validate_gradient_batch(
    grad_output: &[Plate],
    state: &MaxPositions,
) -> Result<(), ModelError> {
    if grad_output.len() != state.plate_count() {
        return Err(ModelError::InputValidationError(format!(
            "Gradient batch contains {} plates but the forward pass recorded {}",
            grad_output.len(),
            state.plate_count()
        )));
    }

    for (index, grad) in grad_output.iter().enumerate() {
        let expected = state.pooled_shape(index);
        if grad.dim() != expected {
            return Err(ModelError::InputValidationError(format!(
                "Gradient plate {} has shape {:?} but the forward pass produced {:?}",
                index,
                grad.dim(),
                expected
            )));
        }
    }

    Ok(())
}
