/// Error types that can occur during layer operations
///
/// # Variants
///
/// - `InputValidationError` - indicates the configuration or input data provided does not meet the expected format, shape, or validation rules
/// - `ProcessingError` - indicates that there is something wrong while processing
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InputValidationError(String),
    ProcessingError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}
