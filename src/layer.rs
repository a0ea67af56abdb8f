/// Shared size calculators for pooling layers
pub mod helper_functions;
/// Input validation functions for pooling layers
mod input_validation_function;
/// 2D Max Pooling Layer
pub mod max_pooling_2d;

pub use max_pooling_2d::{MaxPooling2D, MaxPositions, PoolWindow};
