pub use crate::Plate;
pub use crate::error::ModelError;
pub use crate::layer::{MaxPooling2D, MaxPositions, PoolWindow};
pub use crate::traits::PlateLayer;
