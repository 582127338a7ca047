pub use crate::dataset::Dataset;
pub use crate::error::{IoError, ModelError};
pub use crate::metric::{accuracy, argmax, evaluate_accuracy};
pub use crate::network::{Activation, Layer, Network, Vector};
pub use crate::utility::{display_image, render_image};
