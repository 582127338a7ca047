/// Module that contains activation function implementations
pub mod activation;
/// Module that contains the layer sum type and its serialized form
pub mod layer;
/// Module that contains the network representation and the forward-pass evaluator
pub mod model;

pub use activation::*;
pub use layer::Layer;
pub use model::*;

use ndarray::Array1;

/// Type alias for the one-dimensional f64 arrays threaded through the network
pub type Vector = Array1<f64>;
