/// Module `error` contains the error types surfaced by this crate.
///
/// `ModelError` covers evaluation-time failures (a weight matrix applied to a
/// vector of the wrong length, invalid collaborator input); `IoError` covers
/// failures while loading persisted networks and datasets from disk.
pub mod error;

/// Module `network` contains the network representation and the forward-pass
/// evaluator.
///
/// A network is an ordered list of layers, each either an elementwise
/// activation (`relu`, `sigmoid`) or a bias-free linear transform holding a
/// weight matrix. The forward pass threads a sample vector through the layers
/// in order and produces the final score vector; the argmax of that vector is
/// the predicted class.
///
/// # Example
/// ```rust
/// use mlp_infer::network::{Activation, Layer, Network};
/// use ndarray::array;
///
/// let mut network = Network::new();
/// network
///     .add(Layer::Linear(array![[1.0, 1.0]]))
///     .add(Layer::Activation(Activation::ReLU));
///
/// let scores = network.forward(&array![2.0, -5.0]).unwrap();
/// assert_eq!(scores, array![0.0]);
/// ```
pub mod network;

/// Module `dataset` provides the labeled evaluation dataset and its loader.
///
/// A dataset is a pair of parallel collections with 1:1 index correspondence:
/// a sample matrix (one flattened image per row) and the ground-truth class
/// label of each sample. Datasets are read once from a JSON file at startup
/// and are immutable for the duration of an accuracy run.
pub mod dataset;

/// Module `metric` contains classification metrics and the accuracy driver.
///
/// - `argmax` - index of the largest score, i.e. the predicted class
/// - `accuracy` - proportion of matching labels between two label arrays
/// - `evaluate_accuracy` - runs a network over a whole dataset in parallel
///   and reports the percentage of correctly classified samples
///
/// # Example
/// ```rust
/// use mlp_infer::metric::argmax;
/// use ndarray::array;
///
/// let scores = array![0.1, 2.4, -0.3];
/// assert_eq!(argmax(&scores), Some(1));
/// ```
pub mod metric;

/// Module `utility` contains display helpers for inspecting samples.
pub mod utility;

/// A convenience module that re-exports the most commonly used types and
/// functions from this crate.
///
/// # Examples
/// ```rust
/// use mlp_infer::prelude::*;
///
/// // Quick access to Network, Layer, Dataset, metrics and display helpers
/// ```
pub mod prelude;

pub use error::{IoError, ModelError};
