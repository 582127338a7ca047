use crate::error::{IoError, ModelError};
use ndarray::{ArrayBase, Data, Ix1};
use serde_json::from_reader;

use super::layer::SerializableLayer;
use super::{Layer, Vector};

/// A feedforward neural network for inference.
///
/// A network is an ordered list of [`Layer`] values applied first-to-last.
/// It owns its layers exclusively; layers own their weight matrices. The
/// network is immutable once constructed: there is no training or parameter
/// update path, only the forward pass.
///
/// # Example
/// ```rust
/// use mlp_infer::network::{Activation, Layer, Network};
/// use ndarray::array;
///
/// // A 2->1 linear transform followed by a rectifier
/// let mut network = Network::new();
/// network
///     .add(Layer::Linear(array![[1.0, 1.0]]))
///     .add(Layer::Activation(Activation::ReLU));
///
/// let scores = network.forward(&array![2.0, -5.0]).unwrap();
/// assert_eq!(scores, array![0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// Creates a new empty network
    ///
    /// # Returns
    ///
    /// * `Network` - a network with no layers; its forward pass is the identity
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Creates a network from an already-ordered list of layers
    pub fn from_layers(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Appends a layer to the network
    ///
    /// Supports method chaining pattern
    ///
    /// # Parameters
    ///
    /// * `layer` - The layer to append
    ///
    /// # Returns
    ///
    /// * `&mut Network` - Mutable reference to self for method chaining
    pub fn add(&mut self, layer: Layer) -> &mut Self {
        self.layers.push(layer);
        self
    }

    /// Returns the layers in application order
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the number of layers in the network
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns `true` if the network has no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Runs the forward pass: threads an input vector through every layer in
    /// order and returns the final output vector.
    ///
    /// Activation layers replace the current vector with the activation
    /// applied elementwise. Linear layers replace it with the matrix-vector
    /// product, so the vector length becomes the layer's output dimension.
    /// An empty network returns the input unchanged.
    ///
    /// The result is the raw score vector of the final layer, one entry per
    /// output class; it is not normalized into probabilities. The index of
    /// its maximum element is the predicted class.
    ///
    /// # Parameters
    ///
    /// - `input` - The sample vector to classify
    ///
    /// # Returns
    ///
    /// - `Ok(Vector)` - The final-layer output vector
    /// - `Err(ModelError::DimensionMismatch)` - If a linear layer's weight
    ///   rows do not match the length of the vector it received; the error
    ///   identifies the offending layer index and the expected vs actual
    ///   dimension. The pass fails fast rather than truncating or padding.
    ///
    /// # Examples
    /// ```rust
    /// use mlp_infer::network::{Layer, Network};
    /// use ndarray::array;
    ///
    /// // The identity weight matrix leaves the sample untouched
    /// let network = Network::from_layers(vec![Layer::Linear(array![[1.0, 0.0], [0.0, 1.0]])]);
    /// let scores = network.forward(&array![3.0, -2.0]).unwrap();
    /// assert_eq!(scores, array![3.0, -2.0]);
    /// ```
    pub fn forward<S>(&self, input: &ArrayBase<S, Ix1>) -> Result<Vector, ModelError>
    where
        S: Data<Elem = f64>,
    {
        let mut current = input.to_owned();
        for (index, layer) in self.layers.iter().enumerate() {
            current = match layer {
                Layer::Activation(activation) => activation.apply(&current),
                Layer::Linear(weights) => {
                    if weights.ncols() != current.len() {
                        return Err(ModelError::DimensionMismatch {
                            layer: index,
                            expected: weights.ncols(),
                            actual: current.len(),
                        });
                    }
                    weights.dot(&current)
                }
            };
        }
        Ok(current)
    }

    /// Formats every layer for display, in application order.
    ///
    /// Activation layers appear by name, linear layers as `linear: in->out`.
    pub fn describe_layers(&self) -> Vec<String> {
        self.layers.iter().map(Layer::describe).collect()
    }

    /// Prints a summary of the network's structure
    ///
    /// Displays each layer's kind and, for linear layers, its dimensions
    pub fn summary(&self) {
        println!("Network: {} layers", self.layers.len());
        for (index, description) in self.describe_layers().iter().enumerate() {
            println!("  ({}) {}", index, description);
        }
    }

    /// Loads a network from a JSON file.
    ///
    /// The file holds the ordered layer list: an activation layer is the bare
    /// string `"relu"` or `"sigmoid"`, a linear layer is an object
    /// `{"linear": [[...], ...]}`. For example:
    ///
    /// ```json
    /// [{"linear": [[1.0, 1.0]]}, "relu"]
    /// ```
    ///
    /// Layer tags are matched exactly. A file containing any other tag fails
    /// with `IoError::JsonError` and no partial network is produced.
    ///
    /// # Parameters
    ///
    /// - `path` - Path of the JSON file containing the layer list
    ///
    /// # Returns
    ///
    /// - `Ok(Network)` - The deserialized network
    /// - `Err(IoError)` - If the file cannot be read, the JSON does not match
    ///   the layer schema, or a weight matrix has ragged rows
    ///
    /// # Examples
    /// ```no_run
    /// use mlp_infer::network::Network;
    ///
    /// let network = Network::load_from_path("network_3layer.json").unwrap();
    /// network.summary();
    /// ```
    pub fn load_from_path(path: &str) -> Result<Self, IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        let layers: Vec<SerializableLayer> = from_reader(reader).map_err(IoError::JsonError)?;
        let layers = layers
            .into_iter()
            .map(SerializableLayer::into_layer)
            .collect::<Result<Vec<Layer>, IoError>>()?;
        Ok(Self { layers })
    }
}

impl FromIterator<Layer> for Network {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self {
            layers: iter.into_iter().collect(),
        }
    }
}
