use crate::error::IoError;
use ndarray::Array2;
use serde::Deserialize;

use super::Activation;

/// A single stage of a feedforward network.
///
/// A layer is either an elementwise activation (tag only, no data) or a
/// bias-free linear transform carrying its weight matrix. The enum is closed:
/// a layer kind the evaluator does not know how to apply cannot be
/// represented in memory, so dispatch never needs a fallback arm.
///
/// # Variants
///
/// - `Activation` - Elementwise nonlinearity identified by its [`Activation`] kind
/// - `Linear` - Weight matrix with shape (output_dim, input_dim); row i holds the weights of output neuron i
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Activation(Activation),
    Linear(Array2<f64>),
}

impl Layer {
    /// Returns the input dimension a linear layer expects, or `None` for
    /// activation layers (they accept any length).
    pub fn input_dim(&self) -> Option<usize> {
        match self {
            Layer::Activation(_) => None,
            Layer::Linear(weights) => Some(weights.ncols()),
        }
    }

    /// Returns the output dimension a linear layer produces, or `None` for
    /// activation layers (they preserve length).
    pub fn output_dim(&self) -> Option<usize> {
        match self {
            Layer::Activation(_) => None,
            Layer::Linear(weights) => Some(weights.nrows()),
        }
    }

    /// Formats the layer for summaries: the activation name, or
    /// `linear: in->out` for a linear layer.
    pub fn describe(&self) -> String {
        match self {
            Layer::Activation(activation) => activation.name().to_string(),
            Layer::Linear(weights) => {
                format!("linear: {}->{}", weights.ncols(), weights.nrows())
            }
        }
    }
}

/// Serializable representation of a layer.
///
/// This is the on-disk form of [`Layer`]: an activation layer is the bare
/// string `"relu"` or `"sigmoid"`, a linear layer is an object
/// `{"linear": [[...], ...]}` whose rows are the per-output-neuron weight
/// rows. Tags are matched exactly; any other tag fails deserialization, so an
/// unrecognized layer kind is rejected at the loading boundary instead of
/// being skipped at evaluation time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SerializableLayer {
    Relu,
    Sigmoid,
    Linear(Vec<Vec<f64>>),
}

impl SerializableLayer {
    pub(crate) fn into_layer(self) -> Result<Layer, IoError> {
        match self {
            SerializableLayer::Relu => Ok(Layer::Activation(Activation::ReLU)),
            SerializableLayer::Sigmoid => Ok(Layer::Activation(Activation::Sigmoid)),
            SerializableLayer::Linear(rows) => Ok(Layer::Linear(vec2_to_array2(&rows)?)),
        }
    }
}

pub(crate) fn vec2_to_array2(vec: &[Vec<f64>]) -> Result<Array2<f64>, IoError> {
    let rows = vec.len();
    let cols = if rows > 0 { vec[0].len() } else { 0 };
    for (index, row) in vec.iter().enumerate() {
        if row.len() != cols {
            return Err(IoError::InvalidData(format!(
                "Rows must all have the same length: row 0 has {} elements, row {} has {}",
                cols,
                index,
                row.len()
            )));
        }
    }
    let flat: Vec<f64> = vec.iter().flat_map(|row| row.iter().cloned()).collect();
    Array2::from_shape_vec((rows, cols), flat).map_err(|e| IoError::InvalidData(e.to_string()))
}
