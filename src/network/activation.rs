use ndarray::{ArrayBase, Data, Ix1};

use super::Vector;

/// Largest magnitude fed to `exp` before the sigmoid saturates in f64.
const SIGMOID_CLAMP: f64 = 700.0;

/// Activation function enum, supporting ReLU and Sigmoid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    ReLU,
    Sigmoid,
}

impl Activation {
    /// Applies the activation function elementwise to a vector.
    ///
    /// Both functions are total: an empty input produces an empty output and
    /// no input value is an error.
    ///
    /// - `ReLU` maps each element x to `max(0, x)`.
    /// - `Sigmoid` maps each element x to `1 / (1 + e^(-x))`, clamped so that
    ///   x <= -700 yields exactly 0 and x >= 700 yields exactly 1.
    ///
    /// # Parameters
    ///
    /// - `z` - Input vector to apply the activation function to
    ///
    /// # Returns
    ///
    /// * `Vector` - A new vector with the activation function applied
    ///
    /// # Examples
    /// ```rust
    /// use mlp_infer::network::Activation;
    /// use ndarray::array;
    ///
    /// let z = array![-1.0, 0.0, 2.5];
    /// let rectified = Activation::ReLU.apply(&z);
    /// assert_eq!(rectified, array![0.0, 0.0, 2.5]);
    ///
    /// let squashed = Activation::Sigmoid.apply(&array![0.0]);
    /// assert!((squashed[0] - 0.5).abs() < 1e-12);
    /// ```
    pub fn apply<S>(&self, z: &ArrayBase<S, Ix1>) -> Vector
    where
        S: Data<Elem = f64>,
    {
        match self {
            Activation::ReLU => z.mapv(|x| if x > 0.0 { x } else { 0.0 }),
            Activation::Sigmoid => z.mapv(sigmoid),
        }
    }

    /// Returns the display name of the activation function ("relu" or "sigmoid").
    pub fn name(&self) -> &'static str {
        match self {
            Activation::ReLU => "relu",
            Activation::Sigmoid => "sigmoid",
        }
    }
}

/// Logistic sigmoid with saturation outside the range where `exp` is
/// representable in double precision.
fn sigmoid(x: f64) -> f64 {
    if x <= -SIGMOID_CLAMP {
        0.0
    } else if x >= SIGMOID_CLAMP {
        1.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}
