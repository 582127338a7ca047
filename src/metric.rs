use crate::dataset::Dataset;
use crate::error::ModelError;
use crate::network::Network;
use ndarray::{ArrayBase, Data, Ix1};
use rayon::prelude::*;

/// Returns the index of the largest element of a score vector.
///
/// The first index wins ties, matching the convention that the lowest class
/// id is preferred when scores are equal.
///
/// # Parameters
///
/// - `scores` - Score vector produced by a forward pass
///
/// # Returns
///
/// - `Option<usize>` - Index of the maximum element, or `None` for an empty vector
///
/// # Examples
/// ```rust
/// use mlp_infer::metric::argmax;
/// use ndarray::array;
///
/// let scores = array![0.1, 0.7, 0.2];
/// assert_eq!(argmax(&scores), Some(1));
/// ```
pub fn argmax<S>(scores: &ArrayBase<S, Ix1>) -> Option<usize>
where
    S: Data<Elem = f64>,
{
    let mut best_index = None;
    let mut best_score = f64::NEG_INFINITY;
    for (index, &score) in scores.iter().enumerate() {
        if best_index.is_none() || score > best_score {
            best_index = Some(index);
            best_score = score;
        }
    }
    best_index
}

/// Calculate the accuracy of a set of class predictions.
///
/// Accuracy is the proportion of correctly predicted samples over all samples.
///
/// # Parameters
///
/// - `predicted` - Predicted class labels
/// - `actual` - Ground-truth class labels
///
/// # Examples
/// ```rust
/// use mlp_infer::metric::accuracy;
/// use ndarray::array;
///
/// let predicted = array![0, 1, 1];
/// let actual = array![0, 0, 1];
/// let acc = accuracy(&predicted, &actual);
/// assert!((acc - 0.6666666666666667).abs() < 1e-6);
/// ```
///
/// # Returns
///
/// - `f64` - Accuracy in the range \[0.0, 1.0\]
///
/// # Panics
///
/// - Panics if the two arrays have different lengths
/// - Panics if input arrays are empty
pub fn accuracy<S>(predicted: &ArrayBase<S, Ix1>, actual: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = usize>,
{
    if predicted.len() != actual.len() {
        panic!(
            "Input arrays must have the same length. Predicted: {}, Actual: {}",
            predicted.len(),
            actual.len()
        );
    }

    if predicted.is_empty() || actual.is_empty() {
        panic!("Input arrays must not be empty");
    }

    let correct_predictions = predicted
        .iter()
        .zip(actual.iter())
        .filter(|&(p, a)| p == a)
        .count();

    correct_predictions as f64 / predicted.len() as f64
}

/// Calculates a network's classification accuracy over a dataset.
///
/// Runs the forward pass on every sample, predicts the class as the argmax of
/// the score vector, and compares it to the ground-truth label. Samples are
/// independent, so they are evaluated in parallel.
///
/// # Parameters
///
/// - `network` - The network to evaluate
/// - `dataset` - Labeled samples to classify
///
/// # Returns
///
/// - `Ok(f64)` - Accuracy as a percentage in the range \[0.0, 100.0\]
/// - `Err(ModelError::InputValidationError)` - If the dataset holds no samples
/// - `Err(ModelError::DimensionMismatch)` - If a sample does not fit the network's first linear layer
///
/// # Examples
/// ```rust
/// use mlp_infer::dataset::Dataset;
/// use mlp_infer::metric::evaluate_accuracy;
/// use mlp_infer::network::{Layer, Network};
/// use ndarray::array;
///
/// // The identity network predicts the index of the largest feature
/// let network = Network::from_layers(vec![Layer::Linear(array![[1.0, 0.0], [0.0, 1.0]])]);
/// let dataset = Dataset::new(array![[9.0, 1.0], [2.0, 5.0]], array![0, 1]).unwrap();
///
/// let acc = evaluate_accuracy(&network, &dataset).unwrap();
/// assert_eq!(acc, 100.0);
/// ```
pub fn evaluate_accuracy(network: &Network, dataset: &Dataset) -> Result<f64, ModelError> {
    if dataset.is_empty() {
        return Err(ModelError::InputValidationError(
            "Dataset must contain at least one sample".to_string(),
        ));
    }

    let correct = (0..dataset.num_samples())
        .into_par_iter()
        .map(|index| {
            let scores = network.forward(&dataset.sample(index))?;
            let predicted = argmax(&scores);
            Ok(usize::from(predicted == Some(dataset.label(index))))
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    Ok(correct as f64 / dataset.num_samples() as f64 * 100.0)
}
