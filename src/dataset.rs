use crate::error::{IoError, ModelError};
use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;
use serde_json::from_reader;

use crate::network::layer::vec2_to_array2;

/// On-disk form of a dataset: a JSON object with parallel image and label
/// collections, e.g. `{"x_test": [[0.0, ...], ...], "y_test": [7, ...]}`.
#[derive(Debug, Deserialize)]
struct SerializableDataset {
    x_test: Vec<Vec<f64>>,
    y_test: Vec<usize>,
}

/// A labeled evaluation dataset.
///
/// Holds parallel collections of sample vectors and integer class labels with
/// 1:1 index correspondence, read once at startup and immutable for the
/// duration of an accuracy run.
///
/// # Fields
///
/// - `images` - Sample matrix with shape (n_samples, n_features); row i is sample i
/// - `labels` - Ground-truth class label of each sample
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    images: Array2<f64>,
    labels: Array1<usize>,
}

impl Dataset {
    /// Creates a dataset from parallel image and label collections.
    ///
    /// # Parameters
    ///
    /// - `images` - Sample matrix with shape (n_samples, n_features)
    /// - `labels` - Class label of each sample, same length as the number of rows in `images`
    ///
    /// # Returns
    ///
    /// - `Ok(Dataset)` - The validated dataset
    /// - `Err(ModelError::InputValidationError)` - If the number of images and labels differ
    ///
    /// # Examples
    /// ```rust
    /// use mlp_infer::dataset::Dataset;
    /// use ndarray::array;
    ///
    /// let dataset = Dataset::new(array![[0.0, 1.0], [1.0, 0.0]], array![1, 0]).unwrap();
    /// assert_eq!(dataset.num_samples(), 2);
    /// ```
    pub fn new(images: Array2<f64>, labels: Array1<usize>) -> Result<Self, ModelError> {
        if images.nrows() != labels.len() {
            return Err(ModelError::InputValidationError(format!(
                "Images and labels must have the same length. Images: {}, Labels: {}",
                images.nrows(),
                labels.len()
            )));
        }
        Ok(Self { images, labels })
    }

    /// Loads a dataset from a JSON file holding `x_test` and `y_test`
    /// collections of equal length.
    ///
    /// # Parameters
    ///
    /// - `path` - Path of the JSON file containing the samples
    ///
    /// # Returns
    ///
    /// - `Ok(Dataset)` - The deserialized dataset
    /// - `Err(IoError)` - If the file cannot be read, the JSON does not match
    ///   the schema, the image rows are ragged, or the image and label counts
    ///   differ
    ///
    /// # Examples
    /// ```no_run
    /// use mlp_infer::dataset::Dataset;
    ///
    /// let dataset = Dataset::load_from_path("mnist.json").unwrap();
    /// println!("{} samples", dataset.num_samples());
    /// ```
    pub fn load_from_path(path: &str) -> Result<Self, IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        let raw: SerializableDataset = from_reader(reader).map_err(IoError::JsonError)?;
        let images = vec2_to_array2(&raw.x_test)?;
        let labels = Array1::from_vec(raw.y_test);
        Self::new(images, labels).map_err(|e| IoError::InvalidData(e.to_string()))
    }

    /// Returns the sample matrix, one row per sample
    pub fn images(&self) -> &Array2<f64> {
        &self.images
    }

    /// Returns the ground-truth label of each sample
    pub fn labels(&self) -> &Array1<usize> {
        &self.labels
    }

    /// Returns the number of samples
    pub fn num_samples(&self) -> usize {
        self.images.nrows()
    }

    /// Returns the number of features per sample
    pub fn num_features(&self) -> usize {
        self.images.ncols()
    }

    /// Returns `true` if the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.num_samples() == 0
    }

    /// Returns sample `index` as a vector view
    ///
    /// # Panics
    ///
    /// - Panics if `index` is out of bounds
    pub fn sample(&self, index: usize) -> ArrayView1<'_, f64> {
        self.images.row(index)
    }

    /// Returns the ground-truth label of sample `index`
    ///
    /// # Panics
    ///
    /// - Panics if `index` is out of bounds
    pub fn label(&self, index: usize) -> usize {
        self.labels[index]
    }
}
