use std::fs::File;
use std::io::BufReader;

/// Error types that can occur during network evaluation
///
/// # Variants
///
/// - `DimensionMismatch` - a linear layer's weight matrix cannot be applied to the vector it received
/// - `InputValidationError` - indicates the input data provided does not meet the expected format, type, or validation rules
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    DimensionMismatch {
        layer: usize,
        expected: usize,
        actual: usize,
    },
    InputValidationError(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DimensionMismatch {
                layer,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch at layer {}: the weight matrix expects an input of length {}, but received a vector of length {}",
                    layer, expected, actual
                )
            }
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
        }
    }
}

/// Implements the standard error trait for ModelError
impl std::error::Error for ModelError {}

/// Input/Output error types that can occur while loading persisted networks and datasets
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (reading, file access)
/// - `JsonError` - Wraps JSON deserialization errors, including unrecognized layer tags
/// - `InvalidData` - The file deserialized cleanly but describes an inconsistent shape (ragged weight rows, image/label count mismatch)
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
    InvalidData(String),
}

impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
            IoError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for IoError {}
