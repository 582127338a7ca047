use mlp_infer::error::IoError;
use mlp_infer::network::{Activation, Layer, Network};
use ndarray::array;
use std::fs;
use std::path::PathBuf;

/// Writes `contents` to a unique file under the system temp directory and
/// returns its path.
fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mlp_infer_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_network_from_json() {
    let path = write_temp_file(
        "network.json",
        r#"[{"linear": [[1.0, 1.0]]}, "relu", {"linear": [[2.0]]}, "sigmoid"]"#,
    );

    let network = Network::load_from_path(path.to_str().unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(network.len(), 4);
    assert_eq!(
        network.layers()[0],
        Layer::Linear(array![[1.0, 1.0]])
    );
    assert_eq!(network.layers()[1], Layer::Activation(Activation::ReLU));
    assert_eq!(network.layers()[3], Layer::Activation(Activation::Sigmoid));
}

#[test]
fn test_loaded_network_reproduces_forward_pass() {
    let path = write_temp_file(
        "network_forward.json",
        r#"[{"linear": [[1.0, 1.0]]}, "relu"]"#,
    );

    let network = Network::load_from_path(path.to_str().unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    // [2, -5] -> [-3] -> [0]
    let output = network.forward(&array![2.0, -5.0]).unwrap();
    assert_eq!(output, array![0.0]);
}

#[test]
fn test_load_empty_network() {
    let path = write_temp_file("network_empty.json", "[]");

    let network = Network::load_from_path(path.to_str().unwrap()).unwrap();
    fs::remove_file(&path).unwrap();

    assert!(network.is_empty());
}

#[test]
fn test_unrecognized_layer_tag_is_rejected() {
    // Layer tags are matched exactly; anything else fails deserialization
    // instead of being silently skipped
    let path = write_temp_file("network_tanh.json", r#"["relu", "tanh"]"#);

    let err = Network::load_from_path(path.to_str().unwrap()).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, IoError::JsonError(_)));
}

#[test]
fn test_annotated_tag_is_rejected() {
    // "relu_1" contains "relu" but is not an exact tag match
    let path = write_temp_file("network_annotated.json", r#"["relu_1"]"#);

    let err = Network::load_from_path(path.to_str().unwrap()).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, IoError::JsonError(_)));
}

#[test]
fn test_ragged_weight_matrix_is_rejected() {
    let path = write_temp_file(
        "network_ragged.json",
        r#"[{"linear": [[1.0, 2.0], [3.0]]}]"#,
    );

    let err = Network::load_from_path(path.to_str().unwrap()).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, IoError::InvalidData(_)));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = Network::load_from_path("/nonexistent/network.json").unwrap_err();
    assert!(matches!(err, IoError::StdIoError(_)));
}
