use approx::assert_abs_diff_eq;
use mlp_infer::network::Activation;
use ndarray::{Array1, array};

#[test]
fn test_relu_clamps_negative_elements() {
    let z = array![-3.0, -0.5, 0.0, 0.5, 3.0];
    let result = Activation::ReLU.apply(&z);

    // Every element must equal max(0, x)
    for (input, output) in z.iter().zip(result.iter()) {
        assert_eq!(*output, input.max(0.0));
    }
    assert_eq!(result, array![0.0, 0.0, 0.0, 0.5, 3.0]);
}

#[test]
fn test_relu_preserves_positive_elements() {
    let z = array![1.0, 2.5, 100.0];
    assert_eq!(Activation::ReLU.apply(&z), z);
}

#[test]
fn test_relu_accepts_empty_vector() {
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(Activation::ReLU.apply(&empty).len(), 0);
}

#[test]
fn test_sigmoid_output_is_bounded() {
    let z = array![-50.0, -1.0, 0.0, 1.0, 50.0];
    let result = Activation::Sigmoid.apply(&z);

    for &value in result.iter() {
        assert!((0.0..=1.0).contains(&value));
    }
}

#[test]
fn test_sigmoid_of_zero_is_one_half() {
    let result = Activation::Sigmoid.apply(&array![0.0]);
    assert_abs_diff_eq!(result[0], 0.5, epsilon = 1e-12);
}

#[test]
fn test_sigmoid_is_monotonic() {
    // For a < b, sigmoid(a) <= sigmoid(b)
    let z = array![-800.0, -10.0, -1.0, 0.0, 1.0, 10.0, 800.0];
    let result = Activation::Sigmoid.apply(&z);

    for window in result.as_slice().unwrap().windows(2) {
        assert!(window[0] <= window[1]);
    }
}

#[test]
fn test_sigmoid_saturates_at_clamp_boundaries() {
    // Outside [-700, 700] the exponential would overflow f64; the clamp
    // yields exact 0 and 1 instead
    let result = Activation::Sigmoid.apply(&array![-1000.0, 1000.0]);
    assert_eq!(result[0], 0.0);
    assert_eq!(result[1], 1.0);
}

#[test]
fn test_sigmoid_known_value() {
    // sigmoid(1) = 1 / (1 + e^-1) ~= 0.7310585786
    let result = Activation::Sigmoid.apply(&array![1.0]);
    assert_abs_diff_eq!(result[0], 0.7310585786300049, epsilon = 1e-12);
}

#[test]
fn test_activation_names() {
    assert_eq!(Activation::ReLU.name(), "relu");
    assert_eq!(Activation::Sigmoid.name(), "sigmoid");
}
