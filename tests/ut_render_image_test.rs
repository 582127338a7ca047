use mlp_infer::utility::render_image;
use ndarray::{Array1, array};

#[test]
fn test_render_uses_threshold_at_125() {
    let pixels = array![0.0, 124.9, 125.0, 255.0];
    assert_eq!(render_image(&pixels, 4), "..@@");
}

#[test]
fn test_render_breaks_rows_at_width() {
    let pixels = array![0.0, 255.0, 255.0, 0.0, 0.0, 0.0];
    assert_eq!(render_image(&pixels, 2), ".@\n@.\n..");
}

#[test]
fn test_render_empty_image() {
    assert_eq!(render_image(&Array1::<f64>::zeros(0), 28), "");
}

#[test]
#[should_panic(expected = "greater than 0")]
fn test_render_rejects_zero_width() {
    render_image(&array![1.0], 0);
}
