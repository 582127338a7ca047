use ndarray::{ArrayBase, Data, Ix1};

/// Pixel intensity below which a pixel renders as background.
const INK_THRESHOLD: f64 = 125.0;

/// Renders a flattened grayscale image as ASCII art.
///
/// Pixels with intensity below 125 render as `'.'`, the rest as `'@'`; a
/// newline is inserted every `width` pixels. Intended for eyeballing
/// 28x28 digit images without leaving the terminal.
///
/// # Parameters
///
/// - `pixels` - The image as a flattened vector, row-major
/// - `width` - Number of pixels per row
///
/// # Returns
///
/// - `String` - The rendered image, rows separated by `'\n'`
///
/// # Panics
///
/// - Panics if `width` is zero
///
/// # Examples
/// ```rust
/// use mlp_infer::utility::render_image;
/// use ndarray::array;
///
/// let pixels = array![0.0, 255.0, 255.0, 0.0];
/// assert_eq!(render_image(&pixels, 2), ".@\n@.");
/// ```
pub fn render_image<S>(pixels: &ArrayBase<S, Ix1>, width: usize) -> String
where
    S: Data<Elem = f64>,
{
    if width == 0 {
        panic!("Image width must be greater than 0");
    }

    let mut rendered = String::with_capacity(pixels.len() + pixels.len() / width);
    for (index, &pixel) in pixels.iter().enumerate() {
        if index > 0 && index % width == 0 {
            rendered.push('\n');
        }
        rendered.push(if pixel < INK_THRESHOLD { '.' } else { '@' });
    }
    rendered
}

/// Prints a flattened grayscale image to stdout as ASCII art.
///
/// See [`render_image`] for the rendering rules.
pub fn display_image<S>(pixels: &ArrayBase<S, Ix1>, width: usize)
where
    S: Data<Elem = f64>,
{
    println!("{}", render_image(pixels, width));
}
