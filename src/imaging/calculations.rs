//! Pure calculation functions for canvas geometry.
//!
//! All functions here are pure and testable without any I/O or images.

use super::params::{CanvasSize, ProductRatio};

/// Which concrete transform produced an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Scaled to a fraction of the canvas width and centered on white.
    PadAndCenter,
    /// Stretched to the exact canvas size.
    Resize,
}

/// Calculate the scaled product size for pad-and-center.
///
/// The width is always `floor(canvas_width * ratio)`; the height follows the
/// source aspect ratio relative to that width, floored.
///
/// # Examples
/// ```
/// # use catalog_resizer::imaging::{CanvasSize, ProductRatio, calculate_product_dimensions};
/// let canvas = CanvasSize::new(1200, 1200);
/// assert_eq!(calculate_product_dimensions((400, 300), canvas, ProductRatio(0.65)), (780, 585));
/// ```
pub fn calculate_product_dimensions(
    source: (u32, u32),
    canvas: CanvasSize,
    ratio: ProductRatio,
) -> (u32, u32) {
    let (src_w, src_h) = source;
    let product_w = (canvas.width as f64 * ratio.value()).floor() as u32;
    let product_h = (product_w as f64 / src_w as f64 * src_h as f64).floor() as u32;
    (product_w, product_h)
}

/// Top-left position that centers `inner` within `outer`.
///
/// Uses floor division, so an odd remainder shifts the product one pixel up/left
/// and an oversized product gets a negative offset (the paste clips).
pub fn calculate_center_offset(outer: (u32, u32), inner: (u32, u32)) -> (i64, i64) {
    let dx = outer.0 as i64 - inner.0 as i64;
    let dy = outer.1 as i64 - inner.1 as i64;
    (dx.div_euclid(2), dy.div_euclid(2))
}

/// Pick the transform for the smart policy.
///
/// Only a source strictly smaller than the target in *both* dimensions is
/// padded. Matching the target in either dimension selects a plain resize.
pub fn choose_smart_transform(source: (u32, u32), target: CanvasSize) -> Transform {
    if source.0 < target.width && source.1 < target.height {
        Transform::PadAndCenter
    } else {
        Transform::Resize
    }
}
