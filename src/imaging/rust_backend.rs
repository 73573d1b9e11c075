//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, TIFF, BMP, GIF) | `image::ImageReader` with content sniffing |
//! | Identify | `ImageReader::into_dimensions` (header only) |
//! | Resample | `DynamicImage::resize_exact` with `Lanczos3` |
//! | White canvas | `image::RgbImage::from_pixel` |
//! | Paste | `image::imageops::replace` (opaque, clipped) |
//! | Encode | `DynamicImage::save_with_format`, format from the output extension |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::{PadParams, ResizeParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage};
use std::path::Path;

/// Canvas background for pad-and-center.
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<std::fs::File>>, BackendError> {
    // Sniff the content so a PNG saved as .jpg still decodes.
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| BackendError::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    ImageFormat::from_path(path).map_err(|e| BackendError::Encode {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Convert to a color type the target encoder accepts.
///
/// JPEG has no alpha channel and no 16-bit mode; GIF and BMP only take 8-bit
/// samples. Everything else is written as decoded.
fn fit_color_type(img: DynamicImage, format: ImageFormat) -> DynamicImage {
    match format {
        ImageFormat::Jpeg => match img {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => img,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        },
        ImageFormat::Gif | ImageFormat::Bmp => match img {
            DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
            other if other.color().has_alpha() => DynamicImage::ImageRgba8(other.to_rgba8()),
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        },
        _ => img,
    }
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: DynamicImage, path: &Path) -> Result<(), BackendError> {
    let format = output_format(path)?;
    fit_color_type(img, format)
        .save_with_format(path, format)
        .map_err(|e| BackendError::Encode {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

fn ensure_nonzero(width: u32, height: u32) -> Result<(), BackendError> {
    if width == 0 || height == 0 {
        return Err(BackendError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) =
            open_reader(path)?
                .into_dimensions()
                .map_err(|e| BackendError::Decode {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
        Ok(Dimensions { width, height })
    }

    fn pad_and_center(&self, params: &PadParams) -> Result<(), BackendError> {
        ensure_nonzero(params.product_width, params.product_height)?;
        ensure_nonzero(params.canvas.width, params.canvas.height)?;

        let img = load_image(&params.source)?;
        let product = img
            .resize_exact(
                params.product_width,
                params.product_height,
                FilterType::Lanczos3,
            )
            .to_rgb8();

        let mut canvas = RgbImage::from_pixel(params.canvas.width, params.canvas.height, WHITE);
        image::imageops::replace(&mut canvas, &product, params.offset_x, params.offset_y);

        save_image(DynamicImage::ImageRgb8(canvas), &params.output)
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        ensure_nonzero(params.width, params.height)?;

        let img = load_image(&params.source)?;
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(resized, &params.output)
    }
}
