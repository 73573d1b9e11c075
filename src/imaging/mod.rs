//! Image processing, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Extension gate** | suffix match on the lowercased filename |
//! | **Identify** | `ImageReader::into_dimensions` |
//! | **Pad and center** | Lanczos3 resample + paste onto a white `RgbImage` |
//! | **Resize** | `resize_exact` with Lanczos3 |
//!
//! The module is split into:
//! - **Formats**: The supported-extension filter
//! - **Calculations**: Pure functions for canvas geometry (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Per-file transforms combining the above

pub mod backend;
mod calculations;
pub mod formats;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    Transform, calculate_center_offset, calculate_product_dimensions, choose_smart_transform,
};
pub use formats::{SUPPORTED_EXTENSIONS, is_supported_image};
pub use operations::{
    Outcome, Policy, SkipReason, TransformError, TransformSettings, apply_policy, direct_resize,
    pad_and_center, plan_pad, smart_resize,
};
pub use params::{CanvasSize, PadParams, ProductRatio, ResizeParams};
pub use rust_backend::RustBackend;
