//! Parameter types for image operations.
//!
//! These structs describe *what* to produce, not *how*. The
//! [`operations`](super::operations) module fills them in from configuration
//! and the [`backend`](super::backend) executes them, so tests can swap in a
//! recording mock without touching the geometry logic.
//!
//! ## Types
//!
//! - [`CanvasSize`] — Target output size in pixels (default 1200×1200).
//! - [`ProductRatio`] — Fraction of the canvas width the scaled product occupies (default 0.65).
//! - [`PadParams`] — Full specification for a pad-and-center: paths, canvas, scaled size, offsets.
//! - [`ResizeParams`] — Full specification for a direct stretch resize.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Output size for every transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(1200, 1200)
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fraction of the canvas width that the padded product spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRatio(pub f64);

impl ProductRatio {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Ratios outside `(0, 1]` would either vanish or overflow the canvas width.
    pub fn is_valid(self) -> bool {
        self.0 > 0.0 && self.0 <= 1.0
    }
}

impl Default for ProductRatio {
    fn default() -> Self {
        Self(0.65)
    }
}

/// Parameters for a pad-and-center operation.
///
/// The scaled size and offsets are precomputed by
/// [`plan_pad`](super::operations::plan_pad); the backend only resamples,
/// pastes, and encodes.
#[derive(Debug, Clone, PartialEq)]
pub struct PadParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub canvas: CanvasSize,
    /// Size the source is resampled to before pasting.
    pub product_width: u32,
    pub product_height: u32,
    /// Top-left paste position. Negative when the product is taller than the canvas.
    pub offset_x: i64,
    pub offset_y: i64,
}

/// Parameters for a stretch resize to an exact size.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}
