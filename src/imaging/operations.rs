//! High-level image operations.
//!
//! These functions combine the extension gate, calculations, and backend
//! execution. Each returns a per-file [`Outcome`] or a [`TransformError`];
//! none of them log. Reporting is the caller's job (see [`crate::walk`]).

use super::backend::{BackendError, ImageBackend};
use super::calculations::{
    Transform, calculate_center_offset, calculate_product_dimensions, choose_smart_transform,
};
use super::formats::is_supported_image;
use super::params::{CanvasSize, PadParams, ProductRatio, ResizeParams};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failed transform, tagged with the input file it was working on.
///
/// `transform` is the transform that was running, or `None` when the smart
/// dispatcher failed to probe the source before choosing one.
#[derive(Error, Debug)]
#[error("{}: {error}", .path.display())]
pub struct TransformError {
    pub path: PathBuf,
    pub transform: Option<Transform>,
    #[source]
    pub error: BackendError,
}

impl TransformError {
    fn new(path: &Path, transform: Option<Transform>, error: BackendError) -> Self {
        Self {
            path: path.to_path_buf(),
            transform,
            error,
        }
    }
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Why a file was passed over without being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedExtension,
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Written { output: PathBuf, transform: Transform },
    Skipped(SkipReason),
}

/// The menu-level choice of how to treat every file in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    PadAndCenter,
    Resize,
    Smart,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::PadAndCenter => f.write_str("pad and center"),
            Policy::Resize => f.write_str("resize"),
            Policy::Smart => f.write_str("smart resize"),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::PadAndCenter => f.write_str("pad and center"),
            Transform::Resize => f.write_str("resize"),
        }
    }
}

/// Target geometry shared by all three policies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransformSettings {
    pub canvas: CanvasSize,
    pub product_ratio: ProductRatio,
}

/// Plan a pad-and-center operation without executing it.
pub fn plan_pad(
    source: &Path,
    output: &Path,
    source_dims: (u32, u32),
    settings: &TransformSettings,
) -> PadParams {
    let (product_width, product_height) =
        calculate_product_dimensions(source_dims, settings.canvas, settings.product_ratio);
    let (offset_x, offset_y) = calculate_center_offset(
        (settings.canvas.width, settings.canvas.height),
        (product_width, product_height),
    );

    PadParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        canvas: settings.canvas,
        product_width,
        product_height,
        offset_x,
        offset_y,
    }
}

/// Scale the product to a fraction of the canvas width and center it on white.
pub fn pad_and_center(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    settings: &TransformSettings,
) -> Result<Outcome> {
    if !is_supported_image(source) {
        return Ok(Outcome::Skipped(SkipReason::UnsupportedExtension));
    }

    let dims = backend
        .identify(source)
        .map_err(|e| TransformError::new(source, Some(Transform::PadAndCenter), e))?;
    let params = plan_pad(source, output, (dims.width, dims.height), settings);
    backend
        .pad_and_center(&params)
        .map_err(|e| TransformError::new(source, Some(Transform::PadAndCenter), e))?;

    Ok(Outcome::Written {
        output: output.to_path_buf(),
        transform: Transform::PadAndCenter,
    })
}

/// Stretch the source to the canvas size, ignoring its aspect ratio.
pub fn direct_resize(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    settings: &TransformSettings,
) -> Result<Outcome> {
    if !is_supported_image(source) {
        return Ok(Outcome::Skipped(SkipReason::UnsupportedExtension));
    }

    backend
        .resize(&ResizeParams {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            width: settings.canvas.width,
            height: settings.canvas.height,
        })
        .map_err(|e| TransformError::new(source, Some(Transform::Resize), e))?;

    Ok(Outcome::Written {
        output: output.to_path_buf(),
        transform: Transform::Resize,
    })
}

/// Pad small sources, stretch everything else.
///
/// The source is probed once here to decide, then read again by the
/// delegated transform.
pub fn smart_resize(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    settings: &TransformSettings,
) -> Result<Outcome> {
    if !is_supported_image(source) {
        return Ok(Outcome::Skipped(SkipReason::UnsupportedExtension));
    }

    let dims = backend
        .identify(source)
        .map_err(|e| TransformError::new(source, None, e))?;

    match choose_smart_transform((dims.width, dims.height), settings.canvas) {
        Transform::PadAndCenter => pad_and_center(backend, source, output, settings),
        Transform::Resize => direct_resize(backend, source, output, settings),
    }
}

/// Run the transform a policy names.
pub fn apply_policy(
    policy: Policy,
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    settings: &TransformSettings,
) -> Result<Outcome> {
    match policy {
        Policy::PadAndCenter => pad_and_center(backend, source, output, settings),
        Policy::Resize => direct_resize(backend, source, output, settings),
        Policy::Smart => smart_resize(backend, source, output, settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    fn settings() -> TransformSettings {
        TransformSettings::default()
    }

    #[test]
    fn plan_pad_default_canvas() {
        let params = plan_pad(
            Path::new("/in/a.jpg"),
            Path::new("/out/a.jpg"),
            (400, 300),
            &settings(),
        );

        assert_eq!(params.product_width, 780);
        assert_eq!(params.product_height, 585);
        assert_eq!(params.offset_x, 210);
        assert_eq!(params.offset_y, 307);
        assert_eq!(params.canvas, CanvasSize::new(1200, 1200));
    }

    #[test]
    fn plan_pad_custom_canvas_and_ratio() {
        let custom = TransformSettings {
            canvas: CanvasSize::new(1000, 800),
            product_ratio: ProductRatio(0.5),
        };
        let params = plan_pad(Path::new("a.png"), Path::new("b.png"), (200, 100), &custom);

        assert_eq!((params.product_width, params.product_height), (500, 250));
        assert_eq!((params.offset_x, params.offset_y), (250, 275));
    }

    #[test]
    fn pad_skips_unsupported_without_touching_backend() {
        let backend = MockBackend::new();
        let outcome = pad_and_center(
            &backend,
            Path::new("/in/notes.txt"),
            Path::new("/out/notes.txt"),
            &settings(),
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Skipped(SkipReason::UnsupportedExtension));
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn resize_skips_unsupported() {
        let backend = MockBackend::new();
        let outcome =
            direct_resize(&backend, Path::new("a.webp"), Path::new("b.webp"), &settings()).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::UnsupportedExtension));
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn pad_identifies_then_pads() {
        let backend = MockBackend::with_dimensions(&[("a.jpg", 400, 300)]);
        let outcome = pad_and_center(
            &backend,
            Path::new("/in/a.jpg"),
            Path::new("/out/a.jpg"),
            &settings(),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::Written {
                output: PathBuf::from("/out/a.jpg"),
                transform: Transform::PadAndCenter,
            }
        );
        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/in/a.jpg"));
        assert!(matches!(
            &ops[1],
            RecordedOp::PadAndCenter {
                product_width: 780,
                product_height: 585,
                offset_x: 210,
                offset_y: 307,
                ..
            }
        ));
    }

    #[test]
    fn resize_targets_canvas_size() {
        let backend = MockBackend::new();
        direct_resize(
            &backend,
            Path::new("/in/a.PNG"),
            Path::new("/out/a.PNG"),
            &settings(),
        )
        .unwrap();

        let ops = backend.get_operations();
        assert_eq!(
            ops,
            vec![RecordedOp::Resize {
                source: "/in/a.PNG".to_string(),
                output: "/out/a.PNG".to_string(),
                width: 1200,
                height: 1200,
            }]
        );
    }

    #[test]
    fn failure_carries_source_path() {
        let backend = MockBackend::new().failing_on("bad.jpg");
        let err = direct_resize(
            &backend,
            Path::new("/in/bad.jpg"),
            Path::new("/out/bad.jpg"),
            &settings(),
        )
        .unwrap_err();

        assert_eq!(err.path, PathBuf::from("/in/bad.jpg"));
        assert!(err.to_string().contains("/in/bad.jpg"));
        assert!(err.to_string().contains("mock decode failure"));
    }

    #[test]
    fn smart_pads_small_source_and_probes_twice() {
        let backend = MockBackend::with_dimensions(&[("small.jpg", 400, 300)]);
        let outcome = smart_resize(
            &backend,
            Path::new("/in/small.jpg"),
            Path::new("/out/small.jpg"),
            &settings(),
        )
        .unwrap();

        assert!(matches!(
            outcome,
            Outcome::Written {
                transform: Transform::PadAndCenter,
                ..
            }
        ));
        let ops = backend.get_operations();
        assert_eq!(ops.len(), 3);
        assert!(matches!(&ops[0], RecordedOp::Identify(_)));
        assert!(matches!(&ops[1], RecordedOp::Identify(_)));
        assert!(matches!(&ops[2], RecordedOp::PadAndCenter { .. }));
    }

    #[test]
    fn smart_resizes_on_boundary() {
        let backend = MockBackend::with_dimensions(&[("edge.jpg", 1200, 500)]);
        let outcome = smart_resize(
            &backend,
            Path::new("/in/edge.jpg"),
            Path::new("/out/edge.jpg"),
            &settings(),
        )
        .unwrap();

        assert!(matches!(
            outcome,
            Outcome::Written {
                transform: Transform::Resize,
                ..
            }
        ));
        let ops = backend.get_operations();
        assert!(matches!(
            ops.last(),
            Some(RecordedOp::Resize {
                width: 1200,
                height: 1200,
                ..
            })
        ));
    }

    #[test]
    fn smart_probe_failure_is_reported() {
        let backend = MockBackend::new().failing_on("x.gif");
        let result = smart_resize(
            &backend,
            Path::new("/in/x.gif"),
            Path::new("/out/x.gif"),
            &settings(),
        );
        let err = result.unwrap_err();
        assert_eq!(err.transform, None);
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn smart_delegate_failure_names_the_branch() {
        let backend =
            MockBackend::with_dimensions(&[("tiny.png", 40, 30)]).failing_on_write("tiny.png");
        let err = smart_resize(
            &backend,
            Path::new("/in/tiny.png"),
            Path::new("/out/tiny.png"),
            &settings(),
        )
        .unwrap_err();

        assert_eq!(err.transform, Some(Transform::PadAndCenter));
        assert!(matches!(
            backend.get_operations().last(),
            Some(RecordedOp::PadAndCenter { .. })
        ));
    }

    #[test]
    fn apply_policy_dispatches() {
        let backend = MockBackend::with_dimensions(&[("a.bmp", 10, 10)]);
        let outcome = apply_policy(
            Policy::Resize,
            &backend,
            Path::new("a.bmp"),
            Path::new("b.bmp"),
            &settings(),
        )
        .unwrap();
        assert!(matches!(
            outcome,
            Outcome::Written {
                transform: Transform::Resize,
                ..
            }
        ));
    }

    #[test]
    fn policy_display_names() {
        assert_eq!(Policy::PadAndCenter.to_string(), "pad and center");
        assert_eq!(Policy::Smart.to_string(), "smart resize");
        assert_eq!(Transform::Resize.to_string(), "resize");
    }
}
