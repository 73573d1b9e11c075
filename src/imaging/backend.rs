//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the three operations every backend must
//! support: identify, pad_and_center, and resize.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests use the recording `MockBackend` below.

use super::params::{PadParams, ResizeParams};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    #[error("Failed to encode {path}: {message}")]
    Encode { path: String, message: String },
    #[error("Invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image processing backends.
///
/// Backends decode from `source`, write to `output`, and never touch the
/// source file.
pub trait ImageBackend {
    /// Get image dimensions without a full decode where the format allows it.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Resample the source and paste it onto a white canvas.
    fn pad_and_center(&self, params: &PadParams) -> Result<(), BackendError>;

    /// Stretch the source to the exact target size.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::imaging::CanvasSize;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    ///
    /// Dimensions are looked up by file name so walker tests can mix sizes.
    #[derive(Default)]
    pub struct MockBackend {
        pub dimensions: HashMap<String, Dimensions>,
        /// File names whose operations should fail with a decode error.
        pub failing: Vec<String>,
        /// File names that identify fine but fail when written.
        pub failing_writes: Vec<String>,
        pub operations: Mutex<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        PadAndCenter {
            source: String,
            output: String,
            product_width: u32,
            product_height: u32,
            offset_x: i64,
            offset_y: i64,
        },
        Resize {
            source: String,
            output: String,
            width: u32,
            height: u32,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(entries: &[(&str, u32, u32)]) -> Self {
            Self {
                dimensions: entries
                    .iter()
                    .map(|&(name, width, height)| (name.to_string(), Dimensions { width, height }))
                    .collect(),
                ..Self::default()
            }
        }

        pub fn failing_on(mut self, name: &str) -> Self {
            self.failing.push(name.to_string());
            self
        }

        pub fn failing_on_write(mut self, name: &str) -> Self {
            self.failing_writes.push(name.to_string());
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }

        fn file_name(path: &Path) -> String {
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        }

        fn check_failure(&self, path: &Path) -> Result<(), BackendError> {
            if self.failing.contains(&Self::file_name(path)) {
                return Err(BackendError::Decode {
                    path: path.display().to_string(),
                    message: "mock decode failure".to_string(),
                });
            }
            Ok(())
        }

        fn check_write_failure(&self, source: &Path) -> Result<(), BackendError> {
            self.check_failure(source)?;
            if self.failing_writes.contains(&Self::file_name(source)) {
                return Err(BackendError::Encode {
                    path: source.display().to_string(),
                    message: "mock encode failure".to_string(),
                });
            }
            Ok(())
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));
            self.check_failure(path)?;

            self.dimensions
                .get(&Self::file_name(path))
                .copied()
                .ok_or_else(|| BackendError::Decode {
                    path: path.display().to_string(),
                    message: "no mock dimensions".to_string(),
                })
        }

        fn pad_and_center(&self, params: &PadParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::PadAndCenter {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                product_width: params.product_width,
                product_height: params.product_height,
                offset_x: params.offset_x,
                offset_y: params.offset_y,
            });
            self.check_write_failure(&params.source)
        }

        fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Resize {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                width: params.width,
                height: params.height,
            });
            self.check_write_failure(&params.source)
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(&[("image.jpg", 800, 600)]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_identify_unknown_file_errors() {
        let backend = MockBackend::new();
        assert!(backend.identify(Path::new("/missing.jpg")).is_err());
    }

    #[test]
    fn mock_records_resize() {
        let backend = MockBackend::new();

        backend
            .resize(&ResizeParams {
                source: "/source.jpg".into(),
                output: "/output.jpg".into(),
                width: 1200,
                height: 1200,
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Resize {
                width: 1200,
                height: 1200,
                ..
            }
        ));
    }

    #[test]
    fn mock_records_pad_and_fails_on_request() {
        let backend = MockBackend::new().failing_on("broken.png");

        let result = backend.pad_and_center(&PadParams {
            source: "/in/broken.png".into(),
            output: "/out/broken.png".into(),
            canvas: CanvasSize::default(),
            product_width: 780,
            product_height: 585,
            offset_x: 210,
            offset_y: 307,
        });

        assert!(matches!(result, Err(BackendError::Decode { .. })));
        assert_eq!(backend.get_operations().len(), 1);
    }
}
