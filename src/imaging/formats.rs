//! Extension sniffing for supported inputs.
//!
//! Only the filename suffix is consulted. File contents are never inspected
//! here; a misnamed or corrupt file fails later, at decode time.

use std::path::Path;

/// Filename suffixes accepted as images, lowercase with leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".tiff", ".bmp", ".gif"];

/// Whether the path's lowercased filename ends with a supported suffix.
pub fn is_supported_image(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
