//! Resizer configuration module.
//!
//! Every setting has a built-in default, so the tool runs with no config file
//! at all. An optional `resizer.toml` in the working directory (or the path
//! given with `--config`) overrides just the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! input_root = "images"               # One subfolder per product
//! output_root = "resized-images"      # Mirrors input_root's subfolders
//! log_file = "image_processing.log"   # Appended to across runs
//! log_level = "info"                  # info | warning | error
//! product_ratio = 0.65                # Share of canvas width the padded product spans
//!
//! [canvas]
//! width = 1200
//! height = 1200
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::activity::Level;
use crate::imaging::{CanvasSize, ProductRatio, TransformSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "resizer.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Resizer configuration loaded from `resizer.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizerConfig {
    /// Directory holding one subfolder per product.
    pub input_root: PathBuf,
    /// Directory the resized tree is written to.
    pub output_root: PathBuf,
    /// Activity log, opened in append mode.
    pub log_file: PathBuf,
    /// Lowest level written to the activity log.
    pub log_level: Level,
    /// Output size for every policy.
    pub canvas: CanvasSize,
    /// Share of the canvas width a padded product spans.
    pub product_ratio: ProductRatio,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("images"),
            output_root: PathBuf::from("resized-images"),
            log_file: PathBuf::from("image_processing.log"),
            log_level: Level::Info,
            canvas: CanvasSize::default(),
            product_ratio: ProductRatio::default(),
        }
    }
}

impl ResizerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas width and height must be non-zero".into(),
            ));
        }
        if !self.product_ratio.is_valid() {
            return Err(ConfigError::Validation(
                "product_ratio must be greater than 0 and at most 1".into(),
            ));
        }
        if self.input_root.as_os_str().is_empty() || self.output_root.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "input_root and output_root must not be empty".into(),
            ));
        }
        if self.input_root == self.output_root {
            return Err(ConfigError::Validation(
                "input_root and output_root must differ".into(),
            ));
        }
        Ok(())
    }

    /// Geometry handed to every transform.
    pub fn transform_settings(&self) -> TransformSettings {
        TransformSettings {
            canvas: self.canvas,
            product_ratio: self.product_ratio,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(ResizerConfig::default())?)
}

/// Lay a user config over the stock defaults.
///
/// Nested tables such as `[canvas]` merge per key, so a file that sets only
/// `canvas.width` keeps the default height. Any other value is replaced.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value. `Ok(None)` if the file is absent.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `path`, falling back to stock defaults when it is absent.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(path: &Path) -> Result<ResizerConfig, ConfigError> {
    let merged = match load_raw_config(path)? {
        Some(overlay) => merge_toml(stock_defaults_value()?, overlay),
        None => stock_defaults_value()?,
    };
    let config: ResizerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `resizer.toml`.
///
/// Printed by `--print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# catalog-resizer configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Directory holding one subfolder per product. Only files directly inside
# each subfolder are processed; deeper folders are ignored.
input_root = "images"

# Output tree. Each input subfolder is mirrored here by name, and every
# output file keeps its input filename. Existing files are overwritten.
output_root = "resized-images"

# Activity log, appended to across runs.
log_file = "image_processing.log"

# Lowest level written to the log: "info", "warning" or "error".
log_level = "info"

# Share of the canvas width a padded product spans (0 < ratio <= 1).
# The height follows the product's own aspect ratio.
product_ratio = 0.65

# Output size for all three menu options.
[canvas]
width = 1200
height = 1200
"##
}
