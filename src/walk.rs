//! Directory walker: applies one policy to every product folder.
//!
//! ## Layout
//!
//! ```text
//! images/                    resized-images/
//! ├── shoes/                 ├── shoes/
//! │   ├── a.jpg       ──→    │   └── a.jpg
//! │   ├── notes.txt          │
//! │   └── old/        (not entered)
//! ├── hats/                  └── hats/
//! │   └── b.png       ──→        └── b.png
//! └── stray.jpg       (top-level files ignored)
//! ```
//!
//! Exactly one level of subfolders is visited. Each regular file inside a
//! subfolder is handed to the chosen transform with its mirrored output path;
//! the output subfolder is created the first time a file is found in it.
//!
//! ## Failure handling
//!
//! Transforms return values instead of logging. This module turns each
//! outcome into an activity-log record and moves on: an unsupported
//! extension is a warning, a decode/encode failure is an error, and neither
//! stops the batch. Only an unreadable input root fails the whole walk.

use crate::activity::ActivityLog;
use crate::imaging::{ImageBackend, Outcome, Policy, SkipReason, TransformSettings, apply_policy};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("cannot read input folder {}: {source}", .path.display())]
    InputRoot {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Input and output roots for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Roots {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Create both roots if missing.
    pub fn ensure_exist(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.input)?;
        std::fs::create_dir_all(&self.output)
    }
}

/// Counts for one batch, shown to the operator when it finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub folders: usize,
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Immediate children of `dir`, sorted by name. Symlinks are followed so a
/// linked folder or file counts as what it points to.
fn children(dir: &Path) -> WalkDir {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
}

/// A symlink whose target is missing. Classified by its target, so it is
/// neither a folder nor a file and is passed over like any other non-file.
fn is_dangling_link(error: &walkdir::Error) -> bool {
    error
        .io_error()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
        && error
            .path()
            .is_some_and(|path| path.symlink_metadata().is_ok_and(|m| m.file_type().is_symlink()))
}

/// Apply `policy` to every file one level below `roots.input`.
pub fn process_tree(
    backend: &impl ImageBackend,
    policy: Policy,
    roots: &Roots,
    settings: &TransformSettings,
    log: &mut ActivityLog,
) -> Result<BatchSummary, WalkError> {
    let mut summary = BatchSummary::default();

    for entry in children(&roots.input) {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself is unreadable: nothing to walk.
            Err(source) if source.depth() == 0 => {
                return Err(WalkError::InputRoot {
                    path: roots.input.clone(),
                    source,
                });
            }
            Err(e) if is_dangling_link(&e) => continue,
            Err(e) => {
                log.error(&format!("Failed to read entry in {}: {e}", roots.input.display()));
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        summary.folders += 1;
        process_folder(backend, policy, &entry, roots, settings, log, &mut summary);
    }

    Ok(summary)
}

fn process_folder(
    backend: &impl ImageBackend,
    policy: Policy,
    folder: &DirEntry,
    roots: &Roots,
    settings: &TransformSettings,
    log: &mut ActivityLog,
    summary: &mut BatchSummary,
) {
    let folder_path = folder.path();
    log.info(&format!("Entering folder: {}", folder_path.display()));
    let output_folder = roots.output.join(folder.file_name());

    for entry in children(folder_path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if is_dangling_link(&e) => continue,
            Err(e) => {
                log.error(&format!(
                    "Failed to read entry in {}: {e}",
                    folder_path.display()
                ));
                summary.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let source = entry.path();
        log.info(&format!("File found: {}", source.display()));

        if let Err(e) = std::fs::create_dir_all(&output_folder) {
            log.error(&format!(
                "Failed to create output folder {}: {e}",
                output_folder.display()
            ));
            summary.failed += 1;
            continue;
        }
        let output = output_folder.join(entry.file_name());

        let result = apply_policy(policy, backend, source, &output, settings);
        if policy == Policy::Smart {
            let chosen = match &result {
                Ok(Outcome::Written { transform, .. }) => Some(*transform),
                Ok(Outcome::Skipped(_)) => None,
                Err(e) => e.transform,
            };
            if let Some(transform) = chosen {
                log.info(&format!("Using {transform} for: {}", source.display()));
            }
        }

        match result {
            Ok(Outcome::Written { output, transform }) => {
                log.info(&format!(
                    "Processed successfully ({transform}): {}",
                    output.display()
                ));
                summary.processed += 1;
            }
            Ok(Outcome::Skipped(SkipReason::UnsupportedExtension)) => {
                log.warning(&format!(
                    "Skipped file (unsupported extension): {}",
                    source.display()
                ));
                summary.skipped += 1;
            }
            Err(e) => {
                log.error(&format!("Failed to process {e}"));
                summary.failed += 1;
            }
        }
    }
}
