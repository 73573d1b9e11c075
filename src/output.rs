//! Terminal output for finished batches.
//!
//! The activity log carries the per-file detail; the terminal only gets a
//! short summary once a batch completes:
//!
//! ```text
//! ==> Resize images 1200x1200
//!     3 folders
//!     12 processed, 1 skipped, 0 failed
//!     Output: resized-images
//! ```
//!
//! `format_*` functions return lines and do no I/O; `print_lines` writes
//! them to the terminal.

use crate::imaging::CanvasSize;
use crate::imaging::Policy;
use crate::menu::option_label;
use crate::walk::{BatchSummary, WalkError};
use std::path::Path;

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format the summary shown after a batch finishes.
pub fn format_batch_summary(
    policy: Policy,
    canvas: CanvasSize,
    summary: &BatchSummary,
    output_root: &Path,
) -> Vec<String> {
    let mut lines = vec![format!("==> {}", option_label(policy, canvas))];

    if summary.folders == 0 {
        lines.push("    No product folders found".to_string());
        return lines;
    }

    lines.push(format!("    {}", plural(summary.folders, "folder")));
    lines.push(format!(
        "    {} processed, {} skipped, {} failed",
        summary.processed, summary.skipped, summary.failed
    ));
    if summary.processed > 0 {
        lines.push(format!("    Output: {}", output_root.display()));
    }
    if summary.failed > 0 {
        lines.push("    See the log for details on failed files".to_string());
    }
    lines
}

/// Format a batch that could not start.
pub fn format_walk_error(policy: Policy, canvas: CanvasSize, error: &WalkError) -> Vec<String> {
    vec![
        format!("==> {}", option_label(policy, canvas)),
        format!("    Error: {error}"),
    ]
}

pub fn print_lines(lines: &[String], out: &mut impl std::io::Write) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
