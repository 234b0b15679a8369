//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Images in photos/ (3)
//! 001 IMG_0001.JPG
//! 002 IMG_0002.JPG
//! 003 2023/beach.gif
//! ```
//!
//! ## Run
//!
//! ```text
//! Request
//!     Crop: 500x100 (centered)
//!     Resize: 200x200
//!     Prefix: out
//! 001 a.jpg → out/out_1.jpg (200x200)
//! 002 b.jpg
//!     Error (decode): b.jpg: Failed to decode ...
//! 003 c.png → out/out_2.png (200x200)
//!
//! Processing completed: 2 written, 1 failed (3 total)
//! ```

use crate::process::{BatchReport, ItemOutcome, ItemStatus};
use crate::request::BatchRequest;
use std::path::{Path, PathBuf};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Path shown relative to `root` when it lives under it.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// list
// ============================================================================

/// Format the images found in an input folder.
pub fn format_image_list(dir: &Path, images: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![format!("Images in {} ({})", dir.display(), images.len())];
    for (i, image) in images.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), display_path(image, dir)));
    }
    lines
}

/// Print the image list to stdout.
pub fn print_image_list(dir: &Path, images: &[PathBuf]) {
    for line in format_image_list(dir, images) {
        println!("{}", line);
    }
}

// ============================================================================
// run
// ============================================================================

/// Format the effective request ahead of a batch run.
pub fn format_request(request: &BatchRequest) -> Vec<String> {
    let mut lines = vec!["Request".to_string()];
    match request.crop {
        Some(c) => lines.push(format!("{}Crop: {} (centered)", indent(1), c)),
        None => lines.push(format!("{}Crop: off", indent(1))),
    }
    match request.resize {
        Some(r) => lines.push(format!("{}Resize: {}", indent(1), r)),
        None => lines.push(format!("{}Resize: off", indent(1))),
    }
    if request.prefix.is_empty() {
        lines.push(format!("{}Prefix: none (keep source names)", indent(1)));
    } else {
        lines.push(format!("{}Prefix: {}", indent(1), request.prefix));
    }
    lines
}

/// Format one item outcome.
///
/// Written items are a single line; failures add an indented error line.
pub fn format_outcome(outcome: &ItemOutcome) -> Vec<String> {
    let header = format!("{} {}", format_index(outcome.index), file_name(&outcome.source));
    match &outcome.status {
        ItemStatus::Written {
            output,
            width,
            height,
        } => vec![format!(
            "{} \u{2192} {} ({}x{})",
            header,
            output.display(),
            width,
            height
        )],
        ItemStatus::Failed { stage, reason } => vec![
            header,
            format!("{}Error ({}): {}", indent(1), stage, reason),
        ],
    }
}

/// Format the full batch report: every item, then the summary line.
///
/// The summary is always present, even when every item failed.
pub fn format_report(report: &BatchReport) -> Vec<String> {
    let mut lines: Vec<String> = report.outcomes.iter().flat_map(format_outcome).collect();
    lines.push(String::new());
    lines.push(format!("Processing completed: {}", report));
    lines
}

/// Print the request summary to stdout.
pub fn print_request(request: &BatchRequest) {
    for line in format_request(request) {
        println!("{}", line);
    }
}

/// Print the batch report to stdout.
pub fn print_report(report: &BatchReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}
