//! Batch orchestration.
//!
//! Takes an ordered selection of source files, an output directory and a
//! validated [`BatchRequest`], and produces one output file per readable
//! source.
//!
//! ## Per-item pipeline
//!
//! ```text
//! decode → [center crop] → [resize] → derive name → encode → write
//! ```
//!
//! Items run strictly one after another in selection order. Each item ends
//! in exactly one [`ItemOutcome`]: either a written file or a failure naming
//! the stage that failed. A failing item never stops the batch.
//!
//! ## Fatal errors
//!
//! Checked before the first item is touched, in this order:
//! 1. empty selection
//! 2. empty output directory path
//! 3. output directory cannot be created
//!
//! Dimension parsing happens earlier still, in [`BatchRequest::parse`].
//! [`run_form`] ties the two together for callers holding raw input: it
//! parses the form, resolves the [`Selection`], then runs the batch, so a
//! malformed field never lists a folder or creates the output directory.
//!
//! ## Naming
//!
//! Output names come from [`OutputNamer`]. The sequence number advances only
//! after a successful write, so with prefix `out` and a corrupt second item
//! out of three, the outputs are `out_1` and `out_2`.

use crate::imaging::{BackendError, Dimensions, ImageBackend, RustBackend, crop_to_center, resize};
use crate::naming::{OutputNamer, output_extension};
use crate::request::{BatchRequest, RequestError, RequestForm};
use crate::scan::{ScanError, Selection};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("No images selected")]
    EmptySelection,
    #[error("No output directory given")]
    MissingOutputDir,
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a whole run started from raw input.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

/// Pipeline stage at which an item failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Decode,
    Encode,
    Write,
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureStage::Decode => "decode",
            FailureStage::Encode => "encode",
            FailureStage::Write => "write",
        })
    }
}

/// What happened to a single selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemStatus {
    Written {
        output: PathBuf,
        width: u32,
        height: u32,
    },
    Failed {
        stage: FailureStage,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    /// 1-based position in the selection.
    pub index: usize,
    pub source: PathBuf,
    #[serde(flatten)]
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self.status, ItemStatus::Written { .. })
    }
}

/// Result of a batch run: one outcome per selected file, in selection order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    pub fn written(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| o.is_written())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.is_written())
    }

    pub fn written_count(&self) -> usize {
        self.written().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed_count();
        if failed > 0 {
            write!(
                f,
                "{} written, {} failed ({} total)",
                self.written_count(),
                failed,
                self.outcomes.len()
            )
        } else {
            write!(f, "{} written", self.written_count())
        }
    }
}

/// A completed run: the request it used and what happened to each item.
#[derive(Debug, Clone)]
pub struct BatchRun {
    pub request: BatchRequest,
    pub report: BatchReport,
}

/// Parse `form`, resolve `selection`, and process the batch.
pub fn run_form(
    form: &RequestForm,
    selection: &Selection,
    output_dir: &Path,
) -> Result<BatchRun, RunError> {
    let request = BatchRequest::parse(form)?;
    let sources = selection.resolve()?;
    let report = process_batch(&sources, output_dir, &request)?;
    Ok(BatchRun { request, report })
}

/// Process a batch with the `image`-crate backend.
pub fn process_batch(
    sources: &[PathBuf],
    output_dir: &Path,
    request: &BatchRequest,
) -> Result<BatchReport, ProcessError> {
    process_batch_with_backend(&RustBackend::new(), sources, output_dir, request)
}

/// Process a batch using a specific backend (allows testing with mock).
pub fn process_batch_with_backend(
    backend: &impl ImageBackend,
    sources: &[PathBuf],
    output_dir: &Path,
    request: &BatchRequest,
) -> Result<BatchReport, ProcessError> {
    if sources.is_empty() {
        return Err(ProcessError::EmptySelection);
    }
    if output_dir.as_os_str().is_empty() {
        return Err(ProcessError::MissingOutputDir);
    }
    std::fs::create_dir_all(output_dir).map_err(|source| ProcessError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    debug!(
        items = sources.len(),
        output = %output_dir.display(),
        ?request,
        "starting batch"
    );

    let mut namer = OutputNamer::new(request.prefix.clone());
    let mut report = BatchReport::default();

    for (i, source) in sources.iter().enumerate() {
        let status = match process_item(backend, source, output_dir, request, &namer) {
            Ok((output, dims)) => {
                namer.commit();
                info!(source = %source.display(), output = %output.display(), "wrote {dims}");
                ItemStatus::Written {
                    output,
                    width: dims.width,
                    height: dims.height,
                }
            }
            Err((stage, reason)) => {
                warn!(source = %source.display(), %stage, "{reason}");
                ItemStatus::Failed { stage, reason }
            }
        };

        report.outcomes.push(ItemOutcome {
            index: i + 1,
            source: source.clone(),
            status,
        });
    }

    Ok(report)
}

type ItemResult = Result<(PathBuf, Dimensions), (FailureStage, String)>;

fn process_item(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    request: &BatchRequest,
    namer: &OutputNamer,
) -> ItemResult {
    let source_name = source.file_name().unwrap_or_default();
    let file_name = source_name.to_string_lossy();

    let mut image = backend
        .decode(source)
        .map_err(|e| (FailureStage::Decode, describe(&file_name, &e)))?;
    debug!(source = %source.display(), "decoded {}", Dimensions::of(&image));

    if let Some(crop) = request.crop {
        image = crop_to_center(&image, crop.width, crop.height);
    }
    if let Some(target) = request.resize {
        image = resize(&image, target.width, target.height);
    }

    let extension = output_extension(&file_name);
    let output = output_dir.join(namer.name_for(source_name));

    let bytes = backend
        .encode(&image, &extension)
        .map_err(|e| (FailureStage::Encode, describe(&file_name, &e)))?;
    std::fs::write(&output, bytes).map_err(|e| {
        (
            FailureStage::Write,
            format!("{}: {}: {e}", file_name, output.display()),
        )
    })?;

    Ok((output, Dimensions::of(&image)))
}

fn describe(file_name: &str, error: &BackendError) -> String {
    format!("{file_name}: {error}")
}
