//! # Bulk Resizer
//!
//! Batch-process a folder of images: optionally center-crop and/or resize
//! each selected image, rename it with a prefix and sequence number, and
//! write the results to an output folder.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      input/   →  selectable image paths
//! 2. Request   flags    →  validated BatchRequest (crop, resize, prefix)
//! 3. Process   paths    →  output/ + BatchReport (one outcome per item)
//! ```
//!
//! Dimension text is validated into a [`request::BatchRequest`] before the
//! orchestrator runs, so a malformed field rejects the call before any file
//! is read or the output folder is created. Inside a run, per-item failures
//! are collected into the [`process::BatchReport`] instead of aborting.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the image files in an input folder |
//! | [`request`] | Parses raw crop/resize/prefix input into a `BatchRequest` |
//! | [`process`] | Runs the batch: decode, crop, resize, name, encode, write |
//! | [`imaging`] | Center crop, bilinear resize, and the `image`-crate codec backend |
//! | [`naming`] | Output extension and `{prefix}_{n}.{ext}` naming |
//! | [`config`] | `resizer.toml` defaults, merged over stock values |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Lenient Cropping
//!
//! A crop larger than the image is clamped to the image instead of failing.
//! Cropping 500x100 from a 400x300 image yields the 400x100 band at offset
//! (0, 100).
//!
//! ## Sequence Numbers Count Writes
//!
//! The `n` in `{prefix}_{n}.{ext}` advances only after a file is written.
//! Items that fail to decode, encode, or write leave no gap in the numbering.
//!
//! ## No Deduplication Without a Prefix
//!
//! With an empty prefix, outputs keep their source filename. Two sources
//! with the same name overwrite each other in the output folder.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod request;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
