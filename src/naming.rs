//! Output filename derivation.
//!
//! Every written file gets its name from the source filename and the batch
//! prefix:
//!
//! - With a prefix: `{prefix}_{n}.{ext}`, where `n` counts successful writes
//!   in this batch starting at 1 and `ext` is the lowercased source extension.
//! - Without a prefix: the source filename, unchanged. Names that are not
//!   valid UTF-8 are kept byte for byte.
//!
//! ## Extensions
//!
//! The extension is the text after the last `.` of the source filename,
//! lowercased. Names without one (`photo`, `photo.`) fall back to `jpg`:
//! - `IMG_001.JPG` → `jpg`
//! - `scan.final.Png` → `png`
//! - `photo` → `jpg`

use std::ffi::{OsStr, OsString};

/// Extension used when the source filename has none.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Derive the output extension for a source filename.
pub fn output_extension(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => file_name[dot + 1..].to_lowercase(),
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Hands out output filenames for one batch run.
///
/// The counter only moves on [`commit`](Self::commit), which the orchestrator
/// calls after a file has been written. Failed items therefore never consume
/// a sequence number.
#[derive(Debug, Clone)]
pub struct OutputNamer {
    prefix: String,
    counter: u32,
}

impl OutputNamer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 1,
        }
    }

    /// The name the next successful write for `source_name` will use.
    pub fn name_for(&self, source_name: &OsStr) -> OsString {
        if self.prefix.is_empty() {
            source_name.to_os_string()
        } else {
            format!(
                "{}_{}.{}",
                self.prefix,
                self.counter,
                output_extension(&source_name.to_string_lossy())
            )
            .into()
        }
    }

    /// Record a successful write.
    pub fn commit(&mut self) {
        self.counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(namer: &OutputNamer, source: &str) -> OsString {
        namer.name_for(OsStr::new(source))
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(output_extension("IMG_001.JPG"), "jpg");
        assert_eq!(output_extension("a.Png"), "png");
    }

    #[test]
    fn extension_uses_last_dot() {
        assert_eq!(output_extension("scan.final.gif"), "gif");
        assert_eq!(output_extension("archive.tar.bmp"), "bmp");
    }

    #[test]
    fn missing_extension_defaults_to_jpg() {
        assert_eq!(output_extension("photo"), "jpg");
    }

    #[test]
    fn trailing_dot_defaults_to_jpg() {
        assert_eq!(output_extension("photo."), "jpg");
    }

    #[test]
    fn dotfile_extension_is_rest_of_name() {
        assert_eq!(output_extension(".png"), "png");
    }

    #[test]
    fn prefixed_names_count_from_one() {
        let mut namer = OutputNamer::new("out");
        assert_eq!(name(&namer, "a.jpg"), "out_1.jpg");
        namer.commit();
        assert_eq!(name(&namer, "b.PNG"), "out_2.png");
        namer.commit();
        assert_eq!(name(&namer, "c"), "out_3.jpg");
    }

    #[test]
    fn uncommitted_name_is_reused() {
        let namer = OutputNamer::new("out");
        assert_eq!(name(&namer, "a.jpg"), "out_1.jpg");
        assert_eq!(name(&namer, "b.jpg"), "out_1.jpg");
    }

    #[test]
    fn empty_prefix_keeps_source_name() {
        let mut namer = OutputNamer::new("");
        assert_eq!(name(&namer, "Holiday.JPG"), "Holiday.JPG");
        namer.commit();
        assert_eq!(name(&namer, "photo"), "photo");
    }

    #[cfg(unix)]
    #[test]
    fn empty_prefix_keeps_non_utf8_name_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let source = OsStr::from_bytes(b"caf\xE9.png");
        assert_eq!(OutputNamer::new("").name_for(source), source);
        assert_eq!(OutputNamer::new("out").name_for(source), "out_1.png");
    }
}
