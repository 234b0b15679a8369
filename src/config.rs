//! Default batch settings from an optional `resizer.toml`.
//!
//! Stock defaults are overridden by a user config file, which is in turn
//! overridden by command-line flags. The file only needs the keys it changes.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! prefix = ""               # Output name prefix; empty keeps source names
//!
//! [crop]
//! enabled = false           # Center-crop before resizing
//! width = 1080
//! height = 1080
//!
//! [resize]
//! enabled = false           # Resize to exactly width x height
//! width = 1920
//! height = 1080
//!
//! [scan]
//! recursive = false         # Include images in subfolders of the input folder
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Batch defaults loaded from `resizer.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizerConfig {
    /// Output filename prefix.
    pub prefix: String,
    /// Center-crop settings.
    pub crop: StepConfig,
    /// Resize settings.
    pub resize: StepConfig,
    /// Input folder listing settings.
    pub scan: ScanConfig,
}

impl Default for ResizerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            crop: StepConfig {
                enabled: false,
                width: 1080,
                height: 1080,
            },
            resize: StepConfig {
                enabled: false,
                width: 1920,
                height: 1080,
            },
            scan: ScanConfig::default(),
        }
    }
}

impl ResizerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, step) in [("crop", &self.crop), ("resize", &self.resize)] {
            if step.enabled && (step.width == 0 || step.height == 0) {
                return Err(ConfigError::Validation(format!(
                    "{name}.width and {name}.height must be non-zero when {name} is enabled"
                )));
            }
        }
        Ok(())
    }
}

/// An optional pipeline step with target dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    #[serde(default)]
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub recursive: bool,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Name of the config file picked up from the working directory.
pub const CONFIG_FILE_NAME: &str = "resizer.toml";

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(ResizerConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
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

/// Read a config file as a raw TOML value.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load the effective config.
///
/// `None` yields the stock defaults. `Some(path)` merges that file on top of
/// the defaults; the file must exist. The result is validated either way.
pub fn load_config(path: Option<&Path>) -> Result<ResizerConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match path {
        Some(p) => merge_toml(base, load_raw_config(p)?),
        None => base,
    };
    let config: ResizerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `resizer.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Bulk Resizer Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override them.
# Unknown keys will cause an error.

# Prefix for output names. With a prefix, outputs are named
# <prefix>_<n>.<ext>, numbered from 1 in selection order. Leave empty to
# keep each source filename.
prefix = ""

# ---------------------------------------------------------------------------
# Center crop (applied first)
# ---------------------------------------------------------------------------
[crop]
enabled = false
# Requested crop size. Values larger than an image are clamped to it.
width = 1080
height = 1080

# ---------------------------------------------------------------------------
# Resize (applied after cropping; aspect ratio is not preserved)
# ---------------------------------------------------------------------------
[resize]
enabled = false
width = 1920
height = 1080

# ---------------------------------------------------------------------------
# Input folder listing
# ---------------------------------------------------------------------------
[scan]
# Include images in subfolders of the input folder.
recursive = false
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(tmp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn no_file_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ResizerConfig::default());
        assert!(!config.crop.enabled);
        assert!(!config.resize.enabled);
        assert_eq!(config.prefix, "");
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
prefix = "holiday"

[resize]
enabled = true
width = 800
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.prefix, "holiday");
        assert!(config.resize.enabled);
        assert_eq!(config.resize.width, 800);
        // Unspecified values keep their defaults
        assert_eq!(config.resize.height, 1080);
        assert_eq!(config.crop, ResizerConfig::default().crop);
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_config(Some(&tmp.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "this is not valid toml [[[");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[crop]\nwdith = 10\n");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn enabled_step_with_zero_size_fails_validation() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[crop]\nenabled = true\nwidth = 0\n");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn disabled_step_with_zero_size_is_fine() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[resize]\nwidth = 0\nheight = 0\n");
        assert!(load_config(Some(&path)).is_ok());
    }

    #[test]
    fn merge_toml_overlay_wins() {
        let base: toml::Value = toml::from_str("a = 1\n[t]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[t]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["t"]["x"].as_integer(), Some(1));
        assert_eq!(merged["t"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let value: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config: ResizerConfig = value.try_into().unwrap();
        assert_eq!(config, ResizerConfig::default());
    }
}
