//! Generator configuration.
//!
//! The generator needs three things: where to look, what suffix to keep, and
//! where to write. All of them have defaults, so running the binary bare
//! scans `data/` for `.csv` files and writes `file-list.json`.
//!
//! ## Layering
//!
//! ```text
//! stock defaults  →  manifest.toml (optional)  →  CLI flags
//! ```
//!
//! Each layer overrides the one before it. The TOML layer is sparse: set only
//! what you want to change.
//!
//! ```toml
//! source_dir = "catalog/data"
//! extension = ".tsv"
//! sort = true
//! ```
//!
//! Environment variables are never consulted.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "manifest.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything the generator needs for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Directory whose entries are listed (non-recursive).
    pub source_dir: PathBuf,
    /// Manifest file, overwritten on every run.
    pub output: PathBuf,
    /// Suffix a file name must end with, compared case-insensitively.
    pub extension: String,
    /// Sort entries by filename instead of keeping listing order.
    pub sort: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("data"),
            output: PathBuf::from("file-list.json"),
            extension: ".csv".to_string(),
            sort: false,
        }
    }
}

impl ManifestConfig {
    /// Check values and normalize the extension to carry a leading dot.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let ext = self.extension.trim();
        if ext.is_empty() || ext == "." {
            return Err(ConfigError::Validation(
                "extension must not be empty".into(),
            ));
        }
        self.extension = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{ext}")
        };
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        Ok(self)
    }

    /// Apply CLI overrides and re-validate.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(dir) = overrides.source_dir {
            self.source_dir = dir;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(ext) = overrides.extension {
            self.extension = ext;
        }
        if let Some(sort) = overrides.sort {
            self.sort = sort;
        }
        self.validate()
    }
}

/// Overrides taken from the command line. `None` keeps the loaded value.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub source_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub extension: Option<String>,
    pub sort: Option<bool>,
}

/// Returns the stock defaults as a TOML table, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    let config = ManifestConfig::default();
    let mut table = toml::Table::new();
    table.insert(
        "source_dir".into(),
        toml::Value::String(config.source_dir.to_string_lossy().into_owned()),
    );
    table.insert(
        "output".into(),
        toml::Value::String(config.output.to_string_lossy().into_owned()),
    );
    table.insert("extension".into(), toml::Value::String(config.extension));
    table.insert("sort".into(), toml::Value::Boolean(config.sort));
    toml::Value::Table(table)
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
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
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto `base`, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ManifestConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ManifestConfig = merged.try_into()?;
    config.validate()
}

/// Load config from the file at `path`, falling back to defaults when the
/// file is absent. Unknown keys are rejected.
pub fn load_config(path: &Path) -> Result<ManifestConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    resolve_config(stock_defaults_value(), overlay)
}

/// Fully commented stock `manifest.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# File Manifest Configuration
# ===========================
#
# Place this file as manifest.toml in the directory you run the generator
# from. Every key is optional; the values below are the defaults.
# Command-line flags override anything set here.

# Directory to list. Only its direct entries are considered.
source_dir = "data"

# Manifest file to write. Existing content is replaced on every run.
# The parent directory must already exist.
output = "file-list.json"

# Suffix a name must end with to be listed, compared case-insensitively.
# A missing leading dot is added ("csv" means ".csv").
extension = ".csv"

# Sort entries by filename. When false, entries keep the order the
# operating system lists them in, which can differ between platforms.
sort = false
"#
}
