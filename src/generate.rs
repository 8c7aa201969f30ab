//! Manifest generation: scan, serialize, write.
//!
//! ```text
//! data/  →  [ManifestEntry]  →  file-list.json
//! ```
//!
//! The output file is only touched after the scan succeeds, so a missing
//! source directory leaves any existing manifest as it was. The write itself
//! replaces the whole file and is not atomic: a failure mid-write can leave a
//! truncated file behind. The output's parent directory is not created.
//!
//! ## JSON Format
//!
//! A pretty-printed array indented by four spaces, UTF-8, no trailing
//! newline. An empty scan writes `[]`.
//!
//! ```json
//! [
//!     {
//!         "filename": "sales_report.csv",
//!         "displayName": "Sales_Report"
//!     }
//! ]
//! ```

use crate::config::ManifestConfig;
use crate::scan::{self, ScanError};
use crate::types::ManifestEntry;
use serde::Serialize;
use serde::ser::Error as _;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write manifest {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a generation run produced.
#[derive(Debug)]
pub struct GenerateReport {
    /// Path the manifest was written to.
    pub output: PathBuf,
    /// Entries in the order they were written.
    pub entries: Vec<ManifestEntry>,
}

/// Serialize entries as a JSON array indented by four spaces.
pub fn to_json(entries: &[ManifestEntry]) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(serde_json::Error::custom)
}

/// Scan the configured source directory and write the manifest.
pub fn generate(config: &ManifestConfig) -> Result<GenerateReport, GenerateError> {
    log::debug!(
        "scanning {} for *{}",
        config.source_dir.display(),
        config.extension
    );
    let entries = scan::scan(&config.source_dir, &config.extension, config.sort)?;
    let json = to_json(&entries)?;

    fs::write(&config.output, json).map_err(|source| GenerateError::Write {
        path: config.output.clone(),
        source,
    })?;
    log::debug!(
        "wrote {} entries to {}",
        entries.len(),
        config.output.display()
    );

    Ok(GenerateReport {
        output: config.output.clone(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn config_for(source: &TempDir, out: &TempDir) -> ManifestConfig {
        ManifestConfig {
            source_dir: source.path().to_path_buf(),
            output: out.path().join("file-list.json"),
            ..Default::default()
        }
    }

    fn entry(filename: &str, display_name: &str) -> ManifestEntry {
        ManifestEntry {
            filename: filename.to_string(),
            display_name: display_name.to_string(),
        }
    }

    #[test]
    fn to_json_empty_is_brackets() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn to_json_uses_four_space_indent() {
        let json = to_json(&[entry("a.csv", "A")]).unwrap();
        assert_eq!(
            json,
            "[\n    {\n        \"filename\": \"a.csv\",\n        \"displayName\": \"A\"\n    }\n]"
        );
    }

    #[test]
    fn to_json_keeps_non_ascii_as_utf8() {
        let json = to_json(&[entry("données.csv", "Données")]).unwrap();
        assert!(json.contains("\"données.csv\""));
        assert!(json.contains("\"Données\""));
    }

    #[test]
    fn to_json_round_trips_multibyte_names_exactly() {
        let entries = vec![entry("straße_ß.csv", "Straße_SS"), entry("日本.csv", "日本")];
        let json = to_json(&entries).unwrap();
        assert!(!json.contains('\u{FFFD}'));
        let parsed: Vec<ManifestEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn generate_writes_fixture_manifest() {
        let source = setup_fixtures();
        let out = TempDir::new().unwrap();
        let config = ManifestConfig {
            sort: true,
            ..config_for(&source, &out)
        };

        let report = generate(&config).unwrap();
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.output, config.output);

        let written = fs::read_to_string(&config.output).unwrap();
        let parsed: Vec<ManifestEntry> = serde_json::from_str(&written).unwrap();
        assert_eq!(
            parsed,
            vec![
                entry("Q1-Data.CSV", "Q1-Data"),
                entry("history.csv", "History"),
                entry("sales_report.csv", "Sales_Report"),
            ]
        );
    }

    #[test]
    fn generate_output_objects_have_exactly_two_string_fields() {
        let source = setup_fixtures();
        let out = TempDir::new().unwrap();
        let config = config_for(&source, &out);
        generate(&config).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&config.output).unwrap()).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        for item in items {
            let obj = item.as_object().unwrap();
            assert_eq!(obj.len(), 2);
            assert!(obj["filename"].is_string());
            assert!(obj["displayName"].is_string());
        }
    }

    #[test]
    fn generate_empty_directory_writes_empty_array() {
        let source = TempDir::new().unwrap();
        write_files(source.path(), &["readme.md"]);
        let out = TempDir::new().unwrap();
        let config = config_for(&source, &out);

        let report = generate(&config).unwrap();
        assert!(report.entries.is_empty());
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "[]");
    }

    #[test]
    fn generate_overwrites_existing_output() {
        let source = TempDir::new().unwrap();
        write_files(source.path(), &["only.csv"]);
        let out = TempDir::new().unwrap();
        let config = config_for(&source, &out);
        let stale = "stale content that is much longer than the new manifest ".repeat(20);
        fs::write(&config.output, stale).unwrap();

        generate(&config).unwrap();
        let parsed: Vec<ManifestEntry> =
            serde_json::from_str(&fs::read_to_string(&config.output).unwrap()).unwrap();
        assert_eq!(parsed, vec![entry("only.csv", "Only")]);
    }

    #[test]
    fn generate_twice_is_byte_identical() {
        let source = setup_fixtures();
        let out = TempDir::new().unwrap();
        let config = config_for(&source, &out);

        generate(&config).unwrap();
        let first = fs::read(&config.output).unwrap();
        generate(&config).unwrap();
        let second = fs::read(&config.output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn generate_missing_source_leaves_output_untouched() {
        let out = TempDir::new().unwrap();
        let config = ManifestConfig {
            source_dir: out.path().join("missing"),
            output: out.path().join("file-list.json"),
            ..Default::default()
        };

        let result = generate(&config);
        assert!(matches!(result, Err(GenerateError::Scan(_))));
        assert!(!config.output.exists());
    }

    #[test]
    fn generate_missing_source_keeps_previous_manifest() {
        let out = TempDir::new().unwrap();
        let config = ManifestConfig {
            source_dir: out.path().join("missing"),
            output: out.path().join("file-list.json"),
            ..Default::default()
        };
        fs::write(&config.output, "[]").unwrap();

        assert!(generate(&config).is_err());
        assert_eq!(fs::read_to_string(&config.output).unwrap(), "[]");
    }

    #[test]
    fn generate_missing_output_parent_is_write_error() {
        let source = setup_fixtures();
        let out = TempDir::new().unwrap();
        let config = ManifestConfig {
            output: out.path().join("no/such/dir/file-list.json"),
            ..config_for(&source, &out)
        };

        match generate(&config) {
            Err(GenerateError::Write { path, .. }) => assert_eq!(path, config.output),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
