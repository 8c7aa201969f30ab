//! Directory listing and entry filtering.
//!
//! Lists the direct entries of the source directory, keeps the ones whose
//! name ends with the configured extension (case-insensitive), and derives a
//! display name for each.
//!
//! ```text
//! data/
//! ├── sales_report.csv   →  { "filename": "sales_report.csv", "displayName": "Sales_Report" }
//! ├── Q1-Data.CSV        →  { "filename": "Q1-Data.CSV",      "displayName": "Q1-Data" }
//! └── notes.txt          →  (skipped)
//! ```
//!
//! Entries are not filtered by type: a subdirectory named `archive.csv` is
//! listed like a file. Nothing below the source directory is visited.
//!
//! ## Ordering
//!
//! Without `sort`, entries come out in the order the operating system lists
//! them, which is not guaranteed to be stable across platforms or
//! filesystems. With `sort`, entries are ordered by filename.

use crate::naming;
use crate::types::ManifestEntry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List `dir` and build manifest entries for names ending in `extension`.
pub fn scan(dir: &Path, extension: &str, sort: bool) -> Result<Vec<ManifestEntry>, ScanError> {
    let read_dir_err = |source: std::io::Error| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let dir_entry = dir_entry.map_err(read_dir_err)?;
        let os_name = dir_entry.file_name();
        let Some(name) = os_name.to_str() else {
            log::warn!(
                "skipping entry with non UTF-8 name: {}",
                os_name.to_string_lossy()
            );
            continue;
        };
        if !naming::matches_suffix(name, extension) {
            log::debug!("skip {name}");
            continue;
        }
        let entry = ManifestEntry {
            filename: name.to_string(),
            display_name: naming::display_name(name, extension),
        };
        log::debug!("keep {} as \"{}\"", entry.filename, entry.display_name);
        entries.push(entry);
    }

    if sort {
        entries.sort_by(|a, b| a.filename.cmp(&b.filename));
    }

    Ok(entries)
}
