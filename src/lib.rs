//! # File Manifest
//!
//! Build-time helper for a static data catalog. Lists a directory, keeps the
//! files with a given extension, and writes a JSON manifest the catalog front
//! end loads to know which data files exist and what to call them.
//!
//! ```text
//! data/                    file-list.json
//! ├── sales_report.csv  →  [
//! ├── Q1-Data.CSV            { "filename": "sales_report.csv", "displayName": "Sales_Report" },
//! └── notes.txt              { "filename": "Q1-Data.CSV",      "displayName": "Q1-Data" }
//!                          ]
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists the source directory and builds entries for matching names |
//! | [`generate`] | Runs the scan, serializes with 4-space indentation, writes the file |
//! | [`config`] | Defaults, optional `manifest.toml`, CLI overrides, validation |
//! | [`naming`] | Case-insensitive suffix matching and title-casing of display names |
//! | [`types`] | `ManifestEntry`, the serialized record |
//! | [`output`] | Console output for each command |
//!
//! # Design Decisions
//!
//! ## One Pass, No State
//!
//! Every run rebuilds the manifest from scratch and overwrites the output.
//! There is no cache, no diffing against the previous manifest, and no lock
//! on the output file: two concurrent runs against the same path end with
//! whichever wrote last.
//!
//! ## Listing Order by Default
//!
//! Entries keep the order the operating system returns them in. That order
//! is stable for an unchanged directory on one machine but differs across
//! platforms. Pass `--sort` (or `sort = true`) when the manifest is checked
//! in and must not churn between machines.
//!
//! ## Configuration as a Value
//!
//! The source directory, extension and output path travel together in
//! [`config::ManifestConfig`] and are passed to [`generate::generate`]
//! explicitly. Nothing reads process-wide state, so tests point the
//! generator at temporary directories.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
