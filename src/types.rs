//! Types written to the manifest file.
//!
//! The JSON shape is consumed by the static catalog front end, so field names
//! and their order are part of the output contract.

use serde::{Deserialize, Serialize};

/// One data file listed in the manifest.
///
/// Serializes as `{"filename": "...", "displayName": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ManifestEntry {
    /// Exact directory entry name, extension included.
    pub filename: String,
    /// Human label: extension stripped, words title-cased.
    pub display_name: String,
}
