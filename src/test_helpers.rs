//! Shared test utilities.
//!
//! Fixture setup plus lookup helpers over scanned entries.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let entries = scan(tmp.path(), ".csv", true).unwrap();
//! assert_eq!(find_entry(&entries, "history.csv").display_name, "History");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::ManifestEntry;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/data/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/data");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Create empty files (and any parent directories) under `root`.
pub fn write_files(root: &Path, names: &[&str]) {
    for name in names {
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "").unwrap();
    }
}

// =========================================================================
// Entry lookups — panics with a clear message on miss
// =========================================================================

/// Find an entry by filename. Panics if not found.
pub fn find_entry<'a>(entries: &'a [ManifestEntry], filename: &str) -> &'a ManifestEntry {
    entries
        .iter()
        .find(|e| e.filename == filename)
        .unwrap_or_else(|| {
            let names = filenames(entries);
            panic!("entry '{filename}' not found. Available: {names:?}")
        })
}

/// All filenames, in manifest order.
pub fn filenames(entries: &[ManifestEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.filename.as_str()).collect()
}
