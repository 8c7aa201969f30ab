//! Filename handling for manifest entries.
//!
//! Two pieces of text logic decide what ends up in the manifest:
//!
//! - **Suffix matching**: a name qualifies when it ends with the configured
//!   extension, compared case-insensitively (`Q1-Data.CSV` matches `.csv`).
//! - **Display names**: the matched suffix is cut off the end (once, whatever
//!   its case) and the remainder is title-cased.
//!
//! ## Title Case
//!
//! A word is a maximal run of alphanumeric characters; every other character
//! is a separator and is kept as-is. The first character of each word is
//! upper-cased and the rest of the word lower-cased:
//!
//! - `sales_report` → "Sales_Report"
//! - `Q1-Data` → "Q1-Data"
//! - `annual REPORT 2024` → "Annual Report 2024"
//! - `1st-quarter` → "1st-Quarter"
//!
//! This is not locale-aware and uses full upper-case mappings, not title-case
//! ones. A word-initial character whose upper case expands keeps the whole
//! expansion: `ß_x` → "SS_X", not "Ss_X". Inside a word `ß` is lower case
//! already and stays as it is (`straße` → "Straße").

/// Return `name` without a trailing `suffix`, matching case-insensitively.
///
/// Returns `None` when `name` does not end with `suffix`. Exactly one
/// occurrence is removed, and the kept part retains its original case.
///
/// - `("Q1-Data.CSV", ".csv")` → `Some("Q1-Data")`
/// - `("data.csv.csv", ".csv")` → `Some("data.csv")`
/// - `("notes.txt", ".csv")` → `None`
pub fn strip_suffix_ignore_case<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    let suffix_chars = suffix.chars().count();
    if suffix_chars == 0 {
        return Some(name);
    }
    let split_at = match name.char_indices().rev().nth(suffix_chars - 1) {
        Some((idx, _)) => idx,
        None => return None,
    };
    let (stem, tail) = name.split_at(split_at);
    if tail.to_lowercase() == suffix.to_lowercase() {
        Some(stem)
    } else {
        None
    }
}

/// Whether `name` ends with `suffix`, ignoring case.
pub fn matches_suffix(name: &str, suffix: &str) -> bool {
    strip_suffix_ignore_case(name, suffix).is_some()
}

/// Title-case `text`: upper-case the first character of every alphanumeric
/// run, lower-case the rest, and keep separators untouched.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Derive the display name for a file that matched `suffix`.
///
/// Falls back to title-casing the whole name when the suffix is absent, so
/// the function is total.
pub fn display_name(filename: &str, suffix: &str) -> String {
    let stem = strip_suffix_ignore_case(filename, suffix).unwrap_or(filename);
    title_case(stem)
}
