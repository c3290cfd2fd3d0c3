//! Expansion file alignment
//!
//! OBB expansion files are configured as a single pipe-separated string whose
//! entries positionally match the selected app binaries. Unlike the app list
//! grammar, empty entries are kept: `main:a.obb||patch:c.obb` deliberately
//! leaves the second APK without an expansion file. Entries carry a role
//! prefix (`main:` or `patch:`) by convention; that internal structure is the
//! upload API's business, not validated here.

use crate::error::{PlayprepError, Result};

/// Align the raw expansion file configuration against the selected apps.
///
/// An empty (or whitespace-only) configuration yields no entries regardless
/// of how many apps were selected. Otherwise the entry count must equal the
/// app count, empty slots included.
pub fn expansion_file_entries(app_paths: &[String], raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    // Pipe only, empties preserved: a narrower grammar than the app list
    let entries: Vec<String> = raw.split('|').map(str::to_string).collect();

    if entries.len() != app_paths.len() {
        return Err(PlayprepError::ExpansionCountMismatch {
            apps: app_paths.len(),
            entries: entries.len(),
        });
    }

    Ok(entries)
}
