//! Input discovery: first filename containing a literal substring.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Find the first file in `dir` whose name contains `pattern` as a
/// literal substring — no glob or regex semantics. Names are scanned
/// in sorted order so the first match is deterministic.
pub fn find_file(dir: &Path, pattern: &str) -> io::Result<Option<PathBuf>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();

    Ok(names
        .into_iter()
        .find(|name| name.contains(pattern))
        .map(|name| dir.join(name)))
}
