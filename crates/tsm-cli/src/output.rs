//! Output file naming.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y_%m_%d-%H_%M_%S";

/// `dir/script.txt` → `dir/script_2023_01_15-10_30_00.txt`.
pub fn timestamped_path(input: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = input
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_{}{ext}", now.format(TIMESTAMP_FORMAT)))
}
