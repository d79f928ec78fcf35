/// Shared helpers for integration tests
pub mod mocks;

use std::fs;
use std::path::{Path, PathBuf};

/// Header line of a package list export
pub const PACKAGE_LIST_HEADER: &str =
    "module name,version,directory,repository,summary,from package.json,from license,from readme\n";

/// Writes a UTF-8 package list with the given data rows
pub fn write_package_list(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("packages.csv");
    let mut content = PACKAGE_LIST_HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}
