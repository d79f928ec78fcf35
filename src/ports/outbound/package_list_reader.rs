use crate::resolution::domain::PackageRecord;
use crate::shared::Result;
use std::path::Path;

/// PackageListReader port for loading the input package list
pub trait PackageListReader {
    /// Reads every package from the list at `path`
    ///
    /// # Arguments
    /// * `path` - Location of the package list
    /// * `encoding` - Text encoding label of the file (e.g. `utf-16`)
    ///
    /// # Returns
    /// One record per distinct package name, sorted by name
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the encoding is unknown,
    /// or a record is malformed
    fn read_packages(&self, path: &Path, encoding: &str) -> Result<Vec<PackageRecord>>;
}
