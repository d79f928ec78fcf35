use crate::ports::outbound::PackageListReader;
use crate::resolution::domain::{PackageName, PackageRecord};
use crate::shared::error::AppError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use encoding_rs::Encoding;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Minimum number of fields per record
const MIN_FIELDS: usize = 8;

const NAME_FIELD: usize = 0;
const REPO_FIELD: usize = 3;
/// License from package.json, from the license file, from the readme
const HINT_FIELDS: [usize; 3] = [5, 6, 7];

/// CsvPackageListReader adapter for the exported package list
///
/// The list is a CSV file with a header line and at least eight fields per
/// record: name, version, directory, repository, summary and three license
/// columns. Extra fields are ignored.
///
/// Rows sharing a name are merged into a single record.
pub struct CsvPackageListReader;

impl CsvPackageListReader {
    pub fn new() -> Self {
        Self
    }

    /// Maps a label such as `utf16` to an encoding
    ///
    /// Labels without the dash after `utf` are accepted as well.
    fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
        let normalized = label.trim().to_ascii_lowercase();
        let normalized = match normalized.strip_prefix("utf") {
            Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => format!("utf-{}", rest),
            _ => normalized,
        };

        Encoding::for_label(normalized.as_bytes()).ok_or_else(|| {
            AppError::UnknownEncoding {
                label: label.to_string(),
            }
            .into()
        })
    }

    /// Decodes the file content; a byte-order mark overrides the label
    fn decode(path: &Path, bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
        let (text, used, had_errors) = encoding.decode(bytes);
        if had_errors {
            return Err(AppError::FileReadError {
                path: path.to_path_buf(),
                details: format!("File is not valid {}", used.name()),
            }
            .into());
        }
        if used != encoding {
            tracing::debug!(
                path = %path.display(),
                label = encoding.name(),
                detected = used.name(),
                "byte order mark overrides configured encoding"
            );
        }
        Ok(text.into_owned())
    }

    fn parse(path: &Path, text: &str) -> Result<Vec<PackageRecord>> {
        let parse_error = |line: u64, details: String| AppError::InputParseError {
            path: path.to_path_buf(),
            line,
            details,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut packages: BTreeMap<PackageName, PackageRecord> = BTreeMap::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                parse_error(line, e.to_string())
            })?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            if record.len() < MIN_FIELDS {
                return Err(parse_error(
                    line,
                    format!(
                        "Expected at least {} fields, found {}",
                        MIN_FIELDS,
                        record.len()
                    ),
                )
                .into());
            }

            let name = match PackageName::new(record[NAME_FIELD].trim().to_string()) {
                Ok(name) => name,
                Err(e) => {
                    tracing::warn!(line, error = %e, "skipping package row with unusable name");
                    continue;
                }
            };
            let hints = HINT_FIELDS
                .iter()
                .map(|&index| record[index].to_string())
                .collect();
            let package = PackageRecord::new(name.clone(), record[REPO_FIELD].to_string(), hints);

            match packages.get_mut(&name) {
                Some(existing) => {
                    tracing::debug!(package = %name, line, "merging duplicate package row");
                    existing.merge(package);
                }
                None => {
                    packages.insert(name, package);
                }
            }
        }

        Ok(packages.into_values().collect())
    }
}

impl Default for CsvPackageListReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageListReader for CsvPackageListReader {
    fn read_packages(&self, path: &Path, encoding: &str) -> Result<Vec<PackageRecord>> {
        let encoding = Self::resolve_encoding(encoding)?;
        validate_regular_file(path)?;

        let bytes = fs::read(path).map_err(|e| AppError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let text = Self::decode(path, &bytes, encoding)?;
        let packages = Self::parse(path, &text)?;
        tracing::debug!(path = %path.display(), packages = packages.len(), "read package list");
        Ok(packages)
    }
}
