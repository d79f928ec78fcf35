use crate::ports::outbound::OutcomeStore;
use crate::resolution::domain::ResolutionOutcome;
use crate::shared::error::AppError;
use crate::shared::security::{validate_not_symlink, validate_regular_file};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// Default location of the resolution report
pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

/// Columns of the report, in order
const REPORT_HEADER: [&str; 3] = ["name", "license", "license_url"];

#[derive(Debug, Serialize, Deserialize)]
struct OutcomeRow {
    name: String,
    license: String,
    #[serde(default)]
    license_url: String,
}

impl From<&ResolutionOutcome> for OutcomeRow {
    fn from(outcome: &ResolutionOutcome) -> Self {
        Self {
            name: outcome.name().to_string(),
            license: outcome.license().to_string(),
            license_url: outcome.license_url().to_string(),
        }
    }
}

/// CsvOutcomeStore adapter for the resolution report
///
/// The report is a UTF-8 CSV file with the columns `name,license,license_url`.
/// Every outcome is appended and flushed as soon as it is recorded, so an
/// interrupted run loses nothing and the next run picks up where it stopped.
///
/// Reports written before the `license_url` column existed are read as-is and
/// rewritten with the full header before anything is appended to them.
pub struct CsvOutcomeStore {
    path: PathBuf,
    writer: Option<csv::Writer<File>>,
}

impl CsvOutcomeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path, writer: None }
    }

    /// Opens the report for appending, writing the header if it is new
    fn writer(&mut self) -> Result<&mut csv::Writer<File>> {
        if self.writer.is_none() {
            validate_not_symlink(&self.path)?;
            let is_new = fs::metadata(&self.path)
                .map(|metadata| metadata.len() == 0)
                .unwrap_or(true);

            if !is_new && !self.has_current_header()? {
                self.upgrade_header()?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(|e| write_error(&self.path, e))?;

            let writer = csv::WriterBuilder::new()
                .has_headers(is_new)
                .from_writer(file);
            self.writer = Some(writer);
        }

        self.writer
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("report writer is not open"))
    }

    fn reader(&self) -> Result<csv::Reader<File>> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| AppError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        Ok(reader)
    }

    fn parse_error(&self, error: csv::Error) -> AppError {
        AppError::ReportParseError {
            path: self.path.clone(),
            line: error.position().map(|p| p.line()).unwrap_or_default(),
            details: error.to_string(),
        }
    }

    fn has_current_header(&self) -> Result<bool> {
        let mut reader = self.reader()?;
        let headers = reader.headers().map_err(|e| self.parse_error(e))?;
        Ok(headers.iter().eq(REPORT_HEADER))
    }

    /// Rewrites an older report under the current header so appended rows line up
    fn upgrade_header(&self) -> Result<()> {
        let outcomes = self.load()?;
        tracing::info!(
            path = %self.path.display(),
            rows = outcomes.len(),
            "adding license_url column to existing report"
        );

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| write_error(&self.path, e))?;
        writer
            .write_record(REPORT_HEADER)
            .map_err(|e| write_error(&self.path, e))?;
        for outcome in &outcomes {
            writer
                .serialize(OutcomeRow::from(outcome))
                .map_err(|e| write_error(&self.path, e))?;
        }
        writer.flush().map_err(|e| write_error(&self.path, e))?;
        Ok(())
    }
}

fn write_error(path: &Path, details: impl std::fmt::Display) -> AppError {
    AppError::FileWriteError {
        path: path.to_path_buf(),
        details: details.to_string(),
    }
}

impl OutcomeStore for CsvOutcomeStore {
    fn load(&self) -> Result<Vec<ResolutionOutcome>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        validate_regular_file(&self.path)?;

        let mut reader = self.reader()?;
        let mut outcomes = Vec::new();
        for result in reader.deserialize::<OutcomeRow>() {
            let row = result.map_err(|e| self.parse_error(e))?;
            outcomes.push(ResolutionOutcome::new(row.name, row.license, row.license_url));
        }
        Ok(outcomes)
    }

    fn record(&mut self, outcome: &ResolutionOutcome) -> Result<()> {
        let row = OutcomeRow::from(outcome);

        let path = self.path.clone();
        let writer = self.writer()?;
        writer.serialize(&row).map_err(|e| write_error(&path, e))?;
        writer.flush().map_err(|e| write_error(&path, e))?;
        Ok(())
    }
}
