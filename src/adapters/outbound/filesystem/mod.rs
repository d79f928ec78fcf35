/// Filesystem adapters for file I/O operations
mod file_writer;
mod outcome_store;
mod package_list_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use outcome_store::{CsvOutcomeStore, DEFAULT_OUTPUT_PATH};
pub use package_list_reader::CsvPackageListReader;
