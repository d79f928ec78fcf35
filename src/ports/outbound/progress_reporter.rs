/// ProgressReporter port for reporting progress during a resolution run
///
/// Implementations write to stderr (or capture messages in tests) so the
/// report written to stdout is never interleaved with progress output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many packages have been handled so far
    ///
    /// # Arguments
    /// * `current` - Packages handled, including skipped ones
    /// * `total` - Packages in the input list
    /// * `message` - Optional detail, usually the package being resolved
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop the run
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
