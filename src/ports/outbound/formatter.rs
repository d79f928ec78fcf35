use crate::resolution::domain::ResolutionOutcome;
use crate::shared::Result;

/// LicensePageFormatter port for rendering recorded outcomes
pub trait LicensePageFormatter {
    /// Renders the outcomes as a document
    ///
    /// # Arguments
    /// * `outcomes` - Recorded outcomes, already sorted by package name
    ///
    /// # Returns
    /// The rendered page
    fn format(&self, outcomes: &[ResolutionOutcome]) -> Result<String>;
}
