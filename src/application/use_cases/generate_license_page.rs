use crate::ports::outbound::{LicensePageFormatter, OutcomeStore, OutputPresenter};
use crate::resolution::domain::ResolutionOutcome;
use crate::shared::Result;
use std::collections::BTreeMap;

/// GenerateLicensePageUseCase - Renders the recorded outcomes as a page
///
/// # Type Parameters
/// * `OS` - OutcomeStore implementation
/// * `F` - LicensePageFormatter implementation
/// * `OP` - OutputPresenter implementation
pub struct GenerateLicensePageUseCase<OS, F, OP> {
    outcome_store: OS,
    formatter: F,
    presenter: OP,
}

impl<OS, F, OP> GenerateLicensePageUseCase<OS, F, OP>
where
    OS: OutcomeStore,
    F: LicensePageFormatter,
    OP: OutputPresenter,
{
    pub fn new(outcome_store: OS, formatter: F, presenter: OP) -> Self {
        Self {
            outcome_store,
            formatter,
            presenter,
        }
    }

    /// Renders and presents the page
    ///
    /// # Returns
    /// Number of packages on the page
    pub fn execute(&self) -> Result<usize> {
        let outcomes = Self::sorted_by_name(self.outcome_store.load()?);
        let page = self.formatter.format(&outcomes)?;
        self.presenter.present(&page)?;
        Ok(outcomes.len())
    }

    /// Sorts by package name; a name recorded twice keeps its last row
    fn sorted_by_name(outcomes: Vec<ResolutionOutcome>) -> Vec<ResolutionOutcome> {
        outcomes
            .into_iter()
            .map(|outcome| (outcome.name().to_string(), outcome))
            .collect::<BTreeMap<_, _>>()
            .into_values()
            .collect()
    }
}
