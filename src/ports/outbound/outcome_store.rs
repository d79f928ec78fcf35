use crate::resolution::domain::ResolutionOutcome;
use crate::shared::Result;
use std::collections::HashSet;

/// OutcomeStore port for the resolution report
///
/// The store is append-only: an outcome, once recorded, is never rewritten.
pub trait OutcomeStore {
    /// Loads every outcome recorded so far, in file order
    fn load(&self) -> Result<Vec<ResolutionOutcome>>;

    /// Names of packages that already have an outcome
    fn recorded_names(&self) -> Result<HashSet<String>> {
        Ok(self
            .load()?
            .into_iter()
            .map(|outcome| outcome.name().to_string())
            .collect())
    }

    /// Appends one outcome and makes it durable before returning
    fn record(&mut self, outcome: &ResolutionOutcome) -> Result<()>;
}
