/// ResolveResponse - Summary of a resolution run
///
/// `already_recorded + resolved + fallback + failed == total` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveResponse {
    /// Packages in the input list
    pub total: usize,
    /// Packages skipped because a previous run recorded them
    pub already_recorded: usize,
    /// Packages recorded after a license API lookup
    pub resolved: usize,
    /// Packages recorded from their license hint without an API lookup
    pub fallback: usize,
    /// Packages left unrecorded because failures were suppressed
    pub failed: usize,
}

impl ResolveResponse {
    /// Number of outcomes written during this run
    pub fn recorded(&self) -> usize {
        self.resolved + self.fallback
    }
}
