use crate::manager::InstallError;
use crate::package::PackageSpec;

/// How the individual install path reacts to a failed package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failure; later packages are not attempted.
    #[default]
    FailFast,
    /// Attempt every package and collect all failures.
    KeepGoing,
}

/// Result of installing packages one at a time.
#[derive(Debug, Default)]
pub struct FallbackReport {
    pub installed: Vec<PackageSpec>,
    pub failed: Vec<(PackageSpec, InstallError)>,
    /// Packages never attempted because an earlier one failed.
    pub skipped: Vec<PackageSpec>,
}

impl FallbackReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

/// Which path finished the orchestration, and how.
#[derive(Debug)]
pub enum Outcome {
    /// Everything came from the manifest in one invocation.
    Manifest,
    /// The individual install path ran.
    Individual(FallbackReport),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Manifest => true,
            Outcome::Individual(report) => report.is_success(),
        }
    }
}
