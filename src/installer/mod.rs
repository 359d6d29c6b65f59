//! Install orchestration.
//!
//! Two strategies, tried in order:
//! 1. the requirements manifest, installed in a single package manager call;
//! 2. the configured package list, installed one package at a time.
//!
//! The second runs only when the manifest is absent or its install fails.

mod outcome;

use log::{debug, info};
use std::path::PathBuf;

use crate::manager::{InstallError, PackageManager};
use crate::package::PackageList;
use crate::runtime::Runtime;

pub use outcome::{FailurePolicy, FallbackReport, Outcome};

pub struct Orchestrator<'a, R: Runtime, M: PackageManager> {
    runtime: &'a R,
    manager: &'a M,
    manifest: PathBuf,
    packages: &'a PackageList,
    policy: FailurePolicy,
}

impl<'a, R: Runtime, M: PackageManager> Orchestrator<'a, R, M> {
    pub fn new(
        runtime: &'a R,
        manager: &'a M,
        manifest: PathBuf,
        packages: &'a PackageList,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            runtime,
            manager,
            manifest,
            packages,
            policy,
        }
    }

    /// Install from the manifest when it exists, falling back to the package list.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) -> Outcome {
        println!("Setting up RAG ingestion dependencies...");

        if self.runtime.exists(&self.manifest) {
            if self.install_requirements().await {
                return Outcome::Manifest;
            }
        } else {
            info!(
                "{} does not exist, skipping manifest install",
                self.manifest.display()
            );
        }

        println!("Falling back to individual package installation...");
        Outcome::Individual(self.install_individual_packages().await)
    }

    /// Install everything the manifest lists. Returns whether it succeeded.
    #[tracing::instrument(skip(self))]
    pub async fn install_requirements(&self) -> bool {
        println!("  installing dependencies from {}", self.manifest.display());

        match self.manager.install_from_manifest(&self.manifest).await {
            Ok(()) => {
                println!("   installed dependencies from {}", self.manifest.display());
                true
            }
            Err(e) => {
                eprintln!("{}", manifest_failure_message(&e));
                false
            }
        }
    }

    /// Install each package of the list in order, applying the failure policy.
    #[tracing::instrument(skip(self))]
    pub async fn install_individual_packages(&self) -> FallbackReport {
        let mut report = FallbackReport::default();
        debug!(
            "Installing {} package(s) individually ({:?})",
            self.packages.len(),
            self.policy
        );

        for (index, spec) in self.packages.iter().enumerate() {
            println!("  installing {}", spec);
            match self.manager.install(spec).await {
                Ok(()) => {
                    report.installed.push(spec.clone());
                }
                Err(e) => {
                    eprintln!("      failed {}: {}", spec, e);
                    report.failed.push((spec.clone(), e));

                    if self.policy == FailurePolicy::FailFast {
                        report
                            .skipped
                            .extend(self.packages.iter().skip(index + 1).cloned());
                        break;
                    }
                }
            }
        }

        if report.is_success() {
            println!("All {} packages installed successfully", report.installed.len());
        } else {
            for spec in &report.skipped {
                println!("     skipped {}", spec);
            }
            eprintln!(
                "{} of {} packages failed to install",
                report.failed.len(),
                self.packages.len()
            );
        }

        report
    }
}

fn manifest_failure_message(err: &InstallError) -> String {
    match err {
        InstallError::ManifestMissing(_) => err.to_string(),
        _ => format!("Error installing dependencies: {}", err),
    }
}
