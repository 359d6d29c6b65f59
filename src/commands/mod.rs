use anyhow::Result;
use log::debug;

use crate::{
    installer::{Orchestrator, Outcome},
    manager::Pip,
    runtime::Runtime,
};

pub mod config;

use config::{Config, InstallOptions};

/// Install the RAG ingestion dependencies, from the manifest or package by package.
#[tracing::instrument(skip(runtime))]
pub async fn install<R: Runtime>(runtime: R, options: InstallOptions) -> Result<Outcome> {
    let config = Config::new(runtime, options)?;
    Ok(run(&config).await)
}

#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime>(config: &Config<R>) -> Outcome {
    let pip = Pip::new(&config.runtime, config.python.clone(), config.frontend.clone());
    debug!("Installing into {}", pip.python().display());

    let orchestrator = Orchestrator::new(
        &config.runtime,
        &pip,
        config.manifest.clone(),
        &config.packages,
        config.policy,
    );
    orchestrator.run().await
}

/// Print the packages the individual install path would install, in order.
#[tracing::instrument(skip(runtime))]
pub fn list<R: Runtime>(runtime: R, options: InstallOptions) -> Result<()> {
    let config = Config::new(runtime, options)?;
    if config.packages.is_empty() {
        println!("No packages configured.");
        return Ok(());
    }
    for spec in &config.packages {
        println!("{}", spec);
    }
    Ok(())
}
