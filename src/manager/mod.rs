//! Package manager abstraction.
//!
//! `PackageManager` is the capability the installer needs from pip-like
//! tools: install one package, or install everything a manifest lists.
//! `Pip` implements it on top of a [`Runtime`](crate::runtime::Runtime).

mod error;
mod pip;

use async_trait::async_trait;
use std::path::Path;

use crate::package::PackageSpec;

pub use error::InstallError;
pub use pip::{Frontend, Pip};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Install a single package specification.
    async fn install(&self, spec: &PackageSpec) -> Result<(), InstallError>;

    /// Install every package listed in a requirements manifest.
    async fn install_from_manifest(&self, manifest: &Path) -> Result<(), InstallError>;
}
