use anyhow::Result;
use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    installer::FailurePolicy,
    manager::Frontend,
    package::PackageList,
    runtime::Runtime,
};

pub const DEFAULT_MANIFEST: &str = "requirements.txt";

const FALLBACK_PYTHON: &str = "python3";

/// Which program drives the installs.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontendKind {
    #[default]
    Pip,
    Uv,
}

/// User-facing options, before resolution against the environment.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub manifest: PathBuf,
    pub python: Option<PathBuf>,
    pub frontend: FrontendKind,
    pub packages_file: Option<PathBuf>,
    pub keep_going: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            python: None,
            frontend: FrontendKind::default(),
            packages_file: None,
            keep_going: false,
        }
    }
}

pub struct Config<R: Runtime> {
    pub runtime: R,
    pub manifest: PathBuf,
    pub python: PathBuf,
    pub frontend: Frontend,
    pub packages: PackageList,
    pub policy: FailurePolicy,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, options: InstallOptions) -> Result<Self> {
        let manifest = if options.manifest.is_absolute() {
            options.manifest
        } else {
            runtime.current_dir()?.join(options.manifest)
        };

        let python = match options.python {
            Some(python) => python,
            None => default_python(&runtime),
        };

        let frontend = match options.frontend {
            FrontendKind::Pip => Frontend::Pip,
            FrontendKind::Uv => {
                Frontend::Uv(runtime.which("uv").unwrap_or_else(|| PathBuf::from("uv")))
            }
        };

        let packages = match &options.packages_file {
            Some(path) => PackageList::load(&runtime, path)?,
            None => PackageList::rag_ingestion(),
        };

        let policy = if options.keep_going {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::FailFast
        };

        debug!(
            "Using manifest {:?}, python {:?}, frontend {:?}, {} fallback package(s)",
            manifest,
            python,
            frontend,
            packages.len()
        );

        Ok(Self {
            runtime,
            manifest,
            python,
            frontend,
            packages,
            policy,
        })
    }
}

/// The interpreter to install into when none was given explicitly:
/// the active virtualenv, then `python3` / `python` on `PATH`.
#[tracing::instrument(skip(runtime))]
pub fn default_python<R: Runtime>(runtime: &R) -> PathBuf {
    if let Ok(venv) = runtime.env_var("VIRTUAL_ENV") {
        let python = venv_python(Path::new(&venv));
        if runtime.exists(&python) {
            debug!("Using virtualenv interpreter {:?}", python);
            return python;
        }
    }

    ["python3", "python"]
        .iter()
        .find_map(|name| runtime.which(name))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_PYTHON))
}

#[cfg(not(windows))]
fn venv_python(venv: &Path) -> PathBuf {
    venv.join("bin").join("python")
}

#[cfg(windows)]
fn venv_python(venv: &Path) -> PathBuf {
    venv.join("Scripts").join("python.exe")
}
