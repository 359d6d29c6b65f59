use async_trait::async_trait;
use log::debug;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{InstallError, PackageManager};
use crate::package::PackageSpec;
use crate::runtime::Runtime;

/// Program used to drive pip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frontend {
    /// `<python> -m pip install ...`
    Pip,
    /// `<uv> pip install --python <python> ...`
    Uv(PathBuf),
}

/// Installs packages into a Python interpreter's environment.
pub struct Pip<'a, R: Runtime> {
    runtime: &'a R,
    python: PathBuf,
    frontend: Frontend,
}

impl<'a, R: Runtime> Pip<'a, R> {
    pub fn new(runtime: &'a R, python: PathBuf, frontend: Frontend) -> Self {
        Self {
            runtime,
            python,
            frontend,
        }
    }

    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Build the program and arguments for `pip install <install_args>`.
    /// Paths are passed through as `OsString`, so non-UTF-8 paths survive.
    fn command(&self, install_args: Vec<OsString>) -> (PathBuf, Vec<OsString>) {
        match &self.frontend {
            Frontend::Pip => {
                let mut args: Vec<OsString> = vec!["-m".into(), "pip".into(), "install".into()];
                args.extend(install_args);
                (self.python.clone(), args)
            }
            Frontend::Uv(uv) => {
                let mut args: Vec<OsString> = vec![
                    "pip".into(),
                    "install".into(),
                    "--python".into(),
                    self.python.clone().into_os_string(),
                ];
                args.extend(install_args);
                (uv.clone(), args)
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn pip_install(&self, install_args: Vec<OsString>) -> Result<(), InstallError> {
        let (program, args) = self.command(install_args);
        let command = std::iter::once(program.as_os_str())
            .chain(args.iter().map(OsString::as_os_str))
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        debug!("Running: {}", command);

        match self.runtime.run(&program, &args).await {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => Err(InstallError::Failed {
                command,
                code: status.code,
            }),
            Err(source) => Err(InstallError::Spawn { command, source }),
        }
    }
}

#[async_trait]
impl<R: Runtime> PackageManager for Pip<'_, R> {
    #[tracing::instrument(skip(self))]
    async fn install(&self, spec: &PackageSpec) -> Result<(), InstallError> {
        self.pip_install(vec![spec.to_string().into()]).await
    }

    #[tracing::instrument(skip(self))]
    async fn install_from_manifest(&self, manifest: &Path) -> Result<(), InstallError> {
        if !self.runtime.is_file(manifest) {
            return Err(InstallError::ManifestMissing(manifest.to_path_buf()));
        }
        self.pip_install(vec!["-r".into(), manifest.as_os_str().to_owned()])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, ProcessStatus};
    use std::io;

    fn python() -> PathBuf {
        PathBuf::from("/venv/bin/python")
    }

    #[tokio::test]
    async fn test_install_single_package_with_pip() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run()
            .withf(|program, args| {
                program == Path::new("/venv/bin/python")
                    && args == ["-m", "pip", "install", "openai>=1.0.0"]
            })
            .times(1)
            .returning(|_, _| Ok(ProcessStatus::from_code(0)));

        let pip = Pip::new(&runtime, python(), Frontend::Pip);
        let result = pip.install(&PackageSpec::new("openai", "1.0.0")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_install_from_manifest_with_pip() {
        let manifest = PathBuf::from("/work/requirements.txt");
        let mut runtime = MockRuntime::new();
        runtime.expect_is_file().returning(|_| true);
        runtime
            .expect_run()
            .withf(|program, args| {
                program == Path::new("/venv/bin/python")
                    && args == ["-m", "pip", "install", "-r", "/work/requirements.txt"]
            })
            .times(1)
            .returning(|_, _| Ok(ProcessStatus::from_code(0)));

        let pip = Pip::new(&runtime, python(), Frontend::Pip);
        assert!(pip.install_from_manifest(&manifest).await.is_ok());
    }

    #[tokio::test]
    async fn test_install_with_uv_frontend() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run()
            .withf(|program, args| {
                program == Path::new("/usr/bin/uv")
                    && args
                        == [
                            "pip",
                            "install",
                            "--python",
                            "/venv/bin/python",
                            "tqdm>=4.65.0",
                        ]
            })
            .times(1)
            .returning(|_, _| Ok(ProcessStatus::from_code(0)));

        let pip = Pip::new(&runtime, python(), Frontend::Uv(PathBuf::from("/usr/bin/uv")));
        assert!(pip.install(&PackageSpec::new("tqdm", "4.65.0")).await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_paths_reach_the_process_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let python = PathBuf::from(OsStr::from_bytes(b"/venv-\xff/bin/python"));
        let manifest = PathBuf::from(OsStr::from_bytes(b"/work/req-\xfe.txt"));
        let expected_python = python.clone().into_os_string();
        let expected_manifest = manifest.clone().into_os_string();

        let mut runtime = MockRuntime::new();
        runtime.expect_is_file().returning(|_| true);
        runtime
            .expect_run()
            .withf(move |program, args| {
                program == Path::new("/usr/bin/uv")
                    && args[3] == expected_python
                    && args[4] == "-r"
                    && args[5] == expected_manifest
            })
            .times(1)
            .returning(|_, _| Ok(ProcessStatus::from_code(0)));

        let pip = Pip::new(&runtime, python, Frontend::Uv(PathBuf::from("/usr/bin/uv")));
        assert!(pip.install_from_manifest(&manifest).await.is_ok());
    }

    #[tokio::test]
    async fn test_manifest_missing_skips_invocation() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_file().returning(|_| false);
        runtime.expect_run().never();

        let pip = Pip::new(&runtime, python(), Frontend::Pip);
        let err = pip
            .install_from_manifest(Path::new("requirements.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::ManifestMissing(p) if p == Path::new("requirements.txt")));
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_failure() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run()
            .returning(|_, _| Ok(ProcessStatus::from_code(1)));

        let pip = Pip::new(&runtime, python(), Frontend::Pip);
        let err = pip
            .install(&PackageSpec::new("chromadb", "0.4.0"))
            .await
            .unwrap_err();
        match err {
            InstallError::Failed { command, code } => {
                assert_eq!(command, "/venv/bin/python -m pip install chromadb>=0.4.0");
                assert_eq!(code, Some(1));
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_error_is_failure() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_run()
            .returning(|_, _| Err(io::Error::new(io::ErrorKind::NotFound, "not found")));

        let pip = Pip::new(&runtime, python(), Frontend::Pip);
        let err = pip
            .install(&PackageSpec::new("numpy", "1.24.0"))
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::Spawn { .. }));
    }
}
