//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Environment variables, working directory and `PATH` lookup
//! - `fs` - File system queries
//! - `process` - Child process execution

mod env;
mod fs;
mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::env as std_env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

pub use process::ProcessStatus;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn current_dir(&self) -> Result<PathBuf>;

    /// Look up an executable on `PATH`.
    fn which(&self, name: &str) -> Option<PathBuf>;

    // File System
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;

    // Processes
    /// Run `program` with `args` to completion, inheriting stdio.
    /// Only a failure to start the process is an error; a non-zero exit is
    /// reported through the returned status.
    async fn run(&self, program: &Path, args: &[OsString]) -> io::Result<ProcessStatus>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        self.which_impl(name)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    async fn run(&self, program: &Path, args: &[OsString]) -> io::Result<ProcessStatus> {
        self.run_impl(program, args).await
    }
}
