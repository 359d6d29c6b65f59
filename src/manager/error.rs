use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstallError {
    #[error("{} not found", .0.display())]
    ManifestMissing(PathBuf),

    #[error("command `{command}` {}", describe_exit(.code))]
    Failed { command: String, code: Option<i32> },

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("returned non-zero exit status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
