use anyhow::Result;
use clap::Parser;
use rag_deps::commands::{
    self,
    config::{DEFAULT_MANIFEST, FrontendKind, InstallOptions},
};
use rag_deps::installer::Outcome;
use std::path::PathBuf;
use std::process::ExitCode;

/// rag-deps - RAG ingestion dependency installer
///
/// Installs the Python packages of the RAG ingestion pipeline. When
/// requirements.txt exists in the current directory it is installed with a
/// single pip call; otherwise, or if that fails, each package of the
/// built-in list is installed in turn.
///
/// Examples:
///   rag-deps                        # Install into the active interpreter
///   rag-deps --python .venv/bin/python --frontend uv
#[derive(Parser, Debug)]
#[command(author, version = env!("RAG_DEPS_VERSION"), about)]
struct Cli {
    /// Requirements manifest to try first
    #[arg(
        long,
        short = 'r',
        env = "RAG_DEPS_MANIFEST",
        value_name = "PATH",
        default_value = DEFAULT_MANIFEST
    )]
    manifest: PathBuf,

    /// Python interpreter to install into (defaults to the active virtualenv or python3 on PATH)
    #[arg(long, env = "RAG_DEPS_PYTHON", value_name = "PATH")]
    python: Option<PathBuf>,

    /// Program that performs the installs
    #[arg(long, value_enum, default_value_t = FrontendKind::Pip)]
    frontend: FrontendKind,

    /// JSON file replacing the built-in package list: {"packages": ["name>=version", ...]}
    #[arg(long = "packages", value_name = "FILE")]
    packages_file: Option<PathBuf>,

    /// Keep installing the remaining packages after one fails
    #[arg(long)]
    keep_going: bool,

    /// Exit with a non-zero status when the installation fails (by default the exit status is 0)
    #[arg(long)]
    strict: bool,

    /// Print the fallback package list and exit
    #[arg(long)]
    list: bool,
}

impl From<Cli> for InstallOptions {
    fn from(cli: Cli) -> Self {
        InstallOptions {
            manifest: cli.manifest,
            python: cli.python,
            frontend: cli.frontend,
            packages_file: cli.packages_file,
            keep_going: cli.keep_going,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = rag_deps::runtime::RealRuntime;

    if cli.list {
        commands::list(runtime, cli.into())?;
        return Ok(ExitCode::SUCCESS);
    }

    let strict = cli.strict;
    let outcome = commands::install(runtime, cli.into()).await?;
    Ok(exit_code(&outcome, strict))
}

/// Failures are reported on the console; only `--strict` turns them into an exit status.
fn exit_code(outcome: &Outcome, strict: bool) -> ExitCode {
    if strict && !outcome.is_success() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
