//! Command implementations for the `cellar` binary.
//!
//! Each module holds the arguments and the `run` function of one
//! subcommand. Output goes through a [`Printer`] so commands can be run
//! against an in-memory sink.

pub mod add;
pub mod check;
pub mod completions;
pub mod cost;
pub mod list;
pub mod next;

use anyhow::{Context, Result};
use cellar_core::{Printer, StdoutPrinter};
use cellar_loader::{LoadError, LoadResult, Loader};
use clap::{Parser, Subcommand};
use completions::ShellType;
use std::path::Path;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Keep a beer cellar in drinking order.
#[derive(Parser, Debug)]
#[command(name = "cellar", version, about = "Keep a beer cellar in drinking order")]
pub struct Args {
    /// Generate shell completions for the specified shell.
    #[arg(long, value_name = "SHELL")]
    generate_completions: Option<ShellType>,

    /// Show verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every bottle, earliest ready first.
    List(list::ListArgs),
    /// Show the cost of adding a bottle without changing the cellar.
    Cost(cost::CostArgs),
    /// Add a bottle and save the cellar.
    Add(add::AddArgs),
    /// Show the next bottles to drink.
    Next(next::NextArgs),
    /// Report lines that cannot be loaded.
    Check(check::CheckArgs),
}

/// Outcome of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Everything went as asked.
    Success,
    /// The command finished but the cellar did not allow it (missing file,
    /// refused bottle, skipped lines).
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Self::SUCCESS,
            Status::Failure => Self::from(1u8),
        }
    }
}

/// Load a cellar file, turning a missing file into `Ok(None)`.
pub(crate) fn open_cellar(path: &Path, loader: &Loader) -> Result<Option<LoadResult>> {
    match loader.load(path) {
        Ok(result) => Ok(Some(result)),
        Err(LoadError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("cannot open cellar {}", path.display())),
    }
}

/// Run a parsed command line against `out`.
pub fn run(command: &Command, out: &mut dyn Printer) -> Result<Status> {
    match command {
        Command::List(args) => list::run(args, out),
        Command::Cost(args) => cost::run(args, out),
        Command::Add(args) => add::run(args, out),
        Command::Next(args) => next::run(args, out),
        Command::Check(args) => check::run(args, out),
    }
}

/// Main entry point for the `cellar` binary.
pub fn main() -> ExitCode {
    main_with_name("cellar")
}

/// Main entry point with custom binary name.
pub fn main_with_name(bin_name: &str) -> ExitCode {
    let args = Args::parse();

    // Handle shell completion generation
    if let Some(shell) = args.generate_completions {
        completions::generate_completions::<Args>(shell, bin_name);
        return ExitCode::SUCCESS;
    }

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .init();
    }

    let Some(command) = &args.command else {
        eprintln!("error: no command given (try --help)");
        return ExitCode::from(2u8);
    };

    match run(command, &mut StdoutPrinter) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let args = Args::try_parse_from(["cellar", "add", "home.cellar", "1~01/01/16", "--force"])
            .unwrap();
        match args.command {
            Some(Command::Add(add)) => {
                assert_eq!(add.line, "1~01/01/16");
                assert!(add.force);
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let args = Args::try_parse_from(["cellar", "list", "home.cellar", "-v"]).unwrap();
        assert!(args.verbose);
    }
}
