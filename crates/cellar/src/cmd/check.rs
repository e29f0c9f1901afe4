//! `cellar check`: report lines the loader has to skip.

use anyhow::Result;
use cellar_core::Printer;
use cellar_loader::Loader;
use std::path::PathBuf;

use super::{open_cellar, Status};

/// Arguments for `cellar check`.
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// The cellar file to check.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Also report bottles whose size conflicts with the same beer.
    #[arg(long)]
    pub strict_sizes: bool,
}

/// Run the check command.
pub fn run(args: &CheckArgs, out: &mut dyn Printer) -> Result<Status> {
    let loader = Loader::new().with_strict_sizes(args.strict_sizes);
    let Some(result) = open_cellar(&args.file, &loader)? else {
        eprintln!("error: no cellar at {}", args.file.display());
        return Ok(Status::Failure);
    };

    let path = args.file.display();
    for skipped in &result.skipped {
        out.println(&format!(
            "{path}:{}: {}: {}",
            skipped.line_number, skipped.reason, skipped.text
        ));
    }
    out.println(&format!(
        "{} bottles loaded, {} lines skipped",
        result.cellar.len(),
        result.skipped.len()
    ));

    Ok(if result.skipped.is_empty() {
        Status::Success
    } else {
        Status::Failure
    })
}
