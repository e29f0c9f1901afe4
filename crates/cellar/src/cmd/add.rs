//! `cellar add`: add a bottle and save the cellar.

use anyhow::{Context, Result};
use cellar_core::{Beer, Cellar, Printer};
use cellar_loader::{write_cellar, Loader};
use std::path::PathBuf;
use tracing::debug;

use super::cost::describe;
use super::{open_cellar, Status};

/// Arguments for `cellar add`.
#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// The cellar file. It is created if it does not exist.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// The bottle to add, as `code~MM/DD/YY[~size]`.
    #[arg(value_name = "BOTTLE")]
    pub line: String,

    /// Add the bottle even if the same beer is cellared in another size.
    #[arg(long)]
    pub force: bool,
}

/// Run the add command.
pub fn run(args: &AddArgs, out: &mut dyn Printer) -> Result<Status> {
    let beer = match Beer::parse(&args.line) {
        Ok(beer) => beer,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(Status::Failure);
        }
    };

    let mut cellar = match open_cellar(&args.file, &Loader::new())? {
        Some(result) => result.cellar,
        None => {
            debug!(path = %args.file.display(), "starting a new cellar");
            Cellar::new(args.file.display().to_string())
        }
    };

    let cost = cellar.insert_cost(&beer);
    if cost.is_rejection() && !args.force {
        eprintln!(
            "error: {}; use --force to add it anyway",
            describe(&cellar, &beer, cost)
        );
        return Ok(Status::Failure);
    }

    out.println(&describe(&cellar, &beer, cost));
    cellar.add(beer);

    write_cellar(&cellar, &args.file)
        .with_context(|| format!("cannot save cellar {}", args.file.display()))?;
    Ok(Status::Success)
}
