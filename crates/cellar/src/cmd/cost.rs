//! `cellar cost`: show the insert cost of a bottle without adding it.

use anyhow::Result;
use cellar_core::{Beer, Cellar, InsertCost, Printer};
use cellar_loader::Loader;
use std::path::PathBuf;

use super::{open_cellar, Status};

/// Arguments for `cellar cost`.
#[derive(clap::Args, Debug)]
pub struct CostArgs {
    /// The cellar file to compare against. A missing file counts as empty.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// The candidate bottle, as `code~MM/DD/YY[~size]`.
    #[arg(value_name = "BOTTLE")]
    pub line: String,

    /// Print the cost as a single integer (32767 for an empty cellar,
    /// negative for an incompatible size).
    #[arg(long)]
    pub sentinel: bool,
}

/// Run the cost command.
pub fn run(args: &CostArgs, out: &mut dyn Printer) -> Result<Status> {
    let beer = match Beer::parse(&args.line) {
        Ok(beer) => beer,
        Err(e) => {
            eprintln!("error: {e}");
            return Ok(Status::Failure);
        }
    };

    let cellar = open_cellar(&args.file, &Loader::new())?.map_or_else(
        || Cellar::new(args.file.display().to_string()),
        |result| result.cellar,
    );

    let cost = cellar.insert_cost(&beer);
    if args.sentinel {
        out.println(&cost.as_sentinel().to_string());
    } else {
        out.println(&describe(&cellar, &beer, cost));
    }

    Ok(if cost.is_rejection() {
        Status::Failure
    } else {
        Status::Success
    })
}

/// One-line explanation of an insert cost.
pub(crate) fn describe(cellar: &Cellar, beer: &Beer, cost: InsertCost) -> String {
    match cost {
        InsertCost::Empty => format!("{beer}: first bottle in {}", cellar.name()),
        InsertCost::Incompatible => {
            format!("{beer}: {} is already cellared in another size", beer.code())
        }
        InsertCost::Cost(_) => format!(
            "{beer}: {cost} from its nearest neighbour, position {}",
            cellar.insertion_point(beer) + 1
        ),
    }
}
