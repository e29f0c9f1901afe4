//! `cellar next`: show the next bottles to drink.

use anyhow::Result;
use cellar_core::{Beer, Printer, DATE_FORMAT};
use cellar_loader::Loader;
use chrono::NaiveDate;
use std::path::PathBuf;

use super::{open_cellar, Status};

/// Arguments for `cellar next`.
#[derive(clap::Args, Debug)]
pub struct NextArgs {
    /// The cellar file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How many bottles to show.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Only show bottles ready on or before this date (MM/DD/YY).
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub ready_by: Option<NaiveDate>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| format!("expected MM/DD/YY: {e}"))
}

/// Run the next command.
pub fn run(args: &NextArgs, out: &mut dyn Printer) -> Result<Status> {
    let Some(result) = open_cellar(&args.file, &Loader::new())? else {
        eprintln!("error: no cellar at {}", args.file.display());
        return Ok(Status::Failure);
    };
    let cellar = result.cellar;

    let mut cursor = cellar.cursor();
    let mut shown = 0;
    while shown < args.count {
        let Some(beer) = cursor.next() else {
            break;
        };
        if args.ready_by.is_some_and(|date| beer.ready_date() > date) {
            break;
        }
        out.println(&line(beer));
        shown += 1;
    }

    if shown == 0 {
        out.println("nothing to drink");
    }
    Ok(Status::Success)
}

fn line(beer: &Beer) -> String {
    match beer.size() {
        Some(size) => format!(
            "{} ({size}) ready {}",
            beer.code(),
            beer.ready_date().format(DATE_FORMAT)
        ),
        None => format!(
            "{} ready {}",
            beer.code(),
            beer.ready_date().format(DATE_FORMAT)
        ),
    }
}
