//! `cellar list`: print the cellar in drinking order.

use anyhow::Result;
use cellar_core::{Beer, Printer};
use cellar_loader::Loader;
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

use super::{open_cellar, Status};

/// Output format for listings.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Arguments for `cellar list`.
#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// The cellar file to list.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// JSON form of a cellar listing.
#[derive(Debug, Serialize)]
pub struct JsonCellar<'a> {
    /// Cellar name
    pub name: &'a str,
    /// Number of bottles
    pub count: usize,
    /// Bottles in drinking order
    pub bottles: &'a [Beer],
}

/// Run the list command.
pub fn run(args: &ListArgs, out: &mut dyn Printer) -> Result<Status> {
    let Some(result) = open_cellar(&args.file, &Loader::new())? else {
        eprintln!("error: no cellar at {}", args.file.display());
        return Ok(Status::Failure);
    };
    let cellar = result.cellar;

    match args.format {
        OutputFormat::Text => cellar.print(out),
        OutputFormat::Json => {
            let json = JsonCellar {
                name: cellar.name(),
                count: cellar.len(),
                bottles: cellar.beers(),
            };
            out.println(&serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(Status::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_text() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("home.cellar");
        fs::write(&file, "2~01/02/16~small\n1~01/01/16\n").unwrap();

        let mut lines: Vec<String> = Vec::new();
        let args = ListArgs {
            file,
            format: OutputFormat::Text,
        };
        let code = run(&args, &mut lines).unwrap();

        assert_eq!(code, Status::Success);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('1'));
        assert!(lines[1].starts_with('2'));
        assert!(lines[2].starts_with("2 bottles in"));
    }

    #[test]
    fn test_list_json() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("home.cellar");
        fs::write(&file, "1234~01/01/16~bomber\n").unwrap();

        let mut lines: Vec<String> = Vec::new();
        let args = ListArgs {
            file,
            format: OutputFormat::Json,
        };
        run(&args, &mut lines).unwrap();

        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["bottles"][0]["code"], "1234");
        assert_eq!(value["bottles"][0]["ready_date"], "2016-01-01");
        assert_eq!(value["bottles"][0]["size"], "bomber");
    }

    #[test]
    fn test_list_missing_file() {
        let dir = TempDir::new().unwrap();
        let args = ListArgs {
            file: dir.path().join("missing.cellar"),
            format: OutputFormat::Text,
        };
        let mut lines: Vec<String> = Vec::new();
        assert_eq!(run(&args, &mut lines).unwrap(), Status::Failure);
        assert!(lines.is_empty());
    }
}
