//! Cellar file loader and writer.
//!
//! A cellar file holds one bottle per line in the form
//! `code~MM/DD/YY[~size]`. Loading replays every line through the same
//! cost-and-insert path used for live additions, so the resulting
//! [`Cellar`] is in drinking order regardless of the order of the lines.
//!
//! # Features
//!
//! - Lines that fail to parse are skipped and reported, not fatal
//! - Blank lines and `#` comment lines that are not bottles are ignored
//! - Optional strict mode that refuses bottles in a conflicting size
//! - Saving that never fails from the caller's point of view
//!
//! # Example
//!
//! ```ignore
//! use cellar_loader::{build_cellar, save_cellar};
//!
//! let cellar = build_cellar("home.cellar").expect("cellar file exists");
//! println!("{} bottles", cellar.len());
//! save_cellar(&cellar);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod writer;

pub use writer::{format_cellar, save_cellar, save_cellar_to, write_cellar};

use cellar_core::{Beer, Cellar, CellarError, InsertCost, ParseError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while reading or writing a cellar file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The cellar file could not be opened or read.
    #[error("failed to read cellar {path}: {source}")]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The cellar file could not be written.
    #[error("failed to write cellar {path}: {source}")]
    Write {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Why a line of the cellar file was left out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The line is not a valid bottle.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Strict mode refused a bottle in a conflicting size.
    #[error(transparent)]
    Incompatible(#[from] CellarError),
}

/// A line that did not make it into the cellar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_number: usize,
    /// The line as read, without terminator.
    pub text: String,
    /// Why the line was skipped.
    pub reason: SkipReason,
}

/// Result of loading a cellar file.
#[derive(Debug)]
pub struct LoadResult {
    /// The rebuilt cellar.
    pub cellar: Cellar,
    /// Lines left out of the cellar, in file order.
    pub skipped: Vec<SkippedLine>,
}

/// Cellar file loader.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    /// Refuse bottles whose size conflicts with the same beer already loaded.
    strict_sizes: bool,
    /// Name to give the cellar instead of the file path.
    name: Option<String>,
}

impl Loader {
    /// Create a new loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip bottles that conflict in size with an earlier bottle of the same
    /// beer, instead of loading them with a warning.
    #[must_use]
    pub const fn with_strict_sizes(mut self, enabled: bool) -> Self {
        self.strict_sizes = enabled;
        self
    }

    /// Name the loaded cellar. By default the cellar is named after the path
    /// it was loaded from, so saving it writes back to the same file.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Load a cellar file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read. Bad lines are
    /// collected in [`LoadResult::skipped`] instead.
    pub fn load(&self, path: &Path) -> Result<LoadResult, LoadError> {
        let source = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let name = self
            .name
            .clone()
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.load_str(name, &source))
    }

    /// Build a cellar from in-memory file contents.
    pub fn load_str(&self, name: impl Into<String>, source: &str) -> LoadResult {
        let mut cellar = Cellar::new(name);
        let mut skipped = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let beer = match Beer::parse(line) {
                Ok(beer) => beer,
                // A `#` line is a comment only when it is not a bottle.
                Err(_) if trimmed.starts_with('#') => continue,
                Err(e) => {
                    debug!(line_number, error = %e, "skipping cellar line");
                    skipped.push(SkippedLine {
                        line_number,
                        text: line.to_string(),
                        reason: e.into(),
                    });
                    continue;
                }
            };

            if let Err(e) = self.insert(&mut cellar, beer, line_number) {
                skipped.push(SkippedLine {
                    line_number,
                    text: line.to_string(),
                    reason: e.into(),
                });
            }
        }

        debug!(
            cellar = cellar.name(),
            bottles = cellar.len(),
            skipped = skipped.len(),
            "loaded cellar"
        );
        LoadResult { cellar, skipped }
    }

    fn insert(
        &self,
        cellar: &mut Cellar,
        beer: Beer,
        line_number: usize,
    ) -> Result<(), CellarError> {
        if self.strict_sizes {
            let cost = cellar.add_checked(beer).map_err(|e| {
                debug!(line_number, error = %e, "refusing bottle");
                e
            })?;
            debug!(line_number, %cost, "inserted bottle");
            return Ok(());
        }

        let cost = cellar.insert_cost(&beer);
        if cost == InsertCost::Incompatible {
            warn!(
                line_number,
                code = beer.code(),
                "bottle size conflicts with the same beer already in the cellar"
            );
        }
        debug!(line_number, %cost, "inserted bottle");
        cellar.add(beer);
        Ok(())
    }
}

/// Load a cellar file with the default loader.
pub fn load(path: &Path) -> Result<LoadResult, LoadError> {
    Loader::new().load(path)
}

/// Build a cellar from a file.
///
/// Returns `None` when the file cannot be opened, which is different from an
/// existing but empty file. Lines that fail to parse are dropped, so the
/// cellar may hold fewer bottles than the file has lines.
pub fn build_cellar(path: impl AsRef<Path>) -> Option<Cellar> {
    match load(path.as_ref()) {
        Ok(result) => Some(result.cellar),
        Err(e) => {
            debug!(error = %e, "no cellar built");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_str_orders_bottles() {
        let result = Loader::new().load_str("mem", "1~01/03/16\n2~01/01/16\n3~01/02/16\n");
        let codes: Vec<&str> = result.cellar.iter().map(Beer::code).collect();
        assert_eq!(codes, ["2", "3", "1"]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_load_str_skips_bad_lines() {
        let source = "1234~01/01/16~bomber\nnot a bottle\n1234~13/45/16\n1234~01/02/16\n";
        let result = Loader::new().load_str("mem", source);

        assert_eq!(result.cellar.len(), 2);
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.skipped[0].line_number, 2);
        assert!(matches!(
            result.skipped[0].reason,
            SkipReason::Parse(ParseError::MalformedLine { .. })
        ));
        assert_eq!(result.skipped[1].line_number, 3);
        assert!(matches!(
            result.skipped[1].reason,
            SkipReason::Parse(ParseError::MalformedDate { .. })
        ));
    }

    #[test]
    fn test_load_str_ignores_blank_and_comment_lines() {
        let source = "# my cellar\n\n1~01/01/16\n   \n2~01/02/16\n";
        let result = Loader::new().load_str("mem", source);
        assert_eq!(result.cellar.len(), 2);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_load_str_hash_prefixed_code_is_a_bottle() {
        let source = "#12~01/01/16~bomber\n# 12 bottles from the brewery\n#13~01/02/16\n";
        let result = Loader::new().load_str("mem", source);

        assert_eq!(result.cellar.len(), 2);
        assert!(result.skipped.is_empty());
        let codes: Vec<&str> = result.cellar.iter().map(Beer::code).collect();
        assert_eq!(codes, ["#12", "#13"]);
        assert_eq!(result.cellar.beers()[0].size(), Some("bomber"));
    }

    #[test]
    fn test_load_str_keeps_conflicting_sizes_by_default() {
        let source = "1234~01/01/16~bomber\n1234~01/02/16~small\n";
        let result = Loader::new().load_str("mem", source);
        assert_eq!(result.cellar.len(), 2);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_load_str_strict_sizes() {
        let source = "1234~01/01/16~bomber\n1234~01/02/16~small\n1234~01/03/16\n";
        let result = Loader::new()
            .with_strict_sizes(true)
            .load_str("mem", source);

        assert_eq!(result.cellar.len(), 2);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].line_number, 2);
        assert_eq!(result.skipped[0].text, "1234~01/02/16~small");
        assert!(matches!(
            result.skipped[0].reason,
            SkipReason::Incompatible(CellarError::IncompatibleSize { .. })
        ));
    }

    #[test]
    fn test_load_names_cellar_after_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "1~01/01/16").unwrap();
        file.flush().unwrap();

        let result = load(file.path()).unwrap();
        assert_eq!(result.cellar.name(), file.path().display().to_string());

        let named = Loader::new().with_name("home").load(file.path()).unwrap();
        assert_eq!(named.cellar.name(), "home");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("does/not/exist.cellar")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.cellar"));
    }

    #[test]
    fn test_build_cellar_empty_file_is_some() {
        let file = NamedTempFile::new().unwrap();
        let cellar = build_cellar(file.path()).expect("empty file still builds a cellar");
        assert!(cellar.is_empty());
    }

    #[test]
    fn test_build_cellar_missing_file_is_none() {
        assert!(build_cellar("madeupfilename.cellar").is_none());
    }
}
