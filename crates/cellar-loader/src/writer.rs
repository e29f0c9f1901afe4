//! Writing a cellar back to disk.

use cellar_core::Cellar;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::LoadError;

/// Render the whole cellar file, one bottle per line in drinking order.
#[must_use]
pub fn format_cellar(cellar: &Cellar) -> String {
    let mut out = String::new();
    for beer in cellar {
        out.push_str(&beer.to_string());
        out.push('\n');
    }
    out
}

/// Write the cellar to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`LoadError::Write`] if the file cannot be written.
pub fn write_cellar(cellar: &Cellar, path: &Path) -> Result<(), LoadError> {
    fs::write(path, format_cellar(cellar)).map_err(|e| LoadError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bottles = cellar.len(), "saved cellar");
    Ok(())
}

/// Save the cellar to the file it is named after.
///
/// Failures are logged and otherwise ignored; see [`write_cellar`] to
/// handle them.
pub fn save_cellar(cellar: &Cellar) {
    save_cellar_to(cellar, cellar.name());
}

/// Save the cellar to `path`, logging and ignoring any failure.
pub fn save_cellar_to(cellar: &Cellar, path: impl AsRef<Path>) {
    if let Err(e) = write_cellar(cellar, path.as_ref()) {
        warn!(error = %e, "cellar not saved");
    }
}
