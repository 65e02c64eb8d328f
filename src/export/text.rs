//! Plain-text file export.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Write `block` to `path` as UTF-8 text.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be written.
pub fn save_text(block: &str, path: &Path) -> Result<PathBuf> {
    fs::write(path, block)?;
    tracing::info!(path = %path.display(), bytes = block.len(), "wrote text export");
    Ok(path.to_path_buf())
}
