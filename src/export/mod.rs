//! Export of the ordered video list.
//!
//! # Module Structure
//!
//! - `render`: HTML and terminal renderings of the list
//! - `text`: plain-text file export
//! - `pdf`: PDF layout and file export
//!
//! Every mode reads the full ordered list. The two text blocks built here are
//! shared between modes: the labeled block (share, export) and the URL block
//! (copy, open-all).

pub mod pdf;
pub mod render;
pub mod text;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::record::VideoRecord;
use crate::watch::watch_url;

pub use pdf::{layout_pdf, wrap_lines};
pub use render::{render_html, render_text};

/// File format chosen at the export prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Plain-text `.txt` file.
    Text,
    /// Generated `.pdf` document.
    Pdf,
}

impl FromStr for ExportFormat {
    type Err = Error;

    /// Case-insensitive match against `text` and `pdf`. No trimming: the
    /// answer must be exactly one of the two words.
    fn from_str(answer: &str) -> Result<Self> {
        match answer.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            _ => Err(Error::UnsupportedFormat(answer.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Pdf => f.write_str("pdf"),
        }
    }
}

/// One `"{order}. {subject}: {url}"` line.
#[must_use]
pub fn labeled_line(record: &VideoRecord, options: &Options) -> String {
    format!(
        "{}. {}: {}",
        record.order,
        record.subject,
        watch_url(&options.watch_url_base, &record.id)
    )
}

/// Labeled lines joined with `\n`, followed by the appended note (after a
/// blank line) when one is configured.
#[must_use]
pub fn labeled_block(records: &[VideoRecord], options: &Options) -> String {
    let mut block = records
        .iter()
        .map(|record| labeled_line(record, options))
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(note) = options.appended_note.as_deref().filter(|n| !n.is_empty()) {
        block.push_str("\n\n");
        block.push_str(note);
    }
    block
}

/// Watch URLs only, one per line.
#[must_use]
pub fn url_block(records: &[VideoRecord], options: &Options) -> String {
    records
        .iter()
        .map(|record| watch_url(&options.watch_url_base, &record.id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the labeled block in `format` into `dir`, returning the file path.
///
/// # Errors
///
/// Returns `Error::NoVideos` for an empty list (no file is written),
/// `Error::Io` when the file cannot be written and `Error::Pdf` when the PDF
/// cannot be generated.
pub fn export_to_dir(
    records: &[VideoRecord],
    format: ExportFormat,
    dir: &Path,
    options: &Options,
) -> Result<PathBuf> {
    if records.is_empty() {
        return Err(Error::NoVideos);
    }
    let block = labeled_block(records, options);
    match format {
        ExportFormat::Text => text::save_text(&block, &dir.join(&options.text_file_name)),
        ExportFormat::Pdf => pdf::save_pdf(&block, &dir.join(&options.pdf_file_name), options),
    }
}
