//! Error types for video-links-extractor.
//!
//! This module defines the errors returned by extraction and export
//! operations. None of them is fatal: the session layer turns each one into
//! a user-facing notice or a log line.

/// Error type for extraction and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input was empty or whitespace-only; extraction was not attempted.
    #[error("No HTML input provided")]
    EmptyInput,

    /// There are no extracted video links to act on.
    #[error("No video links available")]
    NoVideos,

    /// Export format answer was neither `text` nor `pdf`.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Clipboard access failed.
    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    /// Native share facility failed.
    #[error("Sharing failed: {0}")]
    Share(String),

    /// A watch link could not be opened.
    #[error("Failed to open {url}: {reason}")]
    Open {
        /// The watch URL that failed to open.
        url: String,
        /// Platform-reported reason.
        reason: String,
    },

    /// PDF generation failed.
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// Writing an export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options failed validation.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for extraction and export operations.
pub type Result<T> = std::result::Result<T, Error>;
