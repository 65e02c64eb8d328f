//! Configuration options for extraction and export.
//!
//! The `Options` struct names the marker attributes to read, the watch URL
//! template, and the knobs of each export mode.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::error::{Error, Result};

/// Attribute names as the HTML parser produces them: no whitespace, quotes,
/// `>`, `/` or `=`, and no ASCII uppercase (names are lowercased on parse).
#[allow(clippy::expect_used)]
static ATTRIBUTE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^\s"'>/=A-Z\x00-\x1F]+$"#).expect("valid regex")
});

/// Configuration options for extraction and export.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard attribute names and YouTube watch links.
///
/// # Example
///
/// ```rust
/// use video_links_extractor::Options;
///
/// let options = Options {
///     fallback_subject: "Untitled".to_string(),
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Attribute whose value is the video identifier.
    ///
    /// Elements without it (or with it empty) produce no record.
    ///
    /// Default: `"data-vid"`
    pub id_attribute: String,

    /// Attribute holding the human-readable label.
    ///
    /// Default: `"data-nname"`
    pub subject_attribute: String,

    /// Attribute holding the integer sort key.
    ///
    /// Default: `"data-vit"`
    pub order_attribute: String,

    /// Label used when the subject attribute is missing or empty.
    ///
    /// Default: `"No Subject"`
    pub fallback_subject: String,

    /// Watch URL prefix; the video id is appended verbatim.
    ///
    /// Default: `"https://www.youtube.com/watch?v="`
    pub watch_url_base: String,

    /// Title passed to the share facility.
    ///
    /// Default: `"Video Links"`
    pub share_title: String,

    /// Program (and arguments) acting as the native share facility.
    ///
    /// The shared text is written to its standard input. When `None` the
    /// clipboard fallback is used.
    ///
    /// Default: `None`
    pub share_command: Option<Vec<String>>,

    /// Free-form note appended after a blank line to shared and exported
    /// text.
    ///
    /// Default: `None`
    pub appended_note: Option<String>,

    /// File name of the plain-text export.
    ///
    /// Default: `"video_links.txt"`
    pub text_file_name: String,

    /// File name of the PDF export.
    ///
    /// Default: `"video_links.pdf"`
    pub pdf_file_name: String,

    /// PDF font size in points.
    ///
    /// Default: `11`
    pub pdf_font_size: u16,

    /// PDF page margin in millimetres.
    ///
    /// Default: `10`
    pub pdf_margin_mm: u16,

    /// Width of the PDF text column in millimetres.
    ///
    /// Default: `180`
    pub pdf_text_width_mm: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            id_attribute: "data-vid".to_string(),
            subject_attribute: "data-nname".to_string(),
            order_attribute: "data-vit".to_string(),
            fallback_subject: "No Subject".to_string(),
            watch_url_base: "https://www.youtube.com/watch?v=".to_string(),
            share_title: "Video Links".to_string(),
            share_command: None,
            appended_note: None,
            text_file_name: "video_links.txt".to_string(),
            pdf_file_name: "video_links.pdf".to_string(),
            pdf_font_size: 11,
            pdf_margin_mm: 10,
            pdf_text_width_mm: 180,
        }
    }
}

impl Options {
    /// Check that attribute names are valid parsed HTML names and that the watch
    /// URL base is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` describing the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, name) in [
            ("id_attribute", &self.id_attribute),
            ("subject_attribute", &self.subject_attribute),
            ("order_attribute", &self.order_attribute),
        ] {
            if !ATTRIBUTE_NAME.is_match(name) {
                return Err(Error::InvalidOptions(format!(
                    "{field} is not a valid attribute name: {name:?}"
                )));
            }
        }

        let base = Url::parse(&self.watch_url_base).map_err(|err| {
            Error::InvalidOptions(format!("watch_url_base {:?}: {err}", self.watch_url_base))
        })?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(Error::InvalidOptions(format!(
                "watch_url_base must be http(s): {:?}",
                self.watch_url_base
            )));
        }

        if self.pdf_font_size == 0 {
            return Err(Error::InvalidOptions("pdf_font_size must be positive".to_string()));
        }

        Ok(())
    }
}
