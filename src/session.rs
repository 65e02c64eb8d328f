//! Extraction session.
//!
//! A `Session` holds the current ordered list and the last user-facing
//! notice, and runs each user action against them. Every failure is
//! recovered here: it becomes a notice or a log line, and the session stays
//! usable for the next action.

use std::path::Path;

use crate::error::{Error, Result};
use crate::export::{self, ExportFormat};
use crate::handoff::Handoff;
use crate::options::Options;
use crate::order::sort_by_order;
use crate::platform::{select_share_target, Clipboard, ClipboardShare, LinkOpener, ShareRoute, ShareTarget};
use crate::record::VideoRecord;
use crate::watch::watch_url;

/// Shown when extraction is requested without any input.
pub const MSG_EMPTY_INPUT: &str = "Please paste the HTML from the logged in page.";
/// Shown when the input contains no marked elements.
pub const MSG_NO_VIDEOS: &str = "No video links found in the provided HTML.";
/// Shown when an action runs before any links were extracted.
pub const MSG_EXTRACT_FIRST: &str = "Extract video links first.";
/// Shown when the share fell back to the clipboard.
pub const MSG_SHARED_TO_CLIPBOARD: &str = "Video links copied to clipboard!";
/// Shown after copying the URL list.
pub const MSG_URLS_COPIED: &str = "Video URLs copied to clipboard!";
/// Shown for an export format other than text or pdf.
pub const MSG_UNSUPPORTED_FORMAT: &str = "Unsupported format. Please enter 'text' or 'pdf'.";

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something the user must fix or retry.
    Error,
    /// Progress or success.
    Info,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// The working state of one extraction session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: Options,
    videos: Vec<VideoRecord>,
    results_visible: bool,
    notice: Option<Notice>,
}

impl Session {
    /// Start an empty session.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Start a session, consuming the handoff.
    ///
    /// When the handoff carries captured markup it becomes the input and is
    /// extracted right away.
    #[must_use]
    pub fn initialize(options: Options, handoff: Handoff) -> Self {
        let mut session = Self::new(options);
        if let Some(html) = handoff.take() {
            tracing::debug!(bytes = html.len(), "processing captured page from handoff");
            session.extract(&html);
        }
        session
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The current ordered list.
    #[must_use]
    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Whether the results list should be shown.
    #[must_use]
    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// The most recent notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn post(&mut self, notice: Notice) -> Notice {
        self.notice = Some(notice.clone());
        notice
    }

    /// Extract, order and show the video links found in `input`.
    ///
    /// Blank input leaves the current list untouched. Input without any
    /// marked element clears the list and hides the results.
    pub fn extract(&mut self, input: &str) -> Notice {
        if input.trim().is_empty() {
            return self.post(Notice::error(MSG_EMPTY_INPUT));
        }

        let records = match crate::extract_videos(input, &self.options) {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(error = %err, "extraction failed");
                return self.post(Notice::error(err.to_string()));
            }
        };

        if records.is_empty() {
            self.videos.clear();
            self.results_visible = false;
            return self.post(Notice::error(MSG_NO_VIDEOS));
        }

        self.videos = sort_by_order(records);
        self.results_visible = true;
        let count = self.videos.len();
        self.post(Notice::info(format!(
            "Extracted {count} video link{}.",
            if count == 1 { "" } else { "s" }
        )))
    }

    fn ensure_videos(&self) -> Result<()> {
        if self.videos.is_empty() {
            Err(Error::NoVideos)
        } else {
            Ok(())
        }
    }

    fn require_videos(&mut self) -> Option<Notice> {
        let err = self.ensure_videos().err()?;
        Some(self.fail(&err))
    }

    /// Post the notice for a failed action.
    fn fail(&mut self, err: &Error) -> Notice {
        let notice = match err {
            Error::NoVideos => {
                tracing::warn!(error = %err, "action needs extracted video links");
                Notice::error(MSG_EXTRACT_FIRST)
            }
            Error::UnsupportedFormat(answer) => {
                tracing::debug!(%answer, "export aborted");
                Notice::error(MSG_UNSUPPORTED_FORMAT)
            }
            _ => {
                tracing::error!(error = %err, "action failed");
                Notice::error(format!("Export failed: {err}"))
            }
        };
        self.post(notice)
    }

    /// The current list as an HTML ordered list.
    #[must_use]
    pub fn render_html(&self) -> String {
        export::render_html(&self.videos, &self.options)
    }

    /// The current list as labeled text lines.
    #[must_use]
    pub fn render_text(&self) -> String {
        export::render_text(&self.videos, &self.options)
    }

    /// Open every watch URL, in list order.
    ///
    /// A URL that fails to open is logged and skipped.
    pub fn open_all(&mut self, opener: &mut dyn LinkOpener) -> Notice {
        if let Some(notice) = self.require_videos() {
            return notice;
        }

        let total = self.videos.len();
        let mut opened = 0usize;
        for record in &self.videos {
            let url = watch_url(&self.options.watch_url_base, &record.id);
            match opener.open(&url) {
                Ok(()) => opened += 1,
                Err(err) => tracing::warn!(error = %err, "failed to open video link"),
            }
        }

        self.post(Notice::info(format!("Opened {opened} of {total} video links.")))
    }

    /// Share the labeled list.
    ///
    /// Uses `native` when it is available and the clipboard otherwise.
    /// Failures are logged only; a clipboard fallback success posts a
    /// notice.
    pub fn share(&mut self, native: &mut dyn ShareTarget, clipboard: &mut dyn Clipboard) -> Option<Notice> {
        if let Some(notice) = self.require_videos() {
            return Some(notice);
        }

        let block = export::labeled_block(&self.videos, &self.options);
        let mut fallback = ClipboardShare::new(clipboard);
        let target = select_share_target(native, &mut fallback);
        let route = target.route();

        match target.share(&self.options.share_title, &block) {
            Ok(()) if route == ShareRoute::ClipboardFallback => {
                Some(self.post(Notice::info(MSG_SHARED_TO_CLIPBOARD)))
            }
            Ok(()) => {
                tracing::info!(lines = self.videos.len(), "shared video links");
                None
            }
            Err(err) => {
                tracing::error!(error = %err, ?route, "error sharing video links");
                None
            }
        }
    }

    /// Copy the watch URLs, one per line, to the clipboard.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> Option<Notice> {
        if let Some(notice) = self.require_videos() {
            return Some(notice);
        }

        let block = export::url_block(&self.videos, &self.options);
        match clipboard.write_text(&block) {
            Ok(()) => Some(self.post(Notice::info(MSG_URLS_COPIED))),
            Err(err) => {
                tracing::error!(error = %err, "error copying video URLs");
                None
            }
        }
    }

    /// Export the labeled list as a file in `dir`.
    ///
    /// `answer` is the user's reply to the format prompt; `None` means the
    /// prompt was cancelled and nothing happens.
    pub fn export(&mut self, answer: Option<&str>, dir: &Path) -> Option<Notice> {
        let answer = answer?;
        let saved = self.ensure_videos().and_then(|()| {
            let format = answer.parse::<ExportFormat>()?;
            export::export_to_dir(&self.videos, format, dir, &self.options)
        });

        match saved {
            Ok(path) => Some(self.post(Notice::info(format!("Saved {}", path.display())))),
            Err(err) => Some(self.fail(&err)),
        }
    }
}
