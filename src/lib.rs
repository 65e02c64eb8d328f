//! # video-links-extractor
//!
//! Extracts video watch links from a saved HTML page.
//!
//! Elements carrying a video-id marker attribute (`data-vid` by default) are
//! collected in document order, ordered by their explicit order attribute,
//! and exported as an HTML list, text blocks, a `.txt` file or a `.pdf`
//! document.
//!
//! ## Quick Start
//!
//! ```rust
//! use video_links_extractor::{collect_videos, export, Options};
//!
//! let html = r#"<div data-vid="a1" data-nname="Math" data-vit="2"></div>
//! <div data-vid="b2" data-nname="Sci" data-vit="1"></div>"#;
//!
//! let options = Options::default();
//! let videos = collect_videos(html, &options)?;
//! assert_eq!(videos[0].id, "b2");
//! assert_eq!(
//!     export::url_block(&videos, &options),
//!     "https://www.youtube.com/watch?v=b2\nhttps://www.youtube.com/watch?v=a1"
//! );
//! # Ok::<(), video_links_extractor::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Extract**: `extract_videos` parses the markup and reads the id, label
//!   and order attributes with explicit defaults
//! - **Order**: `order::sort_by_order` sorts stably by the order attribute
//! - **Export**: the `export` module renders and writes the ordered list
//! - **Session**: `Session` runs user actions and turns failures into notices

mod error;
mod extract;
mod options;
mod record;

/// DOM query adapter with typed attribute accessors.
pub mod dom;

/// Character decoding for saved pages.
pub mod encoding;

/// Stable ordering of extracted records.
pub mod order;

/// Watch URL construction.
pub mod watch;

/// HTML, text and PDF export.
pub mod export;

/// Clipboard, share and browser facilities.
pub mod platform;

/// One-shot handoff of captured markup.
pub mod handoff;

/// Bookmarklet install helper.
pub mod bookmarklet;

/// Session state and user actions.
pub mod session;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::parse_order;
pub use handoff::Handoff;
pub use options::Options;
pub use record::VideoRecord;
pub use session::{Notice, NoticeKind, Session};

/// Extracts video records from an HTML string, in document order.
///
/// # Errors
///
/// Returns `Error::EmptyInput` for empty or whitespace-only input; parsing is
/// not attempted. A page without any marked element gives `Ok` with an empty
/// vector.
///
/// # Example
///
/// ```rust
/// use video_links_extractor::{extract_videos, Options};
///
/// let html = r#"<a data-vid="x9">no label</a>"#;
/// let videos = extract_videos(html, &Options::default())?;
/// assert_eq!(videos[0].subject, "No Subject");
/// assert_eq!(videos[0].order, 0);
/// # Ok::<(), video_links_extractor::Error>(())
/// ```
pub fn extract_videos(html: &str, options: &Options) -> Result<Vec<VideoRecord>> {
    extract::extract_records(html, options)
}

/// Extracts video records from page bytes with automatic charset detection.
///
/// # Errors
///
/// Same as [`extract_videos`].
pub fn extract_videos_bytes(html: &[u8], options: &Options) -> Result<Vec<VideoRecord>> {
    let html = encoding::decode_page(html);
    extract_videos(&html, options)
}

/// Extracts video records and sorts them by their order attribute.
///
/// # Errors
///
/// Same as [`extract_videos`].
pub fn collect_videos(html: &str, options: &Options) -> Result<Vec<VideoRecord>> {
    extract_videos(html, options).map(order::sort_by_order)
}
