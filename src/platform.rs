//! Platform facilities used by the export modes.
//!
//! Clipboard, share and link opening are reached through traits so the
//! session can pick an implementation at call time and tests can substitute
//! recording doubles.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Write-only clipboard access.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Clipboard` when the clipboard is unavailable.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Opens a URL in a new browsing context.
pub trait LinkOpener {
    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Open` when the platform refuses.
    fn open(&mut self, url: &str) -> Result<()>;
}

/// How a share request was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareRoute {
    /// Handed to a native share facility.
    Native,
    /// Copied to the clipboard because no native facility was available.
    ClipboardFallback,
}

/// A destination for shared text.
pub trait ShareTarget {
    /// Whether this target can be used right now.
    fn is_available(&self) -> bool;

    /// Which route this target represents.
    fn route(&self) -> ShareRoute;

    /// Share `text` under `title`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Share` or `Error::Clipboard` depending on the route.
    fn share(&mut self, title: &str, text: &str) -> Result<()>;
}

/// Pick the native target when it is available, otherwise the fallback.
pub fn select_share_target<'a>(
    native: &'a mut dyn ShareTarget,
    fallback: &'a mut dyn ShareTarget,
) -> &'a mut dyn ShareTarget {
    if native.is_available() {
        native
    } else {
        tracing::debug!("native share unavailable, falling back to clipboard");
        fallback
    }
}

// === System implementations ===

/// The desktop clipboard.
///
/// The handle is opened on first use and kept for the life of the value,
/// since some platforms drop clipboard contents when their owner goes away.
/// On X11 and Wayland that still loses the text once the process exits; a
/// holding clipboard blocks each write until another application takes
/// over the selection, which short-lived command-line callers need.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    hold: bool,
}

impl SystemClipboard {
    /// Create a clipboard handle; the platform clipboard is opened lazily.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard whose writes keep serving the text until another
    /// application replaces it. Only Linux and the BSDs block; elsewhere this
    /// behaves like `new`.
    #[must_use]
    pub fn holding() -> Self {
        Self {
            inner: None,
            hold: true,
        }
    }

    /// Whether writes block until the selection is taken over.
    #[must_use]
    pub fn holds_selection(&self) -> bool {
        self.hold
            && cfg!(all(
                unix,
                not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
            ))
    }
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))))]
fn set_text_held(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    clipboard.set().wait().text(text.to_owned())
}

#[cfg(not(all(unix, not(any(target_os = "macos", target_os = "android", target_os = "emscripten")))))]
fn set_text_held(clipboard: &mut arboard::Clipboard, text: &str) -> std::result::Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|err| Error::Clipboard(err.to_string()))?,
        };
        let written = if self.hold {
            tracing::debug!(bytes = text.len(), "holding clipboard selection");
            set_text_held(&mut clipboard, text)
        } else {
            clipboard.set_text(text.to_owned())
        };
        self.inner = Some(clipboard);
        written.map_err(|err| Error::Clipboard(err.to_string()))
    }
}

/// Opens links with the system's default browser.
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&mut self, url: &str) -> Result<()> {
        opener::open_browser(url).map_err(|err| Error::Open {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

/// Native share: pipes the text to an external program's standard input.
///
/// Available only when a program is configured. The title is passed in the
/// `VIDEO_LINKS_SHARE_TITLE` environment variable of the child.
#[derive(Debug, Clone, Default)]
pub struct CommandShare {
    argv: Vec<String>,
}

impl CommandShare {
    /// Build from a configured command line; `None` or empty means
    /// unavailable.
    #[must_use]
    pub fn new(argv: Option<Vec<String>>) -> Self {
        Self {
            argv: argv.unwrap_or_default(),
        }
    }
}

impl ShareTarget for CommandShare {
    fn is_available(&self) -> bool {
        !self.argv.is_empty()
    }

    fn route(&self) -> ShareRoute {
        ShareRoute::Native
    }

    fn share(&mut self, title: &str, text: &str) -> Result<()> {
        let Some((program, args)) = self.argv.split_first() else {
            return Err(Error::Share("no share command configured".to_string()));
        };

        let mut child = Command::new(program)
            .args(args)
            .env("VIDEO_LINKS_SHARE_TITLE", title)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|err| Error::Share(format!("{program}: {err}")))?;

        // Stdin is closed before waiting so the child sees end of input.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|err| Error::Share(format!("{program}: {err}")))?;
        if !status.success() {
            return Err(Error::Share(format!("{program} exited with {status}")));
        }

        match written {
            Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!(%program, "share command exited before reading all input");
                Ok(())
            }
            Err(err) => Err(Error::Share(format!("{program}: {err}"))),
            Ok(()) => Ok(()),
        }
    }
}

/// Share fallback: copies the text to a clipboard.
pub struct ClipboardShare<'c> {
    clipboard: &'c mut dyn Clipboard,
}

impl<'c> ClipboardShare<'c> {
    /// Share through `clipboard`.
    pub fn new(clipboard: &'c mut dyn Clipboard) -> Self {
        Self { clipboard }
    }
}

impl ShareTarget for ClipboardShare<'_> {
    fn is_available(&self) -> bool {
        true
    }

    fn route(&self) -> ShareRoute {
        ShareRoute::ClipboardFallback
    }

    fn share(&mut self, _title: &str, text: &str) -> Result<()> {
        self.clipboard.write_text(text)
    }
}
